//! ORM schema boundary.
//!
//! Models describe themselves to factories through [`Model::options`], which
//! returns the ordered list of [`SchemaField`]s the ORM declares for the model.
//! Factories only read this metadata; they never modify it.

pub mod choices;
pub mod field;
pub mod kind;
pub mod model;

pub use choices::{Choice, ChoiceDeclaration, ChoiceEnum};
pub use field::{DeclaredDefault, SchemaField};
pub use kind::FieldKind;
pub use model::{Model, ModelOptions, ModelRef, Persistable};
