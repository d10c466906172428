//! Convenience re-exports for common usage.
//!
//! # Example
//!
//! ```ignore
//! use reinhardt_factory::prelude::*;
//!
//! let factory = ModelFactory::<Author>::builder().seed(1).build()?;
//! ```

// Error types
pub use crate::error::{FactoryError, FactoryResult};

// Schema declarations
pub use crate::schema::{
	Choice, ChoiceDeclaration, ChoiceEnum, DeclaredDefault, FieldKind, Model, ModelOptions,
	ModelRef, Persistable, SchemaField,
};
pub use crate::value::{FieldValue, FromFieldValue, Record};

// Adapter types
pub use crate::adapter::{SchemaAdapter, flatten_choices};
pub use crate::meta::{Annotation, Constraints, DefaultValue, FieldMeta, ScalarType};

// Factory types
pub use crate::config::FactoryConfig;
pub use crate::factory::{
	FactoryBuilder, ModelFactory, ModelSyncPersistence, RelatedFactory, SyncPersistence,
	register_factory,
};
pub use crate::providers::{Provider, ProviderMap};
