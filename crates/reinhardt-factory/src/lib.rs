//! Test data factories for Reinhardt ORM models.
//!
//! This crate generates instances of ORM models from their field declarations:
//!
//! - **Schema Adapter**: Turns each declared field into a normalized description
//!   (annotation, default and constraints)
//! - **Value Generation**: Produces values honouring those descriptions, using
//!   per-kind providers where registered
//! - **Model Factories**: Build unsaved instances or create saved ones through
//!   synchronous persistence
//!
//! # Quick Start
//!
//! Describe a model:
//!
//! ```ignore
//! use reinhardt_factory::prelude::*;
//!
//! pub struct Author {
//!     pub id: Option<i64>,
//!     pub name: String,
//!     pub email: String,
//! }
//!
//! impl Model for Author {
//!     fn options() -> ModelOptions {
//!         ModelOptions::new("library.Author")
//!             .field(SchemaField::new("id", FieldKind::BigAutoField).primary_key().null(true))
//!             .field(SchemaField::new("name", FieldKind::CharField).max_length(40))
//!             .field(SchemaField::new("email", FieldKind::EmailField))
//!     }
//!
//!     fn from_record(mut record: Record) -> FactoryResult<Self> {
//!         Ok(Self {
//!             id: record.take("id")?,
//!             name: record.take("name")?,
//!             email: record.take("email")?,
//!         })
//!     }
//!
//!     fn to_record(&self) -> Record {
//!         Record::new()
//!             .with("id", self.id)
//!             .with("name", self.name.clone())
//!             .with("email", self.email.clone())
//!     }
//! }
//! ```
//!
//! Then build instances:
//!
//! ```ignore
//! let factory = ModelFactory::<Author>::new()?;
//! let author = factory.build()?;                    // In-memory instance
//! let saved = factory.create_sync()?;               // Saved through Persistable::save
//! let named = factory.build_with(Record::new().with("name", "Ursula"))?;
//! ```
//!
//! # Architecture
//!
//! - [`schema`] - Field and model declarations read by the adapter
//! - [`adapter`] - Choice flattening plus annotation, constraint and default resolution
//! - [`generate`] - The generic value engine
//! - [`providers`] - Per-kind value providers
//! - [`factory`] - [`ModelFactory`], persistence and the related-factory registry
//! - [`config`] - [`FactoryConfig`], loadable from TOML

#![warn(rustdoc::missing_crate_level_docs)]

pub mod adapter;
pub mod config;
pub mod error;
pub mod factory;
pub mod generate;
pub mod meta;
pub mod prelude;
pub mod providers;
pub mod schema;
pub mod value;

// Re-export commonly used types at crate root
pub use config::FactoryConfig;
pub use error::{FactoryError, FactoryResult};
pub use factory::{FactoryBuilder, ModelFactory, ModelSyncPersistence, SyncPersistence};
pub use meta::{Annotation, Constraints, DefaultValue, FieldMeta, ScalarType};
pub use schema::{FieldKind, Model, ModelOptions, Persistable, SchemaField};
pub use value::{FieldValue, Record};
