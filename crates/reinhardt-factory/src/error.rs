//! Error types for the factory module.
//!
//! This module defines the error types used throughout the reinhardt-factory crate.

use thiserror::Error;

use crate::schema::FieldKind;

/// Message carried by [`FactoryError::AsyncPersistenceUnsupported`].
pub const ASYNC_PERSISTENCE_UNSUPPORTED: &str = "ModelFactory does not support async persistence";

/// Errors that can occur while defining factories or building instances.
#[derive(Debug, Error)]
pub enum FactoryError {
	/// A factory was bound to a model marked abstract.
	#[error("Abstract model {0} cannot be instantiated.")]
	AbstractModel(String),

	/// Asynchronous creation was requested.
	#[error("ModelFactory does not support async persistence")]
	AsyncPersistenceUnsupported,

	/// Error raised by the store while saving an instance.
	#[error(transparent)]
	Store(Box<dyn std::error::Error + Send + Sync>),

	/// No provider or generic generator handles the field's kind.
	#[error("Unsupported field kind for {field}: {kind}")]
	UnsupportedFieldKind {
		/// Field that could not be generated.
		field: String,
		/// Kind the field was declared with.
		kind: FieldKind,
	},

	/// A value was supplied for a field the model does not declare.
	#[error("Unknown field {field} for model {model}")]
	UnknownField {
		/// Model label.
		model: String,
		/// Offending field name.
		field: String,
	},

	/// A record did not contain a required field.
	#[error("Missing field: {0}")]
	MissingField(String),

	/// A field value had an unexpected type.
	#[error("Type mismatch: expected {expected}, found {found}")]
	TypeMismatch {
		/// Type that was requested.
		expected: &'static str,
		/// Type that was present.
		found: &'static str,
	},

	/// A literal annotation had no values to choose from.
	#[error("No choices to pick from for {0}")]
	EmptyChoices(String),

	/// A required relation chain is deeper than the configured limit.
	#[error("Relation depth exceeded while building {0}")]
	RelationDepthExceeded(String),

	/// A pattern constraint the generator cannot produce values for.
	#[error("Unsupported pattern: {0}")]
	UnsupportedPattern(String),

	/// A pattern constraint that is not a valid regular expression.
	#[error("Invalid pattern: {0}")]
	InvalidPattern(#[from] regex::Error),

	/// Factory configuration is invalid.
	#[error("Configuration error: {0}")]
	ConfigError(String),

	/// I/O operation failed.
	#[error("IO error: {0}")]
	IoError(#[from] std::io::Error),
}

impl FactoryError {
	/// Wraps an error raised by the store without altering its message or source.
	pub fn store<E>(error: E) -> Self
	where
		E: std::error::Error + Send + Sync + 'static,
	{
		Self::Store(Box::new(error))
	}
}

/// Result type alias for factory operations.
pub type FactoryResult<T> = Result<T, FactoryError>;
