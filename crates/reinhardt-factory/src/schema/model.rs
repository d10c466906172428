//! Model metadata and instance contracts.

use std::any::{TypeId, type_name};
use std::fmt;

use super::field::SchemaField;
use crate::error::FactoryResult;
use crate::value::Record;

/// Model options, the factory-facing part of a model's `Meta`.
#[derive(Debug, Clone)]
pub struct ModelOptions {
	/// Model label (e.g., "blog.Author").
	pub label: String,
	/// Abstract models cannot be instantiated.
	pub is_abstract: bool,
	fields: Vec<SchemaField>,
}

impl ModelOptions {
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			is_abstract: false,
			fields: Vec::new(),
		}
	}

	/// Marks the model abstract.
	pub fn abstract_model(mut self) -> Self {
		self.is_abstract = true;
		self
	}

	/// Appends a field declaration.
	pub fn field(mut self, field: SchemaField) -> Self {
		self.fields.push(field);
		self
	}

	/// Appends the fields of a parent model.
	///
	/// Call before declaring the model's own fields so inherited fields come first.
	pub fn inherit(mut self, parent: &ModelOptions) -> Self {
		self.fields.extend(parent.fields.iter().cloned());
		self
	}

	/// Returns all fields in declaration order, inherited fields included.
	pub fn get_fields(&self) -> &[SchemaField] {
		&self.fields
	}

	pub fn get_field(&self, name: &str) -> Option<&SchemaField> {
		self.fields.iter().find(|field| field.name == name)
	}
}

/// A model type known to the ORM.
///
/// # Examples
///
/// ```
/// use reinhardt_factory::error::FactoryResult;
/// use reinhardt_factory::schema::{FieldKind, Model, ModelOptions, SchemaField};
/// use reinhardt_factory::value::Record;
///
/// struct Tag {
///     name: String,
/// }
///
/// impl Model for Tag {
///     fn options() -> ModelOptions {
///         ModelOptions::new("blog.Tag")
///             .field(SchemaField::new("name", FieldKind::CharField).max_length(20))
///     }
///
///     fn from_record(mut record: Record) -> FactoryResult<Self> {
///         Ok(Self { name: record.take("name")? })
///     }
///
///     fn to_record(&self) -> Record {
///         Record::new().with("name", self.name.clone())
///     }
/// }
///
/// assert_eq!(Tag::options().get_fields().len(), 1);
/// ```
pub trait Model: Sized + 'static {
	/// Returns the model's options and field declarations.
	fn options() -> ModelOptions;

	/// Constructs an unsaved instance from field values.
	fn from_record(record: Record) -> FactoryResult<Self>;

	/// Returns the instance's field values.
	fn to_record(&self) -> Record;
}

/// Model instance that can be saved to the store.
pub trait Persistable {
	type Error: std::error::Error + Send + Sync + 'static;

	/// Persists the instance, assigning or refreshing its primary key.
	fn save(&mut self) -> Result<(), Self::Error>;
}

/// Reference to a related model type.
#[derive(Clone, Copy)]
pub struct ModelRef {
	type_id: TypeId,
	type_name: &'static str,
	options: fn() -> ModelOptions,
}

impl ModelRef {
	pub fn of<M: Model>() -> Self {
		Self {
			type_id: TypeId::of::<M>(),
			type_name: type_name::<M>(),
			options: M::options,
		}
	}

	pub fn type_id(&self) -> TypeId {
		self.type_id
	}

	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	/// Reads the related model's options.
	pub fn options(&self) -> ModelOptions {
		(self.options)()
	}
}

impl PartialEq for ModelRef {
	fn eq(&self, other: &Self) -> bool {
		self.type_id == other.type_id
	}
}

impl Eq for ModelRef {}

impl fmt::Debug for ModelRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ModelRef").field(&self.type_name).finish()
	}
}
