//! Translation from ORM field declarations to normalized field descriptions.
//!
//! [`SchemaAdapter::model_fields`] walks a model's fields in declaration order
//! and produces one [`FieldMeta`] per field:
//!
//! - the annotation from [`resolve_annotation`]
//! - the default from [`resolve_default`]
//! - the constraints from [`resolve_constraints`]
//!
//! Nothing is cached; every call reads the model options again.

pub mod annotation;
pub mod constraints;
pub mod defaults;
pub mod flatten;

pub use annotation::{resolve_annotation, scalar_type};
pub use constraints::{SLUG_PATTERN, resolve_constraints};
pub use defaults::resolve_default;
pub use flatten::{FlattenChoices, flatten_choices};

use crate::meta::FieldMeta;
use crate::providers::ProviderMap;
use crate::schema::{Model, ModelOptions, SchemaField};

/// Adapts model schemas using a provider map to decide which fields are constrained.
#[derive(Debug, Clone, Copy)]
pub struct SchemaAdapter<'a> {
	providers: &'a ProviderMap,
}

impl<'a> SchemaAdapter<'a> {
	pub fn new(providers: &'a ProviderMap) -> Self {
		Self { providers }
	}

	/// Describes one field.
	pub fn field_meta(&self, field: &SchemaField) -> FieldMeta {
		FieldMeta {
			name: field.name.clone(),
			kind: field.kind.clone(),
			annotation: resolve_annotation(field),
			default: resolve_default(field),
			constraints: resolve_constraints(field, self.providers),
		}
	}

	/// Describes every field of a model, in declaration order.
	pub fn adapt(&self, options: &ModelOptions) -> Vec<FieldMeta> {
		let fields: Vec<FieldMeta> = options
			.get_fields()
			.iter()
			.map(|field| self.field_meta(field))
			.collect();
		tracing::debug!(model = %options.label, fields = fields.len(), "adapted model schema");
		fields
	}

	/// Describes every field of `M`.
	pub fn model_fields<M: Model>(&self) -> Vec<FieldMeta> {
		self.adapt(&M::options())
	}
}
