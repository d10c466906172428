//! Value generation from field descriptions.
//!
//! [`ValueGenerator`] is the generic engine behind every factory. For each
//! [`FieldMeta`] of a model it picks, in order: a caller-supplied value, the
//! declared default (when enabled), a related instance or choice when the field
//! declares one, a provider for the field kind, or the generic scalar generator
//! honouring the field's constraints.

pub mod pattern;
mod scalar;

pub use pattern::CharClassPattern;

use rand::Rng;
use rand::rngs::StdRng;

use crate::adapter::SchemaAdapter;
use crate::config::FactoryConfig;
use crate::error::{FactoryError, FactoryResult};
use crate::factory::registry;
use crate::meta::{Annotation, FieldMeta};
use crate::providers::ProviderMap;
use crate::schema::{ModelOptions, ModelRef};
use crate::value::{FieldValue, Record};

/// Generates records for models.
pub struct ValueGenerator<'a> {
	config: &'a FactoryConfig,
	providers: &'a ProviderMap,
	rng: &'a mut StdRng,
}

impl<'a> ValueGenerator<'a> {
	pub fn new(config: &'a FactoryConfig, providers: &'a ProviderMap, rng: &'a mut StdRng) -> Self {
		Self {
			config,
			providers,
			rng,
		}
	}

	/// Builds the field values of one instance of the model described by `options`.
	///
	/// `overrides` take precedence over anything generated. `depth` is the
	/// number of relations followed to reach this model.
	///
	/// # Errors
	///
	/// Returns [`FactoryError::ConfigError`] for an out-of-range configuration
	/// and [`FactoryError::UnknownField`] when an override names a field the
	/// model does not declare, before any value is generated.
	pub fn build_record(
		&mut self,
		options: &ModelOptions,
		mut overrides: Record,
		depth: usize,
	) -> FactoryResult<Record> {
		self.config.validate()?;
		if let Some(unknown) = overrides
			.names()
			.find(|name| options.get_field(name).is_none())
		{
			return Err(FactoryError::UnknownField {
				model: options.label.clone(),
				field: unknown.to_string(),
			});
		}

		let fields = SchemaAdapter::new(self.providers).adapt(options);
		let mut record = Record::new();
		for meta in fields {
			let value = match overrides.remove(&meta.name) {
				Some(value) => value,
				None => self.field_value(&meta, depth)?,
			};
			record.insert(meta.name, value);
		}
		Ok(record)
	}

	/// Produces a value for one field, using its default when enabled.
	pub fn field_value(&mut self, meta: &FieldMeta, depth: usize) -> FactoryResult<FieldValue> {
		if self.config.use_defaults {
			if let Some(value) = meta.default.resolve() {
				return Ok(value);
			}
		}
		self.generate(meta, &meta.annotation, depth)
	}

	fn generate(
		&mut self,
		meta: &FieldMeta,
		annotation: &Annotation,
		depth: usize,
	) -> FactoryResult<FieldValue> {
		match annotation {
			Annotation::Optional(inner) => {
				let exhausted = matches!(inner.unwrap_optional(), Annotation::Related(_))
					&& depth >= self.config.max_relation_depth;
				if exhausted
					|| (self.config.allow_none_optionals
						&& self.rng.gen_bool(self.config.none_probability))
				{
					return Ok(FieldValue::Null);
				}
				self.generate(meta, inner, depth)
			}
			Annotation::Related(model) => self.related(model, depth).map(FieldValue::Record),
			Annotation::Literal(values) => {
				if values.is_empty() {
					return Err(FactoryError::EmptyChoices(meta.name.clone()));
				}
				let index = self.rng.gen_range(0..values.len());
				Ok(values[index].clone())
			}
			Annotation::Kind(kind) => match self.providers.get(kind) {
				Some(provider) => Ok(provider(&mut *self.rng)),
				None => Err(FactoryError::UnsupportedFieldKind {
					field: meta.name.clone(),
					kind: kind.clone(),
				}),
			},
			// A provider registered for a scalar kind replaces generic generation.
			Annotation::Scalar(scalar) => match self.providers.get(&meta.kind) {
				Some(provider) => Ok(provider(&mut *self.rng)),
				None => {
					scalar::generate_scalar(*scalar, &meta.constraints, self.config, &mut *self.rng)
				}
			},
		}
	}

	// A factory registered for the related model is preferred over ad-hoc generation.
	fn related(&mut self, model: &ModelRef, depth: usize) -> FactoryResult<Record> {
		if depth >= self.config.max_relation_depth {
			return Err(FactoryError::RelationDepthExceeded(model.options().label));
		}

		if let Some(factory) = registry::get_factory_for(model) {
			tracing::trace!(model = %factory.model_label(), "using registered factory for relation");
			return factory.build_related(depth + 1);
		}

		let options = model.options();
		self.build_record(&options, Record::new(), depth + 1)
	}
}
