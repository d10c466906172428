//! Declared model fields.

use std::fmt;
use std::sync::Arc;

use super::choices::ChoiceDeclaration;
use super::kind::FieldKind;
use super::model::{Model, ModelRef};
use crate::value::FieldValue;

/// Default value declared on a field.
#[derive(Clone)]
pub enum DeclaredDefault {
	/// Fixed value. `FieldValue::Null` is a legitimate default.
	Value(FieldValue),
	/// Callable evaluated each time a default is needed.
	Callable(Arc<dyn Fn() -> FieldValue + Send + Sync>),
}

impl DeclaredDefault {
	/// Produces the default value, invoking the callable if there is one.
	pub fn resolve(&self) -> FieldValue {
		match self {
			Self::Value(value) => value.clone(),
			Self::Callable(f) => f(),
		}
	}
}

impl fmt::Debug for DeclaredDefault {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
			Self::Callable(_) => f.write_str("Callable(..)"),
		}
	}
}

/// A field as declared on a model.
///
/// # Examples
///
/// ```
/// use reinhardt_factory::schema::{FieldKind, SchemaField};
///
/// let field = SchemaField::new("title", FieldKind::CharField)
///     .max_length(120)
///     .null(true);
/// assert_eq!(field.max_length, Some(120));
/// assert!(field.null);
/// assert!(!field.is_relation());
/// ```
#[derive(Debug, Clone)]
pub struct SchemaField {
	pub name: String,
	pub kind: FieldKind,
	pub null: bool,
	pub primary_key: bool,
	pub max_length: Option<u32>,
	pub max_digits: Option<u32>,
	pub decimal_places: Option<u32>,
	pub choices: Option<ChoiceDeclaration>,
	pub default: Option<DeclaredDefault>,
	related_model: Option<ModelRef>,
}

impl SchemaField {
	/// Declares a non-relation field of the given kind.
	///
	/// The kind's implicit maximum length, if any, is applied.
	pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
		Self {
			name: name.into(),
			max_length: kind.default_max_length(),
			kind,
			null: false,
			primary_key: false,
			max_digits: None,
			decimal_places: None,
			choices: None,
			default: None,
			related_model: None,
		}
	}

	/// Declares a many-to-one relation to `M`.
	pub fn foreign_key<M: Model>(name: impl Into<String>) -> Self {
		Self::relation(name, FieldKind::ForeignKey, ModelRef::of::<M>())
	}

	/// Declares a one-to-one relation to `M`.
	pub fn one_to_one<M: Model>(name: impl Into<String>) -> Self {
		Self::relation(name, FieldKind::OneToOneField, ModelRef::of::<M>())
	}

	fn relation(name: impl Into<String>, kind: FieldKind, related: ModelRef) -> Self {
		Self {
			related_model: Some(related),
			..Self::new(name, kind)
		}
	}

	pub fn null(mut self, null: bool) -> Self {
		self.null = null;
		self
	}

	pub fn primary_key(mut self) -> Self {
		self.primary_key = true;
		self
	}

	pub fn max_length(mut self, max_length: u32) -> Self {
		self.max_length = Some(max_length);
		self
	}

	/// Sets decimal precision and scale.
	pub fn decimal(mut self, max_digits: u32, decimal_places: u32) -> Self {
		self.max_digits = Some(max_digits);
		self.decimal_places = Some(decimal_places);
		self
	}

	pub fn choices(mut self, choices: ChoiceDeclaration) -> Self {
		self.choices = Some(choices);
		self
	}

	pub fn default_value(mut self, value: impl Into<FieldValue>) -> Self {
		self.default = Some(DeclaredDefault::Value(value.into()));
		self
	}

	pub fn default_with<F>(mut self, f: F) -> Self
	where
		F: Fn() -> FieldValue + Send + Sync + 'static,
	{
		self.default = Some(DeclaredDefault::Callable(Arc::new(f)));
		self
	}

	/// Returns true when the field references another model.
	pub fn is_relation(&self) -> bool {
		self.related_model.is_some()
	}

	pub fn related_model(&self) -> Option<&ModelRef> {
		self.related_model.as_ref()
	}

	pub fn has_default(&self) -> bool {
		self.default.is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(FieldKind::SlugField, Some(50))]
	#[case(FieldKind::EmailField, Some(254))]
	#[case(FieldKind::IntegerField, None)]
	fn test_kind_max_length_applied(#[case] kind: FieldKind, #[case] expected: Option<u32>) {
		let field = SchemaField::new("field", kind);
		assert_eq!(field.max_length, expected);
	}

	#[rstest]
	fn test_explicit_max_length_overrides_kind() {
		let field = SchemaField::new("slug", FieldKind::SlugField).max_length(10);
		assert_eq!(field.max_length, Some(10));
	}

	#[rstest]
	fn test_null_default_is_declared() {
		let field = SchemaField::new("nickname", FieldKind::CharField).default_value(FieldValue::Null);
		assert!(field.has_default());
		assert_eq!(field.default.unwrap().resolve(), FieldValue::Null);
	}

	#[rstest]
	fn test_callable_default_resolves() {
		let field = SchemaField::new("count", FieldKind::IntegerField).default_with(|| 7.into());
		assert_eq!(field.default.unwrap().resolve(), FieldValue::Int(7));
	}
}
