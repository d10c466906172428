//! Normalized field descriptions.
//!
//! [`FieldMeta`] is what the value generator works from: it no longer knows
//! about ORM field classes, only about the semantic type to produce, an
//! optional default and a set of value constraints.

use std::sync::Arc;

use crate::schema::{FieldKind, ModelRef};
use crate::value::FieldValue;

/// Scalar types the generic generator knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
	Integer,
	/// 16-bit integer column.
	SmallInteger,
	Float,
	Decimal,
	Boolean,
	Text,
	Bytes,
	Date,
	DateTime,
	Duration,
}

/// Semantic type a field's value is generated for.
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
	/// Built-in scalar type.
	Scalar(ScalarType),
	/// Unmapped field kind, left to the provider map.
	Kind(FieldKind),
	/// One of a fixed, ordered set of values.
	Literal(Vec<FieldValue>),
	/// Instance of a related model.
	Related(ModelRef),
	/// The inner type or `Null`.
	Optional(Box<Annotation>),
}

impl Annotation {
	pub fn optional(inner: Annotation) -> Self {
		Self::Optional(Box::new(inner))
	}

	pub fn is_optional(&self) -> bool {
		matches!(self, Self::Optional(_))
	}

	/// Returns the annotation with any optional wrapper removed.
	pub fn unwrap_optional(&self) -> &Annotation {
		match self {
			Self::Optional(inner) => inner.unwrap_optional(),
			other => other,
		}
	}
}

/// Value constraints for the generic generator. `None` means unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
	/// Upper bound on string or byte length.
	pub max_length: Option<u32>,
	pub decimal_places: Option<u32>,
	pub max_digits: Option<u32>,
	/// Regular expression values must match.
	pub pattern: Option<String>,
}

impl Constraints {
	pub fn is_empty(&self) -> bool {
		self.max_length.is_none()
			&& self.decimal_places.is_none()
			&& self.max_digits.is_none()
			&& self.pattern.is_none()
	}
}

/// Default of a field description.
///
/// `Absent` is distinct from `Value(FieldValue::Null)`, which is a declared
/// null default.
#[derive(Clone, Default)]
pub enum DefaultValue {
	#[default]
	Absent,
	Value(FieldValue),
	Callable(Arc<dyn Fn() -> FieldValue + Send + Sync>),
}

impl DefaultValue {
	pub fn is_absent(&self) -> bool {
		matches!(self, Self::Absent)
	}

	/// Produces the default value, or `None` when there is none.
	pub fn resolve(&self) -> Option<FieldValue> {
		match self {
			Self::Absent => None,
			Self::Value(value) => Some(value.clone()),
			Self::Callable(f) => Some(f()),
		}
	}
}

impl std::fmt::Debug for DefaultValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Absent => f.write_str("Absent"),
			Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
			Self::Callable(_) => f.write_str("Callable(..)"),
		}
	}
}

/// Normalized description of one model field.
#[derive(Debug, Clone)]
pub struct FieldMeta {
	pub name: String,
	/// Declared kind, used to look up a provider.
	pub kind: FieldKind,
	pub annotation: Annotation,
	pub default: DefaultValue,
	pub constraints: Constraints,
}
