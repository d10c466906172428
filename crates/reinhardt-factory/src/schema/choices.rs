//! Choice declarations.
//!
//! The ORM accepts several shapes for a field's `choices`: plain
//! `(value, label)` pairs, named groups of pairs, a value-to-label mapping, a
//! callable producing one of those, or an enumeration type.
//! [`ChoiceDeclaration::normalize`] turns all of them into one tree of
//! [`Choice`] nodes so nothing downstream has to look at the declared shape.

use std::fmt;
use std::sync::Arc;

use crate::value::FieldValue;

/// One entry of a choice sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Choice {
	/// Bare value without a label.
	Value(FieldValue),
	/// `(value, label)` pair.
	Pair(FieldValue, String),
	/// Named group of nested choices.
	Group(String, Vec<Choice>),
}

impl Choice {
	pub fn pair(value: impl Into<FieldValue>, label: impl Into<String>) -> Self {
		Self::Pair(value.into(), label.into())
	}

	pub fn group(label: impl Into<String>, choices: impl IntoIterator<Item = Choice>) -> Self {
		Self::Group(label.into(), choices.into_iter().collect())
	}
}

/// Enumeration usable as a choice set, like `TextChoices`/`IntegerChoices`.
///
/// # Examples
///
/// ```
/// use reinhardt_factory::schema::{ChoiceDeclaration, ChoiceEnum};
/// use reinhardt_factory::value::FieldValue;
///
/// #[derive(Clone, Copy)]
/// enum Status {
///     Draft,
///     Published,
/// }
///
/// impl ChoiceEnum for Status {
///     fn members() -> Vec<Self> {
///         vec![Status::Draft, Status::Published]
///     }
///
///     fn value(&self) -> FieldValue {
///         match self {
///             Status::Draft => "draft".into(),
///             Status::Published => "published".into(),
///         }
///     }
/// }
///
/// let choices = ChoiceDeclaration::from_enum::<Status>();
/// assert_eq!(choices.normalize().len(), 2);
/// ```
pub trait ChoiceEnum: Sized {
	/// Members in declaration order.
	fn members() -> Vec<Self>;

	/// Underlying value stored in the database for this member.
	fn value(&self) -> FieldValue;
}

type ChoiceCallable = Arc<dyn Fn() -> ChoiceDeclaration + Send + Sync>;

/// Choices as declared on a field.
#[derive(Clone)]
pub enum ChoiceDeclaration {
	/// Sequence of values, pairs and groups.
	Sequence(Vec<Choice>),
	/// Mapping from value to label, in insertion order.
	Mapping(Vec<(FieldValue, String)>),
	/// Zero-argument callable evaluated when the choices are read.
	Callable(ChoiceCallable),
	/// Member values of an enumeration type.
	Enumeration(Vec<FieldValue>),
}

impl ChoiceDeclaration {
	/// Declares choices as `(value, label)` pairs.
	pub fn pairs<V, L>(pairs: impl IntoIterator<Item = (V, L)>) -> Self
	where
		V: Into<FieldValue>,
		L: Into<String>,
	{
		Self::Sequence(
			pairs
				.into_iter()
				.map(|(value, label)| Choice::pair(value, label))
				.collect(),
		)
	}

	/// Declares choices as a value-to-label mapping.
	pub fn mapping<V, L>(entries: impl IntoIterator<Item = (V, L)>) -> Self
	where
		V: Into<FieldValue>,
		L: Into<String>,
	{
		Self::Mapping(
			entries
				.into_iter()
				.map(|(value, label)| (value.into(), label.into()))
				.collect(),
		)
	}

	pub fn callable<F>(f: F) -> Self
	where
		F: Fn() -> ChoiceDeclaration + Send + Sync + 'static,
	{
		Self::Callable(Arc::new(f))
	}

	pub fn from_enum<E: ChoiceEnum>() -> Self {
		Self::Enumeration(E::members().iter().map(E::value).collect())
	}

	/// Resolves the declaration into a single choice tree.
	///
	/// Callables are invoked once, mapping entries become pairs and
	/// enumeration members become bare values.
	pub fn normalize(&self) -> Vec<Choice> {
		match self {
			Self::Sequence(choices) => choices.clone(),
			Self::Mapping(entries) => entries
				.iter()
				.map(|(value, label)| Choice::Pair(value.clone(), label.clone()))
				.collect(),
			Self::Callable(f) => f().normalize(),
			Self::Enumeration(values) => values.iter().cloned().map(Choice::Value).collect(),
		}
	}
}

impl fmt::Debug for ChoiceDeclaration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Sequence(choices) => f.debug_tuple("Sequence").field(choices).finish(),
			Self::Mapping(entries) => f.debug_tuple("Mapping").field(entries).finish(),
			Self::Callable(_) => f.write_str("Callable(..)"),
			Self::Enumeration(values) => f.debug_tuple("Enumeration").field(values).finish(),
		}
	}
}
