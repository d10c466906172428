//! Dynamic field values and records.
//!
//! A [`Record`] is the name-to-value form of a model instance. Factories
//! produce records and models convert them into their concrete type through
//! [`Model::from_record`](crate::schema::Model::from_record).

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{FactoryError, FactoryResult};

/// A single field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
	Null,
	Bool(bool),
	Int(i64),
	Float(f64),
	Decimal(Decimal),
	Text(String),
	Bytes(Vec<u8>),
	Date(NaiveDate),
	DateTime(DateTime<Utc>),
	Time(NaiveTime),
	Duration(chrono::Duration),
	Uuid(Uuid),
	/// Related model instance.
	Record(Record),
}

impl FieldValue {
	/// Name of the variant, used in type mismatch errors.
	pub fn type_name(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::Int(_) => "int",
			Self::Float(_) => "float",
			Self::Decimal(_) => "decimal",
			Self::Text(_) => "text",
			Self::Bytes(_) => "bytes",
			Self::Date(_) => "date",
			Self::DateTime(_) => "datetime",
			Self::Time(_) => "time",
			Self::Duration(_) => "duration",
			Self::Uuid(_) => "uuid",
			Self::Record(_) => "record",
		}
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}
}

macro_rules! impl_field_value_conversions {
	($($ty:ty => $variant:ident, $name:literal;)*) => {
		$(
			impl From<$ty> for FieldValue {
				fn from(value: $ty) -> Self {
					Self::$variant(value)
				}
			}

			impl FromFieldValue for $ty {
				fn from_field_value(value: FieldValue) -> FactoryResult<Self> {
					match value {
						FieldValue::$variant(inner) => Ok(inner),
						other => Err(FactoryError::TypeMismatch {
							expected: $name,
							found: other.type_name(),
						}),
					}
				}
			}
		)*
	};
}

impl_field_value_conversions! {
	bool => Bool, "bool";
	i64 => Int, "int";
	f64 => Float, "float";
	Decimal => Decimal, "decimal";
	String => Text, "text";
	Vec<u8> => Bytes, "bytes";
	NaiveDate => Date, "date";
	DateTime<Utc> => DateTime, "datetime";
	NaiveTime => Time, "time";
	chrono::Duration => Duration, "duration";
	Uuid => Uuid, "uuid";
	Record => Record, "record";
}

impl From<i32> for FieldValue {
	fn from(value: i32) -> Self {
		Self::Int(i64::from(value))
	}
}

impl From<&str> for FieldValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

/// Conversion from a [`FieldValue`] into a concrete Rust type.
pub trait FromFieldValue: Sized {
	fn from_field_value(value: FieldValue) -> FactoryResult<Self>;
}

impl FromFieldValue for FieldValue {
	fn from_field_value(value: FieldValue) -> FactoryResult<Self> {
		Ok(value)
	}
}

impl<T: FromFieldValue> FromFieldValue for Option<T> {
	fn from_field_value(value: FieldValue) -> FactoryResult<Self> {
		match value {
			FieldValue::Null => Ok(None),
			other => T::from_field_value(other).map(Some),
		}
	}
}

/// Field values of one model instance, in field declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
	fields: IndexMap<String, FieldValue>,
}

impl Record {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a field value, returning the record for chaining.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_factory::value::{FieldValue, Record};
	///
	/// let record = Record::new().with("name", "alice").with("age", 42);
	/// assert_eq!(record.get("age"), Some(&FieldValue::Int(42)));
	/// ```
	pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
		self.insert(name, value);
		self
	}

	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
		self.fields.insert(name.into(), value.into());
	}

	pub fn get(&self, name: &str) -> Option<&FieldValue> {
		self.fields.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.fields.contains_key(name)
	}

	/// Removes a field value, keeping the order of the remaining fields.
	pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
		self.fields.shift_remove(name)
	}

	/// Removes a field and converts it into `T`.
	///
	/// # Errors
	///
	/// Returns [`FactoryError::MissingField`] when the field is absent and
	/// [`FactoryError::TypeMismatch`] when it holds another type.
	pub fn take<T: FromFieldValue>(&mut self, name: &str) -> FactoryResult<T> {
		let value = self
			.remove(name)
			.ok_or_else(|| FactoryError::MissingField(name.to_string()))?;
		T::from_field_value(value)
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.fields.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
		self.fields.iter().map(|(name, value)| (name.as_str(), value))
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}

impl IntoIterator for Record {
	type Item = (String, FieldValue);
	type IntoIter = indexmap::map::IntoIter<String, FieldValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.fields.into_iter()
	}
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Record {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			fields: iter
				.into_iter()
				.map(|(name, value)| (name.into(), value.into()))
				.collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_take_converts_value() {
		let mut record = Record::new().with("title", "Dune").with("pages", 412);

		let title: String = record.take("title").unwrap();
		assert_eq!(title, "Dune");
		assert!(!record.contains("title"));
		assert_eq!(record.take::<i64>("pages").unwrap(), 412);
	}

	#[rstest]
	fn test_take_missing_field() {
		let mut record = Record::new();
		let result = record.take::<String>("title");
		assert!(matches!(result, Err(FactoryError::MissingField(name)) if name == "title"));
	}

	#[rstest]
	fn test_take_type_mismatch() {
		let mut record = Record::new().with("pages", "many");
		let result = record.take::<i64>("pages");
		assert!(matches!(
			result,
			Err(FactoryError::TypeMismatch {
				expected: "int",
				found: "text"
			})
		));
	}

	#[rstest]
	fn test_optional_values() {
		let mut record = Record::new()
			.with("nickname", Option::<String>::None)
			.with("age", Some(30));

		assert_eq!(record.take::<Option<String>>("nickname").unwrap(), None);
		assert_eq!(record.take::<Option<i64>>("age").unwrap(), Some(30));
	}

	#[rstest]
	fn test_remove_preserves_order() {
		let mut record: Record = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
		record.remove("b");
		assert_eq!(record.names().collect::<Vec<_>>(), vec!["a", "c"]);
	}
}
