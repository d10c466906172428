//! Field kind tags.

use std::fmt;

/// Kind of a declared model field.
///
/// Mirrors the field classes of the ORM. Kinds the factory has no special
/// knowledge of can be expressed with [`FieldKind::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
	// Auto-incrementing primary keys
	AutoField,
	BigAutoField,
	SmallAutoField,

	// Integer types
	IntegerField,
	BigIntegerField,
	SmallIntegerField,
	PositiveIntegerField,
	PositiveBigIntegerField,
	PositiveSmallIntegerField,

	// Numeric types
	FloatField,
	DecimalField,

	// Boolean type
	BooleanField,

	// String types
	CharField,
	TextField,
	SlugField,
	EmailField,
	UrlField,
	FilePathField,
	GenericIpAddressField,

	// Binary type
	BinaryField,

	// Date/time types
	DateField,
	DateTimeField,
	TimeField,
	DurationField,

	// Other types
	UuidField,
	JsonField,

	// Relations
	ForeignKey,
	OneToOneField,

	/// Field class unknown to the factory, identified by its class name.
	Custom(String),
}

impl FieldKind {
	/// Returns true when fields of this kind reference another model.
	pub fn is_relation(&self) -> bool {
		matches!(self, Self::ForeignKey | Self::OneToOneField)
	}

	/// Maximum length the ORM assigns to this kind when none is declared.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_factory::schema::FieldKind;
	///
	/// assert_eq!(FieldKind::SlugField.default_max_length(), Some(50));
	/// assert_eq!(FieldKind::CharField.default_max_length(), None);
	/// ```
	pub fn default_max_length(&self) -> Option<u32> {
		match self {
			Self::SlugField => Some(50),
			Self::EmailField => Some(254),
			Self::UrlField => Some(200),
			Self::FilePathField => Some(100),
			_ => None,
		}
	}

	/// Returns the ORM class name of this kind.
	pub fn class_name(&self) -> &str {
		match self {
			Self::AutoField => "AutoField",
			Self::BigAutoField => "BigAutoField",
			Self::SmallAutoField => "SmallAutoField",
			Self::IntegerField => "IntegerField",
			Self::BigIntegerField => "BigIntegerField",
			Self::SmallIntegerField => "SmallIntegerField",
			Self::PositiveIntegerField => "PositiveIntegerField",
			Self::PositiveBigIntegerField => "PositiveBigIntegerField",
			Self::PositiveSmallIntegerField => "PositiveSmallIntegerField",
			Self::FloatField => "FloatField",
			Self::DecimalField => "DecimalField",
			Self::BooleanField => "BooleanField",
			Self::CharField => "CharField",
			Self::TextField => "TextField",
			Self::SlugField => "SlugField",
			Self::EmailField => "EmailField",
			Self::UrlField => "URLField",
			Self::FilePathField => "FilePathField",
			Self::GenericIpAddressField => "GenericIPAddressField",
			Self::BinaryField => "BinaryField",
			Self::DateField => "DateField",
			Self::DateTimeField => "DateTimeField",
			Self::TimeField => "TimeField",
			Self::DurationField => "DurationField",
			Self::UuidField => "UUIDField",
			Self::JsonField => "JSONField",
			Self::ForeignKey => "ForeignKey",
			Self::OneToOneField => "OneToOneField",
			Self::Custom(name) => name,
		}
	}
}

impl fmt::Display for FieldKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.class_name())
	}
}
