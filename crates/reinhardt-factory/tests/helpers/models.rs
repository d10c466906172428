//! Sample models used by integration tests.

use std::sync::atomic::{AtomicI64, Ordering};

use reinhardt_factory::prelude::*;
use thiserror::Error;

use super::store::Stored;

/// Model keeping the raw generated record, for type assertions.
#[derive(Debug)]
pub struct Specimen(pub Record);

impl Model for Specimen {
	fn options() -> ModelOptions {
		ModelOptions::new("zoo.Specimen")
			.field(SchemaField::new("auto_type", FieldKind::AutoField).primary_key())
			.field(SchemaField::new("bigint_type", FieldKind::BigIntegerField))
			.field(SchemaField::new("binary_type", FieldKind::BinaryField))
			.field(SchemaField::new("boolean_type", FieldKind::BooleanField))
			.field(SchemaField::new("str_type", FieldKind::CharField))
			.field(SchemaField::new("slug_type", FieldKind::SlugField))
			.field(SchemaField::new("url_type", FieldKind::UrlField))
			.field(SchemaField::new("int_type", FieldKind::IntegerField))
			.field(SchemaField::new("float_type", FieldKind::FloatField))
			.field(SchemaField::new("date_type", FieldKind::DateField))
			.field(SchemaField::new("decimal_type", FieldKind::DecimalField))
			.field(SchemaField::new("datetime_type", FieldKind::DateTimeField))
			.field(SchemaField::new("email_type", FieldKind::EmailField))
			.field(SchemaField::new("duration_type", FieldKind::DurationField))
			.field(SchemaField::new("file_path_type", FieldKind::FilePathField))
			.field(SchemaField::new("text_type", FieldKind::TextField))
			.field(SchemaField::new("time_type", FieldKind::TimeField))
			.field(SchemaField::new("uuid_type", FieldKind::UuidField))
			.field(SchemaField::new("ip_type", FieldKind::GenericIpAddressField))
	}

	fn from_record(record: Record) -> FactoryResult<Self> {
		Ok(Self(record))
	}

	fn to_record(&self) -> Record {
		self.0.clone()
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parent {
	pub id: Option<i64>,
	pub name: String,
}

impl Model for Parent {
	fn options() -> ModelOptions {
		ModelOptions::new("family.Parent")
			.field(
				SchemaField::new("id", FieldKind::BigAutoField)
					.primary_key()
					.null(true),
			)
			.field(SchemaField::new("name", FieldKind::CharField).max_length(10))
	}

	fn from_record(mut record: Record) -> FactoryResult<Self> {
		Ok(Self {
			id: record.take("id")?,
			name: record.take("name")?,
		})
	}

	fn to_record(&self) -> Record {
		Record::new()
			.with("id", self.id)
			.with("name", self.name.clone())
	}
}

impl Stored for Parent {
	fn set_pk(&mut self, pk: i64) {
		self.id = Some(pk);
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Child {
	pub id: Option<i64>,
	pub parent: Parent,
}

impl Model for Child {
	fn options() -> ModelOptions {
		ModelOptions::new("family.Child")
			.field(
				SchemaField::new("id", FieldKind::BigAutoField)
					.primary_key()
					.null(true),
			)
			.field(SchemaField::foreign_key::<Parent>("parent"))
	}

	fn from_record(mut record: Record) -> FactoryResult<Self> {
		Ok(Self {
			id: record.take("id")?,
			parent: Parent::from_record(record.take("parent")?)?,
		})
	}

	fn to_record(&self) -> Record {
		Record::new()
			.with("id", self.id)
			.with("parent", self.parent.to_record())
	}
}

impl Stored for Child {
	fn set_pk(&mut self, pk: i64) {
		self.id = Some(pk);
	}
}

static NEXT_AUTHOR_PK: AtomicI64 = AtomicI64::new(1);

/// Model without declared fields, saved through its own `save`.
#[derive(Debug)]
pub struct Author {
	pub pk: Option<i64>,
	pub adding: bool,
}

impl Model for Author {
	fn options() -> ModelOptions {
		ModelOptions::new("library.Author")
	}

	fn from_record(_record: Record) -> FactoryResult<Self> {
		Ok(Self {
			pk: None,
			adding: true,
		})
	}

	fn to_record(&self) -> Record {
		Record::new().with("pk", self.pk)
	}
}

#[derive(Debug, Error)]
#[error("author already saved")]
pub struct AlreadySaved;

impl Persistable for Author {
	type Error = AlreadySaved;

	fn save(&mut self) -> Result<(), Self::Error> {
		if !self.adding {
			return Err(AlreadySaved);
		}
		self.pk = Some(NEXT_AUTHOR_PK.fetch_add(1, Ordering::SeqCst));
		self.adding = false;
		Ok(())
	}
}

/// Abstract base model.
pub struct Timestamped;

impl Model for Timestamped {
	fn options() -> ModelOptions {
		ModelOptions::new("common.Timestamped")
			.abstract_model()
			.field(SchemaField::new("created_at", FieldKind::DateTimeField))
	}

	fn from_record(_record: Record) -> FactoryResult<Self> {
		Ok(Self)
	}

	fn to_record(&self) -> Record {
		Record::new()
	}
}

/// Concrete model inheriting the fields of [`Timestamped`].
#[derive(Debug)]
pub struct Post {
	pub created_at: chrono::DateTime<chrono::Utc>,
	pub title: String,
}

impl Model for Post {
	fn options() -> ModelOptions {
		ModelOptions::new("blog.Post")
			.inherit(&Timestamped::options())
			.field(SchemaField::new("title", FieldKind::CharField).max_length(20))
	}

	fn from_record(mut record: Record) -> FactoryResult<Self> {
		Ok(Self {
			created_at: record.take("created_at")?,
			title: record.take("title")?,
		})
	}

	fn to_record(&self) -> Record {
		Record::new()
			.with("created_at", self.created_at)
			.with("title", self.title.clone())
	}
}

#[derive(Debug)]
pub struct Publisher {
	pub name: String,
}

impl Model for Publisher {
	fn options() -> ModelOptions {
		ModelOptions::new("books.Publisher")
			.field(SchemaField::new("name", FieldKind::CharField).max_length(30))
	}

	fn from_record(mut record: Record) -> FactoryResult<Self> {
		Ok(Self {
			name: record.take("name")?,
		})
	}

	fn to_record(&self) -> Record {
		Record::new().with("name", self.name.clone())
	}
}

#[derive(Debug)]
pub struct Book {
	pub title: String,
	pub publisher: Publisher,
	pub pages: i64,
}

impl Model for Book {
	fn options() -> ModelOptions {
		ModelOptions::new("books.Book")
			.field(SchemaField::new("title", FieldKind::CharField).max_length(50))
			.field(SchemaField::foreign_key::<Publisher>("publisher"))
			.field(SchemaField::new("pages", FieldKind::PositiveIntegerField).default_value(100))
	}

	fn from_record(mut record: Record) -> FactoryResult<Self> {
		Ok(Self {
			title: record.take("title")?,
			publisher: Publisher::from_record(record.take("publisher")?)?,
			pages: record.take("pages")?,
		})
	}

	fn to_record(&self) -> Record {
		Record::new()
			.with("title", self.title.clone())
			.with("publisher", self.publisher.to_record())
			.with("pages", self.pages)
	}
}
