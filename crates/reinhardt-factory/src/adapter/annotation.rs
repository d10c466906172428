//! Annotation resolution.

use super::flatten::flatten_choices;
use crate::meta::{Annotation, ScalarType};
use crate::schema::{FieldKind, SchemaField};
use crate::value::FieldValue;

/// Scalar type for field kinds with a built-in mapping.
pub fn scalar_type(kind: &FieldKind) -> Option<ScalarType> {
	let scalar = match kind {
		FieldKind::AutoField
		| FieldKind::BigAutoField
		| FieldKind::IntegerField
		| FieldKind::BigIntegerField
		| FieldKind::PositiveIntegerField
		| FieldKind::PositiveBigIntegerField => ScalarType::Integer,
		FieldKind::SmallAutoField
		| FieldKind::SmallIntegerField
		| FieldKind::PositiveSmallIntegerField => ScalarType::SmallInteger,
		FieldKind::FloatField => ScalarType::Float,
		FieldKind::DecimalField => ScalarType::Decimal,
		FieldKind::BooleanField => ScalarType::Boolean,
		FieldKind::CharField | FieldKind::TextField | FieldKind::SlugField => ScalarType::Text,
		FieldKind::BinaryField => ScalarType::Bytes,
		FieldKind::DateField => ScalarType::Date,
		FieldKind::DateTimeField => ScalarType::DateTime,
		FieldKind::DurationField => ScalarType::Duration,
		_ => return None,
	};
	Some(scalar)
}

/// Resolves the semantic type values of `field` are generated for.
///
/// Precedence, highest first: relation, non-empty choices, scalar table, the
/// field's own kind. Nullable fields are wrapped in [`Annotation::Optional`].
pub fn resolve_annotation(field: &SchemaField) -> Annotation {
	let annotation = if let Some(related) = field.related_model() {
		Annotation::Related(*related)
	} else if let Some(values) = choice_values(field) {
		Annotation::Literal(values)
	} else if let Some(scalar) = scalar_type(&field.kind) {
		Annotation::Scalar(scalar)
	} else {
		tracing::trace!(
			field = %field.name,
			kind = %field.kind,
			"no scalar mapping, annotating with field kind"
		);
		Annotation::Kind(field.kind.clone())
	};

	if field.null {
		Annotation::optional(annotation)
	} else {
		annotation
	}
}

// An empty flattened set counts as no choices at all.
fn choice_values(field: &SchemaField) -> Option<Vec<FieldValue>> {
	let values: Vec<FieldValue> = flatten_choices(field.choices.as_ref()?).collect();
	(!values.is_empty()).then_some(values)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::FactoryResult;
	use crate::schema::{ChoiceDeclaration, Model, ModelOptions, ModelRef};
	use crate::value::Record;
	use rstest::rstest;

	struct Publisher;

	impl Model for Publisher {
		fn options() -> ModelOptions {
			ModelOptions::new("books.Publisher")
		}

		fn from_record(_record: Record) -> FactoryResult<Self> {
			Ok(Self)
		}

		fn to_record(&self) -> Record {
			Record::new()
		}
	}

	#[rstest]
	#[case(FieldKind::AutoField, ScalarType::Integer)]
	#[case(FieldKind::BigAutoField, ScalarType::Integer)]
	#[case(FieldKind::BigIntegerField, ScalarType::Integer)]
	#[case(FieldKind::PositiveIntegerField, ScalarType::Integer)]
	#[case(FieldKind::SmallAutoField, ScalarType::SmallInteger)]
	#[case(FieldKind::SmallIntegerField, ScalarType::SmallInteger)]
	#[case(FieldKind::PositiveSmallIntegerField, ScalarType::SmallInteger)]
	#[case(FieldKind::FloatField, ScalarType::Float)]
	#[case(FieldKind::DecimalField, ScalarType::Decimal)]
	#[case(FieldKind::BooleanField, ScalarType::Boolean)]
	#[case(FieldKind::CharField, ScalarType::Text)]
	#[case(FieldKind::TextField, ScalarType::Text)]
	#[case(FieldKind::SlugField, ScalarType::Text)]
	#[case(FieldKind::BinaryField, ScalarType::Bytes)]
	#[case(FieldKind::DateField, ScalarType::Date)]
	#[case(FieldKind::DateTimeField, ScalarType::DateTime)]
	#[case(FieldKind::DurationField, ScalarType::Duration)]
	fn test_scalar_kinds(#[case] kind: FieldKind, #[case] expected: ScalarType) {
		let field = SchemaField::new("field", kind);
		assert_eq!(resolve_annotation(&field), Annotation::Scalar(expected));
	}

	#[rstest]
	#[case(FieldKind::EmailField)]
	#[case(FieldKind::UrlField)]
	#[case(FieldKind::FilePathField)]
	#[case(FieldKind::JsonField)]
	#[case(FieldKind::Custom("ArrayField".to_string()))]
	fn test_unmapped_kind_falls_back_to_kind(#[case] kind: FieldKind) {
		let field = SchemaField::new("field", kind.clone());
		assert_eq!(resolve_annotation(&field), Annotation::Kind(kind));
	}

	#[rstest]
	fn test_choices_override_scalar() {
		let field = SchemaField::new("status", FieldKind::CharField)
			.choices(ChoiceDeclaration::pairs([("draft", "Draft"), ("published", "Published")]));
		assert_eq!(
			resolve_annotation(&field),
			Annotation::Literal(vec!["draft".into(), "published".into()])
		);
	}

	#[rstest]
	fn test_empty_choices_fall_through() {
		let field = SchemaField::new("status", FieldKind::CharField)
			.choices(ChoiceDeclaration::callable(|| {
				ChoiceDeclaration::mapping(Vec::<(String, String)>::new())
			}));
		assert_eq!(
			resolve_annotation(&field),
			Annotation::Scalar(ScalarType::Text)
		);
	}

	#[rstest]
	fn test_relation_wins_over_choices() {
		let field = SchemaField::foreign_key::<Publisher>("publisher")
			.choices(ChoiceDeclaration::pairs([(1, "First")]));
		assert_eq!(
			resolve_annotation(&field),
			Annotation::Related(ModelRef::of::<Publisher>())
		);
	}

	#[rstest]
	fn test_nullable_wraps_last() {
		let relation = SchemaField::foreign_key::<Publisher>("publisher").null(true);
		assert_eq!(
			resolve_annotation(&relation),
			Annotation::optional(Annotation::Related(ModelRef::of::<Publisher>()))
		);

		let choice = SchemaField::new("rank", FieldKind::IntegerField)
			.choices(ChoiceDeclaration::pairs([(1, "Gold")]))
			.null(true);
		assert_eq!(
			resolve_annotation(&choice),
			Annotation::optional(Annotation::Literal(vec![FieldValue::Int(1)]))
		);
	}
}
