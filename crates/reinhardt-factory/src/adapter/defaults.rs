//! Default value resolution.

use crate::meta::DefaultValue;
use crate::schema::{DeclaredDefault, SchemaField};

/// Returns the field's declared default, or [`DefaultValue::Absent`].
///
/// Relations never report a default so the related instance is always
/// generated or supplied.
pub fn resolve_default(field: &SchemaField) -> DefaultValue {
	if field.is_relation() {
		return DefaultValue::Absent;
	}

	match &field.default {
		None => DefaultValue::Absent,
		Some(DeclaredDefault::Value(value)) => DefaultValue::Value(value.clone()),
		Some(DeclaredDefault::Callable(f)) => DefaultValue::Callable(f.clone()),
	}
}
