//! Constraint derivation.

use crate::meta::Constraints;
use crate::providers::ProviderMap;
use crate::schema::{FieldKind, SchemaField};

/// Slugs: ASCII letters, digits, hyphens and underscores.
pub const SLUG_PATTERN: &str = r"^[-a-zA-Z0-9_]+\z";

/// Derives generator constraints for `field`.
///
/// Fields whose kind has a provider get no constraints at all.
pub fn resolve_constraints(field: &SchemaField, providers: &ProviderMap) -> Constraints {
	if providers.contains(&field.kind) {
		return Constraints::default();
	}

	Constraints {
		max_length: field.max_length,
		decimal_places: field.decimal_places,
		max_digits: field.max_digits,
		pattern: (field.kind == FieldKind::SlugField).then(|| SLUG_PATTERN.to_string()),
	}
}
