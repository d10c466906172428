//! Value providers keyed by field kind.
//!
//! A provider produces a realistic value for every field of its kind. Kinds
//! with a provider skip constraint derivation entirely: the provider output is
//! trusted to already have the right shape.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::NaiveTime;
use fake::Fake;
use fake::faker::filesystem::en::FileName;
use fake::faker::internet::en::{DomainSuffix, IPv4, SafeEmail};
use fake::faker::lorem::en::Word;
use rand::Rng;
use rand::rngs::StdRng;

use crate::schema::FieldKind;
use crate::value::FieldValue;

/// Generator for one field kind, driven by the factory's random source.
pub type Provider = Arc<dyn Fn(&mut StdRng) -> FieldValue + Send + Sync>;

/// Mapping from field kind to value provider.
#[derive(Clone, Default)]
pub struct ProviderMap {
	providers: HashMap<FieldKind, Provider>,
}

impl ProviderMap {
	/// Creates an empty provider map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Providers of the generic engine for kinds that have no scalar mapping.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_factory::providers::ProviderMap;
	/// use reinhardt_factory::schema::FieldKind;
	///
	/// let providers = ProviderMap::base();
	/// assert!(providers.contains(&FieldKind::UuidField));
	/// assert!(!providers.contains(&FieldKind::EmailField));
	/// ```
	pub fn base() -> Self {
		let mut map = Self::new();
		map.insert(FieldKind::TimeField, |rng| {
			let seconds = rng.gen_range(0..86_400);
			let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
				.unwrap_or(NaiveTime::MIN);
			FieldValue::Time(time)
		});
		map.insert(FieldKind::UuidField, |rng| {
			let mut bytes = [0u8; 16];
			rng.fill(&mut bytes);
			FieldValue::Uuid(uuid::Builder::from_random_bytes(bytes).into_uuid())
		});
		map.insert(FieldKind::GenericIpAddressField, |rng| {
			FieldValue::Text(IPv4().fake_with_rng(rng))
		});
		map
	}

	/// Base providers plus the model-specific overrides.
	///
	/// Email, URL and file path fields get dedicated formats.
	pub fn for_models() -> Self {
		let mut map = Self::base();
		map.insert(FieldKind::EmailField, |rng| {
			FieldValue::Text(SafeEmail().fake_with_rng(rng))
		});
		map.insert(FieldKind::UrlField, fake_url);
		map.insert(FieldKind::FilePathField, |rng| {
			let name: String = FileName().fake_with_rng(rng);
			FieldValue::Text(format!("/{}", name))
		});
		map
	}

	/// Registers a provider, replacing any previous one for the kind.
	pub fn insert<F>(&mut self, kind: FieldKind, provider: F)
	where
		F: Fn(&mut StdRng) -> FieldValue + Send + Sync + 'static,
	{
		self.providers.insert(kind, Arc::new(provider));
	}

	/// Layers `other` on top of this map; its providers win on conflicts.
	pub fn extend(&mut self, other: ProviderMap) {
		self.providers.extend(other.providers);
	}

	pub fn get(&self, kind: &FieldKind) -> Option<&Provider> {
		self.providers.get(kind)
	}

	pub fn contains(&self, kind: &FieldKind) -> bool {
		self.providers.contains_key(kind)
	}

	pub fn len(&self) -> usize {
		self.providers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.providers.is_empty()
	}
}

impl fmt::Debug for ProviderMap {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_set().entries(self.providers.keys()).finish()
	}
}

fn fake_url(rng: &mut StdRng) -> FieldValue {
	let host: String = Word().fake_with_rng(rng);
	let suffix: String = DomainSuffix().fake_with_rng(rng);
	let path: String = Word().fake_with_rng(rng);
	FieldValue::Text(format!("https://{}.{}/{}", host, suffix, path))
}
