//! Factory configuration.
//!
//! Settings can be built in code with the `with_*` setters or loaded from a
//! TOML document:
//!
//! ```toml
//! use_defaults = true
//! allow_none_optionals = false
//! max_relation_depth = 2
//! seed = 42
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FactoryError, FactoryResult};

/// Settings shared by all builds of one factory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
	/// Use declared field defaults instead of generating values.
	pub use_defaults: bool,

	/// Allow nullable fields to be generated as `Null`.
	pub allow_none_optionals: bool,

	/// Probability of `Null` for a nullable field.
	pub none_probability: f64,

	/// Maximum depth of generated related instances.
	pub max_relation_depth: usize,

	/// Upper bound on generated text and byte lengths.
	pub max_text_length: usize,

	/// Seed for reproducible builds. Seeded from entropy when unset.
	pub seed: Option<u64>,
}

impl Default for FactoryConfig {
	fn default() -> Self {
		Self {
			use_defaults: false,
			allow_none_optionals: true,
			none_probability: 0.5,
			max_relation_depth: 3,
			max_text_length: 32,
			seed: None,
		}
	}
}

impl FactoryConfig {
	/// Creates the default configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses and validates a TOML document.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_factory::config::FactoryConfig;
	///
	/// let config = FactoryConfig::from_toml_str("use_defaults = true\nseed = 7").unwrap();
	/// assert!(config.use_defaults);
	/// assert_eq!(config.seed, Some(7));
	/// assert_eq!(config.max_relation_depth, 3);
	/// ```
	pub fn from_toml_str(source: &str) -> FactoryResult<Self> {
		let config: Self =
			toml::from_str(source).map_err(|e| FactoryError::ConfigError(e.to_string()))?;
		config.validate()?;
		Ok(config)
	}

	/// Reads and validates a TOML file.
	pub fn from_file(path: impl AsRef<Path>) -> FactoryResult<Self> {
		let source = std::fs::read_to_string(path.as_ref())?;
		Self::from_toml_str(&source)
	}

	/// Checks that all values are in range.
	pub fn validate(&self) -> FactoryResult<()> {
		if !(0.0..=1.0).contains(&self.none_probability) {
			return Err(FactoryError::ConfigError(format!(
				"none_probability must be between 0 and 1, got {}",
				self.none_probability
			)));
		}
		Ok(())
	}

	/// Sets whether declared defaults are used.
	pub fn with_use_defaults(mut self, use_defaults: bool) -> Self {
		self.use_defaults = use_defaults;
		self
	}

	/// Sets whether nullable fields may be `Null`.
	pub fn with_allow_none_optionals(mut self, allow: bool) -> Self {
		self.allow_none_optionals = allow;
		self
	}

	/// Sets the probability of `Null` for nullable fields.
	pub fn with_none_probability(mut self, probability: f64) -> Self {
		self.none_probability = probability;
		self
	}

	/// Sets the maximum related instance depth.
	pub fn with_max_relation_depth(mut self, depth: usize) -> Self {
		self.max_relation_depth = depth;
		self
	}

	/// Sets the generated text length bound.
	pub fn with_max_text_length(mut self, length: usize) -> Self {
		self.max_text_length = length;
		self
	}

	/// Sets the random seed.
	pub fn with_seed(mut self, seed: u64) -> Self {
		self.seed = Some(seed);
		self
	}
}
