//! Model factories.
//!
//! A [`ModelFactory`] is bound to one model type. Binding happens in
//! [`FactoryBuilder::build`], which rejects abstract models; afterwards the
//! factory can build unsaved instances or create saved ones through its
//! [`SyncPersistence`] implementation.
//!
//! ```ignore
//! let factory = ModelFactory::<Author>::builder()
//!     .use_defaults(false)
//!     .seed(42)
//!     .build()?;
//!
//! let author = factory.build()?;             // in-memory instance
//! let saved = factory.create_sync()?;        // saved through Author::save
//! let batch = factory.create_batch_sync(5)?;
//! ```

pub mod persistence;
pub mod registry;

pub use persistence::{ModelSyncPersistence, SyncPersistence};
pub use registry::{
	RelatedFactory, factory_count, get_factory_for, has_factory_for, register_factory,
	unregister_factory,
};

use std::fmt;
use std::marker::PhantomData;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::adapter::SchemaAdapter;
use crate::config::FactoryConfig;
use crate::error::{FactoryError, FactoryResult};
use crate::generate::ValueGenerator;
use crate::meta::FieldMeta;
use crate::providers::ProviderMap;
use crate::schema::Model;
use crate::value::{FieldValue, Record};

/// Factory producing instances of model `M`.
pub struct ModelFactory<M: Model, P = ModelSyncPersistence> {
	config: FactoryConfig,
	providers: ProviderMap,
	persistence: P,
	rng: Mutex<StdRng>,
	_model: PhantomData<fn() -> M>,
}

/// Configures and binds a [`ModelFactory`].
pub struct FactoryBuilder<M: Model, P = ModelSyncPersistence> {
	config: FactoryConfig,
	providers: ProviderMap,
	persistence: P,
	_model: PhantomData<fn() -> M>,
}

impl<M: Model> ModelFactory<M> {
	/// Binds a factory with default settings.
	///
	/// # Errors
	///
	/// Returns [`FactoryError::AbstractModel`] if `M` is abstract.
	pub fn new() -> FactoryResult<Self> {
		Self::builder().build()
	}

	/// Starts configuring a factory for `M`.
	pub fn builder() -> FactoryBuilder<M> {
		FactoryBuilder {
			config: FactoryConfig::default(),
			providers: ProviderMap::for_models(),
			persistence: ModelSyncPersistence,
			_model: PhantomData,
		}
	}
}

impl<M: Model, P> FactoryBuilder<M, P> {
	/// Replaces the whole configuration.
	pub fn config(mut self, config: FactoryConfig) -> Self {
		self.config = config;
		self
	}

	pub fn use_defaults(mut self, use_defaults: bool) -> Self {
		self.config.use_defaults = use_defaults;
		self
	}

	pub fn allow_none_optionals(mut self, allow: bool) -> Self {
		self.config.allow_none_optionals = allow;
		self
	}

	pub fn seed(mut self, seed: u64) -> Self {
		self.config.seed = Some(seed);
		self
	}

	/// Adds or replaces the provider for a field kind.
	pub fn provider<F>(mut self, kind: crate::schema::FieldKind, provider: F) -> Self
	where
		F: Fn(&mut StdRng) -> FieldValue + Send + Sync + 'static,
	{
		self.providers.insert(kind, provider);
		self
	}

	/// Layers a provider map on top of the current one.
	pub fn providers(mut self, providers: ProviderMap) -> Self {
		self.providers.extend(providers);
		self
	}

	/// Replaces the persistence used by `create_*` operations.
	pub fn persistence<Q>(self, persistence: Q) -> FactoryBuilder<M, Q> {
		FactoryBuilder {
			config: self.config,
			providers: self.providers,
			persistence,
			_model: PhantomData,
		}
	}

	/// Binds the factory to `M`.
	///
	/// # Errors
	///
	/// Returns [`FactoryError::AbstractModel`] if `M` is abstract, or
	/// [`FactoryError::ConfigError`] if the configuration is invalid.
	pub fn build(self) -> FactoryResult<ModelFactory<M, P>> {
		let options = M::options();
		if options.is_abstract {
			return Err(FactoryError::AbstractModel(options.label));
		}
		self.config.validate()?;

		let rng = match self.config.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_entropy(),
		};
		tracing::debug!(model = %options.label, providers = self.providers.len(), "defined model factory");

		Ok(ModelFactory {
			config: self.config,
			providers: self.providers,
			persistence: self.persistence,
			rng: Mutex::new(rng),
			_model: PhantomData,
		})
	}
}

impl<M: Model, P> ModelFactory<M, P> {
	pub fn config(&self) -> &FactoryConfig {
		&self.config
	}

	pub fn providers(&self) -> &ProviderMap {
		&self.providers
	}

	/// Returns the normalized description of every field of `M`.
	pub fn fields(&self) -> Vec<FieldMeta> {
		SchemaAdapter::new(&self.providers).model_fields::<M>()
	}

	/// Builds an unsaved instance with generated values.
	pub fn build(&self) -> FactoryResult<M> {
		self.build_with(Record::new())
	}

	/// Builds an unsaved instance, using `overrides` for the fields it names.
	pub fn build_with(&self, overrides: Record) -> FactoryResult<M> {
		let record = self.build_record(overrides, 0)?;
		M::from_record(record)
	}

	/// Builds `size` unsaved instances.
	pub fn build_batch(&self, size: usize) -> FactoryResult<Vec<M>> {
		(0..size).map(|_| self.build()).collect()
	}

	fn build_record(&self, overrides: Record, depth: usize) -> FactoryResult<Record> {
		let options = M::options();
		tracing::trace!(model = %options.label, depth, "building record");

		// Each build draws its own generator so the lock is not held while
		// related factories run.
		let mut rng = StdRng::seed_from_u64(self.rng.lock().next_u64());
		ValueGenerator::new(&self.config, &self.providers, &mut rng).build_record(
			&options,
			overrides,
			depth,
		)
	}

	/// Always fails: asynchronous persistence is not supported.
	pub async fn create_async(&self) -> FactoryResult<M> {
		Err(FactoryError::AsyncPersistenceUnsupported)
	}

	/// Always fails: asynchronous persistence is not supported.
	pub async fn create_batch_async(&self, _size: usize) -> FactoryResult<Vec<M>> {
		Err(FactoryError::AsyncPersistenceUnsupported)
	}
}

impl<M: Model, P: SyncPersistence<M>> ModelFactory<M, P> {
	/// Builds an instance and saves it.
	pub fn create_sync(&self) -> FactoryResult<M> {
		self.create_sync_with(Record::new())
	}

	/// Builds an instance with `overrides` and saves it.
	pub fn create_sync_with(&self, overrides: Record) -> FactoryResult<M> {
		let instance = self.build_with(overrides)?;
		tracing::debug!(model = %M::options().label, "saving built instance");
		self.persistence.save(instance)
	}

	/// Builds and saves `size` instances.
	pub fn create_batch_sync(&self, size: usize) -> FactoryResult<Vec<M>> {
		let batch = self.build_batch(size)?;
		self.persistence.save_many(batch)
	}
}

impl<M: Model, P: Send + Sync + 'static> ModelFactory<M, P> {
	/// Registers this factory for generating `M` when it appears as a relation.
	pub fn set_as_default_factory(self) {
		register_factory::<M, _>(self);
	}
}

impl<M: Model, P: Send + Sync> RelatedFactory for ModelFactory<M, P> {
	fn model_label(&self) -> String {
		M::options().label
	}

	fn build_related(&self, depth: usize) -> FactoryResult<Record> {
		self.build_record(Record::new(), depth)
	}
}

impl<M: Model, P> fmt::Debug for ModelFactory<M, P> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ModelFactory")
			.field("model", &std::any::type_name::<M>())
			.field("config", &self.config)
			.field("providers", &self.providers)
			.finish_non_exhaustive()
	}
}
