//! Factory registry for related model generation.
//!
//! When a factory generates a relation it first asks this registry for a
//! factory registered for the related model, so related instances follow that
//! model's own factory settings.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::error::FactoryResult;
use crate::schema::{Model, ModelRef};
use crate::value::Record;

/// Type-erased factory able to produce records of its model.
pub trait RelatedFactory: Send + Sync {
	/// Returns the model label.
	fn model_label(&self) -> String;

	/// Builds a record for use as a related instance.
	///
	/// `depth` is the number of relations already followed.
	fn build_related(&self, depth: usize) -> FactoryResult<Record>;
}

/// Global factory registry keyed by model type.
static FACTORY_REGISTRY: Lazy<RwLock<HashMap<TypeId, Arc<dyn RelatedFactory>>>> =
	Lazy::new(|| RwLock::new(HashMap::new()));

/// Registers a factory for model `M`, replacing any previous registration.
///
/// # Example
///
/// ```ignore
/// register_factory::<Author, _>(ModelFactory::<Author>::new()?);
/// ```
pub fn register_factory<M, F>(factory: F)
where
	M: Model,
	F: RelatedFactory + 'static,
{
	FACTORY_REGISTRY
		.write()
		.insert(TypeId::of::<M>(), Arc::new(factory));
}

/// Gets the factory registered for a related model.
pub fn get_factory_for(model: &ModelRef) -> Option<Arc<dyn RelatedFactory>> {
	FACTORY_REGISTRY.read().get(&model.type_id()).cloned()
}

/// Checks if a factory is registered for model `M`.
pub fn has_factory_for<M: Model>() -> bool {
	FACTORY_REGISTRY.read().contains_key(&TypeId::of::<M>())
}

/// Removes the factory registered for model `M`.
///
/// Returns true if one was registered.
pub fn unregister_factory<M: Model>() -> bool {
	FACTORY_REGISTRY.write().remove(&TypeId::of::<M>()).is_some()
}

/// Returns the number of registered factories.
pub fn factory_count() -> usize {
	FACTORY_REGISTRY.read().len()
}
