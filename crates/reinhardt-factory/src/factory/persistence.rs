//! Synchronous persistence of built instances.

use crate::error::{FactoryError, FactoryResult};
use crate::schema::Persistable;

/// Saves built instances and returns them in their persisted state.
pub trait SyncPersistence<M>: Send + Sync {
	/// Saves one instance.
	fn save(&self, data: M) -> FactoryResult<M>;

	/// Saves several instances.
	///
	/// The default implementation saves them one by one and stops at the first error.
	fn save_many(&self, data: Vec<M>) -> FactoryResult<Vec<M>> {
		data.into_iter().map(|item| self.save(item)).collect()
	}
}

/// Persistence through the instance's own save operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelSyncPersistence;

impl<M: Persistable> SyncPersistence<M> for ModelSyncPersistence {
	fn save(&self, mut data: M) -> FactoryResult<M> {
		data.save().map_err(FactoryError::store)?;
		Ok(data)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use thiserror::Error;

	#[derive(Debug, Error)]
	#[error("database is locked")]
	struct LockedError;

	#[derive(Debug, Default)]
	struct Counter {
		id: Option<i64>,
		fail: bool,
	}

	impl Persistable for Counter {
		type Error = LockedError;

		fn save(&mut self) -> Result<(), Self::Error> {
			if self.fail {
				return Err(LockedError);
			}
			self.id = Some(1);
			Ok(())
		}
	}

	#[rstest]
	fn test_save_returns_persisted_instance() {
		let saved = ModelSyncPersistence.save(Counter::default()).unwrap();
		assert_eq!(saved.id, Some(1));
	}

	#[rstest]
	fn test_store_error_passes_through() {
		let result = ModelSyncPersistence.save(Counter {
			id: None,
			fail: true,
		});
		match result {
			Err(FactoryError::Store(error)) => {
				assert!(error.is::<LockedError>());
				assert_eq!(error.to_string(), "database is locked");
			}
			other => panic!("expected store error, got {:?}", other),
		}
	}

	#[rstest]
	fn test_save_many_stops_at_first_error() {
		let result = ModelSyncPersistence.save_many(vec![
			Counter::default(),
			Counter {
				id: None,
				fail: true,
			},
		]);
		assert!(matches!(result, Err(FactoryError::Store(_))));
	}
}
