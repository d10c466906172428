//! In-memory store used as persistence in tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use parking_lot::Mutex;
use reinhardt_factory::prelude::*;

/// Models whose primary key is assigned on insert.
pub trait Stored: Model {
	fn set_pk(&mut self, pk: i64);
}

/// Saved rows grouped by model label.
#[derive(Default)]
pub struct MemoryStore {
	tables: Mutex<HashMap<String, Vec<Record>>>,
	next_pk: AtomicI64,
}

impl MemoryStore {
	/// Number of rows saved for a model label.
	pub fn count(&self, label: &str) -> usize {
		self.tables.lock().get(label).map_or(0, Vec::len)
	}
}

/// Shared handle to a [`MemoryStore`], usable as factory persistence.
#[derive(Clone, Default)]
pub struct StoreHandle(pub Arc<MemoryStore>);

impl StoreHandle {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn count(&self, label: &str) -> usize {
		self.0.count(label)
	}
}

impl<M: Stored> SyncPersistence<M> for StoreHandle {
	fn save(&self, mut data: M) -> FactoryResult<M> {
		let pk = self.0.next_pk.fetch_add(1, Ordering::SeqCst) + 1;
		data.set_pk(pk);
		self.0
			.tables
			.lock()
			.entry(M::options().label)
			.or_default()
			.push(data.to_record());
		Ok(data)
	}
}
