use std::collections::HashMap;

use crate::{KvStore, Result, StoreError, validate_key};

/// In-process store backed by a map.
///
/// Nothing survives the process. [`MemoryStore::read_only`] builds a store
/// whose writes fail, for exercising the soft-fail save path.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	entries: HashMap<String, String>,
	read_only: bool,
}

impl MemoryStore {
	/// Creates an empty writable store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty store that rejects every write.
	pub fn read_only() -> Self {
		Self {
			entries: HashMap::new(),
			read_only: true,
		}
	}

	/// Seeds `key` with `value`, bypassing the read-only flag.
	pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.entries.insert(key.into(), value.into());
		self
	}

	/// Toggles whether writes are rejected.
	pub fn set_read_only(&mut self, read_only: bool) {
		self.read_only = read_only;
	}

	/// Number of keys holding a value.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if no key holds a value.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl KvStore for MemoryStore {
	fn get(&self, key: &str) -> Result<Option<String>> {
		validate_key(key)?;
		Ok(self.entries.get(key).cloned())
	}

	fn set(&mut self, key: &str, value: &str) -> Result<()> {
		validate_key(key)?;
		if self.read_only {
			return Err(StoreError::ReadOnly);
		}
		self.entries.insert(key.to_string(), value.to_string());
		Ok(())
	}
}
