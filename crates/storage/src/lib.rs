//! Key-value persistence for votebox.
//!
//! The ballot state is mirrored into a tiny string-keyed store with
//! `get`/`set` semantics. Two backends are provided:
//!
//! - [`FileStore`]: one file per key under a data directory, replaced
//!   atomically on every write.
//! - [`MemoryStore`]: an in-process map used by tests and ephemeral runs.
//!
//! Values are opaque strings; encoding is the caller's business.

mod error;
mod file;
mod memory;

pub use error::{Result, StoreError};
pub use file::FileStore;
pub use memory::MemoryStore;

/// A string-keyed store holding whole serialized values.
pub trait KvStore {
	/// Returns the value stored under `key`, or `None` if nothing was ever written.
	fn get(&self, key: &str) -> Result<Option<String>>;

	/// Replaces the value stored under `key`.
	fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KvStore + ?Sized> KvStore for Box<S> {
	fn get(&self, key: &str) -> Result<Option<String>> {
		(**self).get(key)
	}

	fn set(&mut self, key: &str, value: &str) -> Result<()> {
		(**self).set(key, value)
	}
}

/// Checks that `key` only uses `[A-Za-z0-9_-]`.
pub(crate) fn validate_key(key: &str) -> Result<()> {
	let valid = !key.is_empty()
		&& key
			.bytes()
			.all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
	if valid {
		Ok(())
	} else {
		Err(StoreError::InvalidKey(key.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_plain_keys() {
		assert!(validate_key("voters").is_ok());
		assert!(validate_key("vote_counts-2").is_ok());
	}

	#[test]
	fn rejects_path_like_keys() {
		for key in ["", "../voters", "a/b", "votes.json", "with space"] {
			assert!(
				matches!(validate_key(key), Err(StoreError::InvalidKey(_))),
				"{key:?} should be rejected"
			);
		}
	}
}
