//! Mirrors the registry and tally into a [`KvStore`].
//!
//! Both values are stored whole, as JSON, under [`VOTERS_KEY`] and
//! [`VOTES_KEY`]. Loading never fails: anything missing or unreadable
//! degrades to empty state and is logged.
//!
//! # Shape checks on load
//!
//! - voters: each array element is decoded on its own; elements that do not
//!   decode are skipped, as are elements repeating an earlier phone. A missing
//!   `voted` flag reads as `false`.
//! - votes: counts for names not on the ballot are dropped; candidates without
//!   an entry start at zero. Counts whose sum does not fit in a `u64` are
//!   treated as malformed.

use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, warn};
use votebox_storage::{KvStore, StoreError};

use crate::candidate::CandidateSet;
use crate::registry::Registry;
use crate::tally::Tally;
use crate::voter::Voter;

/// Store key holding the voter list.
pub const VOTERS_KEY: &str = "voters";
/// Store key holding the candidate-to-count map.
pub const VOTES_KEY: &str = "votes";

/// Failure to write state to the store.
#[derive(Debug, Error)]
pub enum PersistError {
	#[error("failed to encode {key}: {error}")]
	Encode {
		key: &'static str,
		error: serde_json::Error,
	},
	#[error("failed to save {key}: {error}")]
	Store {
		key: &'static str,
		error: StoreError,
	},
}

/// Reads the registry, falling back to an empty one.
pub fn load_registry(store: &impl KvStore) -> Registry {
	let Some(raw) = read(store, VOTERS_KEY) else {
		return Registry::new();
	};

	let records: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
		Ok(records) => records,
		Err(error) => {
			warn!(key = VOTERS_KEY, %error, "malformed voter list; starting empty");
			return Registry::new();
		}
	};

	let voters = records
		.into_iter()
		.enumerate()
		.filter_map(|(idx, record)| match serde_json::from_value::<Voter>(record) {
			Ok(voter) => Some(voter),
			Err(error) => {
				warn!(index = idx, %error, "skipping malformed voter record");
				None
			}
		});
	let registry = Registry::from_voters(voters);
	debug!(count = registry.len(), "voters loaded");
	registry
}

/// Reads the tally for `candidates`, falling back to all zeros.
pub fn load_tally(store: &impl KvStore, candidates: &CandidateSet) -> Tally {
	let mut tally = Tally::new(candidates);
	let Some(raw) = read(store, VOTES_KEY) else {
		return tally;
	};

	let counts: IndexMap<String, u64> = match serde_json::from_str(&raw) {
		Ok(counts) => counts,
		Err(error) => {
			warn!(key = VOTES_KEY, %error, "malformed vote counts; starting from zero");
			return tally;
		}
	};

	let mut total = 0u64;
	for (name, count) in counts {
		if !tally.set_count(&name, count) {
			warn!(candidate = %name, count, "dropping votes for unknown candidate");
			continue;
		}
		let Some(sum) = total.checked_add(count) else {
			warn!(key = VOTES_KEY, candidate = %name, "vote counts overflow; starting from zero");
			return Tally::new(candidates);
		};
		total = sum;
	}
	debug!(total, "vote counts loaded");
	tally
}

/// Writes the full voter list.
pub fn save_registry(store: &mut impl KvStore, registry: &Registry) -> Result<(), PersistError> {
	write(store, VOTERS_KEY, registry.list())
}

/// Writes the full count map.
pub fn save_tally(store: &mut impl KvStore, tally: &Tally) -> Result<(), PersistError> {
	write(store, VOTES_KEY, tally.counts())
}

fn read(store: &impl KvStore, key: &'static str) -> Option<String> {
	match store.get(key) {
		Ok(value) => value,
		Err(error) => {
			warn!(key, %error, "failed to read store; starting empty");
			None
		}
	}
}

fn write<T: serde::Serialize + ?Sized>(
	store: &mut impl KvStore,
	key: &'static str,
	value: &T,
) -> Result<(), PersistError> {
	let encoded =
		serde_json::to_string(value).map_err(|error| PersistError::Encode { key, error })?;
	store
		.set(key, &encoded)
		.map_err(|error| PersistError::Store { key, error })
}

#[cfg(test)]
mod tests;
