//! Error types for the key-value stores.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing a store.
#[derive(Debug, Error)]
pub enum StoreError {
	/// The key contains characters outside `[A-Za-z0-9_-]`.
	#[error("invalid store key: {0:?}")]
	InvalidKey(String),

	/// Reading or writing the backing file failed.
	#[error("I/O error on {path}: {error}")]
	Io {
		/// Path of the file being accessed.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The store refuses writes.
	#[error("store is read-only")]
	ReadOnly,
}

/// Result alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
