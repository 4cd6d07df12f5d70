//! Directory-backed store, one `<key>.json` file per key.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::{KvStore, Result, StoreError, validate_key};

/// Stores each key as a file in a single directory.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so a crash mid-write leaves the previous value intact.
/// The directory is created lazily on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
	root: PathBuf,
}

impl FileStore {
	/// Creates a store rooted at `root`.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	/// Returns the directory holding the key files.
	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Returns the file path backing `key`.
	pub fn path_for(&self, key: &str) -> Result<PathBuf> {
		validate_key(key)?;
		Ok(self.root.join(format!("{key}.json")))
	}

	fn write_atomic(&self, path: &Path, value: &str) -> io::Result<()> {
		std::fs::create_dir_all(&self.root)?;
		let mut tmp = NamedTempFile::new_in(&self.root)?;
		tmp.write_all(value.as_bytes())?;
		tmp.as_file().sync_all()?;
		tmp.persist(path).map_err(|e| e.error)?;
		Ok(())
	}
}

impl KvStore for FileStore {
	fn get(&self, key: &str) -> Result<Option<String>> {
		let path = self.path_for(key)?;
		match std::fs::read_to_string(&path) {
			Ok(content) => Ok(Some(content)),
			Err(error) if error.kind() == io::ErrorKind::NotFound => {
				debug!(path = %path.display(), "store key not present");
				Ok(None)
			}
			Err(error) => Err(StoreError::Io { path, error }),
		}
	}

	fn set(&mut self, key: &str, value: &str) -> Result<()> {
		let path = self.path_for(key)?;
		self.write_atomic(&path, value)
			.map_err(|error| StoreError::Io {
				path: path.clone(),
				error,
			})?;
		debug!(path = %path.display(), bytes = value.len(), "store key written");
		Ok(())
	}
}
