//! Configuration for the `votebox` binary.
//!
//! Configuration is a TOML file, by default
//! `$XDG_CONFIG_HOME/votebox/config.toml` (or `~/.config/votebox/config.toml`).
//! A missing default file is not an error; defaults apply.
//!
//! ```toml
//! # Where voters.json and votes.json live
//! data_dir = "/var/lib/votebox"
//!
//! # Replaces the built-in ballot; order is display and tie-break order
//! candidates = ["Ayaan", "Bile", "Cawo"]
//!
//! # Default tracing filter when RUST_LOG is unset
//! log = "votebox=info"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use votebox_ballot::{CandidateError, CandidateSet};

const APP_DIR: &str = "votebox";
const CONFIG_FILE: &str = "config.toml";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		path: PathBuf,
		error: std::io::Error,
	},

	/// The file is not valid TOML or has unexpected keys.
	#[error("invalid config: {0}")]
	Parse(#[from] toml::de::Error),

	/// The configured candidate list is unusable.
	#[error("invalid candidates: {0}")]
	Candidates(#[from] CandidateError),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Store directory.
	pub data_dir: Option<PathBuf>,
	/// Ballot override.
	pub candidates: Option<Vec<String>>,
	/// Default tracing filter directive.
	pub log: Option<String>,
}

impl Config {
	/// Parse a TOML string into a [`Config`].
	pub fn parse(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Load the default config file, or defaults if it does not exist.
	pub fn load_default() -> Result<Self> {
		match default_path() {
			Some(path) if path.exists() => {
				tracing::debug!(path = %path.display(), "loading config");
				Self::load(path)
			}
			_ => Ok(Self::default()),
		}
	}

	/// The ballot: configured candidates, or the built-in list.
	pub fn candidate_set(&self) -> Result<CandidateSet> {
		match &self.candidates {
			Some(names) => Ok(CandidateSet::new(names)?),
			None => Ok(CandidateSet::default()),
		}
	}

	/// Store directory: configured, else the platform data dir, else `./.votebox`.
	pub fn data_dir(&self) -> PathBuf {
		self.data_dir.clone().unwrap_or_else(|| {
			dirs::data_dir()
				.map(|d| d.join(APP_DIR))
				.unwrap_or_else(|| PathBuf::from(".votebox"))
		})
	}
}

/// Location of the default config file, if the platform has a config dir.
pub fn default_path() -> Option<PathBuf> {
	dirs::config_dir().map(|d| d.join(APP_DIR).join(CONFIG_FILE))
}
