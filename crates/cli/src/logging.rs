//! Tracing setup.
//!
//! Logs go to stderr so stdout only carries rendered output. Setting
//! [`LOG_DIR_ENV`] sends them to `<dir>/votebox.<pid>.log` instead.

use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Environment variable naming a directory for log files.
pub const LOG_DIR_ENV: &str = "VOTEBOX_LOG_DIR";

/// Filter used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool, configured: Option<&str>) -> String {
	if verbose {
		return "votebox=debug,info".to_string();
	}
	configured.unwrap_or("warn").to_string()
}

/// Installs the global subscriber. Call once at start-up.
pub fn init(verbose: bool, configured: Option<&str>) {
	let directive = default_directive(verbose, configured);
	let filter = || {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directive))
	};

	if let Some(log_dir) = std::env::var(LOG_DIR_ENV).ok().map(PathBuf::from)
		&& std::fs::create_dir_all(&log_dir).is_ok()
	{
		let log_path = log_dir.join(format!("votebox.{}.log", std::process::id()));
		if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
			let file_layer = tracing_subscriber::fmt::layer()
				.with_writer(file)
				.with_ansi(false)
				.with_target(true);
			tracing_subscriber::registry()
				.with(filter())
				.with(file_layer)
				.init();
			tracing::debug!(path = ?log_path, "logging to file");
			return;
		}
	}

	tracing_subscriber::fmt()
		.with_env_filter(filter())
		.with_writer(std::io::stderr)
		.init();
}
