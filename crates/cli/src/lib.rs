//! The `votebox` command-line front end.
//!
//! [`run`] wires configuration, logging, and the store together, opens the
//! [`Election`], and hands it to either a one-shot subcommand or the
//! interactive [`shell`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod render;
pub mod shell;

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use votebox_ballot::Election;
use votebox_storage::{FileStore, KvStore, MemoryStore};

use crate::cli::{Cli, Command};
use crate::config::Config;

/// Runs the parsed command line to completion.
pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
	let config = match &cli.config {
		Some(path) => Config::load(path)
			.with_context(|| format!("failed to load config {}", path.display()))?,
		None => Config::load_default().context("failed to load default config")?,
	};
	logging::init(cli.verbose, config.log.as_deref());

	let candidates = config.candidate_set().context("bad ballot in config")?;
	let store: Box<dyn KvStore> = if cli.ephemeral {
		tracing::info!("running without persistence");
		Box::new(MemoryStore::new())
	} else {
		let dir = cli.data_dir.clone().unwrap_or_else(|| config.data_dir());
		tracing::debug!(dir = %dir.display(), "using file store");
		Box::new(FileStore::new(dir))
	};
	let mut election = Election::open(store, candidates);

	let stdout = io::stdout();
	match cli.command.unwrap_or(Command::Shell) {
		Command::Shell => {
			shell::run(&mut election, io::stdin().lock(), stdout.lock())?;
			Ok(ExitCode::SUCCESS)
		}
		command => {
			let outcome = commands::run(&mut election, &command, &mut stdout.lock())?;
			Ok(outcome.exit_code())
		}
	}
}
