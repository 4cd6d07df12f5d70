use std::process::ExitCode;

use clap::Parser;
use votebox_cli::cli::Cli;

fn main() -> anyhow::Result<ExitCode> {
	votebox_cli::run(Cli::parse())
}
