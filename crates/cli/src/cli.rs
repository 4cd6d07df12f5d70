use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use votebox_ballot::{Gender, RegistrationForm};

#[derive(Parser, Debug)]
#[command(name = "votebox")]
#[command(about = "Voter registration and balloting")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Config file (defaults to ~/.config/votebox/config.toml)
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Directory holding voters.json and votes.json
	#[arg(long, value_name = "PATH")]
	pub data_dir: Option<PathBuf>,

	/// Keep everything in memory; nothing is read from or written to disk
	#[arg(long, conflicts_with = "data_dir")]
	pub ephemeral: bool,

	/// Verbose logging
	#[arg(long, short)]
	pub verbose: bool,

	/// Subcommand to execute (interactive shell if omitted).
	#[command(subcommand)]
	pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
	/// Register a new voter
	Register(RegisterArgs),
	/// List registered voters
	Voters,
	/// Show one voter's details
	Show {
		/// Position in the voter list, starting at 1
		index: usize,
	},
	/// Log in by phone and cast a vote
	Vote {
		/// Registered phone number
		#[arg(long)]
		phone: String,
		/// Candidate number (from `candidates`) or exact name
		#[arg(long)]
		candidate: String,
	},
	/// Show current results
	Results,
	/// List the candidates on the ballot
	Candidates,
	/// Interactive session
	Shell,
}

/// Registration fields.
///
/// Every field is optional on the command line so that all problems with an
/// entry are reported together.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterArgs {
	/// Full name (at least three words)
	#[arg(long, default_value = "")]
	pub name: String,

	/// Age in years
	#[arg(long)]
	pub age: Option<u32>,

	/// male or female
	#[arg(long)]
	pub gender: Option<Gender>,

	/// Phone number starting with 25261
	#[arg(long, default_value = "")]
	pub phone: String,

	/// Home district
	#[arg(long)]
	pub district: Option<String>,
}

impl From<RegisterArgs> for RegistrationForm {
	fn from(args: RegisterArgs) -> Self {
		RegistrationForm {
			name: args.name,
			age: args.age,
			gender: args.gender,
			phone: args.phone,
			district: args.district,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn no_subcommand_means_shell() {
		let cli = Cli::try_parse_from(["votebox"]).unwrap();
		assert_eq!(cli.command, None);
		assert!(!cli.ephemeral);
	}

	#[test]
	fn register_fields_are_optional() {
		let cli = Cli::try_parse_from(["votebox", "register", "--name", "Ali Omar Hassan"]).unwrap();
		let Some(Command::Register(args)) = cli.command else {
			panic!("expected register");
		};
		assert_eq!(args.name, "Ali Omar Hassan");
		assert_eq!(args.age, None);
		assert_eq!(args.gender, None);
		assert_eq!(args.phone, "");
	}

	#[test]
	fn register_parses_gender() {
		let cli = Cli::try_parse_from([
			"votebox", "register", "--age", "25", "--gender", "female", "--phone", "25261000001",
		])
		.unwrap();
		let Some(Command::Register(args)) = cli.command else {
			panic!("expected register");
		};
		assert_eq!(args.age, Some(25));
		assert_eq!(args.gender, Some(Gender::Female));
	}

	#[test]
	fn bad_gender_is_a_usage_error() {
		assert!(Cli::try_parse_from(["votebox", "register", "--gender", "robot"]).is_err());
	}

	#[test]
	fn vote_requires_phone_and_candidate() {
		assert!(Cli::try_parse_from(["votebox", "vote", "--phone", "25261000001"]).is_err());
		let cli = Cli::try_parse_from([
			"votebox",
			"vote",
			"--phone",
			"25261000001",
			"--candidate",
			"2",
		])
		.unwrap();
		assert_eq!(
			cli.command,
			Some(Command::Vote {
				phone: "25261000001".into(),
				candidate: "2".into(),
			})
		);
	}

	#[test]
	fn ephemeral_conflicts_with_data_dir() {
		assert!(Cli::try_parse_from(["votebox", "--ephemeral", "--data-dir", "/tmp/x", "results"]).is_err());
	}
}
