//! One-shot subcommands.

use std::io::{self, Write};
use std::process::ExitCode;

use votebox_ballot::{Election, LoginError, RegisterError, RegistrationForm};
use votebox_storage::KvStore;

use crate::cli::Command;
use crate::render;

/// Whether the requested action went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	Done,
	Rejected,
}

impl Outcome {
	pub fn exit_code(self) -> ExitCode {
		match self {
			Outcome::Done => ExitCode::SUCCESS,
			Outcome::Rejected => ExitCode::FAILURE,
		}
	}
}

/// Runs a single subcommand against `election`, writing its output to `out`.
///
/// [`Command::Shell`] is not handled here; it needs an input stream.
pub fn run<S: KvStore>(
	election: &mut Election<S>,
	command: &Command,
	out: &mut impl Write,
) -> io::Result<Outcome> {
	match command {
		Command::Register(args) => register(election, &RegistrationForm::from(args.clone()), out),
		Command::Voters => {
			write_lines(out, render::voter_list(election.voters()))?;
			Ok(Outcome::Done)
		}
		Command::Show { index } => show(election, *index, out),
		Command::Vote { phone, candidate } => vote(election, phone, candidate, out),
		Command::Results => {
			write_lines(out, render::results(&election.results()))?;
			Ok(Outcome::Done)
		}
		Command::Candidates => {
			write_lines(out, render::candidate_list(election.candidates()))?;
			Ok(Outcome::Done)
		}
		Command::Shell => {
			writeln!(out, "the shell needs an interactive input")?;
			Ok(Outcome::Rejected)
		}
	}
}

pub(crate) fn register<S: KvStore>(
	election: &mut Election<S>,
	form: &RegistrationForm,
	out: &mut impl Write,
) -> io::Result<Outcome> {
	match election.register(form) {
		Ok(voter) => {
			let number = election.voters().len();
			writeln!(out, "Registered {}", render::voter_line(number, &voter))?;
			Ok(Outcome::Done)
		}
		Err(RegisterError::Invalid(errors)) => {
			write_lines(out, render::validation(&errors))?;
			Ok(Outcome::Rejected)
		}
		Err(err @ RegisterError::Duplicate { .. }) => {
			writeln!(out, "{err}")?;
			Ok(Outcome::Rejected)
		}
	}
}

pub(crate) fn show<S: KvStore>(
	election: &Election<S>,
	number: usize,
	out: &mut impl Write,
) -> io::Result<Outcome> {
	let voter = number
		.checked_sub(1)
		.and_then(|idx| election.registry().get(idx));
	match voter {
		Some(voter) => {
			write_lines(out, render::voter_details(voter))?;
			Ok(Outcome::Done)
		}
		None => {
			writeln!(out, "No voter #{number}.")?;
			Ok(Outcome::Rejected)
		}
	}
}

fn vote<S: KvStore>(
	election: &mut Election<S>,
	phone: &str,
	candidate: &str,
	out: &mut impl Write,
) -> io::Result<Outcome> {
	let Some(choice) = election.candidates().resolve(candidate).map(str::to_string) else {
		writeln!(out, "Unknown candidate: {candidate}")?;
		write_lines(out, render::candidate_list(election.candidates()))?;
		return Ok(Outcome::Rejected);
	};

	match election.login(phone) {
		Ok(_) => {}
		Err(err @ LoginError::AlreadyVoted) => {
			writeln!(out, "{err}")?;
			write_lines(out, render::results(&election.results()))?;
			return Ok(Outcome::Rejected);
		}
		Err(err @ LoginError::NotRegistered) => {
			writeln!(out, "{err}")?;
			return Ok(Outcome::Rejected);
		}
	}

	if let Err(err) = election.cast_vote(&choice) {
		writeln!(out, "{err}")?;
		election.logout();
		return Ok(Outcome::Rejected);
	}
	writeln!(out, "Vote recorded for {choice}.")?;
	write_lines(out, render::results(&election.results()))?;
	Ok(Outcome::Done)
}

pub(crate) fn write_lines(out: &mut impl Write, lines: Vec<String>) -> io::Result<()> {
	for line in lines {
		writeln!(out, "{line}")?;
	}
	Ok(())
}
