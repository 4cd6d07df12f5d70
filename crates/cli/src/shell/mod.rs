//! Interactive line-based session.
//!
//! The shell keeps one [`Election`] alive across lines so a voter can log in
//! and then vote. The current [`Panel`] only affects the prompt and the hints
//! printed; whether a vote is accepted is decided by the election's session.

use std::io::{self, BufRead, Write};

use tracing::debug;
use votebox_ballot::{Election, Gender, LoginError, RegistrationForm, VoteError};
use votebox_storage::KvStore;

use crate::commands::{self, write_lines};
use crate::render;

const HELP: &[&str] = &[
	"register          register a new voter (prompts for each field)",
	"voters            list registered voters",
	"show <n>          show details of voter n",
	"start             go to the voting login",
	"login <phone>     log in to vote",
	"candidates        list candidates",
	"vote <n|name>     vote for a candidate",
	"logout            leave without voting",
	"results           show results",
	"help              show this list",
	"quit              leave the shell",
];

/// Which screen the shell is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
	Registration,
	Login,
	Voting,
	Results,
}

impl Panel {
	fn prompt(self) -> &'static str {
		match self {
			Panel::Registration => "register> ",
			Panel::Login => "login> ",
			Panel::Voting => "vote> ",
			Panel::Results => "results> ",
		}
	}
}

/// Runs the shell until `quit` or end of input.
pub fn run<S: KvStore, R: BufRead, W: Write>(
	election: &mut Election<S>,
	input: R,
	out: W,
) -> io::Result<()> {
	Shell::new(election, input, out).run()
}

/// Shell state: the election, the streams, and the current panel.
pub struct Shell<'a, S, R, W> {
	election: &'a mut Election<S>,
	input: R,
	out: W,
	panel: Panel,
}

impl<'a, S: KvStore, R: BufRead, W: Write> Shell<'a, S, R, W> {
	pub fn new(election: &'a mut Election<S>, input: R, out: W) -> Self {
		Self {
			election,
			input,
			out,
			panel: Panel::Registration,
		}
	}

	pub fn panel(&self) -> Panel {
		self.panel
	}

	pub fn run(&mut self) -> io::Result<()> {
		writeln!(self.out, "votebox: type 'help' for commands")?;
		write_lines(&mut self.out, render::voter_list(self.election.voters()))?;
		loop {
			let Some(line) = self.prompt(self.panel.prompt())? else {
				break;
			};
			if !self.dispatch(&line)? {
				break;
			}
		}
		self.out.flush()
	}

	/// Handles one command line. Returns false to leave the shell.
	fn dispatch(&mut self, line: &str) -> io::Result<bool> {
		let line = line.trim();
		let (cmd, arg) = match line.split_once(char::is_whitespace) {
			Some((cmd, arg)) => (cmd, arg.trim()),
			None => (line, ""),
		};
		debug!(cmd, arg, "shell command");

		match cmd {
			"" => {}
			"quit" | "exit" => return Ok(false),
			"help" => write_lines(&mut self.out, HELP.iter().map(|s| s.to_string()).collect())?,
			"register" => self.register()?,
			"voters" => write_lines(&mut self.out, render::voter_list(self.election.voters()))?,
			"show" => match arg.parse::<usize>() {
				Ok(number) => {
					commands::show(self.election, number, &mut self.out)?;
				}
				Err(_) => writeln!(self.out, "usage: show <n>")?,
			},
			"start" => {
				self.panel = Panel::Login;
				writeln!(self.out, "Log in with: login <phone>")?;
			}
			"login" => self.login(arg)?,
			"candidates" => {
				write_lines(&mut self.out, render::candidate_list(self.election.candidates()))?
			}
			"vote" => self.vote(arg)?,
			"logout" => {
				self.election.logout();
				self.panel = Panel::Registration;
			}
			"results" => self.show_results()?,
			other => writeln!(self.out, "unknown command '{other}', try 'help'")?,
		}
		Ok(true)
	}

	fn register(&mut self) -> io::Result<()> {
		self.panel = Panel::Registration;
		let Some(form) = self.read_form()? else {
			return Ok(());
		};
		commands::register(self.election, &form, &mut self.out)?;
		Ok(())
	}

	/// Prompts for each registration field. `None` if input ends early.
	fn read_form(&mut self) -> io::Result<Option<RegistrationForm>> {
		let Some(name) = self.prompt("Name: ")? else {
			return Ok(None);
		};
		let Some(age) = self.prompt("Age: ")? else {
			return Ok(None);
		};
		let Some(gender) = self.prompt("Gender (male/female): ")? else {
			return Ok(None);
		};
		let Some(phone) = self.prompt("Phone: ")? else {
			return Ok(None);
		};
		let Some(district) = self.prompt("District: ")? else {
			return Ok(None);
		};

		Ok(Some(RegistrationForm {
			name,
			age: age.trim().parse().ok(),
			gender: gender.parse::<Gender>().ok(),
			phone,
			district: Some(district),
		}))
	}

	fn login(&mut self, phone: &str) -> io::Result<()> {
		if phone.is_empty() {
			return writeln!(self.out, "usage: login <phone>");
		}
		match self.election.login(phone) {
			Ok(voter) => {
				let greeting = format!("Welcome, {}. Choose a candidate with: vote <n>", voter.name);
				writeln!(self.out, "{greeting}")?;
				write_lines(&mut self.out, render::candidate_list(self.election.candidates()))?;
				self.panel = Panel::Voting;
			}
			Err(err @ LoginError::AlreadyVoted) => {
				writeln!(self.out, "{err}")?;
				self.show_results()?;
			}
			Err(err @ LoginError::NotRegistered) => writeln!(self.out, "{err}")?,
		}
		Ok(())
	}

	fn vote(&mut self, arg: &str) -> io::Result<()> {
		if !self.election.session().is_authenticated() {
			return writeln!(self.out, "{}", VoteError::NoSession);
		}
		let Some(choice) = self.election.candidates().resolve(arg).map(str::to_string) else {
			writeln!(self.out, "Unknown candidate: {arg}")?;
			return write_lines(&mut self.out, render::candidate_list(self.election.candidates()));
		};
		match self.election.cast_vote(&choice) {
			Ok(()) => {
				writeln!(self.out, "Vote recorded for {choice}.")?;
				self.show_results()
			}
			Err(err) => writeln!(self.out, "{err}"),
		}
	}

	fn show_results(&mut self) -> io::Result<()> {
		self.panel = Panel::Results;
		write_lines(&mut self.out, render::results(&self.election.results()))
	}

	fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
		write!(self.out, "{prompt}")?;
		self.out.flush()?;
		let mut line = String::new();
		if self.input.read_line(&mut line)? == 0 {
			return Ok(None);
		}
		Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
	}
}
