use std::process::ExitCode;

use clap::Parser;
use pretty_assertions::assert_eq;
use votebox_ballot::{CandidateSet, Election};
use votebox_cli::cli::{Cli, Command};
use votebox_cli::commands::{self, Outcome};
use votebox_storage::{FileStore, KvStore, MemoryStore};

fn parse(args: &[&str]) -> Command {
	let argv = std::iter::once("votebox").chain(args.iter().copied());
	Cli::try_parse_from(argv)
		.unwrap()
		.command
		.expect("test args name a subcommand")
}

fn exec<S: KvStore>(election: &mut Election<S>, args: &[&str]) -> (Outcome, String) {
	let mut out = Vec::new();
	let outcome = commands::run(election, &parse(args), &mut out).unwrap();
	(outcome, String::from_utf8(out).unwrap())
}

const ALI: &[&str] = &[
	"register",
	"--name",
	"Ali Omar Hassan",
	"--age",
	"25",
	"--gender",
	"male",
	"--phone",
	"25261112233",
	"--district",
	"Hodan",
];

fn ballot() -> CandidateSet {
	CandidateSet::new(["Ayaan", "Bile", "Cawo"]).unwrap()
}

fn fresh() -> Election<MemoryStore> {
	Election::open(MemoryStore::new(), ballot())
}

#[test]
fn register_then_list() {
	let mut election = fresh();

	let (outcome, out) = exec(&mut election, ALI);
	assert_eq!(outcome, Outcome::Done);
	assert_eq!(out, "Registered 1. Ali Omar Hassan - Hodan\n");

	let (_, out) = exec(&mut election, &["voters"]);
	assert_eq!(out, "1. Ali Omar Hassan - Hodan\n");
}

#[test]
fn invalid_registration_lists_every_problem() {
	let mut election = fresh();
	let (outcome, out) = exec(&mut election, &["register", "--name", "Ali", "--phone", "0612345"]);
	assert_eq!(outcome, Outcome::Rejected);
	assert_eq!(
		out,
		"Name must have at least 3 words.\n\
		 Age must be greater than 18.\n\
		 Please select gender.\n\
		 Phone number must start with 25261.\n\
		 Please select a district.\n"
	);
	assert_eq!(Outcome::Rejected.exit_code(), ExitCode::FAILURE);
}

#[test]
fn duplicate_phone_is_refused() {
	let mut election = fresh();
	exec(&mut election, ALI);
	let (outcome, out) = exec(&mut election, ALI);
	assert_eq!(outcome, Outcome::Rejected);
	assert_eq!(
		out,
		"This phone number is already registered. You cannot register again.\n"
	);
}

#[test]
fn show_is_one_based() {
	let mut election = fresh();
	exec(&mut election, ALI);

	let (outcome, out) = exec(&mut election, &["show", "1"]);
	assert_eq!(outcome, Outcome::Done);
	assert!(out.starts_with("Name: Ali Omar Hassan\n"));

	let (outcome, out) = exec(&mut election, &["show", "0"]);
	assert_eq!(outcome, Outcome::Rejected);
	assert_eq!(out, "No voter #0.\n");
}

#[test]
fn vote_by_number_then_again_is_refused() {
	let mut election = fresh();
	exec(&mut election, ALI);

	let (outcome, out) = exec(&mut election, &["vote", "--phone", "25261112233", "--candidate", "3"]);
	assert_eq!(outcome, Outcome::Done);
	assert!(out.starts_with("Vote recorded for Cawo.\n"));
	assert!(out.contains("Cawo — 1 votes [Winner]"));

	let (outcome, out) = exec(&mut election, &["vote", "--phone", "25261112233", "--candidate", "1"]);
	assert_eq!(outcome, Outcome::Rejected);
	assert!(out.starts_with("You have already voted. Thank you.\n"));
	assert_eq!(election.tally().total(), 1);
}

#[test]
fn vote_for_unknown_candidate_does_not_log_in() {
	let mut election = fresh();
	exec(&mut election, ALI);

	let (outcome, out) = exec(&mut election, &["vote", "--phone", "25261112233", "--candidate", "Nobody"]);
	assert_eq!(outcome, Outcome::Rejected);
	assert!(out.starts_with("Unknown candidate: Nobody\n1. Ayaan\n"));
	assert!(!election.session().is_authenticated());
	assert!(!election.voters()[0].voted);
}

#[test]
fn unregistered_phone_cannot_vote() {
	let (outcome, out) = exec(&mut fresh(), &["vote", "--phone", "25261000000", "--candidate", "1"]);
	assert_eq!(outcome, Outcome::Rejected);
	assert_eq!(out, "Voter not found. Please register first.\n");
}

#[test]
fn results_before_any_vote() {
	let (outcome, out) = exec(&mut fresh(), &["results"]);
	assert_eq!(outcome, Outcome::Done);
	assert_eq!(out, "No votes yet — be the first to vote!\n");
}

#[test]
fn shell_is_not_a_one_shot_command() {
	let (outcome, _) = exec(&mut fresh(), &["shell"]);
	assert_eq!(outcome, Outcome::Rejected);
}

#[test]
fn separate_runs_share_the_data_dir() {
	let dir = tempfile::tempdir().unwrap();
	let open = || Election::open(FileStore::new(dir.path()), ballot());

	exec(&mut open(), ALI);
	exec(&mut open(), &["vote", "--phone", "25261112233", "--candidate", "Bile"]);

	let mut election = open();
	let (_, out) = exec(&mut election, &["voters"]);
	assert_eq!(out, "1. Ali Omar Hassan - Hodan (voted)\n");
	let (_, out) = exec(&mut election, &["results"]);
	assert!(out.starts_with("Bile — 1 votes [Winner]\n"));
}
