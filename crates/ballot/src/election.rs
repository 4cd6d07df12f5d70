use tracing::{error, info};
use votebox_storage::KvStore;

use crate::candidate::CandidateSet;
use crate::persist::{self, PersistError};
use crate::registry::{RegisterError, Registry};
use crate::session::{LoginError, Session, VoteError};
use crate::tally::{Results, Tally};
use crate::voter::{RegistrationForm, Voter};

/// Application state: ballot, voters, counts, the current session, and the
/// store they are mirrored into.
///
/// Built once at start-up with [`Election::open`] and passed to whichever
/// front end drives it. Saves are best-effort: a failed write is logged and
/// the in-memory state stays authoritative for the rest of the run.
#[derive(Debug)]
pub struct Election<S> {
	candidates: CandidateSet,
	registry: Registry,
	tally: Tally,
	session: Session,
	store: S,
}

impl<S: KvStore> Election<S> {
	/// Loads persisted state from `store` for the given ballot.
	pub fn open(store: S, candidates: CandidateSet) -> Self {
		let registry = persist::load_registry(&store);
		let tally = persist::load_tally(&store, &candidates);
		info!(
			voters = registry.len(),
			votes = tally.total(),
			candidates = candidates.len(),
			"election opened"
		);
		Self {
			candidates,
			registry,
			tally,
			session: Session::new(),
			store,
		}
	}

	pub fn candidates(&self) -> &CandidateSet {
		&self.candidates
	}

	pub fn registry(&self) -> &Registry {
		&self.registry
	}

	pub fn tally(&self) -> &Tally {
		&self.tally
	}

	pub fn session(&self) -> &Session {
		&self.session
	}

	pub fn store(&self) -> &S {
		&self.store
	}

	/// Consumes the election and hands back its store.
	pub fn into_store(self) -> S {
		self.store
	}

	/// Voters in registration order.
	pub fn voters(&self) -> &[Voter] {
		self.registry.list()
	}

	/// Registers a voter and saves the voter list.
	pub fn register(&mut self, form: &RegistrationForm) -> Result<Voter, RegisterError> {
		let voter = self.registry.register(form)?.clone();
		self.save_registry();
		Ok(voter)
	}

	/// Authenticates the voter with `phone` for one vote.
	pub fn login(&mut self, phone: &str) -> Result<&Voter, LoginError> {
		self.session.login(&self.registry, phone)?;
		self.registry
			.find_by_phone(phone.trim())
			.ok_or(LoginError::NotRegistered)
	}

	/// Leaves the session without voting.
	pub fn logout(&mut self) {
		self.session.logout();
	}

	/// Casts the authenticated voter's vote and saves counts and voters.
	pub fn cast_vote(&mut self, candidate: &str) -> Result<(), VoteError> {
		self.session
			.cast_vote(&mut self.registry, &mut self.tally, candidate)?;
		self.save_tally();
		self.save_registry();
		Ok(())
	}

	pub fn results(&self) -> Results {
		self.tally.results()
	}

	fn save_registry(&mut self) {
		report(persist::save_registry(&mut self.store, &self.registry));
	}

	fn save_tally(&mut self) {
		report(persist::save_tally(&mut self.store, &self.tally));
	}
}

fn report(result: Result<(), PersistError>) {
	if let Err(err) = result {
		error!(error = %err, "failed to persist state; changes kept in memory only");
	}
}
