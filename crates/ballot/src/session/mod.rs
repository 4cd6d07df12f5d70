//! One-vote-per-voter gate.
//!
//! The session is either anonymous or holds the phone number of the one voter
//! allowed to cast the next vote. A successful [`Session::cast_vote`] always
//! returns the session to anonymous, and every rejected vote leaves the tally
//! untouched.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::registry::Registry;
use crate::tally::{Tally, TallyError, UnknownCandidate};

/// Why a login was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
	#[error("Voter not found. Please register first.")]
	NotRegistered,
	#[error("You have already voted. Thank you.")]
	AlreadyVoted,
}

/// Why a vote was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoteError {
	/// No voter is logged in.
	#[error("No voter is logged in. Log in before voting.")]
	NoSession,
	#[error(transparent)]
	UnknownCandidate(#[from] UnknownCandidate),
	/// The logged-in phone no longer resolves to a voter.
	#[error("voter {0} is no longer registered")]
	VoterMissing(String),
	#[error("You have already voted. Thank you.")]
	AlreadyVoted,
	/// Counting the vote would overflow the tally.
	#[error("The ballot box is full. Your vote was not counted.")]
	TallyFull,
}

impl From<TallyError> for VoteError {
	fn from(error: TallyError) -> Self {
		match error {
			TallyError::Unknown(unknown) => VoteError::UnknownCandidate(unknown),
			TallyError::Full => VoteError::TallyFull,
		}
	}
}

/// Who may vote next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
	#[default]
	Anonymous,
	Authenticated {
		phone: String,
	},
}

impl Session {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_authenticated(&self) -> bool {
		matches!(self, Session::Authenticated { .. })
	}

	/// Phone of the authenticated voter, if any.
	pub fn phone(&self) -> Option<&str> {
		match self {
			Session::Anonymous => None,
			Session::Authenticated { phone } => Some(phone),
		}
	}

	/// Authenticates the voter registered under `phone`.
	///
	/// A rejected login leaves the session as it was.
	pub fn login(&mut self, registry: &Registry, phone: &str) -> Result<(), LoginError> {
		let phone = phone.trim();
		let Some(voter) = registry.find_by_phone(phone) else {
			debug!(%phone, "login refused: not registered");
			return Err(LoginError::NotRegistered);
		};
		if voter.voted {
			debug!(%phone, "login refused: already voted");
			return Err(LoginError::AlreadyVoted);
		}

		info!(%phone, "voter authenticated");
		*self = Session::Authenticated {
			phone: voter.phone.clone(),
		};
		Ok(())
	}

	/// Drops any authenticated voter without voting.
	pub fn logout(&mut self) {
		*self = Session::Anonymous;
	}

	/// Records the authenticated voter's vote for `candidate`.
	///
	/// On success the tally gains exactly one vote, the voter is marked as
	/// voted, and the session becomes anonymous. An unknown candidate or a
	/// full tally keeps the session and leaves everything unchanged.
	pub fn cast_vote(
		&mut self,
		registry: &mut Registry,
		tally: &mut Tally,
		candidate: &str,
	) -> Result<(), VoteError> {
		let Some(phone) = self.phone().map(str::to_string) else {
			warn!("vote submitted without an authenticated voter");
			return Err(VoteError::NoSession);
		};

		match registry.find_by_phone(&phone) {
			Some(voter) if voter.voted => {
				self.logout();
				return Err(VoteError::AlreadyVoted);
			}
			Some(_) => {}
			None => {
				self.logout();
				return Err(VoteError::VoterMissing(phone));
			}
		}

		tally.record_vote(candidate)?;
		registry.mark_voted(&phone);
		info!(%phone, %candidate, "vote recorded");
		self.logout();
		Ok(())
	}
}
