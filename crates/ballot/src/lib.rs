//! Voter registration and balloting core.
//!
//! The crate is split along the three pieces of mutable state:
//!
//! - [`Registry`]: registered voters, keyed by phone number, with the
//!   registration checks.
//! - [`Tally`]: per-candidate counters and the winner/tie ranking.
//! - [`Session`]: which voter, if any, may cast the next vote.
//!
//! [`Election`] owns one of each plus a [`KvStore`] and is the entry point
//! used by front ends. Every mutating call on it persists the affected state
//! before returning.
//!
//! # Voter lifecycle
//!
//! ```text
//! unregistered --register--> registered --login--> authenticated --cast_vote--> voted
//!                                 ^                      |
//!                                 +------ rejected ------+
//! ```
//!
//! `voted` only ever goes from `false` to `true`. A voter who already voted
//! is turned away at login with [`LoginError::AlreadyVoted`].
//!
//! [`KvStore`]: votebox_storage::KvStore

mod candidate;
mod election;
pub mod persist;
mod registry;
mod session;
mod tally;
mod voter;

pub use candidate::{CandidateError, CandidateSet, DEFAULT_CANDIDATES};
pub use election::Election;
pub use registry::{
	MIN_NAME_WORDS, PHONE_PREFIX, RegisterError, Registry, ValidationErrors, ValidationFailure,
	VOTING_AGE,
};
pub use session::{LoginError, Session, VoteError};
pub use tally::{Badge, Results, Standing, Tally, TallyError, UnknownCandidate};
pub use voter::{Gender, ParseGenderError, RegistrationForm, Voter};
