//! Per-candidate vote counters and result ranking.

use indexmap::IndexMap;
use thiserror::Error;

use crate::candidate::CandidateSet;

/// A vote named a candidate that is not on the ballot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0:?} is not a candidate on this ballot")]
pub struct UnknownCandidate(pub String);

/// Why [`Tally::record_vote`] refused a vote.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TallyError {
	#[error(transparent)]
	Unknown(#[from] UnknownCandidate),
	/// The total is already `u64::MAX`.
	#[error("the tally cannot take any more votes")]
	Full,
}

/// Marker attached to the leading candidate(s) in [`Results`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
	/// Sole holder of the highest count.
	Winner,
	/// One of several candidates sharing the highest count.
	Tie,
}

impl Badge {
	pub fn label(self) -> &'static str {
		match self {
			Badge::Winner => "Winner",
			Badge::Tie => "Tie",
		}
	}
}

/// One candidate's line in the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
	pub name: String,
	pub count: u64,
	pub badge: Option<Badge>,
}

/// Outcome of ranking the tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Results {
	/// Nobody has voted yet. No winner is computed.
	NoVotes,
	/// Every candidate, highest count first.
	Ranked {
		standings: Vec<Standing>,
		total: u64,
	},
}

impl Results {
	/// Standings in rank order; empty for [`Results::NoVotes`].
	pub fn standings(&self) -> &[Standing] {
		match self {
			Results::NoVotes => &[],
			Results::Ranked { standings, .. } => standings,
		}
	}

	pub fn total(&self) -> u64 {
		match self {
			Results::NoVotes => 0,
			Results::Ranked { total, .. } => *total,
		}
	}

	/// Candidates carrying a badge.
	pub fn winners(&self) -> Vec<&str> {
		self.standings()
			.iter()
			.filter(|s| s.badge.is_some())
			.map(|s| s.name.as_str())
			.collect()
	}
}

/// Vote counts keyed by candidate name, in ballot order.
///
/// The key set is fixed at construction; counters only ever increase and
/// their sum always fits in a `u64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
	counts: IndexMap<String, u64>,
}

impl Tally {
	/// All-zero tally for `candidates`.
	pub fn new(candidates: &CandidateSet) -> Self {
		Self {
			counts: candidates.iter().map(|c| (c.to_string(), 0)).collect(),
		}
	}

	/// Adds one vote for `candidate`.
	pub fn record_vote(&mut self, candidate: &str) -> Result<u64, TallyError> {
		if self.total() == u64::MAX {
			return Err(TallyError::Full);
		}
		let count = self
			.counts
			.get_mut(candidate)
			.ok_or_else(|| UnknownCandidate(candidate.to_string()))?;
		*count = count.checked_add(1).ok_or(TallyError::Full)?;
		Ok(*count)
	}

	pub fn count(&self, candidate: &str) -> Option<u64> {
		self.counts.get(candidate).copied()
	}

	/// Sum of all counters, saturating at `u64::MAX`.
	pub fn total(&self) -> u64 {
		self.counts.values().fold(0, |acc, n| acc.saturating_add(*n))
	}

	/// `(candidate, count)` pairs in ballot order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
		self.counts.iter().map(|(name, count)| (name.as_str(), *count))
	}

	/// Overwrites the count for a known candidate. Unknown names are ignored.
	pub(crate) fn set_count(&mut self, candidate: &str, count: u64) -> bool {
		match self.counts.get_mut(candidate) {
			Some(slot) => {
				*slot = count;
				true
			}
			None => false,
		}
	}

	pub(crate) fn counts(&self) -> &IndexMap<String, u64> {
		&self.counts
	}

	/// Ranks candidates by count and tags the leader(s).
	///
	/// Equal counts keep ballot order. With a single leader it is tagged
	/// [`Badge::Winner`]; when several share the top count they are all
	/// tagged [`Badge::Tie`].
	pub fn results(&self) -> Results {
		let total = self.total();
		if total == 0 {
			return Results::NoVotes;
		}

		let mut standings: Vec<Standing> = self
			.iter()
			.map(|(name, count)| Standing {
				name: name.to_string(),
				count,
				badge: None,
			})
			.collect();
		// stable: ties stay in ballot order
		standings.sort_by(|a, b| b.count.cmp(&a.count));

		let max = standings[0].count;
		let leaders = standings.iter().take_while(|s| s.count == max).count();
		let badge = if leaders == 1 { Badge::Winner } else { Badge::Tie };
		for standing in &mut standings[..leaders] {
			standing.badge = Some(badge);
		}

		Results::Ranked { standings, total }
	}
}
