//! The fixed, ordered set of candidates on the ballot.

use std::collections::HashSet;

use thiserror::Error;

/// Candidates used when no configuration overrides them.
pub const DEFAULT_CANDIDATES: [&str; 4] = [
	"Hassan Sheekh Mohamuud",
	"Mohamed Abdullaahi Farmaajo",
	"Mohamed Hussein Rooble",
	"Sheekh Shariif Sheekh Ahmed",
];

/// Reasons a candidate list is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CandidateError {
	#[error("candidate list is empty")]
	Empty,
	#[error("candidate name at position {0} is blank")]
	Blank(usize),
	#[error("candidate {0:?} is listed more than once")]
	Duplicate(String),
}

/// Immutable ordered list of candidate names.
///
/// Order matters: it is the display order and the tie-break order in
/// [`Tally::results`](crate::Tally::results).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
	names: Vec<String>,
}

impl CandidateSet {
	/// Builds a set from `names`, trimming each one.
	pub fn new<I, S>(names: I) -> Result<Self, CandidateError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let names: Vec<String> = names
			.into_iter()
			.map(|n| n.as_ref().trim().to_string())
			.collect();
		if names.is_empty() {
			return Err(CandidateError::Empty);
		}

		let mut seen = HashSet::new();
		for (idx, name) in names.iter().enumerate() {
			if name.is_empty() {
				return Err(CandidateError::Blank(idx));
			}
			if !seen.insert(name.as_str()) {
				return Err(CandidateError::Duplicate(name.clone()));
			}
		}

		Ok(Self { names })
	}

	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&str> {
		self.names.get(index).map(String::as_str)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.position(name).is_some()
	}

	/// Index of `name` in ballot order.
	pub fn position(&self, name: &str) -> Option<usize> {
		self.names.iter().position(|n| n == name)
	}

	pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
		self.names.iter().map(String::as_str)
	}

	/// Resolves user input to a candidate name.
	///
	/// Accepts a 1-based ballot number or an exact (trimmed) name.
	pub fn resolve(&self, input: &str) -> Option<&str> {
		let input = input.trim();
		if let Ok(number) = input.parse::<usize>() {
			return number.checked_sub(1).and_then(|idx| self.get(idx));
		}
		self.position(input).and_then(|idx| self.get(idx))
	}
}

impl Default for CandidateSet {
	fn default() -> Self {
		Self {
			names: DEFAULT_CANDIDATES.iter().map(|n| n.to_string()).collect(),
		}
	}
}
