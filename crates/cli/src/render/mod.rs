//! Plain-text rendering of voters, candidates, and results.

use votebox_ballot::{CandidateSet, Results, ValidationErrors, Voter};

/// Shown instead of standings before the first vote.
pub const NO_VOTES: &str = "No votes yet — be the first to vote!";

/// `"<n>. <name> - <district>"`, with `" (voted)"` once the voter has voted.
pub fn voter_line(number: usize, voter: &Voter) -> String {
	let mut line = format!("{number}. {} - {}", voter.name, voter.district);
	if voter.voted {
		line.push_str(" (voted)");
	}
	line
}

pub fn voter_list(voters: &[Voter]) -> Vec<String> {
	if voters.is_empty() {
		return vec!["No voters registered yet.".to_string()];
	}
	voters
		.iter()
		.enumerate()
		.map(|(idx, voter)| voter_line(idx + 1, voter))
		.collect()
}

pub fn voter_details(voter: &Voter) -> Vec<String> {
	vec![
		format!("Name: {}", voter.name),
		format!("Age: {}", voter.age),
		format!("Gender: {}", voter.gender),
		format!("Phone: {}", voter.phone),
		format!("District: {}", voter.district),
	]
}

pub fn candidate_list(candidates: &CandidateSet) -> Vec<String> {
	candidates
		.iter()
		.enumerate()
		.map(|(idx, name)| format!("{}. {name}", idx + 1))
		.collect()
}

/// One line per candidate, leaders tagged `[Winner]` or `[Tie]`.
pub fn results(results: &Results) -> Vec<String> {
	match results {
		Results::NoVotes => vec![NO_VOTES.to_string()],
		Results::Ranked { standings, .. } => standings
			.iter()
			.map(|s| match s.badge {
				Some(badge) => format!("{} — {} votes [{}]", s.name, s.count, badge.label()),
				None => format!("{} — {} votes", s.name, s.count),
			})
			.collect(),
	}
}

pub fn validation(errors: &ValidationErrors) -> Vec<String> {
	errors.messages().collect()
}
