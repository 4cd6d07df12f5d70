//! Registered voters and the registration checks.
//!
//! Registration first rejects a phone number that is already on file, and
//! only then runs the field checks. Field checks never short-circuit: every
//! failure is collected so the caller can show them all at once.

use std::fmt;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::voter::{RegistrationForm, Voter};

/// Phone numbers must start with this prefix.
pub const PHONE_PREFIX: &str = "25261";
/// Voters must be strictly older than this.
pub const VOTING_AGE: u32 = 18;
/// Minimum number of whitespace-separated words in a full name.
pub const MIN_NAME_WORDS: usize = 3;

/// A single failed registration check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
	NameTooShort,
	Underage,
	MissingGender,
	BadPhonePrefix,
	MissingDistrict,
}

impl fmt::Display for ValidationFailure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NameTooShort => write!(f, "Name must have at least {MIN_NAME_WORDS} words."),
			Self::Underage => write!(f, "Age must be greater than {VOTING_AGE}."),
			Self::MissingGender => f.write_str("Please select gender."),
			Self::BadPhonePrefix => write!(f, "Phone number must start with {PHONE_PREFIX}."),
			Self::MissingDistrict => f.write_str("Please select a district."),
		}
	}
}

/// Every check that failed for one registration attempt, in check order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationFailure>);

impl ValidationErrors {
	pub fn failures(&self) -> &[ValidationFailure] {
		&self.0
	}

	pub fn contains(&self, failure: ValidationFailure) -> bool {
		self.0.contains(&failure)
	}

	/// One human-readable message per failure.
	pub fn messages(&self) -> impl Iterator<Item = String> + '_ {
		self.0.iter().map(ToString::to_string)
	}
}

impl fmt::Display for ValidationErrors {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (idx, failure) in self.0.iter().enumerate() {
			if idx > 0 {
				f.write_str("\n")?;
			}
			write!(f, "{failure}")?;
		}
		Ok(())
	}
}

impl std::error::Error for ValidationErrors {}

/// Why a registration was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
	#[error("This phone number is already registered. You cannot register again.")]
	Duplicate { phone: String },
	#[error(transparent)]
	Invalid(#[from] ValidationErrors),
}

/// Ordered list of registered voters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
	voters: Vec<Voter>,
}

impl Registry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Rebuilds a registry from already-validated records.
	///
	/// Later records repeating an earlier phone are dropped.
	pub(crate) fn from_voters(voters: impl IntoIterator<Item = Voter>) -> Self {
		let mut registry = Self::new();
		for voter in voters {
			if registry.find_by_phone(&voter.phone).is_some() {
				warn!(phone = %voter.phone, "dropping voter with duplicate phone");
				continue;
			}
			registry.voters.push(voter);
		}
		registry
	}

	/// Validates `form` and appends a new voter on success.
	///
	/// # Errors
	///
	/// - [`RegisterError::Duplicate`] if the phone is already registered; no
	///   other check runs in that case.
	/// - [`RegisterError::Invalid`] with every failed check otherwise.
	pub fn register(&mut self, form: &RegistrationForm) -> Result<&Voter, RegisterError> {
		let form = form.normalized();

		if self.find_by_phone(&form.phone).is_some() {
			debug!(phone = %form.phone, "registration refused: phone already registered");
			return Err(RegisterError::Duplicate { phone: form.phone });
		}

		let voter = validate(form).inspect_err(|errors| {
			debug!(count = errors.failures().len(), "registration refused: validation failed");
		})?;

		info!(phone = %voter.phone, "voter registered");
		let idx = self.voters.len();
		self.voters.push(voter);
		Ok(&self.voters[idx])
	}

	/// Exact-match lookup by phone number.
	pub fn find_by_phone(&self, phone: &str) -> Option<&Voter> {
		self.voters.iter().find(|v| v.phone == phone)
	}

	/// Voters in registration order.
	pub fn list(&self) -> &[Voter] {
		&self.voters
	}

	pub fn get(&self, index: usize) -> Option<&Voter> {
		self.voters.get(index)
	}

	pub fn len(&self) -> usize {
		self.voters.len()
	}

	pub fn is_empty(&self) -> bool {
		self.voters.is_empty()
	}

	/// Sets `voted` on the voter with `phone`.
	///
	/// Returns false if no such voter exists. Already-voted voters stay voted.
	pub(crate) fn mark_voted(&mut self, phone: &str) -> bool {
		match self.voters.iter_mut().find(|v| v.phone == phone) {
			Some(voter) => {
				voter.voted = true;
				true
			}
			None => false,
		}
	}
}

fn validate(form: RegistrationForm) -> Result<Voter, ValidationErrors> {
	let mut failures = Vec::new();
	if form.name.split_whitespace().count() < MIN_NAME_WORDS {
		failures.push(ValidationFailure::NameTooShort);
	}
	if !form.age.is_some_and(|age| age > VOTING_AGE) {
		failures.push(ValidationFailure::Underage);
	}
	if form.gender.is_none() {
		failures.push(ValidationFailure::MissingGender);
	}
	if !form.phone.starts_with(PHONE_PREFIX) {
		failures.push(ValidationFailure::BadPhonePrefix);
	}
	if form.district.is_none() {
		failures.push(ValidationFailure::MissingDistrict);
	}

	match (form.age, form.gender, form.district) {
		(Some(age), Some(gender), Some(district)) if failures.is_empty() => Ok(Voter {
			name: form.name,
			age,
			gender,
			phone: form.phone,
			district,
			voted: false,
		}),
		_ => Err(ValidationErrors(failures)),
	}
}
