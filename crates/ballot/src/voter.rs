use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Gender options offered at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
	Male,
	Female,
}

impl Gender {
	pub fn as_str(self) -> &'static str {
		match self {
			Gender::Male => "male",
			Gender::Female => "female",
		}
	}
}

impl fmt::Display for Gender {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown gender {0:?} (expected 'male' or 'female')")]
pub struct ParseGenderError(pub String);

impl FromStr for Gender {
	type Err = ParseGenderError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"male" | "m" => Ok(Gender::Male),
			"female" | "f" => Ok(Gender::Female),
			_ => Err(ParseGenderError(s.to_string())),
		}
	}
}

/// A registered voter.
///
/// `phone` is the primary key. `voted` starts `false` and is only ever set,
/// never cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
	pub name: String,
	pub age: u32,
	pub gender: Gender,
	pub phone: String,
	pub district: String,
	#[serde(default)]
	pub voted: bool,
}

/// Raw registration input, before any checks.
///
/// Optional fields model form controls that may be left unselected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
	pub name: String,
	pub age: Option<u32>,
	pub gender: Option<Gender>,
	pub phone: String,
	pub district: Option<String>,
}

impl RegistrationForm {
	/// Returns a copy with text fields trimmed and a blank district dropped.
	pub(crate) fn normalized(&self) -> Self {
		Self {
			name: self.name.trim().to_string(),
			age: self.age,
			gender: self.gender,
			phone: self.phone.trim().to_string(),
			district: self
				.district
				.as_deref()
				.map(str::trim)
				.filter(|d| !d.is_empty())
				.map(str::to_string),
		}
	}
}
