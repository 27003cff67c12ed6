//! Typed data model for the registration form.
//!
//! These are the records that cross the output boundary: a successful submit
//! hands one [`FormValues`] to the external handler. Serde renames keep the
//! serialized field names identical to the control names used by the view
//! layer (`fullName`, `phoneNumber`, `pinCode`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender choice offered by the registration form.
///
/// The first variant is the default, so the gender field is valid from the
/// moment the form mounts and carries no validation rule.
///
/// # Examples
///
/// ```
/// use regform::Gender;
///
/// assert_eq!(Gender::default(), Gender::Female);
/// assert_eq!(Gender::Male.as_str(), "male");
/// assert_eq!(Gender::parse("other"), Some(Gender::Other));
/// assert_eq!(Gender::parse("unknown"), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
	#[default]
	Female,
	Male,
	Other,
}

impl Gender {
	/// All choices, in presentation order (the radio group order).
	pub const CHOICES: [Gender; 3] = [Gender::Female, Gender::Male, Gender::Other];

	/// The wire value stored in the field registry.
	pub fn as_str(self) -> &'static str {
		match self {
			Gender::Female => "female",
			Gender::Male => "male",
			Gender::Other => "other",
		}
	}

	/// Human-readable label for the choice control.
	pub fn label(self) -> &'static str {
		match self {
			Gender::Female => "Female",
			Gender::Male => "Male",
			Gender::Other => "Other",
		}
	}

	/// Parse a wire value back into a choice. Returns `None` for anything
	/// that is not one of the three known values.
	pub fn parse(value: &str) -> Option<Gender> {
		Gender::CHOICES.into_iter().find(|g| g.as_str() == value)
	}
}

impl fmt::Display for Gender {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Read-only postal address block.
///
/// Address values are fixed presentation data sourced at form
/// initialization. They are never mutated by user input and carry no
/// validation rules; a submit includes them verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
	pub line1: String,
	pub line2: String,
	pub landmark: String,
	pub city: String,
	pub state: String,
	pub pin_code: String,
}

/// The full value record emitted to the submit handler.
///
/// Salary is the stored plain number; the comma-grouped rendering exists
/// only at the display boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
	pub full_name: String,
	pub email: String,
	pub password: String,
	pub phone_number: String,
	pub gender: Gender,
	pub address: Address,
	pub salary: Option<f64>,
}
