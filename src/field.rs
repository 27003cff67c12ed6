//! Field identifiers and per-field state.

use std::fmt;
use std::str::FromStr;

/// Errors raised at the input boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	#[error("Unknown field: {0}")]
	UnknownField(String),
}

pub type FieldResult<T> = Result<T, FieldError>;

/// The editable fields of the registration form, in registry order.
///
/// Address fields are deliberately absent: they are read-only presentation
/// data and cannot be reached through the registry's mutation entry points.
///
/// # Examples
///
/// ```
/// use regform::Field;
///
/// assert_eq!(Field::FullName.name(), "fullName");
/// assert_eq!("phoneNumber".parse::<Field>(), Ok(Field::PhoneNumber));
/// assert!("line1".parse::<Field>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
	FullName,
	Email,
	Password,
	PhoneNumber,
	Gender,
	Salary,
}

impl Field {
	/// All editable fields, in the order they appear on the form.
	pub const ALL: [Field; 6] = [
		Field::FullName,
		Field::Email,
		Field::Password,
		Field::PhoneNumber,
		Field::Gender,
		Field::Salary,
	];

	/// The control name used by the view layer and the wire format.
	pub fn name(self) -> &'static str {
		match self {
			Field::FullName => "fullName",
			Field::Email => "email",
			Field::Password => "password",
			Field::PhoneNumber => "phoneNumber",
			Field::Gender => "gender",
			Field::Salary => "salary",
		}
	}

	/// Human-readable label for the control.
	pub fn label(self) -> &'static str {
		match self {
			Field::FullName => "Full name",
			Field::Email => "E-mail",
			Field::Password => "Password",
			Field::PhoneNumber => "Phone number",
			Field::Gender => "Gender",
			Field::Salary => "Annual Salary",
		}
	}

	/// Fixed input adornment shown next to the control, if any
	/// (dial prefix for phone, currency prefix for salary).
	pub fn adornment(self) -> Option<&'static str> {
		match self {
			Field::PhoneNumber => Some("+91"),
			Field::Salary => Some("Rs"),
			_ => None,
		}
	}
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Field {
	type Err = FieldError;

	fn from_str(s: &str) -> FieldResult<Field> {
		Field::ALL
			.into_iter()
			.find(|f| f.name() == s)
			.ok_or_else(|| FieldError::UnknownField(s.to_string()))
	}
}

/// Per-field state triple: current value, touched flag, displayed error.
///
/// `error` is present iff the value fails its rule *and* the field has been
/// touched. Untouched fields never display errors, even when invalid.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
	pub value: serde_json::Value,
	pub touched: bool,
	pub error: Option<&'static str>,
}

impl FieldState {
	pub fn new(value: serde_json::Value) -> Self {
		Self {
			value,
			touched: false,
			error: None,
		}
	}
}

/// Snapshot of one field, handed to the rendering boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
	pub field: Field,
	pub value: serde_json::Value,
	/// Value formatted for presentation (salary gets comma grouping).
	pub display_value: String,
	pub error: Option<&'static str>,
	pub touched: bool,
}

impl FieldView {
	pub fn has_error(&self) -> bool {
		self.error.is_some()
	}

	pub fn label(&self) -> &'static str {
		self.field.label()
	}

	pub fn adornment(&self) -> Option<&'static str> {
		self.field.adornment()
	}
}
