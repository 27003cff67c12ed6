//! Field validation rules.
//!
//! Each rule is a pure function from a stored value to at most one error
//! message; the first failing rule wins. Rules are independent of touched
//! state — the registry gates *display* on touched, the rules themselves
//! only look at values.

use crate::field::Field;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

// Standard email syntax: non-empty local part, one @, dotted domain.
// No whitespace anywhere.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

pub const NAME_REQUIRED: &str = "Name is required!";
pub const NAME_TOO_SHORT: &str = "Name is too short!";
pub const NAME_TOO_LONG: &str = "Name is too long!";
pub const EMAIL_REQUIRED: &str = "Email is required!";
pub const EMAIL_INVALID: &str = "Enter valid email";
pub const PASSWORD_REQUIRED: &str = "Password is required!";
pub const PASSWORD_LENGTH: &str = "Password length should be between 8-16";
pub const PHONE_REQUIRED: &str = "Phone number is required!";
pub const PHONE_INVALID: &str = "Enter valid phone number!";
pub const SALARY_REQUIRED: &str = "Salary is required!";

/// Run the rule for one field against its stored value.
///
/// Returns `None` when the value passes. Gender carries no rule (the choice
/// always holds a valid default), so it never fails.
///
/// # Examples
///
/// ```
/// use regform::{validators, Field};
///
/// assert_eq!(validators::check(Field::FullName, &serde_json::json!("Al")), None);
/// assert_eq!(
///     validators::check(Field::FullName, &serde_json::json!("A")),
///     Some(validators::NAME_TOO_SHORT)
/// );
/// assert_eq!(validators::check(Field::Gender, &serde_json::json!("male")), None);
/// ```
pub fn check(field: Field, value: &Value) -> Option<&'static str> {
	match field {
		Field::FullName => check_full_name(value.as_str().unwrap_or_default()),
		Field::Email => check_email(value.as_str().unwrap_or_default()),
		Field::Password => check_password(value.as_str().unwrap_or_default()),
		Field::PhoneNumber => check_phone_number(value.as_str().unwrap_or_default()),
		Field::Gender => None,
		Field::Salary => check_salary(value),
	}
}

/// True iff every field's rule passes for the values produced by `value_of`.
pub fn all_pass<'a>(mut value_of: impl FnMut(Field) -> &'a Value) -> bool {
	Field::ALL.into_iter().all(|f| check(f, value_of(f)).is_none())
}

fn check_full_name(value: &str) -> Option<&'static str> {
	// Character count, not byte count: names are not ASCII-only.
	let len = value.chars().count();
	if value.is_empty() {
		Some(NAME_REQUIRED)
	} else if len < 2 {
		Some(NAME_TOO_SHORT)
	} else if len > 50 {
		Some(NAME_TOO_LONG)
	} else {
		None
	}
}

fn check_email(value: &str) -> Option<&'static str> {
	if value.is_empty() {
		Some(EMAIL_REQUIRED)
	} else if !EMAIL_REGEX.is_match(value) {
		Some(EMAIL_INVALID)
	} else {
		None
	}
}

fn check_password(value: &str) -> Option<&'static str> {
	let len = value.chars().count();
	if value.is_empty() {
		Some(PASSWORD_REQUIRED)
	} else if !(8..=16).contains(&len) {
		Some(PASSWORD_LENGTH)
	} else {
		None
	}
}

fn check_phone_number(value: &str) -> Option<&'static str> {
	// Length-only rule: the input mode constrains content to digits
	// upstream, the rule itself does not strip or reject non-digits.
	if value.is_empty() {
		Some(PHONE_REQUIRED)
	} else if value.chars().count() != 10 {
		Some(PHONE_INVALID)
	} else {
		None
	}
}

fn check_salary(value: &Value) -> Option<&'static str> {
	// Unparsable input was already degraded to Null by normalization, so
	// "required" is the only rule left to state.
	if value.as_f64().is_some() {
		None
	} else {
		Some(SALARY_REQUIRED)
	}
}
