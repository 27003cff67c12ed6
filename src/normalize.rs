//! Input normalization and display formatting.
//!
//! Normalization runs between the raw control value and storage: salary
//! input has its grouping separators stripped and is parsed as a number;
//! every other field is stored as-is (no trimming, no case changes).
//! Display formatting is the inverse boundary: the stored salary number is
//! rendered comma-grouped, everything else renders its raw stored text.

use crate::field::Field;
use serde_json::Value;

/// Normalize raw input for storage.
///
/// # Examples
///
/// ```
/// use regform::{normalize, Field};
///
/// assert_eq!(normalize::normalize(Field::Salary, "1,234,567"), serde_json::json!(1234567.0));
/// assert_eq!(normalize::normalize(Field::Salary, "abc"), serde_json::Value::Null);
/// assert_eq!(normalize::normalize(Field::FullName, "  John "), serde_json::json!("  John "));
/// ```
pub fn normalize(field: Field, raw: &str) -> Value {
	match field {
		Field::Salary => parse_salary(raw),
		_ => Value::String(raw.to_string()),
	}
}

// Strip grouping separators and parse the remainder as a float. Empty or
// unparsable input degrades to "no value" rather than an error; the
// required-field rule surfaces it later.
fn parse_salary(raw: &str) -> Value {
	let ungrouped: String = raw.chars().filter(|c| *c != ',').collect();
	let ungrouped = ungrouped.trim();
	if ungrouped.is_empty() {
		return Value::Null;
	}
	match ungrouped.parse::<f64>() {
		Ok(n) if n.is_finite() => serde_json::json!(n),
		_ => Value::Null,
	}
}

/// Format a stored value for presentation.
///
/// Salary renders as the comma-grouped form of the stored number (empty
/// string for "no value"); all other fields return the raw stored text.
pub fn display_value(field: Field, value: &Value) -> String {
	match field {
		Field::Salary => value.as_f64().map(group_thousands).unwrap_or_default(),
		_ => value.as_str().unwrap_or_default().to_string(),
	}
}

/// Comma-group the integer part of a number; fractional digits pass
/// through unchanged.
///
/// # Examples
///
/// ```
/// use regform::normalize::group_thousands;
///
/// assert_eq!(group_thousands(1234567.0), "1,234,567");
/// assert_eq!(group_thousands(50000.0), "50,000");
/// assert_eq!(group_thousands(999.0), "999");
/// assert_eq!(group_thousands(1234.5), "1,234.5");
/// ```
pub fn group_thousands(n: f64) -> String {
	let raw = n.to_string();
	let (sign, rest) = match raw.strip_prefix('-') {
		Some(r) => ("-", r),
		None => ("", raw.as_str()),
	};

	let (int_part, frac_part) = match rest.split_once('.') {
		Some((i, f)) => (i, Some(f)),
		None => (rest, None),
	};

	let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 1);
	for (i, ch) in int_part.chars().enumerate() {
		if i > 0 && (int_part.len() - i) % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(ch);
	}

	match frac_part {
		Some(f) => format!("{sign}{grouped}.{f}"),
		None => format!("{sign}{grouped}"),
	}
}
