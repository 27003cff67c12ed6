//! Field registry: owned form state with explicit mutation entry points.
//!
//! The registry holds the current value, touched flag and displayed error
//! for every editable field, plus the initial values the dirty check
//! compares against. It is mutated exclusively through [`set_value`] and
//! [`mark_touched`]; everything else is a derived read.
//!
//! [`set_value`]: FieldRegistry::set_value
//! [`mark_touched`]: FieldRegistry::mark_touched

use crate::field::{Field, FieldState, FieldView};
use crate::{normalize, validators};
use serde_json::Value;
use std::collections::HashMap;

/// Ordered set of editable fields with their state.
///
/// # Examples
///
/// ```
/// use regform::{Field, FieldRegistry};
///
/// let mut registry = FieldRegistry::new();
/// assert!(!registry.is_dirty());
///
/// registry.set_value(Field::Email, "john@example.com");
/// assert!(registry.is_dirty());
/// assert_eq!(registry.display_value(Field::Email), "john@example.com");
/// ```
#[derive(Debug, Clone)]
pub struct FieldRegistry {
	states: HashMap<Field, FieldState>,
	initial: HashMap<Field, Value>,
}

impl FieldRegistry {
	/// Create a registry seeded with the form's initial values: a
	/// pre-filled sample name, the default gender choice, and everything
	/// else empty.
	pub fn new() -> Self {
		let initial: HashMap<Field, Value> = Field::ALL
			.into_iter()
			.map(|f| (f, initial_value(f)))
			.collect();
		let states = initial
			.iter()
			.map(|(f, v)| (*f, FieldState::new(v.clone())))
			.collect();
		Self { states, initial }
	}

	/// Normalize `raw` per the field's rule, store it, and recompute the
	/// field's error entry. Does not mark the field touched.
	pub fn set_value(&mut self, field: Field, raw: &str) {
		let value = normalize::normalize(field, raw);
		let state = self.state_mut(field);
		state.value = value;
		state.error = if state.touched {
			validators::check(field, &state.value)
		} else {
			None
		};
	}

	/// Record that the field has lost focus at least once. The value is
	/// untouched, but a pending rule failure becomes visible.
	pub fn mark_touched(&mut self, field: Field) {
		let state = self.state_mut(field);
		state.touched = true;
		state.error = validators::check(field, &state.value);
	}

	/// The stored (normalized) value.
	pub fn value(&self, field: Field) -> &Value {
		&self.state(field).value
	}

	pub fn touched(&self, field: Field) -> bool {
		self.state(field).touched
	}

	/// The displayed error, if any. Present iff the field is touched and
	/// its value fails its rule.
	pub fn error(&self, field: Field) -> Option<&'static str> {
		self.state(field).error
	}

	/// The rule result regardless of touched state. Used for overall
	/// validity; not for display.
	pub fn check(&self, field: Field) -> Option<&'static str> {
		validators::check(field, &self.state(field).value)
	}

	/// The value formatted for presentation (salary comma-grouped, all
	/// other fields raw).
	pub fn display_value(&self, field: Field) -> String {
		normalize::display_value(field, &self.state(field).value)
	}

	/// Snapshot of one field for the rendering boundary.
	pub fn view(&self, field: Field) -> FieldView {
		let state = self.state(field);
		FieldView {
			field,
			value: state.value.clone(),
			display_value: self.display_value(field),
			error: state.error,
			touched: state.touched,
		}
	}

	/// True iff every field's rule passes, touched or not.
	pub fn is_valid(&self) -> bool {
		validators::all_pass(|f| &self.state(f).value)
	}

	/// True iff any field's value differs from its initial value.
	pub fn is_dirty(&self) -> bool {
		Field::ALL
			.into_iter()
			.any(|f| self.state(f).value != self.initial[&f])
	}

	/// Restore every field to its initial value, untouched and error-free.
	pub fn reset(&mut self) {
		for field in Field::ALL {
			let value = self.initial[&field].clone();
			self.states.insert(field, FieldState::new(value));
		}
	}

	fn state(&self, field: Field) -> &FieldState {
		self.states
			.get(&field)
			.unwrap_or_else(|| panic!("Field '{}' not in registry", field))
	}

	fn state_mut(&mut self, field: Field) -> &mut FieldState {
		self.states
			.get_mut(&field)
			.unwrap_or_else(|| panic!("Field '{}' not in registry", field))
	}
}

impl Default for FieldRegistry {
	fn default() -> Self {
		Self::new()
	}
}

fn initial_value(field: Field) -> Value {
	match field {
		Field::FullName => Value::String("John Doe".to_string()),
		Field::Gender => Value::String(crate::values::Gender::default().as_str().to_string()),
		Field::Salary => Value::Null,
		_ => Value::String(String::new()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::validators::{NAME_TOO_SHORT, PHONE_INVALID, SALARY_REQUIRED};
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_initial_state_is_pristine() {
		let registry = FieldRegistry::new();

		assert!(!registry.is_dirty());
		assert!(!registry.is_valid()); // email/password/phone/salary unfilled
		assert_eq!(registry.value(Field::FullName), &json!("John Doe"));
		assert_eq!(registry.value(Field::Gender), &json!("female"));
		assert_eq!(registry.value(Field::Salary), &Value::Null);
		for field in Field::ALL {
			assert!(!registry.touched(field));
			assert!(registry.error(field).is_none());
		}
	}

	#[rstest]
	fn test_set_value_does_not_mark_touched() {
		let mut registry = FieldRegistry::new();

		registry.set_value(Field::PhoneNumber, "12345");

		assert!(!registry.touched(Field::PhoneNumber));
		// Invalid, but untouched: no displayed error
		assert!(registry.error(Field::PhoneNumber).is_none());
		assert_eq!(registry.check(Field::PhoneNumber), Some(PHONE_INVALID));
	}

	#[rstest]
	fn test_blur_surfaces_pending_error() {
		let mut registry = FieldRegistry::new();
		registry.set_value(Field::FullName, "A");

		registry.mark_touched(Field::FullName);

		assert_eq!(registry.error(Field::FullName), Some(NAME_TOO_SHORT));
	}

	#[rstest]
	fn test_error_clears_when_value_becomes_valid() {
		let mut registry = FieldRegistry::new();
		registry.set_value(Field::PhoneNumber, "12345");
		registry.mark_touched(Field::PhoneNumber);
		assert_eq!(registry.error(Field::PhoneNumber), Some(PHONE_INVALID));

		registry.set_value(Field::PhoneNumber, "1234567890");

		assert!(registry.error(Field::PhoneNumber).is_none());
	}

	#[rstest]
	fn test_mark_touched_preserves_value() {
		let mut registry = FieldRegistry::new();
		registry.set_value(Field::Email, "john@example.com");

		registry.mark_touched(Field::Email);

		assert_eq!(registry.value(Field::Email), &json!("john@example.com"));
	}

	#[rstest]
	fn test_salary_empty_input_surfaces_required_after_blur() {
		let mut registry = FieldRegistry::new();
		registry.set_value(Field::Salary, "");
		registry.mark_touched(Field::Salary);

		assert_eq!(registry.error(Field::Salary), Some(SALARY_REQUIRED));

		registry.set_value(Field::Salary, "50000");
		assert!(registry.error(Field::Salary).is_none());
		assert_eq!(registry.display_value(Field::Salary), "50,000");
	}

	#[rstest]
	fn test_is_dirty_tracks_any_field() {
		let mut registry = FieldRegistry::new();
		assert!(!registry.is_dirty());

		registry.set_value(Field::Email, "a@b.co");
		assert!(registry.is_dirty());

		// Back to the initial value: pristine again
		registry.set_value(Field::Email, "");
		assert!(!registry.is_dirty());
	}

	#[rstest]
	fn test_retyping_the_initial_name_is_not_dirty() {
		let mut registry = FieldRegistry::new();
		registry.set_value(Field::FullName, "John Doe");
		assert!(!registry.is_dirty());
	}

	#[rstest]
	fn test_is_valid_flips_on_any_invalid_field() {
		let mut registry = FieldRegistry::new();
		registry.set_value(Field::Email, "john@example.com");
		registry.set_value(Field::Password, "secret123");
		registry.set_value(Field::PhoneNumber, "1234567890");
		registry.set_value(Field::Salary, "50000");
		assert!(registry.is_valid());

		registry.set_value(Field::Password, "short");
		assert!(!registry.is_valid());

		registry.set_value(Field::Password, "secret123");
		assert!(registry.is_valid());
	}

	#[rstest]
	fn test_reset_restores_initial_state() {
		let mut registry = FieldRegistry::new();
		registry.set_value(Field::Email, "a@b.co");
		registry.mark_touched(Field::Email);
		registry.set_value(Field::FullName, "");
		registry.mark_touched(Field::FullName);

		registry.reset();

		assert!(!registry.is_dirty());
		assert_eq!(registry.value(Field::FullName), &json!("John Doe"));
		for field in Field::ALL {
			assert!(!registry.touched(field));
			assert!(registry.error(field).is_none());
		}
	}

	#[rstest]
	fn test_view_snapshot() {
		let mut registry = FieldRegistry::new();
		registry.set_value(Field::Salary, "1,234,567");
		registry.mark_touched(Field::Salary);

		let view = registry.view(Field::Salary);

		assert_eq!(view.value, json!(1234567.0));
		assert_eq!(view.display_value, "1,234,567");
		assert!(view.touched);
		assert!(view.error.is_none());
		assert_eq!(view.label(), "Annual Salary");
		assert_eq!(view.adornment(), Some("Rs"));
	}
}
