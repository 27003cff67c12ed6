//! The registration form: event handling, submission gate, lifecycle.
//!
//! Control flow: user input → normalization → registry update → rule
//! re-evaluation → derived view state; on submit, if the form is dirty and
//! valid, the full value record is emitted to an external handler and the
//! form state is discarded.

use crate::field::{Field, FieldView};
use crate::registry::FieldRegistry;
use crate::values::{Address, FormValues, Gender};

/// Raw events from the input boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
	/// A control's value changed.
	Change { field: Field, value: String },
	/// A control lost focus.
	Blur { field: Field },
}

/// Reasons a submit is suppressed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
	#[error("form has validation errors")]
	Invalid,
	#[error("form values are unchanged from their initial state")]
	Pristine,
}

pub type FormResult<T> = Result<T, FormError>;

/// Registration form state machine.
///
/// Owns the editable field registry, the read-only address block and the
/// password visibility flag. All mutation happens synchronously through
/// [`handle`] (or the [`set_value`] / [`mark_touched`] shortcuts).
///
/// [`handle`]: RegistrationForm::handle
/// [`set_value`]: RegistrationForm::set_value
/// [`mark_touched`]: RegistrationForm::mark_touched
///
/// # Examples
///
/// ```
/// use regform::{Address, Field, InputEvent, RegistrationForm};
///
/// let mut form = RegistrationForm::new(Address::default());
/// assert!(!form.can_submit());
///
/// form.handle(InputEvent::Change { field: Field::Email, value: "a@b".into() });
/// form.handle(InputEvent::Blur { field: Field::Email });
/// assert_eq!(form.field(Field::Email).error, Some("Enter valid email"));
/// ```
#[derive(Debug, Clone)]
pub struct RegistrationForm {
	registry: FieldRegistry,
	address: Address,
	show_password: bool,
}

impl RegistrationForm {
	/// Mount the form with its fixed address block. Editable fields start
	/// at their initial values; nothing is touched, nothing is dirty.
	pub fn new(address: Address) -> Self {
		Self {
			registry: FieldRegistry::new(),
			address,
			show_password: false,
		}
	}

	/// Apply one input-boundary event.
	pub fn handle(&mut self, event: InputEvent) {
		match event {
			InputEvent::Change { field, value } => self.registry.set_value(field, &value),
			InputEvent::Blur { field } => self.registry.mark_touched(field),
		}
	}

	pub fn set_value(&mut self, field: Field, raw: &str) {
		self.registry.set_value(field, raw);
	}

	pub fn mark_touched(&mut self, field: Field) {
		self.registry.mark_touched(field);
	}

	/// Snapshot of one field for the rendering boundary.
	pub fn field(&self, field: Field) -> FieldView {
		self.registry.view(field)
	}

	/// Snapshots of every editable field, in form order.
	pub fn fields(&self) -> impl Iterator<Item = FieldView> + '_ {
		Field::ALL.into_iter().map(|f| self.registry.view(f))
	}

	pub fn address(&self) -> &Address {
		&self.address
	}

	pub fn is_valid(&self) -> bool {
		self.registry.is_valid()
	}

	pub fn is_dirty(&self) -> bool {
		self.registry.is_dirty()
	}

	/// The submit control is enabled iff the form is both dirty and valid.
	pub fn can_submit(&self) -> bool {
		self.is_dirty() && self.is_valid()
	}

	/// Password visibility flag for the view layer. Purely presentational;
	/// no validation interaction.
	pub fn show_password(&self) -> bool {
		self.show_password
	}

	pub fn toggle_password_visibility(&mut self) {
		self.show_password = !self.show_password;
	}

	/// The current typed value record (salary as a plain number, address
	/// verbatim). Available at any time; `submit` gates on validity.
	pub fn values(&self) -> FormValues {
		let text = |field: Field| {
			self.registry
				.value(field)
				.as_str()
				.unwrap_or_default()
				.to_string()
		};
		let gender = self
			.registry
			.value(Field::Gender)
			.as_str()
			.and_then(Gender::parse)
			.unwrap_or_default();

		FormValues {
			full_name: text(Field::FullName),
			email: text(Field::Email),
			password: text(Field::Password),
			phone_number: text(Field::PhoneNumber),
			gender,
			address: self.address.clone(),
			salary: self.registry.value(Field::Salary).as_f64(),
		}
	}

	/// Attempt a submit. If the form is invalid or pristine the action is
	/// suppressed and nothing is emitted. On success the handler receives
	/// the full value record and the form state is reset (state does not
	/// outlive a successful submit).
	///
	/// # Examples
	///
	/// ```
	/// use regform::{Address, Field, RegistrationForm};
	///
	/// let mut form = RegistrationForm::new(Address::default());
	/// form.set_value(Field::Email, "john@example.com");
	/// form.set_value(Field::Password, "secret123");
	/// form.set_value(Field::PhoneNumber, "1234567890");
	/// form.set_value(Field::Salary, "50,000");
	///
	/// let mut submitted = None;
	/// form.submit(|values| submitted = Some(values)).unwrap();
	/// assert_eq!(submitted.unwrap().salary, Some(50000.0));
	/// assert!(!form.is_dirty());
	/// ```
	pub fn submit<F>(&mut self, on_submit: F) -> FormResult<()>
	where
		F: FnOnce(FormValues),
	{
		if !self.is_valid() {
			tracing::debug!("submit suppressed: form has validation errors");
			return Err(FormError::Invalid);
		}
		if !self.is_dirty() {
			tracing::debug!("submit suppressed: form is pristine");
			return Err(FormError::Pristine);
		}

		let values = self.values();
		tracing::info!(
			values = %serde_json::to_string(&values).unwrap_or_default(),
			"registration form submitted"
		);
		on_submit(values);
		self.registry.reset();
		Ok(())
	}

	/// Discard all field state (the unmount path).
	pub fn reset(&mut self) {
		self.registry.reset();
	}
}

impl Default for RegistrationForm {
	fn default() -> Self {
		Self::new(Address::default())
	}
}
