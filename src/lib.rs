//! Registration form state and validation
//!
//! This crate models a client-side registration form as an explicit state
//! machine, independent of any rendering framework:
//!
//! - **Field registry**: an ordered set of named fields, each with a
//!   current value, a touched flag and a normalization rule
//! - **Validation engine**: pure per-field rules producing at most one
//!   error message each, plus an overall validity flag
//! - **Submission gate**: submit is enabled iff the form is dirty and
//!   valid; a successful submit emits a typed [`FormValues`] record and
//!   discards the form state
//!
//! Control flow: user input → normalization → registry update → rule
//! re-evaluation → derived view state (`{ value, display_value, error,
//! touched }` per field, `is_valid` / `is_dirty` overall).
//!
//! # Examples
//!
//! ```
//! use regform::{Address, Field, InputEvent, RegistrationForm};
//!
//! let mut form = RegistrationForm::new(Address::default());
//!
//! form.handle(InputEvent::Change { field: Field::Email, value: "john@example.com".into() });
//! form.handle(InputEvent::Change { field: Field::Password, value: "secret123".into() });
//! form.handle(InputEvent::Change { field: Field::PhoneNumber, value: "1234567890".into() });
//! form.handle(InputEvent::Change { field: Field::Salary, value: "1,234,567".into() });
//!
//! assert_eq!(form.field(Field::Salary).display_value, "1,234,567");
//! assert!(form.can_submit());
//!
//! form.submit(|values| {
//!     assert_eq!(values.salary, Some(1234567.0));
//! }).unwrap();
//! ```

pub mod field;
pub mod form;
pub mod normalize;
pub mod registry;
pub mod validators;
pub mod values;

pub use field::{Field, FieldError, FieldResult, FieldState, FieldView};
pub use form::{FormError, FormResult, InputEvent, RegistrationForm};
pub use registry::FieldRegistry;
pub use values::{Address, FormValues, Gender};
