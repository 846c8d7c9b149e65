//! Declarative form schemas and synchronous validation.
//!
//! Each form is a plain struct of strings deriving `Validate`, plus a static
//! list of [`FieldSpec`]s for labels, masking and choices. Validation never
//! leaves the process; only a form that checks cleanly is turned into a wire
//! payload.

mod application;
mod login;
pub mod parse;
mod profile;
mod register;

use std::borrow::Cow;
use std::fmt;

use validator::{Validate, ValidationError, ValidationErrors};

pub use application::ApplicationForm;
pub use login::LoginForm;
pub use profile::ProfileForm;
pub use register::{AccountType, RegisterForm};

/// Static description of one input of a form
#[derive(Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    /// Rendered masked, e.g. passwords
    pub secret: bool,
    /// Closed set of values cycled through instead of typed
    pub choices: Option<&'static [&'static str]>,
}

impl FieldSpec {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            secret: false,
            choices: None,
        }
    }

    pub const fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    pub const fn choice(mut self, choices: &'static [&'static str]) -> Self {
        self.choices = Some(choices);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every failing field of a form, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// First message per field, ordered like `fields`
    fn from_validation(fields: &[FieldSpec], errors: &ValidationErrors) -> Self {
        let by_field = errors.field_errors();
        let mut out = FieldErrors::default();
        for field in fields {
            let first = by_field
                .iter()
                .find(|(name, _)| &***name == field.name)
                .and_then(|(_, errors)| errors.first());
            if let Some(error) = first {
                let message = match &error.message {
                    Some(message) => message.to_string(),
                    None => error.code.to_string(),
                };
                out.push(field.name, message);
            }
        }
        out
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_str()).collect();
        f.write_str(&messages.join("; "))
    }
}

/// Failure for a `custom` rule, carrying the message shown under the field
pub(crate) fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

pub trait Form: Validate {
    const FIELDS: &'static [FieldSpec];

    fn value(&self, index: usize) -> &str;

    fn value_mut(&mut self, index: usize) -> &mut String;

    /// Runs the derived rules; failures come back per field in field order
    fn check(&self) -> Result<(), FieldErrors> {
        Validate::validate(self).map_err(|errors| FieldErrors::from_validation(Self::FIELDS, &errors))
    }
}
