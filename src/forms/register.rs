use validator::{Validate, ValidationError};

use super::parse::split_name;
use super::{invalid, FieldSpec, Form};
use crate::api::NewAccount;

const ACCOUNT_TYPES: &[&str] = &["user", "business"];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Full Name"),
    FieldSpec::text("email", "Email"),
    FieldSpec::text("password", "Password").secret(),
    FieldSpec::text("account_type", "Role").choice(ACCOUNT_TYPES),
];

fn known_account_type(value: &str) -> Result<(), ValidationError> {
    if ACCOUNT_TYPES.contains(&value) {
        Ok(())
    } else {
        Err(invalid("account_type", "Please select an account type"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    User,
    Business,
}

#[derive(Debug, Clone, Validate)]
pub struct RegisterForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(custom(function = "known_account_type"))]
    pub account_type: String,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            account_type: ACCOUNT_TYPES[0].to_string(),
        }
    }
}

impl RegisterForm {
    pub fn account_type(&self) -> Option<AccountType> {
        match self.account_type.as_str() {
            "user" => Some(AccountType::User),
            "business" => Some(AccountType::Business),
            _ => None,
        }
    }

    /// The API has no role field; the choice only shapes the client flow
    pub fn to_new_account(&self) -> NewAccount {
        let name = split_name(&self.name);
        NewAccount {
            first_name: name.first,
            last_name: name.last,
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

impl Form for RegisterForm {
    const FIELDS: &'static [FieldSpec] = FIELDS;

    fn value(&self, index: usize) -> &str {
        match index {
            0 => &self.name,
            1 => &self.email,
            2 => &self.password,
            _ => &self.account_type,
        }
    }

    fn value_mut(&mut self, index: usize) -> &mut String {
        match index {
            0 => &mut self.name,
            1 => &mut self.email,
            2 => &mut self.password,
            _ => &mut self.account_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegisterForm {
        RegisterForm {
            name: "Ana de la Cruz".into(),
            email: " ana@example.com ".into(),
            password: "longenough".into(),
            ..RegisterForm::default()
        }
    }

    #[test]
    fn defaults_to_user_account() {
        let form = RegisterForm::default();
        assert_eq!(form.account_type(), Some(AccountType::User));
    }

    #[test]
    fn rejects_unknown_account_type() {
        let form = RegisterForm {
            account_type: "admin".into(),
            ..filled()
        };
        let errors = form.check().unwrap_err();
        assert_eq!(errors.get("account_type"), Some("Please select an account type"));
    }

    #[test]
    fn payload_keeps_multi_word_surname() {
        let account = filled().to_new_account();
        assert_eq!(account.first_name, "Ana");
        assert_eq!(account.last_name, "de la Cruz");
        assert_eq!(account.email, "ana@example.com");
    }
}
