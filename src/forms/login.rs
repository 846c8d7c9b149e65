use validator::Validate;

use super::{FieldSpec, Form};
use crate::api::Credentials;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("email", "Email"),
    FieldSpec::text("password", "Password").secret(),
];

#[derive(Debug, Clone, Default, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

impl LoginForm {
    pub fn to_credentials(&self) -> Credentials {
        Credentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

impl Form for LoginForm {
    const FIELDS: &'static [FieldSpec] = FIELDS;

    fn value(&self, index: usize) -> &str {
        match index {
            0 => &self.email,
            _ => &self.password,
        }
    }

    fn value_mut(&mut self, index: usize) -> &mut String {
        match index {
            0 => &mut self.email,
            _ => &mut self.password,
        }
    }
}
