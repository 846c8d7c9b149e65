use validator::Validate;

use super::{FieldSpec, Form};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("full_name", "Full Name"),
    FieldSpec::text("email", "Email"),
    FieldSpec::text("phone", "Phone Number"),
    FieldSpec::text("resume", "Resume/CV (PDF, DOCX, max 5MB)"),
    FieldSpec::text("cover_letter", "Cover Letter"),
];

/// Inline job application; kept locally, there is no endpoint to send it to
#[derive(Debug, Clone, Default, Validate)]
pub struct ApplicationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub resume: String,
    pub cover_letter: String,
}

impl Form for ApplicationForm {
    const FIELDS: &'static [FieldSpec] = FIELDS;

    fn value(&self, index: usize) -> &str {
        match index {
            0 => &self.full_name,
            1 => &self.email,
            2 => &self.phone,
            3 => &self.resume,
            _ => &self.cover_letter,
        }
    }

    fn value_mut(&mut self, index: usize) -> &mut String {
        match index {
            0 => &mut self.full_name,
            1 => &mut self.email,
            2 => &mut self.phone,
            3 => &mut self.resume,
            _ => &mut self.cover_letter,
        }
    }
}
