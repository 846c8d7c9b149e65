//! Form submission flows: validate locally, call the API, and turn the
//! outcome into a notice plus an optional redirect.

mod auth;
mod profile;

pub use auth::{submit_login, submit_registration};
pub use profile::{ProfileSaved, load_profile, profile_view, submit_profile_update};

use crate::api::ApiError;
use crate::forms::FieldErrors;
use crate::route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

/// Transient message shown in the status line until the next key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    /// Error notice carrying the server's message, or `fallback` without one
    pub fn from_api(error: &ApiError, fallback: &str) -> Self {
        Self::error(error.server_message().unwrap_or(fallback))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Field-scoped problems; nothing was sent
    #[error("{0}")]
    Invalid(FieldErrors),

    #[error("{}", .0.message)]
    Failed(Notice),
}

impl SubmitError {
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            SubmitError::Failed(notice) => Some(notice),
            SubmitError::Invalid(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Submitted {
    pub notice: Notice,
    pub redirect: Option<Route>,
}
