//! Client side of the job-portal HTTP API.
//!
//! Screens and actions only ever talk to [`PortalApi`]; the reqwest backed
//! [`HttpPortalApi`] is wired in by `main`.

mod http;
pub mod wire;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use reqwest::StatusCode;

pub use http::HttpPortalApi;
pub use wire::{Credentials, NewAccount, ProfileRecord, ProfileUpdate, UserName};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 401 from the server: the bearer token is missing, invalid or expired
    #[error("session expired or not authorized")]
    Unauthorized { message: Option<String> },

    #[error("server returned {status}")]
    Status {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error(transparent)]
    InvalidRole(#[from] crate::models::UnknownRole),
}

impl ApiError {
    /// Message the server put in its error body, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message } | ApiError::Status { message, .. } => {
                message.as_deref()
            }
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[async_trait]
pub trait PortalApi: Send + Sync {
    /// `POST /users/login`; returns the issued token, if the server sent one
    async fn login(&self, credentials: &Credentials) -> ApiResult<Option<String>>;

    /// `POST /users/`
    async fn register(&self, account: &NewAccount) -> ApiResult<()>;

    /// `GET /users/get/user-name`
    async fn user_name(&self, token: &str) -> ApiResult<UserName>;

    /// `GET /users/user_data`
    async fn user_data(&self, token: &str) -> ApiResult<Vec<ProfileRecord>>;

    /// `PUT /users/`
    async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> ApiResult<()>;
}
