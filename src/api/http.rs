use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::wire::{ErrorBody, LoginResponse, UserNameResponse};
use super::{
    ApiError, ApiResult, Credentials, NewAccount, PortalApi, ProfileRecord, ProfileUpdate,
    UserName,
};
use crate::config::Config;

const LOGIN_ENDPOINT: &str = "/users/login";
const USERS_ENDPOINT: &str = "/users/";
const USER_NAME_ENDPOINT: &str = "/users/get/user-name";
const USER_DATA_ENDPOINT: &str = "/users/user_data";

pub struct HttpPortalApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPortalApi {
    pub fn new(config: &Config) -> ApiResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.api_base_url().to_string(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn send(&self, endpoint: &str, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        debug!(endpoint, %status, "portal api response");

        if status.is_success() {
            return Ok(response);
        }

        // The body is only a hint for the notice; a garbled one is not an error of its own
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        warn!(endpoint, %status, ?message, "portal api call failed");

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized { message });
        }
        Err(ApiError::Status { status, message })
    }

    async fn decode<T: DeserializeOwned>(endpoint: &str, response: Response) -> ApiResult<T> {
        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| ApiError::Decode(format!("{endpoint}: {e}")))
    }
}

#[async_trait]
impl PortalApi for HttpPortalApi {
    async fn login(&self, credentials: &Credentials) -> ApiResult<Option<String>> {
        let request = self.client.post(self.url(LOGIN_ENDPOINT)).json(credentials);
        let response = self.send(LOGIN_ENDPOINT, request).await?;
        let body: LoginResponse = Self::decode(LOGIN_ENDPOINT, response).await?;

        Ok(body.token.filter(|token| !token.is_empty()))
    }

    async fn register(&self, account: &NewAccount) -> ApiResult<()> {
        let request = self.client.post(self.url(USERS_ENDPOINT)).json(account);
        self.send(USERS_ENDPOINT, request).await?;

        Ok(())
    }

    async fn user_name(&self, token: &str) -> ApiResult<UserName> {
        let request = self
            .client
            .get(self.url(USER_NAME_ENDPOINT))
            .bearer_auth(token);
        let response = self.send(USER_NAME_ENDPOINT, request).await?;
        let body: UserNameResponse = Self::decode(USER_NAME_ENDPOINT, response).await?;

        Ok(UserName::try_from(body.user)?)
    }

    async fn user_data(&self, token: &str) -> ApiResult<Vec<ProfileRecord>> {
        let request = self
            .client
            .get(self.url(USER_DATA_ENDPOINT))
            .bearer_auth(token);
        let response = self.send(USER_DATA_ENDPOINT, request).await?;

        Self::decode(USER_DATA_ENDPOINT, response).await
    }

    async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> ApiResult<()> {
        let request = self
            .client
            .put(self.url(USERS_ENDPOINT))
            .bearer_auth(token)
            .json(update);
        self.send(USERS_ENDPOINT, request).await?;

        Ok(())
    }
}
