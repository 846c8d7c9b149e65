use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use reqwest::StatusCode;

use super::{
    ApiError, ApiResult, Credentials, NewAccount, PortalApi, ProfileRecord, ProfileUpdate,
    UserName,
};

/// What a scripted call should answer with
#[derive(Clone)]
pub enum Reply<T> {
    Ok(T),
    Unauthorized(Option<&'static str>),
    Status(u16, Option<&'static str>),
    Decode,
}

impl<T: Clone> Reply<T> {
    fn resolve(&self) -> ApiResult<T> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Unauthorized(message) => Err(ApiError::Unauthorized {
                message: message.map(str::to_string),
            }),
            Reply::Status(code, message) => Err(ApiError::Status {
                status: StatusCode::from_u16(*code).unwrap(),
                message: message.map(str::to_string),
            }),
            Reply::Decode => Err(ApiError::Decode("scripted".into())),
        }
    }
}

/// Scripted [`PortalApi`] that counts every call it receives
pub struct FakeApi {
    pub calls: AtomicUsize,
    pub login: Reply<Option<String>>,
    pub register: Reply<()>,
    pub user_name: Reply<UserName>,
    pub user_data: Reply<Vec<ProfileRecord>>,
    pub update: Reply<()>,
    pub sent_accounts: Mutex<Vec<NewAccount>>,
    pub sent_updates: Mutex<Vec<ProfileUpdate>>,
    pub seen_tokens: Mutex<Vec<String>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            login: Reply::Ok(Some("tok-123".into())),
            register: Reply::Ok(()),
            user_name: Reply::Ok(UserName {
                name: "Jane Doe".into(),
                role: crate::models::Role::User,
            }),
            user_data: Reply::Ok(Vec::new()),
            update: Reply::Ok(()),
            sent_accounts: Mutex::default(),
            sent_updates: Mutex::default(),
            seen_tokens: Mutex::default(),
        }
    }
}

impl FakeApi {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self, token: Option<&str>) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(token) = token {
            self.seen_tokens.lock().unwrap().push(token.to_string());
        }
    }
}

#[async_trait]
impl PortalApi for FakeApi {
    async fn login(&self, _credentials: &Credentials) -> ApiResult<Option<String>> {
        self.hit(None);
        self.login.resolve()
    }

    async fn register(&self, account: &NewAccount) -> ApiResult<()> {
        self.hit(None);
        self.sent_accounts.lock().unwrap().push(account.clone());
        self.register.resolve()
    }

    async fn user_name(&self, token: &str) -> ApiResult<UserName> {
        self.hit(Some(token));
        self.user_name.resolve()
    }

    async fn user_data(&self, token: &str) -> ApiResult<Vec<ProfileRecord>> {
        self.hit(Some(token));
        self.user_data.resolve()
    }

    async fn update_profile(&self, token: &str, update: &ProfileUpdate) -> ApiResult<()> {
        self.hit(Some(token));
        self.sent_updates.lock().unwrap().push(update.clone());
        self.update.resolve()
    }
}
