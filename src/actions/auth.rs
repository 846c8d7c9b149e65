use tracing::{info, warn};

use super::{Notice, SubmitError, Submitted};
use crate::api::PortalApi;
use crate::forms::{Form, LoginForm, RegisterForm};
use crate::route::Route;
use crate::session::Session;

const LOGIN_FAILED: &str = "Failed to login. Please try again.";
const NO_TOKEN: &str = "Login failed. No token received.";
const REGISTER_FAILED: &str = "Failed to create account. Please try again.";

pub async fn submit_login(
    api: &dyn PortalApi,
    session: &mut Session,
    form: &LoginForm,
) -> Result<Submitted, SubmitError> {
    form.check().map_err(SubmitError::Invalid)?;

    let token = match api.login(&form.to_credentials()).await {
        Ok(Some(token)) => token,
        Ok(None) => {
            warn!("login succeeded without a token");
            return Err(SubmitError::Failed(Notice::error(NO_TOKEN)));
        }
        Err(e) => {
            warn!(error = %e, "login failed");
            return Err(SubmitError::Failed(Notice::from_api(&e, LOGIN_FAILED)));
        }
    };

    session.establish(&token).map_err(|e| {
        warn!(error = %e, "could not persist session token");
        SubmitError::Failed(Notice::error(LOGIN_FAILED))
    })?;
    info!("logged in");

    Ok(Submitted {
        notice: Notice::success("Successfully logged in!"),
        redirect: Some(Route::Jobs),
    })
}

pub async fn submit_registration(
    api: &dyn PortalApi,
    form: &RegisterForm,
) -> Result<Submitted, SubmitError> {
    form.check().map_err(SubmitError::Invalid)?;

    if let Err(e) = api.register(&form.to_new_account()).await {
        warn!(error = %e, "registration failed");
        return Err(SubmitError::Failed(Notice::from_api(&e, REGISTER_FAILED)));
    }
    info!(account_type = ?form.account_type(), "account created");

    // Both account types sign in the same way afterwards
    Ok(Submitted {
        notice: Notice::success("Account created successfully!"),
        redirect: Some(Route::Login),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::NoticeLevel;
    use crate::api::fake::{FakeApi, Reply};
    use crate::session::MemoryTokenStore;

    fn anonymous() -> Session {
        Session::new(Box::new(MemoryTokenStore::default()))
    }

    fn login_form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn invalid_email_never_reaches_the_network() {
        let api = FakeApi::default();
        let mut session = anonymous();

        for email in ["", "jane", "jane@", "@example.com", "ja ne@example.com"] {
            let result = submit_login(&api, &mut session, &login_form(email, "longenough")).await;
            match result {
                Err(SubmitError::Invalid(errors)) => assert!(errors.get("email").is_some()),
                other => panic!("expected validation error for {email:?}, got {other:?}"),
            }
        }
        assert_eq!(api.calls(), 0);
        assert_eq!(session.token(), None);
    }

    #[tokio::test]
    async fn successful_login_persists_token_and_redirects_to_jobs() {
        let api = FakeApi {
            login: Reply::Ok(Some("fresh-token".into())),
            ..FakeApi::default()
        };
        let mut session = anonymous();

        let submitted = submit_login(&api, &mut session, &login_form("jane@example.com", "longenough"))
            .await
            .unwrap();

        assert_eq!(session.token().as_deref(), Some("fresh-token"));
        assert_eq!(submitted.redirect, Some(Route::Jobs));
        assert_eq!(submitted.notice.level, NoticeLevel::Success);
    }

    #[tokio::test]
    async fn login_without_token_is_an_error() {
        let api = FakeApi {
            login: Reply::Ok(None),
            ..FakeApi::default()
        };
        let mut session = anonymous();

        let err = submit_login(&api, &mut session, &login_form("jane@example.com", "longenough"))
            .await
            .unwrap_err();

        assert_eq!(err.notice().unwrap().message, NO_TOKEN);
        assert_eq!(session.token(), None);
    }

    #[tokio::test]
    async fn login_error_uses_server_message_or_fallback() {
        let mut session = anonymous();
        let form = login_form("jane@example.com", "longenough");

        let api = FakeApi {
            login: Reply::Status(400, Some("Invalid credentials")),
            ..FakeApi::default()
        };
        let err = submit_login(&api, &mut session, &form).await.unwrap_err();
        assert_eq!(err.notice().unwrap().message, "Invalid credentials");

        let api = FakeApi {
            login: Reply::Status(502, None),
            ..FakeApi::default()
        };
        let err = submit_login(&api, &mut session, &form).await.unwrap_err();
        assert_eq!(err.notice().unwrap().message, LOGIN_FAILED);
    }

    #[tokio::test]
    async fn unauthorized_login_uses_server_message() {
        let mut session = anonymous();
        let form = login_form("jane@example.com", "longenough");

        let api = FakeApi {
            login: Reply::Unauthorized(Some("Invalid email or password")),
            ..FakeApi::default()
        };
        let err = submit_login(&api, &mut session, &form).await.unwrap_err();
        assert_eq!(err.notice().unwrap().message, "Invalid email or password");

        let api = FakeApi {
            login: Reply::Unauthorized(None),
            ..FakeApi::default()
        };
        let err = submit_login(&api, &mut session, &form).await.unwrap_err();
        assert_eq!(err.notice().unwrap().message, LOGIN_FAILED);
    }

    #[tokio::test]
    async fn short_registration_password_never_reaches_the_network() {
        let api = FakeApi::default();

        for password in ["", "a", "seven77"] {
            let form = RegisterForm {
                name: "Jane Doe".into(),
                email: "jane@example.com".into(),
                password: password.into(),
                ..RegisterForm::default()
            };
            let err = submit_registration(&api, &form).await.unwrap_err();
            let SubmitError::Invalid(errors) = err else {
                panic!("expected validation error");
            };
            assert_eq!(
                errors.get("password"),
                Some("Password must be at least 8 characters")
            );
        }
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn registration_sends_split_name_and_redirects_to_login() {
        let api = FakeApi::default();
        let form = RegisterForm {
            name: "Jane van Doe".into(),
            email: "jane@example.com".into(),
            password: "longenough".into(),
            account_type: "business".into(),
        };

        let submitted = submit_registration(&api, &form).await.unwrap();

        assert_eq!(submitted.redirect, Some(Route::Login));
        let sent = api.sent_accounts.lock().unwrap();
        assert_eq!(sent[0].first_name, "Jane");
        assert_eq!(sent[0].last_name, "van Doe");
    }

    #[tokio::test]
    async fn registration_failure_falls_back_to_generic_message() {
        let api = FakeApi {
            register: Reply::Decode,
            ..FakeApi::default()
        };
        let form = RegisterForm {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            password: "longenough".into(),
            ..RegisterForm::default()
        };

        let err = submit_registration(&api, &form).await.unwrap_err();
        assert_eq!(err.notice().unwrap().message, REGISTER_FAILED);
    }
}
