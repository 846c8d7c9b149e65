//! Session context shared by every screen.
//!
//! The session is created once at start-up, refreshed on every route change
//! and torn down by [`Session::sign_out`]. The only persisted piece is the
//! bearer token, kept by a [`TokenStore`].

mod store;

use tracing::{error, info, warn};

use crate::api::{ApiError, PortalApi};
use crate::models::Role;

pub use store::{FileTokenStore, MemoryTokenStore, StoreError, TokenStore};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Anonymous,
    Authenticated { name: String, role: Role },
}

pub struct Session {
    store: Box<dyn TokenStore>,
    state: SessionState,
}

impl Session {
    pub fn new(store: Box<dyn TokenStore>) -> Self {
        Self {
            store,
            state: SessionState::Anonymous,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated { .. })
    }

    pub fn role(&self) -> Option<Role> {
        match &self.state {
            SessionState::Authenticated { role, .. } => Some(*role),
            SessionState::Anonymous => None,
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        match &self.state {
            SessionState::Authenticated { name, .. } => Some(name),
            SessionState::Anonymous => None,
        }
    }

    /// Anonymous visitors and business accounts see "For Businesses"
    pub fn shows_business_link(&self) -> bool {
        self.role().is_none_or(Role::can_post_jobs)
    }

    /// The persisted bearer token, if any
    pub fn token(&self) -> Option<String> {
        match self.store.load() {
            Ok(token) => token,
            Err(e) => {
                error!(error = %e, "could not read session token");
                None
            }
        }
    }

    /// Re-derive the session from the persisted token.
    ///
    /// A 401 from the lookup clears the token; any other failure keeps the
    /// current state and is only logged.
    pub async fn refresh(&mut self, api: &dyn PortalApi) {
        let token = match self.store.load() {
            Ok(Some(token)) => token,
            Ok(None) => {
                self.state = SessionState::Anonymous;
                return;
            }
            Err(e) => {
                error!(error = %e, "could not read session token");
                return;
            }
        };

        match api.user_name(&token).await {
            Ok(user) => {
                if !self.is_authenticated() {
                    info!(role = %user.role, "session authenticated");
                }
                self.state = SessionState::Authenticated {
                    name: user.name,
                    role: user.role,
                };
            }
            Err(ApiError::Unauthorized { .. }) => {
                warn!("session expired, clearing token");
                self.discard_token();
                self.state = SessionState::Anonymous;
            }
            Err(e) => {
                error!(error = %e, "user-name lookup failed");
            }
        }
    }

    /// Persist a freshly issued token; the next refresh picks up the user
    pub fn establish(&mut self, token: &str) -> Result<(), StoreError> {
        self.store.save(token)?;
        info!("session token stored");
        Ok(())
    }

    pub fn sign_out(&mut self) {
        self.discard_token();
        self.state = SessionState::Anonymous;
        info!("signed out");
    }

    fn discard_token(&self) {
        if let Err(e) = self.store.clear() {
            error!(error = %e, "could not clear session token");
        }
    }
}

/// First letters of the first and last word, upper-cased
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let first = words.next().and_then(|w| w.chars().next());
    let last = words.next_back().and_then(|w| w.chars().next());

    first
        .into_iter()
        .chain(last)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::api::fake::{FakeApi, Reply};
    use crate::api::UserName;

    fn session_with(token: Option<&str>) -> Session {
        let store = match token {
            Some(token) => MemoryTokenStore::with_token(token),
            None => MemoryTokenStore::default(),
        };
        Session::new(Box::new(store))
    }

    #[tokio::test]
    async fn no_token_means_anonymous_without_lookup() {
        let api = FakeApi::default();
        let mut session = session_with(None);

        session.refresh(&api).await;

        assert_eq!(session.state(), &SessionState::Anonymous);
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn lookup_success_authenticates_with_bearer_token() {
        let api = FakeApi {
            user_name: Reply::Ok(UserName {
                name: "Acme Hiring".into(),
                role: Role::Business,
            }),
            ..FakeApi::default()
        };
        let mut session = session_with(Some("tok-1"));

        session.refresh(&api).await;

        assert_eq!(
            session.state(),
            &SessionState::Authenticated {
                name: "Acme Hiring".into(),
                role: Role::Business
            }
        );
        assert_eq!(*api.seen_tokens.lock().unwrap(), vec!["tok-1".to_string()]);
        assert!(session.shows_business_link());
    }

    #[tokio::test]
    async fn unauthorized_lookup_clears_token_and_session() {
        let api = FakeApi {
            user_name: Reply::Unauthorized(None),
            ..FakeApi::default()
        };
        let mut session = session_with(Some("stale"));
        session.state = SessionState::Authenticated {
            name: "Jane".into(),
            role: Role::User,
        };

        session.refresh(&api).await;

        assert_eq!(session.state(), &SessionState::Anonymous);
        assert_eq!(session.token(), None);
    }

    #[traced_test]
    #[tokio::test]
    async fn other_failures_keep_state_and_are_logged() {
        let api = FakeApi {
            user_name: Reply::Status(500, Some("boom")),
            ..FakeApi::default()
        };
        let mut session = session_with(Some("tok"));
        let before = SessionState::Authenticated {
            name: "Jane".into(),
            role: Role::Freelancer,
        };
        session.state = before.clone();

        session.refresh(&api).await;

        assert_eq!(session.state(), &before);
        assert_eq!(session.token().as_deref(), Some("tok"));
        assert!(logs_contain("user-name lookup failed"));
    }

    #[test]
    fn sign_out_clears_everything() {
        let mut session = session_with(Some("tok"));
        session.state = SessionState::Authenticated {
            name: "Jane".into(),
            role: Role::User,
        };

        session.sign_out();

        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn business_link_is_hidden_from_job_seekers() {
        let mut session = session_with(None);
        assert!(session.shows_business_link());

        for role in [Role::User, Role::Freelancer] {
            session.state = SessionState::Authenticated {
                name: "x".into(),
                role,
            };
            assert!(!session.shows_business_link());
        }
    }

    #[test]
    fn initials_use_first_and_last_word() {
        assert_eq!(initials("Jane Q Doe"), "JD");
        assert_eq!(initials("cher"), "C");
        assert_eq!(initials("  "), "");
    }
}
