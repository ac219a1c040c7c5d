use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

/// Sign-in/sign-up input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// An authenticated session. Presence of a session is what gates access to
/// the dashboard; everything in the dashboard is scoped by `user_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub email: String,
}

/// Error type for the authentication port.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("an account with this email already exists")]
    AccountExists,

    #[error("not signed in")]
    NoSession,

    #[error("auth backend failure: {0}")]
    Backend(String),
}

/// The authentication port.
#[async_trait]
pub trait Auth: Send + Sync {
    /// Create an account and sign it in.
    async fn sign_up(&self, credentials: &Credentials) -> Result<Session, AuthError>;

    /// Sign in with existing credentials.
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError>;

    /// The current session, if any.
    async fn session(&self) -> Option<Session>;

    /// Drop the current session.
    async fn sign_out(&self);
}

/// Fetch the current session or fail; callers redirect to the public entry
/// point on [`AuthError::NoSession`].
pub async fn require_session(auth: &dyn Auth) -> Result<Session, AuthError> {
    auth.session().await.ok_or(AuthError::NoSession)
}

#[derive(Debug, Default)]
struct MemoryAuthState {
    // email -> (user id, password)
    accounts: HashMap<String, (String, String)>,
    current: Option<Session>,
}

/// In-memory auth implementation for tests.
#[derive(Debug, Default)]
pub struct MemoryAuth {
    state: Mutex<MemoryAuthState>,
}

impl MemoryAuth {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Auth for MemoryAuth {
    async fn sign_up(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let mut state = self.state.lock().expect("auth state poisoned");
        if state.accounts.contains_key(&credentials.email) {
            return Err(AuthError::AccountExists);
        }
        let user_id = Uuid::new_v4().simple().to_string();
        state.accounts.insert(
            credentials.email.clone(),
            (user_id.clone(), credentials.password.clone()),
        );
        let session = Session {
            user_id,
            email: credentials.email.clone(),
        };
        state.current = Some(session.clone());
        Ok(session)
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let mut state = self.state.lock().expect("auth state poisoned");
        let Some((user_id, password)) = state.accounts.get(&credentials.email) else {
            return Err(AuthError::InvalidCredentials);
        };
        if *password != credentials.password {
            return Err(AuthError::InvalidCredentials);
        }
        let session = Session {
            user_id: user_id.clone(),
            email: credentials.email.clone(),
        };
        state.current = Some(session.clone());
        Ok(session)
    }

    async fn session(&self) -> Option<Session> {
        self.state.lock().expect("auth state poisoned").current.clone()
    }

    async fn sign_out(&self) {
        self.state.lock().expect("auth state poisoned").current = None;
    }
}
