//! Placeholder authentication over the persisted session.
//!
//! TRADE-OFFS
//! ==========
//! There is no identity backend. `login` accepts exactly one fixed
//! identifier/secret pair and signs in a fixed identity. No hashing, rate
//! limiting, or lockout happens here; a real deployment swaps `Credentials`
//! for a call to an identity provider.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::consts::{DEMO_DISPLAY_NAME, DEMO_EMAIL, DEMO_PASSWORD, DEMO_USERNAME};
use crate::session::{BrowserStorage, Identity, KeyValueStore, Session, SessionError, SessionStore};

/// Why a sign-in attempt did not produce a session.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Login failed: the session could not be saved")]
    Persist(#[from] SessionError),
}

/// The accepted identifier/secret pair and the identity it signs in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    identifier: String,
    secret: String,
    identity: Identity,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>, identity: Identity) -> Self {
        Self { identifier: identifier.into(), secret: secret.into(), identity }
    }

    /// Exact, case-sensitive comparison of both inputs.
    pub fn matches(&self, identifier: &str, secret: &str) -> bool {
        self.identifier == identifier && self.secret == secret
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(
            DEMO_EMAIL,
            DEMO_PASSWORD,
            Identity {
                username: DEMO_USERNAME.to_owned(),
                name: DEMO_DISPLAY_NAME.to_owned(),
                email: DEMO_EMAIL.to_owned(),
            },
        )
    }
}

/// Sign-in operations on top of a [`SessionStore`].
#[derive(Clone, Debug)]
pub struct AuthGate<S> {
    store: SessionStore<S>,
    credentials: Credentials,
}

/// The gate used by the running app.
pub type BrowserAuthGate = AuthGate<BrowserStorage>;

impl BrowserAuthGate {
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: KeyValueStore> AuthGate<S> {
    /// Gate with the default credentials and storage key.
    pub fn new(backend: S) -> Self {
        Self::with_credentials(SessionStore::new(backend), Credentials::default())
    }

    pub fn with_credentials(store: SessionStore<S>, credentials: Credentials) -> Self {
        Self { store, credentials }
    }

    /// Sign in when both inputs match the accepted pair.
    ///
    /// A mismatch leaves the stored session untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] on mismatch and
    /// [`AuthError::Persist`] when the session cannot be written.
    pub fn login(&self, identifier: &str, secret: &str) -> Result<Identity, AuthError> {
        if !self.credentials.matches(identifier, secret) {
            log::debug!("rejected sign-in attempt");
            return Err(AuthError::InvalidCredentials);
        }
        let identity = self.credentials.identity().clone();
        self.store.write(&Session::LoggedIn(identity.clone()))?;
        log::info!("signed in as {}", identity.username);
        Ok(identity)
    }

    /// Sign out. Safe to call when already signed out.
    pub fn logout(&self) {
        match self.store.clear() {
            Ok(()) => log::info!("signed out"),
            Err(e) => log::warn!("failed to persist sign-out: {e}"),
        }
    }

    pub fn session(&self) -> Session {
        self.store.read()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }

    pub fn current_user(&self) -> Option<Identity> {
        self.session().into_user()
    }
}
