//! Reactive mirror of the persisted session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate redirects and
//! identity-dependent rendering. The auth gate stays the source of truth;
//! this state is refreshed from it on every guarded navigation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::session::{Identity, Session};

/// Current session plus whether it has been read from storage yet.
///
/// Starts in the loading state: storage is only reachable after hydration,
/// so server-rendered markup never assumes a signed-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Session,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: Session::LoggedOut, loading: true }
    }
}

impl AuthState {
    /// State after the session has been read.
    pub fn restored(session: Session) -> Self {
        Self { session, loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn user(&self) -> Option<&Identity> {
        self.session.user()
    }
}
