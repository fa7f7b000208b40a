use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user().is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_default_is_loading() {
    assert!(AuthState::default().loading);
}

// =============================================================
// restored
// =============================================================

#[test]
fn restored_clears_loading() {
    let state = AuthState::restored(Session::LoggedOut);
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn restored_exposes_signed_in_user() {
    let identity = Identity { username: "admin".to_owned(), name: "Admin User".to_owned(), email: "admin@clientiq.com".to_owned() };
    let state = AuthState::restored(Session::LoggedIn(identity.clone()));
    assert!(state.is_authenticated());
    assert_eq!(state.user(), Some(&identity));
}
