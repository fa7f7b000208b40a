use super::*;
use crate::auth::AuthGate;
use crate::session::{KeyValueStore, MemoryStore, Session};

fn restored_from(gate: &AuthGate<MemoryStore>) -> AuthState {
    AuthState::restored(gate.session())
}

// =============================================================
// evaluate
// =============================================================

#[test]
fn protected_redirects_signed_out_to_login() {
    assert_eq!(evaluate(Access::Protected, false), GuardDecision::Redirect(AppRoute::Login));
}

#[test]
fn protected_admits_signed_in() {
    assert_eq!(evaluate(Access::Protected, true), GuardDecision::Proceed);
}

#[test]
fn guest_only_redirects_signed_in_to_dashboard() {
    assert_eq!(evaluate(Access::GuestOnly, true), GuardDecision::Redirect(AppRoute::Dashboard));
}

#[test]
fn guest_only_admits_signed_out() {
    assert_eq!(evaluate(Access::GuestOnly, false), GuardDecision::Proceed);
}

// =============================================================
// decide against the reactive auth state
// =============================================================

#[test]
fn no_decision_while_session_is_loading() {
    let loading = AuthState::default();
    for route in AppRoute::ALL {
        assert_eq!(decide(route, &loading), None, "{route:?}");
    }
}

#[test]
fn restored_logged_out_is_sent_to_login() {
    let state = AuthState::restored(Session::LoggedOut);
    for route in AppRoute::NAV {
        assert_eq!(decide(route, &state), Some(GuardDecision::Redirect(AppRoute::Login)), "{route:?}");
    }
    assert_eq!(decide(AppRoute::Login, &state), Some(GuardDecision::Proceed));
    assert_eq!(decide(AppRoute::Signup, &state), Some(GuardDecision::Proceed));
}

#[test]
fn restored_logged_in_leaves_auth_views_for_dashboard() {
    let gate = AuthGate::new(MemoryStore::new());
    gate.login("admin@clientiq.com", "password").unwrap();
    let state = restored_from(&gate);

    assert_eq!(decide(AppRoute::Login, &state), Some(GuardDecision::Redirect(AppRoute::Dashboard)));
    assert_eq!(decide(AppRoute::Signup, &state), Some(GuardDecision::Redirect(AppRoute::Dashboard)));
    for route in AppRoute::NAV {
        assert_eq!(decide(route, &state), Some(GuardDecision::Proceed), "{route:?}");
    }
}

#[test]
fn logout_closes_protected_routes_again() {
    let gate = AuthGate::new(MemoryStore::new());
    gate.login("admin@clientiq.com", "password").unwrap();
    gate.logout();
    let state = restored_from(&gate);
    assert_eq!(decide(AppRoute::Dashboard, &state), Some(GuardDecision::Redirect(AppRoute::Login)));
}

#[test]
fn corrupt_record_is_treated_as_signed_out() {
    let backend = MemoryStore::new();
    backend.set_item(crate::consts::AUTH_STORAGE_KEY, "{not json").unwrap();
    let gate = AuthGate::new(backend);
    let state = restored_from(&gate);
    assert_eq!(decide(AppRoute::Clients, &state), Some(GuardDecision::Redirect(AppRoute::Login)));
}
