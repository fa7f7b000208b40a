//! Pre-render access decisions for routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route declares an [`Access`] policy. The `RouteGuard` component
//! evaluates it once per navigation, before the guarded view is built, and
//! either renders the view or replaces the navigation with a redirect.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::AppRoute;
use crate::state::auth::AuthState;

/// Who may open a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Signed-in users only; others go to the login view.
    Protected,
    /// Signed-out users only; signed-in users go to the dashboard.
    GuestOnly,
}

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(AppRoute),
}

/// Decide whether a visitor with the given sign-in status may enter.
pub fn evaluate(access: Access, authenticated: bool) -> GuardDecision {
    match (access, authenticated) {
        (Access::Protected, false) => GuardDecision::Redirect(AppRoute::Login),
        (Access::GuestOnly, true) => GuardDecision::Redirect(AppRoute::Dashboard),
        _ => GuardDecision::Proceed,
    }
}

/// Decision for `route` given the reactive auth state.
///
/// `None` while the session has not been read yet: nothing is rendered and
/// nothing redirects until storage has answered.
pub fn decide(route: AppRoute, state: &AuthState) -> Option<GuardDecision> {
    (!state.loading).then(|| evaluate(route.access(), state.is_authenticated()))
}
