//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page wraps itself in a `RouteGuard` for its `AppRoute` and delegates
//! rendering details to `components`.

pub mod audit_logs;
pub mod cases;
pub mod clients;
pub mod dashboard;
pub mod faq;
pub mod login;
pub mod not_found;
pub mod signup;
