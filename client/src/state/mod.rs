//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `ui`, `pwa`) so individual components
//! can depend on small focused models provided through Leptos context.

pub mod auth;
pub mod pwa;
pub mod ui;
