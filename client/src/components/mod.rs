//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the app chrome and read/write shared state from Leptos
//! context providers. Pages compose them; none of them talk to storage
//! directly except through the auth gate.

pub mod app_sidebar;
pub mod auth_layout;
pub mod brand_logo;
pub mod empty_state;
pub mod mode_toggle;
pub mod pwa_update_prompt;
pub mod route_guard;
pub mod skeleton;
pub mod user_nav;
pub mod view_shell;
