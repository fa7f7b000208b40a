//! Sign-in gate and route access policy.
//!
//! SYSTEM CONTEXT
//! ==============
//! Control flows one way: route guard -> auth gate -> session store. The
//! guard decides, the gate answers "who is signed in", the store persists.

pub mod gate;
pub mod guard;

pub use gate::{AuthError, AuthGate, BrowserAuthGate, Credentials};
pub use guard::{Access, GuardDecision, decide};
