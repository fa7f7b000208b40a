//! Shared constants for the ClientIQ client crate.

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding the serialized session record.
pub const AUTH_STORAGE_KEY: &str = "clientiq-auth";

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "clientiq-ui-theme";

// ── Placeholder credentials ─────────────────────────────────────

/// The only identifier accepted by the auth gate.
pub const DEMO_EMAIL: &str = "admin@clientiq.com";

/// The only secret accepted by the auth gate.
pub const DEMO_PASSWORD: &str = "password";

/// Username of the identity written on a successful sign-in.
pub const DEMO_USERNAME: &str = "admin";

/// Display name of the identity written on a successful sign-in.
pub const DEMO_DISPLAY_NAME: &str = "Admin User";

// ── Simulated latency ───────────────────────────────────────────

/// Delay before a sign-in attempt is applied, in milliseconds.
pub const LOGIN_LATENCY_MS: u32 = 500;

/// Delay before a sign-up submission is applied, in milliseconds.
pub const SIGNUP_LATENCY_MS: u32 = 1_000;

// ── Assets ──────────────────────────────────────────────────────

pub const LOGO_LIGHT_SRC: &str = "/logos/Logo Black.png";
pub const LOGO_DARK_SRC: &str = "/logos/Logo White.png";

/// Service worker script registered at startup.
pub const SERVICE_WORKER_PATH: &str = "/sw.js";

/// Message posted to a waiting service worker to activate it.
pub const SKIP_WAITING_MESSAGE: &str = "SKIP_WAITING";
