//! Route table: paths, titles, access policy, and sidebar matching.
//!
//! DESIGN
//! ======
//! One enum names every view so redirects, navigation links, and the router
//! definition in `app.rs` cannot drift apart.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::auth::guard::Access;

/// Every view the app can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Dashboard,
    Clients,
    Cases,
    AuditLogs,
    Faq,
    Login,
    Signup,
}

impl AppRoute {
    pub const ALL: [Self; 7] =
        [Self::Dashboard, Self::Clients, Self::Cases, Self::AuditLogs, Self::Faq, Self::Login, Self::Signup];

    /// Sidebar entries, in display order.
    pub const NAV: [Self; 5] = [Self::Dashboard, Self::Clients, Self::Cases, Self::AuditLogs, Self::Faq];

    /// Absolute path, e.g. `/audit-logs`.
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Clients => "/clients",
            Self::Cases => "/cases",
            Self::AuditLogs => "/audit-logs",
            Self::Faq => "/faq",
            Self::Login => "/login",
            Self::Signup => "/signup",
        }
    }

    /// Path without the leading slash, as used by router segments.
    pub fn segment(self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// Header title and sidebar label.
    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Clients => "Clients",
            Self::Cases => "Cases",
            Self::AuditLogs => "Audit Logs",
            Self::Faq => "FAQ Management",
            Self::Login => "Sign in",
            Self::Signup => "Create an account",
        }
    }

    /// Sidebar glyph.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dashboard => "▦",
            Self::Clients => "👥",
            Self::Cases => "⚖",
            Self::AuditLogs => "↺",
            Self::Faq => "?",
            Self::Login | Self::Signup => "",
        }
    }

    pub fn access(self) -> Access {
        match self {
            Self::Dashboard | Self::Clients | Self::Cases | Self::AuditLogs | Self::Faq => Access::Protected,
            Self::Login | Self::Signup => Access::GuestOnly,
        }
    }

    /// Whether the sidebar entry for `self` is highlighted at `pathname`.
    ///
    /// The dashboard matches only `/`; every other entry matches its own path
    /// and anything below it.
    pub fn is_active(self, pathname: &str) -> bool {
        match self {
            Self::Dashboard => pathname == "/",
            _ => pathname.starts_with(self.path()),
        }
    }
}
