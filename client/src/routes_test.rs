use super::*;

// =============================================================
// Paths
// =============================================================

#[test]
fn paths_are_unique() {
    let mut paths: Vec<_> = AppRoute::ALL.iter().map(|r| r.path()).collect();
    paths.sort_unstable();
    paths.dedup();
    assert_eq!(paths.len(), AppRoute::ALL.len());
}

#[test]
fn segment_strips_leading_slash() {
    assert_eq!(AppRoute::AuditLogs.segment(), "audit-logs");
    assert_eq!(AppRoute::Dashboard.segment(), "");
}

// =============================================================
// Access
// =============================================================

#[test]
fn nav_routes_are_protected() {
    for route in AppRoute::NAV {
        assert_eq!(route.access(), Access::Protected, "{route:?}");
    }
}

#[test]
fn auth_routes_are_guest_only() {
    assert_eq!(AppRoute::Login.access(), Access::GuestOnly);
    assert_eq!(AppRoute::Signup.access(), Access::GuestOnly);
}

// =============================================================
// Sidebar matching
// =============================================================

#[test]
fn nav_order_and_labels() {
    let labels: Vec<_> = AppRoute::NAV.iter().map(|r| r.title()).collect();
    assert_eq!(labels, ["Dashboard", "Clients", "Cases", "Audit Logs", "FAQ Management"]);
}

#[test]
fn dashboard_active_only_on_exact_root() {
    assert!(AppRoute::Dashboard.is_active("/"));
    assert!(!AppRoute::Dashboard.is_active("/clients"));
}

#[test]
fn other_entries_match_prefix() {
    assert!(AppRoute::Clients.is_active("/clients"));
    assert!(AppRoute::Clients.is_active("/clients/42"));
    assert!(!AppRoute::Clients.is_active("/cases"));
    assert!(AppRoute::AuditLogs.is_active("/audit-logs"));
}

#[test]
fn exactly_one_nav_entry_active_per_page() {
    for route in AppRoute::NAV {
        let active = AppRoute::NAV.iter().filter(|r| r.is_active(route.path())).count();
        assert_eq!(active, 1, "{route:?}");
    }
}
