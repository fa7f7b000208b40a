use super::*;
use crate::consts::AUTH_STORAGE_KEY;
use crate::session::MemoryStore;

fn gate() -> (AuthGate<MemoryStore>, MemoryStore) {
    let backend = MemoryStore::new();
    (AuthGate::new(backend.clone()), backend)
}

fn admin() -> Identity {
    Identity { username: "admin".to_owned(), name: "Admin User".to_owned(), email: "admin@clientiq.com".to_owned() }
}

// =============================================================
// login
// =============================================================

#[test]
fn login_with_fixed_pair_signs_in_fixed_identity() {
    let (gate, _) = gate();
    let identity = gate.login("admin@clientiq.com", "password").unwrap();
    assert_eq!(identity, admin());
    assert!(gate.is_authenticated());
    assert_eq!(gate.current_user(), Some(admin()));
}

#[test]
fn login_with_wrong_pair_reports_invalid_credentials() {
    let (gate, _) = gate();
    let err = gate.login("x@x.com", "wrong").unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert_eq!(err.to_string(), "Invalid email or password");
    assert!(!gate.is_authenticated());
}

#[test]
fn login_rejects_near_misses() {
    let (gate, backend) = gate();
    let attempts = [
        ("admin@clientiq.com", "Password"),
        ("Admin@clientiq.com", "password"),
        (" admin@clientiq.com", "password"),
        ("admin@clientiq.com", "password "),
        ("admin@clientiq.com", ""),
        ("", "password"),
        ("", ""),
    ];
    for (identifier, secret) in attempts {
        assert!(gate.login(identifier, secret).is_err(), "accepted {identifier:?}/{secret:?}");
    }
    assert!(!gate.is_authenticated());
    assert_eq!(backend.get_item(AUTH_STORAGE_KEY).unwrap(), None);
}

#[test]
fn failed_login_leaves_existing_session_untouched() {
    let (gate, _) = gate();
    gate.login("admin@clientiq.com", "password").unwrap();
    assert!(gate.login("admin@clientiq.com", "nope").is_err());
    assert!(gate.is_authenticated());
    assert_eq!(gate.current_user(), Some(admin()));
}

#[test]
fn login_persists_record_for_later_gates() {
    let (gate, backend) = gate();
    gate.login("admin@clientiq.com", "password").unwrap();
    let reloaded = AuthGate::new(backend);
    assert_eq!(reloaded.current_user(), Some(admin()));
}

#[test]
fn custom_credentials_replace_default_pair() {
    let identity = Identity { username: "pat".to_owned(), name: "Pat Lee".to_owned(), email: "pat@firm.law".to_owned() };
    let gate = AuthGate::with_credentials(
        SessionStore::new(MemoryStore::new()),
        Credentials::new("pat@firm.law", "hunter22", identity.clone()),
    );
    assert!(gate.login("admin@clientiq.com", "password").is_err());
    assert_eq!(gate.login("pat@firm.law", "hunter22").unwrap(), identity);
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_signs_out() {
    let (gate, _) = gate();
    gate.login("admin@clientiq.com", "password").unwrap();
    gate.logout();
    assert!(!gate.is_authenticated());
    assert_eq!(gate.current_user(), None);
}

#[test]
fn logout_is_idempotent() {
    let (gate, _) = gate();
    gate.logout();
    gate.logout();
    assert_eq!(gate.session(), Session::LoggedOut);
}

#[test]
fn logout_overwrites_corrupt_record() {
    let (gate, backend) = gate();
    backend.set_item(AUTH_STORAGE_KEY, "%%%").unwrap();
    gate.logout();
    assert!(gate.store.try_read().is_ok());
    assert!(!gate.is_authenticated());
}

// =============================================================
// reads
// =============================================================

#[test]
fn corrupt_record_reads_as_signed_out() {
    let (gate, backend) = gate();
    backend.set_item(AUTH_STORAGE_KEY, "{\"user\":").unwrap();
    assert!(!gate.is_authenticated());
    assert_eq!(gate.current_user(), None);
}
