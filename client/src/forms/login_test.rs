use super::*;

fn form(email: &str, password: &str) -> LoginForm {
    LoginForm { email: email.to_owned(), password: password.to_owned() }
}

#[test]
fn demo_credentials_pass_validation() {
    assert_eq!(form("admin@clientiq.com", "password").validate(), Ok(()));
}

#[test]
fn empty_form_reports_required_fields() {
    let errors = form("", "").validate().unwrap_err();
    assert_eq!(errors.email, Some("Email is required"));
    assert_eq!(errors.password, Some("Password is required"));
}

#[test]
fn malformed_email_is_rejected() {
    for email in ["admin", "admin@", "admin@clientiq", "@clientiq.com", "ad min@clientiq.com"] {
        let errors = form(email, "password").validate().unwrap_err();
        assert_eq!(errors.email, Some("Please enter a valid email address"), "{email:?}");
        assert_eq!(errors.password, None);
    }
}

#[test]
fn short_password_is_rejected() {
    let errors = form("x@x.com", "12345").validate().unwrap_err();
    assert_eq!(errors.email, None);
    assert_eq!(errors.password, Some("Password must be at least 6 characters"));
}

#[test]
fn six_characters_is_enough() {
    assert_eq!(form("x@x.com", "123456").validate(), Ok(()));
}

#[test]
fn wrong_but_well_formed_credentials_pass_validation() {
    // Validation only checks shape; the auth gate rejects the pair.
    assert!(form("x@x.com", "wrongpass").validate().is_ok());
}

#[test]
fn empty_email_reports_required_before_format() {
    let form = LoginForm { email: String::new(), password: "password".into() };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.email, Some("Email is required"));
    assert_eq!(errors.password, None);
}
