use super::*;

fn valid() -> SignupForm {
    SignupForm {
        first_name: "John".to_owned(),
        last_name: "Doe".to_owned(),
        email: "john@doe.law".to_owned(),
        password: "Secret123".to_owned(),
        confirm_password: "Secret123".to_owned(),
        accept_terms: true,
    }
}

// =============================================================
// validate
// =============================================================

#[test]
fn complete_form_is_valid() {
    assert_eq!(valid().validate(), Ok(()));
}

#[test]
fn empty_form_reports_every_field() {
    let errors = SignupForm::default().validate().unwrap_err();
    assert_eq!(errors.first_name, Some("First name is required"));
    assert_eq!(errors.last_name, Some("Last name is required"));
    assert_eq!(errors.email, Some("Email is required"));
    assert_eq!(errors.password, Some("Password is required"));
    assert_eq!(errors.confirm_password, Some("Please confirm your password"));
    assert_eq!(errors.accept_terms, Some("You must accept the terms and conditions"));
}

#[test]
fn names_longer_than_fifty_chars_are_rejected() {
    let mut form = valid();
    form.first_name = "a".repeat(51);
    form.last_name = "b".repeat(50);
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.first_name, Some("First name must be less than 50 characters"));
    assert_eq!(errors.last_name, None);
}

#[test]
fn password_rules_report_first_failure() {
    let cases = [
        ("Ab1", "Password must be at least 8 characters"),
        ("lowercase1", "Password must contain an uppercase letter"),
        ("UPPERCASE1", "Password must contain a lowercase letter"),
        ("NoDigitsHere", "Password must contain a number"),
    ];
    for (password, expected) in cases {
        let mut form = valid();
        form.password = password.to_owned();
        form.confirm_password = password.to_owned();
        assert_eq!(form.validate().unwrap_err().password, Some(expected), "{password:?}");
    }
}

#[test]
fn mismatched_confirmation_is_rejected() {
    let mut form = valid();
    form.confirm_password = "Secret124".to_owned();
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.password, None);
    assert_eq!(errors.confirm_password, Some("Passwords do not match"));
}

#[test]
fn terms_must_be_accepted() {
    let mut form = valid();
    form.accept_terms = false;
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.accept_terms, Some("You must accept the terms and conditions"));
    assert_eq!(SignupErrors { accept_terms: None, ..errors }, SignupErrors::default());
}

// =============================================================
// password_requirements
// =============================================================

#[test]
fn checklist_hidden_for_empty_password() {
    assert!(password_requirements("").is_empty());
}

#[test]
fn checklist_reports_each_rule() {
    let reqs = password_requirements("abc");
    let met: Vec<_> = reqs.iter().map(|r| (r.label, r.met)).collect();
    assert_eq!(
        met,
        [
            ("At least 8 characters", false),
            ("Contains uppercase", false),
            ("Contains lowercase", true),
            ("Contains number", false),
        ]
    );
}

#[test]
fn checklist_all_met_for_strong_password() {
    assert!(password_requirements("Secret123").iter().all(|r| r.met));
}
