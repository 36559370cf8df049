use super::*;

#[test]
fn accepts_a_plain_email_and_password() {
    let credentials = validate_login_input("alice@campus.edu", "pw123456").unwrap();
    assert_eq!(credentials.email, "alice@campus.edu");
    assert_eq!(credentials.password, "pw123456");
}

#[test]
fn trims_surrounding_whitespace_from_the_email() {
    let credentials = validate_login_input("  alice@campus.edu  ", "pw123456").unwrap();
    assert_eq!(credentials.email, "alice@campus.edu");
}

#[test]
fn rejects_an_empty_email() {
    assert_eq!(validate_login_input("", "pw123456").unwrap_err(), "Enter your email address.");
}

#[test]
fn rejects_whitespace_only_email() {
    assert_eq!(validate_login_input("   ", "pw123456").unwrap_err(), "Enter your email address.");
}

#[test]
fn rejects_an_email_without_at_sign() {
    assert_eq!(
        validate_login_input("alice.campus.edu", "pw123456").unwrap_err(),
        "Enter a valid email address."
    );
}

#[test]
fn rejects_an_empty_password() {
    assert_eq!(validate_login_input("alice@campus.edu", "").unwrap_err(), "Enter your password.");
}

#[test]
fn password_is_not_trimmed() {
    let credentials = validate_login_input("alice@campus.edu", " spacey pw ").unwrap();
    assert_eq!(credentials.password, " spacey pw ");
}
