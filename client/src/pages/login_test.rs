use super::*;

#[test]
fn validate_credentials_trims_email_and_keeps_password() {
    assert_eq!(
        validate_credentials("  ada@example.com ", " secret "),
        Ok(("ada@example.com".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_both_values() {
    assert_eq!(validate_credentials("   ", "pw"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_credentials("ada@example.com", ""), Err(MISSING_CREDENTIALS));
}
