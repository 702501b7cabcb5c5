use super::*;

#[test]
fn validate_registration_builds_provider_request() {
    let request = validate_registration(" Ana ", " ana@tours.es ", "secret1", "secret1").unwrap();
    assert_eq!(request.name, "Ana");
    assert_eq!(request.email, "ana@tours.es");
    assert_eq!(request.password, "secret1");
    assert_eq!(request.role, Role::Provider);
}

#[test]
fn validate_registration_rejects_mismatched_passwords() {
    assert_eq!(validate_registration("Ana", "a@b.es", "secret1", "secret2"), Err("Passwords do not match."));
}

#[test]
fn validate_registration_rejects_short_passwords() {
    assert_eq!(
        validate_registration("Ana", "a@b.es", "abc12", "abc12"),
        Err("Password must be at least 6 characters.")
    );
    assert!(validate_registration("Ana", "a@b.es", "abc123", "abc123").is_ok());
}

#[test]
fn validate_registration_requires_every_field() {
    assert_eq!(validate_registration("  ", "a@b.es", "secret1", "secret1"), Err("Fill in every field."));
    assert_eq!(validate_registration("Ana", "", "secret1", "secret1"), Err("Fill in every field."));
}
