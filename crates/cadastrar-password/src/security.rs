//! Denylist and leakage checks layered on top of the strength score.
//!
//! These rules reject passwords the strength meter alone would accept: ones that
//! embed the user's own email and ones built around the most common leaked
//! passwords. Both rules are independent and both may fire.

/// Known-weak passwords rejected as substrings, matched case-insensitively.
const WEAK_PASSWORDS: [&str; 10] = [
    "123456",
    "password",
    "123456789",
    "12345678",
    "12345",
    "1234567",
    "admin",
    "qwerty",
    "abc123",
    "password123",
];

/// Validates a password against the denylist and email-leakage rules.
///
/// Returns one error string per rule that fired, or an empty list when the password
/// passes. This does not duplicate the strength scoring in
/// [`evaluate`](crate::evaluate); it is a filter layered on top of it.
pub fn check_security(password: &str, email: Option<&str>) -> Vec<String> {
    let mut errors = Vec::new();
    let lowered = password.to_lowercase();

    if let Some(email) = email {
        let local_part = email
            .to_lowercase()
            .split('@')
            .next()
            .unwrap_or_default()
            .to_string();
        if lowered.contains(&local_part) {
            errors.push("Password cannot contain part of your email".to_string());
        }
    }

    if WEAK_PASSWORDS.iter().any(|weak| lowered.contains(weak)) {
        errors.push("Password too common, choose something more unique".to_string());
    }

    errors
}
