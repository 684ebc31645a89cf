//! User-registration field validation.
//!
//! Validates the three registration fields (email, password, name)
//! together and accumulates every violation, so a caller can show the
//! user the full list in one round trip.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Anchored pattern a well-formed email address must match.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid regex")
});

/// Special characters accepted for the registration password rule.
///
/// Narrower than the password validator's set; registration predates it
/// and callers rely on the stricter list.
const REGISTRATION_SPECIALS: &str = "!@#$%^&*";

/// Outcome of validating registration fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationReport {
    /// Whether all three fields passed every check.
    pub valid: bool,
    /// Accumulated violations across all fields. Empty when valid.
    pub errors: Vec<String>,
    /// Success message, present only when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Validate user registration data.
///
/// All checks run; errors accumulate rather than short-circuiting, except
/// that a missing field reports only its "required" error.
#[tracing::instrument(skip_all)]
pub fn validate_registration(email: &str, password: &str, name: &str) -> RegistrationReport {
    let mut errors = Vec::new();

    check_email(email, &mut errors);
    check_password(password, &mut errors);
    check_name(name, &mut errors);

    if errors.is_empty() {
        RegistrationReport {
            valid: true,
            errors,
            message: Some("Registration valid!".to_string()),
        }
    } else {
        RegistrationReport {
            valid: false,
            errors,
            message: None,
        }
    }
}

fn check_email(email: &str, errors: &mut Vec<String>) {
    if email.is_empty() {
        errors.push("Email is required".to_string());
        return;
    }
    let length = email.chars().count();
    if length < 5 {
        errors.push("Email too short".to_string());
    }
    if length > 254 {
        errors.push("Email too long".to_string());
    }
    if !email.contains('@') {
        errors.push("Email must contain @".to_string());
    }
    if !EMAIL_PATTERN.is_match(email) {
        errors.push("Email format invalid".to_string());
    }
}

fn check_password(password: &str, errors: &mut Vec<String>) {
    if password.is_empty() {
        errors.push("Password is required".to_string());
        return;
    }
    let length = password.chars().count();
    if length < 8 {
        errors.push("Password too short".to_string());
    }
    if length > 128 {
        errors.push("Password too long".to_string());
    }

    let mut has_upper = false;
    let mut has_lower = false;
    let mut has_digit = false;
    let mut has_special = false;
    for c in password.chars() {
        if c.is_uppercase() {
            has_upper = true;
        }
        if c.is_lowercase() {
            has_lower = true;
        }
        if c.is_ascii_digit() {
            has_digit = true;
        }
        if REGISTRATION_SPECIALS.contains(c) {
            has_special = true;
        }
    }
    if !has_upper {
        errors.push("Password needs uppercase".to_string());
    }
    if !has_lower {
        errors.push("Password needs lowercase".to_string());
    }
    if !has_digit {
        errors.push("Password needs digit".to_string());
    }
    if !has_special {
        errors.push("Password needs special character".to_string());
    }
}

fn check_name(name: &str, errors: &mut Vec<String>) {
    if name.is_empty() {
        errors.push("Name is required".to_string());
        return;
    }
    let length = name.chars().count();
    if length < 2 {
        errors.push("Name too short".to_string());
    }
    if length > 50 {
        errors.push("Name too long".to_string());
    }
    let stripped: String = name.chars().filter(|&c| c != ' ').collect();
    if stripped.is_empty() || !stripped.chars().all(char::is_alphabetic) {
        errors.push("Name contains invalid characters".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_registration() {
        let report = validate_registration("john@example.com", "Password123!", "John Doe");
        assert!(report.valid, "errors: {:?}", report.errors);
        assert_eq!(report.message.as_deref(), Some("Registration valid!"));
        assert!(report.errors.is_empty());
    }

    #[test]
    fn invalid_fields_accumulate_errors() {
        let report = validate_registration("bad-email", "weak", "X");
        assert!(!report.valid);
        assert!(report.message.is_none());
        assert!(report.errors.contains(&"Email must contain @".to_string()));
        assert!(report.errors.contains(&"Email format invalid".to_string()));
        assert!(report.errors.contains(&"Password too short".to_string()));
        assert!(report.errors.contains(&"Name too short".to_string()));
    }

    #[test]
    fn all_fields_missing() {
        let report = validate_registration("", "", "");
        assert!(!report.valid);
        assert_eq!(report.errors, vec![
            "Email is required",
            "Password is required",
            "Name is required",
        ]);
    }

    #[test]
    fn email_checks() {
        let report = validate_registration("a@b.c", "StrongPass1!", "Jane Smith");
        // Length 5 passes the short check but the TLD is one letter.
        assert!(report.errors.contains(&"Email format invalid".to_string()));

        let report = validate_registration("a@bc", "StrongPass1!", "Jane Smith");
        assert!(report.errors.contains(&"Email too short".to_string()));
    }

    #[test]
    fn password_needs_every_class() {
        let report = validate_registration("good@email.com", "alllowercase", "Jane Smith");
        assert!(report.errors.contains(&"Password needs uppercase".to_string()));
        assert!(report.errors.contains(&"Password needs digit".to_string()));
        assert!(
            report
                .errors
                .contains(&"Password needs special character".to_string())
        );
        assert!(!report.errors.contains(&"Password needs lowercase".to_string()));
    }

    #[test]
    fn name_with_digits_is_invalid() {
        let report = validate_registration("good@email.com", "StrongPass1!", "Jane 2nd");
        assert!(
            report
                .errors
                .contains(&"Name contains invalid characters".to_string())
        );
    }

    #[test]
    fn name_with_spaces_is_fine() {
        let report = validate_registration("good@email.com", "StrongPass1!", "Jane Smith");
        assert!(report.valid, "errors: {:?}", report.errors);
    }
}
