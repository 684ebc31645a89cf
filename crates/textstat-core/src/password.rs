//! Password validation and strength scoring.
//!
//! [`validate_password`] checks a password against a [`PasswordPolicy`]
//! and reports hard errors (the password is rejected), soft warnings
//! (the password is accepted but weak in some way), and a coarse
//! strength label derived from an additive score.

use serde::{Deserialize, Serialize};

use crate::word_lists::{DEFAULT_FORBIDDEN_WORDS, KEYBOARD_ROWS, SPECIAL_CHARACTERS};

/// Ascending three-digit runs that trigger the sequential-numbers warning.
const DIGIT_RUNS: &[&str] = &[
    "012", "123", "234", "345", "456", "567", "678", "789", "890",
];

/// Coarse strength label derived from the strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strength {
    /// Score 0–4.
    Weak,
    /// Score 5–6.
    Medium,
    /// Score 7–8.
    Strong,
    /// Score 9 or higher.
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl Strength {
    /// Returns the label as displayed in messages.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }

    /// Map an additive strength score onto its label.
    const fn from_score(score: u32) -> Self {
        if score <= 4 {
            Self::Weak
        } else if score <= 6 {
            Self::Medium
        } else if score <= 8 {
            Self::Strong
        } else {
            Self::VeryStrong
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rules a password is validated against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    /// Minimum accepted length.
    pub min_length: usize,
    /// Maximum accepted length.
    pub max_length: usize,
    /// Require at least one uppercase letter.
    pub require_uppercase: bool,
    /// Require at least one lowercase letter.
    pub require_lowercase: bool,
    /// Require at least one digit.
    pub require_digits: bool,
    /// Require at least one character from [`SPECIAL_CHARACTERS`].
    pub require_special: bool,
    /// Substrings the password may not contain (case-insensitive).
    pub forbidden_words: Vec<String>,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 128,
            require_uppercase: true,
            require_lowercase: true,
            require_digits: true,
            require_special: true,
            forbidden_words: DEFAULT_FORBIDDEN_WORDS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Outcome of validating a password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordReport {
    /// Whether the password satisfies every policy rule.
    pub valid: bool,
    /// One-line summary of the outcome.
    pub message: String,
    /// Rule violations. Empty when valid.
    pub errors: Vec<String>,
    /// Weak spots that do not reject the password.
    pub warnings: Vec<String>,
    /// Coarse strength label.
    pub strength: Strength,
    /// Additive strength score the label derives from.
    pub strength_score: u32,
}

/// Validate a password against a policy.
#[tracing::instrument(skip_all)]
pub fn validate_password(password: &str, policy: &PasswordPolicy) -> PasswordReport {
    if password.is_empty() {
        return PasswordReport {
            valid: false,
            message: "Password is required".to_string(),
            errors: vec!["Password cannot be empty".to_string()],
            warnings: Vec::new(),
            strength: Strength::Weak,
            strength_score: 0,
        };
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let length = password.chars().count();
    let lower = password.to_lowercase();

    if length < policy.min_length {
        errors.push(format!(
            "Password must be at least {} characters long",
            policy.min_length
        ));
    } else if length > policy.max_length {
        errors.push(format!(
            "Password must be no more than {} characters long",
            policy.max_length
        ));
    }

    if policy.require_uppercase && !password.chars().any(char::is_uppercase) {
        errors.push("Password must contain at least one uppercase letter".to_string());
    }
    if policy.require_lowercase && !password.chars().any(char::is_lowercase) {
        errors.push("Password must contain at least one lowercase letter".to_string());
    }
    if policy.require_digits && !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit".to_string());
    }
    if policy.require_special && !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        errors.push("Password must contain at least one special character".to_string());
    }

    for word in &policy.forbidden_words {
        if lower.contains(&word.to_lowercase()) {
            errors.push(format!("Password cannot contain '{word}'"));
        }
    }

    if has_repeated_run(password) {
        warnings.push("Password contains repeated characters".to_string());
    }
    if DIGIT_RUNS.iter().any(|run| password.contains(run)) {
        warnings.push("Password contains sequential numbers".to_string());
    }
    if has_sequential_letters(&lower) {
        warnings.push("Password contains sequential letters".to_string());
    }

    let strength_score = strength_score(password, length);
    let strength = Strength::from_score(strength_score);

    if length >= 20 {
        warnings.push("Very long password - consider using a password manager".to_string());
    }

    for row in KEYBOARD_ROWS {
        for start in 0..row.len().saturating_sub(2) {
            let pattern = &row[start..start + 3];
            if lower.contains(pattern) {
                warnings.push(format!("Password contains keyboard pattern '{pattern}'"));
            }
        }
    }

    let valid = errors.is_empty();
    let message = if valid {
        if warnings.is_empty() {
            format!("Password is valid and {}", strength.as_str().to_lowercase())
        } else {
            format!(
                "Password is valid but {} with {} warning(s)",
                strength.as_str().to_lowercase(),
                warnings.len()
            )
        }
    } else {
        format!("Password is invalid with {} error(s)", errors.len())
    };

    PasswordReport {
        valid,
        message,
        errors,
        warnings,
        strength,
        strength_score,
    }
}

/// Three or more identical characters in a row.
fn has_repeated_run(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

/// Three consecutive ascending letters (abc through xyz), case-folded input.
fn has_sequential_letters(lower: &str) -> bool {
    let chars: Vec<char> = lower.chars().collect();
    chars.windows(3).any(|w| {
        w.iter().all(char::is_ascii_lowercase)
            && w[1] as u32 == w[0] as u32 + 1
            && w[2] as u32 == w[0] as u32 + 2
    })
}

/// Additive strength score: length milestones plus character classes.
fn strength_score(password: &str, length: usize) -> u32 {
    let mut score = 0;

    if length >= 8 {
        score += 2;
    }
    if length >= 12 {
        score += 1;
    }
    if length >= 16 {
        score += 1;
    }
    if length >= 20 {
        score += 1;
    }

    if password.chars().any(char::is_uppercase) {
        score += 1;
    }
    if password.chars().any(char::is_lowercase) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        score += 1;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(password: &str) -> PasswordReport {
        validate_password(password, &PasswordPolicy::default())
    }

    #[test]
    fn empty_password_is_rejected() {
        let report = validate("");
        assert!(!report.valid);
        assert_eq!(report.message, "Password is required");
        assert_eq!(report.errors, vec!["Password cannot be empty"]);
    }

    #[test]
    fn valid_password_is_strong() {
        let report = validate("MySecure123!");
        assert!(report.valid, "errors: {:?}", report.errors);
        assert_eq!(report.strength, Strength::Strong);
        assert_eq!(report.strength_score, 7);
        // The "123" run draws warnings, so the message hedges.
        assert!(report.message.starts_with("Password is valid but strong"));
    }

    #[test]
    fn weak_password_collects_errors() {
        let report = validate("weak");
        assert!(!report.valid);
        assert_eq!(report.strength, Strength::Weak);
        assert!(
            report
                .errors
                .iter()
                .any(|e| e.contains("at least 8 characters"))
        );
        assert!(report.errors.iter().any(|e| e.contains("uppercase letter")));
        assert!(report.errors.iter().any(|e| e.contains("digit")));
        assert!(report.errors.iter().any(|e| e.contains("special character")));
    }

    #[test]
    fn missing_lowercase_detected() {
        let report = validate("MYPASSWORD123!");
        assert!(!report.valid);
        assert!(report.errors.iter().any(|e| e.contains("lowercase letter")));
    }

    #[test]
    fn forbidden_words_match_case_insensitively() {
        let report = validate("MyPassword123!");
        assert!(!report.valid);
        assert!(
            report
                .errors
                .iter()
                .any(|e| e.contains("cannot contain 'password'"))
        );
    }

    #[test]
    fn repeated_characters_warn() {
        let report = validate("Aaabbb111!x");
        assert!(
            report
                .warnings
                .iter()
                .any(|w| w.contains("repeated characters"))
        );
    }

    #[test]
    fn sequential_runs_warn() {
        let report = validate("Abc123XY!z");
        assert!(
            report
                .warnings
                .iter()
                .any(|w| w.contains("sequential numbers"))
        );
        assert!(
            report
                .warnings
                .iter()
                .any(|w| w.contains("sequential letters"))
        );
    }

    #[test]
    fn keyboard_patterns_warn_per_window() {
        let report = validate("Qwerty99!!");
        let keyboard: Vec<&String> = report
            .warnings
            .iter()
            .filter(|w| w.contains("keyboard pattern"))
            .collect();
        // qwerty covers four three-character windows of the top row.
        assert_eq!(keyboard.len(), 4);
    }

    #[test]
    fn very_long_password_warns_and_scores_high() {
        let report = validate("ExtremelyLongPassphrase42$%");
        assert!(report.valid, "errors: {:?}", report.errors);
        assert_eq!(report.strength, Strength::VeryStrong);
        assert!(
            report
                .warnings
                .iter()
                .any(|w| w.contains("password manager"))
        );
    }

    #[test]
    fn policy_overrides_apply() {
        let policy = PasswordPolicy {
            min_length: 12,
            require_special: false,
            forbidden_words: vec!["admin".to_string()],
            ..PasswordPolicy::default()
        };
        let report = validate_password("AdminPassword123", &policy);
        assert!(!report.valid);
        assert!(
            report
                .errors
                .iter()
                .any(|e| e.contains("cannot contain 'admin'"))
        );
        // No special-character error when the requirement is off.
        assert!(!report.errors.iter().any(|e| e.contains("special")));
    }

    #[test]
    fn message_counts_warnings() {
        let report = validate("Abcdefg1!x");
        assert!(report.valid, "errors: {:?}", report.errors);
        assert!(report.message.starts_with("Password is valid but"));
        assert!(report.message.contains("warning(s)"));
    }
}
