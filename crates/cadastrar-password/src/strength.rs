//! Password strength scoring for the live signup meter.
//!
//! Scores a candidate password from 0 (weakest) to 4 (strongest) in half-point
//! steps, with ordered feedback for every failed check. Pure and deterministic;
//! recomputed on every keystroke by the UI layer.

use serde::{Deserialize, Serialize};

/// Symbols counted as special characters by the strength evaluator.
const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Substrings penalized as sequences or common words, matched case-insensitively.
const COMMON_PATTERNS: [&str; 5] = ["123", "abc", "qwe", "password", "admin"];

/// Result of evaluating a candidate password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordStrength {
    /// Strength score in `[0, 4]`, in half-point steps.
    pub score: f32,
    /// One entry per failed check, in check order.
    pub feedback: Vec<String>,
    /// Whether the password is acceptable: score of at least 3 and at least 8 characters.
    pub is_valid: bool,
}

/// Coarse strength buckets derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StrengthLabel {
    /// Score of 1 or less.
    VeryWeak,
    /// Score above 1, up to 2.
    Weak,
    /// Score above 2, up to 3.
    Medium,
    /// Score above 3.
    Strong,
}

impl StrengthLabel {
    /// Buckets a score into its display label.
    pub fn from_score(score: f32) -> Self {
        if score <= 1.0 {
            Self::VeryWeak
        } else if score <= 2.0 {
            Self::Weak
        } else if score <= 3.0 {
            Self::Medium
        } else {
            Self::Strong
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::VeryWeak => "very weak",
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        };
        write!(f, "{label}")
    }
}

/// Evaluates the strength of a candidate password.
///
/// Length and character-class variety raise the score; repeated-character runs and
/// known-weak substrings lower it. The score is clamped to `[0, 4]` and the feedback
/// list carries one entry per failed check, in check order.
pub fn evaluate(password: &str) -> PasswordStrength {
    let mut feedback = Vec::new();
    let mut score = 0.0_f32;

    let length = password.chars().count();

    if length >= 8 {
        score += 1.0;
    } else {
        feedback.push("Use at least 8 characters".to_string());
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 0.5;
    } else {
        feedback.push("Include lowercase letters".to_string());
    }

    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 0.5;
    } else {
        feedback.push("Include uppercase letters".to_string());
    }

    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 0.5;
    } else {
        feedback.push("Include numbers".to_string());
    }

    if password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
        score += 0.5;
    } else {
        feedback.push("Include special symbols".to_string());
    }

    // Length bonuses, no feedback either way
    if length >= 12 {
        score += 0.5;
    }
    if length >= 16 {
        score += 0.5;
    }

    if has_repeated_run(password) {
        score -= 0.5;
        feedback.push("Avoid repeated characters".to_string());
    }

    let lowered = password.to_lowercase();
    if COMMON_PATTERNS.iter().any(|p| lowered.contains(p)) {
        score -= 1.0;
        feedback.push("Avoid sequences and common words".to_string());
    }

    let score = score.clamp(0.0, 4.0);

    PasswordStrength {
        score,
        feedback,
        is_valid: score >= 3.0 && length >= 8,
    }
}

/// Returns true when the password contains a run of 3 or more identical characters.
fn has_repeated_run(password: &str) -> bool {
    let mut run = 0;
    let mut previous = None;
    for c in password.chars() {
        if previous == Some(c) {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            previous = Some(c);
            run = 1;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_scores_zero() {
        let result = evaluate("");
        assert_eq!(result.score, 0.0);
        assert!(!result.is_valid);
        assert!(!result.feedback.is_empty());
    }

    #[test]
    fn all_character_classes_present_pass_without_class_feedback() {
        // Every class check passes, so the only possible feedback comes from the
        // common-pattern penalty ("abc" and "123" are both present here).
        let result = evaluate("Abc12345!");
        assert_eq!(
            result.feedback,
            vec!["Avoid sequences and common words".to_string()]
        );
        assert_eq!(result.score, 2.0);
        assert!(!result.is_valid);
    }

    #[test]
    fn strong_password_is_valid() {
        let result = evaluate("Xk9&mTq2w!");
        assert!(result.feedback.is_empty());
        assert_eq!(result.score, 3.0);
        assert!(result.is_valid);
    }

    #[test]
    fn length_bonuses_apply_at_12_and_16() {
        assert_eq!(evaluate("Xk9&mTq2w!aa").score, 3.5);
        assert_eq!(evaluate("Xk9&mTq2w!aaXk9&").score, 4.0);
    }

    #[test]
    fn repeated_run_penalty_lowers_all_lowercase_baseline() {
        let baseline = evaluate("ajkwpdnh");
        let repeated = evaluate("aaaaaaaa");
        assert!(repeated.score < baseline.score);
        assert!(repeated
            .feedback
            .contains(&"Avoid repeated characters".to_string()));
    }

    #[test]
    fn common_word_penalty_invalidates() {
        let result = evaluate("password123");
        assert!(result
            .feedback
            .contains(&"Avoid sequences and common words".to_string()));
        assert!(!result.is_valid);
    }

    #[test]
    fn repeated_run_requires_three_consecutive() {
        assert!(!has_repeated_run("aabbaabb"));
        assert!(has_repeated_run("aaab"));
        assert!(has_repeated_run("baaa"));
    }

    #[test]
    fn score_stays_clamped_and_validity_matches_definition() {
        let samples = [
            "",
            "a",
            "aaa",
            "password",
            "password123",
            "123456789012345678",
            "Xk9&mTq2w!aaXk9&mTq2w!",
            "AAAAAAAAAAAAAAAAAAAA",
            "abcabcabcabc",
            "P@ssw0rdP@ssw0rd",
        ];
        for password in samples {
            let result = evaluate(password);
            assert!(
                (0.0..=4.0).contains(&result.score),
                "score out of range for {password:?}"
            );
            assert_eq!(
                result.is_valid,
                result.score >= 3.0 && password.chars().count() >= 8,
                "validity mismatch for {password:?}"
            );
        }
    }

    #[test]
    fn feedback_is_stable_for_identical_input() {
        assert_eq!(evaluate("abc"), evaluate("abc"));
    }

    #[test]
    fn labels_follow_score_thresholds() {
        assert_eq!(StrengthLabel::from_score(0.0), StrengthLabel::VeryWeak);
        assert_eq!(StrengthLabel::from_score(1.0), StrengthLabel::VeryWeak);
        assert_eq!(StrengthLabel::from_score(1.5), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(2.0), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(2.5), StrengthLabel::Medium);
        assert_eq!(StrengthLabel::from_score(3.0), StrengthLabel::Medium);
        assert_eq!(StrengthLabel::from_score(3.5), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_score(4.0), StrengthLabel::Strong);
    }

    #[test]
    fn result_serializes_camel_case() {
        let value = serde_json::to_value(evaluate("")).expect("serializable");
        assert!(value.get("isValid").is_some());
        assert!(value.get("feedback").is_some());
        assert!(value.get("score").is_some());
    }
}
