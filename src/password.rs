//! Password strength checker
//!
//! Scores a candidate password from 0 to 100 with a line of feedback per
//! rule. The password itself is never logged.

use std::sync::LazyLock;

use regex::Regex;

static UPPERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]").unwrap());
static LOWERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z]").unwrap());
static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").unwrap());
static SPECIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[!@#$%^&*(),.?":{}|<>]"#).unwrap());
static COMMON_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^password|12345|qwerty").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackStatus {
    Good,
    Warning,
    Bad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            75.. => StrengthLevel::Strong,
            50.. => StrengthLevel::Moderate,
            25.. => StrengthLevel::Weak,
            _ => StrengthLevel::VeryWeak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::Strong => "Strong",
            StrengthLevel::Moderate => "Moderate",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::VeryWeak => "Very Weak",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub text: &'static str,
    pub status: FeedbackStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StrengthReport {
    /// Always within 0..=100
    pub score: u8,
    pub feedback: Vec<Feedback>,
}

impl StrengthReport {
    pub fn level(&self) -> StrengthLevel {
        StrengthLevel::from_score(self.score)
    }
}

/// Score a password. An empty password scores 0 with no feedback.
pub fn assess(password: &str) -> StrengthReport {
    if password.is_empty() {
        return StrengthReport::default();
    }

    let mut score: i32 = 0;
    let mut feedback = Vec::new();
    let mut note = |text: &'static str, status: FeedbackStatus| {
        feedback.push(Feedback { text, status })
    };

    let length = password.chars().count();
    if length >= 14 {
        score += 25;
        note("Good length (14+ characters)", FeedbackStatus::Good);
    } else if length >= 8 {
        score += 10;
        note("Acceptable length, but 14+ is better", FeedbackStatus::Warning);
    } else {
        note("Too short (minimum 8, recommended 14+)", FeedbackStatus::Bad);
    }

    let classes: [(&Regex, &'static str, &'static str); 4] = [
        (&*UPPERCASE, "Contains uppercase letters", "Add uppercase letters"),
        (&*LOWERCASE, "Contains lowercase letters", "Add lowercase letters"),
        (&*DIGIT, "Contains numbers", "Add numbers"),
        (&*SPECIAL, "Contains special characters", "Add special characters"),
    ];
    for (pattern, present, missing) in classes {
        if pattern.is_match(password) {
            score += 15;
            note(present, FeedbackStatus::Good);
        } else {
            note(missing, FeedbackStatus::Bad);
        }
    }

    if COMMON_PATTERN.is_match(password) {
        score -= 30;
        note("Contains a common pattern", FeedbackStatus::Bad);
    }

    if length >= 20 {
        score += 15;
        note("Excellent length!", FeedbackStatus::Good);
    }

    StrengthReport {
        score: score.clamp(0, 100) as u8,
        feedback,
    }
}

/// Mask a password for display
pub fn mask(password: &str) -> String {
    "•".repeat(password.chars().count())
}
