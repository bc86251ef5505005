//! Lesson step data structures
//!
//! Steps are defined once in the module catalog and never mutated after
//! the catalog is loaded.

use serde::Deserialize;

/// A multiple-choice question attached to a step
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub question: String,
    pub options: Vec<String>,
    #[serde(alias = "correct")]
    pub correct_option_index: usize,
}

impl Quiz {
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_option_index
    }
}

/// Worked example shown alongside a lesson (e.g. a ransomware simulation)
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub title: String,
    pub narrative: String,
    #[serde(default)]
    pub correct_actions: Vec<String>,
    #[serde(default)]
    pub incorrect_actions: Vec<String>,
}

/// One lesson/slide within a training module
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// 1-based position, assigned from list order when the catalog loads
    #[serde(skip)]
    pub ordinal: usize,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub quiz: Option<Quiz>,
    #[serde(default)]
    pub tip: Option<String>,
    #[serde(default)]
    pub scenario: Option<Scenario>,
}

impl Step {
    pub fn has_quiz(&self) -> bool {
        self.quiz.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_minimal_fields() {
        let json = r#"{"title": "Intro", "body": "Hello"}"#;
        let step: Step = serde_json::from_str(json).unwrap();
        assert_eq!(step.ordinal, 0);
        assert!(step.key_points.is_empty());
        assert!(!step.has_quiz());
        assert!(step.scenario.is_none());
    }

    #[test]
    fn test_quiz_accepts_short_correct_key() {
        let json = r#"{"question": "Q?", "options": ["a", "b"], "correct": 1}"#;
        let quiz: Quiz = serde_json::from_str(json).unwrap();
        assert_eq!(quiz.correct_option_index, 1);
        assert!(quiz.is_correct(1));
        assert!(!quiz.is_correct(0));
    }
}
