//! Per-step quiz evaluation and score keeping.

use std::collections::BTreeSet;

use super::sequence::StepSequence;
use crate::error::FlowError;
use crate::models::{Quiz, Step};

/// Anything that may carry a quiz
pub trait QuizStep {
    fn quiz(&self) -> Option<&Quiz>;
}

impl QuizStep for Step {
    fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }
}

/// Outcome of a single submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub is_correct: bool,
}

/// Number of steps that count towards the score
pub fn quiz_step_count<S: QuizStep>(steps: &[S]) -> usize {
    steps.iter().filter(|s| s.quiz().is_some()).count()
}

/// Snapshot of a learner's progress through one module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleProgress<'a> {
    pub current_step_ordinal: usize,
    pub step_count: usize,
    pub score: usize,
    pub quiz_step_count: usize,
    pub answered_steps: &'a BTreeSet<usize>,
}

impl ModuleProgress<'_> {
    pub fn on_last_step(&self) -> bool {
        self.current_step_ordinal == self.step_count
    }
}

/// Score and answered-step bookkeeping for one module session
#[derive(Debug, Clone, Default)]
pub struct QuizEvaluator {
    score: usize,
    answered: BTreeSet<usize>,
}

impl QuizEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answered(&self) -> &BTreeSet<usize> {
        &self.answered
    }

    /// Submit `selected` as the answer to step `ordinal`.
    ///
    /// Each step can be submitted once. Any error leaves score and answered
    /// steps untouched.
    pub fn submit<S: QuizStep>(
        &mut self,
        sequence: &StepSequence<S>,
        ordinal: usize,
        selected: usize,
    ) -> Result<QuizResult, FlowError> {
        sequence.check_ordinal(ordinal)?;

        let quiz = sequence.get(ordinal).and_then(QuizStep::quiz);
        let available = quiz.map_or(0, |q| q.options.len());
        let Some(quiz) = quiz.filter(|_| selected < available) else {
            return Err(FlowError::InvalidSelection {
                ordinal,
                selected,
                available,
            });
        };

        if !self.answered.insert(ordinal) {
            return Err(FlowError::AlreadyAnswered { ordinal });
        }

        let is_correct = quiz.is_correct(selected);
        if is_correct {
            self.score += 1;
        }
        tracing::debug!(ordinal, selected, is_correct, score = self.score, "quiz submitted");

        Ok(QuizResult { is_correct })
    }

    pub fn progress<'a, S: QuizStep>(&'a self, sequence: &StepSequence<S>) -> ModuleProgress<'a> {
        ModuleProgress {
            current_step_ordinal: sequence.current_ordinal(),
            step_count: sequence.step_count(),
            score: self.score,
            quiz_step_count: quiz_step_count(sequence.steps()),
            answered_steps: &self.answered,
        }
    }
}
