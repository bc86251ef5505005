//! One-shot completion gate.
//!
//! The gate calls its `on_complete` collaborator at most once, no matter how
//! many times the completing condition is observed afterwards.

use std::fmt;

use super::quiz::{ModuleProgress, QuizResult};

pub type CompletionCallback = Box<dyn FnMut()>;

pub struct CompletionGate {
    fired: bool,
    on_complete: CompletionCallback,
}

impl fmt::Debug for CompletionGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionGate")
            .field("fired", &self.fired)
            .finish_non_exhaustive()
    }
}

impl CompletionGate {
    pub fn new(on_complete: impl FnMut() + 'static) -> Self {
        Self {
            fired: false,
            on_complete: Box::new(on_complete),
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Observe a quiz submission for step `ordinal`.
    /// Fires when the learner is on the last step and answered it correctly.
    pub fn observe_quiz(
        &mut self,
        progress: &ModuleProgress<'_>,
        ordinal: usize,
        result: QuizResult,
    ) -> bool {
        if progress.on_last_step() && ordinal == progress.step_count && result.is_correct {
            self.fire()
        } else {
            false
        }
    }

    /// Observe checklist progress. Fires once every required action is ticked.
    pub fn observe_checklist(&mut self, completed: usize, required: usize) -> bool {
        if required > 0 && completed == required {
            self.fire()
        } else {
            false
        }
    }

    /// Fire unconditionally (still at most once). Returns whether this call fired.
    pub fn fire(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        (self.on_complete)();
        true
    }
}
