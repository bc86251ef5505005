//! Training flow engine
//!
//! - `sequence`: ordered steps with a saturating 1-based cursor
//! - `quiz`: per-step answer evaluation and scoring
//! - `gate`: one-shot completion notification
//! - `session`: the above wired together for each module kind

pub mod gate;
pub mod quiz;
pub mod sequence;
pub mod session;

pub use gate::CompletionGate;
pub use quiz::{ModuleProgress, QuizEvaluator, QuizResult, QuizStep};
pub use sequence::StepSequence;
pub use session::{ChecklistSession, LessonSession, ModuleSession, QuizDraft};
