//! Data models for the SecureGuard portal
//!
//! This module contains the core data structures:
//! - Module catalog types loaded from JSON
//! - Lesson step and quiz types
//! - Enums for state management

pub mod catalog;
pub mod enums;
pub mod step;

// Re-exports for convenient access
pub use catalog::{
    Bulletin, Catalog, CompletionRule, ModuleId, ModuleKind, RequiredAction, Severity,
    TrainingModule,
};
pub use enums::{ChecklistPane, Mode, StepState};
pub use step::{Quiz, Scenario, Step};
