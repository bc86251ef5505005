//! Error types for the portal.
//!
//! Every error here is local and recoverable: the UI rejects the action,
//! leaves state untouched and shows the message in the status line.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the step sequence and quiz evaluator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    /// The selected option does not exist on that step (or the step has no quiz).
    #[error("Option {selected} is not a valid answer for step {ordinal} ({available} options)")]
    InvalidSelection {
        ordinal: usize,
        selected: usize,
        available: usize,
    },

    /// The step's quiz was already submitted this session.
    #[error("Step {ordinal} has already been answered")]
    AlreadyAnswered { ordinal: usize },

    /// A direct jump or submit targeted an ordinal outside the module.
    #[error("Step {ordinal} is outside 1..={step_count}")]
    OutOfRange { ordinal: usize, step_count: usize },
}

/// Errors raised while loading a module catalog.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed module catalog: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    #[error("Unsupported catalog schema version '{version}' (expected 1.x)")]
    UnsupportedSchema { version: String },

    /// The catalog parsed but breaks a structural rule.
    #[error("Invalid module '{module}': {reason}")]
    Invalid { module: String, reason: String },
}

/// Errors raised by the incident report form.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(crate::forms::FormField),
}
