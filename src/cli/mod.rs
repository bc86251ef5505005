//! CLI argument parsing for the SecureGuard TUI.

mod args;

pub use args::{CliConfig, VERSION};
