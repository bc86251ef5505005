//! Enums used throughout the portal
//!
//! This module contains the various enum types used for state management
//! and UI rendering.

/// Mode for modal input system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Navigate, // Keys move between pages, links and options
    Input,    // Keys are typed into the focused text field
}

/// Step state for rendering the module step tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Completed,
    Active,
    Pending,
}

impl StepState {
    /// State of `ordinal` when the learner is on `current`
    pub fn for_ordinal(ordinal: usize, current: usize) -> Self {
        match ordinal.cmp(&current) {
            std::cmp::Ordering::Less => StepState::Completed,
            std::cmp::Ordering::Equal => StepState::Active,
            std::cmp::Ordering::Greater => StepState::Pending,
        }
    }
}

/// Which list has focus in a checklist module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChecklistPane {
    #[default]
    Bulletins,
    Actions,
}

impl ChecklistPane {
    pub fn toggle(&self) -> Self {
        match self {
            ChecklistPane::Bulletins => ChecklistPane::Actions,
            ChecklistPane::Actions => ChecklistPane::Bulletins,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChecklistPane::Bulletins => "Bulletins",
            ChecklistPane::Actions => "Required Actions",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checklist_pane_toggle() {
        assert_eq!(ChecklistPane::Bulletins.toggle(), ChecklistPane::Actions);
        assert_eq!(ChecklistPane::Actions.toggle(), ChecklistPane::Bulletins);
    }

    #[test]
    fn test_checklist_pane_label() {
        assert_eq!(ChecklistPane::Bulletins.label(), "Bulletins");
        assert_eq!(ChecklistPane::Actions.label(), "Required Actions");
    }

    #[test]
    fn test_mode_default() {
        assert_eq!(Mode::default(), Mode::Navigate);
    }

    #[test]
    fn test_step_state_for_ordinal() {
        assert_eq!(StepState::for_ordinal(1, 3), StepState::Completed);
        assert_eq!(StepState::for_ordinal(3, 3), StepState::Active);
        assert_eq!(StepState::for_ordinal(4, 3), StepState::Pending);
    }
}
