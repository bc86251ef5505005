//! Key bindings.
//!
//! Translates crossterm key events into portal actions. The translation only
//! depends on the input mode; what an action means on the current page is
//! decided by `App`.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::models::Mode;
use crate::router::Page;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Jump to a header tab
    Navigate(Page),
    NextTab,
    PrevTab,
    OpenReport,
    ToggleChat,
    /// Leave the current overlay, module, or sheet
    Back,
    Up,
    Down,
    Left,
    Right,
    /// Back to the first lesson step
    FirstStep,
    PageUp,
    PageDown,
    /// Follow a link, submit, or advance
    Activate,
    /// Tick a checkbox
    Toggle,
    ShowQuiz,
    ToggleScenario,
    ToggleReveal,
    EnterInput,
    // Input mode
    ExitInput,
    NextField,
    PrevField,
    Char(char),
    Backspace,
    Submit,
}

/// Map a key event to an action; `None` for releases and unbound keys
pub fn map_key(mode: Mode, key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::ToggleReveal),
            _ => None,
        };
    }

    match mode {
        Mode::Navigate => map_navigate(key.code),
        Mode::Input => map_input(key.code),
    }
}

fn map_navigate(code: KeyCode) -> Option<Action> {
    let action = match code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char(c @ '1'..='8') => {
            let index = c as usize - '1' as usize;
            Action::Navigate(Page::NAV[index].clone())
        }
        KeyCode::Tab => Action::NextTab,
        KeyCode::BackTab => Action::PrevTab,
        KeyCode::Char('r') => Action::OpenReport,
        KeyCode::Char('c') | KeyCode::Char('?') => Action::ToggleChat,
        KeyCode::Esc => Action::Back,
        KeyCode::Up | KeyCode::Char('k') => Action::Up,
        KeyCode::Down | KeyCode::Char('j') => Action::Down,
        KeyCode::Left | KeyCode::Char('h') => Action::Left,
        KeyCode::Right | KeyCode::Char('l') => Action::Right,
        KeyCode::Home => Action::FirstStep,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::Enter => Action::Activate,
        KeyCode::Char(' ') => Action::Toggle,
        KeyCode::Char('t') => Action::ShowQuiz,
        KeyCode::Char('s') => Action::ToggleScenario,
        KeyCode::Char('v') => Action::ToggleReveal,
        KeyCode::Char('i') => Action::EnterInput,
        _ => return None,
    };
    Some(action)
}

fn map_input(code: KeyCode) -> Option<Action> {
    let action = match code {
        KeyCode::Esc => Action::ExitInput,
        KeyCode::Enter => Action::Submit,
        KeyCode::Tab => Action::NextField,
        KeyCode::BackTab => Action::PrevField,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Up => Action::Up,
        KeyCode::Down => Action::Down,
        KeyCode::Left => Action::Left,
        KeyCode::Right => Action::Right,
        KeyCode::Char(c) => Action::Char(c),
        _ => return None,
    };
    Some(action)
}

/// Hint line for the bottom bar
pub fn hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Navigate => {
            " q: Quit | 1-8/Tab: Pages | ↑↓: Select | Enter: Open | r: Report | c: Chat | Esc: Back "
        }
        Mode::Input => " Typing | Enter: Next/Submit | Tab: Next field | Esc: Stop typing ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_release_events_are_ignored() {
        let key = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(Mode::Navigate, key), None);
    }

    #[test]
    fn test_q_quits_only_in_navigate_mode() {
        assert_eq!(
            map_key(Mode::Navigate, press(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(
            map_key(Mode::Input, press(KeyCode::Char('q'))),
            Some(Action::Char('q'))
        );
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(Mode::Input, key), Some(Action::Quit));
        assert_eq!(map_key(Mode::Navigate, key), Some(Action::Quit));
    }

    #[test]
    fn test_number_keys_select_header_tabs() {
        assert_eq!(
            map_key(Mode::Navigate, press(KeyCode::Char('1'))),
            Some(Action::Navigate(Page::Home))
        );
        assert_eq!(
            map_key(Mode::Navigate, press(KeyCode::Char('8'))),
            Some(Action::Navigate(Page::News))
        );
        assert_eq!(map_key(Mode::Navigate, press(KeyCode::Char('9'))), None);
    }

    #[test]
    fn test_escape_depends_on_mode() {
        assert_eq!(map_key(Mode::Navigate, press(KeyCode::Esc)), Some(Action::Back));
        assert_eq!(map_key(Mode::Input, press(KeyCode::Esc)), Some(Action::ExitInput));
    }

    #[test]
    fn test_home_restarts_only_while_navigating() {
        assert_eq!(
            map_key(Mode::Navigate, press(KeyCode::Home)),
            Some(Action::FirstStep)
        );
        assert_eq!(map_key(Mode::Input, press(KeyCode::Home)), None);
    }
}
