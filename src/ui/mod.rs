//! UI module for the SecureGuard TUI
//!
//! This module contains the rendering functions for every page: the header
//! and bottom bar, static pages and cheat sheets, lesson step trackers,
//! checklist stat cards, forms, and the chat and badge popups.

mod checklist;
mod forms;
mod helpers;
mod lesson;
mod overlay;
mod shell;
mod stats;
mod steps;
mod views;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::flow::ModuleSession;
use crate::models::Mode;
use crate::pages;
use crate::router::ViewKind;
use crate::theme::BG_PRIMARY;

/// Draw the whole screen for the current app state
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BG_PRIMARY)), area);

    let [header_area, content_area, bottom_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(area);

    shell::render_header(header_area, app.navigator.current(), frame);
    render_content(content_area, app, frame);
    shell::render_bottom_bar(bottom_area, app.mode, app.status.as_ref(), frame);

    if app.chat.open {
        overlay::render_chat(content_area, &app.chat, app.mode == Mode::Input, frame);
    }
    if let Some(id) = &app.badge {
        let title = app
            .session
            .as_ref()
            .map_or(id.as_str(), ModuleSession::title);
        overlay::render_badge(area, title, app.animation_tick, frame);
    }
}

fn render_content(area: Rect, app: &App, frame: &mut Frame) {
    let view = app.view();
    let scroll = app.navigator.scroll;
    // the chat popup takes typed input while it is open
    let editing = app.mode == Mode::Input && !app.chat.open;

    match &view.kind {
        ViewKind::Training => views::render_training(
            area,
            &app.catalog,
            &app.completed_modules,
            app.list_cursor,
            frame,
        ),
        ViewKind::Report => forms::render_report_page(area, &app.report_form, editing, frame),
        ViewKind::PasswordGuidelines => forms::render_password_page(
            area,
            &app.password,
            app.reveal_password,
            editing,
            scroll,
            frame,
        ),
        ViewKind::CheatSheet(id) => {
            views::render_cheat_sheet(area, pages::cheat_sheet(*id), scroll, frame)
        }
        ViewKind::Module(_) => match &app.session {
            Some(ModuleSession::Lessons(session)) => lesson::render_lesson(
                area,
                session,
                app.animation_tick,
                scroll,
                editing,
                frame,
            ),
            Some(ModuleSession::Checklist(session)) => {
                checklist::render_checklist(area, session, frame)
            }
            None => views::render_static_page(
                area,
                &view.title,
                &pages::StaticPage::default(),
                0,
                0,
                frame,
            ),
        },
        kind => views::render_static_page(
            area,
            &view.title,
            &pages::static_page(kind),
            app.list_cursor,
            scroll,
            frame,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::Action;
    use crate::models::Catalog;
    use ratatui::backend::TestBackend;
    use std::time::{Duration, Instant};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app(start: &str) -> App {
        App::new(Catalog::embedded().unwrap(), None, start)
    }

    #[test]
    fn test_every_page_renders() {
        let tags = [
            "home",
            "training",
            "threats",
            "report",
            "policies",
            "resources",
            "contact",
            "about",
            "news",
            "password-guidelines",
            "incident-response-guide",
            "spot-threats",
            "cheatsheet-incident-response",
            "cheatsheet-phishing",
            "cheatsheet-password",
            "cheatsheet-social-engineering",
            "module-phishing",
            "module-ransomware",
            "module-incident-reporting",
            "module-security-updates",
        ];
        for tag in tags {
            let screen = render(&app(tag));
            assert!(screen.contains("SecureGuard"), "{tag} has no header");
        }
    }

    #[test]
    fn test_training_lists_modules() {
        let app = app("training");
        let screen = render(&app);
        for module in &app.catalog.modules {
            assert!(screen.contains(&module.title), "{} missing", module.title);
        }
        assert!(screen.contains("BADGES EARNED"));
    }

    #[test]
    fn test_status_replaces_hints() {
        let mut app = app("home");
        assert!(render(&app).contains("q: Quit"));
        app.set_status(crate::app::StatusKind::Error, "Something broke");
        let screen = render(&app);
        assert!(screen.contains("Something broke"));
        assert!(!screen.contains("q: Quit"));
    }

    #[test]
    fn test_chat_overlay_renders() {
        let mut app = app("home");
        app.handle_action(Action::ToggleChat);
        assert!(render(&app).contains("Security Assistant"));
    }

    #[test]
    fn test_badge_overlay_renders() {
        let mut app = app("module-security-updates");
        app.handle_action(Action::NextTab);
        for _ in 0..4 {
            app.handle_action(Action::Toggle);
            app.handle_action(Action::Down);
        }
        app.update(Instant::now());
        app.update(Instant::now() + Duration::from_secs(60));
        assert!(app.badge.is_some());
        assert!(render(&app).contains("Badge Earned!"));
    }
}
