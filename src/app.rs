//! Application state and core logic for the SecureGuard TUI.
//!
//! This module contains the `App` struct which holds all state for the
//! interactive terminal UI: the module catalog, routing and navigation,
//! the mounted module session, and the per-page widget state.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::chatbot::Chat;
use crate::deferred::Deferred;
use crate::flow::{LessonSession, ModuleSession};
use crate::forms::ReportForm;
use crate::keymap::Action;
use crate::models::{Catalog, CompletionRule, Mode, ModuleId};
use crate::pages;
use crate::router::{Navigator, Page, Router, ViewDescriptor, ViewKind};

/// Delay between completing a module and showing its badge
pub const BADGE_DELAY: Duration = Duration::from_millis(1000);
/// Delay before the assistant answers
pub const CHAT_REPLY_DELAY: Duration = Duration::from_millis(1000);
/// How long the report confirmation stays up before the form clears
pub const REPORT_RESET_DELAY: Duration = Duration::from_millis(5000);

const REPORT_SUBMITTED: &str = "Report submitted. The security team will contact you shortly.";

const ANIMATION_INTERVAL: Duration = Duration::from_millis(100);

/// Events raised by collaborators and handled by the app root
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortalEvent {
    ModuleCompleted(ModuleId),
    ExitModule,
    Navigate(String),
}

/// Work scheduled for later on the event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingEvent {
    ShowBadge(ModuleId),
    ChatReply(&'static str),
    ResetReportForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// Where typed characters go while in input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputTarget {
    Chat,
    ReportForm,
    PracticeForm,
    Password,
}

/// Application state
pub struct App {
    pub mode: Mode,
    pub catalog: Catalog,
    /// File the catalog was loaded from, if not the embedded default
    pub catalog_path: Option<PathBuf>,
    pub catalog_needs_reload: Arc<Mutex<bool>>,
    pub router: Router,
    pub navigator: Navigator,
    pub session: Option<ModuleSession>,
    pub completed_modules: BTreeSet<ModuleId>,
    /// Module whose completion badge is on screen
    pub badge: Option<ModuleId>,
    pub report_form: ReportForm,
    pub password: String,
    pub reveal_password: bool,
    pub chat: Chat,
    /// Selected entry in the current page's list (modules or links)
    pub list_cursor: usize,
    pub status: Option<StatusMessage>,
    pub deferred: Deferred<PendingEvent>,
    events_tx: Sender<PortalEvent>,
    events_rx: Receiver<PortalEvent>,
    pub should_quit: bool,
    // Animation state
    pub animation_tick: u64,
    pub last_animation_update: Instant,
}

impl App {
    pub fn new(catalog: Catalog, catalog_path: Option<PathBuf>, start_tag: &str) -> Self {
        let router = Router::new(&catalog);
        let (events_tx, events_rx) = mpsc::channel();
        let now = Instant::now();

        let mut app = Self {
            mode: Mode::Navigate,
            catalog,
            catalog_path,
            catalog_needs_reload: Arc::new(Mutex::new(false)),
            router,
            navigator: Navigator::default(),
            session: None,
            completed_modules: BTreeSet::new(),
            badge: None,
            report_form: ReportForm::new(),
            password: String::new(),
            reveal_password: false,
            chat: Chat::new(),
            list_cursor: 0,
            status: None,
            deferred: Deferred::new(),
            events_tx,
            events_rx,
            should_quit: false,
            animation_tick: 0,
            last_animation_update: now,
        };
        let start = app.router.resolve(start_tag).page.clone();
        app.navigate(start);
        app
    }

    pub fn view(&self) -> &ViewDescriptor {
        self.router.view(self.navigator.current())
    }

    pub fn lesson(&self) -> Option<&LessonSession> {
        match &self.session {
            Some(ModuleSession::Lessons(s)) => Some(s),
            _ => None,
        }
    }

    pub fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    /// Queue an event for the app root
    pub fn dispatch(&self, event: PortalEvent) {
        // the receiver lives as long as self
        let _ = self.events_tx.send(event);
    }

    /// Show `page`, mounting or dropping the module session as needed
    pub fn navigate(&mut self, page: Page) {
        let page = self.router.view(&page).page.clone();
        if self.navigator.navigate(page) {
            self.page_changed();
        }
    }

    pub fn enter_module(&mut self, id: ModuleId) {
        if !self.router.contains(&Page::Module(id.clone())) {
            self.navigate(Page::Home);
        } else if self.navigator.enter_module(id) {
            self.page_changed();
        }
    }

    pub fn exit_module(&mut self) {
        if self.navigator.exit_module() {
            self.page_changed();
        }
    }

    fn page_changed(&mut self) {
        self.mode = Mode::Navigate;
        self.list_cursor = 0;
        self.badge = None;
        self.session = None;

        if let Page::Module(id) = self.navigator.current().clone() {
            self.mount_module(&id);
        }
    }

    pub fn navigate_tag(&mut self, tag: &str) {
        let page = self.router.resolve(tag).page.clone();
        self.navigate(page);
    }

    fn mount_module(&mut self, id: &ModuleId) {
        let Some(module) = self.catalog.module(id) else {
            return;
        };
        let tx = self.events_tx.clone();
        let completed_id = id.clone();
        let on_complete = move || {
            let _ = tx.send(PortalEvent::ModuleCompleted(completed_id.clone()));
        };
        self.session = ModuleSession::start(module, on_complete);
    }

    /// Drain the event channel and any deferred work that is due
    pub fn update(&mut self, now: Instant) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
        for pending in self.deferred.drain_due(now) {
            self.handle_pending(pending);
        }
        if now.duration_since(self.last_animation_update) >= ANIMATION_INTERVAL {
            self.animation_tick = self.animation_tick.wrapping_add(1);
            self.last_animation_update = now;
        }
    }

    fn handle_event(&mut self, event: PortalEvent) {
        match event {
            PortalEvent::ModuleCompleted(id) => {
                tracing::info!(module = %id, "badge earned");
                self.completed_modules.insert(id.clone());
                self.deferred.schedule(BADGE_DELAY, PendingEvent::ShowBadge(id));
            }
            PortalEvent::ExitModule => self.exit_module(),
            PortalEvent::Navigate(tag) => self.navigate_tag(&tag),
        }
    }

    fn handle_pending(&mut self, pending: PendingEvent) {
        match pending {
            PendingEvent::ShowBadge(id) => {
                // only if the learner is still in the session that completed
                let earned = self
                    .session
                    .as_ref()
                    .is_some_and(|s| s.module_id() == &id && s.is_complete());
                if earned {
                    self.badge = Some(id);
                }
            }
            PendingEvent::ChatReply(reply) => self.chat.receive(reply),
            PendingEvent::ResetReportForm => {
                self.report_form.reset();
                if self
                    .status
                    .as_ref()
                    .is_some_and(|status| status.text == REPORT_SUBMITTED)
                {
                    self.status = None;
                }
            }
        }
    }

    /// Reload the module catalog from disk if the watcher flagged a change
    pub fn reload_catalog_if_needed(&mut self) {
        let needs_reload = {
            let Ok(mut flag) = self.catalog_needs_reload.lock() else {
                return;
            };
            std::mem::take(&mut *flag)
        };
        if !needs_reload {
            return;
        }
        let Some(path) = self.catalog_path.clone() else {
            return;
        };

        match Catalog::load(&path) {
            Ok(catalog) => {
                tracing::info!(path = %path.display(), "catalog reloaded");
                self.router = Router::new(&catalog);
                self.catalog = catalog;
                if !self.router.contains(self.navigator.current()) {
                    self.navigate(Page::Home);
                }
                self.set_status(StatusKind::Info, "Training content reloaded");
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "catalog reload failed");
                self.set_status(StatusKind::Error, format!("Reload failed: {err}"));
            }
        }
    }

    // ------------------------------------------------------------------
    // Input handling
    // ------------------------------------------------------------------

    pub fn handle_action(&mut self, action: Action) {
        tracing::debug!(?action, mode = ?self.mode, "key");
        if action == Action::Quit {
            self.should_quit = true;
            return;
        }
        match self.mode {
            Mode::Input => self.handle_input_action(action),
            Mode::Navigate => self.handle_navigate_action(action),
        }
    }

    fn input_target(&self) -> Option<InputTarget> {
        if self.chat.open {
            return Some(InputTarget::Chat);
        }
        match self.view().kind {
            ViewKind::Report => Some(InputTarget::ReportForm),
            ViewKind::PasswordGuidelines => Some(InputTarget::Password),
            ViewKind::Module(_) => self
                .lesson()
                .filter(|s| s.rule() == CompletionRule::PracticeReport && s.sequence().is_last())
                .map(|_| InputTarget::PracticeForm),
            _ => None,
        }
    }

    fn active_form(&mut self) -> Option<&mut ReportForm> {
        match self.input_target()? {
            InputTarget::ReportForm => Some(&mut self.report_form),
            InputTarget::PracticeForm => match &mut self.session {
                Some(ModuleSession::Lessons(s)) => Some(&mut s.practice),
                _ => None,
            },
            _ => None,
        }
    }

    fn handle_input_action(&mut self, action: Action) {
        let Some(target) = self.input_target() else {
            self.mode = Mode::Navigate;
            return;
        };

        match action {
            Action::ExitInput => self.mode = Mode::Navigate,
            Action::ToggleReveal => self.reveal_password = !self.reveal_password,
            Action::Char(c) => match target {
                InputTarget::Chat => self.chat.input.push(c),
                InputTarget::Password => self.password.push(c),
                InputTarget::ReportForm | InputTarget::PracticeForm => {
                    if let Some(form) = self.active_form() {
                        form.insert_char(c);
                    }
                }
            },
            Action::Backspace => match target {
                InputTarget::Chat => {
                    self.chat.input.pop();
                }
                InputTarget::Password => {
                    self.password.pop();
                }
                InputTarget::ReportForm | InputTarget::PracticeForm => {
                    if let Some(form) = self.active_form() {
                        form.backspace();
                    }
                }
            },
            Action::NextField | Action::PrevField | Action::Up | Action::Down => {
                if let Some(form) = self.active_form() {
                    let forward = matches!(action, Action::NextField | Action::Down);
                    if form.focus.is_text() || matches!(action, Action::NextField | Action::PrevField)
                    {
                        if forward {
                            form.focus_next();
                        } else {
                            form.focus_prev();
                        }
                    } else {
                        form.cycle_incident_type(forward);
                    }
                }
            }
            Action::Left | Action::Right => {
                if let Some(form) = self.active_form() {
                    if !form.focus.is_text() {
                        form.cycle_incident_type(action == Action::Right);
                    }
                }
            }
            Action::Submit => self.submit_input(target),
            _ => {}
        }
    }

    fn submit_input(&mut self, target: InputTarget) {
        match target {
            InputTarget::Chat => {
                if let Some(reply) = self.chat.send_input() {
                    self.deferred
                        .schedule(CHAT_REPLY_DELAY, PendingEvent::ChatReply(reply));
                }
            }
            InputTarget::Password => self.mode = Mode::Navigate,
            InputTarget::ReportForm | InputTarget::PracticeForm => {
                let last_field = self
                    .active_form()
                    .is_some_and(|f| f.focus == crate::forms::FormField::Description);
                if last_field {
                    self.submit_form(target);
                } else if let Some(form) = self.active_form() {
                    form.focus_next();
                }
            }
        }
    }

    fn submit_form(&mut self, target: InputTarget) {
        let result = match target {
            InputTarget::ReportForm => self.report_form.submit(),
            InputTarget::PracticeForm => match &mut self.session {
                Some(ModuleSession::Lessons(s)) => s.submit_practice_report(),
                _ => return,
            },
            _ => return,
        };

        match result {
            Ok(()) => {
                self.mode = Mode::Navigate;
                if target == InputTarget::ReportForm {
                    self.set_status(StatusKind::Info, REPORT_SUBMITTED);
                    self.deferred
                        .schedule(REPORT_RESET_DELAY, PendingEvent::ResetReportForm);
                } else {
                    self.set_status(StatusKind::Info, "Practice report submitted");
                }
            }
            Err(err) => self.set_status(StatusKind::Error, err.to_string()),
        }
    }

    fn handle_navigate_action(&mut self, action: Action) {
        if self.chat.open {
            self.handle_chat_action(action);
            return;
        }
        if self.badge.is_some() {
            if matches!(action, Action::Activate | Action::Back) {
                self.badge = None;
                self.dispatch(PortalEvent::ExitModule);
            }
            return;
        }

        match action {
            Action::Navigate(page) => self.navigate(page),
            Action::NextTab | Action::PrevTab => {
                if let Some(ModuleSession::Checklist(s)) = &mut self.session {
                    s.switch_pane();
                } else {
                    self.cycle_tab(action == Action::NextTab);
                }
            }
            Action::OpenReport => self.navigate(Page::Report),
            Action::ToggleChat => self.chat.toggle(),
            Action::Back => self.go_back(),
            Action::PageUp => self.navigator.scroll_by(-10),
            Action::PageDown => self.navigator.scroll_by(10),
            Action::EnterInput => {
                if self.input_target().is_some() {
                    self.mode = Mode::Input;
                }
            }
            Action::ToggleReveal => self.reveal_password = !self.reveal_password,
            other => self.handle_page_action(other),
        }
    }

    fn handle_chat_action(&mut self, action: Action) {
        match action {
            Action::Back | Action::ToggleChat => self.chat.toggle(),
            Action::Up => self.chat.move_cursor(false),
            Action::Down => self.chat.move_cursor(true),
            Action::Activate => {
                if let Some(reply) = self.chat.send_quick_action() {
                    self.deferred
                        .schedule(CHAT_REPLY_DELAY, PendingEvent::ChatReply(reply));
                }
            }
            Action::EnterInput => self.mode = Mode::Input,
            Action::Navigate(page) => {
                self.chat.toggle();
                self.navigate(page);
            }
            _ => {}
        }
    }

    fn cycle_tab(&mut self, forward: bool) {
        let section = self.navigator.current().nav_section();
        let len = Page::NAV.len();
        let index = Page::NAV.iter().position(|p| *p == section).unwrap_or(0);
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        self.navigate(Page::NAV[next].clone());
    }

    fn go_back(&mut self) {
        match self.view().kind {
            ViewKind::Module(_) => self.dispatch(PortalEvent::ExitModule),
            ViewKind::CheatSheet(_) => self.navigate(Page::Policies),
            ViewKind::PasswordGuidelines | ViewKind::IncidentResponseGuide => {
                self.navigate(Page::Policies)
            }
            ViewKind::SpotThreats => self.navigate(Page::Threats),
            _ => self.status = None,
        }
    }

    /// Number of selectable entries on the current page
    fn list_len(&self) -> usize {
        match &self.view().kind {
            ViewKind::Training => self.catalog.modules.len(),
            kind => pages::static_page(kind).links.len(),
        }
    }

    fn move_list_cursor(&mut self, forward: bool) {
        let len = self.list_len();
        if len == 0 {
            return;
        }
        self.list_cursor = if forward {
            (self.list_cursor + 1).min(len - 1)
        } else {
            self.list_cursor.saturating_sub(1)
        };
    }

    fn handle_page_action(&mut self, action: Action) {
        match self.view().kind.clone() {
            ViewKind::Module(_) => self.handle_module_action(action),
            ViewKind::Training => match action {
                Action::Up => self.move_list_cursor(false),
                Action::Down => self.move_list_cursor(true),
                Action::Activate => {
                    if let Some(module) = self.catalog.modules.get(self.list_cursor) {
                        let id = module.id.clone();
                        self.enter_module(id);
                    }
                }
                _ => {}
            },
            ViewKind::Report => match action {
                Action::Up => self.report_form.focus_prev(),
                Action::Down => self.report_form.focus_next(),
                Action::Left | Action::Right if !self.report_form.focus.is_text() => {
                    self.report_form.cycle_incident_type(action == Action::Right);
                }
                Action::Activate => {
                    if !self.report_form.is_submitted() {
                        self.mode = Mode::Input;
                    }
                }
                _ => {}
            },
            ViewKind::CheatSheet(_) => match action {
                Action::Up => self.navigator.scroll_by(-1),
                Action::Down => self.navigator.scroll_by(1),
                _ => {}
            },
            kind => match action {
                Action::Up => self.move_list_cursor(false),
                Action::Down => self.move_list_cursor(true),
                Action::Activate => {
                    if let Some((_, tag)) = pages::static_page(&kind).links.get(self.list_cursor) {
                        self.dispatch(PortalEvent::Navigate((*tag).to_string()));
                    }
                }
                _ => {}
            },
        }
    }

    fn handle_module_action(&mut self, action: Action) {
        let mut error = None;
        match &mut self.session {
            Some(ModuleSession::Lessons(s)) => match action {
                Action::Left => {
                    s.retreat();
                }
                Action::Right => {
                    s.advance();
                }
                Action::FirstStep => {
                    if let Err(err) = s.jump_to(1) {
                        error = Some(err.to_string());
                    }
                }
                Action::ShowQuiz => {
                    s.show_quiz();
                }
                Action::ToggleScenario => s.toggle_scenario(),
                Action::Up if s.draft.visible => s.select_option(false),
                Action::Down if s.draft.visible => s.select_option(true),
                Action::Up => self.navigator.scroll_by(-1),
                Action::Down => self.navigator.scroll_by(1),
                Action::Activate => {
                    if s.draft.visible && s.draft.result.is_none() {
                        if let Err(err) = s.submit_selected() {
                            error = Some(err.to_string());
                        }
                    } else if !s.current_step().has_quiz() || s.draft.result.is_some() {
                        s.advance();
                    } else {
                        s.show_quiz();
                    }
                }
                _ => {}
            },
            Some(ModuleSession::Checklist(s)) => match action {
                Action::Up => s.move_cursor(false),
                Action::Down => s.move_cursor(true),
                Action::Toggle | Action::Activate => s.activate(),
                _ => {}
            },
            None => {}
        }
        if let Some(text) = error {
            self.set_status(StatusKind::Error, text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::IncidentType;
    use crate::models::ModuleKind;

    fn app(start: &str) -> App {
        App::new(Catalog::embedded().unwrap(), None, start)
    }

    fn far_future() -> Instant {
        Instant::now() + Duration::from_secs(60)
    }

    #[test]
    fn test_unknown_start_page_is_home() {
        let app = app("not-a-page");
        assert_eq!(app.navigator.current(), &Page::Home);
    }

    #[test]
    fn test_entering_module_mounts_fresh_session() {
        let mut app = app("training");
        app.handle_action(Action::Down);
        app.handle_action(Action::Activate);

        assert_eq!(
            app.navigator.current(),
            &Page::Module(ModuleId::new("ransomware"))
        );
        let session = app.lesson().unwrap();
        assert_eq!(session.progress().current_step_ordinal, 1);
        assert_eq!(session.progress().score, 0);
    }

    #[test]
    fn test_phishing_completion_shows_badge_then_exits() {
        let mut app = app("module-phishing");
        let catalog = Catalog::embedded().unwrap();
        let module = catalog.module(&ModuleId::new("phishing")).unwrap();
        let ModuleKind::Lessons { steps, .. } = &module.kind else {
            panic!("phishing is a lesson module");
        };
        let last = steps.last().unwrap();
        let correct = last.quiz.as_ref().unwrap().correct_option_index;

        for _ in 0..steps.len() {
            app.handle_action(Action::Right);
        }
        app.handle_action(Action::ShowQuiz);
        for _ in 0..correct {
            app.handle_action(Action::Down);
        }
        app.handle_action(Action::Activate);

        app.update(Instant::now());
        assert!(app.completed_modules.contains(&ModuleId::new("phishing")));
        assert!(app.badge.is_none());

        app.update(far_future());
        assert_eq!(app.badge, Some(ModuleId::new("phishing")));

        app.handle_action(Action::Activate);
        app.update(Instant::now());
        assert_eq!(app.navigator.current(), &Page::Training);
        assert!(app.session.is_none());
    }

    #[test]
    fn test_reentering_module_resets_progress() {
        let mut app = app("module-ransomware");
        app.handle_action(Action::Right);
        app.handle_action(Action::Back);
        app.update(Instant::now());
        assert_eq!(app.navigator.current(), &Page::Training);

        app.navigate_tag("module-ransomware");
        assert_eq!(app.lesson().unwrap().progress().current_step_ordinal, 1);
    }

    #[test]
    fn test_enter_reveals_submits_then_advances() {
        let mut app = app("module-phishing");
        // step 1 has a quiz but it is not shown; Enter reveals it
        app.handle_action(Action::Activate);
        assert!(app.lesson().unwrap().draft.visible);
        app.handle_action(Action::Activate);
        app.handle_action(Action::Activate);
        // third Enter advances because the step is answered
        assert_eq!(app.lesson().unwrap().progress().current_step_ordinal, 2);
        assert!(app.status.is_none());
    }

    #[test]
    fn test_report_form_submit_and_reset() {
        let mut app = app("report");
        app.handle_action(Action::Activate);
        assert_eq!(app.mode, Mode::Input);

        for c in "Ada".chars() {
            app.handle_action(Action::Char(c));
        }
        app.handle_action(Action::Submit);
        for c in "Finance".chars() {
            app.handle_action(Action::Char(c));
        }
        app.handle_action(Action::Submit);
        app.handle_action(Action::Right);
        assert_eq!(app.report_form.incident_type, Some(IncidentType::Phishing));
        app.handle_action(Action::Submit);
        app.handle_action(Action::Submit);
        // description still empty
        assert_eq!(
            app.status.as_ref().map(|s| s.kind),
            Some(StatusKind::Error)
        );

        for c in "Odd link".chars() {
            app.handle_action(Action::Char(c));
        }
        app.handle_action(Action::Submit);
        assert!(app.report_form.is_submitted());
        assert_eq!(app.mode, Mode::Navigate);

        app.update(far_future());
        assert!(!app.report_form.is_submitted());
        assert!(app.report_form.name.is_empty());
        assert!(app.status.is_none());
    }

    #[test]
    fn test_report_reset_keeps_newer_status() {
        let mut app = app("report");
        app.handle_action(Action::Activate);
        for value in ["Ada", "Finance"] {
            for c in value.chars() {
                app.handle_action(Action::Char(c));
            }
            app.handle_action(Action::Submit);
        }
        app.handle_action(Action::Right);
        app.handle_action(Action::Submit);
        for c in "Odd link".chars() {
            app.handle_action(Action::Char(c));
        }
        app.handle_action(Action::Submit);
        assert!(app.report_form.is_submitted());

        app.set_status(StatusKind::Error, "Reload failed");
        app.update(far_future());
        assert!(!app.report_form.is_submitted());
        assert_eq!(
            app.status.as_ref().map(|s| s.text.as_str()),
            Some("Reload failed")
        );
    }

    #[test]
    fn test_first_step_key_restarts_lesson() {
        let mut app = app("module-ransomware");
        for _ in 0..3 {
            app.handle_action(Action::Right);
        }
        app.handle_action(Action::ToggleScenario);
        assert_eq!(app.lesson().unwrap().progress().current_step_ordinal, 4);
        assert!(app.lesson().unwrap().scenario_visible);

        app.handle_action(Action::FirstStep);
        let session = app.lesson().unwrap();
        assert_eq!(session.progress().current_step_ordinal, 1);
        assert!(!session.scenario_visible);
        assert!(app.status.is_none());
    }

    #[test]
    fn test_badge_not_shown_in_reentered_session() {
        let mut app = app("module-security-updates");
        app.handle_action(Action::NextTab);
        for _ in 0..4 {
            app.handle_action(Action::Toggle);
            app.handle_action(Action::Down);
        }
        app.handle_action(Action::Back);
        app.update(Instant::now());
        assert!(app
            .completed_modules
            .contains(&ModuleId::new("security-updates")));
        assert_eq!(app.navigator.current(), &Page::Training);

        // back in before the badge delay runs out
        app.navigate_tag("module-security-updates");
        app.update(far_future());
        assert!(app.badge.is_none());
        assert!(app.session.is_some());
    }

    #[test]
    fn test_chat_reply_is_delayed() {
        let mut app = app("home");
        app.handle_action(Action::ToggleChat);
        app.handle_action(Action::Activate);
        assert_eq!(app.chat.messages().len(), 2);

        app.update(Instant::now());
        assert_eq!(app.chat.messages().len(), 2);
        app.update(far_future());
        assert_eq!(app.chat.messages().len(), 3);
    }

    #[test]
    fn test_chat_input_mode() {
        let mut app = app("news");
        app.handle_action(Action::ToggleChat);
        app.handle_action(Action::EnterInput);
        for c in "hi".chars() {
            app.handle_action(Action::Char(c));
        }
        app.handle_action(Action::Submit);
        assert_eq!(app.chat.messages().last().unwrap().text, "hi");
        assert_eq!(app.mode, Mode::Input);
    }

    #[test]
    fn test_policies_link_opens_cheat_sheet_and_back() {
        let mut app = app("policies");
        app.handle_action(Action::Activate);
        app.update(Instant::now());
        assert_eq!(app.view().kind, ViewKind::CheatSheet(crate::router::CheatSheetId::IncidentResponse));

        app.handle_action(Action::Back);
        assert_eq!(app.navigator.current(), &Page::Policies);
    }

    #[test]
    fn test_tab_cycles_header_pages() {
        let mut app = app("news");
        app.handle_action(Action::NextTab);
        assert_eq!(app.navigator.current(), &Page::Home);
        app.handle_action(Action::PrevTab);
        assert_eq!(app.navigator.current(), &Page::News);
    }

    #[test]
    fn test_checklist_module_completes() {
        let mut app = app("module-security-updates");
        app.handle_action(Action::NextTab);
        for _ in 0..4 {
            app.handle_action(Action::Toggle);
            app.handle_action(Action::Down);
        }
        app.update(Instant::now());
        assert!(app
            .completed_modules
            .contains(&ModuleId::new("security-updates")));
    }

    #[test]
    fn test_password_input_is_masked_state() {
        let mut app = app("password-guidelines");
        app.handle_action(Action::EnterInput);
        for c in "Summer2024".chars() {
            app.handle_action(Action::Char(c));
        }
        app.handle_action(Action::Backspace);
        assert_eq!(app.password, "Summer202");
        assert!(!app.reveal_password);
        app.handle_action(Action::ToggleReveal);
        assert!(app.reveal_password);
    }

    #[test]
    fn test_reload_failure_keeps_catalog() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "{ broken").unwrap();

        let mut app = App::new(
            Catalog::embedded().unwrap(),
            Some(file.path().to_path_buf()),
            "training",
        );
        *app.catalog_needs_reload.lock().unwrap() = true;
        app.reload_catalog_if_needed();

        assert_eq!(app.catalog.modules.len(), 4);
        assert_eq!(app.status.as_ref().map(|s| s.kind), Some(StatusKind::Error));
        assert!(!*app.catalog_needs_reload.lock().unwrap());
    }

    #[test]
    fn test_reload_drops_removed_module_page() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            file.path(),
            r#"{"modules": [{"id": "wifi", "title": "Wi-Fi", "summary": "", "kind": "checklist",
                "actions": [{"text": "Use VPN", "deadline": "today"}]}]}"#,
        )
        .unwrap();

        let mut app = App::new(
            Catalog::embedded().unwrap(),
            Some(file.path().to_path_buf()),
            "module-phishing",
        );
        *app.catalog_needs_reload.lock().unwrap() = true;
        app.reload_catalog_if_needed();

        assert_eq!(app.navigator.current(), &Page::Home);
        assert!(app.router.contains(&Page::Module(ModuleId::new("wifi"))));
    }
}
