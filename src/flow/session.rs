//! Module sessions: the live state of one mounted training module.
//!
//! A session is created fresh every time a module is entered and dropped on
//! exit, so progress never carries over between visits.

use std::collections::BTreeSet;

use super::gate::CompletionGate;
use super::quiz::{ModuleProgress, QuizEvaluator, QuizResult};
use super::sequence::StepSequence;
use crate::error::{FlowError, FormError};
use crate::forms::ReportForm;
use crate::models::{
    Bulletin, ChecklistPane, CompletionRule, ModuleId, ModuleKind, RequiredAction, Step,
    TrainingModule,
};

/// Transient quiz state for the current step; cleared whenever the step changes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizDraft {
    pub visible: bool,
    pub selected: usize,
    pub result: Option<QuizResult>,
}

#[derive(Debug)]
pub struct LessonSession {
    pub module_id: ModuleId,
    pub title: String,
    rule: CompletionRule,
    sequence: StepSequence<Step>,
    evaluator: QuizEvaluator,
    gate: CompletionGate,
    pub draft: QuizDraft,
    pub scenario_visible: bool,
    pub practice: ReportForm,
}

impl LessonSession {
    pub fn new(
        module_id: ModuleId,
        title: impl Into<String>,
        steps: Vec<Step>,
        rule: CompletionRule,
        on_complete: impl FnMut() + 'static,
    ) -> Option<Self> {
        Some(Self {
            module_id,
            title: title.into(),
            rule,
            sequence: StepSequence::new(steps)?,
            evaluator: QuizEvaluator::new(),
            gate: CompletionGate::new(on_complete),
            draft: QuizDraft::default(),
            scenario_visible: false,
            practice: ReportForm::new(),
        })
    }

    pub fn rule(&self) -> CompletionRule {
        self.rule
    }

    pub fn sequence(&self) -> &StepSequence<Step> {
        &self.sequence
    }

    pub fn current_step(&self) -> &Step {
        self.sequence.current()
    }

    pub fn progress(&self) -> ModuleProgress<'_> {
        self.evaluator.progress(&self.sequence)
    }

    pub fn is_complete(&self) -> bool {
        self.gate.has_fired()
    }

    fn clear_step_state(&mut self) {
        self.draft = QuizDraft::default();
        self.scenario_visible = false;
    }

    pub fn advance(&mut self) -> bool {
        let moved = self.sequence.advance();
        if moved {
            self.clear_step_state();
        }
        moved
    }

    pub fn retreat(&mut self) -> bool {
        let moved = self.sequence.retreat();
        if moved {
            self.clear_step_state();
        }
        moved
    }

    pub fn jump_to(&mut self, ordinal: usize) -> Result<(), FlowError> {
        let before = self.sequence.current_ordinal();
        self.sequence.jump_to(ordinal)?;
        if before != ordinal {
            self.clear_step_state();
        }
        Ok(())
    }

    /// Reveal the quiz for the current step, if it has one
    pub fn show_quiz(&mut self) -> bool {
        if self.current_step().has_quiz() {
            self.draft.visible = true;
        }
        self.draft.visible
    }

    pub fn toggle_scenario(&mut self) {
        if self.current_step().scenario.is_some() {
            self.scenario_visible = !self.scenario_visible;
        }
    }

    /// Move the highlighted option; does nothing once the step is answered
    pub fn select_option(&mut self, forward: bool) {
        let Some(quiz) = &self.current_step().quiz else {
            return;
        };
        if self.draft.result.is_some() {
            return;
        }
        let len = quiz.options.len();
        self.draft.selected = if forward {
            (self.draft.selected + 1) % len
        } else {
            (self.draft.selected + len - 1) % len
        };
    }

    /// Submit an answer for any step and let the gate observe the result
    pub fn submit(&mut self, ordinal: usize, selected: usize) -> Result<QuizResult, FlowError> {
        let result = self.evaluator.submit(&self.sequence, ordinal, selected)?;
        if ordinal == self.sequence.current_ordinal() {
            self.draft.result = Some(result);
        }
        if self.rule == CompletionRule::FinalQuiz {
            let progress = self.evaluator.progress(&self.sequence);
            if self.gate.observe_quiz(&progress, ordinal, result) {
                tracing::info!(module = %self.module_id, score = progress.score, "module completed");
            }
        }
        Ok(result)
    }

    /// Submit the highlighted option for the current step
    pub fn submit_selected(&mut self) -> Result<QuizResult, FlowError> {
        let ordinal = self.sequence.current_ordinal();
        self.submit(ordinal, self.draft.selected)
    }

    /// Submit the practice report; completes `practice-report` modules
    pub fn submit_practice_report(&mut self) -> Result<(), FormError> {
        self.practice.submit()?;
        if self.rule == CompletionRule::PracticeReport && self.gate.fire() {
            tracing::info!(module = %self.module_id, "module completed");
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct ChecklistSession {
    pub module_id: ModuleId,
    pub title: String,
    bulletins: Vec<Bulletin>,
    actions: Vec<RequiredAction>,
    acknowledged: BTreeSet<usize>,
    completed: BTreeSet<usize>,
    gate: CompletionGate,
    pub pane: ChecklistPane,
    pub cursor: usize,
}

impl ChecklistSession {
    pub fn new(
        module_id: ModuleId,
        title: impl Into<String>,
        bulletins: Vec<Bulletin>,
        actions: Vec<RequiredAction>,
        on_complete: impl FnMut() + 'static,
    ) -> Self {
        Self {
            module_id,
            title: title.into(),
            bulletins,
            actions,
            acknowledged: BTreeSet::new(),
            completed: BTreeSet::new(),
            gate: CompletionGate::new(on_complete),
            pane: ChecklistPane::default(),
            cursor: 0,
        }
    }

    pub fn bulletins(&self) -> &[Bulletin] {
        &self.bulletins
    }

    pub fn actions(&self) -> &[RequiredAction] {
        &self.actions
    }

    pub fn is_acknowledged(&self, index: usize) -> bool {
        self.acknowledged.contains(&index)
    }

    pub fn is_action_done(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn acknowledged_count(&self) -> usize {
        self.acknowledged.len()
    }

    pub fn is_complete(&self) -> bool {
        self.gate.has_fired()
    }

    /// Mark a bulletin as read. Returns false for unknown indices or repeats.
    pub fn acknowledge(&mut self, index: usize) -> bool {
        index < self.bulletins.len() && self.acknowledged.insert(index)
    }

    /// Flip an action's done state; returns the new state
    pub fn toggle_action(&mut self, index: usize) -> bool {
        if index >= self.actions.len() {
            return false;
        }
        let done = if self.completed.remove(&index) {
            false
        } else {
            self.completed.insert(index);
            true
        };
        if self
            .gate
            .observe_checklist(self.completed.len(), self.actions.len())
        {
            tracing::info!(module = %self.module_id, "module completed");
        }
        done
    }

    fn pane_len(&self) -> usize {
        match self.pane {
            ChecklistPane::Bulletins => self.bulletins.len(),
            ChecklistPane::Actions => self.actions.len(),
        }
    }

    pub fn switch_pane(&mut self) {
        self.pane = self.pane.toggle();
        self.cursor = 0;
    }

    pub fn move_cursor(&mut self, forward: bool) {
        let len = self.pane_len();
        if len == 0 {
            return;
        }
        self.cursor = if forward {
            (self.cursor + 1).min(len - 1)
        } else {
            self.cursor.saturating_sub(1)
        };
    }

    /// Acknowledge or toggle whatever the cursor is on
    pub fn activate(&mut self) {
        match self.pane {
            ChecklistPane::Bulletins => {
                self.acknowledge(self.cursor);
            }
            ChecklistPane::Actions => {
                self.toggle_action(self.cursor);
            }
        }
    }

    pub fn viewed_percent(&self) -> u16 {
        percent(self.acknowledged.len(), self.bulletins.len())
    }

    pub fn actions_percent(&self) -> u16 {
        percent(self.completed.len(), self.actions.len())
    }

    /// Mean of bulletins read and actions done, rounded
    pub fn security_score(&self) -> u16 {
        let total = u32::from(self.viewed_percent()) + u32::from(self.actions_percent());
        total.div_ceil(2) as u16
    }
}

fn percent(part: usize, whole: usize) -> u16 {
    if whole == 0 {
        return 100;
    }
    ((part * 100) as f64 / whole as f64).round() as u16
}

/// The mounted module, whichever kind it is
#[derive(Debug)]
pub enum ModuleSession {
    Lessons(LessonSession),
    Checklist(ChecklistSession),
}

impl ModuleSession {
    /// Start a fresh session for `module`; `None` if it has no steps
    pub fn start(module: &TrainingModule, on_complete: impl FnMut() + 'static) -> Option<Self> {
        let session = match &module.kind {
            ModuleKind::Lessons { steps, completion } => ModuleSession::Lessons(LessonSession::new(
                module.id.clone(),
                module.title.clone(),
                steps.clone(),
                *completion,
                on_complete,
            )?),
            ModuleKind::Checklist { bulletins, actions } => {
                ModuleSession::Checklist(ChecklistSession::new(
                    module.id.clone(),
                    module.title.clone(),
                    bulletins.clone(),
                    actions.clone(),
                    on_complete,
                ))
            }
        };
        tracing::debug!(module = %module.id, "module session started");
        Some(session)
    }

    pub fn module_id(&self) -> &ModuleId {
        match self {
            ModuleSession::Lessons(s) => &s.module_id,
            ModuleSession::Checklist(s) => &s.module_id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ModuleSession::Lessons(s) => &s.title,
            ModuleSession::Checklist(s) => &s.title,
        }
    }

    pub fn is_complete(&self) -> bool {
        match self {
            ModuleSession::Lessons(s) => s.is_complete(),
            ModuleSession::Checklist(s) => s.is_complete(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::IncidentType;
    use crate::models::{Catalog, Quiz};
    use std::cell::Cell;
    use std::rc::Rc;

    fn step(title: &str, quiz: Option<Quiz>) -> Step {
        Step {
            ordinal: 0,
            title: title.to_string(),
            body: String::new(),
            key_points: Vec::new(),
            quiz,
            tip: None,
            scenario: None,
        }
    }

    fn quiz(options: usize, correct: usize) -> Option<Quiz> {
        Some(Quiz {
            question: "Which one?".to_string(),
            options: (0..options).map(|i| format!("option {i}")).collect(),
            correct_option_index: correct,
        })
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let inner = Rc::clone(&count);
        (count, move || inner.set(inner.get() + 1))
    }

    fn numbered(mut steps: Vec<Step>) -> Vec<Step> {
        for (i, s) in steps.iter_mut().enumerate() {
            s.ordinal = i + 1;
        }
        steps
    }

    fn lesson(steps: Vec<Step>, rule: CompletionRule) -> (LessonSession, Rc<Cell<u32>>) {
        let (count, on_complete) = counter();
        let session = LessonSession::new(
            ModuleId::new("test"),
            "Test",
            numbered(steps),
            rule,
            on_complete,
        )
        .unwrap();
        (session, count)
    }

    #[test]
    fn test_two_step_module_completes_on_last_correct_answer() {
        let (mut session, fired) = lesson(
            vec![step("intro", None), step("check", quiz(3, 1))],
            CompletionRule::FinalQuiz,
        );

        session.advance();
        let result = session.submit(2, 1).unwrap();

        assert!(result.is_correct);
        assert_eq!(session.progress().score, 1);
        assert_eq!(fired.get(), 1);
        assert!(session.is_complete());
    }

    #[test]
    fn test_ten_advances_on_four_steps() {
        let (mut session, _) = lesson(
            (0..4).map(|i| step(&i.to_string(), None)).collect(),
            CompletionRule::FinalQuiz,
        );
        for _ in 0..10 {
            session.advance();
        }
        assert_eq!(session.progress().current_step_ordinal, 4);
    }

    #[test]
    fn test_invalid_selection_leaves_score() {
        let (mut session, fired) = lesson(
            vec![step("a", None), step("b", quiz(3, 1)), step("c", quiz(2, 0))],
            CompletionRule::FinalQuiz,
        );
        assert!(matches!(
            session.submit(2, 5),
            Err(FlowError::InvalidSelection { .. })
        ));
        assert_eq!(session.progress().score, 0);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_correct_answer_before_last_step_does_not_complete() {
        let (mut session, fired) = lesson(
            vec![step("a", quiz(2, 0)), step("b", quiz(2, 0))],
            CompletionRule::FinalQuiz,
        );
        session.submit_selected().unwrap();
        assert_eq!(fired.get(), 0);

        // answering the last step from step 1 is not enough either
        session.submit(2, 0).unwrap();
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_wrong_last_answer_never_completes() {
        let (mut session, fired) = lesson(
            vec![step("a", None), step("b", quiz(2, 0))],
            CompletionRule::FinalQuiz,
        );
        session.advance();
        session.select_option(true);
        assert!(!session.submit_selected().unwrap().is_correct);
        assert!(session.submit_selected().is_err());
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_moving_clears_quiz_draft() {
        let (mut session, _) = lesson(
            vec![step("a", quiz(3, 0)), step("b", None)],
            CompletionRule::FinalQuiz,
        );
        assert!(session.show_quiz());
        session.select_option(true);
        session.submit_selected().unwrap();
        assert!(session.draft.result.is_some());

        session.advance();
        assert_eq!(session.draft, QuizDraft::default());
        assert!(!session.show_quiz());

        session.retreat();
        // the answer is remembered even though the draft was cleared
        assert!(matches!(
            session.submit_selected(),
            Err(FlowError::AlreadyAnswered { ordinal: 1 })
        ));
    }

    #[test]
    fn test_jump_to_clears_draft_only_when_moving() {
        let (mut session, _) = lesson(
            vec![step("a", quiz(3, 0)), step("b", None), step("c", None)],
            CompletionRule::FinalQuiz,
        );
        session.show_quiz();
        session.select_option(true);
        let draft = session.draft.clone();

        assert!(matches!(
            session.jump_to(4),
            Err(FlowError::OutOfRange {
                ordinal: 4,
                step_count: 3
            })
        ));
        assert_eq!(session.sequence().current_ordinal(), 1);
        assert_eq!(session.draft, draft);

        // jumping to the current step keeps the draft
        session.jump_to(1).unwrap();
        assert_eq!(session.draft, draft);

        session.jump_to(3).unwrap();
        assert_eq!(session.sequence().current_ordinal(), 3);
        assert_eq!(session.draft, QuizDraft::default());
        assert!(!session.scenario_visible);
    }

    #[test]
    fn test_select_option_wraps() {
        let (mut session, _) = lesson(vec![step("a", quiz(3, 0))], CompletionRule::FinalQuiz);
        session.select_option(false);
        assert_eq!(session.draft.selected, 2);
        session.select_option(true);
        assert_eq!(session.draft.selected, 0);
    }

    #[test]
    fn test_practice_report_completes_module() {
        let (mut session, fired) = lesson(
            vec![step("a", None), step("b", None)],
            CompletionRule::PracticeReport,
        );
        assert!(session.submit_practice_report().is_err());
        assert_eq!(fired.get(), 0);

        session.practice.name = "Sam".to_string();
        session.practice.department = "IT".to_string();
        session.practice.incident_type = Some(IncidentType::Malware);
        session.practice.description = "Pop-up asking for payment".to_string();

        session.submit_practice_report().unwrap();
        session.submit_practice_report().unwrap();
        assert_eq!(fired.get(), 1);
    }

    fn checklist() -> (ChecklistSession, Rc<Cell<u32>>) {
        let (count, on_complete) = counter();
        let actions = (0..3)
            .map(|i| RequiredAction {
                text: format!("action {i}"),
                deadline: "Friday".to_string(),
            })
            .collect();
        let bulletins = vec![Bulletin {
            title: "Patch Tuesday".to_string(),
            date: "2024-01-09".to_string(),
            severity: crate::models::Severity::High,
            summary: "Install updates".to_string(),
            action: None,
        }];
        let session =
            ChecklistSession::new(ModuleId::new("updates"), "Updates", bulletins, actions, on_complete);
        (session, count)
    }

    #[test]
    fn test_checklist_fires_once_when_all_actions_done() {
        let (mut session, fired) = checklist();
        session.toggle_action(0);
        session.toggle_action(1);
        assert_eq!(fired.get(), 0);
        assert!(session.toggle_action(2));
        assert_eq!(fired.get(), 1);

        assert!(!session.toggle_action(2));
        assert!(session.toggle_action(2));
        assert_eq!(fired.get(), 1);
        assert!(session.is_complete());
    }

    #[test]
    fn test_checklist_ignores_unknown_indices() {
        let (mut session, _) = checklist();
        assert!(!session.toggle_action(7));
        assert!(!session.acknowledge(3));
        assert!(session.acknowledge(0));
        assert!(!session.acknowledge(0));
    }

    #[test]
    fn test_security_score() {
        let (mut session, _) = checklist();
        assert_eq!(session.security_score(), 0);
        session.acknowledge(0);
        assert_eq!(session.security_score(), 50);
        session.toggle_action(0);
        assert_eq!(session.actions_percent(), 33);
        assert_eq!(session.security_score(), 67);
    }

    #[test]
    fn test_cursor_follows_pane() {
        let (mut session, _) = checklist();
        session.move_cursor(true);
        assert_eq!(session.cursor, 0);
        session.switch_pane();
        session.move_cursor(true);
        session.move_cursor(true);
        session.move_cursor(true);
        assert_eq!(session.cursor, 2);
        session.activate();
        assert!(session.is_action_done(2));
    }

    #[test]
    fn test_start_sessions_from_embedded_catalog() {
        let catalog = Catalog::embedded().unwrap();
        for module in &catalog.modules {
            let session = ModuleSession::start(module, || {}).unwrap();
            assert_eq!(session.module_id(), &module.id);
            assert_eq!(session.title(), module.title);
            assert!(!session.is_complete());
        }
    }
}
