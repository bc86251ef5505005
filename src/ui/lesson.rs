//! Lesson module view: step tracker on the left, the current step on the right

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::flow::LessonSession;
use crate::models::{CompletionRule, Step};
use crate::theme::{
    AMBER_WARNING, BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, CYAN_PRIMARY, GREEN_SUCCESS,
    RED_ERROR, ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::forms::render_report_form;
use crate::ui::stats::{render_stat_cards, StatCard};
use crate::ui::steps::render_step_tracker;

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(CYAN_PRIMARY).add_modifier(Modifier::BOLD),
    ))
}

fn quiz_lines(session: &LessonSession, step: &Step, answered: bool) -> Vec<Line<'static>> {
    let Some(quiz) = &step.quiz else {
        return Vec::new();
    };
    let draft = &session.draft;
    let mut lines = vec![Line::default(), heading("Knowledge Check")];

    if !draft.visible {
        let hint = if answered {
            "Answered. Press t to review the question."
        } else {
            "Press t (or Enter) to take the quiz."
        };
        lines.push(Line::from(Span::styled(hint, Style::default().fg(TEXT_MUTED))));
        return lines;
    }

    lines.push(Line::from(Span::styled(
        quiz.question.clone(),
        Style::default().fg(TEXT_PRIMARY),
    )));
    for (index, option) in quiz.options.iter().enumerate() {
        let selected = index == draft.selected;
        let style = match draft.result {
            Some(_) if quiz.is_correct(index) => Style::default().fg(GREEN_SUCCESS),
            Some(_) if selected => Style::default().fg(RED_ERROR),
            Some(_) => Style::default().fg(TEXT_MUTED),
            None if selected => Style::default()
                .fg(CYAN_PRIMARY)
                .bg(BG_TERTIARY)
                .add_modifier(Modifier::BOLD),
            None => Style::default().fg(TEXT_SECONDARY),
        };
        let marker = if selected { "▸" } else { " " };
        lines.push(Line::from(Span::styled(
            format!(" {marker} {}. {option}", (b'A' + (index % 26) as u8) as char),
            style,
        )));
    }

    match draft.result {
        Some(result) if result.is_correct => lines.push(Line::from(Span::styled(
            "✓ Correct! Press Enter to continue.",
            Style::default().fg(GREEN_SUCCESS).add_modifier(Modifier::BOLD),
        ))),
        Some(_) => lines.push(Line::from(Span::styled(
            "✗ Not quite. The correct answer is highlighted.",
            Style::default().fg(RED_ERROR).add_modifier(Modifier::BOLD),
        ))),
        None => lines.push(Line::from(Span::styled(
            "↑↓: choose | Enter: submit",
            Style::default().fg(TEXT_MUTED),
        ))),
    }
    lines
}

/// Text of the current step: body, key points, tip, scenario and quiz
pub fn step_lines(session: &LessonSession) -> Vec<Line<'static>> {
    let step = session.current_step();
    let progress = session.progress();
    let answered = progress.answered_steps.contains(&step.ordinal);

    let mut lines = vec![
        Line::from(Span::styled(
            step.title.clone(),
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    for paragraph in step.body.split("\n\n") {
        lines.push(Line::from(Span::styled(
            paragraph.trim().to_string(),
            Style::default().fg(TEXT_SECONDARY),
        )));
        lines.push(Line::default());
    }

    if !step.key_points.is_empty() {
        lines.push(heading("Key Points"));
        for point in &step.key_points {
            lines.push(Line::from(vec![
                Span::styled("• ", Style::default().fg(CYAN_PRIMARY)),
                Span::styled(point.clone(), Style::default().fg(TEXT_SECONDARY)),
            ]));
        }
    }

    if let Some(tip) = &step.tip {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(
                "Tip: ",
                Style::default().fg(AMBER_WARNING).add_modifier(Modifier::BOLD),
            ),
            Span::styled(tip.clone(), Style::default().fg(TEXT_SECONDARY)),
        ]));
    }

    if let Some(scenario) = &step.scenario {
        lines.push(Line::default());
        if session.scenario_visible {
            lines.push(heading(&format!("Scenario: {}", scenario.title)));
            lines.push(Line::from(Span::styled(
                scenario.narrative.clone(),
                Style::default().fg(TEXT_SECONDARY),
            )));
            for action in &scenario.correct_actions {
                lines.push(Line::from(Span::styled(
                    format!("✓ {action}"),
                    Style::default().fg(GREEN_SUCCESS),
                )));
            }
            for action in &scenario.incorrect_actions {
                lines.push(Line::from(Span::styled(
                    format!("✗ {action}"),
                    Style::default().fg(RED_ERROR),
                )));
            }
        } else {
            lines.push(Line::from(Span::styled(
                format!("Press s to run the scenario: {}", scenario.title),
                Style::default().fg(TEXT_MUTED),
            )));
        }
    }

    lines.extend(quiz_lines(session, step, answered));
    lines
}

fn nav_hint(session: &LessonSession) -> String {
    let sequence = session.sequence();
    let position = format!("{}/{}", sequence.current_ordinal(), sequence.step_count());
    if sequence.is_first() {
        format!(" →: step {position} | s: scenario | Esc: exit ")
    } else {
        format!(" ←/→: step {position} | Home: first | s: scenario | Esc: exit ")
    }
}

/// Render a lesson module
pub fn render_lesson(
    area: Rect,
    session: &LessonSession,
    tick: u64,
    scroll: u16,
    editing: bool,
    frame: &mut Frame,
) {
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(30), Constraint::Percentage(70)]).areas(area);
    let [cards_area, tracker_area] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(3)]).areas(left);

    let progress = session.progress();
    let score_color = if progress.score == progress.quiz_step_count {
        GREEN_SUCCESS
    } else {
        CYAN_PRIMARY
    };
    render_stat_cards(
        cards_area,
        &[
            StatCard::new(
                format!("{}/{}", progress.score, progress.quiz_step_count),
                "SCORE",
                score_color,
            ),
            StatCard::new(
                format!("{}/{}", progress.current_step_ordinal, progress.step_count),
                "STEP",
                CYAN_PRIMARY,
            ),
        ],
        frame,
    );
    render_step_tracker(tracker_area, session, tick, frame);

    let practice = session.rule() == CompletionRule::PracticeReport && session.sequence().is_last();
    let (content_area, form_area) = if practice {
        let [content, form] =
            Layout::vertical([Constraint::Percentage(45), Constraint::Percentage(55)])
                .areas(right);
        (content, Some(form))
    } else {
        (right, None)
    };

    let nav = nav_hint(session);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", session.title),
            Style::default().fg(CYAN_PRIMARY).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(Span::styled(nav, Style::default().fg(TEXT_MUTED))))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let content = Paragraph::new(step_lines(session))
        .block(block)
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0));
    frame.render_widget(content, content_area);

    if let Some(form_area) = form_area {
        render_report_form(
            form_area,
            "Practice Report (i: type, Enter: next/submit)",
            &session.practice,
            editing,
            frame,
        );
    }
}
