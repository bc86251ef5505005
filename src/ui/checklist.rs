//! Checklist module view: bulletins to acknowledge and actions to tick off

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::flow::ChecklistSession;
use crate::models::ChecklistPane;
use crate::theme::{
    severity_color, AMBER_WARNING, BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, CYAN_PRIMARY,
    GREEN_SUCCESS, ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::stats::{render_stat_cards, StatCard};

fn percent_color(percent: u16) -> Color {
    match percent {
        100 => GREEN_SUCCESS,
        50..=99 => CYAN_PRIMARY,
        _ => AMBER_WARNING,
    }
}

fn pane_block(session: &ChecklistSession, pane: ChecklistPane, count: String) -> Block<'static> {
    let focused = session.pane == pane;
    let border = if focused { CYAN_PRIMARY } else { BORDER_SUBTLE };
    Block::default()
        .title(Span::styled(
            format!(" {} {count} ", pane.label()),
            Style::default().fg(CYAN_PRIMARY).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(BG_SECONDARY))
}

fn bulletin_items(session: &ChecklistSession) -> Vec<ListItem<'static>> {
    session
        .bulletins()
        .iter()
        .enumerate()
        .map(|(index, bulletin)| {
            let seen = if session.is_acknowledged(index) {
                Span::styled("✓ ", Style::default().fg(GREEN_SUCCESS))
            } else {
                Span::styled("• ", Style::default().fg(TEXT_MUTED))
            };
            let mut lines = vec![
                Line::from(vec![
                    seen,
                    Span::styled(
                        format!("{:<8} ", bulletin.severity.label()),
                        Style::default()
                            .fg(severity_color(bulletin.severity))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(bulletin.title.clone(), Style::default().fg(TEXT_PRIMARY)),
                ]),
                Line::from(Span::styled(
                    format!("  {} | {}", bulletin.date, bulletin.summary),
                    Style::default().fg(TEXT_SECONDARY),
                )),
            ];
            if let Some(action) = &bulletin.action {
                lines.push(Line::from(Span::styled(
                    format!("  Action: {action}"),
                    Style::default().fg(AMBER_WARNING),
                )));
            }
            ListItem::new(lines)
        })
        .collect()
}

fn action_items(session: &ChecklistSession) -> Vec<ListItem<'static>> {
    session
        .actions()
        .iter()
        .enumerate()
        .map(|(index, action)| {
            let done = session.is_action_done(index);
            let (checkbox, text_style) = if done {
                (
                    Span::styled("[x] ", Style::default().fg(GREEN_SUCCESS)),
                    Style::default()
                        .fg(TEXT_MUTED)
                        .add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                (
                    Span::styled("[ ] ", Style::default().fg(TEXT_SECONDARY)),
                    Style::default().fg(TEXT_PRIMARY),
                )
            };
            ListItem::new(Line::from(vec![
                checkbox,
                Span::styled(action.text.clone(), text_style),
                Span::styled(
                    format!("  ({})", action.deadline),
                    Style::default().fg(TEXT_MUTED),
                ),
            ]))
        })
        .collect()
}

/// Render a checklist module
pub fn render_checklist(area: Rect, session: &ChecklistSession, frame: &mut Frame) {
    let [cards_area, lists_area] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(5)]).areas(area);

    let viewed = session.viewed_percent();
    let actions = session.actions_percent();
    let score = session.security_score();
    render_stat_cards(
        cards_area,
        &[
            StatCard::new(format!("{viewed}%"), "BULLETINS VIEWED", percent_color(viewed)),
            StatCard::new(format!("{actions}%"), "ACTIONS DONE", percent_color(actions)),
            StatCard::new(format!("{score}%"), "SECURITY SCORE", percent_color(score)),
        ],
        frame,
    );

    let [bulletins_area, actions_area] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .areas(lists_area);

    let highlight = Style::default().bg(BG_TERTIARY);
    let cursor_for = |pane: ChecklistPane| {
        ListState::default().with_selected((session.pane == pane).then_some(session.cursor))
    };

    let bulletins = List::new(bulletin_items(session))
        .block(pane_block(
            session,
            ChecklistPane::Bulletins,
            format!(
                "({}/{})",
                session.acknowledged_count(),
                session.bulletins().len()
            ),
        ))
        .highlight_style(highlight);
    let mut bulletin_state = cursor_for(ChecklistPane::Bulletins);
    frame.render_stateful_widget(bulletins, bulletins_area, &mut bulletin_state);

    let actions = List::new(action_items(session))
        .block(pane_block(
            session,
            ChecklistPane::Actions,
            format!(
                "({}/{})",
                session.completed_count(),
                session.actions().len()
            ),
        ))
        .highlight_style(highlight)
        .highlight_symbol("▸ ");
    let mut action_state = cursor_for(ChecklistPane::Actions);
    frame.render_stateful_widget(actions, actions_area, &mut action_state);
}
