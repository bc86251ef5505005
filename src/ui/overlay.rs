//! Popups drawn over the page: the security assistant chat and module badges

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::chatbot::{Chat, Sender, QUICK_ACTIONS};
use crate::theme::{
    get_pulse_color, AMBER_WARNING, BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, CYAN_PRIMARY,
    GREEN_SUCCESS, ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::text::wrap_text;
use crate::ui::helpers::centered_rect;

const CHAT_WIDTH: u16 = 60;
const CHAT_HEIGHT: u16 = 24;

/// Message lines, newest last, wrapped to `width`
fn message_lines(chat: &Chat, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for message in chat.messages() {
        let (name, color, text_color) = match message.sender {
            Sender::Bot => ("Assistant", CYAN_PRIMARY, TEXT_SECONDARY),
            Sender::User => ("You", AMBER_WARNING, TEXT_PRIMARY),
        };
        lines.push(Line::from(Span::styled(
            name,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        for row in wrap_text(&message.text, width.saturating_sub(2)) {
            lines.push(Line::from(Span::styled(
                format!("  {row}"),
                Style::default().fg(text_color),
            )));
        }
    }
    lines
}

/// Render the chat popup in the lower right corner
pub fn render_chat(area: Rect, chat: &Chat, typing: bool, frame: &mut Frame) {
    let width = CHAT_WIDTH.min(area.width);
    let height = CHAT_HEIGHT.min(area.height);
    let popup = Rect::new(
        area.x + area.width - width,
        area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    );
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(Span::styled(
            " Security Assistant ",
            Style::default().fg(CYAN_PRIMARY).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(Span::styled(
            " ↑↓ Enter: quick question | i: type | Esc: close ",
            Style::default().fg(TEXT_MUTED),
        )))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(CYAN_PRIMARY))
        .style(Style::default().bg(BG_SECONDARY));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let quick_height = QUICK_ACTIONS.len() as u16;
    let [messages_area, quick_area, input_area] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(quick_height),
        Constraint::Length(3),
    ])
    .areas(inner);

    // Keep the newest messages in view
    let lines = message_lines(chat, messages_area.width as usize);
    let overflow = lines.len().saturating_sub(messages_area.height as usize);
    frame.render_widget(
        Paragraph::new(lines).scroll((u16::try_from(overflow).unwrap_or(u16::MAX), 0)),
        messages_area,
    );

    let quick: Vec<Line> = QUICK_ACTIONS
        .iter()
        .enumerate()
        .map(|(index, action)| {
            if index == chat.cursor && !typing {
                Line::from(Span::styled(
                    format!("▸ {action}"),
                    Style::default().fg(CYAN_PRIMARY).bg(BG_TERTIARY),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {action}"),
                    Style::default().fg(TEXT_MUTED),
                ))
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(quick), quick_area);

    let border = if typing { CYAN_PRIMARY } else { BORDER_SUBTLE };
    let cursor = if typing { "█" } else { "" };
    let input = Paragraph::new(Line::from(vec![
        Span::styled(chat.input.clone(), Style::default().fg(TEXT_PRIMARY)),
        Span::styled(cursor, Style::default().fg(CYAN_PRIMARY)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDERS)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(input, input_area);
}

/// Render the completion badge in the middle of the screen
pub fn render_badge(area: Rect, module_title: &str, tick: u64, frame: &mut Frame) {
    let popup = centered_rect(48, 9, area);
    frame.render_widget(Clear, popup);

    let star_color = get_pulse_color(tick, GREEN_SUCCESS, AMBER_WARNING);
    let lines = vec![
        Line::from(Span::styled(
            "★ ★ ★",
            Style::default().fg(star_color).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Badge Earned!",
            Style::default().fg(GREEN_SUCCESS).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("You completed {module_title}"),
            Style::default().fg(TEXT_PRIMARY),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Enter: back to training",
            Style::default().fg(TEXT_MUTED),
        )),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(GREEN_SUCCESS))
        .style(Style::default().bg(BG_SECONDARY));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        popup,
    );
}
