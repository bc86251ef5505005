//! Header tabs and bottom bar

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::app::{StatusKind, StatusMessage};
use crate::keymap;
use crate::models::Mode;
use crate::router::Page;
use crate::theme::{
    BG_PRIMARY, BORDER_SUBTLE, CYAN_PRIMARY, RED_ERROR, ROUNDED_BORDERS, TEXT_MUTED,
    TEXT_SECONDARY,
};

/// Render the header with one tab per top-level page
pub fn render_header(area: Rect, current: &Page, frame: &mut Frame) {
    let section = current.nav_section();
    let selected = Page::NAV.iter().position(|p| *p == section).unwrap_or(0);

    let titles: Vec<Line> = Page::NAV
        .iter()
        .enumerate()
        .map(|(index, page)| Line::from(format!("{} {}", index + 1, page.nav_label())))
        .collect();

    let block = Block::default()
        .title(Span::styled(
            " SecureGuard ",
            Style::default().fg(CYAN_PRIMARY).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_PRIMARY));

    let tabs = Tabs::new(titles)
        .block(block)
        .select(selected)
        .style(Style::default().fg(TEXT_SECONDARY))
        .highlight_style(
            Style::default()
                .fg(CYAN_PRIMARY)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(Span::styled("│", Style::default().fg(BORDER_SUBTLE)));
    frame.render_widget(tabs, area);
}

/// Render the bottom bar: a status message if there is one, else key hints
pub fn render_bottom_bar(
    area: Rect,
    mode: Mode,
    status: Option<&StatusMessage>,
    frame: &mut Frame,
) {
    let bar = match status {
        Some(message) => {
            let bg = match message.kind {
                StatusKind::Info => CYAN_PRIMARY,
                StatusKind::Error => RED_ERROR,
            };
            Paragraph::new(format!(" {} ", message.text))
                .style(Style::default().fg(Color::Black).bg(bg))
        }
        None => {
            let bg = match mode {
                Mode::Navigate => CYAN_PRIMARY,
                Mode::Input => TEXT_MUTED,
            };
            Paragraph::new(keymap::hints(mode)).style(Style::default().fg(Color::Black).bg(bg))
        }
    };
    frame.render_widget(bar, area);
}
