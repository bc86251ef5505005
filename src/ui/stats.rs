//! Stat card rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::theme::{BG_SECONDARY, BORDER_SUBTLE, ROUNDED_BORDERS, TEXT_MUTED};

/// One figure shown in a stat card row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard<'a> {
    pub value: String,
    pub label: &'a str,
    pub color: Color,
}

impl<'a> StatCard<'a> {
    pub fn new(value: impl Into<String>, label: &'a str, color: Color) -> Self {
        Self {
            value: value.into(),
            label,
            color,
        }
    }
}

/// Render a row of equally sized stat cards in a given area
pub fn render_stat_cards(area: Rect, cards: &[StatCard], frame: &mut Frame) {
    if cards.is_empty() {
        return;
    }
    let count = cards.len() as u32;
    let card_layout = Layout::horizontal(cards.iter().map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for (card, card_area) in cards.iter().zip(card_layout.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDERS)
            .border_style(Style::default().fg(BORDER_SUBTLE))
            .style(Style::default().bg(BG_SECONDARY));

        let content = vec![
            Line::from(Span::styled(
                card.value.clone(),
                Style::default().fg(card.color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(card.label, Style::default().fg(TEXT_MUTED))),
        ];

        let paragraph = Paragraph::new(content)
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, *card_area);
    }
}
