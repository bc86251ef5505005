//! Read-only pages: static content, the training catalog and cheat sheets

use std::collections::BTreeSet;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::models::{Catalog, ModuleId, ModuleKind};
use crate::pages::{CheatSheet, Section, StaticPage};
use crate::theme::{
    BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, CYAN_PRIMARY, GREEN_SUCCESS, ROUNDED_BORDERS,
    TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::stats::{render_stat_cards, StatCard};

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(CYAN_PRIMARY).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY))
}

fn section_lines(sections: &[Section], lines: &mut Vec<Line<'static>>) {
    for section in sections {
        lines.push(Line::from(Span::styled(
            section.heading,
            Style::default().fg(CYAN_PRIMARY).add_modifier(Modifier::BOLD),
        )));
        for item in section.items {
            lines.push(Line::from(vec![
                Span::styled("• ", Style::default().fg(CYAN_PRIMARY)),
                Span::styled(*item, Style::default().fg(TEXT_SECONDARY)),
            ]));
        }
        lines.push(Line::default());
    }
}

/// Render a page built from static content with a selectable link list
pub fn render_static_page(
    area: Rect,
    title: &str,
    page: &StaticPage,
    cursor: usize,
    scroll: u16,
    frame: &mut Frame,
) {
    let mut lines = Vec::new();
    for (index, text) in page.summary.iter().enumerate() {
        let style = if index == 0 {
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_SECONDARY)
        };
        lines.push(Line::from(Span::styled(*text, style)));
        lines.push(Line::default());
    }
    section_lines(page.sections, &mut lines);

    if page.links.is_empty() {
        frame.render_widget(
            Paragraph::new(lines)
                .block(panel(title))
                .wrap(Wrap { trim: true })
                .scroll((scroll, 0)),
            area,
        );
        return;
    }

    let link_height = page.links.len() as u16 + 2;
    let [body_area, links_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(link_height)]).areas(area);

    frame.render_widget(
        Paragraph::new(lines)
            .block(panel(title))
            .wrap(Wrap { trim: true })
            .scroll((scroll, 0)),
        body_area,
    );

    let items: Vec<ListItem> = page
        .links
        .iter()
        .map(|(label, _)| ListItem::new(Span::styled(*label, Style::default().fg(TEXT_PRIMARY))))
        .collect();
    let links = List::new(items)
        .block(panel("Go to (↑↓, Enter)"))
        .highlight_style(
            Style::default()
                .fg(CYAN_PRIMARY)
                .bg(BG_TERTIARY)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");
    let mut state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(links, links_area, &mut state);
}

/// Render the catalog of training modules
pub fn render_training(
    area: Rect,
    catalog: &Catalog,
    completed: &BTreeSet<ModuleId>,
    cursor: usize,
    frame: &mut Frame,
) {
    let [cards_area, list_area] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(3)]).areas(area);

    let total = catalog.modules.len();
    let done = catalog
        .modules
        .iter()
        .filter(|m| completed.contains(&m.id))
        .count();
    let percent = if total > 0 { done * 100 / total } else { 0 };
    let percent_color = if done == total && total > 0 {
        GREEN_SUCCESS
    } else {
        CYAN_PRIMARY
    };
    render_stat_cards(
        cards_area,
        &[
            StatCard::new(format!("{done}/{total}"), "BADGES EARNED", CYAN_PRIMARY),
            StatCard::new(format!("{percent}%"), "PROGRESS", percent_color),
        ],
        frame,
    );

    let items: Vec<ListItem> = catalog
        .modules
        .iter()
        .map(|module| {
            let badge = if completed.contains(&module.id) {
                Span::styled("★ ", Style::default().fg(GREEN_SUCCESS))
            } else {
                Span::styled("○ ", Style::default().fg(TEXT_MUTED))
            };
            let units = match &module.kind {
                ModuleKind::Lessons { .. } => format!("{} lessons", module.unit_count()),
                ModuleKind::Checklist { .. } => format!("{} actions", module.unit_count()),
            };
            let mut meta = units;
            if !module.duration.is_empty() {
                meta = format!("{meta} | {}", module.duration);
            }
            ListItem::new(vec![
                Line::from(vec![
                    badge,
                    Span::styled(
                        module.title.clone(),
                        Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("  {meta}"), Style::default().fg(TEXT_MUTED)),
                ]),
                Line::from(Span::styled(
                    format!("  {}", module.summary),
                    Style::default().fg(TEXT_SECONDARY),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(panel("Training Modules (Enter to start)"))
        .highlight_style(Style::default().bg(BG_TERTIARY))
        .highlight_symbol("▸ ");
    let mut state = ListState::default().with_selected((total > 0).then_some(cursor));
    frame.render_stateful_widget(list, list_area, &mut state);
}

/// Render a cheat sheet; scrolls with the navigator
pub fn render_cheat_sheet(area: Rect, sheet: &CheatSheet, scroll: u16, frame: &mut Frame) {
    let mut lines = vec![
        Line::from(Span::styled(
            sheet.subtitle,
            Style::default().fg(TEXT_SECONDARY),
        )),
        Line::default(),
    ];
    section_lines(sheet.sections, &mut lines);
    lines.push(Line::from(Span::styled(
        sheet.footer,
        Style::default().fg(TEXT_MUTED).add_modifier(Modifier::ITALIC),
    )));

    let block = panel(sheet.title).title_bottom(Line::from(Span::styled(
        " ↑↓/PgUp/PgDn: scroll | secureguard --print <sheet> for plain text | Esc: back ",
        Style::default().fg(TEXT_MUTED),
    )));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .scroll((scroll, 0)),
        area,
    );
}
