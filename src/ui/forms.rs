//! Incident report form and password checker rendering

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use crate::forms::{FormField, ReportForm};
use crate::pages;
use crate::password::{self, FeedbackStatus};
use crate::router::CheatSheetId;
use crate::theme::{
    strength_color, AMBER_WARNING, BG_SECONDARY, BORDER_SUBTLE, CYAN_PRIMARY, GREEN_SUCCESS,
    RED_ERROR, ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};

fn panel(title: &str, focused: bool) -> Block<'static> {
    let border = if focused { CYAN_PRIMARY } else { BORDER_SUBTLE };
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(CYAN_PRIMARY).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(BG_SECONDARY))
}

/// Lines for the form fields; `editing` puts a cursor on the focused field
pub fn form_lines(form: &ReportForm, editing: bool) -> Vec<Line<'static>> {
    if form.is_submitted() {
        return vec![
            Line::from(Span::styled(
                "✓ Report Submitted",
                Style::default().fg(GREEN_SUCCESS).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "The security team will contact you shortly.",
                Style::default().fg(TEXT_SECONDARY),
            )),
        ];
    }

    let mut lines = Vec::new();
    for field in FormField::ALL {
        let focused = form.focus == field;
        let label_style = if focused {
            Style::default().fg(CYAN_PRIMARY).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_MUTED)
        };
        let marker = if focused { "▸ " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}", field.label()),
            label_style,
        )));

        let value_line = if field.is_text() {
            let value = form.value(field);
            let cursor = if focused && editing { "█" } else { "" };
            if value.is_empty() && cursor.is_empty() {
                Line::from(Span::styled("    (empty)", Style::default().fg(TEXT_MUTED)))
            } else {
                Line::from(vec![
                    Span::styled(format!("    {value}"), Style::default().fg(TEXT_PRIMARY)),
                    Span::styled(cursor, Style::default().fg(CYAN_PRIMARY)),
                ])
            }
        } else {
            let choice = form
                .incident_type
                .map_or("Select incident type", |t| t.label());
            let color = if form.incident_type.is_some() {
                TEXT_PRIMARY
            } else {
                TEXT_MUTED
            };
            Line::from(vec![
                Span::styled("    ◀ ", Style::default().fg(TEXT_MUTED)),
                Span::styled(choice, Style::default().fg(color)),
                Span::styled(" ▶", Style::default().fg(TEXT_MUTED)),
            ])
        };
        lines.push(value_line);
        lines.push(Line::default());
    }
    lines
}

/// Render a report form inside its own panel
pub fn render_report_form(
    area: Rect,
    title: &str,
    form: &ReportForm,
    editing: bool,
    frame: &mut Frame,
) {
    let paragraph = Paragraph::new(form_lines(form, editing))
        .block(panel(title, editing))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// The incident report page: the form plus what to include
pub fn render_report_page(area: Rect, form: &ReportForm, editing: bool, frame: &mut Frame) {
    let [form_area, help_area] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(area);

    render_report_form(form_area, "Report a Security Incident", form, editing, frame);

    let help = vec![
        Line::from(Span::styled(
            "Report immediately if you:",
            Style::default().fg(AMBER_WARNING).add_modifier(Modifier::BOLD),
        )),
        Line::from("• Clicked a suspicious link"),
        Line::from("• Opened an unexpected attachment"),
        Line::from("• Shared credentials by mistake"),
        Line::from("• Lost a device with company data"),
        Line::default(),
        Line::from(Span::styled(
            "Enter: edit | Tab: next field | ◀ ▶: incident type",
            Style::default().fg(TEXT_MUTED),
        )),
    ];
    frame.render_widget(
        Paragraph::new(help)
            .block(panel("What to report", false))
            .wrap(Wrap { trim: true }),
        help_area,
    );
}

/// Password strength checker with the password guidelines below it
pub fn render_password_page(
    area: Rect,
    password: &str,
    reveal: bool,
    editing: bool,
    scroll: u16,
    frame: &mut Frame,
) {
    let [input_area, gauge_area, body_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(3),
    ])
    .areas(area);

    let shown = if reveal {
        password.to_string()
    } else {
        password::mask(password)
    };
    let cursor = if editing { "█" } else { "" };
    let input = Paragraph::new(Line::from(vec![
        Span::styled(shown, Style::default().fg(TEXT_PRIMARY)),
        Span::styled(cursor, Style::default().fg(CYAN_PRIMARY)),
    ]))
    .block(panel("Test a password (i: type, v: show/hide)", editing));
    frame.render_widget(input, input_area);

    let report = password::assess(password);
    let level = report.level();
    let gauge = Gauge::default()
        .block(panel("Strength", false))
        .gauge_style(Style::default().fg(strength_color(level)).bg(BG_SECONDARY))
        .percent(u16::from(report.score))
        .label(format!("{} ({}%)", level.label(), report.score));
    frame.render_widget(gauge, gauge_area);

    let [feedback_area, guide_area] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .areas(body_area);

    let feedback: Vec<Line> = report
        .feedback
        .iter()
        .map(|item| {
            let (icon, color) = match item.status {
                FeedbackStatus::Good => ("✓", GREEN_SUCCESS),
                FeedbackStatus::Warning => ("!", AMBER_WARNING),
                FeedbackStatus::Bad => ("✗", RED_ERROR),
            };
            Line::from(vec![
                Span::styled(format!("{icon} "), Style::default().fg(color)),
                Span::styled(item.text, Style::default().fg(TEXT_SECONDARY)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(feedback)
            .block(panel("Feedback", false))
            .wrap(Wrap { trim: true }),
        feedback_area,
    );

    let sheet = pages::cheat_sheet(CheatSheetId::Password);
    let mut guide = Vec::new();
    for section in sheet.sections {
        guide.push(Line::from(Span::styled(
            section.heading,
            Style::default().fg(CYAN_PRIMARY).add_modifier(Modifier::BOLD),
        )));
        for item in section.items {
            guide.push(Line::from(format!("• {item}")));
        }
        guide.push(Line::default());
    }
    frame.render_widget(
        Paragraph::new(guide)
            .block(panel("Password Guidelines", false))
            .wrap(Wrap { trim: true })
            .scroll((scroll, 0)),
        guide_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::IncidentType;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_form_lines_mark_focus_and_cursor() {
        let mut form = ReportForm::new();
        form.insert_char('A');
        let rendered = text(&form_lines(&form, true));
        assert!(rendered.contains("▸ Your Name"));
        assert!(rendered.contains("A█"));
        assert!(rendered.contains("Select incident type"));
    }

    #[test]
    fn test_form_lines_show_choice_and_confirmation() {
        let mut form = ReportForm::new();
        form.incident_type = Some(IncidentType::Phishing);
        assert!(text(&form_lines(&form, false)).contains(IncidentType::Phishing.label()));

        form.name = "Ada".into();
        form.department = "IT".into();
        form.description = "Odd email".into();
        form.submit().unwrap();
        assert!(text(&form_lines(&form, false)).contains("Report Submitted"));
    }
}
