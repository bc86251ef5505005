//! Step tracker rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::flow::LessonSession;
use crate::models::StepState;
use crate::theme::{
    get_pulse_color, BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, CYAN_DIM, CYAN_PRIMARY,
    GREEN_ACTIVE, GREEN_SUCCESS, ROUNDED_BORDERS, TEXT_MUTED, TEXT_SECONDARY,
};
use crate::text::truncate;

const CARD_HEIGHT: u16 = 3;
const ACTIVE_CARD_HEIGHT: u16 = 5;

fn card_height(state: StepState) -> u16 {
    if state == StepState::Active {
        ACTIVE_CARD_HEIGHT
    } else {
        CARD_HEIGHT
    }
}

/// Render a single step card
///
/// Completed and pending cards are 3 lines tall; the active card is 5 lines
/// (title, module progress bar, step count).
#[allow(clippy::too_many_arguments)]
pub fn render_step_card(
    area: Rect,
    ordinal: usize,
    step_title: &str,
    state: StepState,
    tick: u64,
    progress_percent: u16,
    step_count: usize,
    answered: bool,
    frame: &mut Frame,
) {
    let (indicator, indicator_color, text_color, bg_color) = match state {
        StepState::Completed => ("●", GREEN_SUCCESS, CYAN_PRIMARY, BG_SECONDARY),
        StepState::Active => {
            let pulse_color = get_pulse_color(tick, GREEN_ACTIVE, CYAN_DIM);
            ("●", pulse_color, CYAN_PRIMARY, BG_TERTIARY)
        }
        StepState::Pending => ("○", TEXT_MUTED, TEXT_SECONDARY, BG_SECONDARY),
    };
    let border_color = if state == StepState::Active {
        CYAN_PRIMARY
    } else {
        BORDER_SUBTLE
    };

    let card_block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(bg_color));

    let marker = if answered { " ✓" } else { "" };
    let prefix = format!("{indicator} {ordinal:>2} ");
    let inner_width = area.width.saturating_sub(4) as usize;
    let available = inner_width.saturating_sub(prefix.chars().count() + marker.chars().count());

    let title_line = Line::from(vec![
        Span::styled(format!("{indicator} "), Style::default().fg(indicator_color)),
        Span::styled(
            format!("{ordinal:>2} "),
            Style::default().fg(text_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(truncate(step_title, available), Style::default().fg(text_color)),
        Span::styled(marker, Style::default().fg(GREEN_SUCCESS)),
    ]);

    if state == StepState::Active {
        let inner_area = card_block.inner(area);
        frame.render_widget(card_block, area);

        let [title_area, gauge_area, percent_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner_area);

        frame.render_widget(Paragraph::new(title_line), title_area);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(CYAN_PRIMARY).bg(BG_SECONDARY))
            .percent(progress_percent)
            .label("");
        frame.render_widget(gauge, gauge_area);

        let step_text = format!("Step {ordinal}/{step_count} ({progress_percent}%)");
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                step_text,
                Style::default().fg(TEXT_MUTED),
            ))),
            percent_area,
        );
    } else {
        frame.render_widget(Paragraph::new(title_line).block(card_block), area);
    }
}

/// First card to draw so the active step stays on screen
fn first_visible(states: &[StepState], active: usize, height: u16) -> usize {
    let mut used = card_height(StepState::Active);
    let mut first = active;
    while first > 0 {
        let next = used + card_height(states[first - 1]);
        if next > height {
            break;
        }
        used = next;
        first -= 1;
    }
    // Pending cards after the active one need room too
    let after: u16 = states[active + 1..]
        .iter()
        .map(|s| card_height(*s))
        .sum();
    while first < active && used + after > height {
        used -= card_height(states[first]);
        first += 1;
    }
    first
}

/// Render the stack of step cards for a lesson module
pub fn render_step_tracker(area: Rect, session: &LessonSession, tick: u64, frame: &mut Frame) {
    let progress = session.progress();
    let sequence = session.sequence();
    let current = sequence.current_ordinal();
    let percent = sequence.progress_percent();

    let states: Vec<StepState> = sequence
        .steps()
        .iter()
        .map(|step| StepState::for_ordinal(step.ordinal, current))
        .collect();

    let first = first_visible(&states, current - 1, area.height);
    let mut y = area.y;
    for (step, state) in sequence.steps().iter().zip(&states).skip(first) {
        let height = card_height(*state);
        if y + height > area.y + area.height {
            break;
        }
        let card_area = Rect::new(area.x, y, area.width, height);
        render_step_card(
            card_area,
            step.ordinal,
            &step.title,
            *state,
            tick,
            percent,
            progress.step_count,
            progress.answered_steps.contains(&step.ordinal),
            frame,
        );
        y += height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_cards_fit_from_the_top() {
        let states = [StepState::Active, StepState::Pending, StepState::Pending];
        assert_eq!(first_visible(&states, 0, 40), 0);
    }

    #[test]
    fn test_tracker_scrolls_to_active_step() {
        let mut states = vec![StepState::Completed; 9];
        states.push(StepState::Active);
        // 5 lines for the active card plus two completed cards
        assert_eq!(first_visible(&states, 9, 11), 7);
    }

    #[test]
    fn test_tracker_leaves_room_for_pending_steps() {
        let states = [
            StepState::Completed,
            StepState::Completed,
            StepState::Active,
            StepState::Pending,
        ];
        // 14 lines: two completed cards fit, but then the pending one would not
        assert_eq!(first_visible(&states, 2, 14), 0);
        assert_eq!(first_visible(&states, 2, 11), 1);
    }
}
