//! Theme module for the SecureGuard portal
//!
//! Centralized color palette and styling constants: a dark slate
//! background with teal accents, matching the portal's web branding.

use ratatui::style::Color;
use ratatui::symbols::border;

use crate::models::Severity;
use crate::password::StrengthLevel;

// ============================================================================
// Background Colors - Slate Palette
// ============================================================================

/// Primary background color - slate 950 (#020617)
pub const BG_PRIMARY: Color = Color::Rgb(2, 6, 23);

/// Secondary background color - slate 900 (#0f172a)
pub const BG_SECONDARY: Color = Color::Rgb(15, 23, 42);

/// Tertiary background color - for highlighted areas, slate 800 (#1e293b)
pub const BG_TERTIARY: Color = Color::Rgb(30, 41, 59);

/// Subtle border color - slate 700 (#334155)
pub const BORDER_SUBTLE: Color = Color::Rgb(51, 65, 85);

/// Rounded corners for cards and panels
pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

// ============================================================================
// Accent Colors - Teal Primary
// ============================================================================

/// Primary teal accent color (#14b8a6)
pub const CYAN_PRIMARY: Color = Color::Rgb(20, 184, 166);

/// Dimmed teal for secondary elements (#0f766e)
pub const CYAN_DIM: Color = Color::Rgb(15, 118, 110);

// ============================================================================
// Status Colors
// ============================================================================

/// Green success color (#4ade80)
pub const GREEN_SUCCESS: Color = Color::Rgb(74, 222, 128);

/// Green active indicator (#22c55e)
pub const GREEN_ACTIVE: Color = Color::Rgb(34, 197, 94);

/// Amber warning color (#fbbf24)
pub const AMBER_WARNING: Color = Color::Rgb(251, 191, 36);

/// Orange for high severity (#fb923c)
pub const ORANGE_HIGH: Color = Color::Rgb(251, 146, 60);

/// Red error color (#f87171)
pub const RED_ERROR: Color = Color::Rgb(248, 113, 113);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - bright white (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color - muted gray (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Muted text color - for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

// ============================================================================
// Helpers
// ============================================================================

/// Ticks spent on each half of a pulse
const PULSE_PERIOD: u64 = 5;

/// Alternate between two colors as the animation tick advances
pub fn get_pulse_color(tick: u64, primary: Color, secondary: Color) -> Color {
    if (tick / PULSE_PERIOD) % 2 == 0 {
        primary
    } else {
        secondary
    }
}

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Critical => RED_ERROR,
        Severity::High => ORANGE_HIGH,
        Severity::Medium => AMBER_WARNING,
        Severity::Low => CYAN_PRIMARY,
    }
}

pub fn strength_color(level: StrengthLevel) -> Color {
    match level {
        StrengthLevel::Strong => GREEN_SUCCESS,
        StrengthLevel::Moderate => AMBER_WARNING,
        StrengthLevel::Weak => ORANGE_HIGH,
        StrengthLevel::VeryWeak => RED_ERROR,
    }
}
