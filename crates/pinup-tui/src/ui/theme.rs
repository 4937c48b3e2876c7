// Centralized theme - all colors and shared styles live here.

use ratatui::style::{Color, Modifier, Style};

/// App background - pure black for contrast
pub const BG_APP: Color = Color::Rgb(0, 0, 0);

/// Card background - subtle lift from black
pub const BG_CARD: Color = Color::Rgb(18, 18, 18);

/// Primary text - off-white for readability
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);

/// Secondary/muted text
pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);

/// Dimmed text for hints, footers
pub const TEXT_DIM: Color = Color::Rgb(90, 90, 90);

/// Brand pink (#ff55aa) - titles, selection, score highlights
pub const ACCENT_PRIMARY: Color = Color::Rgb(255, 85, 170);

/// Darker brand pink (#872958) - the "Censor" state of the reveal toggle
pub const ACCENT_DEEP: Color = Color::Rgb(135, 41, 88);

/// External links
pub const ACCENT_LINK: Color = Color::Rgb(96, 165, 250);

/// Errors and the pending-quit warning
pub const ACCENT_ERROR: Color = Color::Rgb(244, 112, 112);

/// Inactive card border
pub const BORDER_INACTIVE: Color = Color::Rgb(60, 60, 60);

pub fn title_style() -> Style {
    Style::default()
        .fg(ACCENT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn primary() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}
