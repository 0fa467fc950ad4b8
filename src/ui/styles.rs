// UI Styles
// Color scheme and styling for the page

use ratatui::style::{Color, Modifier, Style};

use super::helpers::hex_color;
use crate::carousel::ArrowState;

const BRAND: u32 = 0xFF4D79;
const MUTED: u32 = 0x777777;
const PANEL_BG: u32 = 0x141420;

/// Application color scheme and styles
pub struct Styles;

impl Styles {
    // === Header / Footer ===

    pub fn header() -> Style {
        Style::default()
            .fg(hex_color(BRAND))
            .add_modifier(Modifier::BOLD)
    }

    pub fn header_action() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(hex_color(BRAND))
            .add_modifier(Modifier::BOLD)
    }

    pub fn footer() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn status() -> Style {
        Style::default().fg(hex_color(MUTED))
    }

    // === Story Strip ===

    pub fn card_title() -> Style {
        Style::default()
            .fg(hex_color(BRAND))
            .add_modifier(Modifier::BOLD)
    }

    pub fn card_subtitle() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn quote() -> Style {
        Style::default()
            .fg(hex_color(0xBBBBBB))
            .add_modifier(Modifier::ITALIC)
    }

    /// Arrow color follows its opacity: full brand color, or half-faded
    pub fn arrow(state: ArrowState) -> Style {
        if state.opacity >= 1.0 {
            Style::default()
                .fg(hex_color(BRAND))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(hex_color(0x553344))
        }
    }

    pub fn dot(active: bool) -> Style {
        if active {
            Style::default().fg(hex_color(BRAND))
        } else {
            Style::default().fg(hex_color(0x444444))
        }
    }

    // === Gallery ===

    pub fn filter(active: bool) -> Style {
        if active {
            Style::default()
                .fg(Color::White)
                .bg(hex_color(BRAND))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(hex_color(MUTED))
        }
    }

    pub fn heart(liked: bool) -> Style {
        if liked {
            Style::default().fg(hex_color(BRAND))
        } else {
            Style::default().fg(hex_color(MUTED))
        }
    }

    pub fn floating_heart() -> Style {
        Style::default()
            .fg(hex_color(0xFF2255))
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint() -> Style {
        Style::default()
            .fg(hex_color(MUTED))
            .add_modifier(Modifier::ITALIC)
    }

    // === Chat ===

    pub fn panel() -> Style {
        Style::default().bg(hex_color(PANEL_BG))
    }

    pub fn bubble_user() -> Style {
        Style::default().fg(Color::White).bg(hex_color(0x5A1F33))
    }

    pub fn bubble_bot() -> Style {
        Style::default().fg(Color::White).bg(hex_color(0x26263A))
    }

    pub fn timestamp() -> Style {
        Style::default().fg(hex_color(0x555555))
    }

    pub fn typing() -> Style {
        Style::default()
            .fg(hex_color(MUTED))
            .add_modifier(Modifier::ITALIC)
    }

    pub fn suggestion(selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(hex_color(BRAND))
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(hex_color(BRAND))
        }
    }

    pub fn badge() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD)
    }

    // === Border Styles ===

    pub fn border_focused() -> Style {
        Style::default().fg(hex_color(BRAND))
    }

    pub fn border_unfocused() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn title_focused() -> Style {
        Style::default()
            .fg(hex_color(BRAND))
            .add_modifier(Modifier::BOLD)
    }

    pub fn title_unfocused() -> Style {
        Style::default().fg(Color::Gray)
    }
}
