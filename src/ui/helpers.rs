// Helper utilities for the page views

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

/// Convert hex color to ratatui Color
pub fn hex_color(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Dimming context - tracks if a modal covers the page
#[derive(Debug, Clone, Copy)]
pub struct DimmingContext {
    pub modal_visible: bool,
}

impl DimmingContext {
    pub fn new(modal_visible: bool) -> Self {
        Self { modal_visible }
    }

    /// Apply dimming to a style based on modal state
    pub fn dim_style(&self, style: Style) -> Style {
        if self.modal_visible {
            style.fg(hex_color(0x444444))
        } else {
            style
        }
    }

    pub fn border_color(&self, is_active: bool) -> Color {
        if self.modal_visible {
            hex_color(0x222222)
        } else if is_active {
            hex_color(0xFF4D79)
        } else {
            hex_color(0x444444)
        }
    }
}

/// Rectangle of at most `width` x `height`, centered in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Horizontal span `[start, start + len)` clipped to `[0, limit)`.
///
/// Returns the visible start, the visible length and how many leading
/// columns were cut off.
pub fn clip_span(start: i32, len: i32, limit: i32) -> Option<(u16, u16, u16)> {
    let visible_start = start.max(0);
    let visible_end = (start + len).min(limit);
    if visible_end <= visible_start {
        return None;
    }
    Some((
        visible_start as u16,
        (visible_end - visible_start) as u16,
        (visible_start - start) as u16,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color(0xFF4D79), Color::Rgb(255, 77, 121));
    }

    #[test]
    fn test_centered_rect_fits_area() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(60, 20, area), Rect::new(20, 10, 60, 20));
        assert_eq!(centered_rect(200, 80, area), area);
    }

    #[test]
    fn test_clip_span() {
        assert_eq!(clip_span(5, 10, 100), Some((5, 10, 0)));
        assert_eq!(clip_span(-4, 10, 100), Some((0, 6, 4)));
        assert_eq!(clip_span(95, 10, 100), Some((95, 5, 0)));
        assert_eq!(clip_span(100, 10, 100), None);
        assert_eq!(clip_span(-10, 10, 100), None);
    }
}
