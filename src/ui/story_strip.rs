// Story Strip
// Success stories carousel: sliding cards, arrows and page dots

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::ops::Range;
use std::time::Instant;

use super::helpers::{clip_span, DimmingContext};
use super::Styles;
use crate::carousel::ArrowState;
use crate::content::Story;
use crate::core::{App, Focus, HitRegions};
use crate::utilities::{truncate, wrap_text};

/// Render the stories section and record its clickable areas
pub fn render_story_strip(
    f: &mut Frame,
    app: &App,
    area: Rect,
    now: Instant,
    dimming: &DimmingContext,
    regions: &mut HitRegions,
) {
    let focused = app.focus == Focus::Stories;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(dimming.dim_style(if focused {
            Styles::border_focused()
        } else {
            Styles::border_unfocused()
        }))
        .title(Span::styled(
            " Success Stories ",
            dimming.dim_style(if focused {
                Styles::title_focused()
            } else {
                Styles::title_unfocused()
            }),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.stories.is_empty() {
        let empty = Paragraph::new("No stories yet")
            .style(dimming.dim_style(Styles::hint()))
            .alignment(Alignment::Center);
        f.render_widget(empty, inner);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let units_per_column = app.units_per_column();
    let arrow_columns =
        (app.config.carousel.container_padding / 2.0 / units_per_column).round() as u16;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(arrow_columns),
            Constraint::Min(0),
            Constraint::Length(arrow_columns),
        ])
        .split(rows[0]);

    let surface = app.carousel.surface();
    let (previous, next) = surface.arrows();

    regions.previous_arrow = columns[0];
    regions.next_arrow = columns[2];
    regions.strip = columns[1];

    render_arrow(f, columns[0], "◀", previous, dimming);
    render_arrow(f, columns[2], "▶", next, dimming);

    let offset = surface.offset_at(now);
    let card_width = app.carousel.state().card_width();
    let inner_width = surface.card_width();
    for (index, story) in app.stories.iter().enumerate() {
        let left = (index as f32 * card_width + offset) / units_per_column;
        let width = inner_width / units_per_column;
        render_card(f, columns[1], story, left.round() as i32, width.round() as i32, dimming);
    }

    let (first_dot, dots) =
        render_dots(f, rows[1], surface.dot_count(), surface.active_dot(), dimming);
    regions.first_dot = first_dot;
    regions.dots = dots;
}

fn render_arrow(f: &mut Frame, area: Rect, glyph: &str, state: ArrowState, dimming: &DimmingContext) {
    if area.height == 0 {
        return;
    }
    let middle = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    let arrow = Paragraph::new(glyph)
        .style(dimming.dim_style(Styles::arrow(state)))
        .alignment(Alignment::Center);
    f.render_widget(arrow, middle);
}

/// Draw one card whose left edge sits `left` columns into the strip;
/// parts outside the strip are cut off
fn render_card(
    f: &mut Frame,
    strip: Rect,
    story: &Story,
    left: i32,
    width: i32,
    dimming: &DimmingContext,
) {
    let Some((x, visible, cut)) = clip_span(left, width, i32::from(strip.width)) else {
        return;
    };

    let mut borders = Borders::TOP | Borders::BOTTOM;
    if cut == 0 {
        borders |= Borders::LEFT;
    }
    if i32::from(cut) + i32::from(visible) == width {
        borders |= Borders::RIGHT;
    }

    let text_width = (width - 2).max(1) as usize;
    let mut lines = vec![
        Line::from(Span::styled(
            truncate(&story.title, text_width),
            dimming.dim_style(Styles::card_title()),
        )),
        Line::from(Span::styled(
            truncate(&story.couple, text_width),
            dimming.dim_style(Styles::card_subtitle()),
        )),
        Line::default(),
    ];
    let quote = format!("“{}”", story.quote);
    lines.extend(
        wrap_text(&quote, text_width)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, dimming.dim_style(Styles::quote())))),
    );

    let card = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(borders)
                .border_type(BorderType::Rounded)
                .border_style(ratatui::style::Style::default().fg(dimming.border_color(false))),
        )
        .scroll((0, cut.saturating_sub(1)));

    let area = Rect {
        x: strip.x + x,
        y: strip.y,
        width: visible,
        height: strip.height,
    };
    f.render_widget(card, area);
}

/// Dots that fit in `capacity` slots, kept centered on `active` when they overflow
fn dot_window(count: usize, active: usize, capacity: usize) -> Range<usize> {
    let capacity = capacity.max(1);
    if count <= capacity {
        return 0..count;
    }
    let start = active.saturating_sub(capacity / 2).min(count - capacity);
    start..start + capacity
}

/// Centered row of page dots.
///
/// Returns the page of the first drawn dot and one click area per drawn dot.
fn render_dots(
    f: &mut Frame,
    area: Rect,
    count: usize,
    active: usize,
    dimming: &DimmingContext,
) -> (usize, Vec<Rect>) {
    if count == 0 || area.height == 0 {
        return (0, Vec::new());
    }

    // "● " per dot; a narrow row shows the window around the active page
    let window = dot_window(count, active, (usize::from(area.width) + 1) / 2);
    let shown = window.len();
    let row_width = (shown * 2 - 1) as u16;
    let start = area.x + area.width.saturating_sub(row_width) / 2;

    let mut spans = Vec::with_capacity(shown * 2);
    let mut rects = Vec::with_capacity(shown);
    for (slot, page) in window.clone().enumerate() {
        if slot > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled("●", dimming.dim_style(Styles::dot(page == active))));
        rects.push(Rect::new(start + (slot * 2) as u16, area.y, 1, 1));
    }

    let row = Rect {
        x: start,
        width: row_width.min(area.width),
        ..area
    };
    f.render_widget(Paragraph::new(Line::from(spans)), row);
    (window.start, rects)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_window_shows_all_when_they_fit() {
        assert_eq!(dot_window(6, 4, 10), 0..6);
        assert_eq!(dot_window(0, 0, 10), 0..0);
    }

    #[test]
    fn test_dot_window_follows_active_page() {
        assert_eq!(dot_window(20, 0, 5), 0..5);
        assert_eq!(dot_window(20, 10, 5), 8..13);
        assert_eq!(dot_window(20, 19, 5), 15..20);
        assert!(dot_window(20, 17, 4).contains(&17));
    }

    #[test]
    fn test_dot_window_never_empty_on_zero_capacity() {
        assert_eq!(dot_window(3, 2, 0), 2..3);
    }
}
