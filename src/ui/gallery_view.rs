// Gallery View
// Filter buttons and the grid of example profiles

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::helpers::DimmingContext;
use super::Styles;
use crate::content::Profile;
use crate::core::{App, Focus};
use crate::utilities::{truncate, wrap_text};

const COLUMNS: usize = 3;
const CARD_HEIGHT: u16 = 7;

/// Render the profiles section
pub fn render_gallery(f: &mut Frame, app: &App, area: Rect, dimming: &DimmingContext) {
    let focused = app.focus == Focus::Profiles;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(dimming.dim_style(if focused {
            Styles::border_focused()
        } else {
            Styles::border_unfocused()
        }))
        .title(Span::styled(
            " Meet Our Members ",
            dimming.dim_style(if focused {
                Styles::title_focused()
            } else {
                Styles::title_unfocused()
            }),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Filters
            Constraint::Min(0),    // Cards
            Constraint::Length(1), // Load more
        ])
        .split(inner);

    render_filters(f, app, rows[0], dimming);
    render_cards(f, app, rows[1], focused, dimming);

    if app.gallery.has_more() {
        let hint = Paragraph::new("[ m ] Load more profiles")
            .style(dimming.dim_style(Styles::hint()))
            .alignment(Alignment::Center);
        f.render_widget(hint, rows[2]);
    }
}

fn render_filters(f: &mut Frame, app: &App, area: Rect, dimming: &DimmingContext) {
    let active = app.gallery.active_filter_index();
    let mut spans = Vec::new();
    for (index, filter) in app.gallery.filters().iter().enumerate() {
        spans.push(Span::styled(
            format!(" {} ", capitalize(filter)),
            dimming.dim_style(Styles::filter(index == active)),
        ));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("(f: next filter)", dimming.dim_style(Styles::hint())));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_cards(f: &mut Frame, app: &App, area: Rect, focused: bool, dimming: &DimmingContext) {
    let visible = app.gallery.visible();
    if visible.is_empty() {
        let empty = Paragraph::new("No profiles match this filter")
            .style(dimming.dim_style(Styles::hint()))
            .alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    }

    // Scroll whole rows so the selection stays on screen
    let fitting_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let selected_row = app.gallery.selected_position() / COLUMNS;
    let first_row = (selected_row + 1).saturating_sub(fitting_rows);

    let card_width = area.width / COLUMNS as u16;
    for (position, &profile_index) in visible.iter().enumerate() {
        let row = position / COLUMNS;
        if row < first_row || row >= first_row + fitting_rows {
            continue;
        }
        let Some(profile) = app.gallery.profile(profile_index) else {
            continue;
        };

        let column = (position % COLUMNS) as u16;
        let card_area = Rect {
            x: area.x + column * card_width,
            y: area.y + (row - first_row) as u16 * CARD_HEIGHT,
            width: card_width,
            height: CARD_HEIGHT.min(area.height),
        };
        let selected = focused && position == app.gallery.selected_position();
        let card = ProfileCard {
            profile,
            liked: app.likes.is_liked(profile_index),
            floating_heart: app.likes.has_heart(profile_index),
            selected,
        };
        card.render(f, card_area, dimming);
    }
}

struct ProfileCard<'a> {
    profile: &'a Profile,
    liked: bool,
    floating_heart: bool,
    selected: bool,
}

impl ProfileCard<'_> {
    fn render(&self, f: &mut Frame, area: Rect, dimming: &DimmingContext) {
        let text_width = usize::from(area.width.saturating_sub(2)).max(1);
        let heart = if self.liked { "♥ Liked" } else { "♡ Like" };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    truncate(
                        &format!("{}, {}", self.profile.name, self.profile.age),
                        text_width.saturating_sub(2),
                    ),
                    dimming.dim_style(Styles::card_title()),
                ),
                Span::styled(
                    if self.floating_heart { " ❤" } else { "" },
                    dimming.dim_style(Styles::floating_heart()),
                ),
            ]),
            Line::from(Span::styled(
                truncate(&self.profile.location, text_width),
                dimming.dim_style(Styles::status()),
            )),
        ];
        lines.extend(
            wrap_text(&self.profile.bio, text_width)
                .into_iter()
                .take(2)
                .map(|line| Line::from(Span::styled(line, dimming.dim_style(Styles::card_subtitle())))),
        );
        lines.push(Line::from(vec![
            Span::styled(heart, dimming.dim_style(Styles::heart(self.liked))),
            Span::styled("  ⏎ Message", dimming.dim_style(Styles::hint())),
        ]));

        let border_style = Style::default().fg(dimming.border_color(self.selected));
        let border_type = if self.selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };
        let card = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style),
        );
        f.render_widget(card, area);
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("popular"), "Popular");
        assert_eq!(capitalize(""), "");
    }
}
