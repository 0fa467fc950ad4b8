// Application View
// Main page layout and rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Instant;

use super::auth_view::render_auth_overlay;
use super::chat_view::{render_chat_modal, render_chatbot};
use super::gallery_view::render_gallery;
use super::helpers::DimmingContext;
use super::story_strip::render_story_strip;
use super::Styles;
use crate::core::{App, HitRegions};

const STORIES_HEIGHT: u16 = 14;

/// Render the entire page; returns the clickable areas drawn this frame
pub fn render_app(f: &mut Frame, app: &App, now: Instant) -> HitRegions {
    let mut regions = HitRegions::default();
    let dimming = DimmingContext::new(app.auth.is_visible() || app.chat.is_some());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),              // Header
            Constraint::Length(STORIES_HEIGHT), // Stories
            Constraint::Min(0),                 // Profiles
            Constraint::Length(3),              // Footer
        ])
        .split(f.area());

    render_header(f, app, chunks[0], &dimming);
    render_story_strip(f, app, chunks[1], now, &dimming, &mut regions);
    render_gallery(f, app, chunks[2], &dimming);
    render_footer(f, app, chunks[3], &dimming);

    // The toggle sits on the footer's top border, the panel above it
    let chatbot_area = Rect {
        height: f.area().height.saturating_sub(chunks[3].height) + 1,
        ..f.area()
    };
    let (toggle, panel) = render_chatbot(f, chatbot_area, &app.chatbot);
    regions.chatbot_toggle = toggle;
    regions.chatbot_panel = panel;

    if let Some(chat) = &app.chat {
        render_chat_modal(f, f.area(), chat);
    }
    if app.auth.is_visible() {
        render_auth_overlay(f, f.area(), &app.auth);
    }

    regions
}

/// Render the header bar
fn render_header(f: &mut Frame, app: &App, area: Rect, dimming: &DimmingContext) {
    let liked = app.likes.liked_count();
    let mut spans = vec![
        Span::styled(format!("♥ {}", app.config.application.title), dimming.dim_style(Styles::header())),
        Span::raw("   "),
        Span::styled(" g: Get Started ", dimming.dim_style(Styles::header_action())),
    ];
    if liked > 0 {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(format!("♥ {liked} liked"), dimming.dim_style(Styles::heart(true))));
    }

    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).border_style(dimming.dim_style(Styles::border_unfocused())));
    f.render_widget(header, area);
}

/// Render the footer bar: key bindings on the left, status text on the right
fn render_footer(f: &mut Frame, app: &App, area: Rect, dimming: &DimmingContext) {
    let help_text = app
        .config
        .application
        .bindings
        .iter()
        .map(|b| format!("{}: {}", b.key, b.description))
        .collect::<Vec<_>>()
        .join(" | ");

    let block = Block::default().borders(Borders::ALL).border_style(dimming.dim_style(Styles::border_unfocused()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(app.status_text.chars().count() as u16 + 1)])
        .split(inner);

    f.render_widget(
        Paragraph::new(help_text).style(dimming.dim_style(Styles::footer())),
        columns[0],
    );
    f.render_widget(
        Paragraph::new(app.status_text.as_str()).style(dimming.dim_style(Styles::status())),
        columns[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::content::Content;
    use crate::core::{AppEvent, ClickTarget};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &mut App, now: Instant) -> String {
        let mut terminal = Terminal::new(TestBackend::new(130, 45)).unwrap();
        let mut regions = HitRegions::default();
        terminal
            .draw(|f| regions = render_app(f, app, now))
            .unwrap();
        app.regions = regions;

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app(now: Instant) -> App {
        App::new(AppConfig::default(), Content::builtin().unwrap(), 130, now)
    }

    #[test]
    fn test_renders_page_sections() {
        let now = Instant::now();
        let mut app = app(now);
        let screen = draw(&mut app, now);

        assert!(screen.contains("Success Stories"));
        assert!(screen.contains("Meet Our Members"));
        assert!(screen.contains(&app.stories[0].title));
        assert!(screen.contains("Load more"));
    }

    #[test]
    fn test_records_one_dot_per_page() {
        let now = Instant::now();
        let mut app = app(now);
        draw(&mut app, now);

        assert_eq!(app.regions.dots.len(), app.carousel.state().page_count());
        assert!(app.regions.strip.width > 0);
        assert!(app.regions.chatbot_panel.is_none());
    }

    #[test]
    fn test_clicking_recorded_dot_moves_carousel() {
        let now = Instant::now();
        let mut app = app(now);
        draw(&mut app, now);

        let dot = app.regions.dots[2];
        let target = app.regions.target_at(dot.x, dot.y, app.units_per_column());
        assert_eq!(target, ClickTarget::Dot(2));
        app.handle(AppEvent::Click(target), now);
        assert_eq!(app.carousel.current_index(), 2);
    }

    #[test]
    fn test_overlays_render() {
        let now = Instant::now();
        let mut app = app(now);
        app.handle(AppEvent::ToggleChatbot, now);
        let screen = draw(&mut app, now);
        assert!(screen.contains("HeartMatch Assistant"));
        assert!(app.regions.chatbot_panel.is_some());

        app.handle(AppEvent::Back, now);
        app.handle(AppEvent::GetStarted, now);
        let screen = draw(&mut app, now);
        assert!(screen.contains("Join HeartMatch"));
    }
}
