// Auth Overlay View
// Log in / sign up panel with social provider buttons

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::helpers::{centered_rect, hex_color};
use super::Styles;
use crate::operations::{AuthOverlay, AuthTab, SOCIAL_PROVIDERS};

pub fn render_auth_overlay(f: &mut Frame, area: Rect, overlay: &AuthOverlay) {
    let dim = Paragraph::new("").style(Style::default().bg(hex_color(0x0A0A0A)));
    f.render_widget(dim, area);

    let panel = centered_rect(48, 18, area);
    f.render_widget(Clear, panel);

    let active = overlay.tab();
    let tabs = Line::from(vec![
        Span::styled(
            format!(" {} ", AuthTab::Login.label()),
            Styles::filter(active == AuthTab::Login),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" {} ", AuthTab::Signup.label()),
            Styles::filter(active == AuthTab::Signup),
        ),
    ])
    .centered();

    let fields: &[&str] = match active {
        AuthTab::Login => &["Email", "Password"],
        AuthTab::Signup => &["Name", "Email", "Password"],
    };

    let mut lines = vec![tabs, Line::default()];
    for field in fields {
        lines.push(Line::from(vec![
            Span::styled(format!("{field:<10}"), Styles::status()),
            Span::styled("________________________", Styles::timestamp()),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(format!(" {} ", active.label()), Styles::header_action())).centered());
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("or continue with", Styles::hint())).centered());
    let providers: Vec<Span> = SOCIAL_PROVIDERS
        .iter()
        .flat_map(|provider| [Span::styled(format!("[{provider}]"), Styles::card_subtitle()), Span::raw(" ")])
        .collect();
    lines.push(Line::from(providers).centered());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Styles::border_focused())
        .title(Span::styled(" Join HeartMatch ", Styles::title_focused()))
        .title_bottom(Line::from(" Tab: switch · Esc: close ").right_aligned())
        .style(Styles::panel());

    let body = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left);
    f.render_widget(body, panel);
}
