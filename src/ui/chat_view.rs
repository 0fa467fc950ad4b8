// Chat Views
// Profile chat modal and the support chatbot panel

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::helpers::{centered_rect, hex_color};
use super::Styles;
use crate::operations::{Author, BotEntry, ChatSession, Chatbot};
use crate::utilities::{wrap_text, InputLine};

const PANEL_WIDTH: u16 = 44;
const PANEL_HEIGHT: u16 = 20;
const TOGGLE_LABEL: &str = " 💬 Help ";

/// Render the chat modal centered over the page
pub fn render_chat_modal(f: &mut Frame, area: Rect, chat: &ChatSession) {
    let dim = Paragraph::new("").style(ratatui::style::Style::default().bg(hex_color(0x0A0A0A)));
    f.render_widget(dim, area);

    let modal = centered_rect(60, 18, area);
    f.render_widget(Clear, modal);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Styles::border_focused())
        .title(Span::styled(format!(" {} ", chat.title()), Styles::title_focused()))
        .title_bottom(Line::from(" Enter: send · Esc: close ").right_aligned())
        .style(Styles::panel());
    let inner = block.inner(modal);
    f.render_widget(block, modal);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(inner);

    if chat.show_placeholder() {
        let placeholder = Paragraph::new(format!("Say hello to {}!", chat.profile_name()))
            .style(Styles::hint())
            .alignment(Alignment::Center);
        f.render_widget(placeholder, rows[0]);
    } else {
        let width = usize::from(rows[0].width.saturating_sub(2)).max(1);
        let mut lines = Vec::new();
        for message in chat.messages() {
            for line in wrap_text(&message.text, width) {
                lines.push(Line::from(Span::styled(line, Styles::bubble_user())).right_aligned());
            }
            lines.push(Line::from(Span::styled(message.time_label(), Styles::timestamp())).right_aligned());
        }
        render_tail(f, rows[0], lines);
    }

    render_input(f, rows[1], &chat.input, "Type a message...");
}

/// Render the chatbot toggle, and the panel when open.
///
/// Returns the toggle area and, when open, the panel area.
pub fn render_chatbot(f: &mut Frame, area: Rect, chatbot: &Chatbot) -> (Rect, Option<Rect>) {
    let toggle_width = TOGGLE_LABEL.chars().count() as u16 + 3;
    let toggle = Rect {
        x: area.x + area.width.saturating_sub(toggle_width + 1),
        y: area.y + area.height.saturating_sub(1),
        width: toggle_width.min(area.width),
        height: 1.min(area.height),
    };
    let mut spans = vec![Span::styled(TOGGLE_LABEL, Styles::header_action())];
    if chatbot.has_unread_badge() {
        spans.push(Span::styled(" 1 ", Styles::badge()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), toggle);

    if !chatbot.is_open() {
        return (toggle, None);
    }

    let width = PANEL_WIDTH.min(area.width);
    let height = PANEL_HEIGHT.min(area.height.saturating_sub(1));
    let panel = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: toggle.y.saturating_sub(height),
        width,
        height,
    };
    render_chatbot_panel(f, panel, chatbot);
    (toggle, Some(panel))
}

fn render_chatbot_panel(f: &mut Frame, panel: Rect, chatbot: &Chatbot) {
    f.render_widget(Clear, panel);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Styles::border_focused())
        .title(Span::styled(" HeartMatch Assistant ", Styles::title_focused()))
        .style(Styles::panel());
    let inner = block.inner(panel);
    f.render_widget(block, panel);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(inner);

    let width = usize::from(rows[0].width.saturating_sub(2)).max(1);
    // Only the latest set of suggestions is selectable
    let latest = chatbot
        .entries()
        .iter()
        .rposition(|entry| matches!(entry, BotEntry::Suggestions(_)));
    let mut lines = Vec::new();
    for (position, entry) in chatbot.entries().iter().enumerate() {
        match entry {
            BotEntry::Message { author, text, .. } => {
                let style = match author {
                    Author::User => Styles::bubble_user(),
                    Author::Bot => Styles::bubble_bot(),
                };
                for line in wrap_text(text, width) {
                    let line = Line::from(Span::styled(line, style));
                    lines.push(match author {
                        Author::User => line.right_aligned(),
                        Author::Bot => line,
                    });
                }
                lines.push(Line::default());
            }
            BotEntry::Suggestions(actions) => {
                let selectable = latest == Some(position);
                for (index, action) in actions.iter().enumerate() {
                    let selected = selectable && index == chatbot.selected_suggestion();
                    lines.push(Line::from(Span::styled(
                        format!("› {action}"),
                        Styles::suggestion(selected),
                    )));
                }
                lines.push(Line::default());
            }
        }
    }
    if chatbot.is_typing() {
        lines.push(Line::from(Span::styled("Assistant is typing…", Styles::typing())));
    }
    render_tail(f, rows[0], lines);

    render_input(f, rows[1], &chatbot.input, "Ask me anything...");
}

/// Show the last lines that fit, so the newest message stays visible
fn render_tail(f: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let skip = lines.len().saturating_sub(usize::from(area.height));
    let visible: Vec<Line> = lines.into_iter().skip(skip).collect();
    f.render_widget(Paragraph::new(visible), area);
}

fn render_input(f: &mut Frame, area: Rect, input: &InputLine, placeholder: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border_unfocused());
    let inner = block.inner(area);

    let content = if input.value().is_empty() {
        Paragraph::new(Span::styled(placeholder.to_string(), Styles::hint()))
    } else {
        // Keep the cursor in view on long input
        let scroll = input.cursor().saturating_sub(usize::from(inner.width.saturating_sub(1)));
        Paragraph::new(input.value().to_string()).scroll((0, scroll as u16))
    };
    f.render_widget(content.block(block), area);

    let visible_cursor = input.cursor().min(usize::from(inner.width.saturating_sub(1)));
    f.set_cursor_position((inner.x + visible_cursor as u16, inner.y));
}
