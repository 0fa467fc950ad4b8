// Event Handling
// Application event types and the crossterm → AppEvent translation

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

/// How key presses are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Page navigation; letters are shortcuts
    Navigation,
    /// A chat input has focus; letters are typed
    TextEntry,
    /// The auth overlay is showing
    Overlay,
}

/// Clickable element under the mouse
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickTarget {
    PreviousArrow,
    NextArrow,
    Dot(usize),
    /// Press inside the strip, at x in width units
    Strip(f32),
    ChatbotToggle,
    ChatbotPanel,
    Elsewhere,
}

/// Screen areas recorded during the last draw, used for mouse hit testing
#[derive(Debug, Clone, Default)]
pub struct HitRegions {
    pub strip: Rect,
    pub previous_arrow: Rect,
    pub next_arrow: Rect,
    /// Page of the first recorded dot when the row shows a window of them
    pub first_dot: usize,
    pub dots: Vec<Rect>,
    pub chatbot_toggle: Rect,
    pub chatbot_panel: Option<Rect>,
}

fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

impl HitRegions {
    pub fn target_at(&self, column: u16, row: u16, units_per_column: f32) -> ClickTarget {
        if self.chatbot_panel.is_some_and(|panel| hit(panel, column, row)) {
            return ClickTarget::ChatbotPanel;
        }
        if hit(self.chatbot_toggle, column, row) {
            return ClickTarget::ChatbotToggle;
        }
        if hit(self.previous_arrow, column, row) {
            return ClickTarget::PreviousArrow;
        }
        if hit(self.next_arrow, column, row) {
            return ClickTarget::NextArrow;
        }
        if let Some(index) = self.dots.iter().position(|dot| hit(*dot, column, row)) {
            return ClickTarget::Dot(self.first_dot + index);
        }
        if hit(self.strip, column, row) {
            return ClickTarget::Strip(column as f32 * units_per_column);
        }
        ClickTarget::Elsewhere
    }
}

/// Application events that can be handled
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Close the topmost overlay
    Back,

    /// Move focus between the stories and the profiles
    CycleFocus,

    ToggleChatbot,
    GetStarted,

    /// Previous story page or profile
    Previous,
    /// Next story page or profile
    Next,
    First,
    Last,
    GoToPage(usize),

    NextFilter,
    LoadMore,
    ToggleLike,
    /// Open a chat with the selected profile
    Activate,

    // Text entry
    Input(char),
    Backspace,
    CursorLeft,
    CursorRight,
    Submit,
    SuggestionUp,
    SuggestionDown,

    SwitchAuthTab,

    // Pointer, x in width units
    Click(ClickTarget),
    DragMove(f32),
    DragEnd(f32),

    /// Terminal resized to the given columns and rows
    Resize(u16, u16),

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(
        event: Event,
        mode: InputMode,
        regions: &HitRegions,
        units_per_column: f32,
    ) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key, mode),
            Event::Mouse(mouse) => Self::handle_mouse(mouse, regions, units_per_column),
            Event::Resize(columns, rows) => AppEvent::Resize(columns, rows),
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent, mode: InputMode) -> AppEvent {
        // Only handle key press events
        if key.kind != KeyEventKind::Press {
            return AppEvent::None;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppEvent::Quit;
        }

        match mode {
            InputMode::Navigation => Self::navigation_key(key),
            InputMode::TextEntry => Self::text_key(key),
            InputMode::Overlay => Self::overlay_key(key),
        }
    }

    fn navigation_key(key: KeyEvent) -> AppEvent {
        match key.code {
            KeyCode::Char('q') => AppEvent::Quit,
            KeyCode::Esc => AppEvent::Back,
            KeyCode::Tab => AppEvent::CycleFocus,

            KeyCode::Left => AppEvent::Previous,
            KeyCode::Right => AppEvent::Next,
            KeyCode::Home => AppEvent::First,
            KeyCode::End => AppEvent::Last,
            KeyCode::Char(c @ '1'..='9') => AppEvent::GoToPage(c as usize - '1' as usize),

            KeyCode::Char('c') => AppEvent::ToggleChatbot,
            KeyCode::Char('g') => AppEvent::GetStarted,
            KeyCode::Char('f') => AppEvent::NextFilter,
            KeyCode::Char('m') => AppEvent::LoadMore,
            KeyCode::Char('l') => AppEvent::ToggleLike,
            KeyCode::Enter => AppEvent::Activate,

            _ => AppEvent::None,
        }
    }

    fn text_key(key: KeyEvent) -> AppEvent {
        match key.code {
            KeyCode::Esc => AppEvent::Back,
            KeyCode::Enter => AppEvent::Submit,
            KeyCode::Backspace => AppEvent::Backspace,
            KeyCode::Left => AppEvent::CursorLeft,
            KeyCode::Right => AppEvent::CursorRight,
            KeyCode::Up => AppEvent::SuggestionUp,
            KeyCode::Down => AppEvent::SuggestionDown,
            KeyCode::Char(c) => AppEvent::Input(c),
            _ => AppEvent::None,
        }
    }

    fn overlay_key(key: KeyEvent) -> AppEvent {
        match key.code {
            KeyCode::Char('q') => AppEvent::Quit,
            KeyCode::Esc => AppEvent::Back,
            KeyCode::Tab | KeyCode::Left | KeyCode::Right => AppEvent::SwitchAuthTab,
            _ => AppEvent::None,
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: MouseEvent, regions: &HitRegions, units_per_column: f32) -> AppEvent {
        let x = mouse.column as f32 * units_per_column;
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                AppEvent::Click(regions.target_at(mouse.column, mouse.row, units_per_column))
            }
            MouseEventKind::Drag(MouseButton::Left) => AppEvent::DragMove(x),
            MouseEventKind::Up(MouseButton::Left) => AppEvent::DragEnd(x),
            _ => AppEvent::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn regions() -> HitRegions {
        HitRegions {
            strip: Rect::new(7, 2, 100, 10),
            previous_arrow: Rect::new(1, 6, 5, 1),
            next_arrow: Rect::new(108, 6, 5, 1),
            first_dot: 0,
            dots: vec![Rect::new(50, 12, 2, 1), Rect::new(52, 12, 2, 1)],
            chatbot_toggle: Rect::new(100, 30, 10, 1),
            chatbot_panel: None,
        }
    }

    fn handle(event: Event, mode: InputMode) -> AppEvent {
        EventHandler::handle(event, mode, &regions(), 10.0)
    }

    #[test]
    fn test_navigation_keys() {
        let nav = InputMode::Navigation;
        assert_eq!(handle(press(KeyCode::Char('q')), nav), AppEvent::Quit);
        assert_eq!(handle(press(KeyCode::Left), nav), AppEvent::Previous);
        assert_eq!(handle(press(KeyCode::Right), nav), AppEvent::Next);
        assert_eq!(handle(press(KeyCode::Char('3')), nav), AppEvent::GoToPage(2));
        assert_eq!(handle(press(KeyCode::Char('l')), nav), AppEvent::ToggleLike);
        assert_eq!(handle(press(KeyCode::Char('c')), nav), AppEvent::ToggleChatbot);
    }

    #[test]
    fn test_text_entry_types_shortcut_letters() {
        let text = InputMode::TextEntry;
        assert_eq!(handle(press(KeyCode::Char('q')), text), AppEvent::Input('q'));
        assert_eq!(handle(press(KeyCode::Enter), text), AppEvent::Submit);
        assert_eq!(handle(press(KeyCode::Esc), text), AppEvent::Back);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        for mode in [InputMode::Navigation, InputMode::TextEntry, InputMode::Overlay] {
            assert_eq!(handle(ctrl_c.clone(), mode), AppEvent::Quit);
        }
    }

    #[test]
    fn test_mouse_targets() {
        let nav = InputMode::Navigation;
        let down = MouseEventKind::Down(MouseButton::Left);
        assert_eq!(
            handle(mouse(down, 2, 6), nav),
            AppEvent::Click(ClickTarget::PreviousArrow)
        );
        assert_eq!(
            handle(mouse(down, 53, 12), nav),
            AppEvent::Click(ClickTarget::Dot(1))
        );
        assert_eq!(
            handle(mouse(down, 40, 5), nav),
            AppEvent::Click(ClickTarget::Strip(400.0))
        );
        assert_eq!(
            handle(mouse(down, 0, 40), nav),
            AppEvent::Click(ClickTarget::Elsewhere)
        );
        assert_eq!(
            handle(mouse(MouseEventKind::Drag(MouseButton::Left), 30, 5), nav),
            AppEvent::DragMove(300.0)
        );
        assert_eq!(
            handle(mouse(MouseEventKind::Up(MouseButton::Left), 30, 5), nav),
            AppEvent::DragEnd(300.0)
        );
    }

    #[test]
    fn test_open_panel_takes_priority() {
        let mut regions = regions();
        regions.chatbot_panel = Some(Rect::new(30, 0, 40, 20));
        assert_eq!(regions.target_at(40, 5, 10.0), ClickTarget::ChatbotPanel);
    }

    #[test]
    fn test_windowed_dots_map_to_their_pages() {
        let mut regions = regions();
        regions.first_dot = 7;
        assert_eq!(regions.target_at(50, 12, 10.0), ClickTarget::Dot(7));
        assert_eq!(regions.target_at(53, 12, 10.0), ClickTarget::Dot(8));
    }

    #[test]
    fn test_resize() {
        assert_eq!(
            handle(Event::Resize(120, 40), InputMode::Navigation),
            AppEvent::Resize(120, 40)
        );
    }
}
