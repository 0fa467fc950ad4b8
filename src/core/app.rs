// Application State
// Main application state and event dispatch

use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::events::{AppEvent, ClickTarget, HitRegions, InputMode};
use crate::carousel::{AnimatedSurface, CarouselController, Viewport};
use crate::config::AppConfig;
use crate::content::{Content, Story};
use crate::operations::{AuthOverlay, ChatSession, Chatbot, LikeBoard, ProfileGallery};
use crate::utilities::InputLine;

/// Which page section receives navigation keys
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Stories,
    Profiles,
}

/// Main application state
pub struct App {
    pub config: AppConfig,

    /// Success story strip
    pub carousel: CarouselController<AnimatedSurface>,
    pub stories: Vec<Story>,

    pub gallery: ProfileGallery,
    pub likes: LikeBoard,

    /// Open chat modal, if any
    pub chat: Option<ChatSession>,
    pub chatbot: Chatbot,
    pub auth: AuthOverlay,

    pub focus: Focus,

    /// Clickable areas from the last draw
    pub regions: HitRegions,

    pub status_text: String,

    /// Whether the application should quit
    pub should_quit: bool,

    /// Set by input and timers, cleared once a frame is drawn
    redraw: bool,
}

impl App {
    /// Create the application for a terminal `columns` wide
    pub fn new(config: AppConfig, content: Content, columns: u16, now: Instant) -> Self {
        let viewport = viewport_for(columns, config.application.units_per_column);
        let carousel = CarouselController::new(
            content.stories.len(),
            viewport,
            config.carousel.clone(),
            AnimatedSurface::default(),
            now,
        );
        let gallery = ProfileGallery::new(content.profiles, config.gallery.page_size);
        let likes = LikeBoard::new(Duration::from_millis(config.likes.heart_lifetime_ms));
        let chatbot = Chatbot::new(config.chatbot.clone());

        info!(
            stories = content.stories.len(),
            profiles = gallery.profiles().len(),
            columns,
            "application started"
        );

        Self {
            status_text: config.application.status_bar.default_text.clone(),
            config,
            carousel,
            stories: content.stories,
            gallery,
            likes,
            chat: None,
            chatbot,
            auth: AuthOverlay::default(),
            focus: Focus::Stories,
            regions: HitRegions::default(),
            should_quit: false,
            redraw: true,
        }
    }

    pub fn units_per_column(&self) -> f32 {
        self.config.application.units_per_column
    }

    /// How key presses should be read right now
    pub fn input_mode(&self) -> InputMode {
        if self.auth.is_visible() {
            InputMode::Overlay
        } else if self.chat.is_some() || self.chatbot.is_open() {
            InputMode::TextEntry
        } else {
            InputMode::Navigation
        }
    }

    /// Input line that receives typed text: the chat modal first, then the chatbot
    fn active_input(&mut self) -> Option<&mut InputLine> {
        if let Some(chat) = self.chat.as_mut() {
            return Some(&mut chat.input);
        }
        if self.chatbot.is_open() {
            return Some(&mut self.chatbot.input);
        }
        None
    }

    /// Apply one application event
    pub fn handle(&mut self, event: AppEvent, now: Instant) {
        self.redraw = true;
        match event {
            AppEvent::Quit => self.quit(),
            AppEvent::Back => self.back(),
            AppEvent::CycleFocus => {
                self.focus = match self.focus {
                    Focus::Stories => Focus::Profiles,
                    Focus::Profiles => Focus::Stories,
                };
            }
            AppEvent::ToggleChatbot => self.chatbot.toggle(now),
            AppEvent::GetStarted => self.auth.get_started(),

            AppEvent::Previous => match self.focus {
                Focus::Stories => self.carousel.previous(now),
                Focus::Profiles => self.gallery.select_previous(),
            },
            AppEvent::Next => match self.focus {
                Focus::Stories => self.carousel.next(now),
                Focus::Profiles => self.gallery.select_next(),
            },
            AppEvent::First => self.carousel.first(now),
            AppEvent::Last => self.carousel.last(now),
            AppEvent::GoToPage(index) => self.carousel.go_to(index, true, now),

            AppEvent::NextFilter => {
                self.gallery.next_filter();
                self.status_text = format!("Showing {} profiles", self.gallery.active_filter());
            }
            AppEvent::LoadMore => {
                if self.gallery.has_more() {
                    self.gallery.load_more();
                }
            }
            AppEvent::ToggleLike => self.toggle_like(now),
            AppEvent::Activate => self.open_chat(),

            AppEvent::Input(c) => {
                if let Some(input) = self.active_input() {
                    input.insert(c);
                }
            }
            AppEvent::Backspace => {
                if let Some(input) = self.active_input() {
                    input.backspace();
                }
            }
            AppEvent::CursorLeft => {
                if let Some(input) = self.active_input() {
                    input.move_left();
                }
            }
            AppEvent::CursorRight => {
                if let Some(input) = self.active_input() {
                    input.move_right();
                }
            }
            AppEvent::Submit => self.submit(now),
            AppEvent::SuggestionUp => self.chatbot.select_previous_suggestion(),
            AppEvent::SuggestionDown => self.chatbot.select_next_suggestion(),

            AppEvent::SwitchAuthTab => self.auth.switch_tab(),

            AppEvent::Click(target) => self.click(target, now),
            AppEvent::DragMove(x) => self.carousel.on_drag_move(x, now),
            AppEvent::DragEnd(x) => self.carousel.on_drag_end(x, now),

            AppEvent::Resize(columns, _rows) => {
                let viewport = viewport_for(columns, self.units_per_column());
                self.carousel.on_resize(viewport, now);
            }

            AppEvent::None => {}
        }
    }

    /// Fire due timers; returns true when the screen needs a redraw
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.carousel.tick(now);
        changed |= self.likes.tick(now);
        changed |= self.chatbot.tick(now);
        let changed = changed || self.carousel.surface().is_animating(now);
        self.redraw |= changed;
        changed
    }

    /// Whether a frame should be drawn at `now`; clears the pending flag.
    ///
    /// A frame drawn mid-motion leaves the flag set so the resting offset
    /// is drawn once the motion ends.
    pub fn take_redraw(&mut self, now: Instant) -> bool {
        let animating = self.carousel.surface().is_animating(now);
        let due = self.redraw || animating;
        self.redraw = animating;
        due
    }

    /// Close the topmost overlay
    fn back(&mut self) {
        if self.auth.is_visible() {
            self.auth.close();
        } else if let Some(chat) = self.chat.take() {
            debug!(profile = chat.profile_name(), "chat closed");
        } else {
            self.chatbot.close();
        }
    }

    fn click(&mut self, target: ClickTarget, now: Instant) {
        // Modals swallow clicks on the page behind them
        if self.auth.is_visible() || self.chat.is_some() {
            return;
        }
        if self.chatbot.is_open()
            && !matches!(target, ClickTarget::ChatbotPanel | ClickTarget::ChatbotToggle)
        {
            self.chatbot.close();
        }

        match target {
            ClickTarget::PreviousArrow => self.carousel.previous(now),
            ClickTarget::NextArrow => self.carousel.next(now),
            ClickTarget::Dot(index) => self.carousel.go_to(index, true, now),
            ClickTarget::Strip(x) => {
                self.focus = Focus::Stories;
                self.carousel.on_drag_start(x);
            }
            ClickTarget::ChatbotToggle => self.chatbot.toggle(now),
            ClickTarget::ChatbotPanel | ClickTarget::Elsewhere => {}
        }
    }

    fn toggle_like(&mut self, now: Instant) {
        let Some(index) = self.gallery.selected_profile() else {
            return;
        };
        let liked = self.likes.toggle(index, now);
        if let Some(profile) = self.gallery.profile(index) {
            self.status_text = if liked {
                format!("You liked {}", profile.name)
            } else {
                format!("Removed like for {}", profile.name)
            };
        }
    }

    fn open_chat(&mut self) {
        if self.focus != Focus::Profiles {
            return;
        }
        let Some(profile) = self
            .gallery
            .selected_profile()
            .and_then(|index| self.gallery.profile(index))
        else {
            return;
        };
        debug!(profile = %profile.name, "chat opened");
        self.chat = Some(ChatSession::new(profile.name.clone()));
    }

    fn submit(&mut self, now: Instant) {
        if let Some(chat) = self.chat.as_mut() {
            chat.send();
        } else if self.chatbot.is_open() {
            self.chatbot.submit(now);
        }
    }

    /// Request application quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

/// Viewport for a terminal `columns` wide; the strip container sits inside
/// a one-column border on each side
pub fn viewport_for(columns: u16, units_per_column: f32) -> Viewport {
    Viewport::with_container(
        f32::from(columns) * units_per_column,
        f32::from(columns.saturating_sub(2)) * units_per_column,
    )
}
