// Carousel State
// Pure paging state and its transitions; no rendering, no timers

use tracing::debug;

use super::layout::{compute_layout, Layout, Viewport};
use crate::config::CarouselConfig;

const DISABLED_OPACITY: f32 = 0.5;
const ENABLED_OPACITY: f32 = 1.0;

/// Enabled flag and visual affordance of one arrow control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowState {
    pub enabled: bool,
    pub opacity: f32,
}

impl ArrowState {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            opacity: if enabled { ENABLED_OPACITY } else { DISABLED_OPACITY },
        }
    }
}

/// Everything the render step needs to present the strip
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselView {
    pub current_index: usize,
    pub offset: f32,
    pub card_width: f32,
    /// Card width without its right margin
    pub card_inner_width: f32,
    pub card_margin: f32,
    pub page_count: usize,
    pub previous: ArrowState,
    pub next: ArrowState,
}

/// Paging state for one carousel.
///
/// `current_index` always satisfies `0 <= current_index <= max_index`;
/// every mutator re-establishes it before returning.
#[derive(Debug, Clone)]
pub struct CarouselState {
    config: CarouselConfig,
    total_cards: usize,
    viewport: Viewport,
    layout: Layout,
    current_index: usize,
}

impl CarouselState {
    pub fn new(total_cards: usize, viewport: Viewport, config: CarouselConfig) -> Self {
        let layout = compute_layout(viewport, total_cards, &config);
        Self {
            config,
            total_cards,
            viewport,
            layout,
            current_index: 0,
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    pub fn max_index(&self) -> usize {
        self.layout.max_index
    }

    pub fn card_width(&self) -> f32 {
        self.layout.card_width
    }

    /// Number of indicator dots: one per reachable page, none without cards
    pub fn page_count(&self) -> usize {
        if self.total_cards == 0 {
            0
        } else {
            self.layout.max_index + 1
        }
    }

    /// Recompute geometry for a new viewport and pull the index back into bounds
    pub fn relayout(&mut self, viewport: Viewport) -> Layout {
        self.viewport = viewport;
        self.layout = compute_layout(viewport, self.total_cards, &self.config);
        self.current_index = self.clamp(self.current_index);

        debug!(
            cards_per_page = self.layout.cards_per_page,
            card_width = self.layout.card_width,
            max_index = self.layout.max_index,
            current_index = self.current_index,
            "carousel relayout"
        );
        self.layout
    }

    pub fn clamp(&self, index: usize) -> usize {
        index.min(self.layout.max_index)
    }

    /// Move to a page, clamped into range; returns the resulting index
    pub fn go_to(&mut self, index: usize) -> usize {
        self.current_index = self.clamp(index);
        self.current_index
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current_index < self.layout.max_index
    }

    /// Translate offset that left-aligns `index` in the strip
    pub fn page_offset(&self, index: usize) -> f32 {
        -(index as f32 * self.layout.card_width)
    }

    pub fn offset(&self) -> f32 {
        self.page_offset(self.current_index)
    }

    /// Offset while dragging by `delta` (positive = pointer moved left).
    ///
    /// Follows the pointer 1:1, except that on an edge page a drag past
    /// that edge stays pinned to the page offset.
    pub fn drag_offset(&self, delta: f32) -> f32 {
        let past_first = self.current_index == 0 && delta < 0.0;
        let past_last = self.current_index == self.layout.max_index && delta > 0.0;
        if past_first || past_last {
            return self.offset();
        }
        -(self.current_index as f32 * self.layout.card_width + delta)
    }

    /// Minimum displacement that counts as a swipe
    pub fn swipe_threshold(&self) -> f32 {
        self.layout.card_width * self.config.swipe_threshold_ratio
    }

    /// Page a drag with net displacement `delta` should settle on
    pub fn resolve_drag(&self, delta: f32) -> usize {
        if delta.abs() <= self.swipe_threshold() {
            return self.current_index;
        }
        if delta > 0.0 && self.can_go_next() {
            self.current_index + 1
        } else if delta < 0.0 && self.can_go_previous() {
            self.current_index - 1
        } else {
            self.current_index
        }
    }

    pub fn view(&self) -> CarouselView {
        let card_margin = self.config.card_margin;
        CarouselView {
            current_index: self.current_index,
            offset: self.offset(),
            card_width: self.layout.card_width,
            card_inner_width: (self.layout.card_width - card_margin).max(0.0),
            card_margin,
            page_count: self.page_count(),
            previous: ArrowState::new(self.can_go_previous()),
            next: ArrowState::new(self.can_go_next()),
        }
    }
}
