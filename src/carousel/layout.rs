// Carousel Layout
// Maps a viewport size and card count to page geometry

use crate::config::CarouselConfig;

/// Viewport dimensions in width units.
///
/// `width` selects the breakpoint tier; `container_width` is the space the
/// strip container actually occupies and drives card sizing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub container_width: f32,
}

impl Viewport {
    /// Viewport whose strip container spans the full width
    pub fn new(width: f32) -> Self {
        Self {
            width,
            container_width: width,
        }
    }

    pub fn with_container(width: f32, container_width: f32) -> Self {
        Self {
            width,
            container_width,
        }
    }
}

/// Page geometry derived from the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub cards_per_page: usize,
    /// Width of one card including its right margin
    pub card_width: f32,
    /// Highest valid page index, never negative
    pub max_index: usize,
}

impl Layout {
    /// True when every card already fits on one page
    pub fn is_static(&self) -> bool {
        self.max_index == 0
    }
}

/// Cards per page for a viewport width: the first breakpoint whose
/// `min_width` the width reaches, else the fallback
pub fn cards_per_page(viewport_width: f32, config: &CarouselConfig) -> usize {
    config
        .breakpoints
        .iter()
        .find(|bp| viewport_width >= bp.min_width)
        .map(|bp| bp.cards)
        .unwrap_or(config.fallback_cards)
        .max(1)
}

pub fn compute_layout(viewport: Viewport, total_cards: usize, config: &CarouselConfig) -> Layout {
    let cards_per_page = cards_per_page(viewport.width, config);
    let usable = (viewport.container_width - config.container_padding).max(0.0);
    let card_width = usable / cards_per_page as f32;

    Layout {
        cards_per_page,
        card_width,
        max_index: total_cards.saturating_sub(cards_per_page),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_per_page_tiers() {
        let config = CarouselConfig::default();
        for width in [1200.0, 1300.0, 2560.0] {
            assert_eq!(cards_per_page(width, &config), 3, "width {width}");
        }
        for width in [768.0, 900.0, 1199.9] {
            assert_eq!(cards_per_page(width, &config), 2, "width {width}");
        }
        for width in [0.0, 320.0, 767.9] {
            assert_eq!(cards_per_page(width, &config), 1, "width {width}");
        }
    }

    #[test]
    fn test_eight_cards_wide_viewport() {
        let layout = compute_layout(Viewport::new(1300.0), 8, &CarouselConfig::default());
        assert_eq!(layout.cards_per_page, 3);
        assert_eq!(layout.max_index, 5);
        assert!((layout.card_width - (1300.0 - 120.0) / 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_card_width_uses_container() {
        let layout = compute_layout(
            Viewport::with_container(1000.0, 920.0),
            6,
            &CarouselConfig::default(),
        );
        assert_eq!(layout.cards_per_page, 2);
        assert_eq!(layout.card_width, 400.0);
        assert_eq!(layout.max_index, 4);
    }

    #[test]
    fn test_fewer_cards_than_page_clamps_to_zero() {
        let layout = compute_layout(Viewport::new(1300.0), 2, &CarouselConfig::default());
        assert_eq!(layout.cards_per_page, 3);
        assert_eq!(layout.max_index, 0);
        assert!(layout.is_static());

        let empty = compute_layout(Viewport::new(500.0), 0, &CarouselConfig::default());
        assert_eq!(empty.max_index, 0);
    }

    #[test]
    fn test_container_narrower_than_padding() {
        let layout = compute_layout(Viewport::new(100.0), 4, &CarouselConfig::default());
        assert_eq!(layout.card_width, 0.0);
    }
}
