// Carousel Controller
// Drives CarouselState from input events and pushes the result to a surface

use std::time::Instant;
use tracing::{debug, trace};

use super::drag::DragSession;
use super::layout::Viewport;
use super::state::CarouselState;
use super::surface::{RenderSurface, Transition};
use crate::config::CarouselConfig;
use crate::utilities::TimerSlot;

/// Owns one carousel's state, its timers and the surface it renders to.
///
/// Every input method takes the current instant; timers only fire from
/// [`CarouselController::tick`].
pub struct CarouselController<S: RenderSurface> {
    state: CarouselState,
    surface: S,
    drag: Option<DragSession>,
    /// Latest viewport seen while the resize debounce is pending
    pending_viewport: Option<Viewport>,
    resize_debounce: TimerSlot,
    settle: TimerSlot,
    relayouts: usize,
}

impl<S: RenderSurface> CarouselController<S> {
    /// Build the controller and render the initial layout without animation
    pub fn new(
        total_cards: usize,
        viewport: Viewport,
        config: CarouselConfig,
        surface: S,
        now: Instant,
    ) -> Self {
        let mut controller = Self {
            state: CarouselState::new(total_cards, viewport, config),
            surface,
            drag: None,
            pending_viewport: None,
            resize_debounce: TimerSlot::new(),
            settle: TimerSlot::new(),
            relayouts: 0,
        };
        controller.apply_layout(now);
        controller
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    /// Number of layout computations applied so far, including the initial one
    pub fn relayout_count(&self) -> usize {
        self.relayouts
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Earliest pending timer, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.resize_debounce.deadline(), self.settle.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn animated(&self) -> Transition {
        Transition::ease_in_out(self.state.config().transition())
    }

    /// Move to `index` (clamped) and render it
    pub fn go_to(&mut self, index: usize, animate: bool, now: Instant) {
        let index = self.state.go_to(index);
        debug!(index, animate, "carousel go_to");
        self.render(animate, now);
    }

    pub fn previous(&mut self, now: Instant) {
        if self.state.can_go_previous() {
            self.go_to(self.state.current_index() - 1, true, now);
        }
    }

    pub fn next(&mut self, now: Instant) {
        if self.state.can_go_next() {
            self.go_to(self.state.current_index() + 1, true, now);
        }
    }

    pub fn first(&mut self, now: Instant) {
        self.go_to(0, true, now);
    }

    pub fn last(&mut self, now: Instant) {
        self.go_to(self.state.max_index(), true, now);
    }

    /// Record a viewport change; the relayout runs once input goes quiet
    pub fn on_resize(&mut self, viewport: Viewport, now: Instant) {
        self.pending_viewport = Some(viewport);
        self.resize_debounce
            .schedule(now, self.state.config().resize_debounce());
        trace!(width = viewport.width, "resize debounce restarted");
    }

    pub fn on_drag_start(&mut self, x: f32) {
        self.drag = Some(DragSession::start(x));
        // A pending settle must not re-enable the transition mid-drag
        self.settle.cancel();
        self.surface.set_transition(Transition::None);
    }

    pub fn on_drag_move(&mut self, x: f32, now: Instant) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        drag.update(x);
        let offset = self.state.drag_offset(drag.delta());
        self.surface.set_offset(offset, now);
    }

    pub fn on_drag_end(&mut self, x: f32, now: Instant) {
        let Some(mut drag) = self.drag.take() else {
            return;
        };
        drag.update(x);

        let target = self.state.resolve_drag(drag.delta());
        debug!(
            delta = drag.delta(),
            threshold = self.state.swipe_threshold(),
            from = self.state.current_index(),
            to = target,
            "drag released"
        );
        self.surface.set_transition(self.animated());
        self.go_to(target, true, now);
    }

    /// Fire due timers; returns true when anything changed
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if self.resize_debounce.fire_if_due(now) {
            if let Some(viewport) = self.pending_viewport.take() {
                self.state.relayout(viewport);
                self.apply_layout(now);
                changed = true;
            }
        }

        if self.settle.fire_if_due(now) {
            self.surface.set_transition(self.animated());
            changed = true;
        }

        changed
    }

    /// Push card sizing and a fresh indicator, then snap to the current page
    fn apply_layout(&mut self, now: Instant) {
        self.relayouts += 1;
        let view = self.state.view();
        self.surface
            .set_card_size(view.card_inner_width, view.card_margin);
        self.surface
            .rebuild_indicator(view.page_count, view.current_index);
        self.go_to(view.current_index, false, now);
    }

    fn render(&mut self, animate: bool, now: Instant) {
        let view = self.state.view();

        if animate {
            self.surface.set_transition(self.animated());
        } else {
            self.surface.set_transition(Transition::None);
            self.settle.schedule(now, self.state.config().settle());
        }

        self.surface.set_offset(view.offset, now);
        self.surface.set_active_dot(view.current_index);
        self.surface.set_arrows(view.previous, view.next);
    }
}
