// Carousel module
// Viewport-responsive paging for the story strip
//
// `layout` and `state` are pure; `controller` adds timers and input
// handling and renders through the `RenderSurface` seam.

pub mod animated;
pub mod controller;
pub mod drag;
pub mod layout;
pub mod state;
pub mod surface;

pub use animated::AnimatedSurface;
pub use controller::CarouselController;
pub use drag::DragSession;
pub use layout::{cards_per_page, compute_layout, Layout, Viewport};
pub use state::{ArrowState, CarouselState, CarouselView};
pub use surface::{Easing, RenderSurface, Transition};
