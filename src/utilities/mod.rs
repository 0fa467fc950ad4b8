// Utilities module
// Helper types shared by the carousel core and the UI shell

pub mod easing;
pub mod input;
pub mod text;
pub mod timer;

pub use easing::{ease_in_out, lerp};
pub use input::InputLine;
pub use text::{truncate, wrap_text};
pub use timer::TimerSlot;
