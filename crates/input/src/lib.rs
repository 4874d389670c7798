//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key and mouse events into
//! [`crate::types::LandingAction`]. Hit-testing is left to the caller; this
//! crate only knows where a click landed and whether it was a double click.

pub mod click;
pub mod map;

pub use tui_lagoon_types as types;

pub use click::{Click, ClickTracker};
pub use map::{handle_key_event, left_click, should_quit};
