//! Landing-screen orchestration.
//!
//! Owns the animated layers of the start screen and the clock that paces
//! them. Like the core crate it performs no terminal I/O: the host feeds it
//! timestamps and actions, then hands the composited [`Canvas`] to a
//! renderer.
//!
//! One tick is always `tick()` followed by `render_into()`; nothing mutates
//! during rendering.

pub mod clock;
pub mod landing;
pub mod theme;

pub use tui_lagoon_core as core;
pub use tui_lagoon_types as types;

pub use clock::AnimationClock;
pub use landing::{LandingPage, Layout, MENU_ITEMS, TITLE_ART};

use crate::core::Layer;

/// Advance each layer by one tick, bottom to top.
pub fn tick_layers(layers: &mut [&mut dyn Layer]) {
    for layer in layers.iter_mut() {
        layer.update();
    }
}
