//! Terminal output for composited frames.
//!
//! Frames arrive as [`Canvas`](crate::types::Canvas) values of structured
//! cells. A [`CellStyler`] decides how each cell becomes bytes (truecolor or
//! plain glyphs) and [`TerminalRenderer`] owns the terminal session: raw
//! mode, alternate screen, mouse capture, and diffing against the previous
//! frame.

pub mod renderer;
pub mod styler;

pub use tui_lagoon_types as types;

pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use styler::{CellStyler, CrosstermStyler, PlainStyler};
