//! Shared types module - cells, canvases, actions and constants
//!
//! This crate defines the fundamental data used throughout the application.
//! Everything here is plain data with no external dependencies, so it can be
//! used by the simulation crates, the terminal renderer and tests alike.
//!
//! # Cells and canvases
//!
//! A [`Canvas`] is a rectangular grid of [`Cell`]s. A cell whose glyph is a
//! space is *transparent*: the compositor lets lower layers show through it.
//! Static panels that need an empty but opaque interior use [`OPAQUE_BLANK`].
//!
//! # Timing and default constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Animation tick interval (20 fps) |
//! | `DEFAULT_GRID_SIZE` | 10 | Cells between grid lines |
//! | `DEFAULT_AMPLITUDE` | 2.0 | Wave height in cells |
//! | `DEFAULT_FREQUENCY` | 5.0 | Wave tightness (divisor of position) |
//! | `DEFAULT_WAVE_SPEED` | 20.0 | Frames per radian of phase |
//! | `DEFAULT_RAINBOW_SPEED` | 5 | Frames before the rainbow shifts one color |
//! | `DEFAULT_DAMPING` | 0.99 | Per-tick blob velocity damping |
//! | `MAX_BLOBS` | 16 | Upper bound on blobs per engine |
//!
//! # Examples
//!
//! ```
//! use tui_lagoon_types::{Canvas, Rgb};
//!
//! let mut canvas = Canvas::new(4, 2);
//! assert!(canvas.get(0, 0).unwrap().is_transparent());
//!
//! canvas.put_str(0, 0, "hi", Default::default());
//! assert_eq!(canvas.row_text(0), "hi  ");
//!
//! assert_eq!(Rgb::from_hex("#58a6ff"), Some(Rgb::new(0x58, 0xa6, 0xff)));
//! ```

use std::fmt;

pub mod canvas;
pub mod palette;

pub use canvas::{Canvas, Cell, CellStyle, Rgb, OPAQUE_BLANK};
pub use palette::{Palette, PaletteParseError};

/// Animation tick interval in milliseconds (50ms = 20 fps)
pub const TICK_MS: u32 = 50;

/// Lower bound for a configured tick interval.
pub const MIN_TICK_MS: u32 = 8;

/// Distance between grid lines in cells
pub const DEFAULT_GRID_SIZE: u16 = 10;

/// Wave height in cells
pub const DEFAULT_AMPLITUDE: f64 = 2.0;

/// Wave tightness; positions are divided by this before taking the sine
pub const DEFAULT_FREQUENCY: f64 = 5.0;

/// Frames per radian of wave phase
pub const DEFAULT_WAVE_SPEED: f64 = 20.0;

/// Frames before the rainbow palette advances by one color
pub const DEFAULT_RAINBOW_SPEED: u32 = 5;

/// Velocity damping applied to every blob each tick
pub const DEFAULT_DAMPING: f64 = 0.99;

/// Damping used by the lava lamp (slightly stronger to absorb repulsion)
pub const LAVA_DAMPING: f64 = 0.98;

/// Upper bound on blobs per engine. Field evaluation is
/// `O(width * height * blobs)` per frame.
pub const MAX_BLOBS: usize = 16;

/// Maximum delay between two clicks on the same cell to count as a double click
pub const DOUBLE_CLICK_MS: u64 = 500;

/// Rejected configuration value.
///
/// Every validating setter returns this and leaves the previous value in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A value that must be strictly positive (and finite) was not.
    NonPositive(&'static str),
    /// A value that may be any real was NaN or infinite.
    NotFinite(&'static str),
    /// A palette needs at least one color.
    EmptyPalette,
    /// A gradient needs at least an empty glyph and one filled glyph.
    GradientTooShort,
    /// `thresholds.len()` must equal `glyphs.len() - 1`.
    GradientMismatch { glyphs: usize, thresholds: usize },
    /// Thresholds must be finite and strictly ascending.
    ThresholdsNotAscending,
    /// Damping must lie in `(0, 1)`.
    DampingOutOfRange,
    /// The engine already holds [`MAX_BLOBS`] blobs.
    TooManyBlobs,
}

impl ConfigError {
    pub fn code(self) -> &'static str {
        match self {
            ConfigError::NonPositive(_)
            | ConfigError::NotFinite(_)
            | ConfigError::DampingOutOfRange => "invalid_number",
            ConfigError::EmptyPalette => "empty_palette",
            ConfigError::GradientTooShort
            | ConfigError::GradientMismatch { .. }
            | ConfigError::ThresholdsNotAscending => "gradient_mismatch",
            ConfigError::TooManyBlobs => "too_many_blobs",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive(name) => {
                write!(f, "{} must be a finite value greater than zero", name)
            }
            ConfigError::NotFinite(name) => write!(f, "{} must be a finite number", name),
            ConfigError::EmptyPalette => f.write_str("palette must contain at least one color"),
            ConfigError::GradientTooShort => {
                f.write_str("gradient must contain at least two glyphs")
            }
            ConfigError::GradientMismatch { glyphs, thresholds } => write!(
                f,
                "gradient has {} glyphs and needs {} thresholds, got {}",
                glyphs,
                glyphs.saturating_sub(1),
                thresholds
            ),
            ConfigError::ThresholdsNotAscending => {
                f.write_str("thresholds must be finite and strictly ascending")
            }
            ConfigError::DampingOutOfRange => {
                f.write_str("damping must be greater than 0 and less than 1")
            }
            ConfigError::TooManyBlobs => {
                write!(f, "an engine holds at most {} blobs", MAX_BLOBS)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Actions the landing page understands.
///
/// Produced by the key and mouse mappers and consumed by the host loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingAction {
    /// Move the menu selection down (wraps)
    SelectNext,
    /// Move the menu selection up (wraps)
    SelectPrev,
    /// Select a specific menu row (mouse click)
    Select(usize),
    /// Activate the selected menu row
    Confirm,
    /// Leave the application
    Quit,
}

impl LandingAction {
    /// Name used in debug logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            LandingAction::SelectNext => "selectNext",
            LandingAction::SelectPrev => "selectPrev",
            LandingAction::Select(_) => "select",
            LandingAction::Confirm => "confirm",
            LandingAction::Quit => "quit",
        }
    }
}
