//! Effects core - pure, deterministic, and testable
//!
//! This crate contains every animated effect and the compositor that stacks
//! them. It performs no I/O and knows nothing about terminals: each effect
//! renders into a [`Canvas`](tui_lagoon_types::Canvas) of structured cells,
//! and styling happens later in a single pass.
//!
//! - **Deterministic**: the same inputs and tick count produce the same canvas
//! - **Single-threaded**: all mutation happens in [`Layer::update`], all
//!   observation in [`Layer::render_into`]
//! - **Allocation-free hot paths**: `render_into` reuses the caller's canvas
//!
//! # Module Structure
//!
//! - [`waves`]: sine coordinate distortion ([`WaveField`]) and the wavy grid
//! - [`rainbow`]: palette cycling for text ([`RainbowCycler`], [`RainbowText`])
//! - [`metaballs`]: blob simulation and field quantization ([`MetaballEngine`])
//! - [`block`]: static text blocks, bordered panels, vertical stacking
//! - [`compositor`]: per-cell transparent layering with centering
//! - [`layer`]: the [`Layer`] capability shared by all of the above
//! - [`rng`]: seeded LCG for reproducible blob layouts
//!
//! # Example
//!
//! ```
//! use tui_lagoon_core::{Blob, Compositor, Layer, MetaballEngine, WaveGrid};
//! use tui_lagoon_types::Rgb;
//!
//! let mut grid = WaveGrid::new(40, 12);
//! let mut blobs = MetaballEngine::new(40, 12);
//! blobs
//!     .add_blob(Blob::new(20.0, 6.0, 0.3, 0.1, 4.0, Rgb::new(88, 166, 255)).unwrap())
//!     .unwrap();
//!
//! // One tick: update, then composite.
//! grid.update();
//! blobs.update();
//!
//! let mut comp = Compositor::new(40, 12);
//! comp.add_layer(&grid);
//! comp.add_layer(&blobs);
//! let frame = comp.composite();
//! assert_eq!((frame.width(), frame.height()), (40, 12));
//! ```

pub mod block;
pub mod compositor;
pub mod layer;
pub mod metaballs;
pub mod rainbow;
pub mod rng;
pub mod waves;

pub use tui_lagoon_types as types;

// Re-export commonly used types for convenience
pub use block::{vstack, Panel, TextBlock};
pub use compositor::{centered_offset, overlay, Compositor};
pub use layer::Layer;
pub use metaballs::{Blob, FieldSample, MetaballEngine, Repulsion};
pub use rainbow::{RainbowCycler, RainbowText};
pub use rng::SimpleRng;
pub use waves::{GridColors, GridLine, WaveField, WaveGrid};
