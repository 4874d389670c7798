//! Layer compositor: stacks canvases bottom to top into one output canvas.
//!
//! Works on structured cells only. Styling is applied later by the terminal
//! renderer, so visual columns never depend on escape sequences.
//!
//! Rules:
//! - the bottom layer is drawn at the top-left and padded with transparent
//!   cells to the compositor's size
//! - every later layer is centered on both axes (offsets clamp at 0, so an
//!   oversized layer is clipped on its right and bottom edges)
//! - a transparent source cell leaves the destination untouched; any other
//!   cell replaces glyph and style entirely

use log::debug;

use crate::layer::Layer;
use crate::types::Canvas;

/// Top-left offset that centers `inner` within `outer` (0 when it doesn't fit).
#[inline]
pub fn centered_offset(outer: u16, inner: u16) -> u16 {
    outer.saturating_sub(inner) / 2
}

/// Copy every non-transparent cell of `src` onto `dst` with its top-left at
/// `(x, y)`, clipped to `dst`. Inputs are never mutated beyond `dst`.
pub fn overlay(dst: &mut Canvas, src: &Canvas, x: u16, y: u16) {
    let x0 = x as usize;
    let y0 = y as usize;
    let w = (src.width() as usize).min((dst.width() as usize).saturating_sub(x0));
    let h = (src.height() as usize).min((dst.height() as usize).saturating_sub(y0));

    for sy in 0..h {
        let Some(row) = src.row(sy as u16) else {
            break;
        };
        for (sx, cell) in row.iter().take(w).enumerate() {
            if cell.is_transparent() {
                continue;
            }
            dst.set((x0 + sx) as u16, (y0 + sy) as u16, *cell);
        }
    }
}

/// Borrows its layers for one or more composites; it never owns or mutates
/// them.
pub struct Compositor<'a> {
    width: u16,
    height: u16,
    layers: Vec<&'a dyn Layer>,
    scratch: Canvas,
}

impl<'a> Compositor<'a> {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            layers: Vec::new(),
            scratch: Canvas::new(0, 0),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Layers are drawn in the order added; the first is the background.
    pub fn add_layer(&mut self, layer: &'a dyn Layer) {
        self.layers.push(layer);
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        debug!("compositor resized to {}x{}", width, height);
        self.width = width;
        self.height = height;
    }

    pub fn clear(&mut self) {
        self.layers.clear();
    }

    /// Convenience helper that allocates a new canvas.
    pub fn composite(&mut self) -> Canvas {
        let mut out = Canvas::new(self.width, self.height);
        self.composite_into(&mut out);
        out
    }

    /// Composite every layer into `out`, resizing it to the compositor's size.
    /// With no layers the result is fully transparent.
    pub fn composite_into(&mut self, out: &mut Canvas) {
        out.resize(self.width, self.height);

        let mut layers = self.layers.iter();
        let Some(bottom) = layers.next() else {
            return;
        };
        bottom.render_into(&mut self.scratch);
        overlay(out, &self.scratch, 0, 0);

        for layer in layers {
            layer.render_into(&mut self.scratch);
            let x = centered_offset(self.width, self.scratch.width());
            let y = centered_offset(self.height, self.scratch.height());
            overlay(out, &self.scratch, x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CellStyle, Rgb};

    fn filled(w: u16, h: u16, ch: char) -> Canvas {
        let mut c = Canvas::new(w, h);
        c.fill_rect(0, 0, w, h, ch, CellStyle::DEFAULT);
        c
    }

    #[test]
    fn centered_offset_clamps_at_zero() {
        assert_eq!(centered_offset(10, 4), 3);
        assert_eq!(centered_offset(10, 3), 3);
        assert_eq!(centered_offset(4, 10), 0);
    }

    #[test]
    fn overlay_replaces_style_entirely() {
        let mut dst = filled(2, 1, 'a');
        let mut src = Canvas::new(2, 1);
        let style = CellStyle::fg(Rgb::new(1, 2, 3)).bold();
        src.put_char(1, 0, 'b', style);
        overlay(&mut dst, &src, 0, 0);
        assert_eq!(dst.get(0, 0).unwrap().ch, 'a');
        assert_eq!(dst.get(1, 0).unwrap().style, style);
    }

    #[test]
    fn overlay_clips_oversized_source() {
        let mut dst = filled(3, 3, '.');
        let src = filled(5, 5, '#');
        overlay(&mut dst, &src, 1, 1);
        assert_eq!(dst.to_text(), "...\n.##\n.##");
    }

    #[test]
    fn empty_compositor_yields_transparent_canvas() {
        let mut comp = Compositor::new(4, 2);
        let out = comp.composite();
        assert_eq!((out.width(), out.height()), (4, 2));
        assert!(out.cells().iter().all(|c| c.is_transparent()));
    }

    #[test]
    fn short_bottom_layer_is_padded() {
        let bottom = filled(4, 1, 'x');
        let mut comp = Compositor::new(4, 3);
        comp.add_layer(&bottom);
        let out = comp.composite();
        assert_eq!(out.to_text(), "xxxx\n    \n    ");
    }

    #[test]
    fn clear_and_resize() {
        let bottom = filled(2, 2, 'x');
        let mut comp = Compositor::new(2, 2);
        comp.add_layer(&bottom);
        assert_eq!(comp.len(), 1);
        comp.clear();
        assert!(comp.is_empty());
        comp.resize(0, 0);
        assert!(comp.composite().is_empty());
    }
}
