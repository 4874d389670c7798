//! The capability shared by everything the compositor can stack.

use crate::compositor::overlay;
use crate::types::Canvas;

/// An independently animated source of one canvas per frame.
///
/// Implementors own all of their state (blobs, frame counter, palette
/// handle); nothing is shared between layers. Calls are synchronous and
/// must not be interleaved across threads.
pub trait Layer {
    /// Advance one animation tick. Static layers keep the default no-op.
    fn update(&mut self) {}

    /// Current `(width, height)` of the canvas `render` produces.
    fn size(&self) -> (u16, u16);

    /// Render into an existing canvas, resizing it to [`Layer::size`].
    ///
    /// This is the allocation-free path: callers can keep one canvas per
    /// layer and reuse it across frames.
    fn render_into(&self, canvas: &mut Canvas);

    /// Change the layer's dimensions. Fixed-size layers ignore this.
    fn resize(&mut self, _width: u16, _height: u16) {}

    /// Convenience helper that allocates a new canvas.
    fn render(&self) -> Canvas {
        let (w, h) = self.size();
        let mut canvas = Canvas::new(w, h);
        self.render_into(&mut canvas);
        canvas
    }
}

/// A finished canvas is itself a fixed-size, static layer.
impl Layer for Canvas {
    fn size(&self) -> (u16, u16) {
        (self.width(), self.height())
    }

    fn render_into(&self, canvas: &mut Canvas) {
        canvas.resize(self.width(), self.height());
        overlay(canvas, self, 0, 0);
    }

    fn render(&self) -> Canvas {
        self.clone()
    }
}
