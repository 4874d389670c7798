//! TerminalRenderer: flushes a composited canvas to a real terminal.
//!
//! The first frame (and any frame after a resize) is a full redraw; later
//! frames only rewrite runs of cells that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, event, style::Print, terminal, QueueableCommand};

use crate::styler::CellStyler;
use crate::types::Canvas;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    styler: Box<dyn CellStyler>,
    last: Option<Canvas>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new(styler: Box<dyn CellStyler>) -> Self {
        Self {
            stdout: io::stdout(),
            styler,
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(event::EnableMouseCapture)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.styler.reset(&mut self.buf)?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(event::DisableMouseCapture)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a canvas, swapping it into internal state.
    ///
    /// Callers should keep one `Canvas` and pass it in every frame.
    /// The renderer will diff against the previous frame and then swap buffers
    /// so the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, canvas: &mut Canvas) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == canvas.width() && prev.height() == canvas.height() => {
                encode_diff_into(&prev, canvas, self.styler.as_mut(), &mut self.buf)?;
                prev
            }
            stale => {
                encode_full_into(canvas, self.styler.as_mut(), &mut self.buf)?;
                let mut prev = stale.unwrap_or_default();
                prev.resize(canvas.width(), canvas.height());
                prev
            }
        };
        self.flush_buf()?;

        // Swap current into prev so next frame can diff without cloning.
        std::mem::swap(&mut prev, canvas);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(
    canvas: &Canvas,
    styler: &mut dyn CellStyler,
    out: &mut Vec<u8>,
) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    for y in 0..canvas.height() {
        if let Some(row) = canvas.row(y) {
            for cell in row {
                styler.style_cell(*cell, out)?;
            }
        }
        if y + 1 < canvas.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    styler.reset(out)
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(
    prev: &Canvas,
    next: &Canvas,
    styler: &mut dyn CellStyler,
    out: &mut Vec<u8>,
) -> Result<()> {
    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            styler.style_cell(cell, out)?;
        }
        Ok(())
    })?;

    styler.reset(out)
}

fn for_each_changed_run(
    prev: &Canvas,
    next: &Canvas,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styler::PlainStyler;
    use crate::types::CellStyle;

    #[test]
    fn full_redraw_writes_every_row() {
        let canvas = Canvas::from_lines(&["ab", "cd"], CellStyle::DEFAULT);
        let mut out = Vec::new();
        encode_full_into(&canvas, &mut PlainStyler, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("ab\r\ncd"));
    }

    #[test]
    fn diff_of_identical_frames_is_empty_with_plain_styler() {
        let canvas = Canvas::from_lines(&["abc"], CellStyle::DEFAULT);
        let mut out = Vec::new();
        encode_diff_into(&canvas, &canvas, &mut PlainStyler, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn changed_run_iterator_coalesces_adjacent_cells() {
        let a = Canvas::new(5, 1);
        let mut b = Canvas::new(5, 1);

        // Change cells [1..=3] into X.
        for x in 1..=3 {
            b.put_char(x, 0, 'X', CellStyle::DEFAULT);
        }

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(1, 0, 3)]);
    }

    #[test]
    fn style_only_change_is_a_run() {
        let a = Canvas::from_lines(&["ab"], CellStyle::DEFAULT);
        let b = Canvas::from_lines(&["ab"], CellStyle::DEFAULT.bold());
        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(0, 0, 2)]);
    }
}
