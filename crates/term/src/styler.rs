//! Cell styling: turns structured cells into terminal bytes.
//!
//! Effects never embed escape sequences; a styler is the single place where
//! a [`CellStyle`] becomes output, so column math upstream stays exact.

use anyhow::Result;

use crossterm::{
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    QueueableCommand,
};

use crate::types::{Cell, CellStyle, Rgb, OPAQUE_BLANK};

pub trait CellStyler {
    /// Write one cell (style changes, then the glyph) into `out`.
    fn style_cell(&mut self, cell: Cell, out: &mut Vec<u8>) -> Result<()>;

    /// End of a batch: restore terminal defaults and forget the current style.
    fn reset(&mut self, out: &mut Vec<u8>) -> Result<()>;
}

/// Glyph as the terminal should see it.
#[inline]
fn display_char(ch: char) -> char {
    if ch == OPAQUE_BLANK {
        ' '
    } else {
        ch
    }
}

/// 24-bit color with bold/dim attributes, emitted only when the style changes.
#[derive(Debug, Default)]
pub struct CrosstermStyler {
    current: Option<CellStyle>,
}

impl CrosstermStyler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CellStyler for CrosstermStyler {
    fn style_cell(&mut self, cell: Cell, out: &mut Vec<u8>) -> Result<()> {
        if self.current != Some(cell.style) {
            apply_style_into(out, cell.style)?;
            self.current = Some(cell.style);
        }
        out.queue(Print(display_char(cell.ch)))?;
        Ok(())
    }

    fn reset(&mut self, out: &mut Vec<u8>) -> Result<()> {
        self.current = None;
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

/// Glyphs only, for `--no-color` and for tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainStyler;

impl CellStyler for PlainStyler {
    fn style_cell(&mut self, cell: Cell, out: &mut Vec<u8>) -> Result<()> {
        let mut utf8 = [0u8; 4];
        out.extend_from_slice(display_char(cell.ch).encode_utf8(&mut utf8).as_bytes());
        Ok(())
    }

    fn reset(&mut self, _out: &mut Vec<u8>) -> Result<()> {
        Ok(())
    }
}

/// SGR 0 clears colors too, so it must come before them.
fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
