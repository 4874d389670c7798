//! Static text layers: plain text blocks, bordered panels and vertical stacks.

use crate::compositor::{centered_offset, overlay};
use crate::layer::Layer;
use crate::types::{Canvas, CellStyle, OPAQUE_BLANK};

/// Fixed lines of text in one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    canvas: Canvas,
}

impl TextBlock {
    /// Spaces stay transparent.
    pub fn new<S: AsRef<str>>(lines: &[S], style: CellStyle) -> Self {
        Self {
            canvas: Canvas::from_lines(lines, style),
        }
    }

    /// Every space (including ragged-line padding) hides what is beneath.
    pub fn opaque<S: AsRef<str>>(lines: &[S], style: CellStyle) -> Self {
        let mut block = Self::new(lines, style);
        let (w, h) = (block.canvas.width(), block.canvas.height());
        for y in 0..h {
            for x in 0..w {
                if block.canvas.get(x, y).is_some_and(|c| c.is_transparent()) {
                    block.canvas.put_char(x, y, OPAQUE_BLANK, style);
                }
            }
        }
        block
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}

impl Layer for TextBlock {
    fn size(&self) -> (u16, u16) {
        (self.canvas.width(), self.canvas.height())
    }

    fn render_into(&self, canvas: &mut Canvas) {
        self.canvas.render_into(canvas);
    }
}

/// Rounded border plus padding around a content canvas.
///
/// The padding and any transparent cells of the content are filled with
/// [`OPAQUE_BLANK`], so the whole panel hides the layers beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    /// Rows above and below the content
    pub pad_y: u16,
    /// Columns left and right of the content
    pub pad_x: u16,
    pub border: CellStyle,
    pub fill: CellStyle,
}

impl Panel {
    pub fn new(border: CellStyle) -> Self {
        Self {
            pad_y: 1,
            pad_x: 2,
            border,
            fill: CellStyle::DEFAULT,
        }
    }

    pub fn padding(mut self, pad_y: u16, pad_x: u16) -> Self {
        self.pad_y = pad_y;
        self.pad_x = pad_x;
        self
    }

    /// Outer size for content of the given size.
    pub fn outer_size(&self, content_w: u16, content_h: u16) -> (u16, u16) {
        (
            content_w.saturating_add(self.pad_x.saturating_mul(2)).saturating_add(2),
            content_h.saturating_add(self.pad_y.saturating_mul(2)).saturating_add(2),
        )
    }

    pub fn wrap(&self, content: &Canvas) -> Canvas {
        let (w, h) = self.outer_size(content.width(), content.height());
        let mut out = Canvas::new(w, h);
        out.fill_rect(1, 1, w - 2, h - 2, OPAQUE_BLANK, self.fill);
        draw_rounded_border(&mut out, 0, 0, w, h, self.border);
        overlay(&mut out, content, 1 + self.pad_x, 1 + self.pad_y);
        out
    }
}

fn draw_rounded_border(c: &mut Canvas, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    c.put_char(x, y, '╭', style);
    c.put_char(x + w - 1, y, '╮', style);
    c.put_char(x, y + h - 1, '╰', style);
    c.put_char(x + w - 1, y + h - 1, '╯', style);

    for dx in 1..w - 1 {
        c.put_char(x + dx, y, '─', style);
        c.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        c.put_char(x, y + dy, '│', style);
        c.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Stack canvases top to bottom, each centered horizontally, with `gap`
/// transparent rows between neighbours.
pub fn vstack(parts: &[&Canvas], gap: u16) -> Canvas {
    let width = parts.iter().map(|p| p.width()).max().unwrap_or(0);
    let gaps = gap.saturating_mul(parts.len().saturating_sub(1) as u16);
    let height = parts
        .iter()
        .fold(gaps, |acc, p| acc.saturating_add(p.height()));

    let mut out = Canvas::new(width, height);
    let mut y = 0u16;
    for part in parts {
        overlay(&mut out, part, centered_offset(width, part.width()), y);
        y = y.saturating_add(part.height()).saturating_add(gap);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgb;

    #[test]
    fn text_block_keeps_spaces_transparent() {
        let b = TextBlock::new(&["a b"], CellStyle::DEFAULT);
        assert!(b.canvas().get(1, 0).unwrap().is_transparent());
        assert_eq!(b.size(), (3, 1));
    }

    #[test]
    fn opaque_text_block_hides_background() {
        let b = TextBlock::opaque(&["a b", "a"], CellStyle::DEFAULT);
        assert!(b.canvas().cells().iter().all(|c| !c.is_transparent()));
        assert_eq!(b.canvas().get(1, 0).unwrap().ch, OPAQUE_BLANK);
    }

    #[test]
    fn panel_draws_rounded_border_and_padding() {
        let border = CellStyle::fg(Rgb::new(0x58, 0xa6, 0xff));
        let content = Canvas::from_lines(&["hi"], CellStyle::DEFAULT);
        let p = Panel::new(border).wrap(&content);

        // 2 + 2*2 padding + 2 border = 8 wide; 1 + 2*1 + 2 = 5 tall
        assert_eq!((p.width(), p.height()), (8, 5));
        assert_eq!(p.get(0, 0).unwrap().ch, '╭');
        assert_eq!(p.get(7, 0).unwrap().ch, '╮');
        assert_eq!(p.get(0, 4).unwrap().ch, '╰');
        assert_eq!(p.get(7, 4).unwrap().ch, '╯');
        assert_eq!(p.get(0, 0).unwrap().style, border);
        assert_eq!(p.get(3, 2).unwrap().ch, 'h');
        assert_eq!(p.get(1, 1).unwrap().ch, OPAQUE_BLANK);
        assert!(p.cells().iter().all(|c| !c.is_transparent()));
    }

    #[test]
    fn vstack_centers_and_gaps() {
        let wide = Canvas::from_lines(&["wwww"], CellStyle::DEFAULT);
        let narrow = Canvas::from_lines(&["nn"], CellStyle::DEFAULT);
        let s = vstack(&[&wide, &narrow], 1);
        assert_eq!(s.to_text(), "wwww\n    \n nn ");
    }

    #[test]
    fn vstack_of_nothing_is_empty() {
        assert!(vstack(&[], 2).is_empty());
    }
}
