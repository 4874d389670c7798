//! Per-character palette cycling for text.
//!
//! Character `i` of line `l` gets `palette[(i + l + frame / speed) % len]`.
//! Adding the line index makes the colors run diagonally across a block of
//! text; dividing the frame by `speed` holds each color for `speed` ticks.

use crate::layer::Layer;
use crate::types::{
    Canvas, CellStyle, ConfigError, Palette, Rgb, DEFAULT_RAINBOW_SPEED,
};

/// xterm 196, 214, 226, 46, 51, 39, 201.
const DEFAULT_COLORS: [Rgb; 7] = [
    Rgb::new(0xff, 0x00, 0x00),
    Rgb::new(0xff, 0xaf, 0x00),
    Rgb::new(0xff, 0xff, 0x00),
    Rgb::new(0x00, 0xff, 0x00),
    Rgb::new(0x00, 0xff, 0xff),
    Rgb::new(0x00, 0xaf, 0xff),
    Rgb::new(0xff, 0x00, 0xff),
];

#[derive(Debug, Clone)]
pub struct RainbowCycler {
    frame: u64,
    palette: Palette,
    speed: u32,
    passthrough: Vec<char>,
    passthrough_style: CellStyle,
}

impl Default for RainbowCycler {
    fn default() -> Self {
        Self::new()
    }
}

impl RainbowCycler {
    /// Red to magenta, shifting every [`DEFAULT_RAINBOW_SPEED`] frames.
    pub fn new() -> Self {
        Self::with_palette(Palette::from_array(DEFAULT_COLORS))
    }

    pub fn with_palette(palette: Palette) -> Self {
        Self {
            frame: 0,
            palette,
            speed: DEFAULT_RAINBOW_SPEED,
            passthrough: Vec::new(),
            passthrough_style: CellStyle::DEFAULT,
        }
    }

    pub fn update(&mut self) {
        self.frame += 1;
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Replace the palette. A [`Palette`] is non-empty by construction.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Frames before the palette advances by one; larger is slower.
    pub fn set_speed(&mut self, speed: u32) -> Result<(), ConfigError> {
        if speed == 0 {
            return Err(ConfigError::NonPositive("speed"));
        }
        self.speed = speed;
        Ok(())
    }

    /// Draw `glyphs` verbatim in `style` instead of coloring them.
    pub fn set_passthrough(&mut self, glyphs: &str, style: CellStyle) {
        self.passthrough = glyphs.chars().collect();
        self.passthrough_style = style;
    }

    /// Color for position `index` on the current frame.
    ///
    /// Exposed so non-text elements (a selection marker, say) can stay in
    /// sync with the text.
    ///
    /// ```
    /// use tui_lagoon_core::RainbowCycler;
    ///
    /// let mut c = RainbowCycler::new();
    /// let first = c.color_at(0);
    /// for _ in 0..5 {
    ///     c.update();
    /// }
    /// assert_eq!(c.color_at(0), c.palette()[1]);
    /// assert_eq!(c.color_at(6), first);
    /// ```
    #[inline]
    pub fn color_at(&self, index: usize) -> Rgb {
        let shift = (self.frame / self.speed as u64) % self.palette.len() as u64;
        self.palette.cycle(index % self.palette.len() + shift as usize)
    }

    /// Color a single line of text.
    pub fn render(&self, text: &str) -> Canvas {
        self.render_lines(&[text])
    }

    /// Color several lines; each line's colors are shifted by its index.
    pub fn render_lines<S: AsRef<str>>(&self, lines: &[S]) -> Canvas {
        let mut canvas = Canvas::new(0, 0);
        self.render_lines_into(lines, &mut canvas);
        canvas
    }

    pub fn render_lines_into<S: AsRef<str>>(&self, lines: &[S], canvas: &mut Canvas) {
        let (w, h) = text_size(lines);
        canvas.resize(w, h);

        for (row, line) in lines.iter().enumerate().take(h as usize) {
            for (col, ch) in line.as_ref().chars().enumerate().take(w as usize) {
                if ch == ' ' {
                    continue;
                }
                let style = if self.passthrough.contains(&ch) {
                    self.passthrough_style
                } else {
                    CellStyle::fg(self.color_at(col + row)).bold()
                };
                canvas.put_char(col as u16, row as u16, ch, style);
            }
        }
    }
}

fn text_size<S: AsRef<str>>(lines: &[S]) -> (u16, u16) {
    let w = lines
        .iter()
        .map(|l| l.as_ref().chars().count())
        .max()
        .unwrap_or(0);
    (w.min(u16::MAX as usize) as u16, lines.len().min(u16::MAX as usize) as u16)
}

/// Fixed lines of text recolored by a [`RainbowCycler`] every tick.
#[derive(Debug, Clone)]
pub struct RainbowText {
    lines: Vec<String>,
    cycler: RainbowCycler,
}

impl RainbowText {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>, cycler: RainbowCycler) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            cycler,
        }
    }

    pub fn cycler(&self) -> &RainbowCycler {
        &self.cycler
    }

    pub fn cycler_mut(&mut self) -> &mut RainbowCycler {
        &mut self.cycler
    }
}

impl Layer for RainbowText {
    fn update(&mut self) {
        self.cycler.update();
    }

    fn size(&self) -> (u16, u16) {
        text_size(&self.lines)
    }

    fn render_into(&self, canvas: &mut Canvas) {
        self.cycler.render_lines_into(&self.lines, canvas);
    }
}
