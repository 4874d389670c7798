//! Sine-based coordinate distortion and the wavy grid that uses it.
//!
//! The horizontal offset of a cell depends on its *row* and the vertical
//! offset on its *column*. That cross-coupling bends straight grid lines into
//! moving curves instead of sliding them along an axis.

use log::debug;

use crate::layer::Layer;
use crate::types::{
    Canvas, CellStyle, ConfigError, Rgb, DEFAULT_AMPLITUDE, DEFAULT_FREQUENCY, DEFAULT_GRID_SIZE,
    DEFAULT_WAVE_SPEED,
};

/// Per-axis sine offset: `amplitude * sin(position / frequency + frame / speed)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveField {
    amplitude: f64,
    frequency: f64,
    speed: f64,
}

impl Default for WaveField {
    fn default() -> Self {
        Self {
            amplitude: DEFAULT_AMPLITUDE,
            frequency: DEFAULT_FREQUENCY,
            speed: DEFAULT_WAVE_SPEED,
        }
    }
}

impl WaveField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Wave height in cells. Zero and negative values are allowed
    /// (zero disables distortion, negative mirrors it).
    pub fn set_amplitude(&mut self, amplitude: f64) -> Result<(), ConfigError> {
        if !amplitude.is_finite() {
            return Err(ConfigError::NotFinite("amplitude"));
        }
        self.amplitude = amplitude;
        Ok(())
    }

    /// Higher values give longer, gentler waves.
    pub fn set_frequency(&mut self, frequency: f64) -> Result<(), ConfigError> {
        self.frequency = positive(frequency, "frequency")?;
        Ok(())
    }

    /// Frames per radian of phase; higher is slower.
    pub fn set_speed(&mut self, speed: f64) -> Result<(), ConfigError> {
        self.speed = positive(speed, "speed")?;
        Ok(())
    }

    #[inline]
    fn wave(&self, frame: u64, position: f64) -> f64 {
        self.amplitude * (position / self.frequency + frame as f64 / self.speed).sin()
    }

    /// Horizontal offset for a cell on row `y`.
    #[inline]
    pub fn offset_x(&self, frame: u64, y: f64) -> f64 {
        self.wave(frame, y)
    }

    /// Vertical offset for a cell in column `x`.
    #[inline]
    pub fn offset_y(&self, frame: u64, x: f64) -> f64 {
        self.wave(frame, x)
    }

    /// Both offsets for the cell at `(x, y)`.
    ///
    /// ```
    /// use tui_lagoon_core::WaveField;
    ///
    /// let field = WaveField::new();
    /// assert_eq!(field.apply(0, 0.0, 0.0), (0.0, 0.0));
    /// ```
    #[inline]
    pub fn apply(&self, frame: u64, x: f64, y: f64) -> (f64, f64) {
        (self.offset_x(frame, y), self.offset_y(frame, x))
    }
}

fn positive(value: f64, name: &'static str) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive(name))
    }
}

/// Colors for the glyphs of a [`WaveGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridColors {
    /// `+` where a vertical and a horizontal line cross
    pub intersection: Rgb,
    /// `│`
    pub vertical: Rgb,
    /// `─`
    pub horizontal: Rgb,
}

impl Default for GridColors {
    /// Purple scheme.
    fn default() -> Self {
        Self {
            intersection: Rgb::new(0xaf, 0x00, 0xff),
            vertical: Rgb::new(0x5f, 0x5f, 0xaf),
            horizontal: Rgb::new(0x5f, 0x5f, 0xaf),
        }
    }
}

/// Which part of the grid a cell falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLine {
    None,
    Vertical,
    Horizontal,
    Intersection,
}

impl GridLine {
    pub fn glyph(self) -> char {
        match self {
            GridLine::None => ' ',
            GridLine::Vertical => '│',
            GridLine::Horizontal => '─',
            GridLine::Intersection => '+',
        }
    }
}

/// Full-screen grid whose lines are bent by a [`WaveField`].
#[derive(Debug, Clone)]
pub struct WaveGrid {
    width: u16,
    height: u16,
    frame: u64,
    grid_size: u16,
    field: WaveField,
    colors: GridColors,
}

impl WaveGrid {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            frame: 0,
            grid_size: DEFAULT_GRID_SIZE,
            field: WaveField::default(),
            colors: GridColors::default(),
        }
    }

    pub fn with_colors(mut self, colors: GridColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn grid_size(&self) -> u16 {
        self.grid_size
    }

    pub fn set_grid_size(&mut self, size: u16) -> Result<(), ConfigError> {
        if size == 0 {
            return Err(ConfigError::NonPositive("grid_size"));
        }
        self.grid_size = size;
        Ok(())
    }

    pub fn colors(&self) -> GridColors {
        self.colors
    }

    pub fn set_colors(&mut self, colors: GridColors) {
        self.colors = colors;
    }

    pub fn field(&self) -> &WaveField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut WaveField {
        &mut self.field
    }

    /// Classify the cell at `(x, y)` for the current frame.
    ///
    /// The distorted coordinate is truncated toward zero before the
    /// `mod grid_size` test, so lines land on whole cells.
    pub fn line_at(&self, x: u16, y: u16) -> GridLine {
        let (ox, oy) = self.field.apply(self.frame, x as f64, y as f64);
        let gx = (x as f64 + ox) as i64;
        let gy = (y as f64 + oy) as i64;
        let size = self.grid_size as i64;

        match (gx % size == 0, gy % size == 0) {
            (true, true) => GridLine::Intersection,
            (true, false) => GridLine::Vertical,
            (false, true) => GridLine::Horizontal,
            (false, false) => GridLine::None,
        }
    }
}

impl Layer for WaveGrid {
    fn update(&mut self) {
        self.frame += 1;
    }

    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn render_into(&self, canvas: &mut Canvas) {
        canvas.resize(self.width, self.height);

        for y in 0..self.height {
            for x in 0..self.width {
                let line = self.line_at(x, y);
                let color = match line {
                    GridLine::None => continue,
                    GridLine::Vertical => self.colors.vertical,
                    GridLine::Horizontal => self.colors.horizontal,
                    GridLine::Intersection => self.colors.intersection,
                };
                canvas.put_char(x, y, line.glyph(), CellStyle::fg(color));
            }
        }
    }

    fn resize(&mut self, width: u16, height: u16) {
        debug!("wave grid resized to {}x{}", width, height);
        self.width = width;
        self.height = height;
    }
}
