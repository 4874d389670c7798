//! Shared, non-empty color palettes.

use std::ops::Index;
use std::rc::Rc;

use crate::{ConfigError, Rgb};

/// An ordered, non-empty sequence of colors.
///
/// Cloning is cheap: every clone refers to the same colors, so several
/// animated components can share one palette without copying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Rc<[Rgb]>,
}

impl Palette {
    /// ```
    /// use tui_lagoon_types::{ConfigError, Palette, Rgb};
    ///
    /// let p = Palette::new(vec![Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)]).unwrap();
    /// assert_eq!(p.len(), 2);
    /// assert_eq!(Palette::new(Vec::new()), Err(ConfigError::EmptyPalette));
    /// ```
    pub fn new(colors: Vec<Rgb>) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self {
            colors: colors.into(),
        })
    }

    /// Palette from a fixed, non-empty array. An empty array fails to compile.
    ///
    /// ```
    /// use tui_lagoon_types::{Palette, Rgb};
    ///
    /// const COLORS: [Rgb; 2] = [Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)];
    /// assert_eq!(Palette::from_array(COLORS).len(), 2);
    /// ```
    ///
    /// ```compile_fail
    /// use tui_lagoon_types::{Palette, Rgb};
    ///
    /// let _ = Palette::from_array::<0>([]);
    /// ```
    pub fn from_array<const N: usize>(colors: [Rgb; N]) -> Self {
        let () = NonEmpty::<N>::CHECK;
        Self {
            colors: Rc::from(colors.as_slice()),
        }
    }

    /// Parse every entry with [`Rgb::from_hex`]; entries that fail to parse are
    /// returned as the error value.
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, PaletteParseError> {
        let mut parsed = Vec::with_capacity(colors.len());
        for c in colors {
            let c = c.as_ref();
            match Rgb::from_hex(c) {
                Some(rgb) => parsed.push(rgb),
                None => return Err(PaletteParseError::BadColor(c.to_string())),
            }
        }
        Palette::new(parsed).map_err(PaletteParseError::Invalid)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Color at `index` modulo the palette length.
    #[inline]
    pub fn cycle(&self, index: usize) -> Rgb {
        self.colors[index % self.colors.len()]
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}

struct NonEmpty<const N: usize>;

impl<const N: usize> NonEmpty<N> {
    const CHECK: () = assert!(N > 0, "palette must contain at least one color");
}

impl Index<usize> for Palette {
    type Output = Rgb;

    fn index(&self, index: usize) -> &Rgb {
        &self.colors[index]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteParseError {
    BadColor(String),
    Invalid(ConfigError),
}

impl PaletteParseError {
    pub fn code(&self) -> &'static str {
        match self {
            PaletteParseError::BadColor(_) => "invalid_color",
            PaletteParseError::Invalid(e) => e.code(),
        }
    }
}

impl std::fmt::Display for PaletteParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaletteParseError::BadColor(c) => write!(f, "invalid color {:?} (expected #rrggbb)", c),
            PaletteParseError::Invalid(e) => std::fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for PaletteParseError {}
