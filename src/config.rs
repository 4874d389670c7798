//! JSON settings file.
//!
//! Every field is optional. Values are applied through the validating
//! setters of each effect; a rejected value is logged and the effect keeps
//! its previous setting. Only unreadable or malformed files are errors.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::engine::{AnimationClock, LandingPage};
use crate::types::{ConfigError, Palette, PaletteParseError, TICK_MS};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LagoonConfig {
    pub tick_ms: Option<u32>,
    pub no_color: bool,
    pub grid: GridConfig,
    pub rainbow: RainbowConfig,
    pub metaballs: MetaballConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub grid_size: Option<u16>,
    pub amplitude: Option<f64>,
    pub frequency: Option<f64>,
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RainbowConfig {
    /// `#rrggbb` strings
    pub colors: Option<Vec<String>>,
    pub speed: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaballConfig {
    /// One glyph per level, emptiest first
    pub gradient: Option<String>,
    pub thresholds: Option<Vec<f64>>,
}

impl LagoonConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| anyhow!("config: cannot read {}: {}", path.display(), e))?;
        Self::from_json(&text).map_err(|e| anyhow!("config: {}: {}", path.display(), e))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Clock for this configuration; `fps` (from the command line) wins.
    pub fn clock(&self, fps: Option<u32>) -> AnimationClock {
        match fps {
            Some(fps) => AnimationClock::from_fps(fps),
            None => AnimationClock::new(self.tick_ms.unwrap_or(TICK_MS)),
        }
    }

    /// Push every present setting into `page`. Returns how many were rejected.
    pub fn apply(&self, page: &mut LandingPage) -> usize {
        let mut rejected = 0usize;

        let grid = page.grid_mut();
        if let Some(size) = self.grid.grid_size {
            note(&mut rejected, "grid.grid_size", grid.set_grid_size(size));
        }
        if let Some(a) = self.grid.amplitude {
            note(&mut rejected, "grid.amplitude", grid.field_mut().set_amplitude(a));
        }
        if let Some(f) = self.grid.frequency {
            note(&mut rejected, "grid.frequency", grid.field_mut().set_frequency(f));
        }
        if let Some(s) = self.grid.speed {
            note(&mut rejected, "grid.speed", grid.field_mut().set_speed(s));
        }

        let cycler = page.title_cycler_mut();
        if let Some(colors) = &self.rainbow.colors {
            let r = Palette::from_hex(colors.as_slice()).map(|p| cycler.set_palette(p));
            note(&mut rejected, "rainbow.colors", r);
        }
        if let Some(speed) = self.rainbow.speed {
            note(&mut rejected, "rainbow.speed", cycler.set_speed(speed));
        }

        let m = &self.metaballs;
        if m.gradient.is_some() || m.thresholds.is_some() {
            let lava = page.lava_mut();
            let glyphs = match &m.gradient {
                Some(g) => g.chars().collect(),
                None => lava.gradient().to_vec(),
            };
            let thresholds = m
                .thresholds
                .clone()
                .unwrap_or_else(|| lava.thresholds().to_vec());
            note(
                &mut rejected,
                "metaballs.gradient",
                lava.set_gradient(glyphs, thresholds),
            );
        }

        rejected
    }
}

/// Setter errors that carry a stable code for the log.
trait Rejection: fmt::Display {
    fn code(&self) -> &'static str;
}

impl Rejection for ConfigError {
    fn code(&self) -> &'static str {
        ConfigError::code(*self)
    }
}

impl Rejection for PaletteParseError {
    fn code(&self) -> &'static str {
        PaletteParseError::code(self)
    }
}

fn describe<E: Rejection>(what: &str, e: &E) -> String {
    format!("{} ({}): {}", what, e.code(), e)
}

fn note<E: Rejection>(rejected: &mut usize, what: &str, r: Result<(), E>) {
    if let Err(e) = r {
        warn!("config: ignoring {}", describe(what, &e));
        *rejected += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_all_defaults() {
        let cfg = LagoonConfig::from_json("{}").unwrap();
        assert_eq!(cfg, LagoonConfig::default());
        assert_eq!(cfg.clock(None).interval_ms(), TICK_MS as u64);
    }

    #[test]
    fn fps_overrides_tick_ms() {
        let cfg = LagoonConfig::from_json(r#"{"tick_ms": 100}"#).unwrap();
        assert_eq!(cfg.clock(None).interval_ms(), 100);
        assert_eq!(cfg.clock(Some(40)).interval_ms(), 25);
    }

    #[test]
    fn apply_keeps_previous_value_on_rejection() {
        let cfg = LagoonConfig::from_json(
            r##"{
                "grid": {"grid_size": 0, "amplitude": 3.5, "frequency": -1.0},
                "rainbow": {"colors": ["#ff0000", "#00ff00"], "speed": 2},
                "metaballs": {"gradient": " .:#", "thresholds": [0.5, 1.0]}
            }"##,
        )
        .unwrap();
        let mut page = LandingPage::new(80, 30);
        let rejected = cfg.apply(&mut page);

        // grid_size 0, negative frequency, 4 glyphs with 2 thresholds
        assert_eq!(rejected, 3);
        let grid = page.grid_mut();
        assert_eq!(grid.grid_size(), 10);
        assert_eq!(grid.field().amplitude(), 3.5);
        assert_eq!(grid.field().frequency(), 5.0);
        let cycler = page.title_cycler_mut();
        assert_eq!(cycler.palette().len(), 2);
        assert_eq!(cycler.speed(), 2);
        assert_eq!(page.lava_mut().gradient().len(), 5);
    }

    #[test]
    fn thresholds_alone_reuse_current_gradient() {
        let cfg =
            LagoonConfig::from_json(r#"{"metaballs": {"thresholds": [0.2, 0.6, 1.2, 2.0]}}"#)
                .unwrap();
        let mut page = LandingPage::new(40, 20);
        assert_eq!(cfg.apply(&mut page), 0);
        assert_eq!(page.lava_mut().thresholds(), &[0.2, 0.6, 1.2, 2.0]);
    }

    #[test]
    fn bad_palette_is_rejected() {
        let cfg =
            LagoonConfig::from_json(r##"{"rainbow": {"colors": ["#zzzzzz"]}}"##).unwrap();
        let mut page = LandingPage::new(40, 20);
        assert_eq!(cfg.apply(&mut page), 1);
        assert_eq!(page.title_cycler_mut().palette().len(), 6);
    }

    #[test]
    fn rejections_are_logged_with_their_code() {
        assert_eq!(
            describe("grid.speed", &ConfigError::NonPositive("speed")),
            "grid.speed (invalid_number): speed must be a finite value greater than zero"
        );
        let bad = PaletteParseError::BadColor("#zzzzzz".to_string());
        assert!(describe("rainbow.colors", &bad).starts_with("rainbow.colors (invalid_color): "));
        let empty = PaletteParseError::Invalid(ConfigError::EmptyPalette);
        assert!(describe("rainbow.colors", &empty).contains("(empty_palette)"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(LagoonConfig::from_json("{ not json").is_err());
        assert!(LagoonConfig::from_json(r#"{"grid": {"grid_size": -3}}"#).is_err());
    }
}
