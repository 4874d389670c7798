//! Ocean color scheme (GitHub dark-mode inspired).

use crate::types::Rgb;

pub const MID_BLUE: Rgb = Rgb::new(0x16, 0x1b, 0x22);
pub const CYAN: Rgb = Rgb::new(0x58, 0xa6, 0xff);
pub const TEAL: Rgb = Rgb::new(0x39, 0xc5, 0xcf);
pub const DARK_TEAL: Rgb = Rgb::new(0x1f, 0x6f, 0xeb);
pub const SEA_GREEN: Rgb = Rgb::new(0x56, 0xd3, 0x64);
pub const MUTED: Rgb = Rgb::new(0x8b, 0x94, 0x9e);
pub const NAVY_BLUE: Rgb = Rgb::new(0x38, 0x8b, 0xfd);
pub const GRID_DARK: Rgb = Rgb::new(0x21, 0x26, 0x2d);
pub const TEXT_LIGHT: Rgb = Rgb::new(0xc9, 0xd1, 0xd9);
pub const SELECTION: Rgb = Rgb::new(0x3f, 0xb9, 0x50);

/// Title gradient, dark blue through cyan and teal to green.
pub const TITLE_COLORS: [Rgb; 6] = [NAVY_BLUE, MID_BLUE, CYAN, TEAL, SEA_GREEN, DARK_TEAL];
