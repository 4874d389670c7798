//! LandingPage: the animated start screen.
//!
//! Layers, bottom to top:
//! 1. wavy grid
//! 2. lava lamp (three repelling blobs)
//! 3. foreground: rainbow title panel, two blank rows, menu panel
//!
//! Compositing is per cell, so grid lines stay visible between blobs and
//! both show around the panels.

use log::{debug, warn};

use crate::core::{
    centered_offset, vstack, Blob, Compositor, GridColors, Layer, MetaballEngine, Panel,
    RainbowCycler, RainbowText, WaveGrid,
};
use crate::theme;
use crate::types::{Canvas, CellStyle, LandingAction, Palette};

/// Block-letter title art.
pub const TITLE_ART: [&str; 6] = [
    " ██████╗ ██╗  ██╗      ████████╗██╗   ██╗██╗",
    "██╔════╝ ██║  ██║      ╚══██╔══╝██║   ██║██║",
    "██║  ███╗███████║ █████╗  ██║   ██║   ██║██║",
    "██║   ██║██╔══██║ ╚════╝  ██║   ██║   ██║██║",
    "╚██████╔╝██║  ██║         ██║   ╚██████╔╝██║",
    " ╚═════╝ ╚═╝  ╚═╝         ╚═╝    ╚═════╝ ╚═╝",
];

pub const MENU_ITEMS: [&str; 6] = [
    "Pull Requests",
    "Issues",
    "Repositories",
    "Actions",
    "Gists",
    "Plugins",
];

/// Rows between the title panel and the menu panel.
const PANEL_GAP: u16 = 2;

const MARKER: &str = "▶ ";

/// Where the foreground panels land for a given terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub title_x: u16,
    pub title_y: u16,
    pub menu_x: u16,
    pub menu_y: u16,
    pub menu_w: u16,
    pub menu_h: u16,
}

pub struct LandingPage {
    width: u16,
    height: u16,
    frame: u64,
    grid: WaveGrid,
    lava: MetaballEngine,
    title: RainbowText,
    title_panel: Panel,
    menu_panel: Panel,
    menu_items: Vec<String>,
    selected: usize,
}

impl LandingPage {
    pub fn new(width: u16, height: u16) -> Self {
        let grid = WaveGrid::new(width, height).with_colors(GridColors {
            intersection: theme::DARK_TEAL,
            vertical: theme::GRID_DARK,
            horizontal: theme::GRID_DARK,
        });

        let mut cycler = RainbowCycler::with_palette(Palette::from_array(theme::TITLE_COLORS));
        cycler.set_passthrough("╚═╝", CellStyle::fg(theme::MUTED));

        Self {
            width,
            height,
            frame: 0,
            grid,
            lava: ocean_lava_lamp(width, height),
            title: RainbowText::new(TITLE_ART, cycler),
            title_panel: Panel::new(CellStyle::fg(theme::CYAN)),
            menu_panel: Panel::new(CellStyle::fg(theme::TEAL)),
            menu_items: MENU_ITEMS.iter().map(|s| s.to_string()).collect(),
            selected: 0,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn grid_mut(&mut self) -> &mut WaveGrid {
        &mut self.grid
    }

    pub fn lava_mut(&mut self) -> &mut MetaballEngine {
        &mut self.lava
    }

    pub fn title_cycler_mut(&mut self) -> &mut RainbowCycler {
        self.title.cycler_mut()
    }

    pub fn menu_items(&self) -> &[String] {
        &self.menu_items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_label(&self) -> &str {
        &self.menu_items[self.selected]
    }

    /// Advance every animated layer by one tick.
    pub fn tick(&mut self) {
        self.frame += 1;
        crate::tick_layers(&mut [&mut self.grid, &mut self.lava, &mut self.title]);
    }

    /// Rebuild everything at the new size. Zero dimensions give an empty frame.
    pub fn resize(&mut self, width: u16, height: u16) {
        debug!("landing page resized to {}x{}", width, height);
        self.width = width;
        self.height = height;
        self.grid.resize(width, height);
        self.lava.resize(width, height);
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.menu_items.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.menu_items.len() - 1);
    }

    /// Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.menu_items.len() {
            self.selected = index;
        }
    }

    /// Apply the selection-changing actions; `Confirm` and `Quit` are left
    /// to the host and reported back as `false`.
    pub fn apply(&mut self, action: LandingAction) -> bool {
        match action {
            LandingAction::SelectNext => self.select_next(),
            LandingAction::SelectPrev => self.select_prev(),
            LandingAction::Select(i) => self.select(i),
            LandingAction::Confirm | LandingAction::Quit => return false,
        }
        true
    }

    fn menu_canvas(&self) -> Canvas {
        let label_w = self
            .menu_items
            .iter()
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(0);
        let w = (label_w + MARKER.chars().count()) as u16;
        let mut canvas = Canvas::new(w, self.menu_items.len() as u16);

        let marker = CellStyle::fg(self.title.cycler().color_at(self.selected));
        let selected = CellStyle::fg(theme::SELECTION).bold();
        let normal = CellStyle::fg(theme::TEXT_LIGHT);
        for (i, label) in self.menu_items.iter().enumerate() {
            let y = i as u16;
            if i == self.selected {
                canvas.put_str(0, y, MARKER, marker);
                canvas.put_str(2, y, label, selected);
            } else {
                canvas.put_str(2, y, label, normal);
            }
        }
        canvas
    }

    /// Title panel above menu panel, as one layer.
    pub fn foreground(&self) -> Canvas {
        let title = self.title_panel.wrap(&self.title.render());
        let menu = self.menu_panel.wrap(&self.menu_canvas());
        vstack(&[&title, &menu], PANEL_GAP)
    }

    /// Panel positions for the current size; the same arithmetic the
    /// compositor uses to center the foreground.
    pub fn layout(&self) -> Layout {
        let (art_w, art_h) = self.title.size();
        let (title_w, title_h) = self.title_panel.outer_size(art_w, art_h);
        let (menu_w, menu_h) = {
            let content_w = self
                .menu_items
                .iter()
                .map(|s| s.chars().count())
                .max()
                .unwrap_or(0)
                + MARKER.chars().count();
            self.menu_panel
                .outer_size(content_w as u16, self.menu_items.len() as u16)
        };
        let fg_w = title_w.max(menu_w);
        let fg_h = title_h.saturating_add(PANEL_GAP).saturating_add(menu_h);
        let fg_x = centered_offset(self.width, fg_w);
        let fg_y = centered_offset(self.height, fg_h);

        Layout {
            title_x: fg_x + centered_offset(fg_w, title_w),
            title_y: fg_y,
            menu_x: fg_x + centered_offset(fg_w, menu_w),
            menu_y: fg_y.saturating_add(title_h).saturating_add(PANEL_GAP),
            menu_w,
            menu_h,
        }
    }

    /// Menu row under terminal cell `(x, y)`, if any. The padding columns of
    /// a row count; the border does not.
    pub fn menu_item_at(&self, x: u16, y: u16) -> Option<usize> {
        let l = self.layout();
        let first_row = l.menu_y + 1 + self.menu_panel.pad_y;
        let inside_x = x > l.menu_x && x < l.menu_x.saturating_add(l.menu_w).saturating_sub(1);
        if !inside_x || y < first_row || x >= self.width || y >= self.height {
            return None;
        }
        let row = (y - first_row) as usize;
        (row < self.menu_items.len()).then_some(row)
    }

    /// Composite the full frame into `out`.
    pub fn render_into(&self, out: &mut Canvas) {
        if self.width == 0 || self.height == 0 {
            out.resize(self.width, self.height);
            return;
        }
        let fg = self.foreground();

        let mut comp = Compositor::new(self.width, self.height);
        comp.add_layer(&self.grid);
        comp.add_layer(&self.lava);
        comp.add_layer(&fg);
        comp.composite_into(out);
    }

    /// Convenience helper that allocates a new canvas.
    pub fn render(&self) -> Canvas {
        let mut out = Canvas::new(self.width, self.height);
        self.render_into(&mut out);
        out
    }
}

/// Three blobs in the top-left, top-right and bottom-center, drifting in
/// different directions.
fn ocean_lava_lamp(width: u16, height: u16) -> MetaballEngine {
    let (w, h) = (width as f64, height as f64);
    let presets = [
        (w / 6.0, h / 6.0, 0.3, 0.2, 9.0, theme::CYAN),
        (w * 5.0 / 6.0, h / 5.0, -0.25, 0.15, 10.0, theme::TEAL),
        (w / 2.0, h * 4.0 / 5.0, 0.2, -0.3, 8.0, theme::SEA_GREEN),
    ];

    let mut lava = MetaballEngine::lava_lamp(width, height);
    for (x, y, vx, vy, r, color) in presets {
        if let Err(e) = Blob::new(x, y, vx, vy, r, color).and_then(|b| lava.add_blob(b)) {
            warn!("skipping lava lamp blob: {}", e);
        }
    }
    lava
}
