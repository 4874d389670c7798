//! Double-click detection for terminals that only report single presses.
//!
//! Time is passed in explicitly (milliseconds from any monotonic origin) so
//! the tracker stays deterministic under test.

use crate::types::{LandingAction, DOUBLE_CLICK_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
    Single,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LastClick {
    x: u16,
    y: u16,
    at_ms: u64,
}

/// Remembers the previous left click.
#[derive(Debug, Clone, Default)]
pub struct ClickTracker {
    last: Option<LastClick>,
}

impl ClickTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a click at cell `(x, y)`. A click on the same cell within
    /// [`DOUBLE_CLICK_MS`] of the previous one is a double click; the state
    /// then resets so a third click starts over.
    pub fn register(&mut self, x: u16, y: u16, now_ms: u64) -> Click {
        let double = self.last.is_some_and(|last| {
            last.x == x && last.y == y && now_ms.saturating_sub(last.at_ms) <= DOUBLE_CLICK_MS
        });
        if double {
            self.last = None;
            Click::Double
        } else {
            self.last = Some(LastClick { x, y, at_ms: now_ms });
            Click::Single
        }
    }

    /// Turn a click on menu row `item` into an action: a single click
    /// selects, a double click confirms.
    pub fn menu_click(&mut self, x: u16, y: u16, item: usize, now_ms: u64) -> LandingAction {
        match self.register(x, y, now_ms) {
            Click::Single => LandingAction::Select(item),
            Click::Double => LandingAction::Confirm,
        }
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_click_on_same_cell_is_double() {
        let mut t = ClickTracker::new();
        assert_eq!(t.register(4, 2, 1_000), Click::Single);
        assert_eq!(t.register(4, 2, 1_000 + DOUBLE_CLICK_MS), Click::Double);
        // Third click starts over.
        assert_eq!(t.register(4, 2, 1_600), Click::Single);
    }

    #[test]
    fn slow_or_moved_clicks_are_single() {
        let mut t = ClickTracker::new();
        assert_eq!(t.register(4, 2, 0), Click::Single);
        assert_eq!(t.register(4, 2, DOUBLE_CLICK_MS + 1), Click::Single);
        assert_eq!(t.register(5, 2, DOUBLE_CLICK_MS + 2), Click::Single);
    }

    #[test]
    fn menu_click_selects_then_confirms() {
        let mut t = ClickTracker::new();
        assert_eq!(t.menu_click(10, 5, 3, 0), LandingAction::Select(3));
        assert_eq!(t.menu_click(10, 5, 3, 200), LandingAction::Confirm);
        t.reset();
        assert_eq!(t.menu_click(10, 5, 3, 300), LandingAction::Select(3));
    }
}
