//! Shared input handling: normalized events, click targets, and pixel-to-cell
//! coordinate conversion.
//!
//! This module is step-agnostic. Each wizard step implements its own dispatch.

use ratzilla::ratatui::layout::Rect;

/// All possible input events, normalized from keyboard, mouse, and touch sources.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A printable character. Steps with a focused text field consume these as
    /// edits; everywhere else they act as shortcut keys.
    Char(char),
    Backspace,
    Enter,
    Esc,
    Up,
    Down,
    Left,
    Right,
    /// A click/tap on a registered target, identified by a semantic action ID.
    /// Each step defines its own action ID constants.
    Click(u16),
}

/// A region on screen that can be tapped/clicked to trigger an action.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    /// The rectangular region (in terminal cell coordinates) for hit testing.
    pub rect: Rect,
    /// Semantic action ID. Each step defines its own constants.
    pub action_id: u16,
}

/// Shared state between the render loop and the click handler.
///
/// The render pass clears and re-registers targets every frame, so targets
/// always describe the layout that is actually on screen.
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    /// Register a click target with a rectangular hit region and a semantic action ID.
    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        self.targets.push(ClickTarget { rect, action_id });
    }

    /// Convenience: register a full-row click target at the given row within an area.
    /// Rows outside the area are ignored.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.y + area.height {
            self.targets.push(ClickTarget {
                rect: Rect::new(area.x, row, area.width, 1),
                action_id,
            });
        }
    }

    /// Hit-test a terminal cell coordinate against all registered targets.
    /// Later-registered (topmost) targets win when targets overlap, matching
    /// typical UI layering.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            if col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height {
                Some(t.action_id)
            } else {
                None
            }
        })
    }
}

/// Determine whether a screen width (in columns) should use the narrow layout.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 60
}

/// Convert a pixel coordinate (relative to the grid container's top-left
/// corner) into a terminal cell `(col, row)`.
///
/// Returns `None` when the point lies outside the grid or the grid has no
/// measurable size yet.
pub fn pixel_to_cell(
    click_x: f64,
    click_y: f64,
    grid_width: f64,
    grid_height: f64,
    cols: u16,
    rows: u16,
) -> Option<(u16, u16)> {
    if grid_width <= 0.0 || grid_height <= 0.0 || cols == 0 || rows == 0 {
        return None;
    }
    if click_x < 0.0 || click_y < 0.0 {
        return None;
    }

    let col = (click_x / (grid_width / cols as f64)) as u16;
    let row = (click_y / (grid_height / rows as f64)) as u16;

    if col >= cols || row >= rows {
        return None;
    }
    Some((col, row))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── hit_test ───────────────────────────────────────────────────

    #[test]
    fn hit_test_basic() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 10, 80, 1), 1);
        cs.add_click_target(Rect::new(0, 11, 80, 1), 2);

        assert_eq!(cs.hit_test(5, 10), Some(1));
        assert_eq!(cs.hit_test(5, 11), Some(2));
    }

    #[test]
    fn hit_test_miss_returns_none() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 10, 80, 1), 1);

        assert_eq!(cs.hit_test(5, 9), None);
        assert_eq!(cs.hit_test(5, 11), None);
    }

    #[test]
    fn hit_test_column_precision() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 5, 10, 1), 1);
        cs.add_click_target(Rect::new(10, 5, 10, 1), 2);

        assert_eq!(cs.hit_test(9, 5), Some(1));
        assert_eq!(cs.hit_test(10, 5), Some(2));
        assert_eq!(cs.hit_test(20, 5), None);
    }

    #[test]
    fn hit_test_overlap_last_wins() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 5, 80, 1), 1);
        cs.add_click_target(Rect::new(5, 5, 10, 1), 2);

        assert_eq!(cs.hit_test(7, 5), Some(2));
        assert_eq!(cs.hit_test(0, 5), Some(1));
        assert_eq!(cs.hit_test(20, 5), Some(1));
    }

    #[test]
    fn hit_test_empty() {
        let cs = ClickState::new();
        assert_eq!(cs.hit_test(0, 0), None);
    }

    // ── add_row_target ─────────────────────────────────────────────

    #[test]
    fn row_target_within_area() {
        let mut cs = ClickState::new();
        let area = Rect::new(5, 10, 30, 5);
        cs.add_row_target(area, 12, 99);

        assert_eq!(cs.targets.len(), 1);
        assert_eq!(cs.hit_test(15, 12), Some(99));
        assert_eq!(cs.hit_test(4, 12), None); // left of area
    }

    #[test]
    fn row_target_outside_area_ignored() {
        let mut cs = ClickState::new();
        let area = Rect::new(5, 10, 30, 5);
        cs.add_row_target(area, 9, 99); // before area
        cs.add_row_target(area, 15, 98); // after area

        assert_eq!(cs.targets.len(), 0);
    }

    #[test]
    fn clear_targets_resets() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 1, 80, 1), 1);
        cs.clear_targets();
        assert_eq!(cs.targets.len(), 0);
        assert_eq!(cs.hit_test(0, 1), None);
    }

    // ── layout ─────────────────────────────────────────────────────

    #[test]
    fn narrow_layout_threshold() {
        assert!(is_narrow_layout(30));
        assert!(is_narrow_layout(59));
        assert!(!is_narrow_layout(60));
        assert!(!is_narrow_layout(80));
    }

    // ── pixel_to_cell ──────────────────────────────────────────────

    #[test]
    fn pixel_to_cell_basic() {
        // 80x30 grid at 10px per col, 15px per row
        assert_eq!(pixel_to_cell(0.0, 0.0, 800.0, 450.0, 80, 30), Some((0, 0)));
        assert_eq!(pixel_to_cell(9.0, 14.0, 800.0, 450.0, 80, 30), Some((0, 0)));
        assert_eq!(pixel_to_cell(10.0, 15.0, 800.0, 450.0, 80, 30), Some((1, 1)));
        assert_eq!(
            pixel_to_cell(799.0, 449.0, 800.0, 450.0, 80, 30),
            Some((79, 29))
        );
    }

    #[test]
    fn pixel_to_cell_out_of_bounds() {
        assert_eq!(pixel_to_cell(800.0, 10.0, 800.0, 450.0, 80, 30), None);
        assert_eq!(pixel_to_cell(10.0, 450.0, 800.0, 450.0, 80, 30), None);
        assert_eq!(pixel_to_cell(-1.0, 10.0, 800.0, 450.0, 80, 30), None);
        assert_eq!(pixel_to_cell(10.0, -1.0, 800.0, 450.0, 80, 30), None);
    }

    #[test]
    fn pixel_to_cell_unmeasured_grid() {
        assert_eq!(pixel_to_cell(10.0, 10.0, 0.0, 450.0, 80, 30), None);
        assert_eq!(pixel_to_cell(10.0, 10.0, 800.0, 0.0, 80, 30), None);
        assert_eq!(pixel_to_cell(10.0, 10.0, 800.0, 450.0, 0, 30), None);
        assert_eq!(pixel_to_cell(10.0, 10.0, 800.0, 450.0, 80, 0), None);
    }

    #[test]
    fn pixel_to_cell_fractional_cell_size() {
        // 24 rows in 400px → 16.67px per row
        assert_eq!(pixel_to_cell(0.0, 16.0, 400.0, 400.0, 40, 24), Some((0, 0)));
        assert_eq!(pixel_to_cell(0.0, 17.0, 400.0, 400.0, 40, 24), Some((0, 1)));
        assert_eq!(
            pixel_to_cell(0.0, 399.0, 400.0, 400.0, 40, 24),
            Some((0, 23))
        );
    }

    #[test]
    fn full_click_pipeline() {
        let mut cs = ClickState::new();
        cs.terminal_cols = 80;
        cs.terminal_rows = 30;
        cs.add_click_target(Rect::new(0, 11, 80, 1), 1);
        cs.add_click_target(Rect::new(0, 12, 80, 1), 2);

        let (grid_w, grid_h) = (800.0, 450.0);
        let cell_h = grid_h / 30.0;

        let (col, row) = pixel_to_cell(40.0, 11.0 * cell_h + 7.0, grid_w, grid_h, 80, 30).unwrap();
        assert_eq!(row, 11);
        assert_eq!(cs.hit_test(col, row), Some(1));
    }
}
