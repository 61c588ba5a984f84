//! Reusable clickable UI components.
//!
//! Each component encapsulates both rendering and click target registration,
//! so the hit regions always match what was actually drawn.
//!
//! - [`TabBar`] — horizontal tab navigation (category filters, sort modes,
//!   detail tabs).
//! - [`ClickableList`] — vertical list of lines with per-row click targets
//!   and optional scrolling.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;

// ── TabBar ─────────────────────────────────────────────────────

/// A horizontal tab bar.
///
/// Renders tabs as one row of styled labels separated by a configurable
/// separator, and registers click targets computed from the rendered label
/// widths (emoji and other wide glyphs included). Each target covers its
/// label plus half of the adjacent separators; the first and last tabs
/// extend to the area edges so there are no dead gaps.
pub struct TabBar<'a> {
    tabs: Vec<(String, Style, u16)>,
    separator: &'a str,
    block: Option<Block<'a>>,
}

impl<'a> TabBar<'a> {
    pub fn new(separator: &'a str) -> Self {
        Self {
            tabs: Vec::new(),
            separator,
            block: None,
        }
    }

    /// Add a tab with its label, style, and action ID.
    pub fn tab(mut self, label: impl Into<String>, style: Style, action_id: u16) -> Self {
        self.tabs.push((label.into(), style, action_id));
        self
    }

    /// Wrap the tab bar in a [`Block`]. Click targets are adjusted for the
    /// block's borders via `Block::inner()`.
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Render the tab bar and register click targets.
    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let sep_width = Line::from(self.separator).width() as u16;
        let mut spans: Vec<Span> = Vec::new();
        let mut widths: Vec<(u16, u16)> = Vec::new();

        for (i, (label, style, action_id)) in self.tabs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    self.separator,
                    Style::default().fg(Color::DarkGray),
                ));
            }
            let padded = format!(" {} ", label);
            widths.push((Line::from(padded.as_str()).width() as u16, *action_id));
            spans.push(Span::styled(padded, *style));
        }

        let inner = match &self.block {
            Some(block) => block.inner(area),
            None => area,
        };

        let line = Line::from(spans);
        let paragraph = match self.block {
            Some(block) => Paragraph::new(line).block(block),
            None => Paragraph::new(line),
        };
        f.render_widget(paragraph, area);

        // Use inner x/width for horizontal accuracy, outer y/height for
        // better tap tolerance on the full bar.
        register_tab_targets(cs, &widths, sep_width, inner.x, area.y, inner.width, area.height.max(1));
    }
}

/// Compute and register the hit regions for a row of tab labels.
///
/// `tab_widths` holds `(display_width, action_id)` for each padded label.
/// Boundaries between adjacent tabs fall on the midpoint of the separator.
fn register_tab_targets(
    cs: &mut ClickState,
    tab_widths: &[(u16, u16)],
    separator_width: u16,
    x: u16,
    y: u16,
    total_width: u16,
    height: u16,
) {
    let n = tab_widths.len();
    if n == 0 || total_width == 0 {
        return;
    }

    // Starting column of each tab label within the bar
    let mut starts: Vec<u16> = Vec::with_capacity(n);
    let mut cursor: u16 = 0;
    for (i, &(w, _)) in tab_widths.iter().enumerate() {
        if i > 0 {
            cursor += separator_width;
        }
        starts.push(cursor);
        cursor += w;
    }

    for i in 0..n {
        let (_, action_id) = tab_widths[i];

        let left = if i == 0 {
            0
        } else {
            let prev_end = starts[i - 1] + tab_widths[i - 1].0;
            prev_end + (starts[i] - prev_end) / 2
        };

        let right = if i == n - 1 {
            total_width
        } else {
            let cur_end = starts[i] + tab_widths[i].0;
            cur_end + (starts[i + 1] - cur_end) / 2
        };

        let w = right.saturating_sub(left);
        if w > 0 {
            cs.add_click_target(Rect::new(x + left, y, w, height), action_id);
        }
    }
}

// ── ClickableList ──────────────────────────────────────────────

/// A builder that pairs rendered [`Line`]s with click actions.
///
/// Lines are annotated as clickable when added; after rendering, a single
/// [`register_targets`](ClickableList::register_targets) call registers hit
/// regions at the rows the lines actually occupy, accounting for scroll.
/// Inserting or removing lines earlier in the list moves the targets
/// automatically.
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)` pairs — line_index is the index into `lines`.
    actions: Vec<(u16, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Add a non-clickable line.
    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    /// Add a clickable line with a semantic action ID.
    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        let idx = self.lines.len() as u16;
        self.actions.push((idx, action_id));
        self.lines.push(line);
    }

    /// Total number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Consume the builder, returning the lines for rendering.
    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register click targets for all clickable lines.
    ///
    /// * `inner` — the content rect the lines are drawn into (after any
    ///   borders, i.e. `block.inner(area)`).
    /// * `scroll` — vertical scroll offset in rows (0 if not scrollable);
    ///   must match the offset passed to `Paragraph::scroll`.
    ///
    /// Each logical line is assumed to occupy one visual row (the list is
    /// rendered without wrapping); lines scrolled out of view or clipped
    /// by the rect register nothing.
    pub fn register_targets(&self, inner: Rect, cs: &mut ClickState, scroll: u16) {
        for &(line_idx, action_id) in &self.actions {
            if line_idx < scroll {
                continue;
            }
            let row = inner.y + (line_idx - scroll);
            if row >= inner.y + inner.height {
                continue;
            }
            cs.add_row_target(inner, row, action_id);
        }
    }
}
