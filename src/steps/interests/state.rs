//! Interest selection state and filtering.

use crate::data::{Interest, ALL_CATEGORY, CATEGORIES, INTERESTS};
use crate::store::StoredState;

/// Minimum number of interests before the wizard may continue.
pub const MIN_INTERESTS: usize = 3;

pub struct InterestsState {
    /// Selected interest ids in the order they were picked.
    pub selected: Vec<&'static str>,
    /// Active category filter tab ([`ALL_CATEGORY`] shows everything).
    pub active_category: &'static str,
    pub search_query: String,
    /// While focused, typed characters edit the search query.
    pub search_focused: bool,
    /// Keyboard cursor, as an index into the filtered view.
    pub cursor: usize,
}

impl InterestsState {
    /// Start from whatever selection the store already holds. Stored ids
    /// that no longer exist in the catalog are silently dropped.
    pub fn from_stored(stored: &StoredState) -> Self {
        let selected = stored
            .interests
            .iter()
            .flatten()
            .filter_map(|id| INTERESTS.iter().find(|i| i.id == *id).map(|i| i.id))
            .collect();
        Self {
            selected,
            active_category: ALL_CATEGORY,
            search_query: String::new(),
            search_focused: false,
            cursor: 0,
        }
    }

    /// The interests visible under the current category and search filters,
    /// in catalog order. Both filters compose; search matches name or
    /// description case-insensitively.
    pub fn filtered(&self) -> Vec<&'static Interest> {
        let query = self.search_query.to_lowercase();
        INTERESTS
            .iter()
            .filter(|i| self.active_category == ALL_CATEGORY || i.category == self.active_category)
            .filter(|i| {
                query.is_empty()
                    || i.name.to_lowercase().contains(&query)
                    || i.description.to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|&s| s == id)
    }

    /// Select or deselect an interest, keeping pick order for the rest.
    pub fn toggle(&mut self, id: &'static str) {
        match self.selected.iter().position(|&s| s == id) {
            Some(i) => {
                self.selected.remove(i);
            }
            None => self.selected.push(id),
        }
    }

    /// Toggle the interest under the keyboard cursor, if any.
    pub fn toggle_at_cursor(&mut self) -> bool {
        match self.filtered().get(self.cursor) {
            Some(interest) => {
                self.toggle(interest.id);
                true
            }
            None => false,
        }
    }

    pub fn can_continue(&self) -> bool {
        self.selected.len() >= MIN_INTERESTS
    }

    /// How many more picks the gate still needs.
    pub fn remaining(&self) -> usize {
        MIN_INTERESTS.saturating_sub(self.selected.len())
    }

    pub fn set_category(&mut self, category: &'static str) {
        self.active_category = category;
        self.cursor = 0;
    }

    /// Move the category tab left or right, wrapping.
    pub fn cycle_category(&mut self, forward: bool) {
        let n = CATEGORIES.len();
        let i = CATEGORIES
            .iter()
            .position(|c| c.id == self.active_category)
            .unwrap_or(0);
        let next = if forward { (i + 1) % n } else { (i + n - 1) % n };
        self.set_category(CATEGORIES[next].id);
    }

    pub fn search_push(&mut self, c: char) {
        self.search_query.push(c);
        self.cursor = 0;
    }

    pub fn search_backspace(&mut self) -> bool {
        let changed = self.search_query.pop().is_some();
        if changed {
            self.cursor = 0;
        }
        changed
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.cursor = 0;
    }

    pub fn move_cursor(&mut self, down: bool) {
        let len = self.filtered().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        if down {
            self.cursor = (self.cursor + 1).min(len - 1);
        } else {
            self.cursor = self.cursor.saturating_sub(1);
        }
    }
}
