//! Semantic action IDs for interest-selector click targets.

/// Category tab: +index 0..6 in [`crate::data::CATEGORIES`] order.
pub const CATEGORY_BASE: u16 = 10;

/// Continue to recommendations (gated on the minimum selection).
pub const CONTINUE: u16 = 20;

/// Clear the search query.
pub const CLEAR_SEARCH: u16 = 21;

/// Focus the search box.
pub const FOCUS_SEARCH: u16 = 22;

/// Toggle an interest: +index into the currently filtered view.
pub const INTEREST_BASE: u16 = 30;
