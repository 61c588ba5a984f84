//! Semantic action IDs for recommendations click targets.

/// Sort tab: +index 0..2 in [`super::logic::SortKey::ALL`] order.
pub const SORT_BASE: u16 = 10;

/// Open a course's detail view: +index into the sorted display order.
pub const VIEW_BASE: u16 = 20;
