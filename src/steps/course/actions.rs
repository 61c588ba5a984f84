//! Semantic action IDs for course-detail click targets.

/// Detail tab: +index 0..4 in [`super::DetailTab::ALL`] order.
pub const TAB_BASE: u16 = 10;
