//! Semantic action IDs for onboarding click targets.

/// Focus a form field: +index 0..5 in [`super::state::Field::ALL`] order.
pub const FIELD_BASE: u16 = 10;

/// Submit the form.
pub const SUBMIT: u16 = 20;
