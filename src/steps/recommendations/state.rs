//! Recommendations view state.

use crate::data::{Course, COURSES};
use crate::store::CompleteProfile;

use super::logic::{sorted_courses, SortKey};

/// Constructed only from a [`CompleteProfile`], so the view can assume both
/// profile and interests exist.
pub struct RecommendationsState {
    pub complete: CompleteProfile,
    pub sort: SortKey,
    /// Cursor into the sorted view.
    pub cursor: usize,
}

impl RecommendationsState {
    pub fn new(complete: CompleteProfile) -> Self {
        Self {
            complete,
            sort: SortKey::Match,
            cursor: 0,
        }
    }

    pub fn sorted(&self) -> Vec<&'static Course> {
        sorted_courses(self.sort)
    }

    /// Switch ordering, keeping the cursor on the same display slot.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    pub fn move_cursor(&mut self, down: bool) {
        let len = COURSES.len();
        if down {
            self.cursor = (self.cursor + 1).min(len - 1);
        } else {
            self.cursor = self.cursor.saturating_sub(1);
        }
    }

    pub fn course_at(&self, index: usize) -> Option<&'static Course> {
        self.sorted().get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Budget, Location, Profile, Stream};

    fn complete() -> CompleteProfile {
        CompleteProfile {
            profile: Profile {
                name: "Asha".to_string(),
                age: 17,
                stream: Stream::Science,
                percentage: 85,
                location: Location::AnywhereIndia,
                budget: Budget::Medium,
            },
            interests: vec!["programming".to_string()],
        }
    }

    #[test]
    fn defaults_to_best_match() {
        let s = RecommendationsState::new(complete());
        assert_eq!(s.sort, SortKey::Match);
        assert_eq!(s.course_at(0).unwrap().id, "computer-science");
    }

    #[test]
    fn sort_switch_reorders_view() {
        let mut s = RecommendationsState::new(complete());
        s.set_sort(SortKey::Popularity);
        assert_eq!(s.course_at(1).unwrap().id, "business-administration");
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut s = RecommendationsState::new(complete());
        for _ in 0..10 {
            s.move_cursor(true);
        }
        assert_eq!(s.cursor, COURSES.len() - 1);
        s.move_cursor(false);
        assert_eq!(s.cursor, COURSES.len() - 2);
    }
}
