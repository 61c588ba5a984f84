//! Course ordering.

use crate::data::{Course, COURSES};

use super::salary::sort_upper;

/// The three orderings the sort tabs offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Match,
    Salary,
    Popularity,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Match, SortKey::Salary, SortKey::Popularity];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Match => "Best Match",
            SortKey::Salary => "Highest Salary",
            SortKey::Popularity => "Most Popular",
        }
    }
}

/// The catalog ordered by the given key, descending. The sort is stable, so
/// ties keep catalog order; the catalog itself is never reordered.
pub fn sorted_courses(sort: SortKey) -> Vec<&'static Course> {
    let mut courses: Vec<&'static Course> = COURSES.iter().collect();
    match sort {
        SortKey::Match => courses.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage)),
        SortKey::Salary => {
            courses.sort_by(|a, b| sort_upper(b.average_salary).cmp(&sort_upper(a.average_salary)))
        }
        SortKey::Popularity => courses.sort_by(|a, b| b.popularity.cmp(&a.popularity)),
    }
    courses
}
