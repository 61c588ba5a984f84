//! Static course and interest catalogs.
//!
//! All data lives in static tables of `&'static` records so every step can
//! borrow from them freely without allocation. Lookups are linear; the
//! catalogs are small enough that anything fancier would be noise.

mod courses;
mod details;
mod interests;

pub use courses::{match_color, Course, Difficulty, COURSES};
pub use details::{CourseDetail, CurriculumYear, JobRole, COURSE_DETAILS};
pub use interests::{category_count, Category, Interest, ALL_CATEGORY, CATEGORIES, INTERESTS};

/// Look up a course summary by its id.
pub fn find_course(id: &str) -> Option<&'static Course> {
    COURSES.iter().find(|c| c.id == id)
}

/// Look up the expanded detail record for a course, if one exists.
/// Only a subset of the catalog has detail records.
pub fn find_detail(id: &str) -> Option<&'static CourseDetail> {
    COURSE_DETAILS.iter().find(|d| d.summary.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_course_id_resolves() {
        for course in &COURSES {
            assert_eq!(find_course(course.id).map(|c| c.id), Some(course.id));
        }
    }

    #[test]
    fn unknown_course_is_none() {
        assert!(find_course("astrophysics").is_none());
        assert!(find_detail("astrophysics").is_none());
    }

    #[test]
    fn detail_subset_matches_catalog() {
        // Every detail record's summary must be the same record the catalog holds
        for detail in &COURSE_DETAILS {
            let course = find_course(detail.summary.id).unwrap();
            assert!(std::ptr::eq(course, detail.summary));
        }
        assert!(find_detail("computer-science").is_some());
        assert!(find_detail("data-science").is_some());
        // graphic-design is in the catalog but has no detail record
        assert!(find_course("graphic-design").is_some());
        assert!(find_detail("graphic-design").is_none());
    }

    #[test]
    fn course_ids_are_unique() {
        for (i, a) in COURSES.iter().enumerate() {
            for b in &COURSES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn every_interest_category_exists() {
        for interest in &INTERESTS {
            assert!(
                CATEGORIES.iter().any(|c| c.id == interest.category),
                "interest {} has unknown category {}",
                interest.id,
                interest.category
            );
        }
    }

    #[test]
    fn interest_ids_are_unique() {
        for (i, a) in INTERESTS.iter().enumerate() {
            for b in &INTERESTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn category_counts_cover_catalog() {
        assert_eq!(category_count(ALL_CATEGORY), INTERESTS.len());
        let sum: usize = CATEGORIES
            .iter()
            .filter(|c| c.id != ALL_CATEGORY)
            .map(|c| category_count(c.id))
            .sum();
        assert_eq!(sum, INTERESTS.len());
        assert_eq!(category_count("technology"), 5);
        assert_eq!(category_count("health"), 4);
    }

    #[test]
    fn every_salary_parses() {
        use crate::steps::recommendations::salary::parse_salary_range;
        for course in &COURSES {
            assert!(
                parse_salary_range(course.average_salary).is_some(),
                "unparseable salary {:?} on {}",
                course.average_salary,
                course.id
            );
        }
    }
}
