//! Salary range parsing for display strings like "₹8-25 LPA".
//!
//! The accepted shape is: any non-digit prefix, an integer lower bound, a
//! literal '-', an integer upper bound, then anything else. Everything that
//! deviates parses to `None`; callers decide the fallback.

/// A parsed salary band in LPA (lakhs per annum).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SalaryRange {
    pub lower: u32,
    pub upper: u32,
}

/// Parse a salary display string into its numeric band.
pub fn parse_salary_range(s: &str) -> Option<SalaryRange> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let (lower_str, rest) = s[start..].split_once('-')?;

    let lower: u32 = lower_str.parse().ok()?;
    let upper_digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if upper_digits.is_empty() {
        return None;
    }
    let upper: u32 = upper_digits.parse().ok()?;

    Some(SalaryRange { lower, upper })
}

/// The sortable upper bound of a salary string. Unparseable strings sort
/// last rather than poisoning the whole ordering.
pub fn sort_upper(s: &str) -> u32 {
    parse_salary_range(s).map(|r| r.upper).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_catalog_shapes() {
        assert_eq!(
            parse_salary_range("₹8-25 LPA"),
            Some(SalaryRange { lower: 8, upper: 25 })
        );
        assert_eq!(
            parse_salary_range("₹12-35 LPA"),
            Some(SalaryRange { lower: 12, upper: 35 })
        );
        assert_eq!(
            parse_salary_range("6-20"),
            Some(SalaryRange { lower: 6, upper: 20 })
        );
    }

    #[test]
    fn malformed_strings_are_none() {
        assert_eq!(parse_salary_range(""), None);
        assert_eq!(parse_salary_range("₹ LPA"), None);
        assert_eq!(parse_salary_range("₹8 LPA"), None); // no range
        assert_eq!(parse_salary_range("₹8- LPA"), None); // missing upper
        assert_eq!(parse_salary_range("₹8–25 LPA"), None); // en dash
        // digits after the '-' must be adjacent
        assert_eq!(parse_salary_range("₹8- 25 LPA"), None);
        // the lower bound runs from the first digit to the '-'
        assert_eq!(parse_salary_range("₹8x-25"), None);
    }

    #[test]
    fn unparseable_sorts_as_zero() {
        assert_eq!(sort_upper("negotiable"), 0);
        assert_eq!(sort_upper("₹8-25 LPA"), 25);
    }

    proptest! {
        #[test]
        fn never_panics(s in "\\PC*") {
            let _ = parse_salary_range(&s);
        }

        #[test]
        fn well_formed_roundtrips(lower in 0u32..1000, upper in 0u32..1000) {
            let s = format!("₹{}-{} LPA", lower, upper);
            prop_assert_eq!(parse_salary_range(&s), Some(SalaryRange { lower, upper }));
            prop_assert_eq!(sort_upper(&s), upper);
        }

        #[test]
        fn prefix_noise_is_ignored(prefix in "[^0-9]*", lower in 0u32..100, upper in 0u32..100) {
            let s = format!("{}{}-{}", prefix, lower, upper);
            prop_assert_eq!(parse_salary_range(&s), Some(SalaryRange { lower, upper }));
        }
    }
}
