//! Canonical course codes and course-listing normalization.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A course identifier with any section/term suffix removed (e.g. `CMSC131`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseCode(String);

impl CourseCode {
    /// Builds a canonical code from a raw listing such as `CMSC131-0101`.
    ///
    /// Everything from the first `-` onwards is dropped. Returns `None`
    /// when nothing is left of the listing.
    pub fn from_listing(raw: &str) -> Option<Self> {
        let prefix = raw.split('-').next().unwrap_or_default().trim();
        if prefix.is_empty() {
            None
        } else {
            Some(Self(prefix.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for CourseCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CourseCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Collapses raw course listings into distinct canonical codes.
///
/// Output order is the order in which each code was first seen. Listings
/// that reduce to an empty code are skipped.
pub fn normalize_courses<I, S>(raw: I) -> Vec<CourseCode>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut courses = Vec::new();

    for listing in raw {
        let Some(code) = CourseCode::from_listing(listing.as_ref()) else {
            continue;
        };
        if seen.insert(code.clone()) {
            courses.push(code);
        }
    }

    courses
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(values: &[CourseCode]) -> Vec<&str> {
        values.iter().map(CourseCode::as_str).collect()
    }

    #[test]
    fn test_sections_collapse_to_first_seen_order() {
        let courses = normalize_courses(["CMSC131-0101", "CMSC131-0201", "CMSC132-0101"]);
        assert_eq!(codes(&courses), vec!["CMSC131", "CMSC132"]);
    }

    #[test]
    fn test_empty_input() {
        let courses = normalize_courses(Vec::<String>::new());
        assert!(courses.is_empty());
    }

    #[test]
    fn test_canonical_list_is_unchanged() {
        let raw = ["MATH140", "CMSC216", "CMSC131"];
        let once = normalize_courses(raw);
        assert_eq!(codes(&once), raw.to_vec());

        let twice = normalize_courses(once.iter().map(CourseCode::as_str));
        assert_eq!(twice, once);
    }

    #[test]
    fn test_split_only_on_first_separator() {
        let courses = normalize_courses(["ENGL101-0101-2023"]);
        assert_eq!(codes(&courses), vec!["ENGL101"]);
    }

    #[test]
    fn test_shared_prefix_merges_distinct_listings() {
        // Anything after the first '-' is treated as a suffix, even if a
        // future listing format puts meaningful text there.
        let courses = normalize_courses(["CMSC388-J", "CMSC388-Z"]);
        assert_eq!(codes(&courses), vec!["CMSC388"]);
    }

    #[test]
    fn test_blank_listings_are_skipped() {
        let courses = normalize_courses(["", "-0101", "  ", " MATH141 "]);
        assert_eq!(codes(&courses), vec!["MATH141"]);
    }
}
