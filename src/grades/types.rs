//! Data types used by the aggregation pipeline.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::courses::CourseCode;

/// Grade counts for one course-section-term combination.
///
/// `grade_counts` is keyed by the grade label as reported by the grade
/// source, so it may contain labels with no grade-point value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeDistributionEntry {
    pub course: CourseCode,
    pub grade_counts: HashMap<String, u64>,
}

impl GradeDistributionEntry {
    pub fn new<I, K>(course: CourseCode, counts: I) -> Self
    where
        I: IntoIterator<Item = (K, u64)>,
        K: Into<String>,
    {
        Self {
            course,
            grade_counts: counts.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Weighted grade-point average for a single course.
///
/// `average` is `None` when none of the course's entries held a graded
/// letter with a non-zero count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseAverage {
    pub course: CourseCode,
    pub average: Option<f64>,
}
