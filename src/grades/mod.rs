//! Grade-distribution aggregation and letter grading.
//!
//! Raw per-section distributions are folded into one weighted average per
//! course, and averages are mapped back onto the letter scale shown to the
//! user.

pub mod aggregate;
pub mod grade;
pub mod types;

pub use aggregate::aggregate_courses;
pub use grade::{GRADE_POINTS, NO_GRADE, letter_grade};
pub use types::{CourseAverage, GradeDistributionEntry};
