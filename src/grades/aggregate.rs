use crate::courses::CourseCode;
use crate::grades::grade::GRADE_POINTS;
use crate::grades::types::{CourseAverage, GradeDistributionEntry};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Aggregates a professor's grade distributions into one [`CourseAverage`]
/// per distinct course, sorted by course code.
///
/// Counts for the same letter are pooled across every section and term of
/// a course before averaging, so larger sections weigh proportionally more.
/// Letters without a grade-point value are ignored.
pub fn aggregate_courses(entries: &[GradeDistributionEntry]) -> Vec<CourseAverage> {
    let mut pooled: BTreeMap<&CourseCode, HashMap<&str, u64>> = BTreeMap::new();

    for entry in entries {
        let counts = pooled.entry(&entry.course).or_default();
        for (letter, count) in &entry.grade_counts {
            let pooled_count = counts.entry(letter.as_str()).or_default();
            *pooled_count = pooled_count.saturating_add(*count);
        }
    }

    let averages: Vec<CourseAverage> = pooled
        .into_iter()
        .map(|(course, counts)| CourseAverage {
            course: course.clone(),
            average: weighted_average(&counts),
        })
        .collect();

    debug!(
        entries = entries.len(),
        courses = averages.len(),
        "Aggregated grade distributions"
    );

    averages
}

/// Walks the grade-point table in a fixed order so the result does not
/// depend on hash iteration order.
fn weighted_average(counts: &HashMap<&str, u64>) -> Option<f64> {
    let mut total_points = 0.0;
    let mut total_count = 0u64;

    for (letter, points) in GRADE_POINTS {
        if let Some(&count) = counts.get(letter) {
            total_points += points * count as f64;
            total_count = total_count.saturating_add(count);
        }
    }

    if total_count == 0 {
        None
    } else {
        Some(total_points / total_count as f64)
    }
}
