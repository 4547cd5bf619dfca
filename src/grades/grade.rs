/// Grade-point value of every letter grade that counts toward an average.
///
/// Keys not listed here (`W`, `Other`, `I`, ...) carry no grade points and
/// are left out of averages entirely.
pub static GRADE_POINTS: &[(&str, f64)] = &[
    ("A+", 4.3),
    ("A", 4.0),
    ("A-", 3.7),
    ("B+", 3.3),
    ("B", 3.0),
    ("B-", 2.7),
    ("C+", 2.3),
    ("C", 2.0),
    ("C-", 1.7),
    ("D+", 1.3),
    ("D", 1.0),
    ("D-", 0.7),
    ("F", 0.0),
];

/// Label shown when a course has no usable grade data.
pub const NO_GRADE: &str = "N/A";

/// Converts a grade-point average into a letter grade.
///
/// | Average     | Grade |
/// |-------------|-------|
/// | >= 4.0      | A     |
/// | >= 3.7      | A-    |
/// | >= 3.3      | B+    |
/// | >= 3.0      | B     |
/// | >= 2.7      | B-    |
/// | >= 2.3      | C+    |
/// | >= 2.0      | C     |
/// | >= 1.7      | C-    |
/// | >= 1.3      | D+    |
/// | >= 1.0      | D     |
/// | < 1.0       | F     |
/// | none        | N/A   |
pub fn letter_grade(average: Option<f64>) -> &'static str {
    match average {
        None => NO_GRADE,
        Some(avg) if avg >= 4.0 => "A",
        Some(avg) if avg >= 3.7 => "A-",
        Some(avg) if avg >= 3.3 => "B+",
        Some(avg) if avg >= 3.0 => "B",
        Some(avg) if avg >= 2.7 => "B-",
        Some(avg) if avg >= 2.3 => "C+",
        Some(avg) if avg >= 2.0 => "C",
        Some(avg) if avg >= 1.7 => "C-",
        Some(avg) if avg >= 1.3 => "D+",
        Some(avg) if avg >= 1.0 => "D",
        Some(_) => "F",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_grade_boundaries() {
        assert_eq!(letter_grade(Some(4.3)), "A");
        assert_eq!(letter_grade(Some(4.0)), "A");
        assert_eq!(letter_grade(Some(3.99)), "A-");
        assert_eq!(letter_grade(Some(3.85)), "A-");
        assert_eq!(letter_grade(Some(3.7)), "A-");
        assert_eq!(letter_grade(Some(3.3)), "B+");
        assert_eq!(letter_grade(Some(3.0)), "B");
        assert_eq!(letter_grade(Some(2.7)), "B-");
        assert_eq!(letter_grade(Some(2.3)), "C+");
        assert_eq!(letter_grade(Some(2.0)), "C");
        assert_eq!(letter_grade(Some(1.7)), "C-");
        assert_eq!(letter_grade(Some(1.3)), "D+");
        assert_eq!(letter_grade(Some(1.0)), "D");
        assert_eq!(letter_grade(Some(0.99)), "F");
        assert_eq!(letter_grade(Some(0.0)), "F");
    }

    #[test]
    fn test_missing_average_is_not_applicable() {
        assert_eq!(letter_grade(None), "N/A");
    }

    #[test]
    fn test_grade_points_table() {
        assert_eq!(GRADE_POINTS.len(), 13);
        assert_eq!(GRADE_POINTS[0], ("A+", 4.3));
        assert_eq!(GRADE_POINTS[1], ("A", 4.0));
        assert_eq!(GRADE_POINTS[12], ("F", 0.0));
        assert!(!GRADE_POINTS.iter().any(|(letter, _)| *letter == "W"));
        assert!(GRADE_POINTS.iter().all(|(_, p)| (0.0..=4.3).contains(p)));
    }
}
