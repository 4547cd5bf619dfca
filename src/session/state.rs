//! Snapshot types published by the search session.

use serde::Serialize;

use crate::courses::{CourseCode, normalize_courses};
use crate::grades::{CourseAverage, letter_grade};
use crate::services::ProfessorMatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SessionStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error,
}

/// A resolved professor with canonical, de-duplicated courses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfessorRecord {
    pub name: String,
    pub slug: String,
    pub average_rating: Option<f64>,
    pub review_count: u32,
    pub courses: Vec<CourseCode>,
}

impl ProfessorRecord {
    pub fn from_match(found: ProfessorMatch) -> Self {
        Self {
            courses: normalize_courses(&found.raw_courses),
            name: found.name,
            slug: found.slug,
            average_rating: found.average_rating,
            review_count: found.review_count,
        }
    }

    pub fn teaches(&self, course: &CourseCode) -> bool {
        self.courses.contains(course)
    }
}

/// Everything a renderer needs for one search, as a single coherent value.
///
/// A new snapshot replaces the previous one wholesale on every transition.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SessionState {
    pub status: SessionStatus,
    pub professor: Option<ProfessorRecord>,
    pub course_averages: Vec<CourseAverage>,
    pub selected_course: Option<CourseCode>,
    pub error_message: Option<String>,
}

impl SessionState {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn loading() -> Self {
        Self {
            status: SessionStatus::Loading,
            ..Self::default()
        }
    }

    /// Professor resolved, grades still in flight.
    pub fn resolved(professor: ProfessorRecord) -> Self {
        Self {
            status: SessionStatus::Loading,
            selected_course: professor.courses.first().cloned(),
            professor: Some(professor),
            ..Self::default()
        }
    }

    /// Settles a resolved snapshot with the professor's course averages.
    pub fn loaded(self, course_averages: Vec<CourseAverage>) -> Self {
        Self {
            status: SessionStatus::Loaded,
            course_averages,
            ..self
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: SessionStatus::Error,
            error_message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn average_for(&self, course: &CourseCode) -> Option<f64> {
        self.course_averages
            .iter()
            .find(|a| &a.course == course)
            .and_then(|a| a.average)
    }

    pub fn letter_grade_for(&self, course: &CourseCode) -> &'static str {
        letter_grade(self.average_for(course))
    }

    pub fn selected_average(&self) -> Option<f64> {
        self.selected_course
            .as_ref()
            .and_then(|course| self.average_for(course))
    }

    pub fn selected_letter_grade(&self) -> &'static str {
        letter_grade(self.selected_average())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(courses: &[&str]) -> ProfessorRecord {
        ProfessorRecord::from_match(ProfessorMatch {
            name: "Maksym Morawski".to_string(),
            slug: "morawski".to_string(),
            average_rating: Some(4.5),
            review_count: 12,
            raw_courses: courses.iter().map(|c| c.to_string()).collect(),
        })
    }

    fn code(s: &str) -> CourseCode {
        CourseCode::from_listing(s).unwrap()
    }

    #[test]
    fn test_record_normalizes_courses() {
        let professor = record(&["CMSC131-0101", "CMSC131-0201", "CMSC132-0101"]);
        assert_eq!(professor.courses, vec![code("CMSC131"), code("CMSC132")]);
        assert!(professor.teaches(&code("CMSC132")));
        assert!(!professor.teaches(&code("CMSC216")));
    }

    #[test]
    fn test_resolved_selects_first_course() {
        let state = SessionState::resolved(record(&["CMSC216", "CMSC131"]));
        assert_eq!(state.status, SessionStatus::Loading);
        assert_eq!(state.selected_course, Some(code("CMSC216")));
    }

    #[test]
    fn test_resolved_without_courses_selects_nothing() {
        let state = SessionState::resolved(record(&[]));
        assert_eq!(state.selected_course, None);
        assert_eq!(state.selected_letter_grade(), "N/A");
    }

    #[test]
    fn test_letter_grade_lookup() {
        let state = SessionState::resolved(record(&["CMSC131", "CMSC132"])).loaded(vec![
            CourseAverage {
                course: code("CMSC131"),
                average: Some(3.125),
            },
            CourseAverage {
                course: code("CMSC132"),
                average: None,
            },
        ]);

        assert_eq!(state.status, SessionStatus::Loaded);
        assert_eq!(state.selected_letter_grade(), "B");
        assert_eq!(state.letter_grade_for(&code("CMSC132")), "N/A");
        assert_eq!(state.letter_grade_for(&code("MATH140")), "N/A");
    }

    #[test]
    fn test_failed_has_no_professor() {
        let state = SessionState::failed("No professor found");
        assert_eq!(state.status, SessionStatus::Error);
        assert!(state.professor.is_none());
        assert_eq!(state.error_message.as_deref(), Some("No professor found"));
    }
}
