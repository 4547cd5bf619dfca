//! Output formatting for professor profiles.
//!
//! [`ProfileView`] is the display-ready form of a loaded session; it can be
//! logged pretty-printed or serialized as JSON.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::courses::CourseCode;
use crate::grades::NO_GRADE;
use crate::session::SessionState;

/// Number of slots in the star row.
pub const STAR_SLOTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Star {
    Full,
    Half,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseGrade {
    pub course: CourseCode,
    pub letter_grade: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub name: String,
    pub rating_display: String,
    pub stars: Vec<Star>,
    pub reviews_display: String,
    pub course_count: usize,
    pub courses: Vec<CourseGrade>,
    pub selected_course: Option<CourseCode>,
    pub letter_grade: &'static str,
    pub profile_url: Option<String>,
}

impl ProfileView {
    /// Builds the view for the professor in `state`, if one is loaded.
    pub fn from_state(state: &SessionState, profile_base_url: &str) -> Option<Self> {
        let professor = state.professor.as_ref()?;

        let rating_display = match professor.average_rating {
            Some(rating) if rating > 0.0 => format!("{rating:.2}"),
            _ => NO_GRADE.to_string(),
        };
        let reviews_display = match professor.review_count {
            0 => NO_GRADE.to_string(),
            n => n.to_string(),
        };
        let profile_url = (!professor.slug.is_empty()).then(|| {
            format!(
                "{}/{}",
                profile_base_url.trim_end_matches('/'),
                professor.slug
            )
        });

        Some(Self {
            name: professor.name.clone(),
            rating_display,
            stars: star_row(professor.average_rating.unwrap_or(0.0)),
            reviews_display,
            course_count: professor.courses.len(),
            courses: professor
                .courses
                .iter()
                .map(|course| CourseGrade {
                    course: course.clone(),
                    letter_grade: state.letter_grade_for(course),
                })
                .collect(),
            selected_course: state.selected_course.clone(),
            letter_grade: state.selected_letter_grade(),
            profile_url,
        })
    }
}

/// Lays out a rating as full, half and empty stars.
///
/// The whole part gives the full stars and a fractional part of at least
/// one half adds a half star. Ratings are clamped to the 0–5 scale.
pub fn star_row(rating: f64) -> Vec<Star> {
    let rating = if rating.is_finite() {
        rating.clamp(0.0, STAR_SLOTS as f64)
    } else {
        0.0
    };
    let full = rating.floor() as usize;

    let mut stars = vec![Star::Full; full];
    if rating - rating.floor() >= 0.5 {
        stars.push(Star::Half);
    }
    stars.resize(STAR_SLOTS, Star::Empty);
    stars
}

/// Logs a profile using Rust's debug pretty-print format.
pub fn print_pretty(view: &ProfileView) {
    debug!("{:#?}", view);
}

/// Renders a profile as pretty-printed JSON.
pub fn to_json(view: &ProfileView) -> Result<String> {
    Ok(serde_json::to_string_pretty(view)?)
}

/// Logs a profile as pretty-printed JSON.
pub fn print_json(view: &ProfileView) -> Result<()> {
    info!("{}", to_json(view)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grades::CourseAverage;
    use crate::services::ProfessorMatch;
    use crate::session::ProfessorRecord;

    fn code(s: &str) -> CourseCode {
        CourseCode::from_listing(s).unwrap()
    }

    fn loaded_state(rating: Option<f64>, reviews: u32, slug: &str) -> SessionState {
        let professor = ProfessorRecord::from_match(ProfessorMatch {
            name: "Jason Filippou".to_string(),
            slug: slug.to_string(),
            average_rating: rating,
            review_count: reviews,
            raw_courses: vec!["CMSC131-0101".to_string(), "CMSC132-0201".to_string()],
        });
        SessionState::resolved(professor).loaded(vec![CourseAverage {
            course: code("CMSC131"),
            average: Some(3.85),
        }])
    }

    #[test]
    fn test_star_row() {
        use Star::*;
        assert_eq!(star_row(4.5), vec![Full, Full, Full, Full, Half]);
        assert_eq!(star_row(3.49), vec![Full, Full, Full, Empty, Empty]);
        assert_eq!(star_row(0.0), vec![Empty; 5]);
        assert_eq!(star_row(5.0), vec![Full; 5]);
        assert_eq!(star_row(7.2), vec![Full; 5]);
        assert_eq!(star_row(-1.0), vec![Empty; 5]);
        assert_eq!(star_row(f64::NAN), vec![Empty; 5]);
    }

    #[test]
    fn test_view_from_loaded_state() {
        let state = loaded_state(Some(4.256), 31, "filippou");
        let view = ProfileView::from_state(&state, "https://planetterp.com/professor/").unwrap();

        assert_eq!(view.name, "Jason Filippou");
        assert_eq!(view.rating_display, "4.26");
        assert_eq!(view.reviews_display, "31");
        assert_eq!(view.course_count, 2);
        assert_eq!(view.selected_course, Some(code("CMSC131")));
        assert_eq!(view.letter_grade, "A-");
        assert_eq!(view.courses[1].letter_grade, "N/A");
        assert_eq!(
            view.profile_url.as_deref(),
            Some("https://planetterp.com/professor/filippou")
        );
    }

    #[test]
    fn test_missing_values_display_as_not_applicable() {
        let state = loaded_state(None, 0, "");
        let view = ProfileView::from_state(&state, "https://planetterp.com/professor").unwrap();

        assert_eq!(view.rating_display, "N/A");
        assert_eq!(view.reviews_display, "N/A");
        assert_eq!(view.stars, vec![Star::Empty; 5]);
        assert_eq!(view.profile_url, None);
    }

    #[test]
    fn test_no_view_without_professor() {
        assert!(ProfileView::from_state(&SessionState::loading(), "x").is_none());
    }

    #[test]
    fn test_print_json_does_not_panic() {
        let state = loaded_state(Some(3.0), 2, "x");
        let view = ProfileView::from_state(&state, "x").unwrap();
        print_pretty(&view);
        print_json(&view).unwrap();
    }

    #[test]
    fn test_to_json_fields() {
        let state = loaded_state(Some(4.256), 31, "filippou");
        let view = ProfileView::from_state(&state, "https://planetterp.com/professor").unwrap();

        let json: serde_json::Value = serde_json::from_str(&to_json(&view).unwrap()).unwrap();
        assert_eq!(json["name"], "Jason Filippou");
        assert_eq!(json["selected_course"], "CMSC131");
        assert_eq!(json["letter_grade"], "A-");
        assert_eq!(json["stars"][4], "empty");
    }
}
