//! Traits and types for the professor and grade data providers.

use serde::{Deserialize, Serialize};

use crate::error::LookupError;
use crate::grades::GradeDistributionEntry;

/// A professor resolved from a free-text name query.
///
/// `raw_courses` are listings exactly as the provider reports them and may
/// repeat a course once per section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessorMatch {
    pub name: String,
    pub slug: String,
    pub average_rating: Option<f64>,
    pub review_count: u32,
    pub raw_courses: Vec<String>,
}

/// Resolves a name query to a single professor.
///
/// Fuzzy or case-insensitive matching is up to the implementation. Any
/// non-match is reported as [`LookupError::NotFound`].
#[async_trait::async_trait]
pub trait ProfessorLookup: Send + Sync {
    async fn find_professor(&self, name: &str) -> Result<ProfessorMatch, LookupError>;
}

/// Fetches every grade distribution recorded for a professor.
///
/// An empty result is not an error.
#[async_trait::async_trait]
pub trait GradeLookup: Send + Sync {
    async fn grades_for(&self, professor_name: &str)
    -> Result<Vec<GradeDistributionEntry>, LookupError>;
}
