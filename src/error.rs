//! Error types for professor lookups and session operations.

use thiserror::Error;

use crate::courses::CourseCode;

/// Errors a lookup collaborator can report.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LookupError {
    /// No professor matched the query
    #[error("No professor found matching \"{name}\"")]
    NotFound { name: String },

    /// Network/HTTP request failed or returned an unexpected status
    #[error("Network error: {message}")]
    Fetch { message: String },

    /// The response body could not be decoded
    #[error("Parse error: {message}")]
    Parse { message: String },
}

impl LookupError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound { .. })
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LookupError::Parse {
                message: err.to_string(),
            }
        } else {
            LookupError::Fetch {
                message: err.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::Parse {
            message: err.to_string(),
        }
    }
}

/// Errors returned by [`SearchSessionController`](crate::session::SearchSessionController).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    /// The course is not taught by the loaded professor (or nothing is loaded)
    #[error("Course {course} is not offered by the current professor")]
    InvalidSelection { course: CourseCode },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = LookupError::NotFound {
            name: "Dr. Nobody".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "No professor found matching \"Dr. Nobody\"");
    }

    #[test]
    fn test_json_error_is_parse() {
        let err: LookupError = serde_json::from_str::<Vec<u8>>("nope").unwrap_err().into();
        assert!(matches!(err, LookupError::Parse { .. }));
        assert!(!err.is_not_found());
    }
}
