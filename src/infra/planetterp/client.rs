use async_trait::async_trait;
use find_my_professor::courses::CourseCode;
use find_my_professor::error::LookupError;
use find_my_professor::fetch::{HttpClient, fetch_json};
use find_my_professor::grades::GradeDistributionEntry;
use find_my_professor::services::{GradeLookup, ProfessorLookup, ProfessorMatch};
use reqwest::Url;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, info};

#[derive(Deserialize)]
struct ProfessorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    average_rating: Option<f64>,
    #[serde(default)]
    courses: Vec<String>,
    #[serde(default)]
    reviews: Vec<serde_json::Value>,
}

/// Talks to the PlanetTerp REST API (`/professor` and `/grades`).
pub struct PlanetTerpClient<C> {
    http: C,
    base_url: String,
}

impl<C: HttpClient> PlanetTerpClient<C> {
    pub fn new(http: C, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, LookupError> {
        Url::parse_with_params(&format!("{}/{}", self.base_url, path), params).map_err(|e| {
            LookupError::Fetch {
                message: format!("Invalid PlanetTerp URL: {e}"),
            }
        })
    }
}

#[async_trait]
impl<C: HttpClient> ProfessorLookup for PlanetTerpClient<C> {
    #[tracing::instrument(skip(self))]
    async fn find_professor(&self, name: &str) -> Result<ProfessorMatch, LookupError> {
        let url = self.endpoint("professor", &[("name", name), ("reviews", "true")])?;
        let response: Option<ProfessorResponse> = fetch_json(&self.http, url).await?;

        let found = response
            .and_then(professor_from_response)
            .ok_or_else(|| LookupError::NotFound {
                name: name.to_string(),
            })?;

        info!(
            professor = %found.name,
            courses = found.raw_courses.len(),
            reviews = found.review_count,
            "Professor resolved"
        );
        Ok(found)
    }
}

#[async_trait]
impl<C: HttpClient> GradeLookup for PlanetTerpClient<C> {
    #[tracing::instrument(skip(self))]
    async fn grades_for(
        &self,
        professor_name: &str,
    ) -> Result<Vec<GradeDistributionEntry>, LookupError> {
        let url = self.endpoint("grades", &[("professor", professor_name)])?;

        // PlanetTerp answers 404 for professors without any grade data
        let Some(json) = fetch_json::<_, serde_json::Value>(&self.http, url).await? else {
            return Ok(Vec::new());
        };

        let entries = grade_entries_from_json(json)?;
        debug!(entries = entries.len(), "Grade rows received");
        Ok(entries)
    }
}

fn professor_from_response(response: ProfessorResponse) -> Option<ProfessorMatch> {
    if response.error.is_some() {
        return None;
    }

    Some(ProfessorMatch {
        name: response.name?,
        slug: response.slug.unwrap_or_default(),
        average_rating: response.average_rating,
        review_count: u32::try_from(response.reviews.len()).unwrap_or(u32::MAX),
        raw_courses: response.courses,
    })
}

/// Turns `/grades` rows into distribution entries.
///
/// Every numeric field except the identifying ones is taken as a grade
/// count; rows without a usable `course` are dropped.
fn grade_entries_from_json(
    json: serde_json::Value,
) -> Result<Vec<GradeDistributionEntry>, LookupError> {
    let rows = match json {
        serde_json::Value::Array(rows) => rows,
        serde_json::Value::Object(obj) if obj.contains_key("error") => return Ok(Vec::new()),
        other => {
            return Err(LookupError::Parse {
                message: format!("Expected a list of grade rows, got {other}"),
            });
        }
    };

    let entries = rows
        .into_iter()
        .filter_map(|row| {
            let serde_json::Value::Object(fields) = row else {
                return None;
            };
            let course = CourseCode::from_listing(fields.get("course")?.as_str()?)?;

            let counts: HashMap<String, u64> = fields
                .iter()
                .filter(|(key, _)| !matches!(key.as_str(), "course" | "professor" | "semester" | "section"))
                .filter_map(|(key, value)| Some((key.clone(), value.as_u64()?)))
                .collect();

            Some(GradeDistributionEntry {
                course,
                grade_counts: counts,
            })
        })
        .collect();

    Ok(entries)
}
