use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::catalog::Category;
use crate::entities::SavedCourse;
use crate::extractor::CourseListing;

/// Results returned per search; the rest is only counted.
pub const RESULTS_PAGE_SIZE: usize = 10;
/// Longest title shown before it is cut.
pub const DISPLAY_TITLE_CHARS: usize = 75;
/// Saved courses returned per list.
pub const SAVED_LIST_LIMIT: usize = 25;
const MAX_URL_LEN: usize = 2048;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// What to search for.
    pub q: Option<String>,
    /// `free`, `paid` or `all` (default).
    #[serde(rename = "type")]
    pub course_type: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TypeParams {
    /// `free`, `paid` or `all` (default).
    #[serde(rename = "type")]
    pub course_type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CourseResult {
    pub title: String,
    pub display_title: String,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub header: String,
    /// Unique courses found across all sources.
    pub total: usize,
    /// Courses in `results`.
    pub shown: usize,
    pub results: Vec<CourseResult>,
}

impl SearchResponse {
    /// First page of an aggregated result set.
    pub fn from_listings(header: impl Into<String>, listings: Vec<CourseListing>) -> Self {
        let total = listings.len();
        let results: Vec<CourseResult> = listings
            .into_iter()
            .take(RESULTS_PAGE_SIZE)
            .map(|listing| CourseResult {
                display_title: truncate_title(&listing.title, DISPLAY_TITLE_CHARS),
                title: listing.title,
                url: listing.url,
            })
            .collect();

        Self {
            header: header.into(),
            total,
            shown: results.len(),
            results,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub key: String,
    pub label: String,
    pub terms: Vec<String>,
}

impl From<&Category> for CategoryResponse {
    fn from(category: &Category) -> Self {
        Self {
            key: category.key.to_string(),
            label: category.label.to_string(),
            terms: category.terms.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveCourseRequest {
    pub title: String,
    pub url: String,
}

impl SaveCourseRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title cannot be empty".to_string());
        }
        if self.url.is_empty() {
            return Err("URL cannot be empty".to_string());
        }
        if self.url.len() > MAX_URL_LEN {
            return Err("URL too long".to_string());
        }
        match url::Url::parse(&self.url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
            _ => Err("URL must be an absolute http(s) url".to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SavedCourseResponse {
    pub title: String,
    pub url: String,
    pub saved_at: DateTime<Utc>,
}

impl From<SavedCourse> for SavedCourseResponse {
    fn from(course: SavedCourse) -> Self {
        Self {
            title: course.title,
            url: course.url,
            saved_at: course.saved_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SavedCourseListResponse {
    pub total: usize,
    pub courses: Vec<SavedCourseResponse>,
}

/// Cuts `title` to `max_chars` characters, marking the cut with `...`.
pub fn truncate_title(title: &str, max_chars: usize) -> String {
    match title.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &title[..cut]),
        None => title.to_string(),
    }
}
