pub mod aggregator;
pub mod filter;
pub mod scraper;

pub use aggregator::Aggregator;
pub use filter::{CourseType, ParseCourseTypeError, select};

use crate::catalog::CatalogScope;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Raw, unescaped term. May be empty, in which case only fixed catalog
    /// pages are scraped.
    pub term: String,
    pub course_type: CourseType,
    pub catalog: CatalogScope,
}

impl SearchRequest {
    /// Term search over the general catalog.
    pub fn new(term: impl Into<String>, course_type: CourseType) -> Self {
        Self {
            term: term.into(),
            course_type,
            catalog: CatalogScope::General,
        }
    }

    /// Scrape the fixed pages of the specialized catalog.
    pub fn specialized(course_type: CourseType) -> Self {
        Self {
            term: String::new(),
            course_type,
            catalog: CatalogScope::Specialized,
        }
    }
}

/// Form-style escaping (`"machine learning"` -> `"machine+learning"`).
pub fn escape_term(term: &str) -> String {
    url::form_urlencoded::byte_serialize(term.as_bytes()).collect()
}
