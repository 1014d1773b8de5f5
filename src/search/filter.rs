use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::{AccessType, SourceDescriptor};

/// Kind of course the user asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseType {
    Free,
    Paid,
    /// No filtering.
    #[default]
    All,
}

impl CourseType {
    /// Whether a source with `access` takes part in a search for this type.
    /// Mixed sources always do.
    pub fn admits(self, access: AccessType) -> bool {
        match self {
            CourseType::All => true,
            CourseType::Free => matches!(access, AccessType::Free | AccessType::Mixed),
            CourseType::Paid => matches!(access, AccessType::Paid | AccessType::Mixed),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CourseType::Free => "free",
            CourseType::Paid => "paid",
            CourseType::All => "all",
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown course type '{0}', expected free, paid or all")]
pub struct ParseCourseTypeError(pub String);

impl FromStr for CourseType {
    type Err = ParseCourseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(CourseType::Free),
            "paid" => Ok(CourseType::Paid),
            "all" | "" => Ok(CourseType::All),
            other => Err(ParseCourseTypeError(other.to_string())),
        }
    }
}

/// Narrows a catalog to the sources that serve `course_type`, keeping
/// catalog order.
pub fn select(catalog: &[SourceDescriptor], course_type: CourseType) -> Vec<&SourceDescriptor> {
    catalog
        .iter()
        .filter(|source| course_type.admits(source.access_type))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SourceRegistry;

    fn source(name: &str, access_type: AccessType) -> SourceDescriptor {
        SourceDescriptor::new(
            name,
            "https://example.com/search?q={}",
            "https://example.com",
            "/c/",
            access_type,
        )
        .unwrap()
    }

    fn catalog() -> Vec<SourceDescriptor> {
        vec![
            source("mixed-1", AccessType::Mixed),
            source("free-1", AccessType::Free),
            source("paid-1", AccessType::Paid),
            source("free-2", AccessType::Free),
            source("mixed-2", AccessType::Mixed),
            source("paid-2", AccessType::Paid),
        ]
    }

    fn names(selected: &[&SourceDescriptor]) -> Vec<String> {
        selected.iter().map(|s| s.name.clone()).collect()
    }

    #[test]
    fn test_all_returns_catalog_unchanged() {
        let catalog = catalog();
        let selected = select(&catalog, CourseType::All);
        assert_eq!(
            names(&selected),
            vec!["mixed-1", "free-1", "paid-1", "free-2", "mixed-2", "paid-2"]
        );
    }

    #[test]
    fn test_free_keeps_free_and_mixed_in_order() {
        let catalog = catalog();
        let selected = select(&catalog, CourseType::Free);
        assert_eq!(names(&selected), vec!["mixed-1", "free-1", "free-2", "mixed-2"]);
    }

    #[test]
    fn test_paid_keeps_paid_and_mixed_in_order() {
        let catalog = catalog();
        let selected = select(&catalog, CourseType::Paid);
        assert_eq!(names(&selected), vec!["mixed-1", "paid-1", "mixed-2", "paid-2"]);
    }

    #[test]
    fn test_selection_is_deterministic() {
        let registry = SourceRegistry::builtin();
        for course_type in [CourseType::Free, CourseType::Paid, CourseType::All] {
            let first = names(&select(registry.general(), course_type));
            let second = names(&select(registry.general(), course_type));
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_mixed_inclusion_on_builtin_catalog() {
        let registry = SourceRegistry::builtin();
        let free = select(registry.general(), CourseType::Free);

        for source in registry.general() {
            let included = free.iter().any(|s| s.name == source.name);
            match source.access_type {
                AccessType::Mixed | AccessType::Free => assert!(included, "{}", source.name),
                AccessType::Paid => assert!(!included, "{}", source.name),
            }
        }
    }

    #[test]
    fn test_parse_course_type() {
        assert_eq!("free".parse::<CourseType>(), Ok(CourseType::Free));
        assert_eq!(" PAID ".parse::<CourseType>(), Ok(CourseType::Paid));
        assert_eq!("all".parse::<CourseType>(), Ok(CourseType::All));
        assert_eq!("".parse::<CourseType>(), Ok(CourseType::All));
        assert!("gratis".parse::<CourseType>().is_err());
    }
}
