use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// One discovered course. Two listings are the same course when their urls
/// match, whatever their titles say.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseListing {
    pub title: String,
    /// Absolute url.
    pub url: String,
}

impl CourseListing {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

impl PartialEq for CourseListing {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Eq for CourseListing {}

impl Hash for CourseListing {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.hash(state);
    }
}

/// Collapses runs of whitespace (including newlines) into single spaces and
/// trims the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
