//! Source registry: the static catalog of course sites and search categories.
//!
//! The registry is built once at start-up and shared read-only (behind an
//! `Arc`) by everything that searches. Nothing mutates it afterwards.

pub mod categories;
pub mod sources;

pub use categories::Category;
pub use sources::{AccessType, SourceDescriptor};

use serde::{Deserialize, Serialize};

/// Version tag of the built-in catalog. Bump when sites are added, removed or
/// their templates change.
pub const CATALOG_VERSION: &str = "2025.1";

/// Which of the two catalogs a search runs against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogScope {
    /// Term-based search sites.
    #[default]
    General,
    /// Fixed catalog pages of security/pentest focused sites.
    Specialized,
}

#[derive(Debug, Clone)]
pub struct SourceRegistry {
    general: Vec<SourceDescriptor>,
    specialized: Vec<SourceDescriptor>,
}

impl SourceRegistry {
    pub fn new(general: Vec<SourceDescriptor>, specialized: Vec<SourceDescriptor>) -> Self {
        Self {
            general,
            specialized,
        }
    }

    /// The built-in, versioned catalog.
    pub fn builtin() -> Self {
        Self::new(sources::general_sites(), sources::specialized_sites())
    }

    pub fn catalog(&self, scope: CatalogScope) -> &[SourceDescriptor] {
        match scope {
            CatalogScope::General => &self.general,
            CatalogScope::Specialized => &self.specialized,
        }
    }

    pub fn general(&self) -> &[SourceDescriptor] {
        &self.general
    }

    pub fn specialized(&self) -> &[SourceDescriptor] {
        &self.specialized
    }

    /// Looks a source up by name in either catalog.
    pub fn find(&self, name: &str) -> Option<&SourceDescriptor> {
        self.general
            .iter()
            .chain(self.specialized.iter())
            .find(|source| source.name == name)
    }

    pub fn len(&self) -> usize {
        self.general.len() + self.specialized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
