use futures::future::join_all;
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::catalog::{Category, SourceDescriptor, SourceRegistry, categories::SECURITY_TERMS};
use crate::dedup::dedup_listings;
use crate::extractor::CourseListing;
use crate::fetcher::{FetchError, FetchSettings, PageFetcher};
use crate::search::{CourseType, SearchRequest, escape_term, filter, scraper::scrape};

/// Fans a search out over the registry and merges the answers.
///
/// Every search gets its own http client, shared by all of that search's
/// fetches and dropped when it finishes.
#[derive(Debug, Clone)]
pub struct Aggregator {
    registry: Arc<SourceRegistry>,
    settings: FetchSettings,
}

impl Aggregator {
    /// Fails only if the fetch settings cannot produce an http client.
    pub fn new(registry: Arc<SourceRegistry>, settings: FetchSettings) -> Result<Self, FetchError> {
        PageFetcher::new(&settings)?;
        Ok(Self { registry, settings })
    }

    pub fn registry(&self) -> &SourceRegistry {
        &self.registry
    }

    /// Searches every selected source at once and waits for all of them.
    ///
    /// Output order follows the catalog, not completion order. Sources that
    /// fail contribute nothing; an empty result means nothing was found.
    pub async fn search(&self, request: &SearchRequest) -> Vec<CourseListing> {
        match self.fetcher() {
            Some(fetcher) => self.search_with(&fetcher, request).await,
            None => Vec::new(),
        }
    }

    /// Runs one search per term concurrently and merges them in term order.
    pub async fn search_terms(&self, terms: &[&str], course_type: CourseType) -> Vec<CourseListing> {
        let requests: Vec<SearchRequest> = terms
            .iter()
            .map(|term| SearchRequest::new(*term, course_type))
            .collect();
        self.search_many(&requests).await
    }

    /// A category's terms, preceded by the specialized catalog when the
    /// category asks for it.
    #[instrument(skip_all, fields(category = category.key, course_type = %course_type))]
    pub async fn search_category(
        &self,
        category: &Category,
        course_type: CourseType,
    ) -> Vec<CourseListing> {
        let mut requests = Vec::with_capacity(category.terms.len() + 1);
        if category.includes_specialized {
            requests.push(SearchRequest::specialized(course_type));
        }
        requests.extend(
            category
                .terms
                .iter()
                .map(|term| SearchRequest::new(*term, course_type)),
        );
        self.search_many(&requests).await
    }

    /// Security courses: the specialized catalog plus general searches for
    /// the security terms.
    pub async fn search_security(&self, course_type: CourseType) -> Vec<CourseListing> {
        let category = Category {
            key: "security",
            label: "Security",
            terms: SECURITY_TERMS,
            includes_specialized: true,
        };
        self.search_category(&category, course_type).await
    }

    async fn search_many(&self, requests: &[SearchRequest]) -> Vec<CourseListing> {
        let Some(fetcher) = self.fetcher() else {
            return Vec::new();
        };

        let per_request = join_all(
            requests
                .iter()
                .map(|request| self.search_with(&fetcher, request)),
        )
        .await;

        dedup_listings(per_request.into_iter().flatten())
    }

    #[instrument(skip_all, fields(term = %request.term, course_type = %request.course_type, catalog = ?request.catalog))]
    async fn search_with(&self, fetcher: &PageFetcher, request: &SearchRequest) -> Vec<CourseListing> {
        let term = request.term.trim();
        let formatted_term = escape_term(term);
        let sources = self.sources_for(request, term);

        info!(sources = sources.len(), "starting search");

        // join_all polls every scrape on this task and hands the results back
        // in launch order once the last one resolves.
        let per_source = join_all(
            sources
                .iter()
                .map(|source| scrape(fetcher, source, &formatted_term)),
        )
        .await;

        let raw = per_source.iter().map(Vec::len).sum::<usize>();
        let listings = dedup_listings(per_source.into_iter().flatten());

        info!(raw, unique = listings.len(), "search finished");
        listings
    }

    fn sources_for<'a>(&'a self, request: &SearchRequest, term: &str) -> Vec<&'a SourceDescriptor> {
        let catalog = self.registry.catalog(request.catalog);
        filter::select(catalog, request.course_type)
            .into_iter()
            // Without a term only fixed catalog pages make sense.
            .filter(|source| !term.is_empty() || !source.takes_term())
            .collect()
    }

    fn fetcher(&self) -> Option<PageFetcher> {
        match PageFetcher::new(&self.settings) {
            Ok(fetcher) => Some(fetcher),
            Err(err) => {
                error!(error = %err, "could not build http client for search");
                None
            }
        }
    }
}
