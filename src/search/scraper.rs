use tracing::{debug, instrument};

use crate::catalog::SourceDescriptor;
use crate::extractor::{CourseListing, extract};
use crate::fetcher::PageFetcher;

/// Scrapes one source for an already url-escaped term.
///
/// A failed fetch yields an empty list, which is an ordinary outcome here:
/// the fetcher has already logged why.
#[instrument(skip_all, fields(source = %source.name))]
pub async fn scrape(
    fetcher: &PageFetcher,
    source: &SourceDescriptor,
    formatted_term: &str,
) -> Vec<CourseListing> {
    let url = source.search_url(formatted_term);

    let Some(html) = fetcher.fetch(&url).await else {
        return Vec::new();
    };

    let listings = extract(&html, source.base_url(), &source.link_filter);
    debug!(%url, count = listings.len(), "extracted listings");
    listings
}
