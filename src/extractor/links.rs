use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::dedup::dedup_listings;
use crate::extractor::{model::CourseListing, title::resolve_title};

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").unwrap());

/// Pulls course links out of a search page.
///
/// An anchor counts as a course link when its raw href contains
/// `link_filter`. Relative hrefs are resolved against `base_url`; links that
/// do not resolve to an http(s) url are dropped, as are links for which no
/// title can be found. The result is deduplicated by url in document order.
///
/// The html5ever parser recovers from any markup, so this never fails; a page
/// without matching anchors yields an empty list.
pub fn extract(html: &str, base_url: &Url, link_filter: &str) -> Vec<CourseListing> {
    let document = Html::parse_document(html);

    let listings = document.select(&ANCHOR_SELECTOR).filter_map(|anchor| {
        let href = anchor.value().attr("href")?;
        if !href.contains(link_filter) {
            return None;
        }
        let url = resolve_href(base_url, href)?;
        let title = resolve_title(&anchor, &url)?;
        Some(CourseListing::new(title, url.to_string()))
    });

    dedup_listings(listings)
}

fn resolve_href(base_url: &Url, href: &str) -> Option<Url> {
    let url = base_url.join(href.trim()).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}
