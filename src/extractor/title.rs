use percent_encoding::percent_decode_str;
use scraper::{ElementRef, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::extractor::model::normalize_whitespace;

static IMG_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").unwrap());

/// Titles shorter than this are replaced by one built from the url.
const MIN_TITLE_CHARS: usize = 5;

/// Picks a title for a course link: the anchor text, else the alt text of the
/// first image inside it. A title shorter than five characters is
/// replaced by one built from the final url path segment; when that segment
/// is empty the link has no title.
pub fn resolve_title(anchor: &ElementRef<'_>, url: &Url) -> Option<String> {
    let mut title = normalize_whitespace(&anchor.text().collect::<String>());

    if title.is_empty() {
        title = image_alt(anchor).unwrap_or_default();
    }

    if title.chars().count() < MIN_TITLE_CHARS {
        return title_from_url(url);
    }

    Some(title)
}

fn image_alt(anchor: &ElementRef<'_>) -> Option<String> {
    let img = anchor.select(&IMG_SELECTOR).next()?;
    let alt = normalize_whitespace(img.value().attr("alt")?);
    (!alt.is_empty()).then_some(alt)
}

/// `https://x/course/learn-golang_basics?ref=1` -> `Learn Golang Basics`.
/// `https://x/course/` has an empty final segment and yields `None`.
pub fn title_from_url(url: &Url) -> Option<String> {
    let segment = url.path_segments()?.next_back()?;
    let decoded = percent_decode_str(segment).decode_utf8_lossy();
    let spaced = decoded.replace(['-', '_'], " ");
    let title = title_case(&normalize_whitespace(&spaced));
    (!title.is_empty()).then_some(title)
}

/// Upper-cases every letter that follows a non-letter and lower-cases the
/// others.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}
