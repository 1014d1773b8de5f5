use std::collections::HashSet;
use std::fs;
use url::Url;

use crate::extractor::extract;

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("Failed to read test fixture")
}

#[test]
fn test_extract_search_results_page() {
    let html = fixture("search_results.html");
    let base = Url::parse("https://www.example.com").unwrap();

    let listings = extract(&html, &base, "/course/");

    let urls: Vec<&str> = listings.iter().map(|l| l.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://www.example.com/course/python-para-iniciantes/",
            "https://www.example.com/course/automate-the-boring-stuff/",
            "https://www.example.com/course/data-science_with-pandas?ref=search&pos=3",
            "https://www.example.com/course/django-rest-framework",
        ]
    );

    // Visible text of the card, whitespace collapsed
    assert!(listings[0].title.starts_with("Python para Iniciantes"));
    // Image-only anchor comes first, so its alt text wins
    assert_eq!(listings[1].title, "Automate the Boring Stuff with Python");
    // No text, no alt: built from the url
    assert_eq!(listings[2].title, "Data Science With Pandas");
    // "Ver" is too short to be a title
    assert_eq!(listings[3].title, "Django Rest Framework");
}

#[test]
fn test_navigation_links_are_not_courses() {
    let html = fixture("search_results.html");
    let base = Url::parse("https://www.example.com").unwrap();

    let listings = extract(&html, &base, "/course/");

    assert!(listings.iter().all(|l| !l.url.ends_with("/courses/")));
    assert!(listings.iter().all(|l| !l.url.contains("/login")));
}

#[test]
fn test_extract_broken_markup() {
    let html = fixture("broken_markup.html");
    let base = Url::parse("https://academy.hackthebox.com").unwrap();

    let listings = extract(&html, &base, "/module/");

    let urls: HashSet<&str> = listings.iter().map(|l| l.url.as_str()).collect();
    let expected: HashSet<&str> = [
        "https://academy.hackthebox.com/module/web-requests",
        "https://academy.hackthebox.com/module/linux-fundamentals",
        "https://academy.hackthebox.com/module/intro-to-academy",
        "https://academy.hackthebox.com/module/sql-injection-fundamentals",
    ]
    .into_iter()
    .collect();

    assert_eq!(urls, expected);
    assert_eq!(listings.len(), expected.len());
    assert!(listings.iter().all(|l| !l.title.is_empty()));
}

#[test]
fn test_title_fallback_to_image_alt() {
    let html = r#"<a href="/c/intro-to-go"><img src="go.png" alt="Intro to Go"></a>"#;
    let base = Url::parse("https://a.example").unwrap();

    let listings = extract(html, &base, "/c/");

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].title, "Intro to Go");
}

#[test]
fn test_title_fallback_to_url_segment() {
    let html = r#"<a href="https://a.example/c/learn-golang-basics?ref=x"></a>"#;
    let base = Url::parse("https://a.example").unwrap();

    let listings = extract(html, &base, "/c/");

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].title, "Learn Golang Basics");
    assert_eq!(listings[0].url, "https://a.example/c/learn-golang-basics?ref=x");
}

#[test]
fn test_listing_without_any_title_is_dropped() {
    // Only path segment is empty, nothing to build a title from
    let html = r#"<a href="https://a.example/?c=/c/"></a>"#;
    let base = Url::parse("https://a.example").unwrap();

    assert!(extract(html, &base, "/c/").is_empty());
}

#[test]
fn test_catalog_index_link_is_not_a_course() {
    // Short text and an empty final segment: nothing to call it
    let html = r#"
        <a href="/course/">Ver</a>
        <a href="/course/rust-basics/">Ver</a>
        <a href="/course/go-basics">Ver</a>
    "#;
    let base = Url::parse("https://www.udemy.com").unwrap();

    let listings = extract(html, &base, "/c");

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].title, "Go Basics");
    assert_eq!(listings[0].url, "https://www.udemy.com/course/go-basics");
}

#[test]
fn test_garbage_input_does_not_panic() {
    let base = Url::parse("https://a.example").unwrap();
    let inputs = [
        "",
        "<<<>>>",
        "<a href=\"/c/x",
        "\u{0}\u{1}<a href='/c/\u{fffd}'>\u{fffd}</a>",
        "<a href=\"/c/%zz%\">Broken escapes</a>",
    ];
    for input in inputs {
        let _ = extract(input, &base, "/c/");
    }
}
