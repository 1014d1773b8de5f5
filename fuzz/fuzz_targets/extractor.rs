#![no_main]

use libfuzzer_sys::fuzz_target;
use url::Url;

use coursescout::extractor::extract;

fuzz_target!(|data: &[u8]| {
    let html = String::from_utf8_lossy(data);
    let base_url = Url::parse("https://www.example.com/cursos/").unwrap();

    // Arbitrary markup must never panic, and every listing must be absolute.
    for listing in extract(&html, &base_url, "/") {
        assert!(listing.url.starts_with("http"));
        assert!(!listing.title.is_empty());
    }
});
