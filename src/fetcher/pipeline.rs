use crate::fetcher::types::{Charset, PageResponse};
use bytes::Bytes;
use encoding_rs::Encoding;
use regex::Regex;
use reqwest::StatusCode;
use std::sync::LazyLock;
use tracing::debug;
use url::Url;

static CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

static META_HTTP_EQUIV_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+[^>]*?http-equiv\s*=\s*["']?content-type["']?[^>]*?content\s*=\s*["']?[^"'>]*?charset\s*=\s*([^"'\s;/>]+)"#).unwrap()
});

/// Bytes of the body searched for `<meta>` charset declarations.
const META_SCAN_LIMIT: usize = 4096;

pub fn process_response(
    url_final: Url,
    status: StatusCode,
    body_bytes: Bytes,
    content_type: &str,
) -> PageResponse {
    let charset = detect_charset(content_type, &body_bytes);
    let body_utf8 = decode_to_utf8(&body_bytes, &charset, &url_final);

    PageResponse {
        url_final,
        status,
        body_utf8,
        charset,
    }
}

fn charset_from_captures(regex: &Regex, haystack: &str) -> Option<Charset> {
    let label = regex.captures(haystack)?.get(1)?.as_str().to_lowercase();
    Encoding::for_label(label.as_bytes()).map(Charset::from_encoding)
}

fn detect_charset(content_type: &str, body_bytes: &[u8]) -> Charset {
    // Header first, then the document's own declarations.
    if let Some(charset) = charset_from_captures(&CHARSET_REGEX, content_type) {
        return charset;
    }

    let search_bytes = &body_bytes[..body_bytes.len().min(META_SCAN_LIMIT)];
    let search_str = String::from_utf8_lossy(search_bytes);

    if let Some(charset) = charset_from_captures(&META_CHARSET_REGEX, &search_str) {
        return charset;
    }
    if let Some(charset) = charset_from_captures(&META_HTTP_EQUIV_REGEX, &search_str) {
        return charset;
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(search_bytes, false);
    Charset::from_encoding(detector.guess(None, true))
}

/// Lossy: a stray invalid byte must not cost the whole page.
fn decode_to_utf8(body_bytes: &[u8], charset: &Charset, url: &Url) -> String {
    let encoding = charset.encoding();
    let (decoded, _encoding, had_errors) = encoding.decode(body_bytes);

    if had_errors {
        debug!(%url, encoding = encoding.name(), "replaced undecodable bytes");
    }

    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_url() -> Url {
        Url::parse("https://example.com").unwrap()
    }

    #[test]
    fn test_detect_charset_from_content_type() {
        let content_type = "text/html; charset=utf-8";
        let body = b"<html><head><title>Test</title></head></html>";

        assert_eq!(detect_charset(content_type, body), Charset::Utf8);
    }

    #[test]
    fn test_detect_charset_from_meta_tag() {
        let content_type = "text/html";
        let body = b"<html><head><meta charset=\"iso-8859-1\"><title>Test</title></head></html>";

        // encoding_rs maps ISO-8859-1 to its superset windows-1252
        assert_eq!(detect_charset(content_type, body), Charset::Windows1252);
    }

    #[test]
    fn test_detect_charset_from_meta_http_equiv() {
        let content_type = "text/html";
        let body = b"<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1252\"><title>Test</title></head></html>";

        assert_eq!(detect_charset(content_type, body), Charset::Windows1252);
    }

    #[test]
    fn test_decode_latin1_course_title() {
        // "Programação" in windows-1252
        let body = b"Programa\xe7\xe3o";
        let decoded = decode_to_utf8(body, &Charset::Windows1252, &test_url());
        assert_eq!(decoded, "Programação");
    }

    #[test]
    fn test_decode_invalid_utf8_is_lossy() {
        let body = b"Curso \xff completo";
        let decoded = decode_to_utf8(body, &Charset::Utf8, &test_url());
        assert!(decoded.starts_with("Curso "));
        assert!(decoded.ends_with(" completo"));
    }

    #[test]
    fn test_process_response_keeps_url_and_status() {
        let response = process_response(
            test_url(),
            StatusCode::OK,
            Bytes::from_static(b"<html><body>Hello</body></html>"),
            "text/html; charset=utf-8",
        );
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.charset, Charset::Utf8);
        assert!(response.body_utf8.contains("Hello"));
    }
}
