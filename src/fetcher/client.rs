use crate::fetcher::{
    errors::{FetchError, is_retriable_status},
    pipeline::process_response,
    types::{FetchSettings, PageResponse},
};
use bytes::BytesMut;
use reqwest::{Client, ClientBuilder, header};
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

const MAX_BODY_SIZE: u64 = 5 * 1024 * 1024; // 5MB
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_REDIRECTS: usize = 10;

/// Fetches search pages. Cloning is cheap and shares the connection pool.
#[derive(Clone, Debug)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(settings: &FetchSettings) -> Result<Self, FetchError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(
            header::ACCEPT_LANGUAGE,
            header::HeaderValue::from_static("pt-BR,pt;q=0.9,en;q=0.8"),
        );

        let client = ClientBuilder::new()
            .connect_timeout(CONNECT_TIMEOUT.min(settings.timeout))
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client })
    }

    /// Fetches one page, reporting every failure as a typed error.
    #[instrument(skip_all, fields(url = %url))]
    pub async fn try_fetch(&self, url: &str) -> Result<PageResponse, FetchError> {
        let parsed_url = url::Url::parse(url)?;

        let mut response = self
            .client
            .get(parsed_url)
            .send()
            .await
            .map_err(FetchError::from_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status,
                retriable: is_retriable_status(status),
            });
        }

        if let Some(content_length) = response.content_length()
            && content_length > MAX_BODY_SIZE
        {
            return Err(FetchError::BodyTooLarge(content_length));
        }

        let final_url = response.url().clone();

        // Missing content type is common on small sites; assume html.
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("text/html")
            .to_string();

        if !is_html(&content_type) {
            return Err(FetchError::UnsupportedContentType(content_type));
        }

        // Content-Length may be absent or wrong, so the cap is enforced per chunk.
        let mut body = BytesMut::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(FetchError::from_reqwest_error)?
        {
            append_capped(&mut body, &chunk, MAX_BODY_SIZE)?;
        }

        Ok(process_response(final_url, status, body.freeze(), &content_type))
    }

    /// Fetches one page and returns its html, or `None` on any failure.
    ///
    /// Failures are logged and swallowed here so that one broken source can
    /// never abort a search across the others.
    pub async fn fetch(&self, url: &str) -> Option<String> {
        match self.try_fetch(url).await {
            Ok(page) => {
                debug!(
                    url = %page.url_final,
                    status = %page.status,
                    charset = ?page.charset,
                    bytes = page.body_utf8.len(),
                    "fetched page"
                );
                Some(page.body_utf8)
            }
            Err(err) if err.is_timeout() => {
                warn!(%url, "timed out fetching page");
                None
            }
            Err(err @ FetchError::Http { .. }) => {
                warn!(%url, error = %err, "source answered with an error status");
                None
            }
            Err(err) => {
                error!(%url, error = %err, "failed to fetch page");
                None
            }
        }
    }
}

/// Media types are case-insensitive (`Text/HTML` is html).
fn is_html(content_type: &str) -> bool {
    let content_type = content_type.to_ascii_lowercase();
    content_type.contains("text/html") || content_type.contains("application/xhtml")
}

fn append_capped(body: &mut BytesMut, chunk: &[u8], cap: u64) -> Result<(), FetchError> {
    let len = (body.len() + chunk.len()) as u64;
    if len > cap {
        return Err(FetchError::BodyTooLarge(len));
    }
    body.extend_from_slice(chunk);
    Ok(())
}
