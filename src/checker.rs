//! URL checker for the sitemap and robots tools.
//!
//! Probes run on a fixed pool of worker threads that pull from a shared
//! queue. Each URL gets a `HEAD` first and a `GET` if the server refuses the
//! method; transient failures are retried with linear backoff.
//!
//! Requires the `remote` feature (enabled by default).

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::error::UrlCheckError;

/// Default worker count.
pub const DEFAULT_CONCURRENCY: usize = 6;
/// Upper bound on workers regardless of what the caller asks for.
pub const MAX_CONCURRENCY: usize = 20;
/// Default per-request timeout (10 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Default attempts per URL, first try included.
pub const DEFAULT_ATTEMPTS: u32 = 3;

const DEFAULT_BACKOFF: Duration = Duration::from_millis(500);

const USER_AGENT: &str = concat!("schema-builder/", env!("CARGO_PKG_VERSION"));

/// Options for [`check_urls`].
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub concurrency: usize,
    pub timeout: Duration,
    pub attempts: u32,
    /// Delay before retry `n` is `backoff * n`.
    pub backoff: Duration,
}

impl CheckOptions {
    pub fn new() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            timeout: DEFAULT_TIMEOUT,
            attempts: DEFAULT_ATTEMPTS,
            backoff: DEFAULT_BACKOFF,
        }
    }

    /// Worker count, clamped to `1..=20`.
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.clamp(1, MAX_CONCURRENCY);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Attempts per URL; at least one.
    pub fn attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts.max(1);
        self
    }

    pub fn backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlStatus {
    Valid,
    Broken,
    Skipped,
}

/// Outcome for one URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlCheckResult {
    pub url: String,
    pub status: UrlStatus,
    /// Last HTTP status seen; `None` when no response ever arrived.
    pub status_code: Option<u16>,
    pub attempts: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Check every URL and report each as valid, broken or skipped.
///
/// Results come back in input order. Non-http(s) and unparsable URLs are
/// skipped without a request.
///
/// # Errors
///
/// Returns `UrlCheckError::Client` if the HTTP client cannot be built.
/// Failures of individual URLs are reported as `broken` results.
pub fn check_urls(urls: &[String], options: &CheckOptions) -> Result<Vec<UrlCheckResult>, UrlCheckError> {
    let client = build_client(options.timeout)?;
    let workers = options.concurrency.clamp(1, MAX_CONCURRENCY).min(urls.len().max(1));
    debug!(urls = urls.len(), workers, "checking urls");

    let queue: Mutex<VecDeque<(usize, &str)>> =
        Mutex::new(urls.iter().map(String::as_str).enumerate().collect());

    let mut slots: Vec<Option<UrlCheckResult>> = vec![None; urls.len()];
    let (queue, client) = (&queue, &client);

    thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                scope.spawn(move || {
                    let mut done = Vec::new();
                    while let Some((index, url)) = next_job(queue) {
                        done.push((index, check_one(client, url, options)));
                    }
                    done
                })
            })
            .collect();

        for handle in handles {
            match handle.join() {
                Ok(done) => {
                    for (index, result) in done {
                        slots[index] = Some(result);
                    }
                }
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
    });

    Ok(slots.into_iter().flatten().collect())
}

fn next_job<'a>(queue: &Mutex<VecDeque<(usize, &'a str)>>) -> Option<(usize, &'a str)> {
    queue
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .pop_front()
}

fn check_one(client: &Client, url: &str, options: &CheckOptions) -> UrlCheckResult {
    if parse_http_url(url).is_err() {
        return UrlCheckResult {
            url: url.to_string(),
            status: UrlStatus::Skipped,
            status_code: None,
            attempts: 0,
            error: None,
        };
    }

    let mut status_code = None;
    let mut error = None;
    let mut attempt = 0;

    while attempt < options.attempts {
        attempt += 1;

        match probe(client, url) {
            Ok(status) => {
                status_code = Some(status.as_u16());
                error = None;
                if status.as_u16() < 400 {
                    return finished(url, UrlStatus::Valid, status_code, attempt, None);
                }
                if !is_transient(status) {
                    return finished(url, UrlStatus::Broken, status_code, attempt, None);
                }
            }
            Err(e) => error = Some(e.to_string()),
        }

        if attempt < options.attempts {
            warn!(url, attempt, status = ?status_code, "retrying url check");
            thread::sleep(options.backoff * attempt);
        }
    }

    finished(url, UrlStatus::Broken, status_code, attempt, error)
}

fn finished(
    url: &str,
    status: UrlStatus,
    status_code: Option<u16>,
    attempts: u32,
    error: Option<String>,
) -> UrlCheckResult {
    UrlCheckResult {
        url: url.to_string(),
        status,
        status_code,
        attempts,
        error,
    }
}

/// `HEAD`, falling back to `GET` for servers that refuse it.
fn probe(client: &Client, url: &str) -> reqwest::Result<StatusCode> {
    let status = client.head(url).send()?.status();
    if status == StatusCode::METHOD_NOT_ALLOWED || status == StatusCode::NOT_IMPLEMENTED {
        return Ok(client.get(url).send()?.status());
    }
    Ok(status)
}

/// Server errors, timeouts and rate limiting are worth another try.
fn is_transient(status: StatusCode) -> bool {
    status.is_server_error()
        || status == StatusCode::REQUEST_TIMEOUT
        || status == StatusCode::TOO_MANY_REQUESTS
}

/// Body of a `robots.txt` fetch.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsResponse {
    pub url: String,
    pub status_code: u16,
    pub text: String,
}

/// Fetch `/robots.txt` from the origin of `url`.
///
/// Any path on `url` is ignored, so both `https://example.com` and
/// `https://example.com/blog/post` fetch `https://example.com/robots.txt`.
pub fn fetch_robots(url: &str, timeout: Duration) -> Result<RobotsResponse, UrlCheckError> {
    let base = parse_http_url(url)?;
    let robots = base.join("/robots.txt").map_err(|e| UrlCheckError::InvalidUrl {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    let client = build_client(timeout)?;
    let response = client.get(robots.as_str()).send().map_err(|source| network(&robots, source))?;
    let status_code = response.status().as_u16();
    let text = response.text().map_err(|source| network(&robots, source))?;

    Ok(RobotsResponse {
        url: robots.to_string(),
        status_code,
        text,
    })
}

/// Method accepted by [`fetch_url`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMethod {
    Get,
    Head,
}

impl FetchMethod {
    pub fn parse(method: &str) -> Result<Self, UrlCheckError> {
        match method.trim().to_ascii_uppercase().as_str() {
            "GET" | "" => Ok(Self::Get),
            "HEAD" => Ok(Self::Head),
            _ => Err(UrlCheckError::UnsupportedMethod {
                method: method.to_string(),
            }),
        }
    }
}

/// Result of a single proxied request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResponse {
    pub status_code: u16,
    pub ok: bool,
    /// `Content-Type` header, if any.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Body text; only read for `GET`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Fetch one URL and report status, content type and (for `GET`) the body.
pub fn fetch_url(url: &str, method: FetchMethod, timeout: Duration) -> Result<FetchResponse, UrlCheckError> {
    let parsed = parse_http_url(url)?;
    let client = build_client(timeout)?;

    let request = match method {
        FetchMethod::Get => client.get(parsed.as_str()),
        FetchMethod::Head => client.head(parsed.as_str()),
    };
    let response = request.send().map_err(|source| network(&parsed, source))?;

    let status = response.status();
    let content_type = content_type(&response);
    let text = match method {
        FetchMethod::Get => Some(response.text().map_err(|source| network(&parsed, source))?),
        FetchMethod::Head => None,
    };

    Ok(FetchResponse {
        status_code: status.as_u16(),
        ok: status.is_success(),
        content_type,
        text,
    })
}

fn content_type(response: &Response) -> Option<String> {
    response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(String::from)
}

fn build_client(timeout: Duration) -> Result<Client, UrlCheckError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .map_err(|source| UrlCheckError::Client { source })
}

fn network(url: &Url, source: reqwest::Error) -> UrlCheckError {
    UrlCheckError::NetworkError {
        url: url.to_string(),
        source,
    }
}

fn parse_http_url(url: &str) -> Result<Url, UrlCheckError> {
    let parsed = Url::parse(url.trim()).map_err(|e| UrlCheckError::InvalidUrl {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(UrlCheckError::InvalidUrl {
            url: url.to_string(),
            message: format!("unsupported scheme '{}'", scheme),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_clamp() {
        assert_eq!(CheckOptions::new().concurrency(0).concurrency, 1);
        assert_eq!(CheckOptions::new().concurrency(64).concurrency, MAX_CONCURRENCY);
        assert_eq!(CheckOptions::new().attempts(0).attempts, 1);

        let options = CheckOptions::default();
        assert_eq!(options.concurrency, 6);
        assert_eq!(options.timeout, Duration::from_secs(10));
        assert_eq!(options.attempts, 3);
    }

    #[test]
    fn transient_statuses() {
        assert!(is_transient(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(is_transient(StatusCode::BAD_GATEWAY));
        assert!(is_transient(StatusCode::REQUEST_TIMEOUT));
        assert!(is_transient(StatusCode::TOO_MANY_REQUESTS));
        assert!(!is_transient(StatusCode::NOT_FOUND));
        assert!(!is_transient(StatusCode::GONE));
    }

    #[test]
    fn http_urls_only() {
        assert!(parse_http_url("https://example.com/a").is_ok());
        assert!(parse_http_url(" http://example.com ").is_ok());
        assert!(parse_http_url("ftp://example.com/file").is_err());
        assert!(parse_http_url("mailto:someone@example.com").is_err());
        assert!(parse_http_url("example.com").is_err());
    }

    #[test]
    fn fetch_methods() {
        assert_eq!(FetchMethod::parse("get").unwrap(), FetchMethod::Get);
        assert_eq!(FetchMethod::parse("HEAD").unwrap(), FetchMethod::Head);
        assert_eq!(FetchMethod::parse("").unwrap(), FetchMethod::Get);
        assert!(matches!(
            FetchMethod::parse("POST"),
            Err(UrlCheckError::UnsupportedMethod { .. })
        ));
    }

    #[test]
    fn skipped_urls_never_hit_the_network() {
        let urls = vec!["ftp://example.com".to_string(), "not a url".to_string()];
        let results = check_urls(&urls, &CheckOptions::new()).unwrap();

        assert_eq!(results.len(), 2);
        for result in &results {
            assert_eq!(result.status, UrlStatus::Skipped);
            assert_eq!(result.attempts, 0);
            assert_eq!(result.status_code, None);
        }
    }

    #[test]
    fn empty_input() {
        assert!(check_urls(&[], &CheckOptions::new()).unwrap().is_empty());
    }

    #[test]
    fn result_json_shape() {
        let result = finished("https://x.com", UrlStatus::Valid, Some(200), 1, None);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({
                "url": "https://x.com",
                "status": "valid",
                "statusCode": 200,
                "attempts": 1
            })
        );
    }
}
