//! Input bundle loading from files, strings, and HTTP URLs.

use std::path::Path;

use crate::error::LoadError;
use crate::types::BuildParams;

#[cfg(feature = "remote")]
use std::time::Duration;

/// Default timeout for HTTP requests (10 seconds).
#[cfg(feature = "remote")]
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Load an input bundle from a file path.
///
/// # Errors
///
/// Returns `LoadError::FileNotFound` if the file doesn't exist,
/// `LoadError::InvalidJson` if it isn't valid JSON, or
/// `LoadError::InvalidBundle` if the JSON doesn't have the bundle's shape.
pub fn load_params(path: &Path) -> Result<BuildParams, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    load_params_str(&content)
}

/// Load an input bundle from a JSON string.
pub fn load_params_str(content: &str) -> Result<BuildParams, LoadError> {
    serde_json::from_str(content).map_err(LoadError::from_json)
}

/// Load an input bundle from an HTTP/HTTPS URL.
///
/// Requires the `remote` feature (enabled by default).
#[cfg(feature = "remote")]
pub fn load_params_url(url: &str) -> Result<BuildParams, LoadError> {
    let network = |source| LoadError::NetworkError {
        url: url.to_string(),
        source,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(network)?;

    let body = client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(network)?;

    load_params_str(&body)
}

/// Check if a string looks like a URL (starts with http:// or https://).
pub fn is_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Load an input bundle from a file path or URL.
///
/// URL loading requires the `remote` feature.
pub fn load_params_auto(source: &str) -> Result<BuildParams, LoadError> {
    if is_url(source) {
        #[cfg(feature = "remote")]
        {
            load_params_url(source)
        }
        #[cfg(not(feature = "remote"))]
        {
            Err(LoadError::FileNotFound {
                path: std::path::PathBuf::from(source),
            })
        }
    } else {
        load_params(Path::new(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SchemaKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const ARTICLE: &str = r#"{
        "type": "Article",
        "fields": { "headline": "Hello" },
        "images": ["https://example.com/a.jpg"],
        "faqItemsState": [],
        "openingHoursState": [{ "days": "Monday", "opens": "09:00", "closes": "17:00" }]
    }"#;

    #[test]
    fn load_params_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", ARTICLE).unwrap();

        let params = load_params(file.path()).unwrap();
        assert_eq!(params.kind, SchemaKind::Article);
        assert_eq!(params.fields["headline"], "Hello");
        assert_eq!(params.opening_hours[0].closes, "17:00");
    }

    #[test]
    fn load_params_file_not_found() {
        let result = load_params(Path::new("/nonexistent/input.json"));
        assert!(matches!(result, Err(LoadError::FileNotFound { .. })));
    }

    #[test]
    fn load_params_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = load_params(file.path());
        assert!(matches!(result, Err(LoadError::InvalidJson { .. })));
    }

    #[test]
    fn load_params_str_defaults_missing_lists() {
        let params = load_params_str(r#"{"type": "Local Business"}"#).unwrap();
        assert_eq!(params.kind, SchemaKind::LocalBusiness);
        assert!(params.fields.is_empty());
        assert!(params.departments.is_empty());
    }

    #[test]
    fn load_params_str_wrong_shape() {
        let result = load_params_str(r#"{"type": "Article", "images": "a.jpg"}"#);
        assert!(matches!(result, Err(LoadError::InvalidBundle { .. })));
    }

    #[test]
    fn is_url_detection() {
        assert!(is_url("https://example.com/input.json"));
        assert!(is_url("http://localhost:8080/input.json"));
        assert!(!is_url("input.json"));
        assert!(!is_url("./fixtures/input.json"));
    }

    #[test]
    fn load_params_auto_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"type": "WebSite"}}"#).unwrap();

        let params = load_params_auto(file.path().to_str().unwrap()).unwrap();
        assert_eq!(params.kind, SchemaKind::WebSite);
    }

    #[cfg(feature = "remote")]
    mod remote {
        use super::*;

        #[test]
        fn load_params_url_valid() {
            let mut server = mockito::Server::new();
            let mock = server
                .mock("GET", "/input.json")
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(ARTICLE)
                .create();

            let params = load_params_url(&format!("{}/input.json", server.url())).unwrap();
            assert_eq!(params.kind, SchemaKind::Article);
            mock.assert();
        }

        #[test]
        fn load_params_url_404() {
            let mut server = mockito::Server::new();
            server.mock("GET", "/missing.json").with_status(404).create();

            let result = load_params_auto(&format!("{}/missing.json", server.url()));
            match result {
                Err(err @ LoadError::NetworkError { .. }) => assert_eq!(err.exit_code(), 3),
                other => panic!("expected network error, got {:?}", other),
            }
        }
    }
}
