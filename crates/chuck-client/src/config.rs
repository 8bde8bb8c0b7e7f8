//! Jokes API client configuration.
//!
//! Defaults point at the public production endpoint. Override via
//! environment variables or explicit construction for testing.

use url::Url;

/// Production base URL of the jokes API.
pub const DEFAULT_BASE_URL: &str = "https://api.chucknorris.io";

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for connecting to the jokes API.
#[derive(Debug, Clone)]
pub struct ChuckApiConfig {
    /// Base URL; the random-joke path is resolved relative to it.
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl ChuckApiConfig {
    /// Production endpoint with the default timeout.
    pub fn production() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url("default", DEFAULT_BASE_URL)?,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `CHUCK_API_URL` (default: `https://api.chucknorris.io`)
    /// - `CHUCK_TIMEOUT_SECS` (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_url =
            std::env::var("CHUCK_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let base_url = parse_base_url("CHUCK_API_URL", &raw_url)?;

        let timeout_secs = match std::env::var("CHUCK_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout_secs("CHUCK_TIMEOUT_SECS", &raw)?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            timeout_secs,
        })
    }

    /// Create a configuration pointing at a local mock server (for testing).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if `uri` cannot be parsed.
    pub fn local_mock(uri: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url("mock", uri)?,
            timeout_secs: 5,
        })
    }

    /// Replace the base URL, validating it.
    pub fn with_base_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.base_url = parse_base_url("--api-url", raw)?;
        Ok(self)
    }
}

/// Parse a request timeout in whole seconds. Must be at least 1.
pub(crate) fn parse_timeout_secs(source: &str, raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidNumber(source.to_string(), raw.to_string())),
    }
}

/// Parse a base URL and make sure it ends in `/`, so relative joins append
/// rather than replace the last path segment.
pub(crate) fn parse_base_url(source: &str, raw: &str) -> Result<Url, ConfigError> {
    let mut url =
        Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl(source.to_string(), e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl(
            source.to_string(),
            "URL cannot be used as a base".to_string(),
        ));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("invalid number for {0}: {1:?}")]
    InvalidNumber(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_points_at_public_api() {
        let cfg = ChuckApiConfig::production().unwrap();
        assert_eq!(cfg.base_url.as_str(), "https://api.chucknorris.io/");
        assert_eq!(cfg.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn local_mock_builds_valid_config() {
        let cfg = ChuckApiConfig::local_mock("http://127.0.0.1:9000").unwrap();
        assert_eq!(cfg.base_url.as_str(), "http://127.0.0.1:9000/");
        assert_eq!(cfg.timeout_secs, 5);
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let url = parse_base_url("test", "http://localhost:8080/api").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/");
        assert_eq!(
            url.join("jokes/random").unwrap().as_str(),
            "http://localhost:8080/api/jokes/random"
        );
    }

    #[test]
    fn rejects_invalid_url() {
        assert!(parse_base_url("test", "not a url").is_err());
        assert!(parse_base_url("test", "mailto:chuck@example.com").is_err());
    }

    #[test]
    fn with_base_url_overrides() {
        let cfg = ChuckApiConfig::production()
            .unwrap()
            .with_base_url("http://127.0.0.1:1234")
            .unwrap();
        assert_eq!(cfg.base_url.as_str(), "http://127.0.0.1:1234/");
    }

    #[test]
    fn timeout_must_be_positive() {
        assert_eq!(parse_timeout_secs("t", " 3 ").unwrap(), 3);
        assert!(matches!(
            parse_timeout_secs("CHUCK_TIMEOUT_SECS", "0"),
            Err(ConfigError::InvalidNumber(name, raw)) if name == "CHUCK_TIMEOUT_SECS" && raw == "0"
        ));
        assert!(parse_timeout_secs("t", "-1").is_err());
        assert!(parse_timeout_secs("t", "ten").is_err());
    }

    #[test]
    fn from_env_reads_overrides() {
        // Unique variable values; both are removed before asserting.
        std::env::set_var("CHUCK_API_URL", "http://127.0.0.1:4321");
        std::env::set_var("CHUCK_TIMEOUT_SECS", "3");
        let cfg = ChuckApiConfig::from_env();
        std::env::remove_var("CHUCK_API_URL");
        std::env::remove_var("CHUCK_TIMEOUT_SECS");

        let cfg = cfg.unwrap();
        assert_eq!(cfg.base_url.as_str(), "http://127.0.0.1:4321/");
        assert_eq!(cfg.timeout_secs, 3);
    }
}
