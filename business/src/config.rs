//! Client configuration.

/// Where the backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

/// Default backend for local development.
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable overriding the backend base URL.
pub const BASE_URL_ENV: &str = "BIBLIO_API_BASE_URL";

impl BusinessConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            api_base_url: base_url,
        }
    }

    /// Read the base URL from `BIBLIO_API_BASE_URL`, falling back to the
    /// local default.
    pub fn from_env() -> Self {
        let base_url = match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => {
                log::info!("using API base URL from {BASE_URL_ENV}: {url}");
                url
            }
            _ => DEFAULT_BASE_URL.to_string(),
        };
        Self::new(base_url)
    }

    /// The API root all endpoint paths hang off of.
    pub fn api_url(&self) -> String {
        format!("{}/api", self.api_base_url.trim_end_matches('/'))
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_url() {
        let config = BusinessConfig::default();
        assert_eq!(config.api_url(), "http://localhost:8080/api");
    }

    #[test]
    fn test_api_url_tolerates_trailing_slash() {
        let config = BusinessConfig::new("http://localhost:9090/".to_string());
        assert_eq!(config.api_url(), "http://localhost:9090/api");
    }

    #[test]
    fn test_custom_base_url() {
        let config = BusinessConfig::new("https://library.example.com".to_string());
        assert_eq!(config.api_url(), "https://library.example.com/api");
    }
}
