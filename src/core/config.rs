use reqwest::Url;
use std::fmt;

use super::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.exchangeratesapi.io";

/// Runtime settings for the rates endpoint.
#[derive(Clone, PartialEq)]
pub struct Settings {
    pub base_url: String,
    pub access_key: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_key: None,
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("base_url", &self.base_url)
            .field("access_key", &self.access_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Settings {
    /// Builds the `latest` endpoint URL for `base`.
    pub fn latest_url(&self, base: &str) -> Result<Url> {
        let endpoint = format!("{}/latest", self.base_url.trim_end_matches('/'));

        let mut params = vec![("base", base)];
        if let Some(key) = self.access_key.as_deref() {
            params.push(("access_key", key));
        }

        Url::parse_with_params(&endpoint, &params).map_err(|e| Error::Endpoint {
            url: endpoint.clone(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_latest_url() {
        let url = Settings::default().latest_url("USD").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.exchangeratesapi.io/latest?base=USD"
        );
    }

    #[test]
    fn test_latest_url_with_access_key_and_trailing_slash() {
        let settings = Settings {
            base_url: "http://localhost:8080/".to_string(),
            access_key: Some("secret".to_string()),
        };
        let url = settings.latest_url("EUR").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/latest?base=EUR&access_key=secret"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let settings = Settings {
            base_url: "not a url".to_string(),
            access_key: None,
        };
        let err = settings.latest_url("USD").unwrap_err();
        assert!(matches!(err, Error::Endpoint { .. }));
        assert!(err.to_string().starts_with("Invalid rates endpoint not a url/latest"));
    }

    #[test]
    fn test_debug_redacts_access_key() {
        let settings = Settings {
            access_key: Some("secret".to_string()),
            ..Settings::default()
        };
        let debug = format!("{settings:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<redacted>"));
    }
}
