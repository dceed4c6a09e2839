use async_trait::async_trait;
use serde::Deserialize;
use serde_json::error::Category;
use std::collections::HashMap;
use std::fmt::Display;
use tracing::{debug, instrument};

use crate::core::config::Settings;
use crate::core::error::{Error, Result};
use crate::core::rates::{RateProvider, RateTable};

/// Body of a `latest` response. Either field may be absent.
#[derive(Debug, Deserialize)]
struct LatestResponse {
    #[serde(default)]
    error: Option<ApiError>,
    #[serde(default)]
    rates: Option<HashMap<String, f64>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiError {
    Message(String),
    Detailed {
        code: Option<ErrorCode>,
        #[serde(rename = "type")]
        kind: Option<String>,
        info: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorCode {
    Number(i64),
    Text(String),
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::Number(n) => write!(f, "{n}"),
            ErrorCode::Text(s) => write!(f, "{s}"),
        }
    }
}

impl ApiError {
    fn into_message(self) -> String {
        match self {
            ApiError::Message(message) => message,
            ApiError::Detailed {
                info: Some(info), ..
            } => info,
            ApiError::Detailed {
                kind: Some(kind), ..
            } => kind,
            ApiError::Detailed {
                code: Some(code), ..
            } => format!("Upstream error code {code}"),
            ApiError::Detailed { .. } => "Upstream reported an unspecified error".to_string(),
        }
    }
}

/// Decodes a `latest` response body into a rate table for `base`.
///
/// A well-formed `error` field wins over the HTTP status. Any other failure
/// under a failed status is reported as that status.
fn decode_latest(base: &str, status: reqwest::StatusCode, body: &str) -> Result<RateTable> {
    let status_error = || Error::Status {
        base: base.to_string(),
        status,
    };

    let response: LatestResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(_) if !status.is_success() => return Err(status_error()),
        Err(e) if e.classify() == Category::Data => {
            return Err(Error::Schema {
                base: base.to_string(),
                reason: e.to_string(),
            });
        }
        Err(source) => {
            return Err(Error::Decode {
                base: base.to_string(),
                source,
            });
        }
    };

    if let Some(error) = response.error {
        return Err(Error::Upstream(error.into_message()));
    }

    if !status.is_success() {
        return Err(status_error());
    }

    let rates = response.rates.ok_or_else(|| Error::Schema {
        base: base.to_string(),
        reason: "missing rates field".to_string(),
    })?;

    Ok(RateTable::new(base, rates))
}

/// Fetches the latest rates from an exchangeratesapi.io compatible endpoint.
pub struct ExchangeRatesProvider {
    settings: Settings,
}

impl ExchangeRatesProvider {
    pub fn new(settings: Settings) -> Self {
        ExchangeRatesProvider { settings }
    }
}

#[async_trait]
impl RateProvider for ExchangeRatesProvider {
    #[instrument(name = "LatestRatesFetch", skip(self), fields(base = %base))]
    async fn fetch_rates(&self, base: &str) -> Result<RateTable> {
        let url = self.settings.latest_url(base)?;
        let network_error = |source| Error::Network {
            base: base.to_string(),
            source,
        };

        let client = reqwest::Client::builder()
            .user_agent(concat!("fxconv/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(network_error)?;

        // The URL may carry an access key, only the path is logged.
        debug!("Requesting latest rates from {}", url.path());
        let response = client.get(url).send().await.map_err(network_error)?;

        let status = response.status();
        debug!(%status, "Received rates response");

        let body = response.text().await.map_err(network_error)?;
        decode_latest(base, status, &body)
    }
}
