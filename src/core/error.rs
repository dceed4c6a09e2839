//! Error kinds surfaced by a conversion run

use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Wrong argument count, an unparsable amount or a malformed currency code.
    /// The rendered message carries the usage line.
    #[error("{0}")]
    Argument(#[from] clap::Error),
    #[error("Invalid rates endpoint {url}: {reason}")]
    Endpoint { url: String, reason: String },
    #[error("Request error: {source} for base currency: {base}")]
    Network {
        base: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP error: {status} for base currency: {base}")]
    Status { base: String, status: StatusCode },
    #[error("Failed to parse JSON response for {base}: {source}")]
    Decode {
        base: String,
        #[source]
        source: serde_json::Error,
    },
    /// The upstream payload reported an error. The message is kept verbatim.
    #[error("{0}")]
    Upstream(String),
    #[error("Unexpected rates payload for {base}: {reason}")]
    Schema { base: String, reason: String },
    #[error("Target currency {0} is not found")]
    NotFound(String),
    #[error("Converting {amount} {from} to {to} is out of range")]
    OutOfRange { amount: f64, from: String, to: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
