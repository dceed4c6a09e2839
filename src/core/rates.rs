//! Rate table and the provider abstraction that builds it

use async_trait::async_trait;
use std::collections::HashMap;
use tracing::debug;

use super::error::{Error, Result};

/// Exchange rates for one base currency, as reported by the upstream source.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    base: String,
    rates: HashMap<String, f64>,
}

impl RateTable {
    pub fn new(base: impl Into<String>, rates: HashMap<String, f64>) -> Self {
        RateTable {
            base: base.into(),
            rates,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Returns the multiplier converting one unit of the base into `code`.
    ///
    /// A missing code is an error even when it equals the base currency.
    pub fn get_rate(&self, code: &str) -> Result<f64> {
        match self.rates.get(code) {
            Some(rate) => {
                debug!(base = %self.base, code, rate, "Rate lookup");
                Ok(*rate)
            }
            None => Err(Error::NotFound(code.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_rates(&self, base: &str) -> Result<RateTable>;
}
