//! Conversion request and result types

use std::fmt::Display;
use tracing::{debug, instrument};

use super::error::{Error, Result};
use super::rates::RateProvider;

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub request: ConversionRequest,
    pub rate: f64,
    pub converted: f64,
}

impl Conversion {
    pub fn new(request: ConversionRequest, rate: f64) -> Self {
        let converted = request.amount * rate;
        Conversion {
            request,
            rate,
            converted,
        }
    }
}

impl Display for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} = {} {}",
            self.request.amount, self.request.from, self.converted, self.request.to
        )
    }
}

/// Fetches rates for the source currency and converts the requested amount.
#[instrument(name = "Convert", skip(provider), fields(from = %request.from, to = %request.to))]
pub async fn convert<P>(request: &ConversionRequest, provider: &P) -> Result<Conversion>
where
    P: RateProvider + ?Sized,
{
    let table = provider.fetch_rates(&request.from).await?;
    debug!(currencies = table.len(), "Received rate table");

    let rate = table.get_rate(&request.to)?;
    let conversion = Conversion::new(request.clone(), rate);
    if !conversion.converted.is_finite() {
        return Err(Error::OutOfRange {
            amount: request.amount,
            from: request.from.clone(),
            to: request.to.clone(),
        });
    }
    Ok(conversion)
}
