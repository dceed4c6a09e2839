pub mod cli;
pub mod core;
pub mod providers;

pub use crate::cli::Invocation;
pub use crate::core::{Conversion, ConversionRequest, Error, RateProvider, RateTable, Result};

use std::ffi::OsString;
use tracing::{debug, info};

/// Runs one conversion against the endpoint configured in `invocation`.
pub async fn run(invocation: &Invocation) -> Result<Conversion> {
    info!("Currency converter starting...");
    debug!("Loaded settings: {:#?}", invocation.settings);

    let provider = providers::ExchangeRatesProvider::new(invocation.settings.clone());
    crate::core::convert(&invocation.request, &provider).await
}

/// Parses process-style arguments and runs the conversion they describe.
///
/// Argument errors are returned before any request is made.
pub async fn run_command<I, T>(args: I) -> Result<Conversion>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let invocation = Invocation::parse_from(args)?;
    run(&invocation).await
}
