//! Command-line parsing for a single conversion

pub mod ui;

use clap::Parser;
use std::ffi::OsString;

use crate::core::config::{DEFAULT_BASE_URL, Settings};
use crate::core::conversion::ConversionRequest;
use crate::core::error::Result;

/// Convert an amount between currencies using the latest exchange rates
#[derive(Parser, Debug)]
#[command(name = "fxconv", version, about)]
pub struct Cli {
    /// Amount to convert, a decimal number
    #[arg(value_parser = parse_amount, allow_negative_numbers = true)]
    amount: f64,

    /// Currency code to convert from, e.g. USD
    #[arg(value_name = "FROM", value_parser = parse_currency_code)]
    from: String,

    /// Currency code to convert to, e.g. EUR
    #[arg(value_name = "TO", value_parser = parse_currency_code)]
    to: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Base URL of the exchange rates API
    #[arg(long, env = "FXCONV_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Access key sent to the exchange rates API
    #[arg(long, env = "FXCONV_ACCESS_KEY", hide_env_values = true)]
    access_key: Option<String>,
}

/// A validated command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub request: ConversionRequest,
    pub settings: Settings,
    pub verbose: bool,
}

impl From<Cli> for Invocation {
    fn from(cli: Cli) -> Invocation {
        Invocation {
            request: ConversionRequest {
                amount: cli.amount,
                from: cli.from,
                to: cli.to,
            },
            settings: Settings {
                base_url: cli.base_url,
                access_key: cli.access_key,
            },
            verbose: cli.verbose,
        }
    }
}

impl Invocation {
    /// Parses process-style arguments; the first item is the program name.
    pub fn parse_from<I, T>(args: I) -> Result<Invocation>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;
        Ok(cli.into())
    }
}

fn parse_amount(value: &str) -> std::result::Result<f64, String> {
    let amount: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("not a decimal number: {e}"))?;
    if !amount.is_finite() {
        return Err("not a decimal number".to_string());
    }
    Ok(amount)
}

fn parse_currency_code(value: &str) -> std::result::Result<String, String> {
    let code = value.trim();
    if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err("expected a currency code such as USD".to_string());
    }
    Ok(code.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Error;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Invocation> {
        Invocation::parse_from(std::iter::once("fxconv").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_three_arguments() {
        let invocation = parse(&["100", "usd", "EUR"]).unwrap();
        assert_eq!(
            invocation.request,
            ConversionRequest {
                amount: 100.0,
                from: "USD".to_string(),
                to: "EUR".to_string(),
            }
        );
        assert!(!invocation.verbose);
    }

    #[test]
    fn test_parse_negative_and_exponent_amounts() {
        assert_eq!(parse(&["-2.5", "USD", "EUR"]).unwrap().request.amount, -2.5);
        assert_eq!(parse(&["1e3", "USD", "EUR"]).unwrap().request.amount, 1000.0);
    }

    #[test]
    fn test_wrong_argument_count_reports_usage() {
        for args in [
            &["100", "USD"][..],
            &["100", "USD", "EUR", "GBP"][..],
            &[][..],
        ] {
            let err = parse(args).unwrap_err();
            assert!(matches!(err, Error::Argument(_)), "args: {args:?}");
            assert!(err.to_string().contains("Usage:"), "args: {args:?}");
        }
    }

    #[test]
    fn test_non_numeric_amount() {
        for amount in ["abc", "1,5", "NaN", "inf"] {
            match parse(&[amount, "USD", "EUR"]) {
                Err(Error::Argument(e)) => assert_eq!(e.kind(), ErrorKind::ValueValidation),
                other => panic!("Expected argument error for {amount}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_invalid_currency_code() {
        for code in ["", "US D", "U$D"] {
            let err = parse(&["1", code, "EUR"]).unwrap_err();
            assert!(matches!(err, Error::Argument(_)), "code: {code:?}");
        }
    }

    #[test]
    fn test_options() {
        let invocation = parse(&[
            "--verbose",
            "--base-url",
            "http://localhost:1234",
            "--access-key",
            "secret",
            "5",
            "GBP",
            "JPY",
        ])
        .unwrap();
        assert!(invocation.verbose);
        assert_eq!(invocation.settings.base_url, "http://localhost:1234");
        assert_eq!(invocation.settings.access_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_help_is_reported_as_display_help() {
        match parse(&["--help"]) {
            Err(Error::Argument(e)) => assert_eq!(e.kind(), ErrorKind::DisplayHelp),
            other => panic!("Expected help, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
