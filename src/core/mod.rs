//! Core conversion logic and shared types

pub mod config;
pub mod conversion;
pub mod error;
pub mod log;
pub mod rates;

// Re-export main types for cleaner imports
pub use conversion::{Conversion, ConversionRequest, convert};
pub use error::{Error, Result};
pub use rates::{RateProvider, RateTable};
