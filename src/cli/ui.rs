use console::style;

use crate::core::conversion::Conversion;
use crate::core::error::Error;

/// Defines different styles for text elements.
pub enum StyleType {
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// The success line, `<amount> <FROM> = <converted> <TO>`.
pub fn render_conversion(conversion: &Conversion) -> String {
    conversion.to_string()
}

/// Human readable message for a failed run.
pub fn render_error(error: &Error) -> String {
    match error {
        // clap's rendering already carries the usage block
        Error::Argument(e) => e.to_string().trim_end().to_string(),
        other => style_text(&other.to_string(), StyleType::Error),
    }
}

/// Extra line shown with `--verbose` describing the rate that was used.
pub fn render_rate(conversion: &Conversion) -> String {
    let text = format!(
        "1 {} = {} {}",
        conversion.request.from, conversion.rate, conversion.request.to
    );
    style_text(&text, StyleType::Subtle)
}
