//! Shared output formatting helpers for commands

use serde::Serialize;

use pathfinder_core::error::Result;

/// Dispatch on the output format when the JSON branch returns a `Result`
/// and the human branch only prints.
///
/// ```rust,ignore
/// output_by_format_result!(cli.format,
///     json => print_json(&result),
///     human => { println!("{}", result.distance); }
/// )
/// ```
#[macro_export]
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
        }
    };
}

pub use crate::output_by_format_result;

/// Pretty-print any serializable value to stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render a distance for humans; unreachable prints as `inf`
pub fn distance(value: f64) -> String {
    if value.is_finite() {
        format!("{value}")
    } else {
        "inf".to_string()
    }
}
