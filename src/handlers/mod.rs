pub mod report_handler;
pub mod preset_handler;
pub mod usage_handler;

pub use report_handler::*;
pub use preset_handler::*;
pub use usage_handler::*;

use std::io::Write;
use log::info;
use serde_json::json;
use crate::models::{CalculatorError, DistributionInputs};
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Run a resolved route, writing everything it produces to `out`.
pub fn dispatch<W: Write>(out: &mut W, route: &Route, format: OutputFormat) -> Result<(), CalculatorError> {
    info!("Dispatching {:?} as {:?}", route, format);

    match format {
        OutputFormat::Json => match route {
            Route::Presets => handle_presets_json(out),
            Route::Calculate(inputs) => handle_calculate_json(out, inputs),
            Route::Demo => handle_calculate_json(out, &DistributionInputs::demo()),
        },
        OutputFormat::Text => {
            write_banner(out)?;
            match route {
                Route::Presets => handle_presets(out),
                Route::Calculate(inputs) => handle_calculate(out, inputs),
                Route::Demo => {
                    write_usage(out)?;
                    handle_calculate(out, &DistributionInputs::demo())?;
                    write_presets_hint(out)
                }
            }
        }
    }
}

/// Report an error that ends the calculation without failing the process.
pub fn write_error<W: Write>(out: &mut W, err: &CalculatorError, format: OutputFormat) -> Result<(), CalculatorError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &json!({ "error": err.to_string() }))?;
            writeln!(out)?;
        }
        OutputFormat::Text => writeln!(out, "❌ Error: {}", err)?,
    }
    Ok(())
}
