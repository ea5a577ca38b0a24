mod distribution;
mod error;
mod preset;

pub use distribution::*;
pub use error::CalculatorError;
pub use preset::{PresetConfig, PresetSummary, PRESETS};
