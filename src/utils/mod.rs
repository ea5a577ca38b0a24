pub mod distribution_calculator;
pub mod formatting;

pub use distribution_calculator::{calculate_distribution, summarize_presets};
pub use formatting::{format_percent, format_thousands, format_thousands_f64};
