use std::str::FromStr;
use crate::models::{CalculatorError, DistributionInputs};

pub const PRESETS_COMMAND: &str = "presets";

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Presets,
    Calculate(DistributionInputs),
    Demo,
}

impl Route {
    /// Picks what to run from the positional arguments (program name excluded).
    pub fn from_args(args: &[String]) -> Result<Self, CalculatorError> {
        if args.first().map(String::as_str) == Some(PRESETS_COMMAND) {
            return Ok(Route::Presets);
        }

        match args {
            [max_supply, total_tokens, nft_holder_pct] => Ok(Route::Calculate(DistributionInputs::from_cli(
                parse_arg("max_supply", max_supply)?,
                parse_arg("total_tokens", total_tokens)?,
                parse_arg("nft_holder_pct", nft_holder_pct)?,
            ))),
            _ => Ok(Route::Demo),
        }
    }
}

fn parse_arg<T>(name: &'static str, value: &str) -> Result<T, CalculatorError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| CalculatorError::InvalidArgument {
        name,
        value: value.to_string(),
        reason: e.to_string(),
    })
}
