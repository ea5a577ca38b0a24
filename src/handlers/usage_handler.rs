use std::io::Write;
use crate::models::CalculatorError;
use super::report_handler::rule;

pub const PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");

pub fn write_banner<W: Write>(out: &mut W) -> Result<(), CalculatorError> {
    writeln!(out, "\n{}", rule())?;
    writeln!(out, "SIMPLIFIED NFT-TO-TOKEN CALCULATOR")?;
    writeln!(out, "Two-way split: NFT Holders + LP")?;
    writeln!(out, "{}", rule())?;
    Ok(())
}

pub fn write_usage<W: Write>(out: &mut W) -> Result<(), CalculatorError> {
    writeln!(out, "\nUsage: {} <max_supply> <total_tokens> <nft_holder_%>", PROGRAM_NAME)?;
    writeln!(out, "   Or: {} presets", PROGRAM_NAME)?;
    writeln!(out, "\nExample: {} 10000 1000000000 50", PROGRAM_NAME)?;
    writeln!(out, "         (10K NFTs, 1B tokens, 50% to holders, 50% to LP)\n")?;
    writeln!(out, "Running example calculation:\n")?;
    Ok(())
}

pub fn write_presets_hint<W: Write>(out: &mut W) -> Result<(), CalculatorError> {
    writeln!(out, "\n\nTo see preset configurations, run: {} presets", PROGRAM_NAME)?;
    Ok(())
}
