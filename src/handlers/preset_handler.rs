use std::io::Write;
use log::info;
use crate::models::{CalculatorError, PresetSummary, PRESETS};
use crate::utils::{format_thousands, summarize_presets};

/// List the built-in preset configurations
pub fn handle_presets<W: Write>(out: &mut W) -> Result<(), CalculatorError> {
    info!("Listing {} preset configurations", PRESETS.len());
    let summaries = summarize_presets(&PRESETS)?;

    writeln!(out, "\n🎯 PRESET CONFIGURATIONS\n")?;
    for summary in &summaries {
        write_preset(out, summary)?;
    }
    Ok(())
}

pub fn handle_presets_json<W: Write>(out: &mut W) -> Result<(), CalculatorError> {
    let summaries = summarize_presets(&PRESETS)?;
    serde_json::to_writer_pretty(&mut *out, &summaries)?;
    writeln!(out)?;
    Ok(())
}

fn write_preset<W: Write>(out: &mut W, summary: &PresetSummary) -> Result<(), CalculatorError> {
    let preset = &summary.preset;

    writeln!(out, "\n{}. {}", summary.index, preset.name)?;
    writeln!(
        out,
        "   Supply: {} NFTs | {} tokens",
        format_thousands(preset.max_supply as u128),
        format_thousands(preset.total_tokens as u128)
    )?;
    writeln!(out, "   Distribution: {}% NFTs | {}% LP", preset.nft_holder_pct, summary.lp_pct)?;
    writeln!(out, "   Each NFT: {} tokens", format_thousands(summary.tokens_per_nft as u128))?;
    Ok(())
}
