use crate::models::{
    AirdropSuggestion, CalculatorError, DistributionInputs, DistributionResult,
    MarketCapEstimate, NftPricingEstimate, PresetConfig, PresetSummary,
};
use super::format_percent;

pub const TOKEN_DECIMALS: u32 = 18;
pub const AIRDROP_NFT_COUNTS: [u64; 2] = [10, 100];
pub const MARKET_CAP_PRICES: [f64; 5] = [0.0001, 0.001, 0.01, 0.1, 1.0];
pub const MINT_PRICES_ETH: [f64; 4] = [0.0001, 0.001, 0.01, 0.1];
pub const ETH_PRICE_USD: f64 = 3000.0;  // illustrative only
pub const LP_SHARE_OF_MINT: f64 = 0.5;

pub fn validate_percentage(inputs: &DistributionInputs) -> Result<(), CalculatorError> {
    let pct = inputs.nft_holder_pct;

    // NaN has no place in the range and cannot be truncated to token amounts
    if pct.is_nan() {
        return Err(CalculatorError::InvalidArgument {
            name: "nft_holder_pct",
            value: format!("{}", pct),
            reason: "percentage is not a number".to_string(),
        });
    }
    if pct <= 0.0 || pct >= 100.0 {
        return Err(CalculatorError::InvalidPercentage(format_percent(pct, inputs.pct_from_float)));
    }
    Ok(())
}

/// Truncated share of `total_tokens` for a percentage in (0, 100).
pub fn share_of(total_tokens: u64, pct: f64) -> u64 {
    (total_tokens as f64 * pct / 100.0) as u64
}

pub fn tokens_per_nft(nft_holder_tokens: u64, max_supply: u64) -> Result<u64, CalculatorError> {
    nft_holder_tokens
        .checked_div(max_supply)
        .ok_or(CalculatorError::DivisionByZero { what: "tokens per NFT (max supply is 0)" })
}

pub fn basis_points(pct: f64) -> u32 {
    (pct * 100.0) as u32
}

pub fn calculate_distribution(inputs: &DistributionInputs) -> Result<DistributionResult, CalculatorError> {
    validate_percentage(inputs)?;

    let lp_pct = 100.0 - inputs.nft_holder_pct;
    let nft_holder_tokens = share_of(inputs.total_tokens, inputs.nft_holder_pct);
    let tokens_per_nft = tokens_per_nft(nft_holder_tokens, inputs.max_supply)?;
    let lp_tokens = share_of(inputs.total_tokens, lp_pct);
    let nft_holder_bps = basis_points(inputs.nft_holder_pct);
    let circulating = nft_holder_tokens as u128 + lp_tokens as u128;

    log::debug!(
        "Distribution calc: holder_tokens={}, tokens_per_nft={}, lp_tokens={}, bps={}",
        nft_holder_tokens, tokens_per_nft, lp_tokens, nft_holder_bps
    );

    let airdrops = AIRDROP_NFT_COUNTS
        .iter()
        .map(|&nft_count| AirdropSuggestion {
            nft_count,
            tokens: tokens_per_nft as u128 * nft_count as u128,
        })
        .collect();

    Ok(DistributionResult {
        inputs: *inputs,
        lp_pct,
        nft_holder_tokens,
        tokens_per_nft,
        lp_tokens,
        nft_holder_bps,
        circulating,
        total_token_supply_wei: inputs.total_tokens as u128 * 10u128.pow(TOKEN_DECIMALS),
        airdrops,
        market_caps: market_cap_estimates(circulating),
        nft_pricing: nft_pricing_estimates(inputs.max_supply, lp_tokens, circulating),
    })
}

pub fn market_cap_estimates(circulating: u128) -> Vec<MarketCapEstimate> {
    MARKET_CAP_PRICES
        .iter()
        .map(|&price| MarketCapEstimate {
            price,
            market_cap: circulating as f64 * price,
        })
        .collect()
}

pub fn nft_pricing_estimates(max_supply: u64, lp_tokens: u64, circulating: u128) -> Vec<NftPricingEstimate> {
    MINT_PRICES_ETH
        .iter()
        .map(|&eth_per_nft| {
            let total_revenue_eth = eth_per_nft * max_supply as f64;
            let lp_eth = total_revenue_eth * LP_SHARE_OF_MINT;
            let lp_value_usd = lp_eth * ETH_PRICE_USD;

            let initial_price = if lp_tokens > 0 {
                lp_value_usd / lp_tokens as f64
            } else {
                0.0
            };

            NftPricingEstimate {
                eth_per_nft,
                total_revenue_eth,
                total_revenue_usd: total_revenue_eth * ETH_PRICE_USD,
                lp_eth,
                lp_value_usd,
                initial_price,
                initial_market_cap: initial_price * circulating as f64,
            }
        })
        .collect()
}

pub fn summarize_presets(presets: &[PresetConfig]) -> Result<Vec<PresetSummary>, CalculatorError> {
    presets
        .iter()
        .enumerate()
        .map(|(i, preset)| -> Result<PresetSummary, CalculatorError> {
            let holder_tokens = share_of(preset.total_tokens, preset.nft_holder_pct);
            Ok(PresetSummary {
                index: i + 1,
                preset: *preset,
                lp_pct: 100.0 - preset.nft_holder_pct,
                tokens_per_nft: tokens_per_nft(holder_tokens, preset.max_supply)?,
            })
        })
        .collect()
}
