use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DistributionInputs {
    pub max_supply: u64,    // number of NFTs in the collection
    pub total_tokens: u64,  // whole tokens, not wei
    pub nft_holder_pct: f64,
    #[serde(skip)]
    pub pct_from_float: bool, // typed as a decimal on the command line
}

impl DistributionInputs {
    pub fn new(max_supply: u64, total_tokens: u64, nft_holder_pct: f64) -> Self {
        Self {
            max_supply,
            total_tokens,
            nft_holder_pct,
            pct_from_float: false,
        }
    }

    /// Inputs read from command-line arguments; the percentage is echoed as a decimal.
    pub fn from_cli(max_supply: u64, total_tokens: u64, nft_holder_pct: f64) -> Self {
        Self {
            pct_from_float: true,
            ..Self::new(max_supply, total_tokens, nft_holder_pct)
        }
    }

    /// Values used when the tool is run without a full argument set.
    pub fn demo() -> Self {
        Self::new(10_000, 1_000_000_000, 50.0)
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AirdropSuggestion {
    pub nft_count: u64,
    pub tokens: u128,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketCapEstimate {
    pub price: f64,
    pub market_cap: f64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NftPricingEstimate {
    pub eth_per_nft: f64,
    pub total_revenue_eth: f64,
    pub total_revenue_usd: f64,
    pub lp_eth: f64,
    pub lp_value_usd: f64,
    pub initial_price: f64,      // 0 when the LP holds no tokens
    pub initial_market_cap: f64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DistributionResult {
    pub inputs: DistributionInputs,
    pub lp_pct: f64,
    pub nft_holder_tokens: u64,
    pub tokens_per_nft: u64,
    pub lp_tokens: u64,
    pub nft_holder_bps: u32,
    pub circulating: u128,
    pub total_token_supply_wei: u128,
    pub airdrops: Vec<AirdropSuggestion>,
    pub market_caps: Vec<MarketCapEstimate>,
    pub nft_pricing: Vec<NftPricingEstimate>,
}
