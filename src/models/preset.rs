use serde::Serialize;

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PresetConfig {
    pub name: &'static str,
    pub max_supply: u64,
    pub total_tokens: u64,
    pub nft_holder_pct: f64,
}

pub const PRESETS: [PresetConfig; 4] = [
    PresetConfig {
        name: "50/50 Split (Balanced)",
        max_supply: 10_000,
        total_tokens: 1_000_000_000,
        nft_holder_pct: 50.0,
    },
    PresetConfig {
        name: "60/40 Split (Collector Focused)",
        max_supply: 10_000,
        total_tokens: 1_000_000_000,
        nft_holder_pct: 60.0,
    },
    PresetConfig {
        name: "40/60 Split (High Liquidity)",
        max_supply: 5_000,
        total_tokens: 500_000_000,
        nft_holder_pct: 40.0,
    },
    PresetConfig {
        name: "Original ConspiraPuppets",
        max_supply: 3_333,
        total_tokens: 3_330_000_000,
        nft_holder_pct: 50.0,
    },
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetSummary {
    pub index: usize,
    #[serde(flatten)]
    pub preset: PresetConfig,
    pub lp_pct: f64,
    pub tokens_per_nft: u64,
}
