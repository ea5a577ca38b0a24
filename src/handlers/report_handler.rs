use std::io::Write;
use log::info;
use crate::models::{CalculatorError, DistributionInputs, DistributionResult};
use crate::utils::distribution_calculator::TOKEN_DECIMALS;
use crate::utils::{calculate_distribution, format_percent, format_thousands, format_thousands_f64};

pub const RULE_WIDTH: usize = 70;

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Calculate and print the full text report
pub fn handle_calculate<W: Write>(out: &mut W, inputs: &DistributionInputs) -> Result<(), CalculatorError> {
    info!(
        "Calculating distribution: max_supply={}, total_tokens={}, nft_holder_pct={}",
        inputs.max_supply, inputs.total_tokens, inputs.nft_holder_pct
    );
    let result = calculate_distribution(inputs)?;
    write_report(out, &result)
}

pub fn handle_calculate_json<W: Write>(out: &mut W, inputs: &DistributionInputs) -> Result<(), CalculatorError> {
    let result = calculate_distribution(inputs)?;
    serde_json::to_writer_pretty(&mut *out, &result)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_report<W: Write>(out: &mut W, result: &DistributionResult) -> Result<(), CalculatorError> {
    let inputs = &result.inputs;
    let holder_pct = format_percent(inputs.nft_holder_pct, inputs.pct_from_float);
    let lp_pct = format_percent(result.lp_pct, inputs.pct_from_float);

    writeln!(out, "{}", rule())?;
    writeln!(out, "TOKEN DISTRIBUTION CALCULATOR (SIMPLIFIED)")?;
    writeln!(out, "{}", rule())?;

    writeln!(out, "\n📊 INPUTS:")?;
    writeln!(out, "   Max NFT Supply: {}", format_thousands(inputs.max_supply as u128))?;
    writeln!(out, "   Total Token Supply: {}", format_thousands(inputs.total_tokens as u128))?;

    writeln!(out, "\n📈 DISTRIBUTION:")?;
    writeln!(out, "   NFT Holders: {}%", holder_pct)?;
    writeln!(out, "   Liquidity Pool: {}% (automatic)", lp_pct)?;

    writeln!(out, "\n💰 AMOUNTS:")?;
    writeln!(out, "   Each NFT = {} tokens", format_thousands(result.tokens_per_nft as u128))?;
    writeln!(
        out,
        "   Total to NFT Holders = {} tokens ({}%)",
        format_thousands(result.nft_holder_tokens as u128),
        holder_pct
    )?;
    writeln!(
        out,
        "   LP Receives = {} tokens ({}%)",
        format_thousands(result.lp_tokens as u128),
        lp_pct
    )?;

    writeln!(out, "\n⚙️  SOLIDITY PARAMETERS:")?;
    writeln!(out, "   maxSupply: {}", inputs.max_supply)?;
    writeln!(out, "   totalTokenSupply: {} * 10**{}", inputs.total_tokens, TOKEN_DECIMALS)?;
    writeln!(out, "   nftHolderBps: {}", result.nft_holder_bps)?;

    writeln!(out, "\n📝 CONSTRUCTOR CALL:")?;
    writeln!(out, "   ConspiraPuppets(")?;
    writeln!(out, "       \"YourName\",")?;
    writeln!(out, "       \"SYMBOL\",")?;
    writeln!(out, "       allowedSeaDrop,")?;
    writeln!(out, "       tokenAddress,")?;
    writeln!(out, "       lpManagerAddress,")?;
    writeln!(out, "       {},                    // maxSupply", inputs.max_supply)?;
    writeln!(out, "       {} * 10**{},       // totalTokenSupply", inputs.total_tokens, TOKEN_DECIMALS)?;
    writeln!(out, "       {}                     // nftHolderBps (LP gets remainder)", result.nft_holder_bps)?;
    writeln!(out, "   )")?;

    writeln!(out, "\n🎨 GETTING YOUR TOKENS:")?;
    for (i, airdrop) in result.airdrops.iter().enumerate() {
        writeln!(
            out,
            "   Option {}: Airdrop yourself {} NFTs = {} tokens",
            i + 1,
            airdrop.nft_count,
            format_thousands(airdrop.tokens)
        )?;
    }
    writeln!(out, "   Option {}: Just buy during public mint!", result.airdrops.len() + 1)?;
    writeln!(out)?;
    writeln!(out, "   Command to airdrop:")?;
    writeln!(out, "   cast send $NFT_ADDRESS \\")?;
    writeln!(out, "     'airdrop(address[],uint256[])' \\")?;
    writeln!(out, "     '[YOUR_ADDRESS]' '[QUANTITY]' \\")?;
    writeln!(out, "     --private-key $PRIVATE_KEY --rpc-url $BASE_RPC_URL")?;

    writeln!(out, "\n💵 MARKET CAP ESTIMATES:")?;
    writeln!(out, "   (Based on circulating supply to NFT holders + LP)")?;
    for row in &result.market_caps {
        writeln!(out, "   At ${:.4}/token: ${}", row.price, format_thousands_f64(row.market_cap))?;
    }

    writeln!(out, "\n🎨 NFT PRICING RECOMMENDATIONS:")?;
    for row in &result.nft_pricing {
        writeln!(out, "\n   At {} ETH per NFT:", row.eth_per_nft)?;
        writeln!(
            out,
            "      Total Revenue: {:.2} ETH (${})",
            row.total_revenue_eth,
            format_thousands_f64(row.total_revenue_usd)
        )?;
        writeln!(
            out,
            "      LP Gets: {:.2} ETH + {} tokens",
            row.lp_eth,
            format_thousands(result.lp_tokens as u128)
        )?;
        writeln!(out, "      Estimated Initial Token Price: ${:.6}", row.initial_price)?;
        writeln!(out, "      Initial Market Cap: ${}", format_thousands_f64(row.initial_market_cap))?;
    }

    writeln!(out, "\n{}", rule())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(inputs: &DistributionInputs) -> Result<String, CalculatorError> {
        let mut buf = Vec::new();
        handle_calculate(&mut buf, inputs)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_report_sections_in_order() {
        let text = render(&DistributionInputs::demo()).unwrap();
        let headings = [
            "📊 INPUTS:",
            "📈 DISTRIBUTION:",
            "💰 AMOUNTS:",
            "⚙️  SOLIDITY PARAMETERS:",
            "📝 CONSTRUCTOR CALL:",
            "🎨 GETTING YOUR TOKENS:",
            "💵 MARKET CAP ESTIMATES:",
            "🎨 NFT PRICING RECOMMENDATIONS:",
        ];

        let positions: Vec<usize> = headings
            .iter()
            .map(|h| text.find(h).unwrap_or_else(|| panic!("missing heading {}", h)))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_report_values() {
        let text = render(&DistributionInputs::demo()).unwrap();

        assert!(text.contains("   Max NFT Supply: 10,000\n"));
        assert!(text.contains("   Total Token Supply: 1,000,000,000\n"));
        assert!(text.contains("   NFT Holders: 50%\n"));
        assert!(text.contains("   Liquidity Pool: 50% (automatic)\n"));
        assert!(text.contains("   Each NFT = 50,000 tokens\n"));
        assert!(text.contains("   totalTokenSupply: 1000000000 * 10**18\n"));
        assert!(text.contains("   nftHolderBps: 5000\n"));
        assert!(text.contains("   Option 1: Airdrop yourself 10 NFTs = 500,000 tokens\n"));
        assert!(text.contains("   Option 2: Airdrop yourself 100 NFTs = 5,000,000 tokens\n"));
        assert!(text.contains("   Option 3: Just buy during public mint!\n"));
        assert!(text.contains("--private-key $PRIVATE_KEY --rpc-url $BASE_RPC_URL"));
        assert!(text.contains("   At $0.0001/token: $100,000\n"));
        assert!(text.contains("   At $1.0000/token: $1,000,000,000\n"));
        assert!(text.contains("   At 0.01 ETH per NFT:\n"));
        assert!(text.contains("      Total Revenue: 100.00 ETH ($300,000)\n"));
        assert!(text.contains("      LP Gets: 50.00 ETH + 500,000,000 tokens\n"));
        assert!(text.contains("      Estimated Initial Token Price: $0.000300\n"));
    }

    #[test]
    fn test_command_line_percentages_echo_as_decimals() {
        let text = render(&DistributionInputs::from_cli(10_000, 1_000_000_000, 50.0)).unwrap();

        assert!(text.contains("   NFT Holders: 50.0%\n"));
        assert!(text.contains("   Liquidity Pool: 50.0% (automatic)\n"));
        assert!(text.contains("   Total to NFT Holders = 500,000,000 tokens (50.0%)\n"));
        assert!(text.contains("   LP Receives = 500,000,000 tokens (50.0%)\n"));

        let text = render(&DistributionInputs::from_cli(10, 1_000, 33.3)).unwrap();
        assert!(text.contains("   NFT Holders: 33.3%\n"));
        assert!(text.contains("   Liquidity Pool: 66.7% (automatic)\n"));
    }

    #[test]
    fn test_invalid_percentage_writes_nothing() {
        let mut buf = Vec::new();
        let err = handle_calculate(&mut buf, &DistributionInputs::new(10_000, 1_000, 100.0)).unwrap_err();
        assert!(matches!(err, CalculatorError::InvalidPercentage(_)));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_json_output() {
        let mut buf = Vec::new();
        handle_calculate_json(&mut buf, &DistributionInputs::demo()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["tokensPerNft"], 50_000);
        assert_eq!(value["nftHolderBps"], 5000);
        assert_eq!(value["inputs"]["maxSupply"], 10_000);
        assert_eq!(value["marketCaps"].as_array().unwrap().len(), 5);
        assert_eq!(value["nftPricing"].as_array().unwrap().len(), 4);
    }
}
