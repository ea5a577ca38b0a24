use std::io::{self, Write};
use clap::Parser;
use dotenv::dotenv;
use log::{info, error};
mod models;
mod handlers;
mod routes;
mod utils;
mod config;
use config::AppConfig;
use handlers::OutputFormat;
use models::CalculatorError;
use routes::Route;

/// Splits a fixed token supply between NFT holders and a liquidity pool
#[derive(Parser, Debug)]
#[command(name = "nft-token-calculator", version, about)]
struct Cli {
    /// Print the structured result as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// `presets`, or <max_supply> <total_tokens> <nft_holder_%>
    #[arg(allow_hyphen_values = true, allow_negative_numbers = true)]
    args: Vec<String>,
}

fn run<W: Write>(out: &mut W, cli: &Cli) -> Result<(), CalculatorError> {
    let route = Route::from_args(&cli.args)?;
    let format = if cli.json { OutputFormat::Json } else { OutputFormat::Text };

    match handlers::dispatch(out, &route, format) {
        Err(e) if e.is_recoverable() => {
            info!("Calculation aborted: {}", e);
            handlers::write_error(out, &e, format)
        }
        other => other,
    }
}

fn main() {
    // Load .env file
    dotenv().ok();

    let config = AppConfig::load();
    config.init_logging();

    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run(&mut out, &cli) {
        error!("Fatal: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
