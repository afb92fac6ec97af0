//! Terminal renderer for Summit staking pool earn cards.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::fs;
use std::path::PathBuf;
use summit_earn_display::{CardRequest, ChainAssets, PoolCardView};
use summit_earn_domain::{StakingSnapshot, TokenAmount, TokenPair};
use tracing::info;

#[derive(Parser)]
#[command(name = "summit-earn")]
#[command(about = "Render Summit staking pool earn cards", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render cards from a JSON request file
    Show {
        /// Path to the card request file
        #[arg(short, long, default_value = "demos/pools.json")]
        file: PathBuf,

        /// Chain to resolve well-known assets against
        #[arg(short, long, default_value_t = 43114)]
        chain_id: u64,
    },
    /// Render a built-in example card
    Sample,
}

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Show { file, chain_id } => {
            let assets = ChainAssets::for_chain(*chain_id)?.with_env_overrides();

            let raw = fs::read_to_string(file)
                .with_context(|| format!("Reading card requests from {}", file.display()))?;
            let requests: Vec<CardRequest> =
                serde_json::from_str(&raw).context("Parsing card requests")?;

            info!(count = requests.len(), chain_id = *chain_id, "Rendering earn cards");
            for request in &requests {
                render_card(&PoolCardView::build(request, &assets));
            }
        }
        Commands::Sample => {
            let assets = ChainAssets::for_chain(43114)?.with_env_overrides();
            let request = sample_request(&assets);
            render_card(&PoolCardView::build(&request, &assets));
        }
    }

    Ok(())
}

fn render_card(view: &PoolCardView) {
    println!();
    println!("══════════════════════════════════════════════════");
    print!("📊 {}", view.title);
    for action in &view.actions {
        print!("   [{}]", action.label());
    }
    println!();
    println!("──────────────────────────────────────────────────");
    println!("{:<20} {}", "Total deposited", view.total_staked);
    println!("{:<20} {}", "Pool rate", view.pool_rate);
    println!("{:<20} {}", "Current reward", view.reward_per_collateral);
    println!("{:<20} {}", "Earn up to", view.apr);
    if let Some(user_rate) = &view.user_weekly_reward {
        println!("──────────────────────────────────────────────────");
        println!("{:<20} ⚡ {}", "Your rate", user_rate);
    }
    for action in &view.actions {
        println!("{:<20} {}", action.label(), action.route());
    }
    println!("══════════════════════════════════════════════════");
}

/// AVAX-SMT pool with an active stake: 1 SMT/sec pool emission over
/// 1000 AVAX deposited, caller earning 0.01 SMT/sec.
fn sample_request(assets: &ChainAssets) -> CardRequest {
    CardRequest {
        snapshot: StakingSnapshot {
            pair: TokenPair::new(assets.wrapped_native.clone(), assets.protocol_token.clone()),
            staked_amount: TokenAmount::new(100_000_000_000_000_000_000u128, 18),
            total_reward_rate: TokenAmount::new(1_000_000_000_000_000_000u128, 18),
            total_staked_in_collateral: TokenAmount::new(1_000_000_000_000_000_000_000u128, 18),
            reward_rate: Some(TokenAmount::new(10_000_000_000_000_000u128, 18)),
            is_period_finished: false,
        },
        migration: None,
        version: 1,
        apr: "42".to_string(),
    }
}
