use std::collections::HashMap;

use anyhow::Result;
use clap::Parser;
use pinup_core::config::CoreConfig;
use pinup_core::indexer::IndexerClient;
use pinup_core::models::VisibilityList;
use pinup_core::store::{views, AppDataStore};
use pinup_core::worker::{self, DataChange};
use pinup_core::{tracing_setup, wallet};

/// Fetch a wallet's Daring Divas collection and print its Pin-Up Points.
#[derive(Parser)]
#[command(name = "pinup-cli", version)]
struct Args {
    /// Wallet address holding the collection
    #[arg(long)]
    address: String,

    /// Override the collection contract address
    #[arg(long)]
    contract: Option<String>,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_setup::init_stderr_tracing();
    let args = Args::parse();

    let address = wallet::normalize_address(&args.address)?;
    let mut config = CoreConfig::from_env()?;
    if let Some(contract) = args.contract {
        config.contract_address = contract;
    }
    let client = IndexerClient::new(&config);

    // The two fetch families are independent; run them concurrently.
    let (visibility, records) = tokio::join!(
        client.fetch_visibility_list(),
        client.tokens_for_owner(&address)
    );
    let visibility = visibility.unwrap_or_else(|e| {
        tracing::warn!("failed to fetch visibility list: {:#}", e);
        VisibilityList::default()
    });
    let records = records?;
    let tokens = worker::enrich(&client, records).await;

    let mut store = AppDataStore::new();
    let generation = store.begin_load();
    store.apply(DataChange::VisibilityLoaded(visibility));
    store.apply(DataChange::TokensLoaded { generation, tokens });

    let cards = views::build_card_views(&store, &HashMap::new(), &config.uncensored_dir);

    if args.json {
        let items: Vec<serde_json::Value> = cards
            .iter()
            .map(|card| {
                serde_json::json!({
                    "tokenId": card.token_id,
                    "name": card.title,
                    "status": card.status_label,
                    "rarity": card.rarity,
                    "wear": card.wear,
                    "foil": card.foil,
                    "nsfw": card.flagged,
                    "minted": card.minted,
                    "score": card.score,
                })
            })
            .collect();
        let output = serde_json::json!({
            "address": address,
            "tokens": items,
            "totalScore": store.total_score(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if cards.is_empty() {
        println!("No Daring Divas found in this wallet.");
        return Ok(());
    }

    println!(
        "{:<8} {:<10} {:<11} {:<22} {:<10} {:<6} {:>10}",
        "TOKEN", "STATUS", "RARITY", "WEAR", "FOIL", "NSFW", "PUPS"
    );
    for card in &cards {
        println!(
            "{:<8} {:<10} {:<11} {:<22} {:<10} {:<6} {:>10.2}",
            card.token_id,
            card.status_label,
            card.rarity,
            card.wear,
            card.foil,
            if card.flagged { "Yes" } else { "No" },
            card.score
        );
    }
    println!();
    println!("Total: {:.2} PUPs across {} cards", store.total_score(), cards.len());

    Ok(())
}
