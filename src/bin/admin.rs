//! CLI administration tool for riot-cache-proxy.
//!
//! Runs lookups through the same services and cache store as the HTTP
//! server, which makes it useful for debugging a Riot ID or warming the
//! cache before traffic arrives.
//!
//! # Usage
//!
//! ```bash
//! # Resolve an account (populates the account cache)
//! cargo run --bin admin -- account "Faker#KR1"
//!
//! # List recent matches (populates both caches)
//! cargo run --bin admin -- matches "Faker#KR1" --count 5 --type normal
//!
//! # Check the cache store
//! cargo run --bin admin -- cache check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`riot_cache_proxy::config`]. `RIOT_API_KEY` is
//! required.

use riot_cache_proxy::application::services::{CacheAside, CacheTtls, PlayerService};
use riot_cache_proxy::config::{self, Config};
use riot_cache_proxy::domain::entities::MatchType;
use riot_cache_proxy::infrastructure::cache::connect_store;
use riot_cache_proxy::infrastructure::riot::RiotClient;
use riot_cache_proxy::utils::match_count::DEFAULT_MATCH_COUNT;
use riot_cache_proxy::utils::riot_id::{RiotId, parse_riot_id};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for riot-cache-proxy.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Resolve a Riot ID to its account
    Account {
        /// Riot ID as `name#tag`
        riot_id: String,
    },

    /// List recent match ids of a Riot ID
    Matches {
        /// Riot ID as `name#tag`
        riot_id: String,

        /// Number of match ids (clamped to 1..=50)
        #[arg(short, long, default_value_t = DEFAULT_MATCH_COUNT)]
        count: i64,

        /// Match type: ranked, normal, tourney, tutorial
        #[arg(short = 't', long = "type", default_value_t = MatchType::Ranked)]
        match_type: MatchType,
    },

    /// Cache store operations
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

/// Cache store subcommands.
#[derive(Subcommand)]
enum CacheAction {
    /// Check cache store connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;

    match cli.command {
        Commands::Account { riot_id } => {
            let id = parse_riot_id(&riot_id)?;
            handle_account(&config, id).await?
        }
        Commands::Matches {
            riot_id,
            count,
            match_type,
        } => {
            let id = parse_riot_id(&riot_id)?;
            handle_matches(&config, id, count, match_type).await?
        }
        Commands::Cache { action } => handle_cache_action(action, &config).await?,
    }

    Ok(())
}

/// Builds the same player service the server uses.
async fn build_service(config: &Config) -> Result<PlayerService> {
    let store = connect_store(config).await;
    let riot = RiotClient::from_config(config).context("Failed to build Riot API client")?;

    Ok(PlayerService::new(
        Arc::new(riot),
        CacheAside::new(store),
        CacheTtls::from_config(config),
    ))
}

/// Resolves and prints an account.
///
/// # Output Format
///
/// ```text
/// 🔎 Account faker#kr1
///
///   puuid      abc123
///   gameName   Faker
///   tagLine    KR1
/// ```
async fn handle_account(config: &Config, id: RiotId) -> Result<()> {
    println!(
        "{}",
        format!("🔎 Account {}#{}", id.name, id.tag)
            .bright_blue()
            .bold()
    );
    println!();

    let service = build_service(config).await?;
    let account = service
        .get_account(&id.name, &id.tag)
        .await
        .map_err(|e| anyhow::anyhow!("Lookup failed: {}", e))?;

    println!("  {:<10} {}", "puuid".bright_white().bold(), account.puuid.cyan());
    for (field, value) in &account.extra {
        let value = match value.as_str() {
            Some(s) => s.to_string(),
            None => value.to_string(),
        };
        println!("  {:<10} {}", field.bright_white().bold(), value);
    }
    println!();

    Ok(())
}

/// Resolves a Riot ID and prints its recent match ids.
async fn handle_matches(
    config: &Config,
    id: RiotId,
    count: i64,
    match_type: MatchType,
) -> Result<()> {
    println!(
        "{}",
        format!("📋 {} matches of {}#{}", match_type, id.name, id.tag)
            .bright_blue()
            .bold()
    );
    println!();

    let service = build_service(config).await?;
    let summary = service
        .get_matches(&id.name, &id.tag, count, match_type)
        .await
        .map_err(|e| anyhow::anyhow!("Lookup failed: {}", e))?;

    if summary.matches.is_empty() {
        println!("{}", "  No matches found".yellow());
        println!();
        return Ok(());
    }

    for (i, match_id) in summary.matches.iter().enumerate() {
        println!(
            "  {:>3}  {}",
            (i + 1).to_string().bright_black(),
            match_id.cyan()
        );
    }

    println!();
    println!(
        "  Total: {}",
        summary.count.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Handles cache store diagnostic commands.
async fn handle_cache_action(action: CacheAction, config: &Config) -> Result<()> {
    match action {
        CacheAction::Check => {
            println!("{}", "🔍 Checking cache store...".bright_blue());

            let store = connect_store(config).await;
            println!("  Backend: {}", store.backend().bright_white());

            if !store.health_check().await {
                anyhow::bail!("Cache store {} is not healthy", store.backend());
            }

            if store.backend() != "redis" {
                println!(
                    "{}",
                    "⚠️  Using the in-memory store; entries are not shared between processes"
                        .yellow()
                );
            }

            println!("{}", "✅ Cache store OK".green().bold());
        }
    }

    Ok(())
}
