//! CLI administration tool for redirectus.
//!
//! Inspects the registry snapshot file without requiring a running server.
//! Every command is read-only: the running service owns the file.
//!
//! # Usage
//!
//! ```bash
//! # Validate the snapshot file
//! cargo run --bin admin -- check
//!
//! # List all registered links
//! cargo run --bin admin -- list
//!
//! # Show a single link
//! cargo run --bin admin -- show promo
//!
//! # Preview which target a visitor would receive
//! cargo run --bin admin -- resolve promo --user-agent "Mozilla/5.0 (iPhone; ...)"
//! ```
//!
//! # Environment Variables
//!
//! - `SNAPSHOT_PATH` (optional): snapshot file, overridden by `--snapshot`

use redirectus::config::DEFAULT_SNAPSHOT_PATH;
use redirectus::domain::entities::{LinkEntry, LinkSnapshot};
use redirectus::domain::repositories::SnapshotStore;
use redirectus::infrastructure::persistence::JsonFileSnapshotStore;
use redirectus::utils::platform::classify_user_agent;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for inspecting the redirectus registry.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Snapshot file (defaults to $SNAPSHOT_PATH, then ./links.json)
    #[arg(short, long, global = true)]
    snapshot: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate the snapshot file
    Check,

    /// List all registered links
    List,

    /// Show the targets of one link
    Show {
        slug: String,
    },

    /// Show which target a visitor with the given User-Agent receives
    Resolve {
        slug: String,

        /// Raw User-Agent header value
        #[arg(short, long, default_value = "")]
        user_agent: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let path = cli
        .snapshot
        .or_else(|| std::env::var("SNAPSHOT_PATH").ok())
        .unwrap_or_else(|| DEFAULT_SNAPSHOT_PATH.to_string());
    let store = JsonFileSnapshotStore::new(&path);

    match cli.command {
        Commands::Check => handle_check(&store).await?,
        Commands::List => handle_list(&load(&store).await?),
        Commands::Show { slug } => handle_show(&load(&store).await?, &slug)?,
        Commands::Resolve { slug, user_agent } => {
            handle_resolve(&load(&store).await?, &slug, &user_agent)?
        }
    }

    Ok(())
}

async fn load(store: &JsonFileSnapshotStore) -> Result<LinkSnapshot> {
    store
        .load()
        .await
        .with_context(|| format!("Failed to load snapshot {}", store.location()))
}

/// Validates the snapshot the same way the server does at startup.
async fn handle_check(store: &JsonFileSnapshotStore) -> Result<()> {
    println!(
        "{} {}",
        "🔍 Checking snapshot".bright_blue(),
        store.location().bright_white()
    );

    let snapshot = load(store).await?;

    println!(
        "{} ({} links)",
        "✅ Snapshot OK".green().bold(),
        snapshot.len().to_string().bright_white().bold()
    );

    Ok(())
}

/// Prints every link as a table.
///
/// # Output Format
///
/// ```text
/// 📋 Links
///
///   Slug             Platform  Target
///   ─────────────────────────────────────────────────────────
///   promo            ios       https://apps.apple.com/app/id1
///                    android   https://example.com
///                    default   https://example.com
/// ```
fn handle_list(snapshot: &LinkSnapshot) {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    if snapshot.is_empty() {
        println!("{}", "  No links registered".yellow());
        return;
    }

    println!(
        "  {:<16} {:<9} {}",
        "Slug".bright_white().bold(),
        "Platform".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for entry in snapshot.entries() {
        print_entry_rows(&entry);
    }

    println!();
    println!(
        "  Total: {}",
        snapshot.len().to_string().bright_white().bold()
    );
    println!();
}

fn handle_show(snapshot: &LinkSnapshot, slug: &str) -> Result<()> {
    let entry = find_entry(snapshot, slug)?;

    println!("{} {}", "🔗 Link".bright_blue().bold(), entry.slug.cyan());
    println!();
    println!("  iOS:     {}", entry.targets.ios.bright_white());
    println!("  Android: {}", entry.targets.android.bright_white());
    println!("  Default: {}", entry.targets.default.bright_white());
    println!();

    Ok(())
}

fn handle_resolve(snapshot: &LinkSnapshot, slug: &str, user_agent: &str) -> Result<()> {
    let entry = find_entry(snapshot, slug)?;
    let platform = classify_user_agent(user_agent);

    println!("  Platform: {}", platform.to_string().cyan());
    println!(
        "  Location: {}",
        entry.target_for(platform).bright_green().bold()
    );

    Ok(())
}

fn find_entry(snapshot: &LinkSnapshot, slug: &str) -> Result<LinkEntry> {
    snapshot
        .get(slug)
        .map(|targets| LinkEntry::new(slug.to_string(), targets.clone()))
        .with_context(|| format!("Link '{}' not found", slug))
}

fn print_entry_rows(entry: &LinkEntry) {
    println!(
        "  {:<16} {:<9} {}",
        entry.slug.cyan(),
        "ios",
        entry.targets.ios
    );
    println!("  {:<16} {:<9} {}", "", "android", entry.targets.android);
    println!("  {:<16} {:<9} {}", "", "default", entry.targets.default);
}
