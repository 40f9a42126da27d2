mod report;
mod run;

use anyhow::Context;
use clap::{Parser, Subcommand};
use stockwatch_core::{AppConfig, SnapshotStore};
use stockwatch_notify::{StdoutNotifier, TelegramNotifier};
use stockwatch_scraper::PageClient;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "stockwatch")]
#[command(about = "Scrape product stock counts and report changes to Telegram")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch, compare with the last snapshot, save, and notify (default).
    Run {
        /// Print the notification to stdout instead of sending it.
        #[arg(long)]
        print: bool,
    },
    /// Fetch and print the current inventory without saving or notifying.
    Peek,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = stockwatch_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    tracing::debug!(?config, "configuration loaded");

    let client = PageClient::new(config.fetch_timeout_secs, &config.user_agent, &config.cookie)?;

    match cli.command.unwrap_or(Commands::Run { print: false }) {
        Commands::Run { print } => run_command(&config, &client, print).await,
        Commands::Peek => peek_command(&config, &client).await,
    }
}

async fn run_command(config: &AppConfig, client: &PageClient, print: bool) -> anyhow::Result<()> {
    let categories = stockwatch_core::load_categories(&config.categories_path)
        .context("failed to load product categories")?
        .categories;
    let store = SnapshotStore::new(config.state_path.clone());
    let now = chrono::Utc::now();

    let outcome = if print {
        run::run_once(config, &categories, client, &store, &StdoutNotifier, now).await?
    } else {
        let notifier = TelegramNotifier::with_base_url(
            &config.bot_token,
            &config.chat_id,
            config.notify_timeout_secs,
            &config.telegram_api_base,
        )?;
        run::run_once(config, &categories, client, &store, &notifier, now).await?
    };

    tracing::info!(?outcome, "run finished");
    Ok(())
}

async fn peek_command(config: &AppConfig, client: &PageClient) -> anyhow::Result<()> {
    let inventory = client.fetch_inventory(&config.target_urls).await?;
    for (name, count) in &inventory {
        println!("{name}: {count}");
    }
    tracing::info!(count = inventory.len(), "peek finished");
    Ok(())
}
