// src/main.rs
// =============================================================================
// Entry point of site-digest.
//
// What happens here:
// 1. Install the tracing subscriber (RUST_LOG overrides the "info" default)
// 2. Parse the command line into a Settings value and a command
// 3. Make sure the config directory exists
// 4. Dispatch to a mode, or to the interactive prompts when no subcommand
//    was given
// 5. Exit 0 on normal completion, 2 when an unexpected error escapes
//
// A page that cannot be fetched is not an unexpected error: it is logged and
// the run ends normally without a report.
// =============================================================================

mod analysis;
mod app;
mod cli;
mod config;
mod crawl;
mod extract;
mod fetch;
mod interactive;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use analysis::Analyzer;
use app::{PageMode, WordAction};
use cli::{normalize_target, Cli, Commands, WordsCommand};
use config::{ExclusionSet, ExclusionStore, JsonExclusionStore, Settings};
use fetch::HttpFetcher;
use interactive::Target;
use report::FileExporter;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    let settings = cli.settings.to_settings();

    let store = JsonExclusionStore::new(&settings.config_dir);
    store
        .init()
        .context("failed to initialize the config directory")?;

    match cli.command {
        None => {
            let session = interactive::prompt_session()?;
            let exclusions = app::apply_word_action(&store, &session.word_action)?;
            match session.target {
                Target::Page(mode) => handle_page(&settings, &exclusions, &session.url, &mode).await,
                Target::Domain => {
                    handle_domain(&settings, &exclusions, &session.url, config::DEFAULT_MAX_PAGES).await
                }
            }
        }
        Some(Commands::Section { url, title, preset }) => {
            let exclusions = app::exclusions_for_run(&store, preset.as_deref())?;
            let mode = PageMode::Section(title);
            handle_page(&settings, &exclusions, &normalize_target(&url), &mode).await
        }
        Some(Commands::Full { url, preset }) => {
            let exclusions = app::exclusions_for_run(&store, preset.as_deref())?;
            handle_page(&settings, &exclusions, &normalize_target(&url), &PageMode::FullPage).await
        }
        Some(Commands::Domain { url, max_pages, preset }) => {
            let exclusions = app::exclusions_for_run(&store, preset.as_deref())?;
            handle_domain(&settings, &exclusions, &normalize_target(&url), max_pages).await
        }
        Some(Commands::Words { action }) => handle_words(&store, action),
    }
}

// Handles the 'section' and 'full' modes
async fn handle_page(
    settings: &Settings,
    exclusions: &ExclusionSet,
    url: &str,
    mode: &PageMode,
) -> Result<i32> {
    println!("🔍 Fetching: {}", url);

    let fetcher = HttpFetcher::new(settings.timeout)?;
    let analyzer = Analyzer::with_defaults(settings.top_words);
    let exporter = FileExporter::new(&settings.output_dir);

    match app::run_single_page(&fetcher, &analyzer, &exporter, exclusions, url, mode).await? {
        Some(path) => println!("✅ Report saved to: {}", path.display()),
        None => println!("⚠️  Nothing to report for {}", url),
    }
    Ok(0)
}

// Handles the 'domain' mode
async fn handle_domain(
    settings: &Settings,
    exclusions: &ExclusionSet,
    url: &str,
    max_pages: usize,
) -> Result<i32> {
    println!("🔍 Crawling: {}", url);
    println!("📊 Page limit: {}", max_pages);

    let fetcher = HttpFetcher::new(settings.timeout)?;
    let analyzer = Analyzer::with_defaults(settings.top_words);
    let exporter = FileExporter::new(&settings.output_dir);

    let path = app::run_domain(&fetcher, &analyzer, &exporter, exclusions, url, max_pages).await?;
    println!("✅ Full domain report saved to: {}", path.display());
    Ok(0)
}

// Handles the 'words' subcommand
fn handle_words(store: &JsonExclusionStore, command: WordsCommand) -> Result<i32> {
    let action = match command {
        WordsCommand::List => {
            let words = store.load_default()?;
            if words.is_empty() {
                println!("No excluded words");
            }
            for word in words.iter() {
                println!("{}", word);
            }
            return Ok(0);
        }
        WordsCommand::Add { word } => WordAction::Add(word),
        WordsCommand::Remove { word } => WordAction::Remove(word),
        WordsCommand::SavePreset { name } => WordAction::SavePreset(name),
        WordsCommand::LoadPreset { name } => WordAction::LoadPreset(name),
    };

    app::apply_word_action(store, &action)?;
    Ok(0)
}
