//! userpick — user picker CLI.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use userpick::cache;
use userpick::config;
use userpick::constants;
use userpick::env;
use userpick::picker;
use userpick::progress;
use userpick::providers;

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use cache::{CachedUserSource, FileStore};
use cli::args::{CacheAction, Cli, Command, LoadArgs, OutputFormat};
use config::Config;
use env::Env;
use picker::widgets::{Avatar, Dropdown};
use picker::UserPicker;
use progress::TerminalLoading;
use providers::avatar::AvatarBaseSource;
use providers::http::HttpUserSource;
use providers::UserSource;

type TerminalPicker = UserPicker<TerminalLoading, Dropdown, Avatar>;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    let no_cache = cli.no_cache;

    match cli.command {
        Command::List(args) => run_list(args, no_cache).await,
        Command::Select(args) => run_select(args.user_id, args.load, no_cache).await,
        Command::Cache { action } => run_cache(action),
        Command::Version => run_version(),
    }
}

/// Print version information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!("{} {}", constants::APP_NAME.bold(), constants::VERSION.green().bold());
    Ok(())
}

/// List every user in endpoint order.
async fn run_list(args: LoadArgs, no_cache: bool) -> Result<()> {
    let picker = load_picker(&args, no_cache).await?;
    print!("{}", args.format.render(&picker.view()));
    Ok(())
}

/// Select a user and show the resulting avatar state.
async fn run_select(user_id: String, args: LoadArgs, no_cache: bool) -> Result<()> {
    let mut picker = load_picker(&args, no_cache).await?;
    let result = picker.select(&user_id);
    print!("{}", args.format.render(&picker.view()));
    result?;
    Ok(())
}

/// Resolve config, build the source chain, and populate a picker.
async fn load_picker(args: &LoadArgs, no_cache: bool) -> Result<TerminalPicker> {
    let env = Env::real();
    let cwd = std::env::current_dir().context("failed to determine working directory")?;
    let config = Config::load(Some(&cwd), &env).context("failed to load configuration")?;

    let url = args.url.clone().unwrap_or_else(|| config.source.url.clone());
    let source = build_source(&config, no_cache)?;

    let show_progress = !args.no_progress && args.format == OutputFormat::Terminal;
    let mut picker = UserPicker::new(
        source,
        TerminalLoading::new(&url, show_progress),
        Dropdown::new(),
        Avatar::new(),
    );

    picker
        .initialize(&url)
        .await
        .with_context(|| format!("could not populate user list from {url}"))?;

    Ok(picker)
}

/// HTTP, then the optional cache, then avatar resolution. Resolution sits
/// outside the cache so cached lists never carry a stale base URL.
fn build_source(config: &Config, no_cache: bool) -> Result<Arc<dyn UserSource>> {
    let http = HttpUserSource::from_config(config).context("failed to build user source")?;

    if no_cache || !config.cache.enabled {
        tracing::debug!("result cache disabled");
        let source = AvatarBaseSource::from_config(http, config)
            .context("invalid avatar base URL")?;
        return Ok(Arc::new(source));
    }
    let cached = CachedUserSource::new(http, FileStore::new(), config.cache.ttl());
    let source =
        AvatarBaseSource::from_config(cached, config).context("invalid avatar base URL")?;
    Ok(Arc::new(source))
}

/// Manage the result cache.
fn run_cache(action: CacheAction) -> Result<()> {
    let store = FileStore::new();

    match action {
        CacheAction::Clear => {
            let stats = store.clear().context("failed to clear cache")?;
            println!(
                "Cleared {} cached user list(s) ({}).",
                stats.entries,
                stats.human_size()
            );
        }
        CacheAction::Stats => {
            let stats = store.stats().context("failed to read cache")?;
            println!("Entries: {}", stats.entries);
            println!("Size:    {}", stats.human_size());
        }
        CacheAction::Path => match store.path() {
            Some(path) => println!("{}", path.display()),
            None => println!("No cache directory available."),
        },
    }
    Ok(())
}
