//! Clap argument types.

use clap::{Parser, ValueEnum};

use userpick::output::OutputRenderer;
use userpick::picker::PickerView;

/// Pick a user from a JSON users endpoint and show their avatar.
#[derive(Parser, Debug)]
#[command(
    name = "userpick",
    version = userpick::constants::VERSION,
    about = super::ABOUT_STYLED,
)]
pub struct Cli {
    /// Enable debug logging on stderr (overrides RUST_LOG).
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Bypass the result cache for this run.
    #[arg(long, global = true, default_value_t = false)]
    pub no_cache: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Load the users and list them in endpoint order.
    List(LoadArgs),

    /// Load the users, select one, and show their avatar.
    Select(SelectArgs),

    /// Manage the result cache.
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Print version information.
    Version,
}

/// Options shared by every command that loads users.
#[derive(Parser, Debug, Clone)]
pub struct LoadArgs {
    /// Users endpoint (default: config, then USERPICK_URL, then built-in).
    #[arg(long)]
    pub url: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,

    /// Disable the loading indicator.
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}

/// Arguments for the `select` subcommand.
#[derive(Parser, Debug)]
pub struct SelectArgs {
    /// Value of the option to select (the user's `user_id`).
    pub user_id: String,

    #[command(flatten)]
    pub load: LoadArgs,
}

/// Cache management subcommands.
#[derive(clap::Subcommand, Debug)]
pub enum CacheAction {
    /// Remove all cached user lists.
    Clear,
    /// Show cache statistics (entry count and size).
    Stats,
    /// Print the cache directory path.
    Path,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    /// Render a picker snapshot using the renderer for this format.
    pub fn render(&self, view: &PickerView) -> String {
        match self {
            OutputFormat::Terminal => userpick::output::terminal::TerminalRenderer.render(view),
            OutputFormat::Json => userpick::output::json::JsonRenderer.render(view),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_defaults() {
        let cli = Cli::try_parse_from(["userpick", "list"]).unwrap();
        let Command::List(args) = cli.command else {
            panic!("expected list");
        };
        assert!(args.url.is_none());
        assert_eq!(args.format, OutputFormat::Terminal);
        assert!(!cli.no_cache);
    }

    #[test]
    fn parse_select_with_flags() {
        let cli = Cli::try_parse_from([
            "userpick",
            "--no-cache",
            "select",
            "141",
            "--url",
            "http://x/users",
            "--format",
            "json",
        ])
        .unwrap();
        assert!(cli.no_cache);
        let Command::Select(args) = cli.command else {
            panic!("expected select");
        };
        assert_eq!(args.user_id, "141");
        assert_eq!(args.load.url.as_deref(), Some("http://x/users"));
        assert_eq!(args.load.format, OutputFormat::Json);
    }

    #[test]
    fn select_requires_user_id() {
        assert!(Cli::try_parse_from(["userpick", "select"]).is_err());
    }

    #[test]
    fn parse_cache_action() {
        let cli = Cli::try_parse_from(["userpick", "cache", "stats"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Cache {
                action: CacheAction::Stats
            }
        ));
    }
}
