use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "countdown-tz",
    version,
    about = "Count down to a civil date and time in any timezone"
)]
pub struct Cli {
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: Format,

    /// Directory to start searching for .countdown-tz.toml from
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the time remaining until the target, refreshed every second
    #[command(alias = "run")]
    Countdown {
        /// Zone to read the target in (default: config, then system zone)
        #[arg(long)]
        zone: Option<String>,

        /// Civil target, e.g. "2026-01-01 00:00:00"
        #[arg(long)]
        target: Option<String>,

        /// Fixed current instant in RFC 3339 form; implies --once
        #[arg(long)]
        now: Option<String>,

        /// Print a single frame and exit
        #[arg(long)]
        once: bool,
    },

    /// List timezones, optionally narrowed by a search query
    #[command(alias = "ls")]
    Zones {
        /// Case-insensitive substring of the zone id or country name
        query: Option<String>,

        #[arg(long)]
        limit: Option<usize>,
    },

    /// Search and pick a timezone interactively, then start the countdown
    Pick {
        /// Civil target, e.g. "2026-01-01 00:00:00"
        #[arg(long)]
        target: Option<String>,
    },

    /// Generate a .countdown-tz.toml configuration file
    Init {
        /// Accept defaults without interactive prompts
        #[arg(long, short = 'y')]
        yes: bool,

        #[arg(long)]
        target: Option<String>,

        #[arg(long)]
        zone: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the JSON schema of the configuration file
    Schema,
}
