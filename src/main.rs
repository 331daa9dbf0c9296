use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use countdown_tz::cli::{Cli, Command};
use countdown_tz::cmd::{cmd_countdown, cmd_pick, cmd_zones, CountdownOptions};
use countdown_tz::completions::{cmd_completions, cmd_schema};
use countdown_tz::config::Config;
use countdown_tz::init::{cmd_init, InitOptions};
use countdown_tz::logging;
use countdown_tz::provider::TzdbService;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        process::exit(2);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let root = match cli.root {
        Some(p) => p,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };

    let load_config = || -> Result<Config> {
        match cli.config {
            Some(ref config_path) => Config::from_file(config_path),
            None => Config::load(&root),
        }
    };
    let service = TzdbService;

    match cli.command {
        Command::Countdown {
            zone,
            target,
            now,
            once,
        } => {
            let opts = CountdownOptions {
                zone,
                target,
                now,
                once,
            };
            cmd_countdown(&service, &load_config()?, &cli.format, opts)
        }
        Command::Zones { query, limit } => {
            cmd_zones(&service, &load_config()?, &cli.format, query, limit)
        }
        Command::Pick { target } => cmd_pick(&service, &load_config()?, &cli.format, target),
        Command::Init { yes, target, zone } => {
            let opts = InitOptions {
                non_interactive: yes,
                target,
                zone,
            };
            cmd_init(&root, &service, opts)
        }
        Command::Completions { shell } => cmd_completions(shell),
        Command::Schema => cmd_schema(),
    }
}
