use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;

pub fn cmd_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}

pub fn cmd_schema() -> Result<()> {
    let schema = schemars::schema_for!(crate::config::Config);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
