//! rCohort library root.
//! Exposes the CLI parser, the high-level run() function and the batch jobs
//! (merge, activity summary, combine) behind it.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(command: &Commands, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match command {
        Commands::Run => cli::commands::run::handle(cfg),
        Commands::Merge { .. } => cli::commands::merge::handle(command, cfg),
        Commands::Activity { .. } => cli::commands::activity::handle(command, cfg),
        Commands::Combine { .. } => cli::commands::combine::handle(command, cfg),
        Commands::Show => cli::commands::show::handle(cfg),
        Commands::Config { .. } => {
            cli::commands::config::handle(command, config_path, Some(&cfg.data_dir))
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Commands::Run);

    let config_path: PathBuf = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file);

    // 2️⃣ `config` works on the file itself, even a broken one
    if let Commands::Config { .. } = command {
        return cli::commands::config::handle(&command, &config_path, cli.data_dir.as_deref());
    }

    // 3️⃣ load config once, then apply the --data-dir override
    let mut cfg = Config::load_from(&config_path)?;
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&command, &cfg, &config_path)
}
