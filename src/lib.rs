//! worklogbook library root.
//! Exposes the CLI parser, the high-level run() function, the entry store and
//! the record book templating engine.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod git;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;
pub mod workbook;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::AddWeek { .. } => cli::commands::add_week::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Activities => cli::commands::activities::handle(&cli.command),
        Commands::Reset { .. } => cli::commands::reset::handle(&cli.command, cfg),
        Commands::Scan { .. } => cli::commands::scan::handle(&cli.command, cfg),
        Commands::Template { .. } => cli::commands::template::handle(&cli.command, cfg),
        Commands::Fill { .. } => cli::commands::fill::handle(&cli.command, cfg),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line path overrides
    if let Some(entries) = &cli.entries {
        cfg.entries_file = entries.clone();
    }
    if let Some(journal) = &cli.journal {
        cfg.journal = journal.clone();
    }

    // 4️⃣ dispatch
    dispatch(&cli, &cfg)
}
