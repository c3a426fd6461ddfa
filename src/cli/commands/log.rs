use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::journal::Journal;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let journal = Journal::open(&cfg.journal_file_path())?;
        LogLogic::print_log(&journal)?;
    }

    Ok(())
}
