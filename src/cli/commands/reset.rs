use crate::cli::commands::open_journal;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reset::ResetLogic;
use crate::errors::AppResult;
use crate::store::CsvEntryStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        let mut store = CsvEntryStore::new(cfg.entries_file_path());
        let journal = open_journal(cfg);
        ResetLogic::apply(&mut store, journal.as_ref(), *yes)?;
    }
    Ok(())
}
