use crate::cli::commands::open_journal;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::store::CsvEntryStore;
use crate::utils::date::parse_date_arg;

/// Handle the `add` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        description,
        code,
        problem,
        solution,
    } = cmd
    {
        let date = parse_date_arg(date)?;
        let code = code.as_deref().unwrap_or(&cfg.default_activity);

        let mut store = CsvEntryStore::new(cfg.entries_file_path());
        let journal = open_journal(cfg);

        AddLogic::apply(
            &mut store,
            journal.as_ref(),
            date,
            code,
            description,
            problem.as_deref(),
            solution.as_deref(),
        )?;
    }
    Ok(())
}
