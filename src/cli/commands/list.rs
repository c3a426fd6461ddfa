use crate::cli::commands::load_entries;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::errors::AppResult;
use crate::store::filter_range;
use crate::utils::parse_range;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { range, json } = cmd {
        // keep stdout parseable in JSON mode
        let entries = load_entries(cfg, *json)?;

        let entries = match range {
            Some(r) => {
                let (start, end) = parse_range(r)?;
                filter_range(&entries, start, end)
            }
            None => entries,
        };

        ListLogic::print(&entries, *json)?;
    }
    Ok(())
}
