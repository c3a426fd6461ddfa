use crate::cli::commands::open_journal;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::template::TemplateLogic;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Template { file, weeks, force } = cmd {
        let journal = open_journal(cfg);
        TemplateLogic::create(&expand_tilde(file), *weeks, *force, journal.as_ref())?;
    }
    Ok(())
}
