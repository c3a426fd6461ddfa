use crate::cli::commands::{fill_options, resolve_template};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::scan::ScanLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Scan { template } = cmd {
        let template = resolve_template(template, cfg)?;
        let options = fill_options(cfg);
        ScanLogic::report(&template, &options)?;
    }
    Ok(())
}
