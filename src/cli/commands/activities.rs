use crate::cli::parser::Commands;
use crate::core::activities::ActivitiesLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if matches!(cmd, Commands::Activities) {
        ActivitiesLogic::print();
    }
    Ok(())
}
