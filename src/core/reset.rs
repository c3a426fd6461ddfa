use crate::db::journal::Journal;
use crate::errors::AppResult;
use crate::store::EntryStore;
use crate::ui::messages::{info, success};
use crate::utils::fs_utils::confirm;

pub struct ResetLogic;

impl ResetLogic {
    /// Delete every stored entry. Without `yes` the user is asked first.
    /// Returns whether the store was cleared.
    pub fn apply<S: EntryStore>(store: &mut S, journal: Option<&Journal>, yes: bool) -> AppResult<bool> {
        let count = store.load_all()?.len();

        if !yes && !confirm(&format!("Delete all {count} stored entries?"))? {
            info("Reset cancelled.");
            return Ok(false);
        }

        store.clear()?;
        success(format!("Removed {count} entries."));

        if let Some(j) = journal {
            j.note("reset", "entries", &format!("{count} entries removed"));
        }

        Ok(true)
    }
}
