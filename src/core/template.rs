use crate::db::journal::Journal;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::fs_utils::ensure_writable;
use crate::utils::path::ensure_parent_dir;
use crate::workbook::blank::write_blank_template;
use std::path::Path;

pub struct TemplateLogic;

impl TemplateLogic {
    pub fn create(path: &Path, weeks: u32, force: bool, journal: Option<&Journal>) -> AppResult<()> {
        ensure_writable(path, force)?;
        ensure_parent_dir(path)?;

        write_blank_template(path, weeks)?;

        success(format!(
            "Blank record book with {} week block(s) written to {}",
            weeks.max(1),
            path.display()
        ));

        if let Some(j) = journal {
            j.note(
                "template",
                &path.display().to_string(),
                &format!("{} week blocks", weeks.max(1)),
            );
        }

        Ok(())
    }
}
