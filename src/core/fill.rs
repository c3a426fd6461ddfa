use crate::db::journal::Journal;
use crate::errors::{AppError, AppResult};
use crate::models::LogEntry;
use crate::ui::messages::{info, success, warning};
use crate::utils::fs_utils::ensure_writable;
use crate::utils::path::ensure_parent_dir;
use crate::workbook::{FillMode, FillOptions, FillReport, TemplateSource, fill_excel_sheet};
use std::path::Path;

pub struct FillLogic;

impl FillLogic {
    /// Fill `template` with `entries` and save the result to `output`.
    /// `output` may be the template itself (overwrite).
    pub fn run(
        entries: &[LogEntry],
        template: &Path,
        output: &Path,
        mode: FillMode,
        force: bool,
        options: &FillOptions,
        journal: Option<&Journal>,
    ) -> AppResult<FillReport> {
        // 1️⃣ output checks (overwriting the template was asked for explicitly)
        if output != template {
            ensure_writable(output, force)?;
        }
        ensure_parent_dir(output)?;

        match mode {
            FillMode::Monthly { start, end } => {
                info(format!("Generating month sheets for {start} → {end}…"))
            }
            FillMode::InPlace => info("Filling the template's own week blocks…"),
        }

        // 2️⃣ fill
        let report = fill_excel_sheet(
            TemplateSource::Path(template),
            entries,
            mode,
            Some(output),
            options,
        )?;

        if !report.is_success() {
            return Err(AppError::TemplateNotRecognized(report.message));
        }

        // 3️⃣ diagnostics
        for row in &report.skipped {
            warning(format!("Skipped {row}"));
        }

        success(format!(
            "{} Sheets: {}. Output: {}",
            report.message,
            report.sheets.join(", "),
            output.display()
        ));

        if let Some(j) = journal {
            j.note(
                "fill",
                &output.display().to_string(),
                &format!(
                    "{} sheet(s), {} skipped row(s)",
                    report.sheets.len(),
                    report.skipped.len()
                ),
            );
        }

        Ok(report)
    }
}
