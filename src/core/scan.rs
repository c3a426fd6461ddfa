use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, success, warning};
use crate::utils::table::{Column, Table};
use crate::workbook::scanner::preview_anchors;
use crate::workbook::{FillOptions, TEMPLATE_NOT_RECOGNIZED, TemplateSource, open_template, scan_workbook};
use std::path::Path;

/// Rows shown below each anchor.
pub const PREVIEW_DEPTH: u32 = 12;

pub struct ScanLogic;

impl ScanLogic {
    /// Print where the week blocks of `template` are and what the layout
    /// descriptor looks like.
    pub fn report(template: &Path, options: &FillOptions) -> AppResult<()> {
        let book = open_template(TemplateSource::Path(template))?;

        let (sheet_name, scan) = match scan_workbook(&book, options) {
            Ok(found) => found,
            Err(AppError::TemplateNotRecognized(detail)) => {
                warning(TEMPLATE_NOT_RECOGNIZED);
                return Err(AppError::TemplateNotRecognized(detail));
            }
            Err(e) => return Err(e),
        };

        let sheet = book
            .get_sheet_by_name(&sheet_name)
            .ok_or_else(|| AppError::Workbook(format!("sheet '{sheet_name}' not found")))?;

        header(format!("{} [{}]", template.display(), sheet_name));

        let layout = scan.layout;
        success(format!(
            "{} week block(s), first anchor at row {}",
            scan.anchors.len(),
            layout.anchor_row
        ));
        info(format!(
            "block height {} ({}), gap {}, stride {}",
            layout.block_height,
            if scan.measured_height { "measured" } else { "default" },
            layout.gap,
            layout.stride()
        ));

        for preview in preview_anchors(sheet, &scan, PREVIEW_DEPTH) {
            println!(
                "\n▶ row {}: '{}' header '{}'",
                preview.row, preview.label, preview.header
            );

            let mut table = Table::new(vec![
                Column::new("ROW"),
                Column::wrapped("A", 24),
                Column::wrapped("B", 40),
                Column::wrapped("C", 24),
            ]);
            for (row, [a, b, c]) in preview.rows {
                table.add_row(vec![row.to_string(), a, b, c]);
            }
            print!("{}", table.render());
        }

        Ok(())
    }
}
