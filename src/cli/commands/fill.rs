use crate::cli::commands::{fill_options, load_entries, open_journal, resolve_template};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::fill::FillLogic;
use crate::errors::{AppError, AppResult};
use crate::store::month_span;
use crate::utils::date::parse_date_arg;
use crate::utils::parse_range;
use crate::utils::path::expand_tilde;
use crate::workbook::FillMode;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Fill {
        range,
        from,
        to,
        template,
        out,
        overwrite,
        in_place,
        force,
    } = cmd
    {
        let template = resolve_template(template, cfg)?;
        let entries = load_entries(cfg, false)?;

        // 1️⃣ mode
        let mode = if *in_place {
            FillMode::InPlace
        } else {
            let (start, end) = match (range, from, to) {
                (Some(r), _, _) => parse_range(r)?,
                (None, Some(f), Some(t)) => (parse_date_arg(f)?, parse_date_arg(t)?),
                _ => month_span(&entries).ok_or_else(|| {
                    AppError::InvalidRange("no entries stored; pass --range or --from/--to".into())
                })?,
            };
            FillMode::Monthly { start, end }
        };

        // 2️⃣ output
        let output = if *overwrite {
            template.clone()
        } else {
            out.as_deref()
                .map(expand_tilde)
                .unwrap_or_else(|| cfg.output_path())
        };

        let options = fill_options(cfg);

        let journal = open_journal(cfg);
        FillLogic::run(
            &entries,
            &template,
            &output,
            mode,
            *force,
            &options,
            journal.as_ref(),
        )?;
    }
    Ok(())
}
