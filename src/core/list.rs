use crate::errors::AppResult;
use crate::models::LogEntry;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

pub struct ListLogic;

impl ListLogic {
    pub fn print(entries: &[LogEntry], json: bool) -> AppResult<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(entries)?);
            return Ok(());
        }

        if entries.is_empty() {
            info("No entries found.");
            return Ok(());
        }

        let mut sorted: Vec<&LogEntry> = entries.iter().collect();
        // newest first
        sorted.sort_by(|a, b| b.date.cmp(&a.date));

        let mut table = Table::new(vec![
            Column::new("DATE"),
            Column::new("DAY"),
            Column::new("WEEK END"),
            Column::new("CODE"),
            Column::wrapped("DESCRIPTION", 48),
            Column::wrapped("PROBLEMS", 24),
            Column::wrapped("SOLUTIONS", 24),
        ]);

        for e in sorted {
            table.add_row(vec![
                e.date.to_string(),
                e.day_name.clone(),
                e.week_ending.to_string(),
                e.activity_code.clone(),
                e.description.clone(),
                e.problem.clone().unwrap_or_default(),
                e.solution.clone().unwrap_or_default(),
            ]);
        }

        print!("{}", table.render());
        println!("\n{} entries", entries.len());
        Ok(())
    }
}
