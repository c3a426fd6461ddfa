use crate::models::activity::ACTIVITIES;
use crate::utils::table::{Column, Table};

pub struct ActivitiesLogic;

impl ActivitiesLogic {
    pub fn print() {
        let mut table = Table::new(vec![Column::new("CODE"), Column::new("ACTIVITY")]);
        for (code, label) in ACTIVITIES {
            table.add_row(vec![code.to_string(), label.to_string()]);
        }
        println!("🗂️  Activity codes:\n");
        print!("{}", table.render());
    }
}
