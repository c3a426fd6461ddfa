pub mod activities;
pub mod add;
pub mod add_week;
pub mod config;
pub mod fill;
pub mod import;
pub mod list;
pub mod log;
pub mod reset;
pub mod scan;
pub mod template;
