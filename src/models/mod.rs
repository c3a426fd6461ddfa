pub mod activity;
pub mod entry;

pub use entry::LogEntry;
