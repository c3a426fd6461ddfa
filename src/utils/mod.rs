pub mod date;
pub mod fs_utils;
pub mod path;
pub mod range;
pub mod table;

pub use range::parse_range;
