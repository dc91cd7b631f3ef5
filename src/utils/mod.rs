pub mod format;
pub mod palette;

pub use format::{format_currency, format_date, format_percentage};
