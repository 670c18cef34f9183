mod table;
mod time;

pub use table::{CatchTableView, summary_line};
pub use time::format_timestamp;
