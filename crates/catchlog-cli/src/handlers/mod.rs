pub mod add;
pub mod list;
pub mod stats;
pub mod tui;
