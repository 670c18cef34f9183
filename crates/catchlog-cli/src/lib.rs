mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
mod presentation;
pub mod types;
mod ui;

pub use args::{Cli, Commands, FilterArgs};
pub use commands::run;
pub use types::{OutputFormat, SortColumn};
