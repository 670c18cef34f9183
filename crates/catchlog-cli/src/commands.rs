use super::args::{Cli, Commands};
use super::handlers;
use crate::context::ExecutionContext;
use anyhow::Result;
use std::path::PathBuf;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = expand_tilde(&cli.data_dir);
    let context = ExecutionContext::new(data_dir);

    match cli.command {
        Commands::Add {
            fish_type,
            size,
            lure,
            location,
        } => handlers::add::handle(&context, fish_type, size, lure, location, cli.format),

        Commands::List {
            filter,
            sort_by,
            desc,
        } => handlers::list::handle(&context, &filter, sort_by, desc, cli.format),

        Commands::Stats { filter } => handlers::stats::handle(&context, &filter, cli.format),

        Commands::Tui => handlers::tui::handle(&context),
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
