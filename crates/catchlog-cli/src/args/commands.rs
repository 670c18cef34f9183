use super::common::FilterArgs;
use crate::types::SortColumn;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Log a new catch")]
    Add {
        #[arg(long, help = "Species, e.g. \"Largemouth Bass\" or \"Pike\"")]
        fish_type: Option<String>,

        #[arg(long, help = "Length in inches", allow_hyphen_values = true)]
        size: Option<String>,

        #[arg(long, help = "Lure the fish was caught on")]
        lure: Option<String>,

        #[arg(long, help = "Where the fish was caught")]
        location: Option<String>,
    },

    #[command(about = "List catches as a filtered, sorted table")]
    List {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, help = "Sort by a column instead of the default size ordering")]
        sort_by: Option<SortColumn>,

        #[arg(long, help = "Sort descending instead of ascending")]
        desc: bool,
    },

    #[command(about = "Summary statistics over the filtered set")]
    Stats {
        #[command(flatten)]
        filter: FilterArgs,
    },

    #[command(about = "Browse and log catches in an interactive terminal UI")]
    Tui,
}
