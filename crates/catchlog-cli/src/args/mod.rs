mod commands;
mod common;

pub use commands::*;
pub use common::*;

use crate::types::OutputFormat;
use clap::Parser;

#[derive(Parser)]
#[command(name = "catchlog")]
#[command(about = "Log and browse your fishing catches", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "~/.catchlog", global = true)]
    pub data_dir: String,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}
