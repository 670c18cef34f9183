use clap::ValueEnum;
use std::fmt;

use catchlog_engine::SortKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Sortable table column, as exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum SortColumn {
    FishType,
    Size,
    Lure,
    Location,
    Time,
}

impl SortColumn {
    pub fn to_sort_key(self) -> SortKey {
        match self {
            SortColumn::FishType => SortKey::FishType,
            SortColumn::Size => SortKey::Size,
            SortColumn::Lure => SortKey::Lure,
            SortColumn::Location => SortKey::Location,
            SortColumn::Time => SortKey::Timestamp,
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortColumn::FishType => write!(f, "fish-type"),
            SortColumn::Size => write!(f, "size"),
            SortColumn::Lure => write!(f, "lure"),
            SortColumn::Location => write!(f, "location"),
            SortColumn::Time => write!(f, "time"),
        }
    }
}
