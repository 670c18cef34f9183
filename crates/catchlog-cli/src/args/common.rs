use anyhow::{Result, anyhow};
use catchlog_engine::CatchFilter;
use catchlog_types::FishType;
use clap::Args;

#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    #[arg(long, help = "Only this species (exact match)")]
    pub fish_type: Option<String>,

    #[arg(long, help = "Location contains this text (case-insensitive)")]
    pub location: Option<String>,

    #[arg(long, help = "Lure contains this text (case-insensitive)")]
    pub lure: Option<String>,

    #[arg(long, help = "Minimum size in inches (inclusive)")]
    pub min_size: Option<f64>,

    #[arg(long, help = "Maximum size in inches (inclusive)")]
    pub max_size: Option<f64>,
}

impl FilterArgs {
    pub fn resolve(&self) -> Result<CatchFilter> {
        let mut filter = CatchFilter::new();

        if let Some(ref name) = self.fish_type {
            let fish_type: FishType = name.parse().map_err(|_| {
                anyhow!(
                    "unknown fish type '{}' (known types: {})",
                    name,
                    FishType::ALL.map(|ft| ft.as_str()).join(", ")
                )
            })?;
            filter = filter.fish_type(fish_type);
        }

        if let Some(ref location) = self.location {
            filter = filter.location(location.clone());
        }

        if let Some(ref lure) = self.lure {
            filter = filter.lure(lure.clone());
        }

        if let Some(min_size) = self.min_size {
            filter = filter.min_size(min_size);
        }

        if let Some(max_size) = self.max_size {
            filter = filter.max_size(max_size);
        }

        Ok(filter)
    }
}
