use crate::context::ExecutionContext;
use crate::types::OutputFormat;
use anyhow::{Result, anyhow, bail};
use catchlog_engine::CatchForm;
use catchlog_types::FishType;

pub fn handle(
    context: &ExecutionContext,
    fish_type: Option<String>,
    size: Option<String>,
    lure: Option<String>,
    location: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let mut form = CatchForm::new();

    if let Some(name) = fish_type {
        let fish_type: FishType = name.parse().map_err(|_| {
            anyhow!(
                "unknown fish type '{}' (known types: {})",
                name,
                FishType::ALL.map(|ft| ft.as_str()).join(", ")
            )
        })?;
        form.set_fish_type(Some(fish_type));
    }
    if let Some(size) = size {
        form.set_size(size);
    }
    if let Some(lure) = lure {
        form.set_lure(lure);
    }
    if let Some(location) = location {
        form.set_location(location);
    }

    let Some(new_catch) = form.submit() else {
        let mut message = String::from("catch not logged:");
        for (field, text) in form.errors() {
            message.push_str(&format!("\n  {}: {}", field.label(), text));
        }
        bail!(message);
    };

    let mut store = context.open_store()?;
    let record = store.append(new_catch)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(record)?);
        }
        OutputFormat::Plain => {
            println!(
                "Logged {}: {}\" on {} at {} (id {})",
                record.fish_type, record.size, record.lure, record.location, record.id
            );
        }
    }

    Ok(())
}
