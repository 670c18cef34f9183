use crate::args::FilterArgs;
use crate::context::ExecutionContext;
use crate::presentation::summary_line;
use crate::types::OutputFormat;
use anyhow::Result;
use catchlog_engine::{CatchSummary, project};

pub fn handle(
    context: &ExecutionContext,
    filter_args: &FilterArgs,
    format: OutputFormat,
) -> Result<()> {
    let filter = filter_args.resolve()?;
    let store = context.open_store()?;

    let records = project(store.records(), &filter, None);
    let summary = CatchSummary::compute(&records);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Plain => {
            println!("{}", summary_line(&summary));
        }
    }

    Ok(())
}
