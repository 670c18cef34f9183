use crate::args::FilterArgs;
use crate::context::ExecutionContext;
use crate::presentation::CatchTableView;
use crate::types::{OutputFormat, SortColumn};
use anyhow::Result;
use catchlog_engine::{SortDirection, SortSpec, project};
use is_terminal::IsTerminal;

pub fn handle(
    context: &ExecutionContext,
    filter_args: &FilterArgs,
    sort_by: Option<SortColumn>,
    desc: bool,
    format: OutputFormat,
) -> Result<()> {
    let filter = filter_args.resolve()?;
    let store = context.open_store()?;

    let sort = sort_by.map(|column| {
        let direction = if desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        SortSpec::new(column.to_sort_key(), direction)
    });

    let records = project(store.records(), &filter, sort);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        OutputFormat::Plain => {
            let use_color = std::io::stdout().is_terminal();
            print!("{}", CatchTableView::new(records, use_color));
        }
    }

    Ok(())
}
