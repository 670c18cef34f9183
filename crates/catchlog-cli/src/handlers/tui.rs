use crate::context::ExecutionContext;
use crate::ui;
use anyhow::Result;

pub fn handle(context: &ExecutionContext) -> Result<()> {
    let store = context.open_store()?;
    ui::run(store)
}
