//! List command handler.

use crate::api::{self, Mode};
use crate::args::ListArgs;
use crate::commands::{Out, OutputFormat};
use crate::model::Expense;
use crate::{Config, Result};

/// Fetches the full snapshot and renders it. The raw amount text is shown as-is, even when it
/// is not numeric.
pub async fn list(config: Config, mode: Mode, args: ListArgs) -> Result<Out<Vec<Expense>>> {
    let mut store = api::store(&config, mode)?;
    let expenses = store.list().await?;

    let count = expenses.len();
    let message = match args.format {
        OutputFormat::Table => format!(
            "{count} expense{}\n\n{}",
            if count == 1 { "" } else { "s" },
            render_table(&expenses)
        ),
        OutputFormat::Json => serde_json::to_string_pretty(&expenses)?,
    };
    Ok(Out::new(message, expenses))
}

/// Renders the collection as a markdown table.
fn render_table(expenses: &[Expense]) -> String {
    let mut out = String::new();
    out.push_str("| ID | Date | Description | Amount | Category |\n");
    out.push_str("| --- | --- | --- | --- | --- |\n");
    for expense in expenses {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            expense.id.as_deref().unwrap_or(""),
            expense.date,
            expense.description,
            expense.amount,
            expense.category
        ));
    }
    out
}
