//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod json;
pub mod table;

/// Print a collection as a table of `R` rows or as JSON of the raw items.
pub fn print_list<T, R>(items: &[T], format: OutputFormat) -> Result<()>
where
    T: Serialize + Clone + Into<R>,
    R: Tabled,
{
    let output = match format {
        OutputFormat::Table => {
            let rows: Vec<R> = items.iter().cloned().map(Into::into).collect();
            table::format_table(&rows)
        }
        OutputFormat::Json => json::format_json(items)?,
    };
    println!("{}", output);
    Ok(())
}

/// Print a single record as a two-column field table or as JSON.
pub fn print_record<T: Serialize>(item: &T, format: OutputFormat) -> Result<()> {
    let output = match format {
        OutputFormat::Table => table::format_record(&serde_json::to_value(item)?),
        OutputFormat::Json => json::format_json(item)?,
    };
    println!("{}", output);
    Ok(())
}
