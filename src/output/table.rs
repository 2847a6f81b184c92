//! Table output formatting

use serde_json::Value;
use tabled::{
    Table, Tabled,
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

const EMPTY: &str = "No results found.";

/// Format rows as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return EMPTY.to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Format one JSON object as FIELD / VALUE rows. Nested values are shown inline.
pub fn format_record(record: &Value) -> String {
    let Some(fields) = record.as_object() else {
        return match record {
            Value::Null => EMPTY.to_string(),
            other => cell(other),
        };
    };

    let mut builder = Builder::default();
    builder.push_record(["FIELD", "VALUE"]);
    for (name, value) in fields {
        builder.push_record([name.clone(), cell(value)]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
