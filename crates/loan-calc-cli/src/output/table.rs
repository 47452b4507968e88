use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::format_scalar;

/// Format output as a table using the tabled crate.
///
/// A single computation prints as a field/value table followed by any
/// warnings; a session prints one row per history entry.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_field_table(result);
                print_warnings(map);
            } else if let Some(Value::Array(results)) = map.get("results") {
                print_history_table(results);
                if let Some(Value::String(display)) = map.get("display") {
                    println!("\nLatest: {}", display);
                }
            } else {
                print_field_table(value);
            }
        }
        Value::Array(arr) => print_history_table(arr),
        _ => println!("{}", format_scalar(value)),
    }
}

fn print_field_table(value: &Value) {
    let Value::Object(map) = value else {
        println!("{}", format_scalar(value));
        return;
    };

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        builder.push_record([key.as_str(), &format_scalar(val)]);
    }
    println!("{}", Table::from(builder));
}

fn print_warnings(envelope: &Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }
}

const HISTORY_COLUMNS: [&str; 5] = ["amount", "years", "rate", "payment", "display"];

fn print_history_table(entries: &[Value]) {
    if entries.is_empty() {
        println!("(no computations)");
        return;
    }

    let mut builder = Builder::default();
    let mut header = vec!["#".to_string()];
    header.extend(HISTORY_COLUMNS.iter().map(|c| c.to_string()));
    builder.push_record(header);

    for (i, entry) in entries.iter().enumerate() {
        let mut row = vec![(i + 1).to_string()];
        row.extend(HISTORY_COLUMNS.iter().map(|c| {
            entry.get(*c).map(format_scalar).unwrap_or_default()
        }));
        builder.push_record(row);
    }
    println!("{}", Table::from(builder));
}
