use serde_json::Value;
use std::io;

use super::format_scalar;

type StdoutWriter<'a> = csv::Writer<io::StdoutLock<'a>>;

/// Write output as CSV to stdout.
///
/// Session output becomes one row per history entry; a single result
/// becomes `field,value` pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let written = match value {
        Value::Object(map) => match (map.get("result"), map.get("results")) {
            (Some(result), _) => write_pairs(&mut wtr, result),
            (None, Some(Value::Array(rows))) => write_rows(&mut wtr, rows),
            _ => write_pairs(&mut wtr, value),
        },
        Value::Array(rows) => write_rows(&mut wtr, rows),
        _ => wtr.write_record([format_csv_value(value)]),
    };

    if let Err(e) = written.and_then(|_| wtr.flush().map_err(csv::Error::from)) {
        eprintln!("CSV write error: {}", e);
    }
}

fn write_pairs(wtr: &mut StdoutWriter<'_>, value: &Value) -> csv::Result<()> {
    wtr.write_record(["field", "value"])?;
    if let Value::Object(map) = value {
        for (key, val) in map {
            wtr.write_record([key.as_str(), &format_csv_value(val)])?;
        }
    }
    Ok(())
}

fn write_rows(wtr: &mut StdoutWriter<'_>, rows: &[Value]) -> csv::Result<()> {
    let Some(Value::Object(first)) = rows.first() else {
        return Ok(());
    };

    let headers: Vec<&str> = first.keys().map(String::as_str).collect();
    wtr.write_record(&headers)?;
    for row in rows {
        let record: Vec<String> = headers
            .iter()
            .map(|h| row.get(*h).map(format_csv_value).unwrap_or_default())
            .collect();
        wtr.write_record(&record)?;
    }
    Ok(())
}

/// Null (a non-finite payment) is an empty cell.
fn format_csv_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        other => format_scalar(other),
    }
}
