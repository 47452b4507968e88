use serde_json::Value;

use super::format_scalar;

/// Keys checked in order when picking the single value to print.
const PRIORITY_KEYS: [&str; 2] = ["display", "payment"];

/// Print just the rendered payment (e.g. `$103.64`).
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        for key in PRIORITY_KEYS {
            if let Some(val) = map.get(key) {
                println!("{}", format_scalar(val));
                return;
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_scalar(val));
            return;
        }
    }

    println!("{}", format_scalar(result_obj));
}
