use serde_json::Value;
use std::io::{self, Read};

/// Read a piped JSON document from stdin.
///
/// Returns `None` when stdin is a terminal or the pipe carried only
/// whitespace, so callers can fall back to flags.
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    log::info!("read {} bytes of JSON from stdin", trimmed.len());
    let value: Value =
        serde_json::from_str(trimmed).map_err(|e| format!("Failed to parse stdin: {}", e))?;
    Ok(Some(value))
}
