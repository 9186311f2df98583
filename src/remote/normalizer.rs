use serde_json::Value;

use super::types::NormalizedResult;
use crate::simulation::types::EMPTY_FRAME;

// Accepted source field names per logical field, probed in order. The external
// schema is not contractually fixed; these cover every shape observed so far
// (the Java service reports `misses`/`pageTable`, older builds `fallos`/`tabla`).
const TABLE_FIELDS: [&str; 5] = ["tabla", "table", "pageTable", "frames", "matrix"];
const TRACE_FIELDS: [&str; 2] = ["pasos", "steps"];
const TRACE_DESCRIPTION_FIELDS: [&str; 3] = ["evento", "event", "estado"];
const FAULT_FIELDS: [&str; 4] = ["fallos", "faults", "misses", "pageFaults"];

/// Maps an arbitrary external response into the canonical result shape.
///
/// Never fails: a missing table yields an empty one, a missing trace is
/// synthesized from the table when possible, and a missing fault count is
/// derived by counting fault entries in the trace. `referencias` must already
/// be whitespace-free.
pub fn normalize(data: &Value, referencias: &str, marcos: usize) -> NormalizedResult {
    let tabla = extract_table(data);

    let pasos = match extract_trace(data) {
        Some(entries) => entries,
        None if !tabla.is_empty() => synthesize_trace(&tabla, referencias),
        None => Vec::new(),
    };

    let fallos = extract_fault_count(data).unwrap_or_else(|| {
        pasos.iter().filter(|p| p.starts_with("FALLO")).count() as u32
    });

    NormalizedResult {
        referencias: referencias.to_string(),
        marcos,
        fallos,
        tabla,
        pasos,
    }
}

/// First table-like field that holds an array of rows, converted to frame
/// snapshots. Unreadable cells degrade to the empty sentinel.
fn extract_table(data: &Value) -> Vec<Vec<i32>> {
    for field in TABLE_FIELDS {
        if let Some(rows) = data.get(field).and_then(Value::as_array) {
            return rows
                .iter()
                .map(|row| {
                    row.as_array()
                        .map(|cells| cells.iter().map(value_to_page).collect())
                        .unwrap_or_default()
                })
                .collect();
        }
    }
    Vec::new()
}

/// First trace field that actually holds a sequence. The Java service reports
/// `steps` as an integer count; anything that is not an array is ignored.
fn extract_trace(data: &Value) -> Option<Vec<String>> {
    for field in TRACE_FIELDS {
        if let Some(entries) = data.get(field).and_then(Value::as_array) {
            return Some(entries.iter().map(describe_entry).collect());
        }
    }
    None
}

/// Renders one trace element as a descriptive string: plain strings pass
/// through, structured events surrender their description field, and anything
/// else is serialized whole.
fn describe_entry(entry: &Value) -> String {
    if let Some(text) = entry.as_str() {
        return text.to_string();
    }
    for field in TRACE_DESCRIPTION_FIELDS {
        if let Some(text) = entry.get(field).and_then(Value::as_str) {
            return text.to_string();
        }
    }
    serde_json::to_string(entry).unwrap_or_default()
}

/// Reconstructs a trace from the table alone: the i-th reference is a hit
/// exactly when its page appears in the i-th snapshot row.
fn synthesize_trace(tabla: &[Vec<i32>], referencias: &str) -> Vec<String> {
    referencias
        .chars()
        .enumerate()
        .map(|(idx, digit)| {
            let page = digit
                .to_digit(10)
                .map(|d| d as i32)
                .unwrap_or(EMPTY_FRAME);
            let hit = tabla
                .get(idx)
                .map(|row| row.contains(&page))
                .unwrap_or(false);
            if hit {
                format!("HIT {}", digit)
            } else {
                format!("FALLO {}", digit)
            }
        })
        .collect()
}

fn extract_fault_count(data: &Value) -> Option<u32> {
    for field in FAULT_FIELDS {
        if let Some(count) = data.get(field).and_then(Value::as_u64) {
            return Some(count as u32);
        }
    }
    None
}

/// Table cells arrive as numbers or digit strings depending on the source.
fn value_to_page(value: &Value) -> i32 {
    match value {
        Value::Number(n) => n.as_i64().map(|v| v as i32).unwrap_or(EMPTY_FRAME),
        Value::String(s) => s.trim().parse().unwrap_or(EMPTY_FRAME),
        _ => EMPTY_FRAME,
    }
}
