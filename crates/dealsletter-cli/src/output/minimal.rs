use serde_json::Value;

/// Print just the key answer value from the output.
///
/// Heuristic: look for well-known result fields in order of priority,
/// then fall back to the first field in the result object.
pub fn print_minimal(value: &Value) {
    // Unwrap the computation envelope if present
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    // Priority list of key output fields
    let priority_keys = [
        "score",
        "monthly_cash_flow",
        "total_roi_5yr_percent",
        "capital_recovery_percent",
        "total_closing_costs",
        "monthly_payment",
        "is_valid",
    ];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = find_key(map, key) {
                if !val.is_null() {
                    println!("{}", format_minimal(&val));
                    return;
                }
            }
        }

        // Fall back to first field
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(result_obj));
}

/// BRRRR nests its headline numbers one level down (phase records), so
/// search direct children too.
fn find_key(map: &serde_json::Map<String, Value>, key: &str) -> Option<Value> {
    if let Some(v) = map.get(key) {
        return Some(v.clone());
    }
    for child in map.values() {
        if let Value::Object(child_map) = child {
            if let Some(v) = child_map.get(key) {
                return Some(v.clone());
            }
        }
    }
    None
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
