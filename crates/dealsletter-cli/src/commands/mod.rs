pub mod amortization;
pub mod analysis;
pub mod financing;

use serde_json::Value;

/// Parse a kebab-case enum value (strategy, financing type) through its
/// serde representation.
pub fn parse_kebab<T: serde::de::DeserializeOwned>(
    kind: &str,
    raw: &str,
) -> Result<T, Box<dyn std::error::Error>> {
    serde_json::from_value(Value::String(raw.to_string()))
        .map_err(|_| format!("Unknown {kind}: '{raw}'").into())
}
