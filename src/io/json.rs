use serde::Serialize;

/// Serializes any of the core's result types to pretty-printed JSON,
/// usable for both `build` and `analyze` output.
pub fn emit<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
