use serde_json::{Map, Value};

/// Checks that `payload` decodes as a JSON object. The decoded map is dropped.
pub fn probe_json(payload: &[u8]) -> Result<(), serde_json::Error> {
    serde_json::from_slice::<Map<String, Value>>(payload)?;
    Ok(())
}
