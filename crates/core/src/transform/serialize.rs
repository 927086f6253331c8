use serde_json::Value;

use super::TransformError;

pub trait Serializer: Send + Sync {
    fn serialize(&self, data: &Value) -> Result<String, TransformError>;
}

/// Compact JSON text, with no HTML-safe escaping of `<`, `>` or `/`
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonSerializer;

impl Serializer for JsonSerializer {
    fn serialize(&self, data: &Value) -> Result<String, TransformError> {
        serde_json::to_string(data).map_err(|e| TransformError::Serialize(e.to_string()))
    }
}
