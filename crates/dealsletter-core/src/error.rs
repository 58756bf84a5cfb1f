use thiserror::Error;

#[derive(Debug, Error)]
pub enum DealModelError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for DealModelError {
    fn from(e: serde_json::Error) -> Self {
        DealModelError::SerializationError(e.to_string())
    }
}
