use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown vital sign: {0}")]
    UnknownVitalSign(String),

    #[error("unknown fluid balance field: {0}")]
    UnknownFluidField(String),
}
