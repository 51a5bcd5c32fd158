use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("unknown scale: {0}")]
    UnknownScale(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("unknown item '{item_id}' for scale '{scale_id}'")]
    UnknownItem { scale_id: String, item_id: String },
}
