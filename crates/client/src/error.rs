/// A payload was rejected locally; nothing was sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("batch entry {index}: missing required field `{field}`")]
    BatchEntry { index: usize, field: &'static str },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField(field) => field,
            ValidationError::BatchEntry { field, .. } => field,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
