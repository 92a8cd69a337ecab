use thiserror::Error;

#[derive(Error, Debug)]
pub enum TordError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl TordError {
    /// Not-found error for a record kind, e.g. `TordError::not_found("truth", id)`.
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        TordError::NotFound {
            kind,
            id: id.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TordError>;
