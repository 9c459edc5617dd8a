use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to load catalog '{path}': {reason}")]
    CatalogLoad { path: String, reason: String },
    #[error("catalog '{path}' contains no products")]
    EmptyCatalog { path: String },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type GenResult<T> = Result<T, GenError>;
