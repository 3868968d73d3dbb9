use thiserror::Error;

/// Errors surfaced by the engine before any computation takes place
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("catalog unavailable: {0}")]
    Catalog(#[from] CatalogError),
}

/// Failures of a catalog provider
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;

pub(crate) fn invalid<T>(msg: impl Into<String>) -> EngineResult<T> {
    Err(EngineError::InvalidArgument(msg.into()))
}
