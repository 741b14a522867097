/// Result alias that carries the custom [`TapeConvError`] type.
pub type Result<T> = std::result::Result<T, TapeConvError>;

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum TapeConvError {
    /// A required input document is missing or unreadable.
    #[error("failed to read `{path}`: {source}")]
    InputRead {
        path: String,
        source: std::io::Error,
    },
    /// An input document is not valid JSON, even after sanitisation.
    #[error("failed to parse `{path}`: {source}")]
    InputParse {
        path: String,
        source: serde_json::Error,
    },
    /// The input data cannot support the requested computation.
    #[error("{0}")]
    InvalidInput(&'static str),
    /// Wrapper around standard IO errors raised while writing outputs.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Wrapper around serialization failures on the output side.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
