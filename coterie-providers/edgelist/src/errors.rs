use thiserror::Error;

#[derive(Debug, Error)]
pub enum EdgeListError {
    #[error("no header declaring vertex and edge counts was found")]
    MissingHeader,
    #[error("declared vertex count {declared} is not positive")]
    InvalidVertexCount { declared: i64 },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
