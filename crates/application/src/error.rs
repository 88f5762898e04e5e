use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("io error: {0}")]
    Io(String),
    #[error("decode error: {0}")]
    Decode(String),
}
