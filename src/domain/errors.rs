use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Stored data is corrupt: {0}")]
    CorruptStorage(String),
    #[error("Internal error: {0}")]
    Internal(String),
}
