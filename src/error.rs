use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArraySetError {
    #[error("element not found in set")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, ArraySetError>;
