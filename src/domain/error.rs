use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid filter category: {0}")]
    InvalidCategory(String),

    #[error("Seed error: {0}")]
    Seed(String),
}

