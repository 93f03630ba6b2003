use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("farmer profile validation failed: {0}")]
    InvalidProfile(String),
}
