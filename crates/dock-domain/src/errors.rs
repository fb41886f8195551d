// errors.rs
use thiserror::Error;

/// Error personalizado del dominio de docking
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Error de entrada: {0}")]
    Input(String),

    #[error("Error de validación: {0}")]
    Validation(String),
}
