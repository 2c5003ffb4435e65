use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid race date '{value}'")]
    InvalidDate { value: String },
    #[error("invalid {field} '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
