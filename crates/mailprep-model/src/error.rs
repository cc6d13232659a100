use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid {option} value '{value}'")]
    InvalidOption { option: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
