use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("corrupt database: {0}")]
    Corrupt(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: u64) -> Self {
        Self::NotFound(format!("{} {} not found", entity, id))
    }
}
