#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
