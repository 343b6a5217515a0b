use thiserror::Error;

use crate::download::error::FetchError;

/// Centralized error types for the application
///
/// All errors in the application are converted to this enum for consistent
/// error handling. Uses `thiserror` for automatic conversion and display
/// formatting.
#[derive(Error, Debug)]
pub enum AppError {
    /// Telegram API errors
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// Download/yt-dlp errors
    #[error("Download error: {0}")]
    Fetch(#[from] FetchError),

    /// Sending the downloaded artifact failed
    #[error("Delivery error: {0}")]
    Delivery(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

/// Helper conversion so ad-hoc failures can use `?` with a plain message
impl From<String> for AppError {
    fn from(err: String) -> Self {
        AppError::Delivery(err)
    }
}

impl From<&str> for AppError {
    fn from(err: &str) -> Self {
        AppError::Delivery(err.to_string())
    }
}
