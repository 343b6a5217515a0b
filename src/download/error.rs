use thiserror::Error;

/// Structured error type for the fetch step.
///
/// Everything the remote side can do wrong (network failure, extraction
/// failure, unsupported URL, blocked access) surfaces as a non-zero yt-dlp
/// exit and lands in `YtDlp`. Retries are the caller's responsibility.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The downloader binary could not be started at all
    #[error("Failed to start downloader '{bin}': {message}")]
    Spawn { bin: String, message: String },

    /// yt-dlp ran but exited with a failure
    #[error("yt-dlp failed: {0}")]
    YtDlp(String),

    /// yt-dlp reported success but the artifact is not on disk
    #[error("Downloaded file not found: {0}")]
    FileNotFound(String),
}
