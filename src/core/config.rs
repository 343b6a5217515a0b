use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Configuration constants for the bot
/// Cached yt-dlp binary path
/// Read once at startup from YTDL_BIN environment variable or defaults to "yt-dlp"
pub static YTDL_BIN: Lazy<String> = Lazy::new(|| env::var("YTDL_BIN").unwrap_or_else(|_| "yt-dlp".to_string()));

/// Path to a cookies file forwarded to yt-dlp when it exists
/// Read from YTDL_COOKIES_FILE environment variable
/// Example: youtube_cookies.txt
pub static YTDL_COOKIES_FILE: Lazy<Option<String>> = Lazy::new(|| env::var("YTDL_COOKIES_FILE").ok());

/// Download folder for temporary video artifacts
/// Read from DOWNLOAD_FOLDER environment variable
/// Supports tilde (~) expansion; created on demand, with a one-time fallback
/// to the current directory when creation fails (see `YtdlpFetcher::new`)
pub static DOWNLOAD_FOLDER: Lazy<String> =
    Lazy::new(|| env::var("DOWNLOAD_FOLDER").unwrap_or_else(|_| "/tmp/motivagion_downloads".to_string()));

/// Path to the JSON file holding the source URL list
/// Read from SOURCES_FILE environment variable
/// Default: sources.json (next to the working directory)
pub static SOURCES_FILE: Lazy<String> =
    Lazy::new(|| env::var("SOURCES_FILE").unwrap_or_else(|_| "sources.json".to_string()));

/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// Webhook base URL for Telegram updates (long polling is used when unset)
/// Read from WEBHOOK_URL environment variable
pub static WEBHOOK_URL: Lazy<Option<String>> = Lazy::new(|| env::var("WEBHOOK_URL").ok());

/// Port the webhook listener binds to
/// Read from WEBHOOK_PORT environment variable, default 8443
pub static WEBHOOK_PORT: Lazy<u16> = Lazy::new(|| {
    env::var("WEBHOOK_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8443)
});

/// Port for the optional liveness HTTP endpoint (disabled when unset)
/// Read from HEALTH_PORT environment variable
pub static HEALTH_PORT: Lazy<Option<u16>> = Lazy::new(|| env::var("HEALTH_PORT").ok().and_then(|s| s.parse().ok()));

/// Browser user agent passed to yt-dlp to avoid some blocks
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Retry configuration
pub mod retry {
    /// Maximum number of fetch-and-deliver attempts per invocation
    pub const MAX_ATTEMPTS: u32 = 3;
}

/// Progress / status message configuration
pub mod progress {
    use super::Duration;

    /// Delay before the failure notice deletes itself (in seconds)
    pub const FAILURE_CLEAR_DELAY_SECS: u64 = 5;

    /// Failure notice clear delay duration
    pub fn failure_clear_delay() -> Duration {
        Duration::from_secs(FAILURE_CLEAR_DELAY_SECS)
    }
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for Telegram API requests (in seconds)
    /// Generous because sending a full video upload goes through this client
    pub const REQUEST_TIMEOUT_SECS: u64 = 300;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}
