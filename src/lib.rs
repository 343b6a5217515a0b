//! Motivagion - minimalist Telegram bot that sends a random motivation video
//!
//! The bot keeps a static list of source URLs, and on `/motivate` picks one at
//! random, downloads the video with yt-dlp and relays the file back to the
//! requesting chat.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, source registry, liveness endpoint
//! - `download`: yt-dlp fetcher and the fetch-and-deliver workflow
//! - `telegram`: bot commands, transport and dispatcher schema

pub mod core;
pub mod download;
pub mod telegram;

// Re-export commonly used types for convenience
pub use core::{config, error::AppError};
pub use download::{deliver_random_video, DeliveryOutcome, MediaFetch, YtdlpFetcher};
pub use telegram::{create_bot, schema, Command, HandlerDeps};
