//! Core utilities, configuration, and common functionality

pub mod config;
pub mod error;
pub mod sources;
pub mod web_server;

// Re-exports for convenience
pub use error::AppError;
pub use sources::get_sources;
