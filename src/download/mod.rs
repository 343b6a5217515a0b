//! Download management: yt-dlp fetcher and the fetch-and-deliver workflow

pub mod deliver;
pub mod error;
pub mod fetcher;

// Re-exports for convenience
pub use deliver::{deliver_random_video, ChatTransport, DeliveryOutcome, MessageRef, SourcePicker, UniformPicker};
pub use error::FetchError;
pub use fetcher::{MediaFetch, YtdlpFetcher};
