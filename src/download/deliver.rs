//! Fetch-and-deliver workflow.
//!
//! One invocation per chat command: pick a random source, download it, send
//! the file back, and always clean up the local artifact and the status
//! message afterwards. Failed attempts retry up to a fixed bound with uniform
//! reselection; already-failed sources are deliberately not excluded.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rand::Rng;

use crate::core::config;
use crate::core::error::AppError;
use crate::download::fetcher::MediaFetch;

/// Opaque handle to a message the transport can later delete.
pub type MessageRef = i32;

/// The reply/send-media surface of the chat platform.
///
/// The production implementation wraps a teloxide `Bot` plus the requesting
/// `ChatId`; tests drive the workflow through an in-memory recorder instead.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Sends a plain text message and returns a handle for later deletion.
    async fn send_text(&self, text: &str) -> Result<MessageRef, AppError>;

    /// Sends the downloaded video with a caption linking back to `source_url`.
    async fn send_video(&self, path: &Path, source_url: &str) -> Result<(), AppError>;

    /// Deletes a previously sent message. Deleting an already-removed message
    /// may fail; callers treat that as best-effort.
    async fn delete_message(&self, message: MessageRef) -> Result<(), AppError>;
}

/// Chooses the next source to try. Selection may repeat across attempts.
pub trait SourcePicker: Send {
    /// Picks one entry from a non-empty slice.
    fn pick<'a>(&mut self, sources: &'a [String]) -> &'a str;
}

/// Uniform random selection, the production picker.
pub struct UniformPicker;

impl SourcePicker for UniformPicker {
    fn pick<'a>(&mut self, sources: &'a [String]) -> &'a str {
        let idx = rand::rng().random_range(0..sources.len());
        &sources[idx]
    }
}

/// Terminal state of one workflow invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The video from `source` was sent to the chat
    Sent { source: String },
    /// The source list was empty; the user was told and nothing was fetched
    NoSources,
    /// All attempts failed; the user got a self-deleting failure notice
    Exhausted,
}

/// HTML caption linking the delivered video back to its source.
pub fn source_caption(source_url: &str) -> String {
    format!("<a href=\"{}\">Source</a>", source_url)
}

/// Runs one fetch-and-deliver invocation.
///
/// Algorithm: report "no sources" and stop if the list is empty; otherwise
/// make up to [`config::retry::MAX_ATTEMPTS`] attempts, posting a status
/// message on the first attempt only. On success the artifact is sent with a
/// source-link caption; on exhaustion a failure notice is posted and removed
/// after a short fixed delay. The status message and any artifact left on
/// disk are always cleaned up best-effort before returning.
pub async fn deliver_random_video<T, F, P>(
    transport: &T,
    fetcher: &F,
    picker: &mut P,
    sources: &[String],
) -> DeliveryOutcome
where
    T: ChatTransport,
    F: MediaFetch,
    P: SourcePicker,
{
    if sources.is_empty() {
        log::warn!("No sources configured, nothing to fetch");
        if let Err(e) = transport
            .send_text("No sources found in sources.json or environment variables.")
            .await
        {
            log::error!("Failed to report empty source list: {}", e);
        }
        return DeliveryOutcome::NoSources;
    }

    // Status message state lives outside the retry loop so cleanup is safe
    // even when the first attempt never manages to post it.
    let mut status_message: Option<MessageRef> = None;
    let mut outcome = DeliveryOutcome::Exhausted;

    for attempt in 1..=config::retry::MAX_ATTEMPTS {
        let source = picker.pick(sources).to_string();

        if attempt == 1 {
            let status_text = format!(
                "Fetching motivation... 🏋️\nSource: {}\n\nThis might take a moment.",
                source
            );
            match transport.send_text(&status_text).await {
                Ok(message) => status_message = Some(message),
                Err(e) => log::warn!("Failed to post status message: {}", e),
            }
        }

        let artifact = match fetcher.download(&source).await {
            Ok(path) => path,
            Err(e) => {
                log::error!(
                    "Attempt {}/{} failed for {}: {}",
                    attempt,
                    config::retry::MAX_ATTEMPTS,
                    source,
                    e
                );
                continue;
            }
        };

        match transport.send_video(&artifact, &source).await {
            Ok(()) => {
                remove_artifact(&artifact);
                outcome = DeliveryOutcome::Sent { source };
                break;
            }
            Err(e) => {
                // Delivery failures retry exactly like fetch failures
                log::error!(
                    "Attempt {}/{} failed to deliver {}: {}",
                    attempt,
                    config::retry::MAX_ATTEMPTS,
                    source,
                    e
                );
                remove_artifact(&artifact);
                continue;
            }
        }
    }

    if outcome == DeliveryOutcome::Exhausted {
        log::error!(
            "Could not fetch a video after {} attempts",
            config::retry::MAX_ATTEMPTS
        );
        match transport
            .send_text(&format!(
                "Could not fetch a video after {} attempts. 😔",
                config::retry::MAX_ATTEMPTS
            ))
            .await
        {
            Ok(failure_notice) => {
                // The failure notice is ephemeral: it removes itself shortly
                tokio::time::sleep(config::progress::failure_clear_delay()).await;
                if let Err(e) = transport.delete_message(failure_notice).await {
                    log::debug!("Failed to delete failure notice (already gone?): {}", e);
                }
            }
            Err(e) => log::error!("Failed to send failure notice: {}", e),
        }
    }

    if let Some(message) = status_message {
        if let Err(e) = transport.delete_message(message).await {
            log::debug!("Failed to delete status message (already gone?): {}", e);
        }
    }

    outcome
}

/// Best-effort artifact removal. Missing files are fine; real deletion
/// failures are logged and swallowed, never surfaced to the user.
fn remove_artifact(path: &PathBuf) {
    if !path.exists() {
        return;
    }
    if let Err(e) = fs::remove_file(path) {
        log::warn!("Failed to delete artifact {}: {}", path.display(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_caption_links_url() {
        assert_eq!(
            source_caption("https://example.com/v"),
            "<a href=\"https://example.com/v\">Source</a>"
        );
    }

    #[test]
    fn test_uniform_picker_stays_in_bounds() {
        let sources = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let mut picker = UniformPicker;
        for _ in 0..100 {
            let picked = picker.pick(&sources);
            assert!(sources.iter().any(|s| s == picked));
        }
    }

    #[test]
    fn test_remove_artifact_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("video.mp4");
        std::fs::write(&path, b"data").unwrap();

        remove_artifact(&path);
        assert!(!path.exists());
        // Second removal of a missing file must be a no-op
        remove_artifact(&path);
    }
}
