//! In-memory test doubles for the delivery workflow.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tempfile::TempDir;

use motivagion::core::error::AppError;
use motivagion::download::deliver::{ChatTransport, MessageRef, SourcePicker};
use motivagion::download::error::FetchError;
use motivagion::download::fetcher::MediaFetch;

/// Records every interaction with the chat instead of talking to Telegram.
pub struct MockTransport {
    next_id: AtomicI32,
    /// (message id, text) of every text message sent
    pub texts: Mutex<Vec<(MessageRef, String)>>,
    /// (artifact path, source url) of every video sent
    pub videos: Mutex<Vec<(PathBuf, String)>>,
    /// Ids of deleted messages
    pub deleted: Mutex<Vec<MessageRef>>,
    video_failures_left: AtomicUsize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI32::new(1),
            texts: Mutex::new(Vec::new()),
            videos: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
            video_failures_left: AtomicUsize::new(0),
        }
    }

    /// Makes the next `n` send_video calls fail.
    pub fn fail_next_videos(&self, n: usize) {
        self.video_failures_left.store(n, Ordering::SeqCst);
    }

    pub fn sent_texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().iter().map(|(_, t)| t.clone()).collect()
    }
}

#[async_trait]
impl ChatTransport for MockTransport {
    async fn send_text(&self, text: &str) -> Result<MessageRef, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.texts.lock().unwrap().push((id, text.to_string()));
        Ok(id)
    }

    async fn send_video(&self, path: &Path, source_url: &str) -> Result<(), AppError> {
        if self
            .video_failures_left
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return Err(AppError::Delivery("simulated send failure".to_string()));
        }
        self.videos
            .lock()
            .unwrap()
            .push((path.to_path_buf(), source_url.to_string()));
        Ok(())
    }

    async fn delete_message(&self, message: MessageRef) -> Result<(), AppError> {
        self.deleted.lock().unwrap().push(message);
        Ok(())
    }
}

/// Scripted fetcher: per-URL success/failure, writing real files so the
/// workflow's cleanup is observable on disk.
pub struct MockFetcher {
    dir: TempDir,
    outcomes: HashMap<String, bool>,
    counter: AtomicUsize,
    pub calls: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new(outcomes: &[(&str, bool)]) -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
            outcomes: outcomes.iter().map(|(url, ok)| (url.to_string(), *ok)).collect(),
            counter: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Paths of artifacts still present in the download directory.
    pub fn remaining_artifacts(&self) -> Vec<PathBuf> {
        std::fs::read_dir(self.dir.path())
            .expect("read_dir")
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .collect()
    }
}

#[async_trait]
impl MediaFetch for MockFetcher {
    async fn download(&self, url: &str) -> Result<PathBuf, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());

        match self.outcomes.get(url) {
            Some(true) => {
                let n = self.counter.fetch_add(1, Ordering::SeqCst);
                let path = self.dir.path().join(format!("video_{}.mp4", n));
                std::fs::write(&path, b"fake video bytes").expect("write artifact");
                Ok(path)
            }
            _ => Err(FetchError::YtDlp(format!("simulated extraction failure for {}", url))),
        }
    }
}

/// Deterministic picker following a scripted index sequence.
pub struct ScriptedPicker {
    script: Vec<usize>,
    pos: usize,
}

impl ScriptedPicker {
    pub fn new(script: &[usize]) -> Self {
        Self {
            script: script.to_vec(),
            pos: 0,
        }
    }
}

impl SourcePicker for ScriptedPicker {
    fn pick<'a>(&mut self, sources: &'a [String]) -> &'a str {
        let idx = self.script[self.pos.min(self.script.len() - 1)];
        self.pos += 1;
        &sources[idx % sources.len()]
    }
}
