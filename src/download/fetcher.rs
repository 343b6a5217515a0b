//! Media fetcher: a thin wrapper over yt-dlp.
//!
//! Downloads one video into the configured folder, naming the file
//! deterministically from the source metadata (`%(id)s.%(ext)s`) and
//! overwriting any previous file of the same name. No retry logic lives
//! here; the delivery workflow owns the retry policy.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command as TokioCommand;

use crate::core::config;
use crate::download::error::FetchError;

/// Abstraction over the download step so the delivery workflow can be
/// exercised without a network or a yt-dlp binary.
#[async_trait]
pub trait MediaFetch: Send + Sync {
    /// Downloads the video behind `url` and returns the local artifact path.
    async fn download(&self, url: &str) -> Result<PathBuf, FetchError>;
}

/// Production fetcher shelling out to yt-dlp.
///
/// The download directory is resolved once at construction and threaded
/// through every call, so concurrent invocations never observe a half-updated
/// global setting.
pub struct YtdlpFetcher {
    ytdl_bin: String,
    download_dir: PathBuf,
}

impl YtdlpFetcher {
    /// Creates a fetcher writing into `download_dir` (tilde-expanded).
    ///
    /// The directory is created on demand; if creation fails the fetcher
    /// falls back to the current directory, once, here.
    pub fn new(ytdl_bin: &str, download_dir: &str) -> Self {
        let expanded = shellexpand::tilde(download_dir).into_owned();
        let dir = match std::fs::create_dir_all(&expanded) {
            Ok(()) => PathBuf::from(expanded),
            Err(e) => {
                log::warn!("Failed to create {}, using current dir: {}", expanded, e);
                PathBuf::from(".")
            }
        };

        Self {
            ytdl_bin: ytdl_bin.to_string(),
            download_dir: dir,
        }
    }

    /// Creates a fetcher from the YTDL_BIN / DOWNLOAD_FOLDER environment.
    pub fn from_env() -> Self {
        Self::new(&config::YTDL_BIN, &config::DOWNLOAD_FOLDER)
    }

    /// The directory artifacts are written into.
    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    fn output_template(&self) -> String {
        format!("{}/%(id)s.%(ext)s", self.download_dir.display())
    }
}

#[async_trait]
impl MediaFetch for YtdlpFetcher {
    async fn download(&self, url: &str) -> Result<PathBuf, FetchError> {
        let output_template = self.output_template();

        let mut args: Vec<&str> = vec![
            "-o",
            &output_template,
            "--format",
            "best[ext=mp4]/best",
            "--no-playlist",
            "--force-overwrites",
            "--no-check-certificate",
            "--user-agent",
            config::USER_AGENT,
            "--quiet",
            "--no-warnings",
            // Print the final artifact path on stdout instead of guessing it
            "--print",
            "after_move:filepath",
            "--no-simulate",
        ];

        // Forward cookies when a file is configured and actually exists
        if let Some(ref cookies_file) = *config::YTDL_COOKIES_FILE {
            if !cookies_file.is_empty() && Path::new(cookies_file).exists() {
                args.extend_from_slice(&["--cookies", cookies_file]);
            }
        }

        args.push(url);

        log::debug!("yt-dlp command: {} {}", self.ytdl_bin, args.join(" "));

        let output = TokioCommand::new(&self.ytdl_bin)
            .args(&args)
            .output()
            .await
            .map_err(|e| FetchError::Spawn {
                bin: self.ytdl_bin.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let first_line = stderr.lines().next().unwrap_or("no stderr output");
            return Err(FetchError::YtDlp(format!(
                "exited with status {} for {}: {}",
                output.status, url, first_line
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let path = stdout
            .lines()
            .rev()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| FetchError::FileNotFound(format!("yt-dlp printed no file path for {}", url)))?;

        if !path.exists() {
            return Err(FetchError::FileNotFound(path.display().to_string()));
        }

        Ok(path)
    }
}
