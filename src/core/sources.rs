//! Source registry
//!
//! Loads the static list of candidate video URLs from a JSON file. The
//! registry never fails: a missing or malformed file yields an empty list,
//! which the delivery workflow reports to the user as "no sources".

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::config;

/// The sources file is a bare JSON array of URL strings.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct SourceFile(Vec<String>);

/// Returns the configured source URLs, or an empty list if the sources file
/// is missing or malformed. Re-reads the file on every call so the list can
/// be edited without restarting the bot.
pub fn get_sources() -> Vec<String> {
    load_sources_from(Path::new(&*config::SOURCES_FILE))
}

fn load_sources_from(path: &Path) -> Vec<String> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("Failed to read sources file {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<SourceFile>(&raw) {
        Ok(SourceFile(urls)) => urls,
        Err(e) => {
            log::warn!("Malformed sources file {}: {}", path.display(), e);
            Vec::new()
        }
    }
}
