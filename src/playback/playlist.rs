use serde::Deserialize;
use std::path::Path;

use crate::config::{self, ConfigError};

pub const PLAYLIST_FILE: &str = "playlist.json";

/// Ordered list of video file names plus a loop flag, read once from
/// `playlist.json` inside the videos directory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Playlist {
    #[serde(default)]
    pub videos: Vec<String>,
    #[serde(default, rename = "loop")]
    pub looped: bool,
}

impl Playlist {
    /// Load the playlist document if one exists. `Ok(None)` means no playlist;
    /// a malformed document surfaces as an error so the caller can log it and
    /// fall back to random selection.
    pub fn load(videos_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let path = videos_dir.join(PLAYLIST_FILE);
        match config::load_document(&path) {
            Ok(playlist) => Ok(Some(playlist)),
            Err(ConfigError::Missing(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
