use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One playable item.
///
/// Tracks are plain values: equality compares all three fields, and the serde
/// derives produce the exact three-field record the playlist store persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    /// Length in seconds.
    pub duration: f64,
    pub path: PathBuf,
}

impl Track {
    /// Build a track, clamping a negative (or NaN) duration to zero.
    pub fn new(title: impl Into<String>, duration: f64, path: impl Into<PathBuf>) -> Self {
        Self {
            title: title.into(),
            duration: if duration.is_finite() { duration.max(0.0) } else { 0.0 },
            path: path.into(),
        }
    }
}
