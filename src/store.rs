//! JSON persistence for named playlists.
//!
//! Each playlist lives in its own file, `playlist_<name>.json`, holding an
//! ordered array of `{title, duration, path}` records. Whitespace in the
//! playlist name maps to `_` in the file name and back again on load.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::library::Track;
use crate::playlist::Playlist;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("playlist store I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed playlist file: {0}")]
    Json(#[from] serde_json::Error),
}

const FILE_PREFIX: &str = "playlist_";
const FILE_SUFFIX: &str = ".json";

/// Disk-backed store of named playlists, one JSON file per playlist.
pub struct PlaylistStore {
    folder: PathBuf,
}

impl PlaylistStore {
    /// Open a store rooted at `folder`, creating the directory when missing.
    pub fn open(folder: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let folder = folder.into();
        fs::create_dir_all(&folder)?;
        Ok(Self { folder })
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// File backing the playlist called `name`.
    fn file_for(&self, name: &str) -> PathBuf {
        let safe: String = name
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect();
        self.folder.join(format!("{FILE_PREFIX}{safe}{FILE_SUFFIX}"))
    }

    /// Write `playlist` under `name`, replacing any previous contents.
    pub fn save(&self, name: &str, playlist: &Playlist) -> Result<(), StoreError> {
        let tracks = playlist.all_songs();
        let json = serde_json::to_string_pretty(&tracks)?;
        fs::write(self.file_for(name), json)?;
        Ok(())
    }

    /// Delete the file backing `name`. A missing file is fine.
    pub fn delete(&self, name: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.file_for(name)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Load every playlist in the folder, sorted by name.
    ///
    /// Playlists are rebuilt by adding tracks in file order, so the reloaded
    /// sequence equals the one that was saved.
    pub fn load_all(&self) -> Result<Vec<(String, Playlist)>, StoreError> {
        let mut playlists: Vec<(String, Playlist)> = Vec::new();

        for entry in fs::read_dir(&self.folder)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            let Some(middle) = file_name
                .strip_prefix(FILE_PREFIX)
                .and_then(|s| s.strip_suffix(FILE_SUFFIX))
            else {
                continue;
            };

            let name = middle.replace('_', " ");
            let tracks: Vec<Track> = serde_json::from_str(&fs::read_to_string(entry.path())?)?;

            let mut playlist = Playlist::new();
            for track in tracks {
                playlist.add_song(track);
            }
            playlists.push((name, playlist));
        }

        playlists.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(playlists)
    }
}
