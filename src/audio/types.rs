//! Audio-related small types and handles.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::library::Track;

#[derive(Debug)]
pub enum AudioCmd {
    /// Start playing the given track from the beginning.
    Play(Track),
    /// Toggle pause/resume.
    TogglePause,
    /// Stop playback immediately.
    Stop,
    /// Quit the audio thread.
    Quit,
}

/// Runtime playback information shared with the UI.
#[derive(Debug, Clone)]
pub struct PlaybackInfo {
    /// The track last handed to the player (if any).
    pub track: Option<Track>,
    /// Elapsed playback time for the current track.
    pub elapsed: Duration,
    /// Whether playback is currently active.
    pub playing: bool,
    /// Set once the current track has run to its end; cleared by the next
    /// `Play`. The runtime reads this to advance the playlist cursor.
    pub finished: bool,
}

impl Default for PlaybackInfo {
    fn default() -> Self {
        Self {
            track: None,
            elapsed: Duration::ZERO,
            playing: false,
            finished: false,
        }
    }
}

impl PlaybackInfo {
    /// Elapsed position as a percentage of the track duration, clamped to
    /// `0..=100`. Unknown or zero-length tracks report 0.
    pub fn percent(&self) -> u16 {
        match &self.track {
            Some(t) if t.duration > 0.0 => {
                ((self.elapsed.as_secs_f64() / t.duration) * 100.0).min(100.0) as u16
            }
            _ => 0,
        }
    }
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;
