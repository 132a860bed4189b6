//! Audio playback: a dedicated thread driving `rodio`.
//!
//! The rest of the app talks to the thread through [`AudioPlayer`] commands
//! and reads progress back out of the shared [`PlaybackInfo`]. Track ordering
//! is not this module's business; it plays exactly one track per `Play`
//! command and flags `finished` when that track runs out.

mod player;
mod sink;
mod thread;
mod types;

pub use player::AudioPlayer;
pub use types::{AudioCmd, PlaybackHandle, PlaybackInfo};

#[cfg(test)]
mod tests;
