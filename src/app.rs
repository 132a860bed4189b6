//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the scanned library, the
//! named playlists, pane focus and playback state.

mod model;

pub use model::*;
