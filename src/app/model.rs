//! Application model types: `App`, `Pane` and `PlaybackState`.
//!
//! The `App` struct is pure state: every mutation is a method, and no method
//! touches the terminal, the audio thread or the disk. The runtime reads the
//! returned values and drives those collaborators itself.

use crate::audio::PlaybackHandle;
use crate::library::Track;
use crate::playlist::Playlist;

/// The playback state of the application.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Which column currently has keyboard focus.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pane {
    Playlists,
    Tracks,
    Library,
}

/// A playlist together with its user-visible name.
pub struct NamedPlaylist {
    pub name: String,
    pub playlist: Playlist,
}

/// The main application model.
pub struct App {
    pub library: Vec<Track>,
    pub playlists: Vec<NamedPlaylist>,

    pub pane: Pane,
    pub selected_playlist: usize,
    pub selected_track: usize,
    pub selected_library: usize,

    pub playback: PlaybackState,
    pub playback_handle: Option<PlaybackHandle>,
    /// Playlist whose cursor drives playback; independent of the viewed one.
    pub playing_playlist: Option<usize>,

    /// In-progress name for a playlist being created; `Some` while the naming
    /// popup is open.
    pub name_input: Option<String>,

    pub current_dir: Option<String>,
}

impl App {
    /// Create a new `App` over the scanned `library`, with no playlists yet.
    pub fn new(library: Vec<Track>) -> Self {
        Self {
            library,
            playlists: Vec::new(),
            pane: Pane::Playlists,
            selected_playlist: 0,
            selected_track: 0,
            selected_library: 0,
            playback: PlaybackState::Stopped,
            playback_handle: None,
            playing_playlist: None,
            name_input: None,
            current_dir: None,
        }
    }

    /// Attach a `PlaybackHandle` used to observe playback progress.
    pub fn set_playback_handle(&mut self, h: PlaybackHandle) {
        self.playback_handle = Some(h);
    }
    /// Record the scanned directory in the app state.
    pub fn set_current_dir(&mut self, dir: String) {
        self.current_dir = Some(dir);
    }

    /// Replace all playlists, e.g. with the ones loaded from disk.
    pub fn set_playlists(&mut self, playlists: Vec<NamedPlaylist>) {
        self.playlists = playlists;
        self.selected_playlist = 0;
        self.selected_track = 0;
        self.playing_playlist = None;
    }

    pub fn has_playlists(&self) -> bool {
        !self.playlists.is_empty()
    }

    /// The playlist currently shown in the tracks pane.
    pub fn active(&self) -> Option<&NamedPlaylist> {
        self.playlists.get(self.selected_playlist)
    }

    pub fn active_mut(&mut self) -> Option<&mut NamedPlaylist> {
        self.playlists.get_mut(self.selected_playlist)
    }

    /// Cycle keyboard focus through the three panes.
    pub fn next_pane(&mut self) {
        self.pane = match self.pane {
            Pane::Playlists => Pane::Tracks,
            Pane::Tracks => Pane::Library,
            Pane::Library => Pane::Playlists,
        };
    }

    fn pane_len(&self) -> usize {
        match self.pane {
            Pane::Playlists => self.playlists.len(),
            Pane::Tracks => self.active().map(|p| p.playlist.len()).unwrap_or(0),
            Pane::Library => self.library.len(),
        }
    }

    fn pane_selection_mut(&mut self) -> &mut usize {
        match self.pane {
            Pane::Playlists => &mut self.selected_playlist,
            Pane::Tracks => &mut self.selected_track,
            Pane::Library => &mut self.selected_library,
        }
    }

    /// Move the focused pane's selection down, wrapping at the end.
    pub fn select_next(&mut self) {
        let len = self.pane_len();
        if len == 0 {
            return;
        }
        let switching_playlist = self.pane == Pane::Playlists;
        let sel = self.pane_selection_mut();
        *sel = (*sel + 1) % len;
        if switching_playlist {
            self.selected_track = 0;
        }
    }

    /// Move the focused pane's selection up, wrapping at the start.
    pub fn select_prev(&mut self) {
        let len = self.pane_len();
        if len == 0 {
            return;
        }
        let switching_playlist = self.pane == Pane::Playlists;
        let sel = self.pane_selection_mut();
        *sel = (*sel + len - 1) % len;
        if switching_playlist {
            self.selected_track = 0;
        }
    }

    /// Keep every selection inside its list after a mutation.
    fn clamp_selections(&mut self) {
        if self.selected_playlist >= self.playlists.len() {
            self.selected_playlist = self.playlists.len().saturating_sub(1);
        }
        let tracks = self.active().map(|p| p.playlist.len()).unwrap_or(0);
        if self.selected_track >= tracks {
            self.selected_track = tracks.saturating_sub(1);
        }
        if self.selected_library >= self.library.len() {
            self.selected_library = self.library.len().saturating_sub(1);
        }
    }

    /// Open the naming popup for a new playlist.
    pub fn begin_naming(&mut self) {
        self.name_input = Some(String::new());
    }
    pub fn cancel_naming(&mut self) {
        self.name_input = None;
    }
    pub fn push_name_char(&mut self, c: char) {
        if let Some(buf) = self.name_input.as_mut() {
            buf.push(c);
        }
    }
    pub fn pop_name_char(&mut self) {
        if let Some(buf) = self.name_input.as_mut() {
            buf.pop();
        }
    }

    /// Close the naming popup and create the playlist it named.
    ///
    /// Blank and duplicate names are rejected. Returns the new playlist's
    /// name when one was created.
    pub fn commit_naming(&mut self) -> Option<String> {
        let name = self.name_input.take()?;
        let name = name.trim().to_string();
        if name.is_empty() || self.playlists.iter().any(|p| p.name == name) {
            return None;
        }

        self.playlists.push(NamedPlaylist {
            name: name.clone(),
            playlist: Playlist::new(),
        });
        self.selected_playlist = self.playlists.len() - 1;
        self.selected_track = 0;
        Some(name)
    }

    /// Delete the selected playlist and return its name for the store.
    pub fn remove_selected_playlist(&mut self) -> Option<String> {
        if self.selected_playlist >= self.playlists.len() {
            return None;
        }
        let removed = self.playlists.remove(self.selected_playlist);

        match self.playing_playlist {
            Some(i) if i == self.selected_playlist => self.playing_playlist = None,
            Some(i) if i > self.selected_playlist => self.playing_playlist = Some(i - 1),
            _ => {}
        }

        self.clamp_selections();
        Some(removed.name)
    }

    /// Add the selected library track to the viewed playlist.
    ///
    /// A track whose path is already present is skipped. Returns the name of
    /// the playlist that changed, for saving.
    pub fn add_selected_library_track(&mut self) -> Option<String> {
        let track = self.library.get(self.selected_library)?.clone();
        let entry = self.active_mut()?;
        if entry.playlist.find_by_path(&track.path).is_some() {
            return None;
        }
        entry.playlist.add_song(track);
        Some(entry.name.clone())
    }

    /// Remove the selected track from the viewed playlist, matching it by
    /// its displayed title.
    pub fn remove_selected_track(&mut self) -> Option<String> {
        let selected = self.selected_track;
        let entry = self.active_mut()?;
        let title = entry.playlist.track_at(selected as isize)?.title.clone();
        let track = entry.playlist.find_by_title(&title)?.clone();
        entry.playlist.remove_song(&track);
        let name = entry.name.clone();
        self.clamp_selections();
        Some(name)
    }

    /// Move the selected track one slot up; the selection follows it.
    pub fn move_selected_track_up(&mut self) -> Option<String> {
        let selected = self.selected_track;
        if selected == 0 {
            return None;
        }
        let entry = self.active_mut()?;
        let track = entry.playlist.track_at(selected as isize)?.clone();
        entry.playlist.move_up(&track);
        let name = entry.name.clone();
        self.selected_track = selected - 1;
        Some(name)
    }

    /// Move the selected track one slot down; the selection follows it.
    pub fn move_selected_track_down(&mut self) -> Option<String> {
        let selected = self.selected_track;
        let entry = self.active_mut()?;
        if selected + 1 >= entry.playlist.len() {
            return None;
        }
        let track = entry.playlist.track_at(selected as isize)?.clone();
        entry.playlist.move_down(&track);
        let name = entry.name.clone();
        self.selected_track = selected + 1;
        Some(name)
    }

    /// Point the viewed playlist's cursor at the selected track and return a
    /// clone for the audio player.
    pub fn play_selected(&mut self) -> Option<Track> {
        let selected = self.selected_track;
        let viewed = self.selected_playlist;
        let entry = self.active_mut()?;
        let track = entry.playlist.track_at(selected as isize)?.clone();
        entry.playlist.select(&track);
        self.playing_playlist = Some(viewed);
        Some(track)
    }

    fn playing_entry_mut(&mut self) -> Option<&mut NamedPlaylist> {
        let idx = self.playing_playlist.unwrap_or(self.selected_playlist);
        self.playlists.get_mut(idx)
    }

    /// Advance the playing playlist's cursor; wraps around its ring.
    pub fn next_track(&mut self) -> Option<Track> {
        let idx = self.playing_playlist.unwrap_or(self.selected_playlist);
        let track = self.playing_entry_mut()?.playlist.next_song()?.clone();
        self.playing_playlist = Some(idx);
        Some(track)
    }

    /// Retreat the playing playlist's cursor; wraps around its ring.
    pub fn previous_track(&mut self) -> Option<Track> {
        let idx = self.playing_playlist.unwrap_or(self.selected_playlist);
        let track = self.playing_entry_mut()?.playlist.previous_song()?.clone();
        self.playing_playlist = Some(idx);
        Some(track)
    }

    /// Row of the now-playing track in the tracks pane, when the viewed
    /// playlist is the playing one.
    pub fn now_playing_position(&self) -> Option<usize> {
        if self.playing_playlist != Some(self.selected_playlist) {
            return None;
        }
        self.active()?.playlist.current_position()
    }

    /// Snap the track selection to the now-playing row after navigation.
    pub fn follow_playing(&mut self) {
        if let Some(pos) = self.now_playing_position() {
            self.selected_track = pos;
        }
    }
}
