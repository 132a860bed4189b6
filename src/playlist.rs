//! A playlist: tracks arranged in a ring with a movable "now playing" cursor.

use std::path::Path;

use crate::library::Track;
use crate::ring::{NodeId, RingList};

/// An ordered collection of tracks with a current-position cursor.
///
/// The cursor is a non-owning [`NodeId`] into the underlying ring; it is
/// unset exactly when the playlist is empty, and it is relocated or cleared
/// before the node it references is ever removed.
pub struct Playlist {
    ring: RingList<Track>,
    current: Option<NodeId>,
}

impl Default for Playlist {
    fn default() -> Self {
        Self::new()
    }
}

impl Playlist {
    pub fn new() -> Self {
        Self {
            ring: RingList::new(),
            current: None,
        }
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Append `track`; the first insertion into an empty playlist becomes the
    /// current track. O(1).
    pub fn add_song(&mut self, track: Track) {
        let id = self.ring.append(track);
        if self.current.is_none() {
            self.current = Some(id);
        }
    }

    /// Remove the first track equal to `track` in ring order.
    ///
    /// A track that is not present is a no-op, not an error; UI-driven
    /// removals of already-gone tracks must not fail. Returns whether
    /// anything was removed.
    ///
    /// When the removed node is the current one, the cursor moves to its
    /// `next` neighbor first (ring size > 1), otherwise it is cleared.
    pub fn remove_song(&mut self, track: &Track) -> bool {
        let Some(node) = self.ring.find(track) else {
            return false;
        };

        if self.current == Some(node) {
            self.current = match self.ring.next_of(node) {
                Some(next) if next != node => Some(next),
                _ => match self.ring.prev_of(node) {
                    Some(prev) if prev != node => Some(prev),
                    _ => None,
                },
            };
        }

        // The scan below finds the same first match the cursor fix used.
        self.ring.remove(track).is_ok()
    }

    /// Advance the cursor and return the new current track.
    ///
    /// Wraps around the ring; `None` only when the playlist is empty.
    pub fn next_song(&mut self) -> Option<&Track> {
        let cur = self.current?;
        let next = self.ring.next_of(cur)?;
        self.current = Some(next);
        self.ring.get(next)
    }

    /// Retreat the cursor and return the new current track.
    pub fn previous_song(&mut self) -> Option<&Track> {
        let cur = self.current?;
        let prev = self.ring.prev_of(cur)?;
        self.current = Some(prev);
        self.ring.get(prev)
    }

    /// The track under the cursor. Pure read.
    pub fn current(&self) -> Option<&Track> {
        self.ring.get(self.current?)
    }

    /// Move the cursor to the first track equal to `track`.
    /// Returns whether a match was found.
    pub fn select(&mut self, track: &Track) -> bool {
        match self.ring.find(track) {
            Some(node) => {
                self.current = Some(node);
                true
            }
            None => false,
        }
    }

    /// Swap `track` with the track before it by exchanging payloads; the ring
    /// topology is untouched, so a cursor on either node keeps its node and
    /// reports the swapped data.
    ///
    /// No-op for the head track: reordering does not wrap to the tail.
    pub fn move_up(&mut self, track: &Track) {
        let Some(node) = self.ring.find(track) else {
            return;
        };
        if Some(node) == self.ring.head() {
            return;
        }
        if let Some(prev) = self.ring.prev_of(node) {
            self.ring.swap_values(node, prev);
        }
    }

    /// Swap `track` with the track after it. No-op for the tail track.
    pub fn move_down(&mut self, track: &Track) {
        let Some(node) = self.ring.find(track) else {
            return;
        };
        if Some(node) == self.ring.tail() {
            return;
        }
        if let Some(next) = self.ring.next_of(node) {
            self.ring.swap_values(node, next);
        }
    }

    /// First node equal to `track`, scanning one revolution from head.
    pub fn find_node(&self, track: &Track) -> Option<NodeId> {
        self.ring.find(track)
    }

    /// First track whose title equals `title`.
    pub fn find_by_title(&self, title: &str) -> Option<&Track> {
        let id = self.ring.find_by(|t| t.title == title)?;
        self.ring.get(id)
    }

    /// First track whose path equals `path`.
    pub fn find_by_path(&self, path: &Path) -> Option<&Track> {
        let id = self.ring.find_by(|t| t.path == path)?;
        self.ring.get(id)
    }

    /// Track at `index` in head order; negative indices count from the tail.
    pub fn track_at(&self, index: isize) -> Option<&Track> {
        self.ring.at(index).ok()
    }

    /// Snapshot of all tracks, head to tail. The clones do not alias the
    /// playlist's own storage.
    pub fn all_songs(&self) -> Vec<Track> {
        self.ring.iter().map(|(_, t)| t.clone()).collect()
    }

    /// Position of the cursor in head order, for list highlighting.
    pub fn current_position(&self) -> Option<usize> {
        let cur = self.current?;
        self.ring.iter().position(|(id, _)| id == cur)
    }
}
