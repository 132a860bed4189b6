use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Pane, PlaybackState};
use crate::audio::{AudioCmd, AudioPlayer};
use crate::config;
use crate::store::PlaylistStore;
use crate::ui;

/// Main terminal event loop: handles input, UI drawing and sync with the
/// audio thread. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    audio_player: &AudioPlayer,
    store: &PlaylistStore,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        sync_playback(app, audio_player);

        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, app, audio_player, store)? {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Mirror the audio thread's state into the app. When the current track ran
/// out, the ring decides what comes next: advancing the cursor wraps around
/// on its own.
fn sync_playback(app: &mut App, audio_player: &AudioPlayer) {
    let Some(handle) = app.playback_handle.as_ref().cloned() else {
        return;
    };

    let mut finished = false;
    if let Ok(mut info) = handle.lock() {
        if info.finished {
            info.finished = false;
            finished = true;
        } else if info.track.is_some() {
            app.playback = if info.playing {
                PlaybackState::Playing
            } else {
                PlaybackState::Paused
            };
        } else {
            app.playback = PlaybackState::Stopped;
        }
    }

    if finished {
        match app.next_track() {
            Some(track) => {
                let _ = audio_player.send(AudioCmd::Play(track));
                app.playback = PlaybackState::Playing;
                app.follow_playing();
            }
            None => app.playback = PlaybackState::Stopped,
        }
    }
}

fn save_active(app: &App, store: &PlaylistStore) -> Result<(), crate::store::StoreError> {
    if let Some(entry) = app.active() {
        store.save(&entry.name, &entry.playlist)?;
    }
    Ok(())
}

/// Handle one key press. Returns `Ok(true)` to quit.
fn handle_key_event(
    key: KeyEvent,
    app: &mut App,
    audio_player: &AudioPlayer,
    store: &PlaylistStore,
) -> Result<bool, Box<dyn std::error::Error>> {
    // The naming popup grabs all input while open.
    if app.name_input.is_some() {
        match key.code {
            KeyCode::Esc => app.cancel_naming(),
            KeyCode::Backspace => app.pop_name_char(),
            KeyCode::Enter => {
                if app.commit_naming().is_some() {
                    save_active(app, store)?;
                }
            }
            KeyCode::Char(c) if !c.is_control() => app.push_name_char(c),
            _ => {}
        }
        return Ok(false);
    }

    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Tab => app.next_pane(),
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Char('n') => app.begin_naming(),

        KeyCode::Char('d') => match app.pane {
            Pane::Playlists => {
                let was_playing = app.playing_playlist == Some(app.selected_playlist);
                if let Some(name) = app.remove_selected_playlist() {
                    if was_playing {
                        let _ = audio_player.send(AudioCmd::Stop);
                        app.playback = PlaybackState::Stopped;
                    }
                    store.delete(&name)?;
                }
            }
            Pane::Tracks => {
                if app.remove_selected_track().is_some() {
                    save_active(app, store)?;
                }
            }
            Pane::Library => {}
        },

        KeyCode::Enter => match app.pane {
            Pane::Playlists => {
                if app.has_playlists() {
                    app.pane = Pane::Tracks;
                }
            }
            Pane::Tracks => {
                if let Some(track) = app.play_selected() {
                    let _ = audio_player.send(AudioCmd::Play(track));
                    app.playback = PlaybackState::Playing;
                }
            }
            Pane::Library => {
                if app.add_selected_library_track().is_some() {
                    save_active(app, store)?;
                }
            }
        },

        KeyCode::Char('K') => {
            if app.pane == Pane::Tracks && app.move_selected_track_up().is_some() {
                save_active(app, store)?;
            }
        }
        KeyCode::Char('J') => {
            if app.pane == Pane::Tracks && app.move_selected_track_down().is_some() {
                save_active(app, store)?;
            }
        }

        KeyCode::Char(' ') | KeyCode::Char('p') => match app.playback {
            PlaybackState::Playing => {
                let _ = audio_player.send(AudioCmd::TogglePause);
                app.playback = PlaybackState::Paused;
            }
            PlaybackState::Paused => {
                let _ = audio_player.send(AudioCmd::TogglePause);
                app.playback = PlaybackState::Playing;
            }
            PlaybackState::Stopped => {
                if let Some(track) = app.play_selected() {
                    let _ = audio_player.send(AudioCmd::Play(track));
                    app.playback = PlaybackState::Playing;
                }
            }
        },

        KeyCode::Char('s') => {
            let _ = audio_player.send(AudioCmd::Stop);
            app.playback = PlaybackState::Stopped;
        }

        KeyCode::Char('l') => {
            if let Some(track) = app.next_track() {
                let _ = audio_player.send(AudioCmd::Play(track));
                app.playback = PlaybackState::Playing;
                app.follow_playing();
            }
        }
        KeyCode::Char('h') => {
            if let Some(track) = app.previous_track() {
                let _ = audio_player.send(AudioCmd::Play(track));
                app.playback = PlaybackState::Playing;
                app.follow_playing();
            }
        }

        _ => {}
    }

    Ok(false)
}
