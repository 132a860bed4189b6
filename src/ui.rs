//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::{App, Pane, PlaybackState};
use crate::config::UiSettings;
use crate::library::{format_duration, track_line};

const CONTROLS: &str = "[tab] pane | [j/k] up/down | [enter] select/play/add | [n] new playlist | \
     [d] delete | [J/K] move track | [space/p] play-pause | [s] stop | [h/l] prev/next | [q] quit";

/// Format a `Duration` as `M:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(3);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let block = Block::default().borders(Borders::ALL).title(title);
    if focused {
        block.border_style(Style::default().add_modifier(Modifier::BOLD))
    } else {
        block
    }
}

fn render_list(
    frame: &mut Frame,
    area: Rect,
    items: Vec<ListItem>,
    selected: usize,
    title: &str,
    focused: bool,
) {
    let empty = items.is_empty();
    let list = List::new(items)
        .block(pane_block(title, focused))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if !empty {
        state.select(Some(selected));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the entire UI into the provided `frame` using `app` state.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" rondo ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Status box + progress gauge
    let mut percent: u16 = 0;
    let status = {
        let mut parts: Vec<String> = Vec::new();

        let state = match app.playback {
            PlaybackState::Stopped => "Stopped",
            PlaybackState::Playing => "Playing",
            PlaybackState::Paused => "Paused",
        };
        parts.push(state.to_string());

        if let Some(ref h) = app.playback_handle {
            if let Ok(info) = h.lock() {
                if let Some(track) = info.track.as_ref() {
                    percent = info.percent();
                    parts.push(format!(
                        "Song: {} [{} / {}]",
                        track.title,
                        format_mmss(info.elapsed),
                        format_duration(track.duration)
                    ));
                }
            }
        }

        if let Some(entry) = app.active() {
            parts.push(format!(
                "Playlist: {} ({} tracks)",
                entry.name,
                entry.playlist.len()
            ));
        }

        if let Some(dir) = &app.current_dir {
            parts.push(format!("Dir: {}", dir));
        }

        parts.join(" • ")
    };

    let status_par = Paragraph::new(status)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" progress "))
        .percent(percent.min(100));
    frame.render_widget(gauge, chunks[2]);

    // Main area: playlists | tracks | library
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(45),
            Constraint::Percentage(30),
        ])
        .split(chunks[3]);

    let playlist_items: Vec<ListItem> = app
        .playlists
        .iter()
        .map(|p| ListItem::new(p.name.clone()))
        .collect();
    render_list(
        frame,
        columns[0],
        playlist_items,
        app.selected_playlist,
        " playlists ",
        app.pane == Pane::Playlists,
    );

    let now_playing = app.now_playing_position();
    let track_items: Vec<ListItem> = app
        .active()
        .map(|entry| {
            entry
                .playlist
                .all_songs()
                .iter()
                .enumerate()
                .map(|(i, t)| {
                    if now_playing == Some(i) {
                        ListItem::new(format!("▶ {}", track_line(t)))
                    } else {
                        ListItem::new(format!("  {}", track_line(t)))
                    }
                })
                .collect()
        })
        .unwrap_or_default();
    render_list(
        frame,
        columns[1],
        track_items,
        app.selected_track,
        " tracks ",
        app.pane == Pane::Tracks,
    );

    let library_items: Vec<ListItem> = app
        .library
        .iter()
        .map(|t| ListItem::new(track_line(t)))
        .collect();
    render_list(
        frame,
        columns[2],
        library_items,
        app.selected_library,
        " library ",
        app.pane == Pane::Library,
    );

    // Naming popup over the main area
    if let Some(name) = &app.name_input {
        let popup_area = centered_rect_sized(40, 3, chunks[3]);
        frame.render_widget(Clear, popup_area);
        let input = Paragraph::new(format!("{name}_")).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" new playlist (enter saves, esc cancels) "),
        );
        frame.render_widget(input, popup_area);
    }

    let footer = Paragraph::new(CONTROLS)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);
}
