use std::env;
use std::path::Path;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, NamedPlaylist};
use crate::audio::AudioPlayer;
use crate::library::scan;
use crate::store::PlaylistStore;

mod event_loop;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    let dir = env::args().nth(1).unwrap_or_else(|| {
        std::env::current_dir()
            .ok()
            .and_then(|p| p.to_str().map(|s| s.to_string()))
            .unwrap_or_else(|| "Music".to_string())
    });

    let tracks = scan(Path::new(&dir), &settings.library);

    let store = PlaylistStore::open(settings.playlists_dir())?;
    let saved = store.load_all()?;

    let audio_player = AudioPlayer::new();
    let mut app = App::new(tracks);
    app.set_current_dir(dir.clone());
    app.set_playback_handle(audio_player.playback_handle());
    app.set_playlists(
        saved
            .into_iter()
            .map(|(name, playlist)| NamedPlaylist { name, playlist })
            .collect(),
    );

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &audio_player, &store);

    audio_player.quit();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
