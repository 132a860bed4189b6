use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStreamBuilder, Sink};

use super::sink::create_sink;
use super::types::{AudioCmd, PlaybackHandle};

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    playback_info: PlaybackHandle,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream =
            OutputStreamBuilder::open_default_stream().expect("ERR: No audio output device");
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a TUI app.
        let mut stream = stream;
        stream.log_on_drop(false);

        let mut sink: Option<Sink> = None;
        let mut paused = true;

        // Spawn a ticker thread to update playback_info.elapsed periodically.
        let info_for_ticker = playback_info.clone();
        thread::spawn(move || loop {
            thread::sleep(Duration::from_millis(500));
            let mut info = info_for_ticker.lock().unwrap();
            if info.playing {
                info.elapsed += Duration::from_millis(500);
            }
        });

        loop {
            match rx.recv_timeout(Duration::from_millis(200)) {
                Ok(AudioCmd::Play(track)) => {
                    if let Some(s) = sink.as_ref() {
                        s.stop();
                    }

                    match create_sink(&stream, &track) {
                        Ok(new_sink) => {
                            new_sink.play();
                            sink = Some(new_sink);
                            paused = false;
                            if let Ok(mut info) = playback_info.lock() {
                                info.track = Some(track);
                                info.elapsed = Duration::ZERO;
                                info.playing = true;
                                info.finished = false;
                            }
                        }
                        Err(e) => {
                            eprintln!("rondo: cannot play {}: {e}", track.path.display());
                            sink = None;
                            paused = true;
                            if let Ok(mut info) = playback_info.lock() {
                                info.track = None;
                                info.elapsed = Duration::ZERO;
                                info.playing = false;
                                info.finished = false;
                            }
                        }
                    }
                }

                Ok(AudioCmd::TogglePause) => {
                    if let Some(ref s) = sink {
                        if paused {
                            s.play();
                        } else {
                            s.pause();
                        }
                        paused = !paused;
                        if let Ok(mut info) = playback_info.lock() {
                            info.playing = !paused;
                        }
                    }
                }

                Ok(AudioCmd::Stop) => {
                    if let Some(s) = sink.as_ref() {
                        s.stop();
                    }
                    sink = None;
                    paused = true;
                    if let Ok(mut info) = playback_info.lock() {
                        info.track = None;
                        info.elapsed = Duration::ZERO;
                        info.playing = false;
                        info.finished = false;
                    }
                }

                Ok(AudioCmd::Quit) => {
                    if let Some(ref s) = sink {
                        s.stop();
                    }
                    break;
                }

                Err(RecvTimeoutError::Timeout) => {
                    // Periodic end-of-track check. The runtime decides what
                    // plays next; this thread only reports that the sink ran dry.
                    if let Some(s) = sink.as_ref() {
                        if !paused && s.empty() {
                            sink = None;
                            paused = true;
                            if let Ok(mut info) = playback_info.lock() {
                                info.playing = false;
                                info.finished = true;
                            }
                        }
                    }
                }

                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}
