//! Creating `rodio` sinks from `Track` values.

use std::fs::File;
use std::io::BufReader;

use rodio::{Decoder, OutputStream, Sink};
use thiserror::Error;

use crate::library::Track;

/// Why a track could not be turned into a playing sink.
#[derive(Debug, Error)]
pub(super) enum SinkError {
    #[error("cannot open file: {0}")]
    Open(#[from] std::io::Error),
    #[error("cannot decode file: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),
}

/// Create a paused `Sink` for `track`.
///
/// An unreadable or undecodable file is an error for the caller to absorb,
/// not a reason to bring the audio thread down.
pub(super) fn create_sink(handle: &OutputStream, track: &Track) -> Result<Sink, SinkError> {
    let file = File::open(&track.path)?;
    let source = Decoder::new(BufReader::new(file))?;

    let sink = Sink::connect_new(handle.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}
