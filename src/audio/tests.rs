use std::time::Duration;

use super::types::PlaybackInfo;
use crate::library::Track;

fn info_for(duration: f64, elapsed_secs: u64) -> PlaybackInfo {
    PlaybackInfo {
        track: Some(Track::new("t", duration, "/music/t.mp3")),
        elapsed: Duration::from_secs(elapsed_secs),
        playing: true,
        finished: false,
    }
}

#[test]
fn percent_is_zero_without_a_track() {
    assert_eq!(PlaybackInfo::default().percent(), 0);
}

#[test]
fn percent_is_zero_for_zero_duration() {
    assert_eq!(info_for(0.0, 30).percent(), 0);
}

#[test]
fn percent_reports_elapsed_fraction() {
    assert_eq!(info_for(200.0, 50).percent(), 25);
    assert_eq!(info_for(200.0, 100).percent(), 50);
}

#[test]
fn percent_clamps_at_one_hundred() {
    assert_eq!(info_for(100.0, 250).percent(), 100);
}
