use super::model::Track;

/// Format a duration in seconds as `M:SS`, rounding down to whole seconds.
pub fn format_duration(secs: f64) -> String {
    let total = if secs.is_finite() && secs > 0.0 {
        secs as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// One list row for a track: `Title (M:SS)`.
pub fn track_line(track: &Track) -> String {
    format!("{} ({})", track.title, format_duration(track.duration))
}
