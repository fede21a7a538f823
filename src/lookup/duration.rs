//! Track length formatting.

/// Format a millisecond count as `HH:MM:SS`.
///
/// Sub-second remainders are truncated. Hours are not wrapped at 24 and grow
/// past two digits when needed.
pub fn format_duration(ms: u64) -> String {
    let total_secs = ms / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
