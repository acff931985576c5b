/// Format remaining seconds as zero-padded "MM:SS"
pub fn format_clock(secs: u32) -> String {
    let minutes = secs / 60;
    let seconds = secs % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

/// Share of the session still remaining, as a percentage in [0, 100]
pub fn progress_percent(time_left: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percent = time_left as f64 / total as f64 * 100.0;
    percent.clamp(0.0, 100.0)
}

/// Whole-number label for a progress percentage.
///
/// Only a full session reads "100%" and only an empty one reads "0%";
/// anything strictly between shows 1..=99.
pub fn percent_label(percent: f64) -> String {
    let shown = if percent <= 0.0 {
        0.0
    } else if percent >= 100.0 {
        100.0
    } else {
        percent.round().clamp(1.0, 99.0)
    };
    format!("{:.0}%", shown)
}
