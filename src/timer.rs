//! Elapsed-time formatting for the timer/collision panel

/// Format seconds as `MM:SS:CC` (minutes, seconds, hundredths)
///
/// Each field is truncated, not rounded; minutes grow past two digits.
pub fn format_clock(total_secs: f64) -> String {
    let total_secs = total_secs.max(0.0);
    let minutes = (total_secs / 60.0).floor() as u64;
    let seconds = (total_secs % 60.0).floor() as u64;
    let hundredths = ((total_secs % 1.0) * 100.0).floor() as u64;
    format!("{:02}:{:02}:{:02}", minutes, seconds, hundredths)
}

/// One line per logged collision: `collision N : MM:SS:CC`
pub fn collision_lines(log: &[f64]) -> Vec<String> {
    log.iter()
        .enumerate()
        .map(|(i, &secs)| format!("collision {} : {}", i + 1, format_clock(secs)))
        .collect()
}
