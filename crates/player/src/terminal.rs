//! Terminal rendering of transcript lines.

use rise_domain::{Severity, TranscriptLine};

const RESET: &str = "\x1b[0m";

fn color(severity: Severity) -> Option<&'static str> {
    match severity {
        Severity::Normal => None,
        Severity::Highlight => Some("\x1b[1;36m"),
        Severity::Warning => Some("\x1b[33m"),
        Severity::Error => Some("\x1b[31m"),
        Severity::Success => Some("\x1b[32m"),
    }
}

/// Line text wrapped in the ANSI color of its severity
pub fn paint(line: &TranscriptLine) -> String {
    match color(line.severity) {
        Some(code) if !line.text.is_empty() => format!("{}{}{}", code, line.text, RESET),
        _ => line.text.clone(),
    }
}

/// Lines of `current` that have not been printed yet.
///
/// Only the tail of a transcript can change, so everything before the last
/// line of `printed` is still on screen. A replaced last line is printed
/// again as its replacement.
pub fn fresh_lines<'a>(
    printed: &[TranscriptLine],
    current: &'a [TranscriptLine],
) -> &'a [TranscriptLine] {
    let mut start = printed.len().min(current.len());
    if start > 0 && printed[start - 1] != current[start - 1] {
        start -= 1;
    }
    &current[start..]
}
