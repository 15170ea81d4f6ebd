//! Transcript lines shown to the player.

use serde::{Deserialize, Serialize};

/// Display tag of a transcript line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Normal,
    Highlight,
    Warning,
    Error,
    Success,
}

/// One line of output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptLine {
    pub text: String,
    pub severity: Severity,
}

impl TranscriptLine {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }

    pub fn normal(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Normal)
    }

    pub fn highlight(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Highlight)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Warning)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Error)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Success)
    }

    /// Empty spacer line
    pub fn blank() -> Self {
        Self::normal("")
    }

    /// Command echo, `> <raw input>`
    pub fn echo(raw: &str) -> Self {
        Self::normal(format!("> {}", raw))
    }
}
