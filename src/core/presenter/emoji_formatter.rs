//! Emoji Formatter Module
//!
//! Provides consistent markers across console output.
//! Markers serve as visual anchors for each kind of body and each kind of
//! report line.

use crate::core::models::BodyKind;
use serde::Deserialize;

// =============================================================================
// Theme
// =============================================================================

/// Visual theme for console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Full emoji support (default)
    #[default]
    Full,
    /// ASCII markers (for terminals without emoji)
    Minimal,
    /// No markers at all
    Plain,
}

// =============================================================================
// Emoji Formatter
// =============================================================================

/// Formats output with consistent marker usage.
#[derive(Debug, Clone, Default)]
pub struct EmojiFormatter {
    theme: Theme,
}

impl EmojiFormatter {
    /// Create a new formatter with the default theme.
    pub fn new() -> Self {
        Self { theme: Theme::Full }
    }

    /// Create a formatter with a specific theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Prefix `text` with `marker`, or return `text` alone for an empty marker.
    pub fn decorate(&self, marker: &str, text: &str) -> String {
        if marker.is_empty() {
            text.to_string()
        } else {
            format!("{} {}", marker, text)
        }
    }

    // =========================================================================
    // Body Markers
    // =========================================================================

    /// Marker for a body kind.
    pub fn body_emoji(&self, kind: BodyKind) -> &'static str {
        match self.theme {
            Theme::Plain => "",
            Theme::Minimal => match kind {
                BodyKind::Galaxy => "@",
                BodyKind::Star => "*",
                BodyKind::Planet => "o",
                BodyKind::Moon => ".",
            },
            Theme::Full => match kind {
                BodyKind::Galaxy => "🌌",
                BodyKind::Star => "⭐",
                BodyKind::Planet => "🪐",
                BodyKind::Moon => "🌙",
            },
        }
    }

    // =========================================================================
    // Status Indicators
    // =========================================================================

    /// Success indicator.
    pub fn success(&self) -> &'static str {
        match self.theme {
            Theme::Plain => "",
            Theme::Minimal => "+",
            Theme::Full => "✨",
        }
    }

    /// Warning indicator.
    pub fn warning(&self) -> &'static str {
        match self.theme {
            Theme::Plain => "",
            Theme::Minimal => "!",
            Theme::Full => "⚠️",
        }
    }

    /// Error indicator.
    pub fn error(&self) -> &'static str {
        match self.theme {
            Theme::Plain => "",
            Theme::Minimal => "x",
            Theme::Full => "❌",
        }
    }

    /// Statistics header indicator.
    pub fn stats_emoji(&self) -> &'static str {
        match self.theme {
            Theme::Plain => "",
            Theme::Minimal => "#",
            Theme::Full => "📊",
        }
    }

    /// Help header indicator.
    pub fn hint_emoji(&self) -> &'static str {
        match self.theme {
            Theme::Plain => "",
            Theme::Minimal => "?",
            Theme::Full => "🧭",
        }
    }

    /// Bullet point character.
    pub fn bullet(&self) -> &'static str {
        match self.theme {
            Theme::Plain => "",
            Theme::Minimal => "-",
            Theme::Full => "•",
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
