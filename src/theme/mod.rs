//! Theme system for Shopsea.
//!
//! Two built-in palettes, light and dark, toggled at runtime. Themes are
//! session-scoped only and affect presentation exclusively; no data path
//! depends on the active palette.

use ratatui::style::Color;

/// Resolved color palette used by the UI layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Default background of the whole screen.
    pub background: Color,
    /// Background for panels and the header bar.
    pub surface: Color,
    /// Primary foreground text.
    pub text: Color,
    /// De-emphasized text (hints, diagnostics, footer).
    pub dim: Color,
    /// Accent for titles, focus highlights, and the header.
    pub accent: Color,
    /// Secondary accent (prices, ratings).
    pub secondary: Color,
    /// Error text and panels.
    pub error: Color,
    /// Foreground for the highlighted row/tab.
    pub highlight_fg: Color,
}

impl Theme {
    /// Light palette; the startup default.
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(0xfa, 0xfa, 0xfa),
            surface: Color::Rgb(0xff, 0xff, 0xff),
            text: Color::Rgb(0x21, 0x21, 0x21),
            dim: Color::Rgb(0x75, 0x75, 0x75),
            accent: Color::Rgb(0x62, 0x00, 0xea),
            secondary: Color::Rgb(0x01, 0x87, 0x86),
            error: Color::Rgb(0xb0, 0x00, 0x20),
            highlight_fg: Color::Rgb(0xff, 0xff, 0xff),
        }
    }

    /// Dark palette.
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(0x12, 0x12, 0x12),
            surface: Color::Rgb(0x1e, 0x1e, 0x1e),
            text: Color::Rgb(0xee, 0xee, 0xee),
            dim: Color::Rgb(0x9e, 0x9e, 0x9e),
            accent: Color::Rgb(0xbb, 0x86, 0xfc),
            secondary: Color::Rgb(0x03, 0xda, 0xc6),
            error: Color::Rgb(0xcf, 0x66, 0x79),
            highlight_fg: Color::Rgb(0x12, 0x12, 0x12),
        }
    }

    /// Palette for the given mode flag.
    pub fn for_mode(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
