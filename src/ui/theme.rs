//! Color theme constants.
//!
//! Defines the minimal dark palette used throughout the UI.

use ratatui::style::Color;

/// Separators and inactive chrome
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Selection marker and focused input
pub const COLOR_ACCENT: Color = Color::White;

/// Titles
pub const COLOR_HEADER: Color = Color::White;

/// Playing video, active tab
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Secondary text
pub const COLOR_DIM: Color = Color::DarkGray;

/// Fetch failures
pub const COLOR_ERROR: Color = Color::Red;

/// Speaker names on schedule cards
pub const COLOR_SPEAKER: Color = Color::Rgb(97, 218, 251); // #61DAFB
