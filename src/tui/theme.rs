//! TUI color semantics and style constants.
//!
//! Pure data, consumed by the rendering layer for visual consistency.
//!
//! Color semantics:
//! - Cyan: interactive elements (keybinding hints, focused items)
//! - Yellow: advisory notices
//! - Red: failures
//! - Dim: de-emphasized (counters, empty placeholders)
//! - Bold: the drill word and titles

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Interactive element / keybinding hint, cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// Advisory notice, yellow.
pub const STYLE_WARNING: Style = Style::new().fg(Color::Yellow);

/// Failure notice, red.
pub const STYLE_DANGER: Style = Style::new().fg(Color::Red);

/// De-emphasized metadata, dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Cursor row in a list.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Glyphs of the word under drill.
pub const STYLE_WORD: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Stage / question counters.
pub const STYLE_COUNTER: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Editor input line.
pub const STYLE_INPUT: Style = Style::new().fg(Color::White);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
