//! TUI state algebra: pure types, zero effects.
//!
//! The session owns the domain state and the current screen. This module
//! adds only what the terminal needs on top: the text being typed, list
//! cursors, the spark overlay, and the vocabulary the pure `update`
//! function speaks (actions, transitions, effects).

use crossterm::event::KeyEvent;

use crate::fireworks::Particle;
use crate::session::{RevealTicket, Session};

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// Two producers feed a single mpsc channel:
/// - A key reader thread sends `Key` variants
/// - One-shot reveal timers send `RevealElapsed`
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// A reveal delay ran out. The session decides if it still applies.
    RevealElapsed(RevealTicket),
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Terminal-only transient state. Survives screen changes; `update`
/// resets the parts that should not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Focused menu item.
    pub menu_cursor: usize,
    /// Text in the editor's input line.
    pub input: String,
    /// Focused row in the editor's word list.
    pub list_cursor: usize,
}

/// Top-level TUI model.
#[derive(Debug)]
pub struct App<S> {
    pub session: Session<S>,
    pub ui: UiState,
    /// Sparks drawn while a reveal is pending.
    pub sparks: Vec<Particle>,
    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl<S> App<S> {
    pub fn new(session: Session<S>) -> Self {
        App {
            session,
            ui: UiState::default(),
            sparks: Vec::new(),
            should_quit: false,
        }
    }
}

// ============================================================================
// MENU
// ============================================================================

/// Main menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    StartDrill,
    EditWords,
}

impl MenuItem {
    pub const ALL: [MenuItem; 2] = [MenuItem::StartDrill, MenuItem::EditWords];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::StartDrill => "시작",
            MenuItem::EditWords => "제작",
        }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions (per screen, since the
/// editor captures printable keys). The transition function decides what
/// each Action means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move cursor up in a list.
    MoveUp,
    /// Move cursor down in a list.
    MoveDown,
    /// Activate the focused item / submit the input line.
    Enter,
    /// Leave the current screen for the menu.
    Back,
    /// Pick a menu entry by number.
    NumberKey(u8),
    /// Typed character for the input line.
    Input(char),
    /// Delete the last typed character.
    Backspace,
    /// Remove the focused word from the draft.
    Delete,
    /// Save the draft and return to the menu.
    Save,
    /// Forward control on the drill screen.
    Next,
    /// Backward control on the drill screen.
    Prev,
    /// Reveal the answer (timed mode).
    Reveal,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Read-only facts about the session that `update` needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateContext {
    /// Words in the editor draft.
    pub draft_len: usize,
    /// The drill has run past its last word.
    pub finished: bool,
}

/// Result of a pure state transition.
///
/// Follows the Elm/TEA pattern: pure code describes WHAT should happen,
/// the effects boundary decides HOW.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Keep going with this UI state; the session is untouched.
    Ui(UiState),
    /// Adopt this UI state and run a session command.
    Effect(UiState, Effect),
    /// Quit the application.
    Quit,
}

/// Session command requested by a pure transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartDrill,
    OpenEditor,
    AddWord(String),
    RemoveWord(usize),
    SaveAndReturn,
    ReturnToMenu,
    Advance,
    Retreat,
    Reveal,
}

// ============================================================================
// TESTS
// ============================================================================
