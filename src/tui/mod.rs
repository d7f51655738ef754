//! TUI module for the interactive drill.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (UiState, Action, Transition)
//! - `update`: Pure transitions
//! - `view`: Pure rendering
//! - `run`: Effects (terminal, event loop, timers)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
