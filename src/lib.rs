//! geulgyeob: drill reading of overlapping, tightly-kerned words.

pub mod drill;
pub mod editor;
pub mod error;
pub mod fireworks;
pub mod logging;
pub mod report;
pub mod session;
pub mod store;
pub mod tui;
pub mod types;
