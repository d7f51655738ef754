//! Domain types for geulgyeob.
//!
//! Plain data shared by the store, the editor, the drill state machine
//! and the terminal front end. No I/O here.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

// ============================================================================
// WORD LIST
// ============================================================================

/// The canonical, persisted list of drill words.
///
/// Ordered, duplicates allowed. Every entry is non-empty after trimming;
/// constructors drop blank entries rather than storing them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct WordList(Vec<String>);

impl WordList {
    /// Build a list from raw entries, skipping blank ones.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        WordList(
            entries
                .into_iter()
                .map(Into::into)
                .filter(|w| !w.trim().is_empty())
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

}

impl From<Vec<String>> for WordList {
    fn from(entries: Vec<String>) -> Self {
        WordList::from_entries(entries)
    }
}

impl From<WordList> for Vec<String> {
    fn from(list: WordList) -> Self {
        list.0
    }
}

// ============================================================================
// STAGES
// ============================================================================

/// Spacing multipliers for the ten-stage profile.
/// 0 = perfect overlap, 1.0 = normal spacing.
const EXTENDED_MULTIPLIERS: [f64; 10] = [0.0, 0.15, 0.3, 0.4, 0.6, 0.8, 1.0, 1.2, 1.4, 1.6];

/// Spacing multipliers for the eight-stage profile.
const CLASSIC_MULTIPLIERS: [f64; 8] = [0.0, 0.15, 0.3, 0.4, 0.6, 0.8, 1.0, 1.2];

/// Fixed, ordered table of spacing multipliers, one per stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageTable(&'static [f64]);

impl StageTable {
    /// Number of stages (STAGE_COUNT). Always at least 1.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Index of the final stage.
    pub fn last_stage(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Multiplier for a stage, or None past the end.
    pub fn multiplier(&self, stage: usize) -> Option<f64> {
        self.0.get(stage).copied()
    }

    /// Largest multiplier in the table.
    pub fn widest(&self) -> f64 {
        self.0.iter().copied().fold(0.0, f64::max)
    }
}

/// Which stage table the drill runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StageProfile {
    /// Eight stages, overlap up to 1.2ch spacing.
    Classic,
    /// Ten stages, overlap up to 1.6ch spacing.
    #[default]
    Extended,
}

impl StageProfile {
    pub fn table(self) -> StageTable {
        match self {
            StageProfile::Classic => StageTable(&CLASSIC_MULTIPLIERS),
            StageProfile::Extended => StageTable(&EXTENDED_MULTIPLIERS),
        }
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Default delay between a reveal and the jump to the next word.
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(1000);

/// How the drill moves past a word besides stepping through every stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMode {
    /// Only manual next/previous.
    Manual,
    /// A reveal control plays fireworks, then moves to the next word.
    Timed { delay: Duration },
}

impl Default for RevealMode {
    fn default() -> Self {
        RevealMode::Timed {
            delay: DEFAULT_REVEAL_DELAY,
        }
    }
}

/// Runtime configuration for a drill session.
#[derive(Debug, Clone)]
pub struct DrillConfig {
    /// Stage table selection.
    pub profile: StageProfile,
    /// Reveal behavior.
    pub reveal: RevealMode,
    /// Directory holding the persisted word list.
    /// Default: <data_dir>/geulgyeob/
    pub store_dir: PathBuf,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            profile: StageProfile::default(),
            reveal: RevealMode::default(),
            store_dir: PathBuf::new(), // Will be set at runtime
        }
    }
}

/// Output format for `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One numbered word per line.
    #[default]
    Human,
    /// JSON array of strings.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================
