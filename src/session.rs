//! Session controller: the single owner of all mutable drill state.
//!
//! Holds the canonical word list, the editor draft, the drill position,
//! the current screen and any pending reveal. Every entry point the front
//! end calls lives here; the pure pieces it delegates to are in `editor`
//! and `drill`.
//!
//! Reveal tickets: each scheduled reveal gets a fresh generation number.
//! Leaving a screen bumps the generation, so a timer that fires late hands
//! back a ticket that no longer matches and is ignored.

use std::time::Duration;

use tracing::{debug, error, warn};

use crate::drill::{self, DrillState, Glyph};
use crate::editor::{begin_edit, EditorDraft};
use crate::error::{EditorError, StoreError};
use crate::store::{KeyValueStore, WordStore};
use crate::types::{RevealMode, StageProfile, StageTable, WordList};

/// Advisory shown when a drill is started with no words.
pub const EMPTY_LIST_NOTICE: &str = "먼저 \"제작\" 메뉴에서 단어를 추가해주세요!";

/// Text shown in place of the word once the drill is over.
pub const FINISHED_TEXT: &str = "끝";

// ============================================================================
// TYPES
// ============================================================================

/// The three top-level screens. Exactly one is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Menu,
    Editor,
    Drill,
}

/// Message for the user, shown until dismissed by the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Drill start was refused because the list is empty.
    EmptyWordList,
    /// Saving the list failed; the in-memory list was still updated.
    SaveFailed(String),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::EmptyWordList => EMPTY_LIST_NOTICE.to_string(),
            Notice::SaveFailed(reason) => format!("저장 실패: {}", reason),
        }
    }
}

/// Result of [`Session::start_drill`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// The drill screen is showing at (0, 0).
    Started,
    /// The list was empty; the editor is showing with a notice.
    NeedsWords,
}

/// Token for one scheduled reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTicket(u64);

/// Label of the forward control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextLabel {
    /// Mid-word: next stage.
    Next,
    /// Last stage: next word.
    NextQuestion,
    /// Drill over: back to the menu.
    BackToMenu,
}

impl NextLabel {
    pub fn text(self) -> &'static str {
        match self {
            NextLabel::Next => "다음",
            NextLabel::NextQuestion => "다음 문항",
            NextLabel::BackToMenu => "메인화면으로",
        }
    }
}

/// Everything the drill screen needs, derived from the session.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    /// Current word, None once finished.
    pub word: Option<String>,
    /// Laid-out characters of the current word.
    pub glyphs: Vec<Glyph>,
    /// Largest multiplier of the stage table, for sizing the word area.
    pub widest: f64,
    /// 1-based stage number while active.
    pub stage: Option<usize>,
    /// 1-based word number while active.
    pub word_number: Option<usize>,
    pub finished: bool,
    /// Back control visible (hidden at (0, 0) and when finished).
    pub show_back: bool,
    /// Reveal control visible (timed mode, active, nothing pending).
    pub show_reveal: bool,
    pub next_label: NextLabel,
}

impl RenderState {
    pub fn stage_label(&self) -> Option<String> {
        self.stage.map(|s| format!("{}단계", s))
    }

    pub fn question_label(&self) -> Option<String> {
        self.word_number.map(|n| format!("{}번 문제", n))
    }
}

// ============================================================================
// SESSION
// ============================================================================

/// Controller owning all state for one run of the app.
#[derive(Debug)]
pub struct Session<S> {
    store: WordStore<S>,
    stages: StageTable,
    reveal_mode: RevealMode,
    words: WordList,
    draft: Option<EditorDraft>,
    drill: DrillState,
    screen: Screen,
    notice: Option<Notice>,
    generation: u64,
    pending_reveal: Option<u64>,
}

impl<S: KeyValueStore> Session<S> {
    /// Load the word list and land on the menu.
    pub fn open(store: WordStore<S>, profile: StageProfile, reveal_mode: RevealMode) -> Self {
        let words = store.load();
        Session {
            store,
            stages: profile.table(),
            reveal_mode,
            words,
            draft: None,
            drill: DrillState::Finished,
            screen: Screen::Menu,
            notice: None,
            generation: 0,
            pending_reveal: None,
        }
    }

    // -- Accessors --

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn drill_state(&self) -> DrillState {
        self.drill
    }

    pub fn stages(&self) -> StageTable {
        self.stages
    }

    /// Delay to wait before handing a ticket back, in timed mode.
    pub fn reveal_delay(&self) -> Option<Duration> {
        match self.reveal_mode {
            RevealMode::Timed { delay } => Some(delay),
            RevealMode::Manual => None,
        }
    }

    pub fn is_revealing(&self) -> bool {
        self.pending_reveal.is_some()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    // -- Screen router --

    /// Make `screen` current. Leaving a screen cancels any pending reveal;
    /// leaving the editor discards the draft.
    pub fn show(&mut self, screen: Screen) {
        if screen == self.screen {
            return;
        }
        debug!(from = ?self.screen, to = ?screen, "switching screen");
        if self.screen == Screen::Editor {
            self.draft = None;
        }
        self.cancel_reveal();
        self.screen = screen;
    }

    pub fn return_to_menu(&mut self) {
        self.show(Screen::Menu);
    }

    // -- Editor --

    /// Open the editor on a fresh copy of the current list.
    pub fn open_editor(&mut self) {
        self.show(Screen::Editor);
        self.draft = Some(begin_edit(&self.words));
    }

    /// Words in the draft; empty when the editor is closed.
    pub fn editor_list(&self) -> &[String] {
        self.draft.as_ref().map(EditorDraft::words).unwrap_or(&[])
    }

    /// Append a word to the draft. Blank input is ignored.
    pub fn add_word(&mut self, text: &str) -> bool {
        match self.draft.as_mut() {
            Some(draft) => draft.add_word(text),
            None => {
                warn!("add_word called with the editor closed");
                false
            }
        }
    }

    /// Remove a word from the draft by index.
    pub fn remove_word(&mut self, index: usize) -> Result<String, EditorError> {
        match self.draft.as_mut() {
            Some(draft) => draft.remove_word(index),
            None => Err(EditorError::IndexOutOfRange { index, len: 0 }),
        }
    }

    /// Commit the draft, persist it and return to the menu.
    ///
    /// On a failed write the in-memory list still takes the draft and a
    /// notice is raised; the error is returned for logging.
    pub fn save_and_return(&mut self) -> Result<(), StoreError> {
        let result = match self.draft.take() {
            Some(draft) => {
                self.words = draft.commit();
                self.store.save(&self.words)
            }
            None => Ok(()),
        };
        if let Err(e) = &result {
            error!(error = %e, "failed to save word list");
            self.notice = Some(Notice::SaveFailed(e.to_string()));
        }
        self.show(Screen::Menu);
        result
    }

    // -- Drill --

    /// Start at (0, 0), or redirect to the editor when there are no words.
    pub fn start_drill(&mut self) -> StartOutcome {
        match DrillState::start(self.words.len()) {
            Some(state) => {
                self.cancel_reveal();
                self.drill = state;
                self.show(Screen::Drill);
                debug!(words = self.words.len(), stages = self.stages.len(), "drill started");
                StartOutcome::Started
            }
            None => {
                self.open_editor();
                self.notice = Some(Notice::EmptyWordList);
                StartOutcome::NeedsWords
            }
        }
    }

    fn accepts_drill_input(&self) -> bool {
        self.screen == Screen::Drill && self.pending_reveal.is_none()
    }

    pub fn advance(&mut self) -> DrillState {
        if self.accepts_drill_input() {
            self.drill = drill::advance(self.drill, self.words.len(), self.stages);
            debug!(state = ?self.drill, "advance");
        }
        self.drill
    }

    pub fn retreat(&mut self) -> DrillState {
        if self.accepts_drill_input() {
            self.drill = drill::retreat(self.drill, self.stages);
            debug!(state = ?self.drill, "retreat");
        }
        self.drill
    }

    /// Schedule a move to the next word. Only in timed mode, while active
    /// and with nothing already pending.
    pub fn reveal(&mut self) -> Option<RevealTicket> {
        if self.reveal_delay().is_none() || !self.accepts_drill_input() || self.drill.is_finished()
        {
            return None;
        }
        self.generation += 1;
        self.pending_reveal = Some(self.generation);
        debug!(generation = self.generation, "reveal scheduled");
        Some(RevealTicket(self.generation))
    }

    /// Timer callback. Applies the reveal only if `ticket` is still the
    /// pending one; returns whether anything changed.
    pub fn reveal_elapsed(&mut self, ticket: RevealTicket) -> bool {
        if self.screen != Screen::Drill || self.pending_reveal != Some(ticket.0) {
            debug!(generation = ticket.0, "stale reveal ignored");
            return false;
        }
        self.pending_reveal = None;
        self.drill = drill::skip_word(self.drill, self.words.len());
        debug!(state = ?self.drill, "reveal applied");
        true
    }

    fn cancel_reveal(&mut self) {
        if self.pending_reveal.take().is_some() {
            debug!("pending reveal canceled");
        }
        self.generation += 1;
    }

    /// Snapshot for the drill screen.
    pub fn render_state(&self) -> RenderState {
        let active = self
            .drill
            .position()
            .and_then(|(w, s)| Some((w, s, self.words.get(w)?, self.stages.multiplier(s)?)));

        match active {
            Some((w, s, word, multiplier)) => RenderState {
                word: Some(word.to_string()),
                glyphs: drill::layout_glyphs(word, multiplier),
                widest: self.stages.widest(),
                stage: Some(s + 1),
                word_number: Some(w + 1),
                finished: false,
                show_back: (w, s) != (0, 0),
                show_reveal: self.reveal_delay().is_some() && self.pending_reveal.is_none(),
                next_label: if s == self.stages.last_stage() {
                    NextLabel::NextQuestion
                } else {
                    NextLabel::Next
                },
            },
            None => RenderState {
                word: None,
                glyphs: Vec::new(),
                widest: self.stages.widest(),
                stage: None,
                word_number: None,
                finished: true,
                show_back: false,
                show_reveal: false,
                next_label: NextLabel::BackToMenu,
            },
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
