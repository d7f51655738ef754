//! Drill state machine and glyph layout.
//!
//! Pure functions over (word, stage) positions. The word count and the
//! stage table are passed in; nothing here owns the word list.

use crate::types::StageTable;

/// Position in the drill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrillState {
    /// Showing word `word` at spacing stage `stage`.
    Active { word: usize, stage: usize },
    /// Past the last word. Only "return to menu" leaves this state.
    Finished,
}

impl DrillState {
    /// Initial state for a list of `word_count` words.
    ///
    /// None when the list is empty: the drill cannot start.
    pub fn start(word_count: usize) -> Option<Self> {
        (word_count > 0).then_some(DrillState::Active { word: 0, stage: 0 })
    }

    pub fn is_finished(self) -> bool {
        self == DrillState::Finished
    }

    /// (word, stage) while active.
    pub fn position(self) -> Option<(usize, usize)> {
        match self {
            DrillState::Active { word, stage } => Some((word, stage)),
            DrillState::Finished => None,
        }
    }
}

/// Step forward one stage, rolling over to the next word after the last stage.
pub fn advance(state: DrillState, word_count: usize, stages: StageTable) -> DrillState {
    match state {
        DrillState::Active { word, stage } if stage < stages.last_stage() => {
            DrillState::Active { word, stage: stage + 1 }
        }
        DrillState::Active { word, .. } => next_word(word, word_count),
        DrillState::Finished => DrillState::Finished,
    }
}

/// Step back one stage, rolling back to the previous word's last stage.
/// `Active(0, 0)` and `Finished` are fixed points.
pub fn retreat(state: DrillState, stages: StageTable) -> DrillState {
    match state {
        DrillState::Active { word, stage } if stage > 0 => {
            DrillState::Active { word, stage: stage - 1 }
        }
        DrillState::Active { word, .. } if word > 0 => DrillState::Active {
            word: word - 1,
            stage: stages.last_stage(),
        },
        other => other,
    }
}

/// Jump to stage 0 of the next word regardless of the current stage.
pub fn skip_word(state: DrillState, word_count: usize) -> DrillState {
    match state {
        DrillState::Active { word, .. } => next_word(word, word_count),
        DrillState::Finished => DrillState::Finished,
    }
}

fn next_word(word: usize, word_count: usize) -> DrillState {
    let word = word + 1;
    if word >= word_count {
        DrillState::Finished
    } else {
        DrillState::Active { word, stage: 0 }
    }
}

// ============================================================================
// LAYOUT
// ============================================================================

/// One character of a word and its horizontal shift from center,
/// in character-width units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub offset: f64,
}

/// Lay out `word` around its center: character `i` shifts by
/// `(i - (len - 1) / 2) * multiplier`.
pub fn layout_glyphs(word: &str, multiplier: f64) -> Vec<Glyph> {
    let len = word.chars().count();
    let middle = (len as f64 - 1.0) / 2.0;
    word.chars()
        .enumerate()
        .map(|(i, ch)| Glyph {
            ch,
            offset: (i as f64 - middle) * multiplier,
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StageProfile;

    fn classic() -> StageTable {
        StageProfile::Classic.table()
    }

    fn active(word: usize, stage: usize) -> DrillState {
        DrillState::Active { word, stage }
    }

    #[test]
    fn start_requires_words() {
        assert_eq!(DrillState::start(0), None);
        assert_eq!(DrillState::start(2), Some(active(0, 0)));
    }

    #[test]
    fn advance_increments_stage() {
        assert_eq!(advance(active(0, 3), 2, classic()), active(0, 4));
    }

    #[test]
    fn advancing_stage_count_times_moves_to_next_word() {
        let stages = classic();
        let mut state = active(1, 0);
        for _ in 0..stages.len() {
            state = advance(state, 3, stages);
        }
        assert_eq!(state, active(2, 0));
    }

    #[test]
    fn advance_past_last_word_finishes_and_stays_finished() {
        let stages = classic();
        let mut state = advance(active(1, 7), 2, stages);
        assert_eq!(state, DrillState::Finished);
        for _ in 0..3 {
            state = advance(state, 2, stages);
            assert_eq!(state, DrillState::Finished);
        }
    }

    #[test]
    fn two_word_walkthrough_with_eight_stages() {
        let stages = classic();
        let mut state = DrillState::start(2).unwrap();
        assert_eq!(state, active(0, 0));

        for _ in 0..7 {
            state = advance(state, 2, stages);
        }
        assert_eq!(state, active(0, 7));

        state = advance(state, 2, stages);
        assert_eq!(state, active(1, 0));

        for _ in 0..7 {
            state = advance(state, 2, stages);
        }
        assert_eq!(state, active(1, 7));

        state = advance(state, 2, stages);
        assert_eq!(state, DrillState::Finished);
    }

    #[test]
    fn ten_stage_profile_rolls_over_at_nine() {
        let stages = StageProfile::Extended.table();
        assert_eq!(advance(active(0, 8), 2, stages), active(0, 9));
        assert_eq!(advance(active(0, 9), 2, stages), active(1, 0));
    }

    #[test]
    fn retreat_at_origin_is_noop() {
        assert_eq!(retreat(active(0, 0), classic()), active(0, 0));
    }

    #[test]
    fn retreat_from_stage_zero_goes_to_previous_words_last_stage() {
        assert_eq!(retreat(active(2, 0), classic()), active(1, 7));
    }

    #[test]
    fn retreat_decrements_stage() {
        assert_eq!(retreat(active(1, 5), classic()), active(1, 4));
    }

    #[test]
    fn retreat_while_finished_is_noop() {
        assert_eq!(retreat(DrillState::Finished, classic()), DrillState::Finished);
    }

    #[test]
    fn skip_word_resets_stage() {
        assert_eq!(skip_word(active(0, 4), 3), active(1, 0));
        assert_eq!(skip_word(active(2, 4), 3), DrillState::Finished);
        assert_eq!(skip_word(DrillState::Finished, 3), DrillState::Finished);
    }

    #[test]
    fn middle_glyph_of_odd_word_is_centered() {
        let glyphs = layout_glyphs("가나다", 0.3);
        assert_eq!(glyphs.len(), 3);
        assert_eq!(glyphs[1].ch, '나');
        assert_eq!(glyphs[1].offset, 0.0);
        assert!((glyphs[0].offset + 0.3).abs() < 1e-9);
        assert!((glyphs[2].offset - 0.3).abs() < 1e-9);
    }

    #[test]
    fn even_word_is_symmetric_about_center() {
        let glyphs = layout_glyphs("글자", 1.0);
        assert_eq!(glyphs[0].offset, -0.5);
        assert_eq!(glyphs[1].offset, 0.5);
    }

    #[test]
    fn zero_multiplier_overlaps_everything() {
        assert!(layout_glyphs("겹침연습", 0.0).iter().all(|g| g.offset == 0.0));
    }

    #[test]
    fn empty_word_has_no_glyphs() {
        assert!(layout_glyphs("", 1.0).is_empty());
    }
}
