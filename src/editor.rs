//! Draft editing: an uncommitted working copy of the word list.
//!
//! Pure data manipulation. The session decides when a draft is created,
//! discarded or committed.

use crate::error::EditorError;
use crate::types::WordList;

/// Working copy of the word list while the editor is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorDraft {
    words: Vec<String>,
}

/// Start editing from the current canonical list.
pub fn begin_edit(current: &WordList) -> EditorDraft {
    EditorDraft {
        words: current.as_slice().to_vec(),
    }
}

impl EditorDraft {
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Append `text` after trimming. Blank input is ignored.
    ///
    /// Returns true when a word was appended.
    pub fn add_word(&mut self, text: &str) -> bool {
        let word = text.trim();
        if word.is_empty() {
            return false;
        }
        self.words.push(word.to_string());
        true
    }

    /// Remove the word at `index`, returning it.
    ///
    /// Callers only pass indices of listed words; an out-of-range index is a
    /// bug, asserted in debug builds and reported as an error otherwise.
    pub fn remove_word(&mut self, index: usize) -> Result<String, EditorError> {
        let len = self.words.len();
        debug_assert!(index < len, "remove_word index {index} out of range ({len})");
        if index >= len {
            return Err(EditorError::IndexOutOfRange { index, len });
        }
        Ok(self.words.remove(index))
    }

    /// Turn the draft into the new canonical list.
    pub fn commit(self) -> WordList {
        WordList::from_entries(self.words)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(items: &[&str]) -> EditorDraft {
        begin_edit(&WordList::from_entries(items.iter().copied()))
    }

    #[test]
    fn begin_edit_clones_current_list() {
        let list = WordList::from_entries(["글자", "겹침"]);
        let mut d = begin_edit(&list);
        d.add_word("추가");
        assert_eq!(list.len(), 2);
        assert_eq!(d.len(), 3);
    }

    #[test]
    fn add_word_appends_trimmed_text() {
        let mut d = draft(&["가"]);
        assert!(d.add_word("  나다  "));
        assert_eq!(d.words(), &["가".to_string(), "나다".to_string()]);
    }

    #[test]
    fn add_word_ignores_whitespace_only_input() {
        let mut d = draft(&["가"]);
        for blank in ["", " ", "\t\n", "　"] {
            assert!(!d.add_word(blank));
        }
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn add_word_grows_by_exactly_one_at_end() {
        let mut d = draft(&["a", "b"]);
        for (i, text) in ["c", " d", "e "].iter().enumerate() {
            let before = d.len();
            d.add_word(text);
            assert_eq!(d.len(), before + 1);
            assert_eq!(d.words()[before], text.trim(), "iteration {i}");
        }
    }

    #[test]
    fn add_word_allows_duplicates() {
        let mut d = draft(&["가"]);
        d.add_word("가");
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn remove_word_preserves_order_of_rest() {
        let mut d = draft(&["a", "b", "c", "d"]);
        assert_eq!(d.remove_word(1).unwrap(), "b");
        assert_eq!(d.words(), &["a".to_string(), "c".to_string(), "d".to_string()]);
        assert_eq!(d.remove_word(2).unwrap(), "d");
        assert_eq!(d.remove_word(0).unwrap(), "a");
        assert_eq!(d.words(), &["c".to_string()]);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn remove_word_out_of_range_is_error() {
        let mut d = draft(&["a"]);
        assert_eq!(
            d.remove_word(3),
            Err(EditorError::IndexOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(d.len(), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn remove_word_out_of_range_asserts_in_debug() {
        let mut d = draft(&["a"]);
        let _ = d.remove_word(3);
    }

    #[test]
    fn commit_becomes_word_list() {
        let mut d = draft(&["글자"]);
        d.add_word("겹침");
        let list = d.commit();
        assert_eq!(list, WordList::from_entries(["글자", "겹침"]));
    }
}
