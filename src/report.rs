//! Word list formatting for the `list` command.
//!
//! Pure functions: (WordList, OutputFormat) → String.
//! No I/O, no side effects.

use crate::types::{OutputFormat, WordList};

/// Format the word list for output.
pub fn format_words(words: &WordList, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(words),
        OutputFormat::Json => format_json(words),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(words: &WordList) -> String {
    if words.is_empty() {
        return "No words saved.\n".to_string();
    }

    let width = words.len().to_string().len();
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        out.push_str(&format!("{:>width$}. {}\n", i + 1, word, width = width));
    }
    out.push_str(&format!("\n{} word{}\n", words.len(), if words.len() == 1 { "" } else { "s" }));
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(words: &WordList) -> String {
    // A list of strings always serializes
    serde_json::to_string_pretty(words).unwrap_or_else(|_| "[]".to_string())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WordList {
        WordList::from_entries(["글자", "겹침", "글자"])
    }

    #[test]
    fn human_format_numbers_from_one() {
        let output = format_words(&sample(), OutputFormat::Human);
        assert!(output.starts_with("1. 글자\n2. 겹침\n3. 글자\n"));
        assert!(output.contains("3 words"));
    }

    #[test]
    fn human_format_pads_numbers() {
        let words = WordList::from_entries((1..=10).map(|i| format!("w{}", i)));
        let output = format_words(&words, OutputFormat::Human);
        assert!(output.starts_with(" 1. w1\n"));
        assert!(output.contains("10. w10\n"));
    }

    #[test]
    fn human_format_singular() {
        let output = format_words(&WordList::from_entries(["가"]), OutputFormat::Human);
        assert!(output.contains("1 word\n"));
    }

    #[test]
    fn human_format_empty() {
        let output = format_words(&WordList::default(), OutputFormat::Human);
        assert_eq!(output, "No words saved.\n");
    }

    #[test]
    fn json_format_is_array_in_order() {
        let output = format_words(&sample(), OutputFormat::Json);
        let parsed: Vec<String> = serde_json::from_str(&output).expect("valid JSON");
        assert_eq!(parsed, vec!["글자", "겹침", "글자"]);
    }

    #[test]
    fn json_format_empty() {
        let output = format_words(&WordList::default(), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 0);
    }
}
