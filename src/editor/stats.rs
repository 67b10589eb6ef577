//! Live document statistics
//!
//! Word, character, and paragraph counts recomputed from the plain-text
//! rendition of the document after every content change and shown in the
//! status bar.

// ─────────────────────────────────────────────────────────────────────────────
// DocumentStats
// ─────────────────────────────────────────────────────────────────────────────

/// Statistics for a document's plain text.
///
/// # Example
///
/// ```ignore
/// let stats = DocumentStats::from_text("Hello world.\n\nNew paragraph.");
/// assert_eq!(stats.words, 4);
/// assert_eq!(stats.paragraphs, 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentStats {
    /// Number of words (maximal runs of non-whitespace characters)
    pub words: usize,
    /// Number of characters, whitespace included
    pub characters: usize,
    /// Number of paragraphs (non-empty blocks separated by blank lines)
    pub paragraphs: usize,
}

impl DocumentStats {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate all statistics from the given text in one pass.
    ///
    /// Empty and whitespace-only text counts zero words and zero
    /// paragraphs; the character count is always the raw length.
    pub fn from_text(text: &str) -> Self {
        let mut stats = Self::new();

        let mut in_word = false;
        let mut paragraph_has_content = false;
        let mut consecutive_newlines = 0;

        for ch in text.chars() {
            stats.characters += 1;

            if ch.is_whitespace() {
                in_word = false;
                if ch == '\n' {
                    consecutive_newlines += 1;
                    // A blank line closes the current paragraph
                    if consecutive_newlines >= 2 && paragraph_has_content {
                        stats.paragraphs += 1;
                        paragraph_has_content = false;
                    }
                }
            } else {
                consecutive_newlines = 0;
                paragraph_has_content = true;
                if !in_word {
                    in_word = true;
                    stats.words += 1;
                }
            }
        }

        // Final paragraph if the text does not end with a blank line
        if paragraph_has_content {
            stats.paragraphs += 1;
        }

        stats
    }

    /// Format the statistics for the status bar.
    ///
    /// Returns a compact string like "150 words | 892 chars | 5 paragraphs".
    pub fn format_compact(&self) -> String {
        format!(
            "{} words | {} chars | {} paragraphs",
            self.words, self.characters, self.paragraphs
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ─────────────────────────────────────────────────────────────────────────
    // Word Count Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_stats_empty_text() {
        let stats = DocumentStats::from_text("");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.characters, 0);
        assert_eq!(stats.paragraphs, 0);
    }

    #[test]
    fn test_stats_whitespace_only() {
        let stats = DocumentStats::from_text("   \n\n \t ");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.characters, 8);
        assert_eq!(stats.paragraphs, 0);
    }

    #[test]
    fn test_stats_single_word() {
        let stats = DocumentStats::from_text("Hello");
        assert_eq!(stats.words, 1);
        assert_eq!(stats.characters, 5);
        assert_eq!(stats.paragraphs, 1);
    }

    #[test]
    fn test_stats_simple_sentence() {
        let stats = DocumentStats::from_text("Hello, World!");
        assert_eq!(stats.words, 2);
        assert_eq!(stats.characters, 13);
    }

    #[test]
    fn test_stats_mixed_whitespace_separators() {
        let stats = DocumentStats::from_text("one  two\t\tthree\nfour");
        assert_eq!(stats.words, 4);
    }

    #[test]
    fn test_stats_unicode_counts_chars_not_bytes() {
        let stats = DocumentStats::from_text("Привет мир");
        assert_eq!(stats.words, 2);
        assert_eq!(stats.characters, 10);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Paragraph Count Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_stats_single_paragraph_across_lines() {
        let stats = DocumentStats::from_text("Line one\nLine two\nLine three");
        assert_eq!(stats.paragraphs, 1);
    }

    #[test]
    fn test_stats_blank_line_separates_paragraphs() {
        let stats = DocumentStats::from_text("First paragraph.\n\nSecond paragraph.");
        assert_eq!(stats.paragraphs, 2);
        assert_eq!(stats.words, 4);
    }

    #[test]
    fn test_stats_multiple_blank_lines_count_once() {
        let stats = DocumentStats::from_text("one\n\n\n\ntwo");
        assert_eq!(stats.paragraphs, 2);
    }

    #[test]
    fn test_stats_trailing_blank_lines() {
        let stats = DocumentStats::from_text("only paragraph\n\n");
        assert_eq!(stats.paragraphs, 1);
    }

    #[test]
    fn test_stats_three_paragraphs() {
        let text = "Intro here.\n\nBody one.\nBody continues.\n\nClosing.";
        let stats = DocumentStats::from_text(text);
        assert_eq!(stats.paragraphs, 3);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Formatting Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_stats_format_compact() {
        let stats = DocumentStats {
            words: 150,
            characters: 892,
            paragraphs: 5,
        };
        assert_eq!(stats.format_compact(), "150 words | 892 chars | 5 paragraphs");
    }

    #[test]
    fn test_stats_default_is_zero() {
        let stats = DocumentStats::default();
        assert_eq!(stats.words, 0);
        assert_eq!(stats.characters, 0);
        assert_eq!(stats.paragraphs, 0);
    }
}
