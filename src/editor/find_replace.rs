//! Find and replace
//!
//! Search runs over the plain-text rendition of the document so matches
//! line up with what the user sees; the match is then mapped back onto
//! the markup and selected. Replace All is different: it rewrites the raw
//! markup, not the text content. That matches the original behavior and
//! carries the same hazard, a search term that happens to occur inside a
//! tag or attribute is rewritten along with visible text.

#![allow(dead_code)]

use log::debug;
use regex::RegexBuilder;

// ─────────────────────────────────────────────────────────────────────────────
// Find State
// ─────────────────────────────────────────────────────────────────────────────

/// State for find/replace operations.
///
/// Matches are `(start, end)` byte positions into the plain text the last
/// search ran against.
#[derive(Debug, Clone, Default)]
pub struct FindState {
    /// Current search term
    pub search_term: String,
    /// Current replacement text
    pub replace_term: String,
    /// Current match index (0-indexed)
    pub current_match: usize,
    /// All matches as (start, end) byte positions in the searched text
    pub matches: Vec<(usize, usize)>,
}

impl FindState {
    /// Create a new FindState.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find all matches in the given text, case-insensitively.
    ///
    /// Updates `self.matches` and returns the number of matches found.
    pub fn find_matches(&mut self, text: &str) -> usize {
        self.matches.clear();

        if self.search_term.is_empty() {
            return 0;
        }

        let haystack = text.to_lowercase();
        let needle = self.search_term.to_lowercase();

        // Lowercasing can change byte lengths for some scripts; fall back
        // to a regex scan of the original text when it does.
        if haystack.len() == text.len() {
            let mut start = 0;
            while let Some(pos) = haystack[start..].find(&needle) {
                let match_start = start + pos;
                let match_end = match_start + needle.len();
                self.matches.push((match_start, match_end));
                start = match_end;
            }
        } else {
            match RegexBuilder::new(&regex::escape(&self.search_term))
                .case_insensitive(true)
                .build()
            {
                Ok(re) => {
                    for m in re.find_iter(text) {
                        self.matches.push((m.start(), m.end()));
                    }
                }
                Err(e) => debug!("Search pattern rejected: {}", e),
            }
        }

        if !self.matches.is_empty() && self.current_match >= self.matches.len() {
            self.current_match = 0;
        }

        self.matches.len()
    }

    /// Move to the next match, wrapping around.
    pub fn next_match(&mut self) -> Option<usize> {
        if self.matches.is_empty() {
            return None;
        }
        self.current_match = (self.current_match + 1) % self.matches.len();
        Some(self.current_match)
    }

    /// Move to the previous match, wrapping around.
    pub fn prev_match(&mut self) -> Option<usize> {
        if self.matches.is_empty() {
            return None;
        }
        self.current_match = if self.current_match == 0 {
            self.matches.len() - 1
        } else {
            self.current_match - 1
        };
        Some(self.current_match)
    }

    /// The current match position, or None if there are no matches.
    pub fn current_match_position(&self) -> Option<(usize, usize)> {
        self.matches.get(self.current_match).copied()
    }

    /// Clear all matches and reset the cursor.
    pub fn clear(&mut self) {
        self.matches.clear();
        self.current_match = 0;
    }

    /// Whether there are any matches.
    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Total number of matches.
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Find First
// ─────────────────────────────────────────────────────────────────────────────

/// Find the first case-insensitive occurrence of `term` in `text`.
///
/// Stateless: repeated invocation with the same term re-finds the same
/// first match. Returns `(start, end)` byte positions, or `None` for an
/// empty or absent term.
pub fn find_first(text: &str, term: &str) -> Option<(usize, usize)> {
    if term.is_empty() {
        return None;
    }
    let re = RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
        .ok()?;
    re.find(text).map(|m| (m.start(), m.end()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Replace All
// ─────────────────────────────────────────────────────────────────────────────

/// Replace every case-insensitive occurrence of `search` in the raw markup.
///
/// Returns `Some(new_markup)` if anything changed, `None` otherwise. The
/// replacement text is inserted literally.
///
/// This operates on the serialized markup, so occurrences inside tags or
/// attribute values are rewritten too. `<a class="cat">` with search "cat"
/// becomes `class="dog"`. Callers surface this as a known caveat rather
/// than guarding against it.
pub fn replace_all_in_markup(markup: &str, search: &str, replacement: &str) -> Option<String> {
    if search.is_empty() {
        return None;
    }

    let re = match RegexBuilder::new(&regex::escape(search))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re,
        Err(e) => {
            debug!("Replace pattern rejected: {}", e);
            return None;
        }
    };

    if !re.is_match(markup) {
        return None;
    }

    Some(
        re.replace_all(markup, regex::NoExpand(replacement))
            .into_owned(),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ─────────────────────────────────────────────────────────────────────────
    // FindState Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_find_state_new() {
        let state = FindState::new();
        assert!(state.search_term.is_empty());
        assert!(state.replace_term.is_empty());
        assert_eq!(state.current_match, 0);
        assert!(state.matches.is_empty());
    }

    #[test]
    fn test_find_matches_empty_search() {
        let mut state = FindState::new();
        let count = state.find_matches("Hello, World!");
        assert_eq!(count, 0);
    }

    #[test]
    fn test_find_matches_basic() {
        let mut state = FindState::new();
        state.search_term = "Hello".to_string();
        let count = state.find_matches("Hello, Hello, Hello!");
        assert_eq!(count, 3);
        assert_eq!(state.matches, vec![(0, 5), (7, 12), (14, 19)]);
    }

    #[test]
    fn test_find_matches_case_insensitive() {
        let mut state = FindState::new();
        state.search_term = "hello".to_string();
        let count = state.find_matches("Hello, HELLO, hello!");
        assert_eq!(count, 3);
    }

    #[test]
    fn test_find_matches_not_found() {
        let mut state = FindState::new();
        state.search_term = "missing".to_string();
        assert_eq!(state.find_matches("nothing here"), 0);
        assert!(!state.has_matches());
    }

    #[test]
    fn test_find_non_overlapping() {
        let mut state = FindState::new();
        state.search_term = "aa".to_string();
        let count = state.find_matches("aaaa");
        assert_eq!(count, 2);
        assert_eq!(state.matches, vec![(0, 2), (2, 4)]);
    }

    #[test]
    fn test_next_match_wraps() {
        let mut state = FindState::new();
        state.search_term = "x".to_string();
        state.find_matches("axbxcx");
        assert_eq!(state.current_match, 0);

        state.next_match();
        assert_eq!(state.current_match, 1);
        state.next_match();
        assert_eq!(state.current_match, 2);
        state.next_match();
        assert_eq!(state.current_match, 0);
    }

    #[test]
    fn test_prev_match_wraps() {
        let mut state = FindState::new();
        state.search_term = "x".to_string();
        state.find_matches("axbxcx");

        state.prev_match();
        assert_eq!(state.current_match, 2);
    }

    #[test]
    fn test_next_prev_no_matches() {
        let mut state = FindState::new();
        assert!(state.next_match().is_none());
        assert!(state.prev_match().is_none());
    }

    #[test]
    fn test_current_match_position() {
        let mut state = FindState::new();
        state.search_term = "world".to_string();
        state.find_matches("hello world wide world");
        assert_eq!(state.current_match_position(), Some((6, 11)));

        state.next_match();
        assert_eq!(state.current_match_position(), Some((17, 22)));
    }

    #[test]
    fn test_current_match_clamp_after_research() {
        let mut state = FindState::new();
        state.search_term = "x".to_string();
        state.find_matches("xxxxx");
        state.current_match = 4;

        state.search_term = "y".to_string();
        state.find_matches("xy");
        assert_eq!(state.current_match, 0);
    }

    #[test]
    fn test_clear() {
        let mut state = FindState::new();
        state.search_term = "t".to_string();
        state.find_matches("t t t");
        state.next_match();

        state.clear();
        assert!(state.matches.is_empty());
        assert_eq!(state.current_match, 0);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Find First Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_find_first_case_insensitive() {
        assert_eq!(find_first("The Cat sat", "cat"), Some((4, 7)));
    }

    #[test]
    fn test_find_first_is_stateless() {
        let text = "cat cat cat";
        assert_eq!(find_first(text, "cat"), Some((0, 3)));
        assert_eq!(find_first(text, "cat"), Some((0, 3)));
    }

    #[test]
    fn test_find_first_empty_or_absent() {
        assert_eq!(find_first("hello", ""), None);
        assert_eq!(find_first("hello", "xyz"), None);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Replace All Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_replace_all_in_text_content() {
        let result = replace_all_in_markup("<p>cat sat</p>", "cat", "dog");
        assert_eq!(result.as_deref(), Some("<p>dog sat</p>"));
    }

    #[test]
    fn test_replace_all_case_insensitive() {
        let result = replace_all_in_markup("Cat CAT cat", "cat", "dog");
        assert_eq!(result.as_deref(), Some("dog dog dog"));
    }

    #[test]
    fn test_replace_all_no_match_returns_none() {
        assert!(replace_all_in_markup("hello", "missing", "x").is_none());
    }

    #[test]
    fn test_replace_all_empty_search_returns_none() {
        assert!(replace_all_in_markup("hello", "", "x").is_none());
    }

    #[test]
    fn test_replace_all_rewrites_inside_tags() {
        // Known caveat: attribute values are fair game
        let result = replace_all_in_markup(r#"<a class="cat">cat</a>"#, "cat", "dog");
        assert_eq!(result.as_deref(), Some(r#"<a class="dog">dog</a>"#));
    }

    #[test]
    fn test_replace_all_literal_replacement() {
        // $ in the replacement must not be treated as a capture reference
        let result = replace_all_in_markup("price", "price", "$100");
        assert_eq!(result.as_deref(), Some("$100"));
    }

    #[test]
    fn test_replace_all_regex_metachars_in_search_are_literal() {
        let result = replace_all_in_markup("a.c abc", "a.c", "X");
        assert_eq!(result.as_deref(), Some("X abc"));
    }

    #[test]
    fn test_replace_all_empty_replacement() {
        let result = replace_all_in_markup("one two one", "one ", "");
        assert_eq!(result.as_deref(), Some("two one"));
    }
}
