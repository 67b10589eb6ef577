//! The editable surface and its capability interface
//!
//! The original design delegated all text mutation to a host-provided
//! rich-text command facility addressed by name. Here that facility is the
//! `RichTextHost` trait: callers dispatch `(command name, optional value)`
//! pairs and the host's serialized markup is authoritative over content.
//!
//! Two hosts exist: `MarkupSurface`, the shipping implementation that owns
//! the markup string and applies tag-wrapping commands to the current
//! selection, and `RecordingHost`, a test double that records invocations
//! so dispatch logic can be unit-tested without a surface.

#![allow(dead_code)]

use crate::document::{markup_to_text, BLOCK_BREAK_TAGS, ENTITIES};
use log::debug;

// ─────────────────────────────────────────────────────────────────────────────
// Capability Trait
// ─────────────────────────────────────────────────────────────────────────────

/// The rich-text command facility.
///
/// Commands are addressed by name with an optional string value, mirroring
/// a classic editing-command API. Unknown command names are silent no-ops;
/// there is no return value and no error channel by contract.
pub trait RichTextHost {
    /// Execute a named command against the current selection.
    fn exec(&mut self, name: &str, value: Option<&str>);

    /// The serialized markup of the surface.
    fn markup(&self) -> String;

    /// Replace the entire surface content.
    fn set_markup(&mut self, markup: String);

    /// The plain-text rendition of the surface content.
    fn plain_text(&self) -> String {
        markup_to_text(&self.markup())
    }

    /// Current selection as byte offsets into the markup, if any.
    fn selection(&self) -> Option<(usize, usize)>;

    /// Set or clear the selection (byte offsets into the markup).
    fn select(&mut self, range: Option<(usize, usize)>);

    /// Move the selection to cover a plain-text char range.
    ///
    /// Returns `false` if the range could not be mapped onto the markup.
    fn select_text_range(&mut self, start: usize, end: usize) -> bool {
        match map_text_range_to_markup(&self.markup(), start, end) {
            Some(range) => {
                self.select(Some(range));
                true
            }
            None => false,
        }
    }

    /// Undo the last mutation. Returns `true` if anything was undone.
    fn undo(&mut self) -> bool;

    /// Redo the last undone mutation. Returns `true` if anything was redone.
    fn redo(&mut self) -> bool;
}

// ─────────────────────────────────────────────────────────────────────────────
// Text Range Mapping
// ─────────────────────────────────────────────────────────────────────────────

/// Map a plain-text char range onto markup byte offsets.
///
/// Replays the same scan as [`markup_to_text`] so that offsets produced by
/// searching the plain text land on the corresponding markup region:
/// tags are skipped, block-closing tags count as the newline they emit,
/// and known entities count as a single text char.
pub fn map_text_range_to_markup(
    markup: &str,
    start: usize,
    end: usize,
) -> Option<(usize, usize)> {
    if start > end {
        return None;
    }

    let mut text_pos = 0usize;
    let mut byte_start = None;
    let mut byte_end = None;
    let mut last_emitted_newline = false;

    let record = |text_pos: usize,
                      src_start: usize,
                      src_end: usize,
                      byte_start: &mut Option<usize>,
                      byte_end: &mut Option<usize>| {
        if text_pos == start && byte_start.is_none() {
            *byte_start = Some(src_start);
        }
        if text_pos + 1 == end {
            *byte_end = Some(src_end);
        }
    };

    let mut iter = markup.char_indices().peekable();
    while let Some((i, ch)) = iter.next() {
        match ch {
            '<' => {
                let tag_start = i;
                let mut tag = String::new();
                let mut tag_end = markup.len();
                for (j, c) in iter.by_ref() {
                    if c == '>' {
                        tag_end = j + c.len_utf8();
                        break;
                    }
                    tag.push(c);
                }
                let name = tag
                    .split_whitespace()
                    .next()
                    .unwrap_or("")
                    .trim_end_matches('/')
                    .to_ascii_lowercase();
                if BLOCK_BREAK_TAGS.contains(&name.as_str()) && !last_emitted_newline {
                    record(text_pos, tag_start, tag_end, &mut byte_start, &mut byte_end);
                    text_pos += 1;
                    last_emitted_newline = true;
                }
            }
            '&' => {
                let rest = &markup[i + 1..];
                let mut consumed = 0;
                for (entity, _) in ENTITIES {
                    if rest.starts_with(entity) {
                        consumed = entity.len();
                        break;
                    }
                }
                let src_end = i + 1 + consumed;
                record(text_pos, i, src_end, &mut byte_start, &mut byte_end);
                text_pos += 1;
                last_emitted_newline = false;
                for _ in 0..consumed {
                    iter.next();
                }
            }
            _ => {
                record(
                    text_pos,
                    i,
                    i + ch.len_utf8(),
                    &mut byte_start,
                    &mut byte_end,
                );
                text_pos += 1;
                last_emitted_newline = ch == '\n';
            }
        }
        if byte_end.is_some() {
            break;
        }
    }

    // Collapsed range at the very end of the text
    if start == end {
        if start == text_pos {
            return Some((markup.len(), markup.len()));
        }
        return byte_start.map(|s| (s, s));
    }

    match (byte_start, byte_end) {
        (Some(s), Some(e)) => Some((s, e)),
        _ => None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// MarkupSurface
// ─────────────────────────────────────────────────────────────────────────────

/// The shipping editable surface.
///
/// Owns the serialized markup, the selection, and bounded undo/redo
/// history. All formatting commands wrap the selected markup region in
/// inline tags; insertion commands splice at the caret.
#[derive(Debug, Clone)]
pub struct MarkupSurface {
    markup: String,
    selection: Option<(usize, usize)>,
    undo_stack: Vec<String>,
    redo_stack: Vec<String>,
    max_undo: usize,
}

impl MarkupSurface {
    /// Maximum retained undo snapshots.
    const MAX_UNDO: usize = 100;

    /// Create an empty surface.
    pub fn new() -> Self {
        Self {
            markup: String::new(),
            selection: None,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_undo: Self::MAX_UNDO,
        }
    }

    /// Create a surface with initial markup.
    pub fn with_markup(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            ..Self::new()
        }
    }

    /// Record that the markup was edited externally (e.g., by the text
    /// widget mutating the buffer directly), passing the content from
    /// before the edit.
    pub fn record_edit(&mut self, old_markup: String) {
        if old_markup != self.markup {
            self.push_undo_snapshot(old_markup);
        }
    }

    /// Whether undo history is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether redo history is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Direct mutable access to the markup buffer for the text widget.
    ///
    /// Callers that mutate through this must follow up with
    /// [`MarkupSurface::record_edit`].
    pub fn markup_mut(&mut self) -> &mut String {
        &mut self.markup
    }

    /// Borrow the markup without cloning.
    pub fn markup_ref(&self) -> &str {
        &self.markup
    }

    fn push_undo_snapshot(&mut self, snapshot: String) {
        self.undo_stack.push(snapshot);
        if self.undo_stack.len() > self.max_undo {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
    }

    fn push_undo(&mut self) {
        let snapshot = self.markup.clone();
        self.push_undo_snapshot(snapshot);
    }

    /// Current selection clamped and ordered, or `None`.
    fn normalized_selection(&self) -> Option<(usize, usize)> {
        let (a, b) = self.selection?;
        let len = self.markup.len();
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        if start > len || end > len {
            return None;
        }
        // Reject offsets that split a UTF-8 sequence
        if !self.markup.is_char_boundary(start) || !self.markup.is_char_boundary(end) {
            return None;
        }
        Some((start, end))
    }

    /// Wrap the selected region in a prefix/suffix tag pair.
    fn wrap_selection(&mut self, prefix: &str, suffix: &str) {
        let Some((start, end)) = self.normalized_selection() else {
            return;
        };
        if start == end {
            return;
        }
        self.push_undo();
        let inner = &self.markup[start..end];
        let wrapped = format!("{}{}{}", prefix, inner, suffix);
        self.markup.replace_range(start..end, &wrapped);
        self.selection = Some((start + prefix.len(), start + prefix.len() + (end - start)));
    }

    /// Splice a fragment at the selection (replacing it) or at the caret.
    fn insert_at_caret(&mut self, fragment: &str) {
        self.push_undo();
        match self.normalized_selection() {
            Some((start, end)) => {
                self.markup.replace_range(start..end, fragment);
                let caret = start + fragment.len();
                self.selection = Some((caret, caret));
            }
            None => {
                self.markup.push_str(fragment);
                let caret = self.markup.len();
                self.selection = Some((caret, caret));
            }
        }
    }

    /// Strip tags from the selected region, keeping its text content.
    fn remove_format_in_selection(&mut self) {
        let Some((start, end)) = self.normalized_selection() else {
            return;
        };
        if start == end {
            return;
        }
        self.push_undo();
        let stripped = strip_tags(&self.markup[start..end]);
        self.markup.replace_range(start..end, &stripped);
        self.selection = Some((start, start + stripped.len()));
    }

    /// Wrap each selected line in `<li>` inside the given list tag.
    fn wrap_selection_in_list(&mut self, list_tag: &str) {
        let fragment = match self.normalized_selection() {
            Some((start, end)) if start < end => {
                let items: String = self.markup[start..end]
                    .lines()
                    .map(|line| format!("<li>{}</li>", line))
                    .collect();
                format!("<{tag}>{items}</{tag}>", tag = list_tag, items = items)
            }
            _ => format!("<{tag}><li></li></{tag}>", tag = list_tag),
        };
        self.insert_at_caret(&fragment);
    }
}

impl Default for MarkupSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RichTextHost for MarkupSurface {
    fn exec(&mut self, name: &str, value: Option<&str>) {
        match name {
            "bold" => self.wrap_selection("<b>", "</b>"),
            "italic" => self.wrap_selection("<i>", "</i>"),
            "underline" => self.wrap_selection("<u>", "</u>"),
            "strikeThrough" => self.wrap_selection("<s>", "</s>"),
            "subscript" => self.wrap_selection("<sub>", "</sub>"),
            "superscript" => self.wrap_selection("<sup>", "</sup>"),
            "foreColor" => {
                if let Some(color) = value {
                    let prefix = format!(r#"<span style="color:{}">"#, color);
                    self.wrap_selection(&prefix, "</span>");
                }
            }
            "hiliteColor" | "backColor" => {
                if let Some(color) = value {
                    let prefix = format!(r#"<span style="background-color:{}">"#, color);
                    self.wrap_selection(&prefix, "</span>");
                }
            }
            "fontName" => {
                if let Some(family) = value {
                    let prefix = format!(r#"<span style="font-family:{}">"#, family);
                    self.wrap_selection(&prefix, "</span>");
                }
            }
            "fontSize" => {
                if let Some(size) = value {
                    let prefix = format!(r#"<span style="font-size:{}pt">"#, size);
                    self.wrap_selection(&prefix, "</span>");
                }
            }
            "justifyLeft" | "justifyCenter" | "justifyRight" | "justifyFull" => {
                let align = match name {
                    "justifyCenter" => "center",
                    "justifyRight" => "right",
                    "justifyFull" => "justify",
                    _ => "left",
                };
                let prefix = format!(r#"<div style="text-align:{}">"#, align);
                self.wrap_selection(&prefix, "</div>");
            }
            "insertOrderedList" => self.wrap_selection_in_list("ol"),
            "insertUnorderedList" => self.wrap_selection_in_list("ul"),
            "insertHTML" => {
                if let Some(fragment) = value {
                    self.insert_at_caret(fragment);
                }
            }
            "insertText" => {
                if let Some(text) = value {
                    let escaped = crate::document::html_escape(text);
                    self.insert_at_caret(&escaped);
                }
            }
            "removeFormat" => self.remove_format_in_selection(),
            "undo" => {
                self.undo();
            }
            "redo" => {
                self.redo();
            }
            // Unsupported commands are no-ops by contract
            other => debug!("Ignoring unsupported command '{}'", other),
        }
    }

    fn markup(&self) -> String {
        self.markup.clone()
    }

    fn set_markup(&mut self, markup: String) {
        if markup != self.markup {
            self.push_undo();
            self.markup = markup;
            self.selection = None;
        }
    }

    fn selection(&self) -> Option<(usize, usize)> {
        self.normalized_selection()
    }

    fn select(&mut self, range: Option<(usize, usize)>) {
        self.selection = range;
    }

    fn undo(&mut self) -> bool {
        if let Some(previous) = self.undo_stack.pop() {
            self.redo_stack.push(std::mem::replace(&mut self.markup, previous));
            self.selection = None;
            true
        } else {
            false
        }
    }

    fn redo(&mut self) -> bool {
        if let Some(next) = self.redo_stack.pop() {
            self.undo_stack.push(std::mem::replace(&mut self.markup, next));
            self.selection = None;
            true
        } else {
            false
        }
    }
}

/// Strip tags from a markup slice, keeping text and entities.
fn strip_tags(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// RecordingHost (test double)
// ─────────────────────────────────────────────────────────────────────────────

/// A host that records command invocations instead of applying them.
///
/// Used by dispatch tests to assert the exact `(name, value)` pairs a UI
/// action produces.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    /// Every `(name, value)` pair received, in order
    pub calls: Vec<(String, Option<String>)>,
    /// Markup reported back to callers
    pub markup: String,
    selection: Option<(usize, usize)>,
}

impl RecordingHost {
    /// Create a recording host with empty markup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recording host that reports the given markup.
    pub fn with_markup(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            ..Self::default()
        }
    }

    /// The names of all recorded commands, in order.
    pub fn call_names(&self) -> Vec<&str> {
        self.calls.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl RichTextHost for RecordingHost {
    fn exec(&mut self, name: &str, value: Option<&str>) {
        self.calls
            .push((name.to_string(), value.map(|v| v.to_string())));
    }

    fn markup(&self) -> String {
        self.markup.clone()
    }

    fn set_markup(&mut self, markup: String) {
        self.calls.push(("setMarkup".to_string(), Some(markup.clone())));
        self.markup = markup;
    }

    fn selection(&self) -> Option<(usize, usize)> {
        self.selection
    }

    fn select(&mut self, range: Option<(usize, usize)>) {
        self.selection = range;
    }

    fn undo(&mut self) -> bool {
        self.calls.push(("undo".to_string(), None));
        false
    }

    fn redo(&mut self) -> bool {
        self.calls.push(("redo".to_string(), None));
        false
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
