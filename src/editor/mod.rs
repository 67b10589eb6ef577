//! Editing core for Quillpad
//!
//! The editable surface and its capability interface, the command
//! dispatcher, find/replace, insertion fragments, and document statistics.

pub mod commands;
pub mod find_replace;
pub mod fragments;
pub mod stats;
pub mod surface;

pub use commands::{dispatch, EditorCommand};
pub use find_replace::{find_first, replace_all_in_markup, FindState};
pub use fragments::Shape;
pub use stats::DocumentStats;
pub use surface::{MarkupSurface, RichTextHost};
