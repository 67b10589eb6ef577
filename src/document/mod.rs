//! Document model for Quillpad
//!
//! The document itself (a name plus serialized markup), the advisory
//! formatting state, and the page layout/zoom presentation parameters.

mod formatting;
mod layout;
mod model;

pub use formatting::{Alignment, FontSizeError, FormattingState};
pub use layout::{Orientation, PageLayout, PaperSize, Zoom};
pub use model::{html_escape, markup_to_text, name_from_path, Document, BLOCK_BREAK_TAGS, ENTITIES};
