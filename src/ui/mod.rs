//! UI components for Quillpad
//!
//! The ribbon, modal dialogs, settings panel, and status bar.

pub mod dialogs;
mod ribbon;
mod settings;
mod status_bar;

pub use dialogs::{
    show_confirm, show_find_replace, show_page_setup, show_save_dialog, show_symbol_picker,
    show_watermark,
};
pub use ribbon::{Ribbon, RibbonAction};
pub use settings::show_settings_panel;
pub use status_bar::{show_status_bar, StatusBarAction};
