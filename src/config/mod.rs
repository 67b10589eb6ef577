//! Configuration module for Quillpad
//!
//! Handles user settings and their persistence to the platform config
//! directory.

mod persistence;
mod settings;

pub use persistence::{load_config, save_config, save_config_silent};
pub use settings::{Settings, Theme, WindowSize};
