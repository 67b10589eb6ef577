//! Quillpad - A rich text document editor
//!
//! A desktop word processor: formatted editing over an HTML-like markup
//! surface, page layout with watermarks, find/replace, statistics, and
//! export to HTML, plain text, and Word-compatible documents.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod document;
mod editor;
mod error;
mod export;
mod files;
mod state;
mod theme;
mod ui;

use app::QuillpadApp;
use log::info;

const APP_NAME: &str = "Quillpad";

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting {}", APP_NAME);

    let settings = config::load_config();
    let window = &settings.window_size;

    let mut viewport = eframe::egui::ViewportBuilder::default()
        .with_inner_size([window.width, window.height])
        .with_min_inner_size([800.0, 500.0])
        .with_title(APP_NAME);

    if let (Some(x), Some(y)) = (window.x, window.y) {
        viewport = viewport.with_position([x, y]);
    }
    if window.maximized {
        viewport = viewport.with_maximized(true);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|cc| Ok(Box::new(QuillpadApp::new(cc)))),
    )
}
