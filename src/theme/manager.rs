//! Theme manager
//!
//! Centralized theme state: holds the current preference, converts it to
//! egui `Visuals`, and reapplies on change.

#![allow(dead_code)]

use eframe::egui::{Context, Visuals};
use log::info;

use super::{dark, light, ThemeColors};
use crate::config::Theme;

// ─────────────────────────────────────────────────────────────────────────────
// Theme Manager
// ─────────────────────────────────────────────────────────────────────────────

/// Manages theme state and applies themes to the egui context.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    current_theme: Theme,
    needs_apply: bool,
}

impl ThemeManager {
    /// Create a new ThemeManager with the given initial theme.
    pub fn new(theme: Theme) -> Self {
        info!("ThemeManager initialized with theme: {:?}", theme);
        Self {
            current_theme: theme,
            needs_apply: true,
        }
    }

    /// The current theme setting.
    pub fn current_theme(&self) -> Theme {
        self.current_theme
    }

    /// Set the theme and mark for reapplication.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.current_theme != theme {
            info!("Theme changed from {:?} to {:?}", self.current_theme, theme);
            self.current_theme = theme;
            self.needs_apply = true;
        }
    }

    /// Toggle between light and dark. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        let new_theme = self.current_theme.toggle();
        self.set_theme(new_theme);
        new_theme
    }

    /// The palette for the current theme.
    pub fn colors(&self) -> ThemeColors {
        ThemeColors::from_theme(self.current_theme)
    }

    /// Whether the current theme is dark.
    pub fn is_dark(&self) -> bool {
        self.current_theme == Theme::Dark
    }

    /// Apply the current theme to the egui context if needed.
    pub fn apply(&mut self, ctx: &Context) {
        if self.needs_apply {
            ctx.set_visuals(self.visuals());
            self.needs_apply = false;
        }
    }

    /// Force reapplication on the next `apply` call.
    pub fn mark_dirty(&mut self) {
        self.needs_apply = true;
    }

    fn visuals(&self) -> Visuals {
        match self.current_theme {
            Theme::Light => light::create_light_visuals(),
            Theme::Dark => dark::create_dark_visuals(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_initial_state() {
        let manager = ThemeManager::new(Theme::Dark);
        assert_eq!(manager.current_theme(), Theme::Dark);
        assert!(manager.is_dark());
    }

    #[test]
    fn test_manager_toggle() {
        let mut manager = ThemeManager::new(Theme::Light);
        assert_eq!(manager.toggle(), Theme::Dark);
        assert_eq!(manager.toggle(), Theme::Light);
    }

    #[test]
    fn test_set_same_theme_keeps_state() {
        let mut manager = ThemeManager::new(Theme::Light);
        manager.needs_apply = false;
        manager.set_theme(Theme::Light);
        assert!(!manager.needs_apply);

        manager.set_theme(Theme::Dark);
        assert!(manager.needs_apply);
    }
}
