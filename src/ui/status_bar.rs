//! Status bar
//!
//! The strip along the bottom: live statistics on the left, transient
//! notices in the center, zoom controls on the right.

use crate::document::Zoom;
use crate::editor::DocumentStats;
use crate::state::{Notice, NoticeKind};
use crate::theme::ThemeColors;
use eframe::egui::{self, RichText, Ui};

/// Height of the status bar.
const STATUS_BAR_HEIGHT: f32 = 24.0;

/// Actions triggered from the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBarAction {
    ZoomIn,
    ZoomOut,
    ZoomFit,
}

/// Render the status bar and return any triggered action.
pub fn show_status_bar(
    ui: &mut Ui,
    colors: &ThemeColors,
    stats: &DocumentStats,
    zoom: Zoom,
    notice: Option<&Notice>,
) -> Option<StatusBarAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.set_height(STATUS_BAR_HEIGHT);

        ui.label(
            RichText::new(stats.format_compact())
                .size(11.0)
                .color(colors.text_secondary),
        );

        if let Some(notice) = notice {
            let color = match notice.kind {
                NoticeKind::Info => colors.text_secondary,
                NoticeKind::Success => colors.success,
                NoticeKind::Error => colors.error,
            };
            ui.with_layout(
                egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                |ui| {
                    ui.label(RichText::new(&notice.message).size(11.0).color(color));
                },
            );
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("+").on_hover_text("Zoom in").clicked() {
                action = Some(StatusBarAction::ZoomIn);
            }
            if ui
                .small_button(format!("{}%", zoom.percent()))
                .on_hover_text("Reset zoom to 100%")
                .clicked()
            {
                action = Some(StatusBarAction::ZoomFit);
            }
            if ui.small_button("−").on_hover_text("Zoom out").clicked() {
                action = Some(StatusBarAction::ZoomOut);
            }
        });
    });

    action
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_equality() {
        assert_eq!(StatusBarAction::ZoomIn, StatusBarAction::ZoomIn);
        assert_ne!(StatusBarAction::ZoomIn, StatusBarAction::ZoomOut);
    }
}
