//! Status bar UI rendering.
//!
//! Displays memory usage, the loaded pinout summary and any load error.

use crate::app::AppState;
use crate::utils::{format_memory_mb, get_current_memory_mb};
use eframe::egui;
use egui::RichText;

/// Renders the status panel at the bottom of the window.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());

        if state.pinout.is_loaded() {
            ui.label(RichText::new("|").strong());

            let source = state
                .pinout
                .file_path()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "Demo pinout".to_string());
            ui.label(
                RichText::new(format!(
                    "{} | Connectors: {} | Markers: {}",
                    source,
                    state.pinout.connectors().len(),
                    state.markers.len()
                ))
                .strong(),
            );

            let pending = state.pinout.pending_images();
            if pending > 0 {
                ui.label(RichText::new("|").strong());
                ui.label(
                    RichText::new(format!("Decoding images: {}", pending))
                        .strong()
                        .color(egui::Color32::YELLOW),
                );
            }
        } else {
            ui.label(RichText::new("| No pinout loaded").strong());
        }

        if let Some(error) = &state.error_message {
            ui.label(RichText::new("|").strong());
            ui.colored_label(egui::Color32::RED, error);
        }
    });
}
