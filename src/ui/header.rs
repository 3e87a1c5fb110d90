//! Header panel UI rendering.
//!
//! Handles the top bar with file controls and the theme selector.

use crate::app::AppState;
use eframe::egui;
use std::path::PathBuf;

/// Result of user interaction with the header panel.
pub enum HeaderInteraction {
    /// User picked a pinout file to open
    OpenFileRequested(PathBuf),
    /// User clicked the demo pinout button
    OpenDemoRequested,
}

/// Renders the application header with file controls and theme selector.
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open Pinout").clicked() {
            let mut dialog = rfd::FileDialog::new().add_filter("Pinout Files", &["yaml", "yml"]);

            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.button("🔌 Demo Pinout").clicked() {
            interaction = Some(HeaderInteraction::OpenDemoRequested);
        }

        ui.separator();

        ui.label("Theme:");
        let mut current_theme = state.theme.current_theme_name().to_string();
        egui::ComboBox::from_id_salt("theme_selector")
            .selected_text(current_theme.clone())
            .show_ui(ui, |ui| {
                for theme_name in state.theme.theme_manager().list_themes() {
                    ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                }
            });
        if current_theme != state.theme.current_theme_name() {
            state.theme.set_theme(current_theme);
        }

        if state.pinout.is_loaded() {
            ui.separator();
            ui.label(format!("{} connectors", state.pinout.connectors().len()));
        }
    });

    interaction
}
