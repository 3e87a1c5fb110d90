//! Details panel UI rendering.
//!
//! Shows the detail table for the currently selected pin record. The
//! rows were rebuilt by the coordinator at click time; a record whose id
//! list fans out to several logical ids shows one row per id.

use crate::app::AppState;
use crate::ui::pinout_table;
use egui::{RichText, ScrollArea};
use pinscope::{MarkerId, TableRow, ThemeColors};

/// Renders the details panel for the selected pin record.
pub fn render_details_panel(ui: &mut egui::Ui, state: &AppState, theme_colors: &ThemeColors) {
    let rows = state.selection.detail_rows();
    if rows.is_empty() {
        ui.label("Pin details (click a marker to view)");
        return;
    }

    ui.label(RichText::new(format!("Details for pin: {}", rows[0].pin)).strong());
    ui.separator();

    let available_height = ui.available_height();

    ScrollArea::vertical()
        .id_salt("details_scroll_area")
        .max_height(available_height)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            let table_rows: Vec<(Option<MarkerId>, TableRow)> =
                rows.iter().cloned().map(|row| (None, row)).collect();
            pinout_table::render_table(ui, "details_table", &table_rows, None, theme_colors);
        });
}
