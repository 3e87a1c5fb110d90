//! Shared pin table rendering.
//!
//! Both the per-connector full pinout table and the details table are
//! the same five-column grid; rows bound to a marker are clickable and
//! select that marker.

use eframe::egui;
use egui::RichText;
use pinscope::{MarkerId, TableRow, ThemeColors};

use crate::presentation::color_mapping;

/// Renders a pin table and reports a clicked row's bound marker.
///
/// Rows paired with `None` render as plain text. The row whose marker is
/// `selected` is drawn in the selected style.
pub fn render_table(
    ui: &mut egui::Ui,
    id_salt: impl std::hash::Hash,
    rows: &[(Option<MarkerId>, TableRow)],
    selected: Option<MarkerId>,
    theme_colors: &ThemeColors,
) -> Option<MarkerId> {
    let mut clicked = None;

    egui::Grid::new(id_salt)
        .num_columns(5)
        .striped(true)
        .min_col_width(48.0)
        .show(ui, |ui| {
            for title in ["Pin", "Id", "Type", "Function", "Color"] {
                ui.label(RichText::new(title).strong());
            }
            ui.end_row();

            for (marker, row) in rows {
                match marker {
                    Some(id) => {
                        let is_selected = selected == Some(*id);
                        if ui.selectable_label(is_selected, &row.pin).clicked() {
                            clicked = Some(*id);
                        }
                    }
                    None => {
                        ui.label(&row.pin);
                    }
                }

                ui.label(&row.id);

                let type_color =
                    color_mapping::pin_type_color(row.pin_type.as_deref(), theme_colors);
                ui.colored_label(type_color, row.pin_type.as_deref().unwrap_or(""));

                ui.label(&row.function);
                ui.label(&row.color);
                ui.end_row();
            }
        });

    clicked
}
