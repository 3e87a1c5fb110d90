//! Pin marker rendering logic.
//!
//! Resolves a marker's percentage layout against the on-screen image
//! rect, paints the marker with its highlight/selected adornments, and
//! detects clicks.

use eframe::egui;
use egui::Color32;
use pinscope::{adjust_brightness, with_alpha, Marker, MarkerLayout, PinSpec, ThemeColors};

/// Smallest on-screen marker that is still drawn and clickable, pixels.
const MIN_VISIBLE_PX: f32 = 1.0;

/// Renders a single pin marker inside `image_rect`.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `image_rect` - Screen rect the connector image occupies
/// * `viewport_width` - Application content width, for label font sizing
/// * `marker` - The marker entity, including highlight/selected flags
/// * `layout` - Placement percentages resolved for the current frame
/// * `spec` - The pin record, for the hover tooltip
/// * `fill` - Base fill color from the pin type mapping
///
/// # Returns
/// * `true` if the marker was clicked this frame
pub fn render_marker(
    ui: &mut egui::Ui,
    image_rect: egui::Rect,
    viewport_width: f32,
    marker: &Marker,
    layout: &MarkerLayout,
    spec: &PinSpec,
    fill: Color32,
    theme_colors: &ThemeColors,
) -> bool {
    let center = egui::pos2(
        image_rect.min.x + layout.left_pct / 100.0 * image_rect.width(),
        image_rect.min.y + layout.top_pct / 100.0 * image_rect.height(),
    );
    let size = egui::vec2(
        layout.width_pct / 100.0 * image_rect.width(),
        layout.height_pct / 100.0 * image_rect.height(),
    );

    // Markers crowded down to nothing neither draw nor catch clicks.
    if size.x < MIN_VISIBLE_PX || size.y < MIN_VISIBLE_PX {
        return false;
    }

    let marker_rect = egui::Rect::from_center_size(center, size);
    let corner = size.min_elem() / 2.0;

    let base = if marker.highlighted {
        adjust_brightness(fill, 1.25)
    } else {
        fill
    };
    let fill_alpha = if marker.highlighted { 210 } else { 150 };
    ui.painter()
        .rect_filled(marker_rect, corner, with_alpha(base, fill_alpha));

    if marker.selected {
        ui.painter().rect_stroke(
            marker_rect,
            corner,
            egui::Stroke::new(2.0, theme_colors.orange),
            egui::StrokeKind::Outside,
        );
    } else if marker.highlighted {
        ui.painter().rect_stroke(
            marker_rect,
            corner,
            egui::Stroke::new(1.5, theme_colors.yellow),
            egui::StrokeKind::Outside,
        );
    } else {
        ui.painter().rect_stroke(
            marker_rect,
            corner,
            egui::Stroke::new(1.0, with_alpha(theme_colors.border, 140)),
            egui::StrokeKind::Outside,
        );
    }

    // Labels scale with the marker; skip when unreadable.
    let font_px = layout.font_vw / 100.0 * viewport_width;
    if font_px >= 5.0 {
        ui.painter().text(
            center,
            egui::Align2::CENTER_CENTER,
            &marker.label,
            egui::FontId::proportional(font_px),
            theme_colors.text,
        );
    }

    let marker_ui_id = ui.id().with(("pin_marker", marker.id.0));
    let response = ui.interact(marker_rect, marker_ui_id, egui::Sense::click());
    let clicked = response.clicked();

    if response.hovered() {
        response.on_hover_ui(|ui| {
            ui.label(egui::RichText::new(format!("Pin {}", marker.label)).strong());
            if let Some(function) = &spec.function {
                ui.label(function.clone());
            }
            if let Some(pin_type) = &spec.pin_type {
                ui.colored_label(theme_colors.text_dim, format!("type: {}", pin_type));
            }
            if let Some(ids) = &spec.id {
                ui.colored_label(theme_colors.text_dim, format!("id: {}", ids.joined()));
            }
        });
    }

    clicked
}
