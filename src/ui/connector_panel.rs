//! Connector panel UI rendering.
//!
//! Handles the central panel: one section per connector with its image,
//! the marker overlay, and the full pinout table. Connectors whose image
//! is still decoding show a placeholder; connectors whose image failed
//! stay without an overlay.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::presentation::color_mapping;
use crate::rendering::marker_renderer;
use crate::state::{ConnectorOverlay, ConnectorView, OverlayStatus};
use crate::ui::pinout_table;
use egui::{Color32, RichText, ScrollArea};
use pinscope::{marker_layout, ContainerMetrics, MarkerId, TableRow, ThemeColors};

/// Result of connector panel interactions.
pub enum ConnectorPanelInteraction {
    /// A pin marker (or its pinout table row) was clicked
    MarkerClicked { marker: MarkerId },
}

/// Renders the scrollable list of connector sections.
pub fn render_connector_panel(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    state: &AppState,
    loader: &AsyncLoader,
    theme_colors: &ThemeColors,
) -> Option<ConnectorPanelInteraction> {
    if loader.is_loading() {
        render_loading_indicator(ui, theme_colors);
        ctx.request_repaint_after(std::time::Duration::from_secs_f32(0.1));
        return None;
    }

    if !state.pinout.is_loaded() {
        ui.label("No pinout loaded - open a pinout file to view connectors");
        return None;
    }

    // Marker label fonts scale with the application content width.
    let viewport_width = ctx.content_rect().width();

    let mut interaction = None;

    ScrollArea::vertical()
        .id_salt("connector_scroll_area")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (index, view) in state.pinout.connectors().iter().enumerate() {
                ui.heading(view.connector.display_name());

                match &view.overlay {
                    OverlayStatus::Pending => {
                        ui.label(RichText::new("decoding image...").color(theme_colors.text_dim));
                    }
                    OverlayStatus::Unavailable => {}
                    OverlayStatus::Ready(overlay) => {
                        if let Some(marker) = render_connector_section(
                            ui,
                            viewport_width,
                            state,
                            index,
                            view,
                            overlay,
                            theme_colors,
                        ) {
                            interaction = Some(ConnectorPanelInteraction::MarkerClicked { marker });
                        }
                    }
                }

                ui.add_space(12.0);
                ui.separator();
            }
        });

    interaction
}

/// Renders one connector's image, markers and pinout table.
fn render_connector_section(
    ui: &mut egui::Ui,
    viewport_width: f32,
    state: &AppState,
    index: usize,
    view: &ConnectorView,
    overlay: &ConnectorOverlay,
    theme_colors: &ThemeColors,
) -> Option<MarkerId> {
    // The image keeps its aspect ratio and never upscales past its
    // natural size.
    let display_width = ui.available_width().min(overlay.image_width);
    let display_height = display_width * overlay.image_height / overlay.image_width;

    let (image_rect, _) = ui.allocate_exact_size(
        egui::vec2(display_width, display_height),
        egui::Sense::hover(),
    );
    ui.painter().image(
        overlay.texture.id(),
        image_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        Color32::WHITE,
    );

    let metrics = ContainerMetrics {
        container_width: image_rect.width(),
        container_height: image_rect.height(),
        image_width: overlay.image_width,
        image_height: overlay.image_height,
    };

    let mut clicked = None;

    for marker_id in &overlay.markers {
        let Some(marker) = state.markers.get(*marker_id) else {
            continue;
        };
        let Some(spec) = view.connector.pins.get(marker.spec_index) else {
            continue;
        };

        let layout = marker_layout(marker.x, marker.y, marker.closest_sq, &metrics);
        let fill = color_mapping::pin_type_color(marker.pin_type.as_deref(), theme_colors);

        if marker_renderer::render_marker(
            ui,
            image_rect,
            viewport_width,
            marker,
            &layout,
            spec,
            fill,
            theme_colors,
        ) {
            clicked = Some(marker.id);
        }
    }

    ui.add_space(8.0);

    let rows: Vec<(Option<MarkerId>, TableRow)> = overlay
        .rows
        .iter()
        .map(|(id, row)| (Some(*id), row.clone()))
        .collect();
    if let Some(marker) = pinout_table::render_table(
        ui,
        ("pinout_table", index),
        &rows,
        state.markers.selected(),
        theme_colors,
    ) {
        clicked = Some(marker);
    }

    clicked
}

/// Renders a loading indicator while the pinout file is being parsed.
fn render_loading_indicator(ui: &mut egui::Ui, theme_colors: &ThemeColors) {
    let canvas_rect = ui.available_rect_before_wrap();
    let center_pos = canvas_rect.center();

    ui.painter().text(
        center_pos,
        egui::Align2::CENTER_CENTER,
        "Loading...",
        egui::FontId::proportional(48.0),
        theme_colors.text_dim,
    );
}
