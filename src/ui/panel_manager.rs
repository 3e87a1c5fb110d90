//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, connectors, details, status) and
//! funnels their interactions back to the application coordinator.

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::presentation::color_mapping;
use crate::ui::{connector_panel, details_panel, header, status_bar};
use pinscope::MarkerId;

/// Result of panel interactions that need to be handled by the
/// application coordinator.
pub enum PanelInteraction {
    /// User requested to open a pinout file
    OpenFileRequested(std::path::PathBuf),
    /// User requested the built-in demo pinout
    OpenDemoRequested,
    /// A pin marker (or its table row) was clicked
    MarkerClicked { marker: MarkerId },
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called
    /// from the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let theme_colors = color_mapping::theme_colors(
            state.theme.theme_manager(),
            state.theme.current_theme_name(),
        )
        .clone();

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::OpenFileRequested(path) => {
                        PanelInteraction::OpenFileRequested(path)
                    }
                    header::HeaderInteraction::OpenDemoRequested => {
                        PanelInteraction::OpenDemoRequested
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        // Details panel above the status panel
        let content_height = ctx.content_rect().height();
        let details_response = egui::TopBottomPanel::bottom("details_panel")
            .default_height(content_height * (1.0 - state.layout.split_ratio()))
            .resizable(true)
            .show(ctx, |ui| {
                egui::Frame::default().inner_margin(4.0).show(ui, |ui| {
                    details_panel::render_details_panel(ui, state, &theme_colors);
                });
            });

        // Keep the persisted split in step with manual panel resizes.
        if content_height > 0.0 {
            let details_height = details_response.response.rect.height();
            state
                .layout
                .set_split_ratio(1.0 - details_height / content_height);
        }

        // Central panel: connector sections
        let connector_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default()
            .frame(connector_frame)
            .show(ctx, |ui| {
                if let Some(panel_interaction) =
                    connector_panel::render_connector_panel(ui, ctx, state, loader, &theme_colors)
                {
                    interaction = Some(match panel_interaction {
                        connector_panel::ConnectorPanelInteraction::MarkerClicked { marker } => {
                            PanelInteraction::MarkerClicked { marker }
                        }
                    });
                }
            });

        interaction
    }
}
