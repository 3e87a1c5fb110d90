//! Application-level coordination and workflow management.
//!
//! Handles the pinout load workflow, per-connector overlay installation
//! and the selection logic triggered by marker clicks.

use crate::app::AppState;
use crate::io::{AsyncLoader, DecodedImage, LoadEvent};
use crate::state::ConnectorOverlay;
use pinscope::{detail_rows, nearest_distinct_sq, summary_row, MarkerId, TableRow};
use std::path::PathBuf;

/// Everything needed to register one marker, captured from the document
/// before the registry is touched.
struct MarkerSeed {
    spec_index: usize,
    label: String,
    pin_type: Option<String>,
    x: f64,
    y: f64,
    closest_sq: Option<f64>,
}

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Initiates asynchronous pinout loading.
    ///
    /// Immediately clears previous document state to show the loading
    /// indicator.
    pub fn open_file(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        path: PathBuf,
        ctx: &egui::Context,
    ) {
        state.reset_document_state();
        loader.start_file_load(path, ctx);
    }

    /// Loads the built-in demo pinout in-memory.
    ///
    /// Demo images are already decoded, so overlays install immediately.
    pub fn open_demo(state: &mut AppState, ctx: &egui::Context) {
        state.reset_document_state();

        let demo = pinscope::sample_pinout();
        let mut connectors = Vec::with_capacity(demo.len());
        let mut images = Vec::with_capacity(demo.len());
        for (connector, image) in demo {
            connectors.push(connector);
            images.push(image);
        }

        state.pinout.load_documents(connectors, None);
        for (index, image) in images.into_iter().enumerate() {
            Self::install_overlay(state, ctx, index, DecodedImage::from(image));
        }
    }

    /// Applies background loading results to application state.
    ///
    /// Called once per frame in the update loop. Returns true if any
    /// event was processed.
    pub fn check_loading_completion(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        ctx: &egui::Context,
    ) -> bool {
        let mut changed = false;

        for event in loader.poll() {
            changed = true;
            match event {
                LoadEvent::Documents {
                    result: Ok(connectors),
                    path,
                } => {
                    // Image paths resolve relative to the pinout file.
                    let base_dir = path.parent().map(PathBuf::from).unwrap_or_default();
                    let jobs: Vec<(usize, PathBuf)> = connectors
                        .iter()
                        .enumerate()
                        .map(|(index, connector)| {
                            (index, base_dir.join(&connector.info.image.file))
                        })
                        .collect();

                    state.pinout.load_documents(connectors, Some(path));
                    state.error_message = None;
                    loader.start_image_loads(jobs, ctx);
                }
                LoadEvent::Documents {
                    result: Err(error_msg),
                    ..
                } => {
                    state.error_message = Some(format!("Error loading pinout: {}", error_msg));
                    state.pinout.clear();
                }
                LoadEvent::Image {
                    connector,
                    result: Ok(decoded),
                } => {
                    Self::install_overlay(state, ctx, connector, decoded);
                }
                LoadEvent::Image {
                    connector,
                    result: Err(_),
                } => {
                    // A connector without an image stays without markers
                    // or rows; the rest of the page carries on.
                    state.pinout.mark_unavailable(connector);
                }
            }
        }

        changed
    }

    /// Installs a connector's overlay once its image is decoded:
    /// uploads the texture, registers one marker per addressed pin
    /// position, and builds the full pinout table rows.
    ///
    /// Specs without a designator, specs addressing no placed pin, and
    /// pins without coordinates are skipped silently.
    fn install_overlay(
        state: &mut AppState,
        ctx: &egui::Context,
        index: usize,
        decoded: DecodedImage,
    ) {
        let mut seeds: Vec<MarkerSeed> = Vec::new();
        // Summary rows, each pointing at the first seed of its spec.
        let mut summaries: Vec<(usize, TableRow)> = Vec::new();

        {
            let Some(view) = state.pinout.connector(index) else {
                return;
            };
            let connector = &view.connector;

            for (spec_index, spec) in connector.pins.iter().enumerate() {
                if spec.pin.is_none() {
                    continue;
                }

                let first_seed = seeds.len();
                for pinfo in connector.matching_info(spec) {
                    let Some((x, y)) = pinfo.position() else {
                        continue;
                    };
                    seeds.push(MarkerSeed {
                        spec_index,
                        label: pinfo.pin.to_string(),
                        pin_type: spec.pin_type.clone(),
                        x,
                        y,
                        closest_sq: nearest_distinct_sq(pinfo, &connector.info.pins),
                    });
                }

                if seeds.len() > first_seed {
                    summaries.push((first_seed, summary_row(spec)));
                }
            }
        }

        let image_width = decoded.width as f32;
        let image_height = decoded.height as f32;
        let texture = ctx.load_texture(
            format!("connector-{}", index),
            decoded.to_color_image(),
            egui::TextureOptions::LINEAR,
        );

        let mut marker_ids: Vec<MarkerId> = Vec::with_capacity(seeds.len());
        for seed in seeds {
            marker_ids.push(state.markers.add(
                index,
                seed.spec_index,
                seed.label,
                seed.pin_type,
                seed.x,
                seed.y,
                seed.closest_sq,
            ));
        }

        let rows = summaries
            .into_iter()
            .map(|(seed_index, row)| (marker_ids[seed_index], row))
            .collect();

        state.pinout.install_overlay(
            index,
            ConnectorOverlay {
                texture,
                image_width,
                image_height,
                markers: marker_ids,
                rows,
            },
        );
    }

    /// Handles a click on a pin marker (or its pinout table row).
    ///
    /// Rebuilds the detail rows for the marker's pin record, then
    /// redetermines highlight and selection across every marker on the
    /// page.
    pub fn handle_marker_click(state: &mut AppState, marker_id: MarkerId) {
        let Some((connector, spec_index)) = state
            .markers
            .get(marker_id)
            .map(|marker| (marker.connector, marker.spec_index))
        else {
            return;
        };
        let Some(spec) = state.pinout.spec(connector, spec_index) else {
            return;
        };

        let rows = detail_rows(spec);
        let record_type = spec.pin_type.clone();

        state.selection.set_detail_rows(rows);
        state.markers.select_by_type(record_type.as_deref(), marker_id);
    }
}
