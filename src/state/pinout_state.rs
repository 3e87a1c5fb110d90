//! Loaded pinout document state.
//!
//! Tracks the connector documents, the source file path, and each
//! connector's overlay lifecycle. A connector begins with a pending
//! overlay; when its image decode arrives the overlay is installed with
//! texture, markers and table rows. A failed decode parks the connector
//! as unavailable: no markers, no rows, no message.

use egui::TextureHandle;
use pinscope::{Connector, MarkerId, PinSpec, TableRow};
use std::path::PathBuf;

/// Per-connector data installed once the connector's image is decoded.
pub struct ConnectorOverlay {
    pub texture: TextureHandle,
    /// Natural image dimensions in pixels.
    pub image_width: f32,
    pub image_height: f32,
    /// Markers overlaid on this connector, in creation order.
    pub markers: Vec<MarkerId>,
    /// Full pinout table rows, each bound to the first marker of its
    /// pin record.
    pub rows: Vec<(MarkerId, TableRow)>,
}

/// Overlay lifecycle for one connector.
pub enum OverlayStatus {
    /// Image decode still outstanding.
    Pending,
    /// Image decoded and overlay installed.
    Ready(ConnectorOverlay),
    /// Image decode failed; the connector stays uninitialized.
    Unavailable,
}

/// One loaded connector document with its overlay state.
pub struct ConnectorView {
    pub connector: Connector,
    pub overlay: OverlayStatus,
}

/// State related to the loaded pinout file.
#[derive(Default)]
pub struct PinoutState {
    connectors: Vec<ConnectorView>,
    /// Path of the loaded file (None for the demo pinout)
    file_path: Option<PathBuf>,
}

impl PinoutState {
    pub fn new() -> Self {
        Self {
            connectors: Vec::new(),
            file_path: None,
        }
    }

    /// Installs a freshly parsed document set; all overlays start
    /// pending.
    pub fn load_documents(&mut self, connectors: Vec<Connector>, path: Option<PathBuf>) {
        self.connectors = connectors
            .into_iter()
            .map(|connector| ConnectorView {
                connector,
                overlay: OverlayStatus::Pending,
            })
            .collect();
        self.file_path = path;
    }

    /// Clears all document state.
    pub fn clear(&mut self) {
        self.connectors.clear();
        self.file_path = None;
    }

    // ===== Queries =====

    pub fn connectors(&self) -> &[ConnectorView] {
        &self.connectors
    }

    pub fn connector(&self, index: usize) -> Option<&ConnectorView> {
        self.connectors.get(index)
    }

    /// The semantic pin record a marker resolves back to.
    pub fn spec(&self, connector: usize, spec_index: usize) -> Option<&PinSpec> {
        self.connectors.get(connector)?.connector.pins.get(spec_index)
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        !self.connectors.is_empty()
    }

    /// Number of connectors whose image decode is still outstanding.
    pub fn pending_images(&self) -> usize {
        self.connectors
            .iter()
            .filter(|view| matches!(view.overlay, OverlayStatus::Pending))
            .count()
    }

    // ===== Overlay Mutations =====

    pub fn install_overlay(&mut self, index: usize, overlay: ConnectorOverlay) {
        if let Some(view) = self.connectors.get_mut(index) {
            view.overlay = OverlayStatus::Ready(overlay);
        }
    }

    pub fn mark_unavailable(&mut self, index: usize) {
        if let Some(view) = self.connectors.get_mut(index) {
            view.overlay = OverlayStatus::Unavailable;
        }
    }
}
