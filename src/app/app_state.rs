//! Centralized application state for the pinout viewer.
//!
//! Composes focused state components that each manage one aspect of the
//! application. This keeps invariants local and allows borrow-checker
//! friendly access to independent aspects: the marker registry can be
//! mutated while connector views are read, because they are separate
//! components.

use crate::state::{LayoutState, PinoutState, SelectionState, ThemeState};
use pinscope::MarkerRegistry;

/// Main application state composed of focused state components.
pub struct AppState {
    /// Loaded connector documents and their overlay lifecycle
    pub pinout: PinoutState,

    /// All pin markers across all connectors, plus the selection
    pub markers: MarkerRegistry,

    /// Detail rows for the selected pin record
    pub selection: SelectionState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// UI layout state
    pub layout: LayoutState,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self {
            pinout: PinoutState::new(),
            markers: MarkerRegistry::new(),
            selection: SelectionState::new(),
            theme: ThemeState::new(),
            layout: LayoutState::new(),
            error_message: None,
        }
    }

    /// Creates a new AppState with theme and layout settings loaded from storage.
    pub fn with_theme_and_layout(theme_name: String, split_ratio: f32) -> Self {
        Self {
            pinout: PinoutState::new(),
            markers: MarkerRegistry::new(),
            selection: SelectionState::new(),
            theme: ThemeState::with_theme(theme_name),
            layout: LayoutState::with_split_ratio(split_ratio),
            error_message: None,
        }
    }

    /// Resets all document-derived state when loading a new pinout.
    pub fn reset_document_state(&mut self) {
        self.pinout.clear();
        self.markers.clear();
        self.selection.clear();
        self.error_message = None;
    }
}
