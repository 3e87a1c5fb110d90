//! State management modules for the pinout viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Pinout state (loaded connectors, per-connector overlay lifecycle)
//! - Selection state (detail rows for the selected pin record)
//! - Theme state (theme manager, current theme)
//! - Layout state (details panel split)

mod pinout_state;
mod selection;
mod theme_state;
mod layout_state;

pub use pinout_state::{ConnectorOverlay, ConnectorView, OverlayStatus, PinoutState};
pub use selection::SelectionState;
pub use theme_state::ThemeState;
pub use layout_state::LayoutState;
