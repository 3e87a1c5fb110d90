//! Low-level rendering for pin markers.

pub mod marker_renderer;
