pub mod connector;
pub mod parser;
pub mod geometry;
pub mod ordered_set;
pub mod rows;
pub mod markers;
pub mod sample;
pub mod theme;

// Export data model
pub use connector::{
    Connector, ConnectorInfo, ImageInfo,
    PinId, PinIds, PinInfo, PinSpec,
};

// Export pinout parsing
pub use parser::{PinoutReader, parse_pinout};

// Export layout engine
pub use geometry::{
    ContainerMetrics, MarkerLayout,
    marker_layout, nearest_distinct_sq,
    CROWD_SHRINK_PX, LABEL_FONT_DIVISOR, MAX_HEIGHT_FRAC,
};

// Export table row construction
pub use rows::{TableRow, detail_rows, summary_row};

// Export marker registry
pub use markers::{Marker, MarkerId, MarkerRegistry};

// Export demo pinout
pub use sample::{SampleImage, sample_pinout};

// Export ordered-set utility
pub use ordered_set::OrderedSet;

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, adjust_brightness, with_alpha};
