//! Marker layout engine.
//!
//! Marker positions come straight from the pin coordinates; marker *size*
//! is derived from how crowded the neighborhood is. Each marker may grow
//! until it would collide with the nearest pin carrying a different
//! designator, and is capped at a fixed fraction of the container height
//! so isolated pins do not balloon. All outputs are percentages of the
//! container rectangle, which keeps the layout valid when the container
//! is resized.

use crate::connector::PinInfo;

/// Upper bound on marker height, as a fraction of container height.
pub const MAX_HEIGHT_FRAC: f32 = 0.08;

/// Gap subtracted from distance-limited markers so adjacent markers do
/// not touch.
pub const CROWD_SHRINK_PX: f32 = 6.0;

/// Divisor converting marker height percentage into a label font size in
/// viewport-width percent.
pub const LABEL_FONT_DIVISOR: f32 = 7.5;

/// Dimensions the layout is computed against: the on-screen container the
/// image is drawn into, and the image's natural pixel size.
#[derive(Debug, Clone, Copy)]
pub struct ContainerMetrics {
    pub container_width: f32,
    pub container_height: f32,
    pub image_width: f32,
    pub image_height: f32,
}

/// Resolved placement for one marker, in percent of container dimensions.
///
/// Width and height are expressed against their respective container
/// axes, so a container that does not share the image's aspect ratio
/// produces non-circular markers. That is a property of the layout, not
/// an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerLayout {
    /// Marker center, percent of container width from the left edge.
    pub left_pct: f32,
    /// Marker center, percent of container height from the top edge.
    pub top_pct: f32,
    pub width_pct: f32,
    pub height_pct: f32,
    /// Label font size in viewport-width percent; resolve against the
    /// application content width at paint time.
    pub font_vw: f32,
}

/// Minimum squared distance from `subject` to any pin with a different
/// designator, in image pixels.
///
/// Pins without coordinates are ignored on both sides. Returns `None`
/// when no differently-named pin with coordinates exists; callers treat
/// that as "unconstrained by neighbors" and fall back to the size cap.
pub fn nearest_distinct_sq(subject: &PinInfo, pins: &[PinInfo]) -> Option<f64> {
    let (sx, sy) = subject.position()?;
    let mut closest: Option<f64> = None;
    for other in pins {
        if other.pin == subject.pin {
            continue;
        }
        let Some((ox, oy)) = other.position() else {
            continue;
        };
        let distance = (ox - sx).powi(2) + (oy - sy).powi(2);
        if closest.map_or(true, |c| distance < c) {
            closest = Some(distance);
        }
    }
    closest
}

/// Computes the marker placement for a pin at `(x, y)` image pixels.
///
/// `closest_sq` is the squared distance to the nearest distinct pin from
/// [`nearest_distinct_sq`]. The marker diameter is the on-screen distance
/// to that pin minus [`CROWD_SHRINK_PX`], capped at
/// [`MAX_HEIGHT_FRAC`] of the container height; with no neighbor the cap
/// applies directly.
pub fn marker_layout(x: f64, y: f64, closest_sq: Option<f64>, metrics: &ContainerMetrics) -> MarkerLayout {
    let cap_px = metrics.container_height * MAX_HEIGHT_FRAC;

    let size_px = match closest_sq {
        Some(sq) => {
            // Natural image pixels per container pixel; compensates for
            // the image being drawn scaled.
            let scale = metrics.image_height / metrics.container_height;
            let distance_px = sq.sqrt() as f32 / scale;
            if distance_px < cap_px {
                (distance_px - CROWD_SHRINK_PX).max(0.0)
            } else {
                cap_px
            }
        }
        None => cap_px,
    };

    let height_pct = size_px / metrics.container_height * 100.0;
    MarkerLayout {
        left_pct: x as f32 / metrics.image_width * 100.0,
        top_pct: y as f32 / metrics.image_height * 100.0,
        width_pct: size_px / metrics.container_width * 100.0,
        height_pct,
        font_vw: height_pct / LABEL_FONT_DIVISOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::PinId;

    fn pin(name: &str, x: f64, y: f64) -> PinInfo {
        PinInfo {
            pin: PinId::from(name),
            x: Some(x),
            y: Some(y),
        }
    }

    fn bare_pin(name: &str) -> PinInfo {
        PinInfo {
            pin: PinId::from(name),
            x: None,
            y: None,
        }
    }

    const METRICS: ContainerMetrics = ContainerMetrics {
        container_width: 800.0,
        container_height: 400.0,
        image_width: 1600.0,
        image_height: 800.0,
    };

    #[test]
    fn test_nearest_is_true_minimum() {
        let pins = vec![
            pin("1", 0.0, 0.0),
            pin("2", 3.0, 4.0),
            pin("3", 10.0, 0.0),
            pin("4", 0.0, 30.0),
        ];
        // Pin 2 at distance 5 is the nearest distinct neighbor of pin 1.
        assert_eq!(nearest_distinct_sq(&pins[0], &pins), Some(25.0));
    }

    #[test]
    fn test_nearest_skips_same_designator() {
        let pins = vec![pin("G", 0.0, 0.0), pin("G", 1.0, 0.0), pin("2", 8.0, 6.0)];
        // The twin ground pin one pixel away does not count.
        assert_eq!(nearest_distinct_sq(&pins[0], &pins), Some(100.0));
    }

    #[test]
    fn test_nearest_skips_pins_without_coordinates() {
        let pins = vec![pin("1", 0.0, 0.0), bare_pin("2"), pin("3", 6.0, 8.0)];
        assert_eq!(nearest_distinct_sq(&pins[0], &pins), Some(100.0));
    }

    #[test]
    fn test_no_distinct_neighbor_yields_none() {
        let pins = vec![pin("G", 0.0, 0.0), pin("G", 50.0, 50.0)];
        assert_eq!(nearest_distinct_sq(&pins[0], &pins), None);

        let lonely = vec![pin("1", 5.0, 5.0)];
        assert_eq!(nearest_distinct_sq(&lonely[0], &lonely), None);
    }

    #[test]
    fn test_subject_without_coordinates_yields_none() {
        let pins = vec![bare_pin("1"), pin("2", 3.0, 4.0)];
        assert_eq!(nearest_distinct_sq(&pins[0], &pins), None);
    }

    #[test]
    fn test_crowded_marker_shrinks_below_distance() {
        // 40 image px to the neighbor, image drawn at half scale: the
        // on-screen distance is 20 px, under the 32 px cap.
        let layout = marker_layout(100.0, 100.0, Some(40.0_f64.powi(2)), &METRICS);
        let size_px = layout.height_pct / 100.0 * METRICS.container_height;
        assert!((size_px - (20.0 - CROWD_SHRINK_PX)).abs() < 1e-3);
    }

    #[test]
    fn test_isolated_marker_takes_the_cap() {
        // 1000 image px away: far beyond the cap.
        let layout = marker_layout(100.0, 100.0, Some(1000.0_f64.powi(2)), &METRICS);
        let size_px = layout.height_pct / 100.0 * METRICS.container_height;
        assert!((size_px - METRICS.container_height * MAX_HEIGHT_FRAC).abs() < 1e-3);
    }

    #[test]
    fn test_no_neighbor_takes_the_cap_without_shrink() {
        let layout = marker_layout(100.0, 100.0, None, &METRICS);
        let size_px = layout.height_pct / 100.0 * METRICS.container_height;
        assert!((size_px - METRICS.container_height * MAX_HEIGHT_FRAC).abs() < 1e-3);
    }

    #[test]
    fn test_size_never_exceeds_cap() {
        for distance in [1.0, 5.0, 10.0, 31.0, 32.0, 33.0, 100.0, 10_000.0] {
            let on_screen: f64 = distance;
            // scale is 2.0 for METRICS, so feed image-space distances.
            let sq = (on_screen * 2.0).powi(2);
            let layout = marker_layout(0.0, 0.0, Some(sq), &METRICS);
            let size_px = layout.height_pct / 100.0 * METRICS.container_height;
            assert!(size_px <= METRICS.container_height * MAX_HEIGHT_FRAC + 1e-3);
        }
    }

    #[test]
    fn test_tightly_packed_marker_clamps_at_zero() {
        // Neighbor closer than the shrink gap: the marker collapses
        // rather than going negative.
        let layout = marker_layout(0.0, 0.0, Some(4.0), &METRICS);
        assert!(layout.height_pct >= 0.0);
        assert!(layout.width_pct >= 0.0);
    }

    #[test]
    fn test_position_percentages() {
        let layout = marker_layout(400.0, 200.0, None, &METRICS);
        assert!((layout.left_pct - 25.0).abs() < 1e-4);
        assert!((layout.top_pct - 25.0).abs() < 1e-4);
    }

    #[test]
    fn test_font_tracks_height() {
        let layout = marker_layout(0.0, 0.0, None, &METRICS);
        assert!((layout.font_vw - layout.height_pct / LABEL_FONT_DIVISOR).abs() < 1e-6);
    }

    #[test]
    fn test_non_square_container_distorts_width() {
        // Container twice as wide as tall: width percent is half the
        // height percent for the same pixel size.
        let layout = marker_layout(0.0, 0.0, None, &METRICS);
        assert!((layout.width_pct * 2.0 - layout.height_pct).abs() < 1e-4);
    }
}
