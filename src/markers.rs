//! Marker entities and global selection state.
//!
//! Every clickable pin marker on every connector lives in one
//! [`MarkerRegistry`]. Selection is redetermined from scratch on each
//! click: the clicked marker becomes the single selected marker, and
//! every marker on the page whose type matches the clicked record's type
//! is highlighted. Owning all markers in one place replaces page-wide
//! element scans with a single authoritative pass.

/// Stable handle to a marker within the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub usize);

/// One clickable marker, created when its connector's overlay
/// initializes and mutated on every selection change.
#[derive(Debug, Clone)]
pub struct Marker {
    pub id: MarkerId,
    /// Index of the owning connector in the loaded document set.
    pub connector: usize,
    /// Index of the pin record this marker was created from; fixed at
    /// creation, resolves clicks back to the full record.
    pub spec_index: usize,
    /// Designator text drawn inside the marker.
    pub label: String,
    /// Signal category used for highlight matching. Absent categories
    /// match each other.
    pub pin_type: Option<String>,
    /// Position in image pixels.
    pub x: f64,
    pub y: f64,
    /// Squared distance to the nearest distinct pin, image pixels.
    pub closest_sq: Option<f64>,
    pub highlighted: bool,
    pub selected: bool,
}

/// Owner of all markers across all connectors.
///
/// Responsibilities:
/// - Allocating marker ids at overlay install time
/// - Applying the global highlight/selected rules on selection
/// - Answering selection queries for rendering
#[derive(Debug, Default)]
pub struct MarkerRegistry {
    markers: Vec<Marker>,
    selected: Option<MarkerId>,
}

impl MarkerRegistry {
    /// Creates an empty registry with nothing selected.
    pub fn new() -> Self {
        Self {
            markers: Vec::new(),
            selected: None,
        }
    }

    /// Registers a marker and returns its handle.
    pub fn add(
        &mut self,
        connector: usize,
        spec_index: usize,
        label: String,
        pin_type: Option<String>,
        x: f64,
        y: f64,
        closest_sq: Option<f64>,
    ) -> MarkerId {
        let id = MarkerId(self.markers.len());
        self.markers.push(Marker {
            id,
            connector,
            spec_index,
            label,
            pin_type,
            x,
            y,
            closest_sq,
            highlighted: false,
            selected: false,
        });
        id
    }

    /// Removes all markers and clears the selection.
    pub fn clear(&mut self) {
        self.markers.clear();
        self.selected = None;
    }

    // ===== Queries =====

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Marker> {
        self.markers.iter()
    }

    /// Markers belonging to one connector, in creation order.
    pub fn for_connector(&self, connector: usize) -> impl Iterator<Item = &Marker> {
        self.markers.iter().filter(move |m| m.connector == connector)
    }

    /// The currently selected marker, if any.
    pub fn selected(&self) -> Option<MarkerId> {
        self.selected
    }

    // ===== Selection Mutations =====

    /// Applies a selection: every marker whose type equals `pin_type`
    /// becomes highlighted, every other marker loses its highlight, and
    /// `selected_marker` becomes the sole selected marker.
    ///
    /// The pass covers all connectors, not just the clicked one. Calling
    /// this twice with the same arguments is a no-op the second time.
    pub fn select_by_type(&mut self, pin_type: Option<&str>, selected_marker: MarkerId) {
        for marker in &mut self.markers {
            marker.highlighted = marker.pin_type.as_deref() == pin_type;
            marker.selected = false;
        }
        self.selected = None;
        if let Some(marker) = self.markers.get_mut(selected_marker.0) {
            marker.selected = true;
            self.selected = Some(selected_marker);
        }
    }

    /// Selects a marker, highlighting by the marker's own stored type.
    pub fn select_marker(&mut self, id: MarkerId) {
        let Some(pin_type) = self.get(id).map(|m| m.pin_type.clone()) else {
            return;
        };
        self.select_by_type(pin_type.as_deref(), id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with_types(types: &[Option<&str>]) -> MarkerRegistry {
        let mut registry = MarkerRegistry::new();
        for (i, t) in types.iter().enumerate() {
            registry.add(
                i % 2,
                i,
                (i + 1).to_string(),
                t.map(|s| s.to_string()),
                i as f64 * 10.0,
                0.0,
                Some(100.0),
            );
        }
        registry
    }

    fn flags(registry: &MarkerRegistry) -> Vec<(bool, bool)> {
        registry.iter().map(|m| (m.highlighted, m.selected)).collect()
    }

    #[test]
    fn test_select_highlights_exactly_matching_types() {
        let mut registry = registry_with_types(&[Some("gnd"), Some("12v"), Some("gnd"), Some("can")]);
        registry.select_marker(MarkerId(0));

        assert_eq!(
            flags(&registry),
            vec![(true, true), (false, false), (true, false), (false, false)]
        );
        assert_eq!(registry.selected(), Some(MarkerId(0)));
    }

    #[test]
    fn test_second_click_replaces_first() {
        let mut registry = registry_with_types(&[Some("gnd"), Some("12v"), Some("gnd")]);
        registry.select_marker(MarkerId(0));
        registry.select_marker(MarkerId(1));

        assert_eq!(
            flags(&registry),
            vec![(false, false), (true, true), (false, false)]
        );
        assert_eq!(registry.selected(), Some(MarkerId(1)));
    }

    #[test]
    fn test_repeated_click_is_idempotent() {
        let mut registry = registry_with_types(&[Some("gnd"), Some("gnd"), Some("12v")]);
        registry.select_marker(MarkerId(1));
        let first = flags(&registry);
        registry.select_marker(MarkerId(1));
        assert_eq!(flags(&registry), first);
    }

    #[test]
    fn test_absent_types_match_each_other() {
        let mut registry = registry_with_types(&[None, Some("gnd"), None]);
        registry.select_marker(MarkerId(0));

        assert_eq!(
            flags(&registry),
            vec![(true, true), (false, false), (true, false)]
        );
    }

    #[test]
    fn test_selection_spans_connectors() {
        // registry_with_types alternates connectors 0 and 1.
        let mut registry = registry_with_types(&[Some("can"), Some("can"), Some("can")]);
        registry.select_marker(MarkerId(0));

        assert!(registry.iter().all(|m| m.highlighted));
        assert_eq!(registry.for_connector(1).count(), 1);
    }

    #[test]
    fn test_nothing_selected_initially() {
        let registry = registry_with_types(&[Some("gnd")]);
        assert_eq!(registry.selected(), None);
        assert!(!registry.iter().any(|m| m.selected || m.highlighted));
    }

    #[test]
    fn test_clear_resets_selection() {
        let mut registry = registry_with_types(&[Some("gnd")]);
        registry.select_marker(MarkerId(0));
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.selected(), None);
    }
}
