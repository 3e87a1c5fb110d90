use anyhow::Result;
use pinscope::{
    detail_rows, marker_layout, nearest_distinct_sq, parse_pinout, sample_pinout, summary_row,
    Connector, ContainerMetrics, MarkerId, MarkerRegistry, PinId, MAX_HEIGHT_FRAC,
};

const HARNESS: &str = "\
info:
  title: Engine harness
  image:
    file: harness.jpg
  pins:
    - pin: 1
      x: 100
      y: 60
    - pin: 2
      x: 180
      y: 60
    - pin: 3
      x: 100
      y: 160
    - pin: G
      x: 260
      y: 60
    - pin: G
      x: 260
      y: 160
    - pin: 9
pins:
  - pin: 1
    id: 10
    type: 12v
    function: Battery feed
    color: red
  - pin: 2
    id: [1, 2, 2, 3]
    type: din
    function: Switch bank
    color: gray
  - pin: 3
    id: 30
    type: 12v
    function: Relay feed
    color: red
  - pin: G
    id: 13
    type: gnd
    function: Ground
    color: black
  - pin: 9
    id: 90
    type: ain
    function: Unplaced sensor
    color: green
---
info:
  image:
    file: body.png
  pins:
    - pin: A
      x: 40
      y: 40
pins:
  - pin: A
    id: 70
    type: 12v
    function: Body feed
    color: red
";

/// Builds registry markers for a parsed connector the way the viewer
/// does at overlay install time, returning the marker ids and the full
/// pinout table row count.
fn install_connector(
    registry: &mut MarkerRegistry,
    index: usize,
    connector: &Connector,
) -> (Vec<MarkerId>, usize) {
    let mut ids = Vec::new();
    let mut rows = 0;

    for (spec_index, spec) in connector.pins.iter().enumerate() {
        if spec.pin.is_none() {
            continue;
        }

        let before = ids.len();
        for pinfo in connector.matching_info(spec) {
            let Some((x, y)) = pinfo.position() else {
                continue;
            };
            ids.push(registry.add(
                index,
                spec_index,
                pinfo.pin.to_string(),
                spec.pin_type.clone(),
                x,
                y,
                nearest_distinct_sq(pinfo, &connector.info.pins),
            ));
        }
        if ids.len() > before {
            rows += 1;
        }
    }

    (ids, rows)
}

#[test]
fn test_parse_and_install_markers() -> Result<()> {
    let connectors = parse_pinout(HARNESS)?;
    assert_eq!(connectors.len(), 2);

    let mut registry = MarkerRegistry::new();
    let (first_ids, first_rows) = install_connector(&mut registry, 0, &connectors[0]);
    let (second_ids, second_rows) = install_connector(&mut registry, 1, &connectors[1]);

    // Pins 1, 2, 3 plus two physical G pins; pin 9 has no coordinates
    // and produces neither a marker nor a table row.
    assert_eq!(first_ids.len(), 5);
    assert_eq!(first_rows, 4);
    assert_eq!(second_ids.len(), 1);
    assert_eq!(second_rows, 1);

    // The shared ground designator fans one record out to two markers.
    let grounds: Vec<_> = registry
        .iter()
        .filter(|m| m.pin_type.as_deref() == Some("gnd"))
        .collect();
    assert_eq!(grounds.len(), 2);
    assert_eq!(grounds[0].spec_index, grounds[1].spec_index);

    Ok(())
}

#[test]
fn test_unplaced_pin_is_silently_skipped() -> Result<()> {
    let connectors = parse_pinout(HARNESS)?;
    let mut registry = MarkerRegistry::new();
    let (ids, _) = install_connector(&mut registry, 0, &connectors[0]);

    assert!(registry.iter().all(|m| m.label != "9"));
    assert!(ids.iter().all(|id| registry.get(*id).is_some()));
    Ok(())
}

#[test]
fn test_nearest_distances_in_document() -> Result<()> {
    let connectors = parse_pinout(HARNESS)?;
    let info = &connectors[0].info.pins;

    // Pin 1 at (100,60): nearest distinct pin is pin 2 at (180,60).
    assert_eq!(nearest_distinct_sq(&info[0], info), Some(80.0 * 80.0));

    // A ground pin's nearest distinct neighbor skips its twin: from
    // (260,60) the nearest non-G pin is pin 2 at (180,60).
    assert_eq!(nearest_distinct_sq(&info[3], info), Some(80.0 * 80.0));

    // The unplaced pin has no distance at all.
    assert_eq!(nearest_distinct_sq(&info[5], info), None);
    Ok(())
}

#[test]
fn test_marker_size_cap_holds_for_document() -> Result<()> {
    let connectors = parse_pinout(HARNESS)?;
    let connector = &connectors[0];
    let metrics = ContainerMetrics {
        container_width: 600.0,
        container_height: 300.0,
        image_width: 1200.0,
        image_height: 600.0,
    };

    for pinfo in &connector.info.pins {
        let Some((x, y)) = pinfo.position() else {
            continue;
        };
        let layout = marker_layout(x, y, nearest_distinct_sq(pinfo, &connector.info.pins), &metrics);
        let size_px = layout.height_pct / 100.0 * metrics.container_height;
        assert!(size_px <= metrics.container_height * MAX_HEIGHT_FRAC + 1e-3);
        assert!(size_px >= 0.0);
    }
    Ok(())
}

#[test]
fn test_detail_fanout_for_shared_record() -> Result<()> {
    let connectors = parse_pinout(HARNESS)?;
    let switch_bank = &connectors[0].pins[1];

    let rows = detail_rows(switch_bank);
    assert_eq!(rows.len(), 3);
    let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    for row in &rows {
        assert_eq!(row.pin, "2");
        assert_eq!(row.function, "Switch bank");
    }

    // The full-table summary keeps the raw sequence in one cell.
    assert_eq!(summary_row(switch_bank).id, "1, 2, 2, 3");
    Ok(())
}

#[test]
fn test_selection_spans_both_connectors() -> Result<()> {
    let connectors = parse_pinout(HARNESS)?;
    let mut registry = MarkerRegistry::new();
    for (index, connector) in connectors.iter().enumerate() {
        install_connector(&mut registry, index, connector);
    }

    // Click the 12v pin on the first connector: both of its 12v
    // siblings highlight, including the one on the second connector.
    let twelve_volt = registry
        .iter()
        .find(|m| m.label == "1")
        .map(|m| m.id)
        .unwrap();
    registry.select_marker(twelve_volt);

    let highlighted: Vec<&str> = registry
        .iter()
        .filter(|m| m.highlighted)
        .map(|m| m.label.as_str())
        .collect();
    assert_eq!(highlighted, vec!["1", "3", "A"]);
    assert_eq!(registry.selected(), Some(twelve_volt));
    assert_eq!(registry.iter().filter(|m| m.selected).count(), 1);

    // Clicking a ground pin afterwards swaps the highlight set
    // entirely and moves the selection.
    let ground = registry
        .iter()
        .find(|m| m.pin_type.as_deref() == Some("gnd"))
        .map(|m| m.id)
        .unwrap();
    registry.select_marker(ground);

    let highlighted: Vec<&str> = registry
        .iter()
        .filter(|m| m.highlighted)
        .map(|m| m.label.as_str())
        .collect();
    assert_eq!(highlighted, vec!["G", "G"]);
    assert_eq!(registry.selected(), Some(ground));
    assert!(!registry.get(twelve_volt).unwrap().selected);
    Ok(())
}

#[test]
fn test_demo_pinout_installs_cleanly() {
    let demo = sample_pinout();
    assert!(!demo.is_empty());

    let mut registry = MarkerRegistry::new();
    for (index, (connector, image)) in demo.iter().enumerate() {
        let (ids, rows) = install_connector(&mut registry, index, connector);
        assert!(!ids.is_empty());
        assert!(rows > 0);
        assert_eq!(image.rgba.len(), image.width * image.height * 4);

        // Every marker sits inside its image.
        for id in ids {
            let marker = registry.get(id).unwrap();
            assert!(marker.x >= 0.0 && marker.x < image.width as f64);
            assert!(marker.y >= 0.0 && marker.y < image.height as f64);
        }
    }

    // The demo aux connector shares a ground designator across two
    // physical pins.
    let shared: Vec<_> = registry
        .iter()
        .filter(|m| m.label == "G")
        .collect();
    assert_eq!(shared.len(), 2);
}

#[test]
fn test_pin_id_matching_is_scalar_normalized() -> Result<()> {
    // Quoted spec designator matches the unquoted geometric pin.
    let text = "\
info:
  image:
    file: c.png
  pins:
    - pin: 4
      x: 10
      y: 10
pins:
  - pin: \"4\"
    id: 44
    type: inj
    function: Injector 4
";
    let connectors = parse_pinout(text)?;
    let spec = &connectors[0].pins[0];
    assert!(spec.addresses(&PinId::from("4")));
    assert_eq!(connectors[0].matching_info(spec).count(), 1);
    Ok(())
}
