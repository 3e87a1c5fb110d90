//! Built-in demo pinout.
//!
//! Generates a small connector set entirely in memory, including the
//! connector images, so the viewer can be exercised without any files.

use crate::connector::{Connector, ConnectorInfo, ImageInfo, PinId, PinIds, PinInfo, PinSpec};

/// An in-memory RGBA image for a demo connector.
pub struct SampleImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

const BACKGROUND: [u8; 3] = [52, 58, 64];
const BORDER: [u8; 3] = [120, 130, 140];
const WELL: [u8; 3] = [180, 186, 193];
const WELL_CENTER: [u8; 3] = [30, 33, 37];

/// Generates the demo connectors paired with their rendered images.
pub fn sample_pinout() -> Vec<(Connector, SampleImage)> {
    vec![main_connector(), aux_connector()]
}

fn main_connector() -> (Connector, SampleImage) {
    let width = 640;
    let height = 320;

    // Two rows of six pins.
    let mut infos = Vec::new();
    for index in 0..12usize {
        let col = index % 6;
        let row = index / 6;
        infos.push(PinInfo {
            pin: PinId::new((index + 1).to_string()),
            x: Some(80.0 + col as f64 * 96.0),
            y: Some(110.0 + row as f64 * 100.0),
        });
    }

    let specs = vec![
        spec("1", Some(one("10")), "12v", "Battery feed", "red"),
        spec("2", Some(one("11")), "gnd", "Power ground", "black"),
        spec("3", Some(one("30")), "ign", "Ignition coil 1", "yellow"),
        spec("4", Some(one("31")), "ign", "Ignition coil 2", "yellow"),
        spec("5", Some(one("40")), "inj", "Injector 1", "blue"),
        spec("6", Some(one("41")), "inj", "Injector 2", "blue"),
        spec("7", Some(one("50")), "ain", "Throttle position", "green"),
        spec("8", Some(one("51")), "ain", "Coolant temperature", "green"),
        spec("9", Some(one("60")), "can", "CAN high", "white"),
        spec("10", Some(one("61")), "can", "CAN low", "white"),
        spec("11", Some(one("12")), "gnd", "Sensor ground", "black"),
        // A shared signal fanning out to several logical ids.
        spec("12", Some(many(&["20", "21", "21", "22"])), "din", "Switch bank", "gray"),
    ];

    let image = render_image(width, height, &infos);
    (
        Connector {
            info: ConnectorInfo {
                title: Some("Demo main connector".to_string()),
                image: ImageInfo {
                    file: "demo-main".to_string(),
                },
                pins: infos,
            },
            pins: specs,
        },
        image,
    )
}

fn aux_connector() -> (Connector, SampleImage) {
    let width = 360;
    let height = 360;

    // Two signal pins plus a ground designator shared by two physical
    // pins, so one record produces two markers.
    let infos = vec![
        PinInfo {
            pin: PinId::new("A"),
            x: Some(120.0),
            y: Some(120.0),
        },
        PinInfo {
            pin: PinId::new("B"),
            x: Some(240.0),
            y: Some(120.0),
        },
        PinInfo {
            pin: PinId::new("G"),
            x: Some(120.0),
            y: Some(240.0),
        },
        PinInfo {
            pin: PinId::new("G"),
            x: Some(240.0),
            y: Some(240.0),
        },
    ];

    let specs = vec![
        spec("A", Some(one("70")), "ain", "Oil pressure", "green"),
        spec("B", Some(one("71")), "din", "Clutch switch", "gray"),
        spec("G", Some(one("13")), "gnd", "Shield ground", "black"),
    ];

    let image = render_image(width, height, &infos);
    (
        Connector {
            info: ConnectorInfo {
                title: Some("Demo aux connector".to_string()),
                image: ImageInfo {
                    file: "demo-aux".to_string(),
                },
                pins: infos,
            },
            pins: specs,
        },
        image,
    )
}

fn one(id: &str) -> PinIds {
    PinIds::One(PinId::new(id))
}

fn many(ids: &[&str]) -> PinIds {
    PinIds::Many(ids.iter().map(|id| PinId::new(*id)).collect())
}

fn spec(pin: &str, id: Option<PinIds>, pin_type: &str, function: &str, color: &str) -> PinSpec {
    PinSpec {
        pin: Some(PinIds::One(PinId::new(pin))),
        id,
        pin_type: Some(pin_type.to_string()),
        function: Some(function.to_string()),
        color: Some(color.to_string()),
    }
}

/// Paints a flat connector body with a well at each pin position.
fn render_image(width: usize, height: usize, pins: &[PinInfo]) -> SampleImage {
    let mut rgba = vec![0u8; width * height * 4];

    for y in 0..height {
        for x in 0..width {
            let on_border = x < 4 || y < 4 || x >= width - 4 || y >= height - 4;
            let color = if on_border { BORDER } else { BACKGROUND };
            put_pixel(&mut rgba, width, x, y, color);
        }
    }

    for pin in pins {
        if let Some((px, py)) = pin.position() {
            fill_circle(&mut rgba, width, height, px, py, 18.0, WELL);
            fill_circle(&mut rgba, width, height, px, py, 8.0, WELL_CENTER);
        }
    }

    SampleImage { width, height, rgba }
}

fn put_pixel(rgba: &mut [u8], width: usize, x: usize, y: usize, color: [u8; 3]) {
    let offset = (y * width + x) * 4;
    rgba[offset] = color[0];
    rgba[offset + 1] = color[1];
    rgba[offset + 2] = color[2];
    rgba[offset + 3] = 255;
}

fn fill_circle(
    rgba: &mut [u8],
    width: usize,
    height: usize,
    cx: f64,
    cy: f64,
    radius: f64,
    color: [u8; 3],
) {
    let min_x = (cx - radius).floor().max(0.0) as usize;
    let max_x = (cx + radius).ceil().min(width as f64 - 1.0) as usize;
    let min_y = (cy - radius).floor().max(0.0) as usize;
    let max_y = (cy + radius).ceil().min(height as f64 - 1.0) as usize;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            if dx * dx + dy * dy <= radius * radius {
                put_pixel(rgba, width, x, y, color);
            }
        }
    }
}
