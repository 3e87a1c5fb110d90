//! Table row construction for the pinout and detail tables.
//!
//! Rows are plain display data. The detail table is rebuilt from scratch
//! on every selection change; the pinout table is built once per
//! connector when its overlay initializes.

use crate::connector::{PinIds, PinSpec};
use crate::ordered_set::OrderedSet;

/// One rendered table row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Physical pin designator(s).
    pub pin: String,
    /// Logical id(s).
    pub id: String,
    /// Signal category; drives the row's type cell color.
    pub pin_type: Option<String>,
    pub function: String,
    pub color: String,
}

fn base_row(spec: &PinSpec, id: String) -> TableRow {
    TableRow {
        pin: spec.pin.as_ref().map(PinIds::joined).unwrap_or_default(),
        id,
        pin_type: spec.pin_type.clone(),
        function: spec.function.clone().unwrap_or_default(),
        color: spec.color.clone().unwrap_or_default(),
    }
}

/// Rows for the detail table describing one selected pin record.
///
/// A spec whose `id` is a sequence fans out into one row per unique id,
/// first occurrence first; every fan-out row repeats the shared
/// designator, type, function and color. A scalar (or absent) id yields
/// exactly one row.
pub fn detail_rows(spec: &PinSpec) -> Vec<TableRow> {
    match &spec.id {
        Some(ids @ PinIds::Many(_)) => {
            let unique: OrderedSet<_> = ids.iter().cloned().collect();
            unique
                .into_vec()
                .into_iter()
                .map(|id| base_row(spec, id.to_string()))
                .collect()
        }
        Some(PinIds::One(id)) => vec![base_row(spec, id.to_string())],
        None => vec![base_row(spec, String::new())],
    }
}

/// The single full-pinout-table row for a spec, ids joined into one cell.
pub fn summary_row(spec: &PinSpec) -> TableRow {
    base_row(spec, spec.id.as_ref().map(PinIds::joined).unwrap_or_default())
}
