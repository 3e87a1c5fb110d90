use serde::Deserialize;
use std::fmt;

/// A pin identifier normalized to canonical text.
///
/// Pinout documents are hand-written and mix scalar styles freely: the
/// same pin may appear as `1`, `1.0` or `"1"` depending on the author.
/// All scalar forms collapse to one canonical string so that lookups
/// between the geometric and semantic pin lists match by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PinId(String);

impl PinId {
    pub fn new(id: impl Into<String>) -> Self {
        PinId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PinId {
    fn from(s: &str) -> Self {
        PinId(s.to_string())
    }
}

impl<'de> Deserialize<'de> for PinId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Scalar {
            Int(i64),
            Float(f64),
            Bool(bool),
            Text(String),
        }

        let canonical = match Scalar::deserialize(deserializer)? {
            Scalar::Int(v) => v.to_string(),
            // Integral floats collapse to the integer form so `1.0` and `1`
            // name the same pin.
            Scalar::Float(v) if v.is_finite() && v.fract() == 0.0 => (v as i64).to_string(),
            Scalar::Float(v) => v.to_string(),
            Scalar::Bool(v) => v.to_string(),
            Scalar::Text(s) => s,
        };
        Ok(PinId(canonical))
    }
}

/// One pin identifier, or a list of them.
///
/// Used both for `PinSpec::pin` (a designator or group of designators)
/// and `PinSpec::id` (a logical id or sequence of logical ids).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PinIds {
    One(PinId),
    Many(Vec<PinId>),
}

impl PinIds {
    pub fn iter(&self) -> std::slice::Iter<'_, PinId> {
        match self {
            PinIds::One(id) => std::slice::from_ref(id).iter(),
            PinIds::Many(ids) => ids.iter(),
        }
    }

    pub fn contains(&self, id: &PinId) -> bool {
        self.iter().any(|candidate| candidate == id)
    }

    pub fn first(&self) -> Option<&PinId> {
        self.iter().next()
    }

    /// True for the list form, regardless of length.
    pub fn is_sequence(&self) -> bool {
        matches!(self, PinIds::Many(_))
    }

    /// All identifiers joined for single-cell display.
    pub fn joined(&self) -> String {
        let parts: Vec<&str> = self.iter().map(|id| id.as_str()).collect();
        parts.join(", ")
    }
}

/// Geometric pin record: a designator and its pixel position within the
/// connector image's natural dimensions. Either coordinate may be absent
/// in hand-authored documents.
#[derive(Debug, Clone, Deserialize)]
pub struct PinInfo {
    pub pin: PinId,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

impl PinInfo {
    /// Both coordinates, or `None` if the pin has no usable geometry.
    pub fn position(&self) -> Option<(f64, f64)> {
        Some((self.x?, self.y?))
    }
}

/// Semantic pin record: what the pin is for.
#[derive(Debug, Clone, Deserialize)]
pub struct PinSpec {
    #[serde(default)]
    pub pin: Option<PinIds>,
    #[serde(default)]
    pub id: Option<PinIds>,
    #[serde(default, rename = "type")]
    pub pin_type: Option<String>,
    #[serde(default)]
    pub function: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl PinSpec {
    /// True when this spec addresses the given physical pin designator.
    pub fn addresses(&self, designator: &PinId) -> bool {
        self.pin
            .as_ref()
            .map(|pin| pin.contains(designator))
            .unwrap_or(false)
    }
}

/// Reference to the connector photograph or drawing.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageInfo {
    pub file: String,
}

/// Geometric half of a connector document.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectorInfo {
    #[serde(default)]
    pub title: Option<String>,
    pub image: ImageInfo,
    #[serde(default)]
    pub pins: Vec<PinInfo>,
}

/// One documented hardware connector: an image, the physical pin
/// positions, and the semantic pin descriptions.
#[derive(Debug, Clone, Deserialize)]
pub struct Connector {
    pub info: ConnectorInfo,
    #[serde(default)]
    pub pins: Vec<PinSpec>,
}

impl Connector {
    /// Heading text for this connector: the explicit title, or the image
    /// file name without its extension.
    pub fn display_name(&self) -> String {
        if let Some(title) = &self.info.title {
            return title.clone();
        }
        std::path::Path::new(&self.info.image.file)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.info.image.file.clone())
    }

    /// All geometric pins addressed by the given spec, in document order.
    pub fn matching_info<'a>(&'a self, spec: &'a PinSpec) -> impl Iterator<Item = &'a PinInfo> {
        self.info
            .pins
            .iter()
            .filter(move |pinfo| spec.addresses(&pinfo.pin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_id_scalar_forms_are_equal() {
        let from_int: PinId = serde_yaml::from_str("3").unwrap();
        let from_float: PinId = serde_yaml::from_str("3.0").unwrap();
        let from_text: PinId = serde_yaml::from_str("\"3\"").unwrap();

        assert_eq!(from_int, from_float);
        assert_eq!(from_int, from_text);
        assert_eq!(from_int.as_str(), "3");
    }

    #[test]
    fn test_pin_id_text_is_verbatim() {
        let id: PinId = serde_yaml::from_str("A12").unwrap();
        assert_eq!(id.as_str(), "A12");
    }

    #[test]
    fn test_pin_ids_one_and_many() {
        let one: PinIds = serde_yaml::from_str("7").unwrap();
        assert!(!one.is_sequence());
        assert!(one.contains(&PinId::from("7")));
        assert_eq!(one.joined(), "7");

        let many: PinIds = serde_yaml::from_str("[1, 2, A3]").unwrap();
        assert!(many.is_sequence());
        assert!(many.contains(&PinId::from("A3")));
        assert!(!many.contains(&PinId::from("4")));
        assert_eq!(many.joined(), "1, 2, A3");
    }

    #[test]
    fn test_pin_spec_defaults() {
        let spec: PinSpec = serde_yaml::from_str("function: Ignition output").unwrap();
        assert!(spec.pin.is_none());
        assert!(spec.id.is_none());
        assert!(spec.pin_type.is_none());
        assert_eq!(spec.function.as_deref(), Some("Ignition output"));
    }

    #[test]
    fn test_spec_addresses_group() {
        let spec: PinSpec = serde_yaml::from_str("pin: [4, 5]\ntype: gnd").unwrap();
        assert!(spec.addresses(&PinId::from("4")));
        assert!(spec.addresses(&PinId::from("5")));
        assert!(!spec.addresses(&PinId::from("6")));
    }

    #[test]
    fn test_connector_display_name_falls_back_to_image_stem() {
        let connector: Connector = serde_yaml::from_str(
            "info:\n  image:\n    file: wiring/main_harness.jpg\n  pins: []\npins: []\n",
        )
        .unwrap();
        assert_eq!(connector.display_name(), "main_harness");
    }

    #[test]
    fn test_matching_info_respects_duplicate_designators() {
        let connector: Connector = serde_yaml::from_str(
            "info:\n  image:\n    file: c.png\n  pins:\n    - pin: G\n      x: 10\n      y: 10\n    - pin: G\n      x: 90\n      y: 10\n    - pin: 2\n      x: 50\n      y: 40\npins:\n  - pin: G\n    type: gnd\n",
        )
        .unwrap();
        let spec = &connector.pins[0];
        let matched: Vec<_> = connector.matching_info(spec).collect();
        assert_eq!(matched.len(), 2);
    }
}
