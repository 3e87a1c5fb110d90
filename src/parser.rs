use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::connector::Connector;

/// Parses a pinout text: a stream of `---`-separated YAML documents, one
/// connector per document.
///
/// Documents are parsed strictly in order; a malformed document fails the
/// whole stream with its index in the error chain. Empty documents (a
/// trailing `---`, say) are skipped.
pub fn parse_pinout(text: &str) -> Result<Vec<Connector>> {
    let mut connectors = Vec::new();
    for (index, document) in serde_yaml::Deserializer::from_str(text).enumerate() {
        // serde_yaml yields a unit value for empty documents.
        let value = serde_yaml::Value::deserialize(document)
            .with_context(|| format!("connector document {} is not valid YAML", index))?;
        if value.is_null() {
            continue;
        }
        let connector: Connector = serde_yaml::from_value(value)
            .with_context(|| format!("connector document {} has an unexpected shape", index))?;
        connectors.push(connector);
    }
    Ok(connectors)
}

/// Reads connector documents from pinout files.
pub struct PinoutReader;

impl PinoutReader {
    pub fn new() -> Self {
        PinoutReader
    }

    /// Reads and parses a pinout file.
    pub fn read(&self, path: impl AsRef<Path>) -> Result<Vec<Connector>> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read pinout file {}", path.display()))?;
        parse_pinout(&text)
            .with_context(|| format!("failed to parse pinout file {}", path.display()))
    }
}

impl Default for PinoutReader {
    fn default() -> Self {
        Self::new()
    }
}
