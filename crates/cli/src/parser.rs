//! Loading manifest parser.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use truck_loader::{Crate, Truck};

/// Errors that can occur when parsing manifests.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid manifest format: {0}")]
    InvalidFormat(String),
}

/// A parsed loading request.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Cargo space of the truck.
    pub truck: Truck,
    /// Crates to load, in listed order.
    pub crates: Vec<Crate>,
}

/// Parser for JSON loading manifests.
#[derive(Debug, Default)]
pub struct ManifestParser;

impl ManifestParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses a manifest from a JSON file.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Manifest, ParseError> {
        let content = fs::read_to_string(path)?;
        self.parse_json(&content)
    }

    /// Parses a manifest from a JSON string.
    pub fn parse_json(&self, json: &str) -> Result<Manifest, ParseError> {
        let raw: RawManifest = serde_json::from_str(json)?;
        self.convert_raw_manifest(raw)
    }

    fn convert_raw_manifest(&self, raw: RawManifest) -> Result<Manifest, ParseError> {
        let truck = Truck::new(
            dimension("truck width", raw.truck.width)?,
            dimension("truck height", raw.truck.height)?,
            dimension("truck length", raw.truck.length)?,
        );

        let crates = raw
            .crates
            .into_iter()
            .map(|c| self.convert_raw_crate(c))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Manifest { truck, crates })
    }

    fn convert_raw_crate(&self, raw: RawCrate) -> Result<Crate, ParseError> {
        let id = u32::try_from(raw.id)
            .map_err(|_| ParseError::InvalidFormat(format!("crate ID {} is out of range", raw.id)))?;

        Ok(Crate::new(
            id,
            dimension(&format!("crate {id} width"), raw.width)?,
            dimension(&format!("crate {id} height"), raw.height)?,
            dimension(&format!("crate {id} length"), raw.length)?,
        ))
    }
}

fn dimension(what: &str, value: i64) -> Result<u32, ParseError> {
    match u32::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(ParseError::InvalidFormat(format!(
            "{what} must be a positive integer, got {value}"
        ))),
    }
}

/// Raw manifest as parsed from JSON.
#[derive(Debug, Deserialize)]
struct RawManifest {
    truck: RawTruck,
    #[serde(default)]
    crates: Vec<RawCrate>,
}

/// Raw truck dimensions as parsed from JSON.
#[derive(Debug, Deserialize)]
struct RawTruck {
    width: i64,
    height: i64,
    length: i64,
}

/// Raw crate as parsed from JSON.
#[derive(Debug, Deserialize)]
struct RawCrate {
    #[serde(alias = "crateId")]
    id: i64,
    width: i64,
    height: i64,
    length: i64,
}
