//! Points of interest shown on the globe.
//!
//! A [`PointCatalog`] is the read-only, ordered set of hoverable points.
//! Points are identity-compared through their [`PointId`], which is simply
//! their position in the catalog.

pub mod coords;

use std::collections::BTreeMap;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use self::coords::is_valid_coordinate;
use crate::error::TerraError;

const SAMPLE_CITIES: &str = include_str!("../../assets/points/cities.json");

/// Stable identifier of a point within its [`PointCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub u32);

/// A single hoverable point.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PointOfInterest {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
    /// Display label (city or port name).
    pub label: String,
    /// Free-form detail fields for the presentation layer.
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

/// Ordered, read-only collection of points with label lookup.
#[derive(Debug, Clone, Default)]
pub struct PointCatalog {
    points: Vec<PointOfInterest>,
    by_label: FxHashMap<String, PointId>,
}

impl PointCatalog {
    /// Build a catalog, dropping points with invalid coordinates.
    #[must_use]
    pub fn new(points: Vec<PointOfInterest>) -> Self {
        let mut kept = Vec::with_capacity(points.len());
        for point in points {
            if is_valid_coordinate(point.lat, point.lng) {
                kept.push(point);
            } else {
                log::warn!(
                    "Skipping point '{}' with invalid coordinates ({}, {})",
                    point.label,
                    point.lat,
                    point.lng
                );
            }
        }

        let mut by_label = FxHashMap::default();
        for (i, point) in kept.iter().enumerate() {
            let _ = by_label
                .entry(point.label.clone())
                .or_insert(PointId(i as u32));
        }

        Self {
            points: kept,
            by_label,
        }
    }

    /// Parse a JSON array of points.
    pub fn from_json(json: &str) -> Result<Self, TerraError> {
        let points: Vec<PointOfInterest> = serde_json::from_str(json)?;
        Ok(Self::new(points))
    }

    /// Load a JSON array of points from disk.
    pub fn load(path: &Path) -> Result<Self, TerraError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        log::info!(
            "Loaded {} points from '{}'",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// The six demo cities bundled with the crate.
    #[must_use]
    pub fn sample_cities() -> Self {
        Self::from_json(SAMPLE_CITIES).unwrap_or_else(|e| {
            log::error!("Bundled city data is malformed: {e}");
            Self::default()
        })
    }

    /// Look up a point by id.
    #[must_use]
    pub fn get(&self, id: PointId) -> Option<&PointOfInterest> {
        self.points.get(id.0 as usize)
    }

    /// Whether `id` names a point in this catalog.
    #[must_use]
    pub fn contains(&self, id: PointId) -> bool {
        (id.0 as usize) < self.points.len()
    }

    /// First point carrying `label`.
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<PointId> {
        self.by_label.get(label).copied()
    }

    /// Iterate points in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (PointId, &PointOfInterest)> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| (PointId(i as u32), p))
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the catalog has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
