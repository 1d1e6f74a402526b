use crate::api::cell::GeoHashCell;
use crate::core::cover::{SearchBox, cover};
use crate::util::error::GeoHashError;
use geo::BoundingRect;
use geo_types::{MultiPolygon, Polygon, Rect};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The set of same-length geohashes covering a bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coverage {
    hashes: BTreeSet<String>,
    hash_length: usize,
}

impl Coverage {
    pub fn builder() -> CoverageBuilder {
        CoverageBuilder::new()
    }

    pub fn hash_length(&self) -> usize {
        self.hash_length
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    pub fn hashes(&self) -> &BTreeSet<String> {
        &self.hashes
    }

    pub fn into_hashes(self) -> BTreeSet<String> {
        self.hashes
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.hashes.iter()
    }

    pub fn contains(&self, hash: &str) -> bool {
        self.hashes.contains(hash)
    }

    pub fn to_cells(&self) -> Result<Vec<GeoHashCell>, GeoHashError> {
        self.hashes
            .iter()
            .map(|hash| GeoHashCell::from_hash(hash))
            .collect()
    }

    pub fn to_polygons(&self) -> Result<Vec<Polygon<f64>>, GeoHashError> {
        Ok(self
            .to_cells()?
            .iter()
            .map(|cell| cell.to_polygon())
            .collect())
    }

    /// Extent of all covering cells. A coverage across the antimeridian spans the full
    /// longitude range.
    pub fn bounding_rect(&self) -> Result<Option<Rect<f64>>, GeoHashError> {
        Ok(MultiPolygon::new(self.to_polygons()?).bounding_rect())
    }
}

/// Covers a bounding box with at least `min_hashes` geohashes, keeping the chosen length.
///
/// See [`hashes_to_cover_bounding_box`](crate::hashes_to_cover_bounding_box) for how the
/// corners and length are chosen.
pub fn cover_bounding_box(
    top_lat: f64,
    left_lon: f64,
    bottom_lat: f64,
    right_lon: f64,
    min_hashes: usize,
) -> Result<Coverage, GeoHashError> {
    let search = SearchBox::new(top_lat, left_lon, bottom_lat, right_lon);
    let (hash_length, hashes) = cover(&search, min_hashes)?;
    Ok(Coverage {
        hashes,
        hash_length,
    })
}

#[derive(Debug, Default)]
pub struct CoverageBuilder {
    top_left: Option<(f64, f64)>,
    bottom_right: Option<(f64, f64)>,
    min_hashes: Option<usize>,
}

impl CoverageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top_left(mut self, lat: f64, lon: f64) -> Self {
        self.top_left = Some((lat, lon));
        self
    }

    pub fn bottom_right(mut self, lat: f64, lon: f64) -> Self {
        self.bottom_right = Some((lat, lon));
        self
    }

    /// Sets both corners from a rectangle with x = longitude, y = latitude.
    pub fn rect(mut self, rect: &Rect<f64>) -> Self {
        self.top_left = Some((rect.max().y, rect.min().x));
        self.bottom_right = Some((rect.min().y, rect.max().x));
        self
    }

    /// Defaults to 1.
    pub fn min_hashes(mut self, min_hashes: usize) -> Self {
        self.min_hashes = Some(min_hashes);
        self
    }

    pub fn build(self) -> Result<Coverage, GeoHashError> {
        let (top_lat, left_lon) = self.top_left.ok_or_else(|| {
            GeoHashError::InvalidArgument("top-left corner must be set".to_string())
        })?;
        let (bottom_lat, right_lon) = self.bottom_right.ok_or_else(|| {
            GeoHashError::InvalidArgument("bottom-right corner must be set".to_string())
        })?;

        cover_bounding_box(
            top_lat,
            left_lon,
            bottom_lat,
            right_lon,
            self.min_hashes.unwrap_or(1),
        )
    }
}
