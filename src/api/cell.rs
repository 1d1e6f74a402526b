use crate::core::adjacency::{Direction, adjacent_hash, neighbours};
use crate::core::codec::{cell_contains, decode, decode_bounds, encode, encode_point};
use crate::core::constants::BASE32;
use crate::core::geometry::{create_cell_from_rect, polygon_to_geojson};
use crate::util::coord::Coordinate;
use crate::util::error::GeoHashError;
use geo_types::{Point, Polygon, Rect};
use std::fmt;

/// A single cell of the geohash grid.
///
/// Each `GeoHashCell` carries its hash, the centre point and extent of the cell in WGS84
/// degrees (x = longitude, y = latitude), and the hash length.
///
/// # Example
///
/// ```
/// use geohash_rs::GeoHashCell;
///
/// # fn main() -> Result<(), geohash_rs::GeoHashError> {
/// let cell = GeoHashCell::from_lat_lon(38.89710201881826, -77.03669792041183, 6)?;
/// assert_eq!(cell.hash, "dqcjqc");
/// println!("Centre: ({}, {})", cell.lat(), cell.lon());
///
/// // Convert the cell to a polygon for GIS operations
/// let polygon = cell.to_polygon();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeoHashCell {
    /// The geohash of this cell (lower-case)
    pub hash: String,
    /// Centre of the cell
    pub center: Point<f64>,
    /// Full extent of the cell
    pub bounds: Rect<f64>,
    /// Number of characters in the hash
    pub length: usize,
}

impl GeoHashCell {
    /// Create a cell from an existing geohash.
    ///
    /// # Example
    /// ```
    /// use geohash_rs::GeoHashCell;
    ///
    /// # fn main() -> Result<(), geohash_rs::GeoHashError> {
    /// let cell = GeoHashCell::from_lat_lon(51.5074, -0.1278, 8)?;
    /// let restored = GeoHashCell::from_hash(&cell.hash)?;
    /// assert_eq!(cell, restored);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_hash(hash: &str) -> Result<Self, GeoHashError> {
        if hash.is_empty() {
            return Err(GeoHashError::InvalidArgument(
                "a cell needs a hash of at least one character".to_string(),
            ));
        }
        let center = decode(hash)?;
        let bounds = decode_bounds(hash)?;

        Ok(Self {
            hash: hash.to_ascii_lowercase(),
            center,
            bounds,
            length: hash.len(),
        })
    }

    /// Create the cell of the given length containing a latitude/longitude pair.
    pub fn from_lat_lon(lat: f64, lon: f64, length: usize) -> Result<Self, GeoHashError> {
        Self::from_hash(&encode(lat, lon, length)?)
    }

    /// Create the cell of the given length containing a coordinate.
    ///
    /// # Example
    /// ```
    /// use geohash_rs::GeoHashCell;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), geohash_rs::GeoHashError> {
    /// // From (lon, lat) tuple
    /// let cell = GeoHashCell::from_point(&(-49.265506, -25.382708), 6)?;
    /// // From Point
    /// let same = GeoHashCell::from_point(&Point::new(-49.265506, -25.382708), 6)?;
    /// assert_eq!(cell.hash, "6gkzwg");
    /// assert_eq!(cell, same);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_point(coord: &impl Coordinate, length: usize) -> Result<Self, GeoHashError> {
        Self::from_hash(&encode_point(coord, length)?)
    }

    /// Returns the latitude of the cell centre.
    pub fn lat(&self) -> f64 {
        self.center.y()
    }

    /// Returns the longitude of the cell centre.
    pub fn lon(&self) -> f64 {
        self.center.x()
    }

    /// Returns the cell sharing an edge with this one in the given direction.
    pub fn adjacent(&self, direction: Direction) -> Result<Self, GeoHashError> {
        Self::from_hash(&adjacent_hash(&self.hash, direction)?)
    }

    /// Returns the 8 surrounding cells, in the order of [`neighbours`].
    pub fn neighbours(&self) -> Result<Vec<Self>, GeoHashError> {
        neighbours(&self.hash)?
            .iter()
            .map(|hash| Self::from_hash(hash))
            .collect()
    }

    /// Returns the enclosing cell one character shorter, or `None` for a single-character cell.
    pub fn parent(&self) -> Option<Self> {
        if self.length <= 1 {
            return None;
        }
        Self::from_hash(&self.hash[..self.length - 1]).ok()
    }

    /// Returns the 32 cells one character longer that tile this cell.
    pub fn children(&self) -> Result<Vec<Self>, GeoHashError> {
        BASE32
            .iter()
            .map(|&c| {
                let mut hash = String::with_capacity(self.length + 1);
                hash.push_str(&self.hash);
                hash.push(c as char);
                Self::from_hash(&hash)
            })
            .collect()
    }

    /// Returns true if the coordinate falls in this cell, using the same edge rules as encoding.
    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        cell_contains(&self.bounds, coord.y(), coord.x())
    }

    /// Converts this cell to a rectangular polygon.
    ///
    /// Returns a `geo_types::Polygon` representing the cell boundary,
    /// suitable for spatial operations or GeoJSON export.
    pub fn to_polygon(&self) -> Polygon<f64> {
        create_cell_from_rect(&self.bounds)
    }

    /// Converts this cell's boundary to a GeoJSON geometry string.
    pub fn to_geojson(&self) -> String {
        polygon_to_geojson(&self.to_polygon())
    }
}

impl fmt::Display for GeoHashCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hash)
    }
}
