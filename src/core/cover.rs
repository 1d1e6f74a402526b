use crate::core::adjacency::{Direction, adjacent_hash};
use crate::core::codec::{decode_bounds, encode_unchecked};
use crate::core::constants::{MAX_COVER_CELLS, MAX_HASH_LENGTH};
use crate::core::dimensions::{height_degrees, width_degrees};
use crate::util::error::GeoHashError;
use log::{debug, trace};
use std::collections::BTreeSet;

/// A bounding box with its edges put in order.
///
/// `east` may exceed 180 when the box crosses the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SearchBox {
    pub north: f64,
    pub south: f64,
    pub west: f64,
    pub east: f64,
}

impl SearchBox {
    /// Orders two opposite corners into a box. A longitude span wider than 180 degrees,
    /// short of the full 360, is read as the narrower box crossing the antimeridian.
    pub fn new(top_lat: f64, left_lon: f64, bottom_lat: f64, right_lon: f64) -> Self {
        let north = top_lat.max(bottom_lat).min(90.0);
        let south = top_lat.min(bottom_lat).max(-90.0);
        let a = left_lon.clamp(-180.0, 180.0);
        let b = right_lon.clamp(-180.0, 180.0);
        let (mut west, mut east) = (a.min(b), a.max(b));
        let span = east - west;
        if span > 180.0 && span < 360.0 {
            (west, east) = (east, west + 360.0);
        }

        Self {
            north,
            south,
            west,
            east,
        }
    }

    pub fn is_finite(&self) -> bool {
        [self.north, self.south, self.west, self.east]
            .iter()
            .all(|v| v.is_finite())
    }

    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    pub fn height(&self) -> f64 {
        self.north - self.south
    }
}

/// Coarsest length whose cells fit inside the box along at least one axis.
fn starting_length(search: &SearchBox) -> usize {
    (1..=MAX_HASH_LENGTH)
        .find(|&length| {
            width_degrees(length) <= search.width() || height_degrees(length) <= search.height()
        })
        .unwrap_or(MAX_HASH_LENGTH)
}

/// Upper bound on the number of cells [`cover_at_length`] visits at `length`.
fn estimated_cells(search: &SearchBox, length: usize) -> f64 {
    let columns = (search.width() / width_degrees(length)).ceil() + 1.0;
    let rows = (search.height() / height_degrees(length)).ceil() + 1.0;
    columns * rows
}

/// Walks the grid at `length` from the south-west cell, right along each row and then up
/// to the next row, keeping every cell that overlaps the box.
fn cover_at_length(search: &SearchBox, length: usize) -> Result<BTreeSet<String>, GeoHashError> {
    let cell_width = width_degrees(length);
    let cell_height = height_degrees(length);

    let mut row_start = encode_unchecked(search.south, search.west, length);
    let origin = decode_bounds(&row_start)?;
    let mut south_edge = origin.min().y;
    let mut hashes = BTreeSet::new();

    loop {
        let mut hash = row_start.clone();
        let mut west_edge = origin.min().x;
        loop {
            west_edge += cell_width;
            if west_edge >= search.east {
                hashes.insert(hash);
                break;
            }
            let next = adjacent_hash(&hash, Direction::Right)?;
            hashes.insert(hash);
            hash = next;
        }

        south_edge += cell_height;
        if south_edge >= search.north {
            break;
        }
        row_start = adjacent_hash(&row_start, Direction::Top)?;
    }

    Ok(hashes)
}

/// Finds the coarsest hash length, no coarser than the box itself, whose cells cover the
/// box with at least `min_hashes` cells. Returns the length and the covering cells.
pub(crate) fn cover(
    search: &SearchBox,
    min_hashes: usize,
) -> Result<(usize, BTreeSet<String>), GeoHashError> {
    if min_hashes == 0 {
        return Err(GeoHashError::InvalidArgument(
            "min_hashes must be greater than zero".to_string(),
        ));
    }
    if !search.is_finite() {
        return Err(GeoHashError::InvalidArgument(format!(
            "bounding box edges must be finite: {:?}",
            search
        )));
    }

    let mut length = starting_length(search);
    debug!("covering {:?} starting from hash length {}", search, length);

    loop {
        let hashes = cover_at_length(search, length)?;
        trace!("hash length {} covers box with {} cells", length, hashes.len());

        if hashes.len() >= min_hashes || length >= MAX_HASH_LENGTH {
            debug!("chose hash length {} with {} cells", length, hashes.len());
            return Ok((length, hashes));
        }
        let estimate = estimated_cells(search, length + 1);
        if estimate > MAX_COVER_CELLS as f64 {
            debug!(
                "stopping at hash length {} with {} cells; length {} would walk ~{} cells",
                length,
                hashes.len(),
                length + 1,
                estimate
            );
            return Ok((length, hashes));
        }
        length += 1;
    }
}

/// Returns the geohashes covering a bounding box with at least `min_hashes` cells.
///
/// The corners may be given in either order. Boxes wider than 180 degrees of longitude
/// are taken to cross the antimeridian, except a full -180 to 180 span. If even length 12
/// yields fewer than `min_hashes` cells, the length-12 cover is returned. Refinement also
/// stops before any length that would walk more than [`MAX_COVER_CELLS`] cells, so a very
/// large `min_hashes` may return fewer cells than asked for.
///
/// # Example
/// ```
/// use geohash_rs::hashes_to_cover_bounding_box;
///
/// # fn main() -> Result<(), geohash_rs::GeoHashError> {
/// let hashes = hashes_to_cover_bounding_box(42.3583, -71.0603, 45.0, -73.0, 1)?;
/// assert_eq!(hashes.into_iter().collect::<Vec<_>>(), ["drs", "drt", "dru", "drv"]);
/// # Ok(())
/// # }
/// ```
pub fn hashes_to_cover_bounding_box(
    top_lat: f64,
    left_lon: f64,
    bottom_lat: f64,
    right_lon: f64,
    min_hashes: usize,
) -> Result<BTreeSet<String>, GeoHashError> {
    let search = SearchBox::new(top_lat, left_lon, bottom_lat, right_lon);
    cover(&search, min_hashes).map(|(_, hashes)| hashes)
}
