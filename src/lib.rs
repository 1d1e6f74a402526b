//! # geohash-rs
//!
//! Geohash encoding and decoding, cell adjacency, and bounding-box coverage.
//!
//! There are currently three main entry points.
//!
//! ### 1. Free functions - Hash Operations
//!
//! ```
//! use geohash_rs::{Direction, adjacent_hash, decode, encode, neighbours};
//!
//! # fn main() -> Result<(), geohash_rs::GeoHashError> {
//! let hash = encode(38.89710201881826, -77.03669792041183, 12)?;
//! assert_eq!(hash, "dqcjqcp84c6e");
//!
//! let centre = decode(&hash)?;
//! println!("lat {}, lon {}", centre.y(), centre.x());
//!
//! let east = adjacent_hash("u1pb", Direction::Right)?;
//! assert_eq!(east, "u300");
//! assert_eq!(neighbours("dqcjqc")?.len(), 8);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `GeoHashCell` - Single Cell Operations
//!
//! ```
//! use geohash_rs::GeoHashCell;
//!
//! # fn main() -> Result<(), geohash_rs::GeoHashError> {
//! let cell = GeoHashCell::from_lat_lon(-25.382708, -49.265506, 6)?;
//! println!("{}", cell.hash);
//! let polygon = cell.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `Coverage` - Bounding Box Cover
//!
//! ```
//! use geohash_rs::Coverage;
//!
//! # fn main() -> Result<(), geohash_rs::GeoHashError> {
//! let coverage = Coverage::builder()
//!     .top_left(45.0, -73.0)
//!     .bottom_right(42.3583, -71.0603)
//!     .min_hashes(1)
//!     .build()?;
//!
//! for hash in coverage.iter() {
//!     println!("{}", hash);
//! }
//! # Ok(())
//! # }
//! ```
//!

pub mod api;
pub mod core;
pub mod util;

pub use crate::api::{Coverage, CoverageBuilder, GeoHashCell, cover_bounding_box};
pub use crate::core::{
    BASE32, CELL_CENTRE_SEPARATION_METRES, DEFAULT_HASH_LENGTH, Direction, MAX_COVER_CELLS,
    MAX_HASH_LENGTH, MAX_PRECISION_TABLE_LENGTH, adjacent_hash, create_cell, create_cell_from_rect,
    decode, decode_bounds, encode, encode_default, encode_point, hash_contains,
    hashes_to_cover_bounding_box, height_degrees,
    min_hash_length_to_ensure_cell_centre_separation_distance_is_less_than_metres, neighbours,
    polygon_to_geojson, width_degrees,
};
pub use crate::util::{Coordinate, GeoHashError};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;
    use std::collections::HashSet;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), GeoHashError> {
        let pt = point! { x: -77.03669792041183, y: 38.89710201881826 };
        let hash = encode_point(&pt, 6)?;
        assert_eq!(hash, "dqcjqc");

        let cell = GeoHashCell::from_hash(&hash)?;
        assert!(cell.contains(&pt));
        assert_eq!(cell.to_polygon().exterior().coords().count(), 5);

        let around: HashSet<String> = neighbours(&hash)?.into_iter().collect();
        assert_eq!(around.len(), 8);
        assert!(!around.contains(&hash));
        Ok(())
    }

    #[test]
    fn test_precision_drives_encoding() -> Result<(), GeoHashError> {
        let length =
            min_hash_length_to_ensure_cell_centre_separation_distance_is_less_than_metres(3900.0);
        assert_eq!(length, 5);

        let hash = encode(-25.382708, -49.265506, length)?;
        assert_eq!(hash, "6gkzw");
        assert!(hash_contains(&hash, -25.382708, -49.265506)?);
        Ok(())
    }

    #[test]
    fn test_coverage_cells_tile_without_gaps() -> Result<(), GeoHashError> {
        let coverage = Coverage::builder()
            .top_left(45.0, -73.0)
            .bottom_right(42.3583, -71.0603)
            .build()?;

        // every cell's in-box neighbours to the right or above are also in the cover
        let cells = coverage.to_cells()?;
        for cell in cells.iter() {
            let right = cell.adjacent(Direction::Right)?;
            if right.bounds.min().x < -71.0603 {
                assert!(coverage.contains(&right.hash));
            }
            let up = cell.adjacent(Direction::Top)?;
            if up.bounds.min().y < 45.0 {
                assert!(coverage.contains(&up.hash));
            }
        }
        Ok(())
    }

    #[test]
    fn test_hashes_and_coverage_agree() -> Result<(), GeoHashError> {
        let hashes = hashes_to_cover_bounding_box(51.6, -0.5, 51.3, 0.3, 10)?;
        let coverage = cover_bounding_box(51.6, -0.5, 51.3, 0.3, 10)?;
        assert_eq!(&hashes, coverage.hashes());
        assert!(hashes.len() >= 10);
        Ok(())
    }

    #[test]
    fn test_cell_dimensions_match_decoded_bounds() -> Result<(), GeoHashError> {
        for length in 1..=MAX_HASH_LENGTH {
            let bounds = decode_bounds(&encode(12.5, 99.1, length)?)?;
            assert_eq!(bounds.width(), width_degrees(length));
            assert_eq!(bounds.height(), height_degrees(length));
        }
        Ok(())
    }
}
