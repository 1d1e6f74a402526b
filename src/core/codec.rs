use crate::core::constants::{BASE32, BASE32_INDEX, BITS_PER_CHAR, DEFAULT_HASH_LENGTH};
use crate::util::coord::Coordinate;
use crate::util::error::GeoHashError;
use geo_types::{Point, Rect, coord};

type Range = (f64, f64);

const LAT_RANGE: Range = (-90.0, 90.0);
const LON_RANGE: Range = (-180.0, 180.0);

/// Returns the alphabet index of a geohash character.
pub(crate) fn char_index(c: char) -> Result<usize, GeoHashError> {
    match BASE32_INDEX.get(c as usize) {
        Some(&i) if i >= 0 => Ok(i as usize),
        _ => Err(GeoHashError::InvalidCharacter(c)),
    }
}

fn bisect(range: &mut Range, upper: bool) {
    let mid = (range.0 + range.1) / 2.0;
    if upper {
        range.0 = mid;
    } else {
        range.1 = mid;
    }
}

/// Encodes a latitude/longitude pair into a geohash of `length` characters.
///
/// Bits alternate between longitude and latitude, longitude first. A coordinate at or
/// above the midpoint of its current range selects the upper half.
///
/// # Example
/// ```
/// use geohash_rs::encode;
///
/// # fn main() -> Result<(), geohash_rs::GeoHashError> {
/// let hash = encode(38.89710201881826, -77.03669792041183, 12)?;
/// assert_eq!(hash, "dqcjqcp84c6e");
/// # Ok(())
/// # }
/// ```
pub fn encode(lat: f64, lon: f64, length: usize) -> Result<String, GeoHashError> {
    if length == 0 {
        return Err(GeoHashError::InvalidArgument(
            "hash length must be greater than zero".to_string(),
        ));
    }
    Ok(encode_unchecked(lat, lon, length))
}

/// Encodes a latitude/longitude pair at [`DEFAULT_HASH_LENGTH`].
pub fn encode_default(lat: f64, lon: f64) -> String {
    encode_unchecked(lat, lon, DEFAULT_HASH_LENGTH)
}

/// Encodes any [`Coordinate`] (x = longitude, y = latitude).
pub fn encode_point<C: Coordinate>(coord: &C, length: usize) -> Result<String, GeoHashError> {
    encode(coord.y(), coord.x(), length)
}

pub(crate) fn encode_unchecked(lat: f64, lon: f64, length: usize) -> String {
    let mut lat_range = LAT_RANGE;
    let mut lon_range = LON_RANGE;
    let mut is_lon = true;
    let mut hash = String::with_capacity(length);

    while hash.len() < length {
        let mut index = 0usize;
        for _ in 0..BITS_PER_CHAR {
            let (range, value) = if is_lon {
                (&mut lon_range, lon)
            } else {
                (&mut lat_range, lat)
            };
            let upper = value >= (range.0 + range.1) / 2.0;
            index = (index << 1) | upper as usize;
            bisect(range, upper);
            is_lon = !is_lon;
        }
        hash.push(BASE32[index] as char);
    }

    hash
}

/// Replays the encode bisection and returns the final `(lat, lon)` ranges.
fn cell_ranges(hash: &str) -> Result<(Range, Range), GeoHashError> {
    let mut lat_range = LAT_RANGE;
    let mut lon_range = LON_RANGE;
    let mut is_lon = true;

    for c in hash.chars() {
        let index = char_index(c)?;
        for bit in (0..BITS_PER_CHAR).rev() {
            let upper = (index >> bit) & 1 == 1;
            if is_lon {
                bisect(&mut lon_range, upper);
            } else {
                bisect(&mut lat_range, upper);
            }
            is_lon = !is_lon;
        }
    }

    Ok((lat_range, lon_range))
}

/// Decodes a geohash to the centre of its cell.
///
/// Returns a point with x = longitude and y = latitude. The empty hash decodes to (0, 0).
///
/// # Example
/// ```
/// use geohash_rs::decode;
///
/// # fn main() -> Result<(), geohash_rs::GeoHashError> {
/// let centre = decode("dqcjqcp84c6e")?;
/// assert!((centre.y() - 38.89710201881826).abs() < 1e-9);
/// assert!((centre.x() + 77.03669792041183).abs() < 1e-9);
/// # Ok(())
/// # }
/// ```
pub fn decode(hash: &str) -> Result<Point<f64>, GeoHashError> {
    let (lat, lon) = cell_ranges(hash)?;
    Ok(Point::new((lon.0 + lon.1) / 2.0, (lat.0 + lat.1) / 2.0))
}

/// Decodes a geohash to the full extent of its cell.
pub fn decode_bounds(hash: &str) -> Result<Rect<f64>, GeoHashError> {
    let (lat, lon) = cell_ranges(hash)?;
    Ok(Rect::new(
        coord! { x: lon.0, y: lat.0 },
        coord! { x: lon.1, y: lat.1 },
    ))
}

/// Returns true if the point lies in the cell of `hash`.
///
/// Cells are closed on their southern and western edges and open on the others, except
/// along +90 latitude and +180 longitude, matching where [`encode`] places such points.
pub fn hash_contains(hash: &str, lat: f64, lon: f64) -> Result<bool, GeoHashError> {
    Ok(cell_contains(&decode_bounds(hash)?, lat, lon))
}

pub(crate) fn cell_contains(bounds: &Rect<f64>, lat: f64, lon: f64) -> bool {
    in_range(lat, (bounds.min().y, bounds.max().y), LAT_RANGE.1)
        && in_range(lon, (bounds.min().x, bounds.max().x), LON_RANGE.1)
}

fn in_range(value: f64, range: Range, limit: f64) -> bool {
    value >= range.0 && (value < range.1 || (range.1 == limit && value == limit))
}
