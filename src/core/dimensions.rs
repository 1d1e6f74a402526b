use crate::core::constants::{
    BITS_PER_CHAR, CELL_CENTRE_SEPARATION_METRES, MAX_PRECISION_TABLE_LENGTH,
};

/// Number of bits a hash of `length` characters spends on longitude.
fn lon_bits(length: usize) -> i32 {
    ((BITS_PER_CHAR * length + 1) / 2) as i32
}

/// Number of bits a hash of `length` characters spends on latitude.
fn lat_bits(length: usize) -> i32 {
    (BITS_PER_CHAR * length / 2) as i32
}

/// Width in degrees of longitude of a cell at the given hash length.
pub fn width_degrees(length: usize) -> f64 {
    360.0 / 2f64.powi(lon_bits(length))
}

/// Height in degrees of latitude of a cell at the given hash length.
pub fn height_degrees(length: usize) -> f64 {
    180.0 / 2f64.powi(lat_bits(length))
}

/// Returns the shortest hash length, between 1 and 11, at which no point lies further than
/// `distance_metres` from the centre of its cell along either axis.
///
/// Distances smaller than the length-11 entry of the table still return 11.
///
/// # Example
/// ```
/// use geohash_rs::min_hash_length_to_ensure_cell_centre_separation_distance_is_less_than_metres as min_len;
///
/// assert_eq!(min_len(3900.0), 5);
/// assert_eq!(min_len(0.0), 11);
/// ```
pub fn min_hash_length_to_ensure_cell_centre_separation_distance_is_less_than_metres(
    distance_metres: f64,
) -> usize {
    CELL_CENTRE_SEPARATION_METRES
        .iter()
        .position(|&(ns, ew)| ns.max(ew) <= distance_metres)
        .map(|i| i + 1)
        .unwrap_or(MAX_PRECISION_TABLE_LENGTH)
}
