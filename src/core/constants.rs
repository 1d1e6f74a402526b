/// The base-32 geohash alphabet; each character carries 5 bits.
pub const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Default length used by [`encode_default`](crate::encode_default)
pub const DEFAULT_HASH_LENGTH: usize = 12;

/// Longest hash the coverage search will step down to
pub const MAX_HASH_LENGTH: usize = 12;

/// Most cells the coverage search will walk when refining to a longer hash
pub const MAX_COVER_CELLS: usize = 1 << 20;

/// Longest hash tabulated in [`CELL_CENTRE_SEPARATION_METRES`]
pub const MAX_PRECISION_TABLE_LENGTH: usize = 11;

pub(crate) const BITS_PER_CHAR: usize = 5;

/// Reverse lookup from ASCII byte to alphabet index, `-1` for bytes outside the alphabet.
/// Upper-case letters map to the same index as their lower-case form.
pub(crate) const BASE32_INDEX: [i8; 128] = build_base32_index();

const fn build_base32_index() -> [i8; 128] {
    let mut index = [-1i8; 128];
    let mut i = 0;
    while i < BASE32.len() {
        let c = BASE32[i];
        index[c as usize] = i as i8;
        if c.is_ascii_lowercase() {
            index[c.to_ascii_uppercase() as usize] = i as i8;
        }
        i += 1;
    }
    index
}

/// Worst-case distance in metres at the equator between a point and the centre of its
/// cell, as `(north-south, east-west)`, for hash lengths 1 to 11 (index 0 is length 1).
pub const CELL_CENTRE_SEPARATION_METRES: [(f64, f64); MAX_PRECISION_TABLE_LENGTH] = [
    (2_501_765.0, 2_501_765.0),
    (312_720.625, 625_441.25),
    (78_180.156, 78_180.156),
    (9_772.520, 19_545.039),
    (2_443.130, 2_443.130),
    (305.391, 610.782),
    (76.348, 76.348),
    (9.543, 19.087),
    (2.386, 2.386),
    (0.298, 0.596),
    (0.075, 0.075),
];

// Neighbour and border tables, indexed [direction][parity] where parity 0 is an even
// hash length. Odd-length tables are the even ones rotated a quarter turn.

/// The position of the last character within a table is the alphabet index of the
/// neighbouring cell's last character.
pub(crate) const NEIGHBOURS: [[&[u8; 32]; 2]; 4] = [
    // Top
    [
        b"p0r21436x8zb9dcf5h7kjnmqesgutwvy",
        b"bc01fg45238967deuvhjyznpkmstqrwx",
    ],
    // Bottom
    [
        b"14365h7k9dcfesgujnmqp0r2twvyx8zb",
        b"238967debc01fg45kmstqrwxuvhjyznp",
    ],
    // Left
    [
        b"238967debc01fg45kmstqrwxuvhjyznp",
        b"14365h7k9dcfesgujnmqp0r2twvyx8zb",
    ],
    // Right
    [
        b"bc01fg45238967deuvhjyznpkmstqrwx",
        b"p0r21436x8zb9dcf5h7kjnmqesgutwvy",
    ],
];

/// Characters lying on the edge of their parent cell in a given direction.
pub(crate) const BORDERS: [[&[u8]; 2]; 4] = [
    // Top
    [b"prxz", b"bcfguvyz"],
    // Bottom
    [b"028b", b"0145hjnp"],
    // Left
    [b"0145hjnp", b"028b"],
    // Right
    [b"bcfguvyz", b"prxz"],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base32_index_matches_alphabet() {
        for (i, &c) in BASE32.iter().enumerate() {
            assert_eq!(BASE32_INDEX[c as usize], i as i8);
        }
        assert_eq!(BASE32_INDEX[b'a' as usize], -1);
        assert_eq!(BASE32_INDEX[b'i' as usize], -1);
        assert_eq!(BASE32_INDEX[b'B' as usize], 10);
    }

    #[test]
    fn test_neighbour_tables_are_permutations() {
        for dir in NEIGHBOURS.iter() {
            for table in dir.iter() {
                let mut sorted = table.to_vec();
                sorted.sort_unstable();
                let mut alphabet = BASE32.to_vec();
                alphabet.sort_unstable();
                assert_eq!(sorted, alphabet);
            }
        }
    }

    #[test]
    fn test_separation_table_is_monotonic() {
        for pair in CELL_CENTRE_SEPARATION_METRES.windows(2) {
            assert!(pair[1].0 < pair[0].0);
            assert!(pair[1].1 < pair[0].1);
        }
    }
}
