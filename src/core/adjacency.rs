use crate::core::codec::char_index;
use crate::core::constants::{BASE32, BORDERS, NEIGHBOURS};
use crate::util::error::GeoHashError;
use serde::{Deserialize, Serialize};

/// Compass direction of an adjacent cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Increasing latitude (north)
    Top,
    /// Decreasing latitude (south)
    Bottom,
    /// Decreasing longitude (west)
    Left,
    /// Increasing longitude (east)
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Bottom,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    fn table_index(self) -> usize {
        match self {
            Direction::Top => 0,
            Direction::Bottom => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// Returns the hash of the cell sharing an edge with `hash` in the given direction.
///
/// The result has the same length as `hash`. Stepping off the eastern or western edge of
/// the world wraps around the antimeridian.
///
/// # Example
/// ```
/// use geohash_rs::{Direction, adjacent_hash};
///
/// # fn main() -> Result<(), geohash_rs::GeoHashError> {
/// assert_eq!(adjacent_hash("u1pb", Direction::Right)?, "u300");
/// assert_eq!(adjacent_hash("u1pb", Direction::Bottom)?, "u0zz");
/// # Ok(())
/// # }
/// ```
pub fn adjacent_hash(hash: &str, direction: Direction) -> Result<String, GeoHashError> {
    if hash.is_empty() {
        return Err(GeoHashError::InvalidArgument(
            "cannot find the adjacent cell of an empty hash".to_string(),
        ));
    }
    for c in hash.chars() {
        char_index(c)?;
    }
    adjacent_unchecked(&hash.to_ascii_lowercase(), direction)
}

/// `hash` must be non-empty, lower-case and drawn from the alphabet.
fn adjacent_unchecked(hash: &str, direction: Direction) -> Result<String, GeoHashError> {
    let split = hash.len() - 1;
    let (base, last) = (&hash[..split], hash.as_bytes()[split]);
    let parity = hash.len() % 2;
    let dir = direction.table_index();

    // carry into the parent when the last character sits on the parent's edge
    let mut adjacent = if !base.is_empty() && BORDERS[dir][parity].contains(&last) {
        adjacent_unchecked(base, direction)?
    } else {
        base.to_string()
    };

    let position = NEIGHBOURS[dir][parity]
        .iter()
        .position(|&c| c == last)
        .ok_or(GeoHashError::InvalidCharacter(last as char))?;
    adjacent.push(BASE32[position] as char);

    Ok(adjacent)
}

pub fn top(hash: &str) -> Result<String, GeoHashError> {
    adjacent_hash(hash, Direction::Top)
}

pub fn bottom(hash: &str) -> Result<String, GeoHashError> {
    adjacent_hash(hash, Direction::Bottom)
}

pub fn left(hash: &str) -> Result<String, GeoHashError> {
    adjacent_hash(hash, Direction::Left)
}

pub fn right(hash: &str) -> Result<String, GeoHashError> {
    adjacent_hash(hash, Direction::Right)
}

/// Returns the 8 cells surrounding `hash`.
///
/// Order: top, bottom, right, left, top-right, top-left, bottom-right, bottom-left.
///
/// # Example
/// ```
/// use geohash_rs::neighbours;
///
/// # fn main() -> Result<(), geohash_rs::GeoHashError> {
/// let around = neighbours("dqcjqc")?;
/// assert_eq!(around.len(), 8);
/// assert_eq!(around[0], "dqcjqf");
/// # Ok(())
/// # }
/// ```
pub fn neighbours(hash: &str) -> Result<Vec<String>, GeoHashError> {
    let top = top(hash)?;
    let bottom = bottom(hash)?;
    let right = right(hash)?;
    let left = left(hash)?;

    let top_right = adjacent_hash(&top, Direction::Right)?;
    let top_left = adjacent_hash(&top, Direction::Left)?;
    let bottom_right = adjacent_hash(&bottom, Direction::Right)?;
    let bottom_left = adjacent_hash(&bottom, Direction::Left)?;

    Ok(vec![
        top,
        bottom,
        right,
        left,
        top_right,
        top_left,
        bottom_right,
        bottom_left,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::{decode_bounds, encode};
    use std::collections::HashSet;

    #[test]
    fn test_adjacent_bottom() -> Result<(), GeoHashError> {
        assert_eq!(adjacent_hash("u1pb", Direction::Bottom)?, "u0zz");
        Ok(())
    }

    #[test]
    fn test_adjacent_top() -> Result<(), GeoHashError> {
        assert_eq!(adjacent_hash("u1pb", Direction::Top)?, "u1pc");
        Ok(())
    }

    #[test]
    fn test_adjacent_left() -> Result<(), GeoHashError> {
        assert_eq!(adjacent_hash("u1pb", Direction::Left)?, "u1p8");
        Ok(())
    }

    #[test]
    fn test_adjacent_right() -> Result<(), GeoHashError> {
        assert_eq!(adjacent_hash("u1pb", Direction::Right)?, "u300");
        Ok(())
    }

    #[test]
    fn test_convenience_functions() -> Result<(), GeoHashError> {
        assert_eq!(top("u1pb")?, "u1pc");
        assert_eq!(bottom("u1pb")?, "u0zz");
        assert_eq!(left("u1pb")?, "u1p8");
        assert_eq!(right("u1pb")?, "u300");
        Ok(())
    }

    #[test]
    fn test_adjacent_upper_case() -> Result<(), GeoHashError> {
        assert_eq!(adjacent_hash("U1PB", Direction::Right)?, "u300");
        Ok(())
    }

    #[test]
    fn test_adjacent_empty_hash() {
        let result = adjacent_hash("", Direction::Top);
        assert!(matches!(result, Err(GeoHashError::InvalidArgument(_))));
    }

    #[test]
    fn test_adjacent_invalid_character() {
        assert_eq!(
            adjacent_hash("u1pa", Direction::Top),
            Err(GeoHashError::InvalidCharacter('a'))
        );
        assert_eq!(
            adjacent_hash("ulpb", Direction::Top),
            Err(GeoHashError::InvalidCharacter('l'))
        );
    }

    #[test]
    fn test_adjacent_wraps_antimeridian() -> Result<(), GeoHashError> {
        let east = encode(10.0, 179.9, 4)?;
        let west = encode(10.0, -179.9, 4)?;
        assert_eq!(adjacent_hash(&east, Direction::Right)?, west);
        assert_eq!(adjacent_hash(&west, Direction::Left)?, east);
        Ok(())
    }

    #[test]
    fn test_adjacent_then_opposite_returns_origin() -> Result<(), GeoHashError> {
        for hash in ["u1pb", "dqcjqc", "6gkzwg", "s", "ezs42"] {
            for direction in Direction::ALL {
                let there = adjacent_hash(hash, direction)?;
                assert_eq!(adjacent_hash(&there, direction.opposite())?, hash);
            }
        }
        Ok(())
    }

    #[test]
    fn test_adjacent_shares_edge() -> Result<(), GeoHashError> {
        let hash = "dqcjqc";
        let cell = decode_bounds(hash)?;

        let north = decode_bounds(&top(hash)?)?;
        assert_eq!(north.min().y, cell.max().y);
        assert_eq!(north.min().x, cell.min().x);

        let east = decode_bounds(&right(hash)?)?;
        assert_eq!(east.min().x, cell.max().x);
        assert_eq!(east.min().y, cell.min().y);
        Ok(())
    }

    #[test]
    fn test_neighbouring_hashes() -> Result<(), GeoHashError> {
        let expected: HashSet<String> = [
            "dqcjqf", "dqcjqb", "dqcjr1", "dqcjq9", "dqcjqd", "dqcjr4", "dqcjr0", "dqcjq8",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let result = neighbours("dqcjqc")?;
        assert_eq!(result.len(), 8);
        assert_eq!(result.into_iter().collect::<HashSet<_>>(), expected);
        Ok(())
    }

    #[test]
    fn test_neighbours_keep_length() -> Result<(), GeoHashError> {
        for hash in ["u", "u1", "u1p", "u1pb", "dqcjqcp84c6e"] {
            let result = neighbours(hash)?;
            assert_eq!(result.len(), 8);
            assert!(result.iter().all(|n| n.len() == hash.len()));
        }
        Ok(())
    }

    #[test]
    fn test_direction_serde() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&Direction::Top)?, "\"top\"");
        let parsed: Direction = serde_json::from_str("\"right\"")?;
        assert_eq!(parsed, Direction::Right);
        Ok(())
    }
}
