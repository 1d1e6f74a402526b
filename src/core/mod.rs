pub mod adjacency;
pub mod codec;
pub mod constants;
pub mod cover;
pub mod dimensions;
pub mod geometry;

pub use adjacency::{Direction, adjacent_hash, bottom, left, neighbours, right, top};
pub use codec::{decode, decode_bounds, encode, encode_default, encode_point, hash_contains};
pub use constants::{
    BASE32, CELL_CENTRE_SEPARATION_METRES, DEFAULT_HASH_LENGTH, MAX_COVER_CELLS, MAX_HASH_LENGTH,
    MAX_PRECISION_TABLE_LENGTH,
};
pub use cover::hashes_to_cover_bounding_box;
pub use dimensions::{
    height_degrees, min_hash_length_to_ensure_cell_centre_separation_distance_is_less_than_metres,
    width_degrees,
};
pub use geometry::{create_cell, create_cell_from_rect, polygon_to_geojson};
