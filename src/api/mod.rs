pub mod cell;
pub mod coverage;

pub use cell::GeoHashCell;
pub use coverage::{Coverage, CoverageBuilder, cover_bounding_box};
