/// Error type for geohash-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoHashError {
    /// An argument is outside its valid range (e.g. a zero hash length).
    InvalidArgument(String),
    /// A hash contains a character outside the base-32 geohash alphabet.
    InvalidCharacter(char),
}

impl std::fmt::Display for GeoHashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoHashError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            GeoHashError::InvalidCharacter(c) => write!(f, "Invalid geohash character: {:?}", c),
        }
    }
}

impl std::error::Error for GeoHashError {}
