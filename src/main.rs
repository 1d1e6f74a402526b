use geohash_rs::{Coverage, Direction, GeoHashCell, GeoHashError, adjacent_hash, decode, encode};

fn main() -> Result<(), GeoHashError> {
    env_logger::init();

    let lat = 38.89710201881826;
    let lon = -77.03669792041183;

    let hash = encode(lat, lon, 12)?;
    println!("Geohash: {}", hash);

    let centre = decode(&hash)?;
    println!("Centre: ({}, {})", centre.y(), centre.x());

    let cell = GeoHashCell::from_lat_lon(lat, lon, 6)?;
    println!("Cell: {} bounds {:?}", cell, cell.bounds);
    println!("East of {}: {}", cell, adjacent_hash(&cell.hash, Direction::Right)?);

    for neighbour in cell.neighbours()? {
        println!("Neighbour: {}", neighbour);
    }

    let coverage = Coverage::builder()
        .top_left(45.0, -73.0)
        .bottom_right(42.3583, -71.0603)
        .build()?;
    println!(
        "Cover at length {}: {:?}",
        coverage.hash_length(),
        coverage.hashes()
    );

    println!("GeoJSON: {}", cell.to_geojson());

    Ok(())
}
