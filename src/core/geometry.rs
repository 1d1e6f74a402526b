use geo_types::{Coord, LineString, Polygon, Rect};

/// Builds the closed, counter-clockwise ring of a cell from its corner longitudes and latitudes.
pub fn create_cell(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Polygon<f64> {
    let coords = vec![
        Coord { x: min_lon, y: min_lat },
        Coord { x: max_lon, y: min_lat },
        Coord { x: max_lon, y: max_lat },
        Coord { x: min_lon, y: max_lat },
        Coord { x: min_lon, y: min_lat },
    ];

    Polygon::new(LineString::from(coords), vec![])
}

pub fn create_cell_from_rect(bounds: &Rect<f64>) -> Polygon<f64> {
    create_cell(bounds.min().x, bounds.min().y, bounds.max().x, bounds.max().y)
}

/// Serialises a polygon as a GeoJSON geometry object.
pub fn polygon_to_geojson(polygon: &Polygon<f64>) -> String {
    let geom = geojson::Geometry::from(polygon);
    geom.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::coord;

    #[test]
    fn test_create_cell() {
        let cell = create_cell(-90.0, 0.0, -45.0, 45.0);
        let exterior = cell.exterior();
        assert_eq!(exterior.coords().count(), 5); // 4 corners + 1 to close
        assert_eq!(exterior.0[0], exterior.0[4]);
        assert_eq!(exterior.0[2], coord! { x: -45.0, y: 45.0 });
    }

    #[test]
    fn test_create_cell_from_rect() {
        let rect = Rect::new(coord! { x: 10.0, y: 20.0 }, coord! { x: 11.0, y: 21.0 });
        let cell = create_cell_from_rect(&rect);
        assert_eq!(cell, create_cell(10.0, 20.0, 11.0, 21.0));
    }

    #[test]
    fn test_polygon_to_geojson() -> Result<(), serde_json::Error> {
        let cell = create_cell(-90.0, 0.0, -45.0, 45.0);
        let json: serde_json::Value = serde_json::from_str(&polygon_to_geojson(&cell))?;

        assert_eq!(json["type"], "Polygon");
        assert_eq!(json["coordinates"][0].as_array().map(|r| r.len()), Some(5));
        assert_eq!(json["coordinates"][0][2][0], -45.0);
        Ok(())
    }
}
