//! Coordinate precision reduction for GeoJSON geometries.
//!
//! Nesting depth is known from the geometry variant, so rounding walks the
//! typed coordinate vectors instead of probing the shape at runtime.

use geojson::{Feature, Geometry, Value};

/// Decimal places kept by [`round_coordinate`].
pub const DECIMAL_PLACES: i32 = 4;

/// Round a single coordinate value to four decimal places.
///
/// Ties round half away from zero (`f64::round`). Results that round to
/// zero are always `0.0`, never `-0.0`. NaN and infinities are returned
/// unchanged.
pub fn round_coordinate(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(DECIMAL_PLACES);
    (value * scale).round() / scale + 0.0
}

/// Anything holding coordinate leaves at some fixed depth.
pub trait RoundCoordinates {
    fn round_coordinates(&mut self);
}

impl RoundCoordinates for f64 {
    fn round_coordinates(&mut self) {
        *self = round_coordinate(*self);
    }
}

impl<T: RoundCoordinates> RoundCoordinates for Vec<T> {
    fn round_coordinates(&mut self) {
        for item in self.iter_mut() {
            item.round_coordinates();
        }
    }
}

impl RoundCoordinates for Value {
    fn round_coordinates(&mut self) {
        match self {
            Value::Point(position) => position.round_coordinates(),
            Value::MultiPoint(positions) | Value::LineString(positions) => {
                positions.round_coordinates()
            }
            Value::MultiLineString(lines) | Value::Polygon(lines) => lines.round_coordinates(),
            Value::MultiPolygon(polygons) => polygons.round_coordinates(),
            Value::GeometryCollection(geometries) => geometries.round_coordinates(),
        }
    }
}

impl RoundCoordinates for Geometry {
    fn round_coordinates(&mut self) {
        self.value.round_coordinates();
        if let Some(bbox) = self.bbox.as_mut() {
            bbox.round_coordinates();
        }
    }
}

/// Round the geometry of every feature in place. Features without a
/// geometry are left alone.
pub fn reduce_feature_geometry(features: &mut [Feature]) {
    for feature in features.iter_mut() {
        if let Some(geometry) = feature.geometry.as_mut() {
            geometry.round_coordinates();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(geometry: Option<Geometry>) -> Feature {
        Feature {
            bbox: None,
            geometry,
            id: None,
            properties: None,
            foreign_members: None,
        }
    }

    fn rounded(v: f64) -> f64 {
        (v * 1e4).round() / 1e4
    }

    #[test]
    fn rounds_point() {
        let mut value = Value::Point(vec![1.23456, 2.34567]);
        value.round_coordinates();
        assert_eq!(value, Value::Point(vec![1.2346, 2.3457]));
    }

    #[test]
    fn negative_values_round_away_from_zero() {
        assert_eq!(round_coordinate(-6.260_36), -6.2604);
    }

    #[test]
    fn tiny_negatives_round_to_positive_zero() {
        let zero = round_coordinate(-0.000_04);
        assert_eq!(zero, 0.0);
        assert!(zero.is_sign_positive());

        let mut geometry = Geometry::new(Value::Point(vec![-0.00001, 7.0]));
        geometry.round_coordinates();
        let json = serde_json::to_string(&geometry).unwrap();
        assert!(!json.contains("-0"), "{}", json);
    }

    #[test]
    fn preserves_shape_at_every_depth() {
        let line = vec![vec![-6.123456, 53.987654], vec![-6.111119, 53.000051]];
        let polygon = vec![line.clone(), vec![vec![-7.55557, 52.44444]]];
        let multi = vec![polygon.clone(), vec![], polygon.clone()];

        let mut values = vec![
            Value::Point(line[0].clone()),
            Value::LineString(line.clone()),
            Value::Polygon(polygon.clone()),
            Value::MultiPolygon(multi.clone()),
        ];
        for value in values.iter_mut() {
            value.round_coordinates();
        }

        let expected_line: Vec<Vec<f64>> = line
            .iter()
            .map(|p| p.iter().map(|v| rounded(*v)).collect())
            .collect();
        let expected_polygon = vec![expected_line.clone(), vec![vec![-7.5556, 52.4444]]];

        assert_eq!(values[0], Value::Point(expected_line[0].clone()));
        assert_eq!(values[1], Value::LineString(expected_line.clone()));
        assert_eq!(values[2], Value::Polygon(expected_polygon.clone()));
        assert_eq!(
            values[3],
            Value::MultiPolygon(vec![expected_polygon.clone(), vec![], expected_polygon])
        );
    }

    #[test]
    fn rounding_is_idempotent() {
        for v in [0.0, 1.23456, -6.260355, 53.349_805_1, 179.99999, -0.00005, 12345.67891] {
            let once = round_coordinate(v);
            assert_eq!(round_coordinate(once), once, "value {}", v);
        }
    }

    #[test]
    fn empty_coordinates_pass_through() {
        let mut value = Value::MultiPolygon(vec![]);
        value.round_coordinates();
        assert_eq!(value, Value::MultiPolygon(vec![]));

        let mut value = Value::Polygon(vec![vec![]]);
        value.round_coordinates();
        assert_eq!(value, Value::Polygon(vec![vec![]]));
    }

    #[test]
    fn rounds_inside_geometry_collections() {
        let mut geometry = Geometry::new(Value::GeometryCollection(vec![
            Geometry::new(Value::Point(vec![1.00001, 2.00009])),
            Geometry::new(Value::LineString(vec![vec![3.33333, 4.44444]])),
        ]));
        geometry.round_coordinates();
        assert_eq!(
            geometry.value,
            Value::GeometryCollection(vec![
                Geometry::new(Value::Point(vec![1.0, 2.0001])),
                Geometry::new(Value::LineString(vec![vec![3.3333, 4.4444]])),
            ])
        );
    }

    #[test]
    fn features_without_geometry_are_skipped() {
        let mut features = vec![
            feature(None),
            feature(Some(Geometry::new(Value::Point(vec![9.87654, 1.0])))),
        ];
        reduce_feature_geometry(&mut features);
        assert!(features[0].geometry.is_none());
        assert_eq!(
            features[1].geometry.as_ref().map(|g| g.value.clone()),
            Some(Value::Point(vec![9.8765, 1.0]))
        );
    }

    #[test]
    fn non_finite_values_are_untouched() {
        assert!(round_coordinate(f64::NAN).is_nan());
        assert_eq!(round_coordinate(f64::INFINITY), f64::INFINITY);
    }
}
