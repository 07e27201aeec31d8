//! Road geometry classification and containment tests.

use geo::{BoundingRect, Coord, Intersects, LineString, Point, Polygon, Rect};

use crate::error::ZoneError;

/// Fractional digits kept when matching point records (~0.11 m)
const POINT_DIGITS: usize = 6;

/// Geometry of a single road record
#[derive(Debug, Clone, PartialEq)]
pub enum RoadShape {
    /// A single location, matched after rounding to 6 decimals
    Point(Point<f64>),
    /// An open path; matched when the point lies on it
    Path(LineString<f64>),
    /// A closed ring; matched when the point is inside or on its boundary
    Ring(Polygon<f64>),
}

impl RoadShape {
    /// Decide the primitive from the number of decoded coordinates.
    ///
    /// The upstream payload carries no shape kind, so length is the only
    /// signal: 1 is a point, 2 a path, 3 or more a ring.
    pub fn classify(coords: Vec<Coord<f64>>) -> Result<Self, ZoneError> {
        match coords.len() {
            0 => Err(ZoneError::MalformedGeometry),
            1 => Ok(RoadShape::Point(Point::from(coords[0]))),
            2 => Ok(RoadShape::Path(LineString::new(coords))),
            _ => Ok(RoadShape::Ring(close_ring(coords))),
        }
    }

    /// Test whether `point` falls in this shape
    pub fn contains(&self, point: Coord<f64>) -> bool {
        match self {
            RoadShape::Point(p) => {
                round_coord(p.x()) == round_coord(point.x)
                    && round_coord(p.y()) == round_coord(point.y)
            }
            RoadShape::Path(line) => line.intersects(&Point::from(point)),
            RoadShape::Ring(polygon) => polygon.intersects(&Point::from(point)),
        }
    }

    /// Bounding box of the shape, widened for points so every coordinate
    /// that rounds onto the point falls inside it.
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        match self {
            RoadShape::Point(p) => {
                let pad = 10f64.powi(-(POINT_DIGITS as i32));
                Some(Rect::new(
                    Coord {
                        x: p.x() - pad,
                        y: p.y() - pad,
                    },
                    Coord {
                        x: p.x() + pad,
                        y: p.y() + pad,
                    },
                ))
            }
            RoadShape::Path(line) => line.bounding_rect(),
            RoadShape::Ring(polygon) => polygon.bounding_rect(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RoadShape::Point(_) => "point",
            RoadShape::Path(_) => "path",
            RoadShape::Ring(_) => "ring",
        }
    }
}

/// Classify `coords` and test `point` against the result
pub fn is_contained(coords: &[Coord<f64>], point: Coord<f64>) -> Result<bool, ZoneError> {
    Ok(RoadShape::classify(coords.to_vec())?.contains(point))
}

/// Build a polygon from an open ring by re-appending the first vertex
pub(crate) fn close_ring(coords: Vec<Coord<f64>>) -> Polygon<f64> {
    let mut ring = coords;
    if let Some(first) = ring.first().copied() {
        ring.push(first);
    }
    Polygon::new(LineString::new(ring), vec![])
}

/// Round on the exact decimal value of `v`. Scaling by 1e6 first rounds
/// the product to the nearest f64, which can land on an exact `.5`.
fn round_coord(v: f64) -> String {
    format!("{:.*}", POINT_DIGITS, v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::decode_points;

    fn unit_square() -> Vec<Coord<f64>> {
        vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 1.0, y: 0.0 },
            Coord { x: 1.0, y: 1.0 },
            Coord { x: 0.0, y: 1.0 },
        ]
    }

    #[test]
    fn test_classify_by_length() {
        assert_eq!(
            RoadShape::classify(vec![]).unwrap_err(),
            ZoneError::MalformedGeometry
        );
        assert_eq!(
            RoadShape::classify(vec![Coord { x: 1.0, y: 2.0 }]).unwrap().kind(),
            "point"
        );
        let path = RoadShape::classify(decode_points("48.85,2.35,48.86,2.36").unwrap()).unwrap();
        assert_eq!(path.kind(), "path");
        assert_eq!(RoadShape::classify(unit_square()).unwrap().kind(), "ring");
    }

    #[test]
    fn test_ring_is_closed() {
        match RoadShape::classify(unit_square()).unwrap() {
            RoadShape::Ring(polygon) => {
                let exterior = polygon.exterior();
                assert_eq!(exterior.0.len(), 5);
                assert_eq!(exterior.0.first(), exterior.0.last());
            }
            other => panic!("expected ring, got {:?}", other),
        }
    }

    #[test]
    fn test_point_reflexive() {
        let p = Coord {
            x: 2.352222,
            y: 48.856614,
        };
        assert!(is_contained(&[p], p).unwrap());
    }

    #[test]
    fn test_point_rounding() {
        let p = Coord {
            x: 2.352222,
            y: 48.856614,
        };
        // Still rounds onto the same 6-decimal value
        let near = Coord {
            x: p.x + 4e-7,
            y: p.y - 4e-7,
        };
        assert!(is_contained(&[p], near).unwrap());

        let off_x = Coord {
            x: p.x + 6e-7,
            y: p.y,
        };
        let off_y = Coord {
            x: p.x,
            y: p.y - 6e-7,
        };
        assert!(!is_contained(&[p], off_x).unwrap());
        assert!(!is_contained(&[p], off_y).unwrap());
    }

    #[test]
    fn test_point_rounding_uses_exact_decimal_value() {
        // 2.0000215 is stored just below the half, so it rounds down
        let record = Coord {
            x: 2.0000215,
            y: 48.0,
        };
        assert!(is_contained(&[record], Coord { x: 2.000021, y: 48.0 }).unwrap());
        assert!(!is_contained(&[record], Coord { x: 2.000022, y: 48.0 }).unwrap());
        assert_eq!(round_coord(2.0000215), "2.000021");
    }

    #[test]
    fn test_path_includes_endpoints() {
        let line = vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 2.0, y: 2.0 }];
        assert!(is_contained(&line, Coord { x: 1.0, y: 1.0 }).unwrap());
        assert!(is_contained(&line, Coord { x: 0.0, y: 0.0 }).unwrap());
        assert!(is_contained(&line, Coord { x: 2.0, y: 2.0 }).unwrap());
    }

    #[test]
    fn test_path_excludes_off_segment_points() {
        let line = vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 2.0, y: 2.0 }];
        // Collinear but past the end
        assert!(!is_contained(&line, Coord { x: 3.0, y: 3.0 }).unwrap());
        assert!(!is_contained(&line, Coord { x: 1.0, y: 1.1 }).unwrap());
    }

    #[test]
    fn test_ring_inside_and_outside() {
        let square = unit_square();
        assert!(is_contained(&square, Coord { x: 0.5, y: 0.5 }).unwrap());
        assert!(!is_contained(&square, Coord { x: 1.5, y: 0.5 }).unwrap());
        assert!(!is_contained(&square, Coord { x: -0.1, y: -0.1 }).unwrap());
    }

    #[test]
    fn test_ring_boundary_inclusive() {
        let square = unit_square();
        // Edge
        assert!(is_contained(&square, Coord { x: 0.5, y: 0.0 }).unwrap());
        assert!(is_contained(&square, Coord { x: 1.0, y: 0.5 }).unwrap());
        // Vertex
        assert!(is_contained(&square, Coord { x: 1.0, y: 1.0 }).unwrap());
    }

    #[test]
    fn test_ring_already_closed_input() {
        let mut square = unit_square();
        square.push(square[0]);
        assert!(is_contained(&square, Coord { x: 0.25, y: 0.75 }).unwrap());
    }

    #[test]
    fn test_empty_sequence_is_malformed() {
        assert_eq!(
            is_contained(&[], Coord { x: 0.0, y: 0.0 }).unwrap_err(),
            ZoneError::MalformedGeometry
        );
    }

    #[test]
    fn test_point_bounding_rect_covers_rounding() {
        let shape = RoadShape::classify(vec![Coord { x: 2.0, y: 48.0 }]).unwrap();
        let rect = shape.bounding_rect().unwrap();
        assert!(rect.min().x < 2.0 - 4e-7 && rect.max().x > 2.0 + 4e-7);
        assert!(rect.min().y < 48.0 - 4e-7 && rect.max().y > 48.0 + 4e-7);
    }
}
