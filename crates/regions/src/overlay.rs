use std::f64::consts::TAU;

use geo::BoundingRect;
use geo_types::{Coord, LineString, Polygon};
use geojson::{Geometry, Value};
use serde::{Deserialize, Serialize};

/// Outline of a region, expressed in the region's own coordinates.
///
/// Carries just enough for an external renderer to draw the region on top
/// of an image. Nothing here rasterizes or plots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Overlay {
    Circle {
        center: [f64; 2],
        radius: f64,
    },
    /// Ring between `radius - width` and `radius`
    Wedge {
        center: [f64; 2],
        radius: f64,
        width: f64,
    },
    /// Axis-aligned rectangle anchored at its lower-left corner
    Rectangle {
        anchor: [f64; 2],
        width: f64,
        height: f64,
    },
    /// Axis-aligned ellipse; `width` and `height` are full diameters
    Ellipse {
        center: [f64; 2],
        width: f64,
        height: f64,
    },
    Polygon {
        vertices: Vec<[f64; 2]>,
    },
}

impl Overlay {
    /// Approximate the outline as a polygon, sampling curved edges with
    /// `segments` points (minimum 3).
    pub fn to_polygon(&self, segments: usize) -> Polygon<f64> {
        let segments = segments.max(3);
        match self {
            Overlay::Circle { center, radius } => {
                Polygon::new(ellipse_ring(*center, *radius, *radius, segments), vec![])
            }
            Overlay::Wedge { center, radius, width } => {
                let inner = (radius - width).max(0.0);
                let exterior = ellipse_ring(*center, *radius, *radius, segments);
                let holes = if inner > 0.0 {
                    vec![ellipse_ring(*center, inner, inner, segments)]
                } else {
                    vec![]
                };
                Polygon::new(exterior, holes)
            }
            Overlay::Rectangle { anchor, width, height } => {
                let [x0, z0] = *anchor;
                let corners = vec![
                    Coord { x: x0, y: z0 },
                    Coord { x: x0 + width, y: z0 },
                    Coord { x: x0 + width, y: z0 + height },
                    Coord { x: x0, y: z0 + height },
                ];
                Polygon::new(LineString::new(corners), vec![])
            }
            Overlay::Ellipse { center, width, height } => {
                Polygon::new(ellipse_ring(*center, width / 2.0, height / 2.0, segments), vec![])
            }
            Overlay::Polygon { vertices } => {
                let coords = vertices.iter().map(|&[x, z]| Coord { x, y: z }).collect();
                Polygon::new(LineString::new(coords), vec![])
            }
        }
    }

    /// Lower-left and upper-right corners of the outline
    pub fn bounding_box(&self) -> ([f64; 2], [f64; 2]) {
        match self {
            Overlay::Circle { center, radius } | Overlay::Wedge { center, radius, .. } => (
                [center[0] - radius, center[1] - radius],
                [center[0] + radius, center[1] + radius],
            ),
            Overlay::Rectangle { anchor, width, height } => {
                (*anchor, [anchor[0] + width, anchor[1] + height])
            }
            Overlay::Ellipse { center, width, height } => (
                [center[0] - width / 2.0, center[1] - height / 2.0],
                [center[0] + width / 2.0, center[1] + height / 2.0],
            ),
            Overlay::Polygon { .. } => match self.to_polygon(3).bounding_rect() {
                Some(rect) => ([rect.min().x, rect.min().y], [rect.max().x, rect.max().y]),
                None => ([f64::NAN; 2], [f64::NAN; 2]),
            },
        }
    }

    /// Export the sampled outline as a GeoJSON polygon geometry
    pub fn to_geojson(&self, segments: usize) -> Geometry {
        let polygon = self.to_polygon(segments);
        let ring = |line: &LineString<f64>| -> Vec<Vec<f64>> {
            line.coords().map(|c| vec![c.x, c.y]).collect()
        };

        let mut coordinates = vec![ring(polygon.exterior())];
        coordinates.extend(polygon.interiors().iter().map(ring));
        Geometry::new(Value::Polygon(coordinates))
    }
}

fn ellipse_ring(center: [f64; 2], radius_x: f64, radius_z: f64, segments: usize) -> LineString<f64> {
    let coords = (0..segments)
        .map(|i| {
            let theta = TAU * i as f64 / segments as f64;
            Coord {
                x: center[0] + radius_x * theta.cos(),
                y: center[1] + radius_z * theta.sin(),
            }
        })
        .collect();
    LineString::new(coords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Area;

    #[test]
    fn test_rectangle_outline_area() {
        let overlay = Overlay::Rectangle { anchor: [0.25, 0.5], width: 1.5, height: 1.0 };
        let polygon = overlay.to_polygon(16);
        assert!((polygon.unsigned_area() - 1.5).abs() < 1e-12);
        assert_eq!(overlay.bounding_box(), ([0.25, 0.5], [1.75, 1.5]));
    }

    #[test]
    fn test_circle_outline_converges_to_disk_area() {
        let overlay = Overlay::Circle { center: [1.0, 1.0], radius: 2.0 };
        let area = overlay.to_polygon(720).unsigned_area();
        let expected = std::f64::consts::PI * 4.0;
        assert!((area - expected).abs() / expected < 1e-3);
    }

    #[test]
    fn test_wedge_has_hole() {
        let overlay = Overlay::Wedge { center: [0.0, 0.0], radius: 2.0, width: 1.0 };
        let polygon = overlay.to_polygon(64);
        assert_eq!(polygon.interiors().len(), 1);

        let solid = Overlay::Wedge { center: [0.0, 0.0], radius: 2.0, width: 2.0 };
        assert!(solid.to_polygon(64).interiors().is_empty());
    }

    #[test]
    fn test_polygon_bounding_box() {
        let overlay = Overlay::Polygon {
            vertices: vec![[0.0, 0.0], [3.0, 1.0], [1.0, 4.0]],
        };
        assert_eq!(overlay.bounding_box(), ([0.0, 0.0], [3.0, 4.0]));
    }

    #[test]
    fn test_geojson_rings() {
        let overlay = Overlay::Wedge { center: [0.0, 0.0], radius: 2.0, width: 1.0 };
        let geometry = overlay.to_geojson(8);
        match geometry.value {
            Value::Polygon(rings) => {
                assert_eq!(rings.len(), 2);
                // geo closes rings, so the first point is repeated
                assert_eq!(rings[0].len(), 9);
                assert_eq!(rings[0].first(), rings[0].last());
            }
            other => panic!("Expected polygon geometry, got {:?}", other),
        }
    }
}
