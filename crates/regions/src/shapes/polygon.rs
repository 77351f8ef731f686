use geo::coordinate_position::{CoordPos, CoordinatePosition};
use geo_types::{Coord, LineString};
use crate::{
    error::{RegionError, Result},
    overlay::Overlay,
    traits::Region,
};

/// Closed polygon through an ordered list of `(x, z)` vertices.
///
/// The last vertex connects back to the first. Points on an edge or vertex
/// count as inside.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<[f64; 2]>,
    outline: geo_types::Polygon<f64>,
    units: String,
}

impl Polygon {
    pub const MIN_VERTICES: usize = 3;

    pub fn new(vertices: Vec<[f64; 2]>, units: impl Into<String>) -> Result<Self> {
        if vertices.len() < Self::MIN_VERTICES {
            return Err(RegionError::InvalidVertices(format!(
                "polygon needs at least {} vertices, got {}",
                Self::MIN_VERTICES,
                vertices.len()
            )));
        }
        if let Some(index) = vertices.iter().position(|v| !v.iter().all(|c| c.is_finite())) {
            return Err(RegionError::InvalidVertices(format!(
                "vertex {index} has a non-finite coordinate"
            )));
        }

        let coords: Vec<Coord<f64>> = vertices.iter().map(|&[x, z]| Coord { x, y: z }).collect();
        let outline = geo_types::Polygon::new(LineString::new(coords), vec![]);

        Ok(Self {
            vertices,
            outline,
            units: units.into(),
        })
    }

    pub fn vertices(&self) -> &[[f64; 2]] {
        &self.vertices
    }
}

impl Region for Polygon {
    fn contains(&self, x: f64, z: f64) -> bool {
        matches!(
            self.outline.coordinate_position(&Coord { x, y: z }),
            CoordPos::Inside | CoordPos::OnBoundary
        )
    }

    fn area(&self) -> Option<f64> {
        None
    }

    fn units(&self) -> &str {
        &self.units
    }

    fn overlay(&self) -> Option<Overlay> {
        Some(Overlay::Polygon {
            vertices: self.vertices.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Polygon {
        Polygon::new(vec![[0.0, 0.0], [4.0, 0.0], [0.0, 4.0]], "mm").expect("Valid triangle")
    }

    #[test]
    fn test_interior_and_exterior_points() {
        let polygon = triangle();
        assert!(polygon.contains(1.0, 1.0));
        assert!(!polygon.contains(3.0, 3.0));
        assert!(!polygon.contains(-1.0, 1.0));
    }

    #[test]
    fn test_boundary_counts_as_inside() {
        let polygon = triangle();
        assert!(polygon.contains(2.0, 0.0));
        assert!(polygon.contains(0.0, 0.0));
    }

    #[test]
    fn test_concave_polygon() {
        // U shape opening upwards
        let polygon = Polygon::new(
            vec![[0.0, 0.0], [3.0, 0.0], [3.0, 3.0], [2.0, 3.0], [2.0, 1.0], [1.0, 1.0], [1.0, 3.0], [0.0, 3.0]],
            "mm",
        )
        .unwrap();
        assert!(polygon.contains(0.5, 2.0));
        assert!(polygon.contains(2.5, 2.0));
        assert!(!polygon.contains(1.5, 2.0));
        assert!(polygon.contains(1.5, 0.5));
    }

    #[test]
    fn test_vertex_order_is_kept() {
        let polygon = triangle();
        assert_eq!(polygon.vertices(), &[[0.0, 0.0], [4.0, 0.0], [0.0, 4.0]]);
        assert_eq!(polygon.area(), None);
        assert_eq!(polygon.units(), "mm");
    }

    #[test]
    fn test_rejects_short_or_non_finite_vertex_lists() {
        let err = Polygon::new(vec![[0.0, 0.0], [1.0, 1.0]], "mm").unwrap_err();
        assert!(matches!(err, RegionError::InvalidVertices(_)));
        assert!(Polygon::new(vec![[0.0, 0.0], [1.0, f64::NAN], [1.0, 0.0]], "mm").is_err());
    }
}
