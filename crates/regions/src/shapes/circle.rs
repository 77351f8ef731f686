use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use crate::{
    error::{RegionError, Result},
    overlay::Overlay,
    traits::Region,
};
use super::{check_finite, check_non_negative};

/// Disk of radius `radius` around `(xc, zc)`, boundary included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CircleParams")]
pub struct Circle {
    xc: f64,
    zc: f64,
    radius: f64,
    units: String,
}

impl Circle {
    pub fn new(xc: f64, zc: f64, radius: f64, units: impl Into<String>) -> Result<Self> {
        Ok(Self {
            xc: check_finite("circle", "xc", xc)?,
            zc: check_finite("circle", "zc", zc)?,
            radius: check_non_negative("circle", "radius", radius)?,
            units: units.into(),
        })
    }

    pub fn xc(&self) -> f64 {
        self.xc
    }

    pub fn zc(&self) -> f64 {
        self.zc
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// Unchecked fields, validated through [`Circle::new`] on deserialization
#[derive(Deserialize)]
struct CircleParams {
    xc: f64,
    zc: f64,
    radius: f64,
    units: String,
}

impl TryFrom<CircleParams> for Circle {
    type Error = RegionError;

    fn try_from(params: CircleParams) -> Result<Self> {
        Self::new(params.xc, params.zc, params.radius, params.units)
    }
}

impl Region for Circle {
    fn contains(&self, x: f64, z: f64) -> bool {
        let (dx, dz) = (x - self.xc, z - self.zc);
        (dx * dx + dz * dz).sqrt() <= self.radius
    }

    fn area(&self) -> Option<f64> {
        Some(PI * self.radius.powi(2))
    }

    fn units(&self) -> &str {
        &self.units
    }

    fn overlay(&self) -> Option<Overlay> {
        Some(Overlay::Circle {
            center: [self.xc, self.zc],
            radius: self.radius,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::linspace;

    #[test]
    fn test_deserialize_validates() {
        let circle: Circle =
            serde_json::from_str(r#"{ "xc": 1, "zc": 1, "radius": 0.5, "units": "mm" }"#)
                .expect("Valid circle JSON");
        assert_eq!(circle, Circle::new(1.0, 1.0, 0.5, "mm").unwrap());

        let err = serde_json::from_str::<Circle>(r#"{ "xc": 0, "zc": 0, "radius": -1, "units": "mm" }"#)
            .unwrap_err();
        assert!(err.to_string().contains("radius"));
    }

    #[test]
    fn test_attributes() {
        let circle = Circle::new(1.0, 1.0, 0.5, "mm").expect("Valid circle");
        assert_eq!(circle.xc(), 1.0);
        assert_eq!(circle.zc(), 1.0);
        assert_eq!(circle.radius(), 0.5);
        assert_eq!(circle.units(), "mm");
        assert!((circle.area().unwrap() - PI * 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_boundary_included() {
        let circle = Circle::new(0.0, 0.0, 1.0, "mm").unwrap();
        assert!(circle.contains(1.0, 0.0));
        assert!(circle.contains(0.0, -1.0));
        assert!(!circle.contains(1.0, 0.5));
    }

    #[test]
    fn test_radius_from_euclidean_distance_is_inclusive() {
        let (x, z) = (0.1_f64, 0.2_f64);
        let radius = (x * x + z * z).sqrt();
        let circle = Circle::new(0.0, 0.0, radius, "mm").unwrap();
        assert!(circle.contains(x, z));

        let annulus = crate::shapes::Annulus::new(0.0, 0.0, 0.0, radius, "mm").unwrap();
        assert!(annulus.contains(x, z));
    }

    #[test]
    fn test_zero_radius_selects_center_only() {
        let circle = Circle::new(1.0, 1.0, 0.0, "mm").unwrap();
        let axis = linspace(0.0, 2.0, 5);
        let mask = circle.create_mask(axis.view(), axis.view());
        assert_eq!(mask.iter().filter(|&&inside| inside).count(), 1);
        assert!(mask[[2, 2]]);
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        assert!(Circle::new(0.0, 0.0, -1.0, "mm").is_err());
        assert!(Circle::new(f64::NAN, 0.0, 1.0, "mm").is_err());
    }
}
