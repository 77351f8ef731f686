use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use crate::{
    error::{RegionError, Result},
    overlay::Overlay,
    traits::Region,
};
use super::{check_finite, check_positive};

/// Axis-aligned ellipse with semi-axes `radius_x` and `radius_z`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EllipseParams")]
pub struct Ellipse {
    xc: f64,
    zc: f64,
    radius_x: f64,
    radius_z: f64,
    units: String,
}

impl Ellipse {
    pub fn new(
        xc: f64,
        zc: f64,
        radius_x: f64,
        radius_z: f64,
        units: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            xc: check_finite("ellipse", "xc", xc)?,
            zc: check_finite("ellipse", "zc", zc)?,
            radius_x: check_positive("ellipse", "radius_x", radius_x)?,
            radius_z: check_positive("ellipse", "radius_z", radius_z)?,
            units: units.into(),
        })
    }

    /// Circle modelled as an ellipse with equal semi-axes
    pub fn circle(xc: f64, zc: f64, radius: f64, units: impl Into<String>) -> Result<Self> {
        Self::new(xc, zc, radius, radius, units)
    }

    pub fn xc(&self) -> f64 {
        self.xc
    }

    pub fn zc(&self) -> f64 {
        self.zc
    }

    pub fn radius_x(&self) -> f64 {
        self.radius_x
    }

    pub fn radius_z(&self) -> f64 {
        self.radius_z
    }
}

/// Unchecked fields, validated through [`Ellipse::new`] on deserialization
#[derive(Deserialize)]
struct EllipseParams {
    xc: f64,
    zc: f64,
    radius_x: f64,
    radius_z: f64,
    units: String,
}

impl TryFrom<EllipseParams> for Ellipse {
    type Error = RegionError;

    fn try_from(params: EllipseParams) -> Result<Self> {
        Self::new(params.xc, params.zc, params.radius_x, params.radius_z, params.units)
    }
}

impl Region for Ellipse {
    fn contains(&self, x: f64, z: f64) -> bool {
        ((x - self.xc) / self.radius_x).powi(2) + ((z - self.zc) / self.radius_z).powi(2) <= 1.0
    }

    fn area(&self) -> Option<f64> {
        Some(PI * self.radius_x * self.radius_z)
    }

    fn units(&self) -> &str {
        &self.units
    }

    fn overlay(&self) -> Option<Overlay> {
        Some(Overlay::Ellipse {
            center: [self.xc, self.zc],
            width: 2.0 * self.radius_x,
            height: 2.0 * self.radius_z,
        })
    }
}
