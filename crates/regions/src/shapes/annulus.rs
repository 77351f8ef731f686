use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use crate::{
    error::{RegionError, Result},
    overlay::Overlay,
    traits::Region,
};
use super::{check_finite, check_non_negative};

/// Ring between two concentric circles.
///
/// Membership is the exclusive-or of the outer and inner disks, so the outer
/// edge is included and the inner edge is not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AnnulusParams")]
pub struct Annulus {
    xc: f64,
    zc: f64,
    radius_in: f64,
    radius_out: f64,
    units: String,
}

impl Annulus {
    pub fn new(
        xc: f64,
        zc: f64,
        radius_in: f64,
        radius_out: f64,
        units: impl Into<String>,
    ) -> Result<Self> {
        let radius_in = check_non_negative("annulus", "radius_in", radius_in)?;
        let radius_out = check_non_negative("annulus", "radius_out", radius_out)?;
        if radius_out < radius_in {
            return Err(RegionError::invalid(
                "annulus",
                format!("radius_out ({radius_out}) is smaller than radius_in ({radius_in})"),
            ));
        }

        Ok(Self {
            xc: check_finite("annulus", "xc", xc)?,
            zc: check_finite("annulus", "zc", zc)?,
            radius_in,
            radius_out,
            units: units.into(),
        })
    }

    pub fn xc(&self) -> f64 {
        self.xc
    }

    pub fn zc(&self) -> f64 {
        self.zc
    }

    pub fn radius_in(&self) -> f64 {
        self.radius_in
    }

    pub fn radius_out(&self) -> f64 {
        self.radius_out
    }
}

/// Unchecked fields, validated through [`Annulus::new`] on deserialization
#[derive(Deserialize)]
struct AnnulusParams {
    xc: f64,
    zc: f64,
    radius_in: f64,
    radius_out: f64,
    units: String,
}

impl TryFrom<AnnulusParams> for Annulus {
    type Error = RegionError;

    fn try_from(params: AnnulusParams) -> Result<Self> {
        Self::new(params.xc, params.zc, params.radius_in, params.radius_out, params.units)
    }
}

impl Region for Annulus {
    fn contains(&self, x: f64, z: f64) -> bool {
        let (dx, dz) = (x - self.xc, z - self.zc);
        let distance = (dx * dx + dz * dz).sqrt();
        (distance <= self.radius_out) ^ (distance <= self.radius_in)
    }

    fn area(&self) -> Option<f64> {
        Some(PI * (self.radius_out.powi(2) - self.radius_in.powi(2)))
    }

    fn units(&self) -> &str {
        &self.units
    }

    fn overlay(&self) -> Option<Overlay> {
        Some(Overlay::Wedge {
            center: [self.xc, self.zc],
            radius: self.radius_out,
            width: self.radius_out - self.radius_in,
        })
    }
}
