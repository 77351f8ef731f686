use serde::{Deserialize, Serialize};
use crate::{
    error::{RegionError, Result},
    overlay::Overlay,
    traits::Region,
};
use super::{check_finite, check_positive};

/// Axis-aligned rectangle centred on `(xc, zc)`, boundary included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RectangleParams")]
pub struct Rectangle {
    xc: f64,
    zc: f64,
    width: f64,
    height: f64,
    units: String,
}

impl Rectangle {
    pub fn new(xc: f64, zc: f64, width: f64, height: f64, units: impl Into<String>) -> Result<Self> {
        Ok(Self {
            xc: check_finite("rectangle", "xc", xc)?,
            zc: check_finite("rectangle", "zc", zc)?,
            width: check_positive("rectangle", "width", width)?,
            height: check_positive("rectangle", "height", height)?,
            units: units.into(),
        })
    }

    /// Square with side `length`
    pub fn square(xc: f64, zc: f64, length: f64, units: impl Into<String>) -> Result<Self> {
        Self::new(xc, zc, length, length, units)
    }

    pub fn xc(&self) -> f64 {
        self.xc
    }

    pub fn zc(&self) -> f64 {
        self.zc
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// Unchecked fields, validated through [`Rectangle::new`] on deserialization
#[derive(Deserialize)]
struct RectangleParams {
    xc: f64,
    zc: f64,
    width: f64,
    height: f64,
    units: String,
}

impl TryFrom<RectangleParams> for Rectangle {
    type Error = RegionError;

    fn try_from(params: RectangleParams) -> Result<Self> {
        Self::new(params.xc, params.zc, params.width, params.height, params.units)
    }
}

impl Region for Rectangle {
    fn contains(&self, x: f64, z: f64) -> bool {
        (x - self.xc).abs() <= self.width / 2.0 && (z - self.zc).abs() <= self.height / 2.0
    }

    fn area(&self) -> Option<f64> {
        Some(self.width * self.height)
    }

    fn units(&self) -> &str {
        &self.units
    }

    fn overlay(&self) -> Option<Overlay> {
        Some(Overlay::Rectangle {
            anchor: [self.xc - self.width / 2.0, self.zc - self.height / 2.0],
            width: self.width,
            height: self.height,
        })
    }
}
