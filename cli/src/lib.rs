use std::str::FromStr;

use ndarray::Array1;
use regions::{linspace, Mask, MaskSummary, Region, RegionError, Shape};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Region(#[from] RegionError),
    #[error("Invalid axis '{0}': expected start:stop:num")]
    InvalidAxis(String),
    #[error("Region '{0}' has no outline to draw")]
    NoOverlay(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Evenly spaced axis given on the command line as `start:stop:num`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSpec {
    pub start: f64,
    pub stop: f64,
    pub num: usize,
}

impl AxisSpec {
    pub fn to_axis(&self) -> Array1<f64> {
        linspace(self.start, self.stop, self.num)
    }
}

impl FromStr for AxisSpec {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CliError::InvalidAxis(s.to_string());
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let [start, stop, num] = parts.as_slice() else {
            return Err(invalid());
        };

        let start: f64 = start.parse().map_err(|_| invalid())?;
        let stop: f64 = stop.parse().map_err(|_| invalid())?;
        let num: usize = num.parse().map_err(|_| invalid())?;
        if num == 0 || !start.is_finite() || !stop.is_finite() {
            return Err(invalid());
        }
        Ok(Self { start, stop, num })
    }
}

/// Render a mask as rows of `0`/`1`, first row = first z sample
pub fn render_mask(mask: &Mask) -> String {
    mask.rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|&inside| if inside { "1" } else { "0" })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Summary printed by the `info` command
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegionReport {
    pub kind: &'static str,
    pub units: String,
    pub area: Option<f64>,
    pub bounding_box: Option<([f64; 2], [f64; 2])>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<MaskSummary>,
}

impl RegionReport {
    pub fn new(shape: &Shape) -> Self {
        Self {
            kind: shape.name(),
            units: shape.units().to_string(),
            area: shape.area(),
            bounding_box: shape.overlay().map(|overlay| overlay.bounding_box()),
            mask: None,
        }
    }

    pub fn with_mask(mut self, mask: &Mask) -> Self {
        self.mask = Some(MaskSummary::of(mask));
        self
    }
}

/// GeoJSON outline of a region
pub fn overlay_geojson(shape: &Shape, segments: usize) -> Result<String, CliError> {
    let overlay = shape
        .overlay()
        .ok_or_else(|| CliError::NoOverlay(shape.name().to_string()))?;
    Ok(serde_json::to_string(&overlay.to_geojson(segments))?)
}
