use serde::{Deserialize, Serialize};
use crate::{overlay::Overlay, traits::Region};

/// Region covering the whole grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullGrid {
    units: String,
}

impl FullGrid {
    pub fn new(units: impl Into<String>) -> Self {
        Self { units: units.into() }
    }
}

impl Region for FullGrid {
    fn contains(&self, _x: f64, _z: f64) -> bool {
        true
    }

    fn area(&self) -> Option<f64> {
        None
    }

    fn units(&self) -> &str {
        &self.units
    }

    fn overlay(&self) -> Option<Overlay> {
        None
    }
}
