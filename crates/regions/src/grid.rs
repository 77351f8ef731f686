use ndarray::{Array1, Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::error::{RegionError, Result};

/// Sampling grid over the lateral (x) and axial (z) axes.
///
/// Both coordinate arrays have shape `(Nz, Nx)`: the row index follows z and
/// the column index follows x.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridParts")]
pub struct Grid {
    x: Array2<f64>,
    z: Array2<f64>,
}

impl Grid {
    /// Expand a pair of 1D axes into a full coordinate grid (meshgrid).
    pub fn from_axes(x_axis: ArrayView1<'_, f64>, z_axis: ArrayView1<'_, f64>) -> Self {
        let shape = (z_axis.len(), x_axis.len());
        let x = Array2::from_shape_fn(shape, |(_, col)| x_axis[col]);
        let z = Array2::from_shape_fn(shape, |(row, _)| z_axis[row]);
        Self { x, z }
    }

    /// Wrap pre-expanded coordinate grids. Both must have the same shape.
    pub fn from_meshgrid(x: Array2<f64>, z: Array2<f64>) -> Result<Self> {
        if x.dim() != z.dim() {
            return Err(RegionError::ShapeMismatch {
                expected: x.dim(),
                actual: z.dim(),
            });
        }
        Ok(Self { x, z })
    }

    /// Grid shape as `(rows, cols)`, i.e. `(Nz, Nx)`.
    pub fn shape(&self) -> (usize, usize) {
        self.x.dim()
    }

    pub fn x(&self) -> &Array2<f64> {
        &self.x
    }

    pub fn z(&self) -> &Array2<f64> {
        &self.z
    }
}

/// Coordinate arrays before the shape check
#[derive(Deserialize)]
struct GridParts {
    x: Array2<f64>,
    z: Array2<f64>,
}

impl TryFrom<GridParts> for Grid {
    type Error = RegionError;

    fn try_from(parts: GridParts) -> Result<Self> {
        Self::from_meshgrid(parts.x, parts.z)
    }
}

/// `num` evenly spaced samples over the closed interval `[start, stop]`.
pub fn linspace(start: f64, stop: f64, num: usize) -> Array1<f64> {
    Array1::linspace(start, stop, num)
}

/// Pixel-index axis `0, 1, ..., len - 1`.
pub fn index_axis(len: usize) -> Array1<f64> {
    Array1::from_iter((0..len).map(|i| i as f64))
}
