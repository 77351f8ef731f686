use ndarray::{Array1, Array2, ArrayView2, Zip};
use serde::{Deserialize, Serialize};
use crate::{
    error::{RegionError, Result},
    grid::Grid,
    traits::Region,
};

/// Boolean grid, `true` where the grid point lies inside a region.
pub type Mask = Array2<bool>;

/// Evaluate the region predicate at every grid point.
pub fn compute_mask<R: Region + ?Sized>(region: &R, grid: &Grid) -> Mask {
    let mask = Zip::from(grid.x())
        .and(grid.z())
        .map_collect(|&x, &z| region.contains(x, z));

    tracing::debug!(
        rows = mask.nrows(),
        cols = mask.ncols(),
        selected = mask.iter().filter(|&&inside| inside).count(),
        "computed region mask"
    );
    mask
}

/// Select the image entries where the mask is set, in row-major order.
pub fn extract_values<T: Clone>(mask: &ArrayView2<'_, bool>, image: &ArrayView2<'_, T>) -> Result<Array1<T>> {
    if mask.dim() != image.dim() {
        return Err(RegionError::ShapeMismatch {
            expected: mask.dim(),
            actual: image.dim(),
        });
    }

    let values: Array1<T> = mask
        .iter()
        .zip(image.iter())
        .filter_map(|(&inside, value)| inside.then(|| value.clone()))
        .collect();

    tracing::debug!(count = values.len(), "extracted region values");
    Ok(values)
}

/// Counts describing a computed mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskSummary {
    pub rows: usize,
    pub cols: usize,
    pub selected: usize,
}

impl MaskSummary {
    pub fn of(mask: &Mask) -> Self {
        Self {
            rows: mask.nrows(),
            cols: mask.ncols(),
            selected: mask.iter().filter(|&&inside| inside).count(),
        }
    }

    /// Fraction of grid points inside the region (0 for an empty grid)
    pub fn fraction(&self) -> f64 {
        let total = self.rows * self.cols;
        if total == 0 {
            return 0.0;
        }
        self.selected as f64 / total as f64
    }
}
