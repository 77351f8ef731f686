use ndarray::{Array1, ArrayView1, ArrayView2};
use crate::{
    error::Result,
    grid::Grid,
    mask::{compute_mask, extract_values, Mask},
    overlay::Overlay,
};

/// A 2D region of interest over the lateral (x) and axial (z) axes.
pub trait Region: Send + Sync {
    /// Whether the point `(x, z)` lies inside the region
    fn contains(&self, x: f64, z: f64) -> bool;

    /// Enclosed area in squared units, if the shape defines one
    fn area(&self) -> Option<f64>;

    /// Unit label shared by every coordinate of the region
    fn units(&self) -> &str;

    /// Outline description for an external renderer
    fn overlay(&self) -> Option<Overlay>;

    /// Mask of shape `(z_axis.len(), x_axis.len())` for a pair of 1D axes
    fn create_mask(&self, x_axis: ArrayView1<'_, f64>, z_axis: ArrayView1<'_, f64>) -> Mask {
        self.create_mask_on(&Grid::from_axes(x_axis, z_axis))
    }

    /// Mask for a pre-expanded coordinate grid
    fn create_mask_on(&self, grid: &Grid) -> Mask {
        compute_mask(self, grid)
    }

    /// Image values inside the region, in row-major order
    fn get_values_in_region(
        &self,
        image: ArrayView2<'_, f64>,
        x_axis: ArrayView1<'_, f64>,
        z_axis: ArrayView1<'_, f64>,
    ) -> Result<Array1<f64>> {
        self.get_values_in_region_on(image, &Grid::from_axes(x_axis, z_axis))
    }

    /// Image values inside the region for a pre-expanded coordinate grid
    fn get_values_in_region_on(&self, image: ArrayView2<'_, f64>, grid: &Grid) -> Result<Array1<f64>> {
        let mask = self.create_mask_on(grid);
        extract_values(&mask.view(), &image)
    }
}
