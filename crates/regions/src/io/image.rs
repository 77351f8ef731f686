use std::path::Path;

use image::{GrayImage, Luma};
use ndarray::Array2;
use crate::{error::Result, mask::Mask};

/// Load an image as a luminance array of shape `(height, width)`.
///
/// Values are normalised to `[0, 1]` regardless of the source bit depth.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<Array2<f64>> {
    let path = path.as_ref();
    let luma = image::open(path)?.to_luma32f();
    let (width, height) = luma.dimensions();
    tracing::debug!(path = %path.display(), width, height, "loaded image");

    Ok(Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
        f64::from(luma.get_pixel(col as u32, row as u32)[0])
    }))
}

/// Write a mask as an 8-bit grayscale image, 255 inside and 0 outside.
pub fn save_mask<P: AsRef<Path>>(mask: &Mask, path: P) -> Result<()> {
    let (rows, cols) = mask.dim();
    let image = GrayImage::from_fn(cols as u32, rows as u32, |x, y| {
        Luma([if mask[[y as usize, x as usize]] { 255u8 } else { 0u8 }])
    });
    image.save(path)?;
    Ok(())
}
