//! Point sampling of an image onto a hypothesized cell lattice.
//!
//! The sampler reads exactly one pixel per cell, at
//! `(offset_x + i * step, offset_y + j * step)`, and stores its luminance.
//! There is no area averaging; the coarse grid is only as good as the pixels
//! it happens to hit.

use crate::error::GridError;
use crate::image::{ImageView, Luminance};

/// Down-sampled luminance lattice, one value per hypothesized cell.
///
/// Storage is x-major: `get(i, j)` is column `i` (along x) and row `j`
/// (along y), so `(i + 1, j)` is the right neighbour and `(i, j + 1)` the
/// one below.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoarseGrid {
    cols: usize,
    rows: usize,
    values: Vec<u8>,
}

impl CoarseGrid {
    /// Number of sampled columns (x direction).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of sampled rows (y direction).
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u8 {
        self.values[i * self.rows + j]
    }

    /// Samples of column `i`, top to bottom.
    pub fn column(&self, i: usize) -> &[u8] {
        let start = i * self.rows;
        &self.values[start..start + self.rows]
    }

    /// All samples in x-major order.
    pub fn values(&self) -> &[u8] {
        &self.values
    }
}

/// Sample `image` on the lattice with spacing `step` anchored at
/// `(offset_x, offset_y)`.
///
/// The grid has `ceil((w - offset_x) / step)` columns and
/// `ceil((h - offset_y) / step)` rows.
pub fn sample<I>(
    image: &I,
    step: usize,
    offset_x: usize,
    offset_y: usize,
) -> Result<CoarseGrid, GridError>
where
    I: ImageView,
    I::Pixel: Luminance,
{
    let (w, h) = (image.width(), image.height());
    if step == 0 {
        return Err(GridError::InvalidStep {
            step,
            width: w,
            height: h,
        });
    }
    if offset_x >= w || offset_y >= h {
        return Err(GridError::OutOfBounds {
            offset_x,
            offset_y,
            width: w,
            height: h,
        });
    }

    let cols = (w - offset_x).div_ceil(step);
    let rows = (h - offset_y).div_ceil(step);
    let mut values = Vec::with_capacity(cols * rows);
    for i in 0..cols {
        let x = offset_x + i * step;
        for j in 0..rows {
            let y = offset_y + j * step;
            values.push(image.pixel(x, y).luminance());
        }
    }

    Ok(CoarseGrid { cols, rows, values })
}
