//! Cell-size search.
//!
//! A step is "too fine" when sampling the image at that spacing keeps
//! landing several samples inside the same true cell, which shows up as
//! many 2×2 sample neighbourhoods with near-identical luminance. Larger
//! steps are assumed less likely to be too fine, so the true cell size is
//! the smallest step that is not, found by bisection.
//!
//! The monotonicity assumption does not hold for every image (periodic
//! structure at several scales, rotated grids, two-color checkerboards at
//! steps past one cell). In that case the search still terminates and
//! returns a deterministic step next to the first violation it meets.

use crate::error::GridError;
use crate::image::{ImageView, Luminance};
use crate::sampler::{sample, CoarseGrid};
use crate::select::select_kth;
use log::debug;
use serde::{Deserialize, Serialize};

/// Knobs of the uniformity test and the search interval.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepParams {
    /// Lower end of the search interval; assumed too fine.
    pub min_step: usize,
    /// Steps with more than this many cells across the width are noise.
    pub max_cells_across: usize,
    /// Steps with fewer than this many cells across the width cannot be judged.
    pub min_cells_across: usize,
    /// Neighbour differences strictly below this count as equal.
    pub uniformity_tolerance: u8,
    /// A step is too fine once more than this many neighbourhoods are uniform.
    pub uniform_count_threshold: usize,
}

impl Default for StepParams {
    fn default() -> Self {
        Self {
            min_step: 10,
            max_cells_across: 50,
            min_cells_across: 2,
            uniformity_tolerance: 5,
            uniform_count_threshold: 44,
        }
    }
}

/// Bisection search for the grid step.
#[derive(Clone, Debug, Default)]
pub struct StepEstimator {
    params: StepParams,
}

impl StepEstimator {
    pub fn new(params: StepParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &StepParams {
        &self.params
    }

    /// Whether sampling at `step` oversamples the grid.
    pub fn is_too_fine<I>(&self, image: &I, step: usize) -> bool
    where
        I: ImageView,
        I::Pixel: Luminance,
    {
        let Some(cells_across) = image.width().checked_div(step) else {
            return false;
        };
        if cells_across > self.params.max_cells_across
            || cells_across < self.params.min_cells_across
        {
            return false;
        }

        let offset = step / 2;
        if offset >= image.height() {
            debug!("step probe {step}: image height {} too short", image.height());
            return false;
        }
        match sample(image, step, offset, offset) {
            Ok(grid) => self.exceeds_uniform_threshold(&grid),
            Err(err) => {
                debug!("step probe {step}: {err}");
                false
            }
        }
    }

    /// Find the smallest step in `(min_step, width / 2]` that is not too fine.
    pub fn find_step<I>(&self, image: &I) -> Result<usize, GridError>
    where
        I: ImageView,
        I::Pixel: Luminance,
    {
        let (width, height) = (image.width(), image.height());
        let min_step = self.params.min_step;
        if height == 0 || width / 2 < min_step {
            return Err(GridError::InvalidDimensions {
                width,
                height,
                min_width: 2 * min_step,
            });
        }

        let mut left = min_step;
        let mut right = width / 2;
        while left + 1 < right {
            let mid = left + (right - left) / 2;
            let too_fine = self.is_too_fine(image, mid);
            debug!("step search: [{left}, {right}] probe={mid} too_fine={too_fine}");
            if too_fine {
                left = mid;
            } else {
                right = mid;
            }
        }
        Ok(right)
    }

    fn exceeds_uniform_threshold(&self, grid: &CoarseGrid) -> bool {
        let tolerance = self.params.uniformity_tolerance;
        let mut uniform = 0usize;
        for i in 0..grid.cols().saturating_sub(1) {
            for j in 0..grid.rows().saturating_sub(1) {
                let anchor = grid.get(i, j);
                let diffs = [
                    anchor.abs_diff(grid.get(i + 1, j)),
                    anchor.abs_diff(grid.get(i, j + 1)),
                    anchor.abs_diff(grid.get(i + 1, j + 1)),
                ];
                if select_kth(&diffs, diffs.len() - 1) < tolerance {
                    uniform += 1;
                    if uniform > self.params.uniform_count_threshold {
                        return true;
                    }
                }
            }
        }
        false
    }
}
