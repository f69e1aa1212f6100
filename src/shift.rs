//! Grid phase and dominant cell color.
//!
//! For a known step every phase `(x, y)` in `[0, step)²` is tried. Each
//! trial samples the lattice, folds luminance into half-resolution buckets
//! and keeps the most populated bucket. The phase whose best bucket is the
//! most populated overall wins.
//!
//! Ties are resolved deterministically:
//! - buckets with equal counts: the darker (smaller) bucket wins;
//! - phases with equal counts: the smallest `x`, then the smallest `y` wins.

use crate::error::GridError;
use crate::image::{ImageView, Luminance};
use crate::sampler::{sample, CoarseGrid};
use log::debug;
use serde::Serialize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

const BUCKETS: usize = 1 << 7;

/// Result of the phase search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftEstimate {
    pub shift_x: usize,
    pub shift_y: usize,
    /// Winning bucket restored to 8 bits (low bit zero).
    pub dominant_color: u8,
    /// Samples in the winning bucket at the winning phase.
    pub support: usize,
    /// Samples taken at the winning phase.
    pub cells: usize,
    /// Buckets sharing the maximal count at the winning phase.
    pub tied_buckets: usize,
}

impl ShiftEstimate {
    /// More than one bucket reached the maximal count.
    pub fn is_ambiguous(&self) -> bool {
        self.tied_buckets > 1
    }
}

/// Luminance histogram at half resolution (`value >> 1`).
#[derive(Clone, Debug)]
pub(crate) struct BucketHistogram {
    bins: [usize; BUCKETS],
}

impl BucketHistogram {
    pub(crate) fn new() -> Self {
        Self { bins: [0; BUCKETS] }
    }

    pub(crate) fn from_grid(grid: &CoarseGrid) -> Self {
        let mut hist = Self::new();
        for &v in grid.values() {
            hist.accumulate(v);
        }
        hist
    }

    #[inline]
    pub(crate) fn accumulate(&mut self, value: u8) {
        self.bins[(value >> 1) as usize] += 1;
    }

    /// Most populated bucket as `(bucket, count, tied)`.
    pub(crate) fn mode(&self) -> (u8, usize, usize) {
        let mut best = 0usize;
        for (idx, &count) in self.bins.iter().enumerate() {
            if count > self.bins[best] {
                best = idx;
            }
        }
        let count = self.bins[best];
        let tied = self.bins.iter().filter(|&&c| c == count).count();
        (best as u8, count, tied)
    }
}

#[derive(Clone, Copy, Debug)]
struct PhaseScore {
    x: usize,
    y: usize,
    bucket: u8,
    count: usize,
    cells: usize,
    tied: usize,
}

/// Search every phase in `[0, step)²` for the best-supported color.
pub fn find_shifts_and_color<I>(image: &I, step: usize) -> Result<ShiftEstimate, GridError>
where
    I: ImageView + Sync,
    I::Pixel: Luminance,
{
    let (w, h) = (image.width(), image.height());
    if step == 0 || step > w || step > h {
        return Err(GridError::InvalidStep {
            step,
            width: w,
            height: h,
        });
    }

    let scores = score_phases(image, step)?;
    let best = scores
        .iter()
        .copied()
        .reduce(|best, s| if s.count > best.count { s } else { best })
        .ok_or(GridError::InvalidStep {
            step,
            width: w,
            height: h,
        })?;

    let estimate = ShiftEstimate {
        shift_x: best.x,
        shift_y: best.y,
        dominant_color: best.bucket << 1,
        support: best.count,
        cells: best.cells,
        tied_buckets: best.tied,
    };
    if estimate.is_ambiguous() {
        debug!(
            "shift search: {} buckets tie at count {} for phase ({}, {}); keeping the darkest",
            estimate.tied_buckets, estimate.support, estimate.shift_x, estimate.shift_y
        );
    }
    debug!(
        "shift search: step={step} phase=({}, {}) color={} support={}/{}",
        estimate.shift_x, estimate.shift_y, estimate.dominant_color, estimate.support, estimate.cells
    );
    Ok(estimate)
}

/// Scores in phase order `x * step + y`.
fn score_phases<I>(image: &I, step: usize) -> Result<Vec<PhaseScore>, GridError>
where
    I: ImageView + Sync,
    I::Pixel: Luminance,
{
    let score = |idx: usize| -> Result<PhaseScore, GridError> {
        let (x, y) = (idx / step, idx % step);
        let grid = sample(image, step, x, y)?;
        let (bucket, count, tied) = BucketHistogram::from_grid(&grid).mode();
        Ok(PhaseScore {
            x,
            y,
            bucket,
            count,
            cells: grid.len(),
            tied,
        })
    };

    #[cfg(feature = "parallel")]
    {
        (0..step * step).into_par_iter().map(score).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..step * step).map(score).collect()
    }
}
