#![doc = include_str!("../README.md")]

// Core pipeline
pub mod analysis;
pub mod error;
pub mod image;
pub mod sampler;
pub mod select;
pub mod shift;
pub mod step;

// Tooling around the core: overlay rendering and the CLI config.
pub mod config;
pub mod overlay;

// --- High-level re-exports -------------------------------------------------

pub use crate::analysis::{AnalyzerParams, GridAnalysis, GridAnalyzer, GridGeometry};
pub use crate::error::GridError;
pub use crate::sampler::{sample, CoarseGrid};
pub use crate::select::select_kth;
pub use crate::shift::{find_shifts_and_color, ShiftEstimate};
pub use crate::step::{StepEstimator, StepParams};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use cellgrid::prelude::*;
///
/// let (w, h) = (64usize, 64usize);
/// let gray = vec![128u8; w * h];
/// let img = GrayView::packed(w, h, &gray).unwrap();
///
/// let analyzer = GridAnalyzer::new(AnalyzerParams {
///     fixed_step: Some(16),
///     ..Default::default()
/// });
/// let res = analyzer.analyze(&img).unwrap();
/// assert_eq!(res.geometry.dominant_color, 128);
/// ```
pub mod prelude {
    pub use crate::image::{GrayView, ImageView, RgbView};
    pub use crate::{AnalyzerParams, GridAnalysis, GridAnalyzer, GridError, GridGeometry};
}
