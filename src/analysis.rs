//! Full analysis pass: step search, then phase and color search.

use crate::error::GridError;
use crate::image::{ImageView, Luminance};
use crate::shift::{find_shifts_and_color, ShiftEstimate};
use crate::step::{StepEstimator, StepParams};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Parameters for [`GridAnalyzer`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerParams {
    pub step: StepParams,
    /// Skip the step search and use this spacing.
    pub fixed_step: Option<usize>,
}

/// Grid step, phase and dominant color handed to overlay consumers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridGeometry {
    pub step: usize,
    pub shift_x: usize,
    pub shift_y: usize,
    pub dominant_color: u8,
}

#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisTimings {
    pub step_ms: f64,
    pub shift_ms: f64,
    pub total_ms: f64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridAnalysis {
    pub width: usize,
    pub height: usize,
    pub geometry: GridGeometry,
    /// Whether `geometry.step` came from the search or a fixed override.
    pub step_searched: bool,
    pub support: usize,
    pub cells: usize,
    pub tied_buckets: usize,
    pub timings: AnalysisTimings,
}

impl GridAnalysis {
    /// Fraction of sampled cells carrying the dominant color.
    pub fn coverage(&self) -> f32 {
        if self.cells == 0 {
            0.0
        } else {
            self.support as f32 / self.cells as f32
        }
    }
}

pub struct GridAnalyzer {
    params: AnalyzerParams,
    estimator: StepEstimator,
}

impl GridAnalyzer {
    pub fn new(params: AnalyzerParams) -> Self {
        let estimator = StepEstimator::new(params.step.clone());
        Self { params, estimator }
    }

    pub fn params(&self) -> &AnalyzerParams {
        &self.params
    }

    pub fn analyze<I>(&self, image: &I) -> Result<GridAnalysis, GridError>
    where
        I: ImageView + Sync,
        I::Pixel: Luminance,
    {
        let t0 = Instant::now();
        let (step, step_searched) = match self.params.fixed_step {
            Some(step) => (step, false),
            None => (self.estimator.find_step(image)?, true),
        };
        let step_ms = t0.elapsed().as_secs_f64() * 1000.0;

        let t1 = Instant::now();
        let ShiftEstimate {
            shift_x,
            shift_y,
            dominant_color,
            support,
            cells,
            tied_buckets,
        } = find_shifts_and_color(image, step)?;
        let shift_ms = t1.elapsed().as_secs_f64() * 1000.0;

        let analysis = GridAnalysis {
            width: image.width(),
            height: image.height(),
            geometry: GridGeometry {
                step,
                shift_x,
                shift_y,
                dominant_color,
            },
            step_searched,
            support,
            cells,
            tied_buckets,
            timings: AnalysisTimings {
                step_ms,
                shift_ms,
                total_ms: t0.elapsed().as_secs_f64() * 1000.0,
            },
        };
        debug!(
            "GridAnalyzer::analyze {}x{} -> {:?} in {:.3} ms",
            analysis.width, analysis.height, analysis.geometry, analysis.timings.total_ms
        );
        Ok(analysis)
    }
}

impl Default for GridAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::GrayView;

    #[test]
    fn fixed_step_skips_search() {
        // Too narrow for the search, fine for a fixed step.
        let data = vec![90u8; 16 * 16];
        let img = GrayView::packed(16, 16, &data).unwrap();
        let analyzer = GridAnalyzer::new(AnalyzerParams {
            fixed_step: Some(4),
            ..Default::default()
        });
        let res = analyzer.analyze(&img).unwrap();
        assert!(!res.step_searched);
        assert_eq!(
            res.geometry,
            GridGeometry {
                step: 4,
                shift_x: 0,
                shift_y: 0,
                dominant_color: 90
            }
        );
        assert_eq!(res.coverage(), 1.0);
        assert!(GridAnalyzer::default().analyze(&img).is_err());
    }

    #[test]
    fn params_deserialize_with_defaults() {
        let params: AnalyzerParams =
            serde_json::from_str(r#"{ "step": { "uniform_count_threshold": 0 } }"#).unwrap();
        assert_eq!(params.fixed_step, None);
        assert_eq!(params.step.uniform_count_threshold, 0);
        assert_eq!(params.step.min_step, 10);
    }
}
