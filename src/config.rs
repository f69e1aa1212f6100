//! JSON runtime configuration for the command-line tool.
//!
//! ```json
//! {
//!   "analyzer": { "step": { "uniform_count_threshold": 44 }, "fixed_step": null },
//!   "overlay": { "match_tolerance": 25, "all_points": false, "marker": { "arm": 5, "thickness": 3 } }
//! }
//! ```
//!
//! Every section is optional; missing fields take their defaults.
use crate::analysis::AnalyzerParams;
use crate::overlay::MarkerStyle;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct OverlayOptions {
    /// Luminance distance from the dominant color for a point to be marked.
    pub match_tolerance: u8,
    /// Mark every lattice point regardless of its color.
    pub all_points: bool,
    pub marker: MarkerStyle,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            match_tolerance: 25,
            all_points: false,
            marker: MarkerStyle::default(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub analyzer: AnalyzerParams,
    pub overlay: OverlayOptions,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&contents).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn parse_config(contents: &str) -> Result<RuntimeConfig, serde_json::Error> {
    serde_json::from_str(contents)
}
