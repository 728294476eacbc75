use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::math::stats::StatsHelper;

/// Per-array summary emitted after each pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageSummary {
    pub stage: String,
    pub rows: usize,
    pub cols: usize,
    pub min: f32,
    pub max: f32,
}

impl StageSummary {
    pub fn from_array(stage: &str, data: &Array2<f32>) -> Self {
        let (rows, cols) = data.dim();
        let (min, max) = StatsHelper::min_max(data.iter().copied()).unwrap_or((0.0, 0.0));
        Self {
            stage: stage.to_string(),
            rows,
            cols,
            min,
            max,
        }
    }
}

/// Summary of a full reconstruction run, serialized by the driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconReport {
    pub sino_rows: usize,
    pub dim: usize,
    pub stages: Vec<StageSummary>,
}
