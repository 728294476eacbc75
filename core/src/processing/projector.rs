use ndarray::{Array2, Axis};

use crate::math::rotate::rotate_about_center;
use crate::math::stats::StatsHelper;
use crate::prelude::{ReconConfig, ReconError, ReconResult, ReconStage};
use crate::telemetry::log::LogManager;

/// Forward-projection stage: synthesizes a sinogram from a square image.
///
/// Row `i` of the output holds the column sums of the image rotated by
/// `-i*180/sino_rows` degrees, one row per projection angle over
/// [0°, 180°). Each column sum approximates the line integral of the image
/// along the direction perpendicular to that column at the row's angle.
pub struct ProjectorStage {
    config: Option<ReconConfig>,
    logger: LogManager,
}

impl ProjectorStage {
    pub fn new() -> Self {
        Self {
            config: None,
            logger: LogManager::for_stage("projector"),
        }
    }
}

impl Default for ProjectorStage {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconStage for ProjectorStage {
    fn initialize(&mut self, config: &ReconConfig) -> ReconResult<()> {
        if config.sino_rows == 0 {
            return Err(ReconError::Config("sino_rows must be positive".into()));
        }
        self.config = Some(config.clone());
        Ok(())
    }

    fn execute(&mut self, input: &Array2<f32>) -> ReconResult<Array2<f32>> {
        let config = self
            .config
            .as_ref()
            .ok_or_else(|| ReconError::Config("stage not initialized".into()))?;

        let (rows, cols) = input.dim();
        if rows != cols {
            return Err(ReconError::Shape(format!(
                "projection input must be square, got {rows}x{cols}"
            )));
        }

        let dim = cols;
        let sino_rows = config.sino_rows;
        let mut sino = Array2::<f32>::zeros((sino_rows, dim));

        for i in 0..sino_rows {
            let angle = -(i as f32) * 180.0 / sino_rows as f32;
            let rotated = rotate_about_center(input.view(), angle, 0.0);
            for (x, column) in rotated.axis_iter(Axis(1)).enumerate() {
                sino[[i, x]] = column.sum();
            }
        }

        self.logger.record(&format!(
            "built {}x{} sinogram, total {:.4}",
            sino_rows,
            dim,
            StatsHelper::total(sino.iter().copied())
        ));
        Ok(sino)
    }

    fn cleanup(&mut self) {
        self.config = None;
    }
}
