use ndarray::{Array2, ArrayView1};

use crate::math::rotate::rotate_about_center;
use crate::math::stats::StatsHelper;
use crate::prelude::{ReconConfig, ReconError, ReconResult, ReconStage};
use crate::telemetry::log::LogManager;

/// Backprojection stage: smears each sinogram row across the image plane at
/// its projection angle and accumulates the result.
///
/// Each row of length `n` is stretched into an `n x n` array whose rows are
/// identical copies, rotated by `+i*180/r` degrees to undo the projector's
/// `-i*180/r`, and added into the accumulator. No normalization is applied;
/// rescaling for display is the caller's concern.
pub struct BackprojectStage {
    logger: LogManager,
}

impl BackprojectStage {
    pub fn new() -> Self {
        Self {
            logger: LogManager::for_stage("backproject"),
        }
    }
}

impl Default for BackprojectStage {
    fn default() -> Self {
        Self::new()
    }
}

/// Broadcasts a projection row into a square array, constant along the
/// direction the row was integrated over.
fn stretch(row: ArrayView1<'_, f32>) -> Array2<f32> {
    let dim = row.len();
    Array2::from_shape_fn((dim, dim), |(_, x)| row[x])
}

impl ReconStage for BackprojectStage {
    fn initialize(&mut self, _config: &ReconConfig) -> ReconResult<()> {
        Ok(())
    }

    fn execute(&mut self, input: &Array2<f32>) -> ReconResult<Array2<f32>> {
        let (sino_rows, dim) = input.dim();
        if sino_rows == 0 {
            return Err(ReconError::Config(
                "sinogram has no projection rows".into(),
            ));
        }

        let step = 180.0 / sino_rows as f32;
        let mut image = Array2::<f32>::zeros((dim, dim));
        for (i, row) in input.rows().into_iter().enumerate() {
            let smeared = rotate_about_center(stretch(row).view(), step * i as f32, 0.0);
            image += &smeared;
        }

        self.logger.record(&format!(
            "accumulated {} angles into {}x{} image, total {:.4}",
            sino_rows,
            dim,
            dim,
            StatsHelper::total(image.iter().copied())
        ));
        Ok(image)
    }

    fn cleanup(&mut self) {}
}
