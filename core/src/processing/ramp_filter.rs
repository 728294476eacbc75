use ndarray::Array2;

use crate::math::fft::FftHelper;
use crate::math::freq::freq_bins;
use crate::prelude::{ReconConfig, ReconResult, ReconStage};
use crate::telemetry::log::LogManager;

/// Ram-Lak filtering stage.
///
/// Each sinogram row is transformed to the Fourier domain, weighted by the
/// absolute normalized bin frequency (zero at DC, rising linearly toward
/// Nyquist and back down through the negative-frequency wrap), and brought
/// back with the inverse transform; only the real part is kept. The |f|
/// weighting cancels the 1/r blur that plain backprojection accumulates.
///
/// FFT plans and the weight array depend only on the row length and are
/// cached between rows and between calls.
pub struct RampFilterStage {
    plan: Option<RowPlan>,
    logger: LogManager,
}

struct RowPlan {
    len: usize,
    fft: FftHelper,
    weights: Vec<f32>,
}

impl RowPlan {
    fn new(len: usize) -> Self {
        let weights = freq_bins(len).iter().map(|f| f.abs()).collect();
        Self {
            len,
            fft: FftHelper::new(len),
            weights,
        }
    }
}

impl RampFilterStage {
    pub fn new() -> Self {
        Self {
            plan: None,
            logger: LogManager::for_stage("ramp-filter"),
        }
    }

    fn plan_for(&mut self, len: usize) -> &mut RowPlan {
        if self.plan.as_ref().is_some_and(|plan| plan.len != len) {
            self.plan = None;
        }
        self.plan.get_or_insert_with(|| RowPlan::new(len))
    }
}

impl Default for RampFilterStage {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconStage for RampFilterStage {
    fn initialize(&mut self, _config: &ReconConfig) -> ReconResult<()> {
        Ok(())
    }

    fn execute(&mut self, input: &Array2<f32>) -> ReconResult<Array2<f32>> {
        let (rows, cols) = input.dim();
        let mut filtered = Array2::<f32>::zeros((rows, cols));
        if rows == 0 || cols == 0 {
            return Ok(filtered);
        }

        let plan = self.plan_for(cols);
        for (i, row) in input.rows().into_iter().enumerate() {
            let mut spectrum = plan.fft.forward(&row.to_vec());
            for (bin, &weight) in spectrum.iter_mut().zip(&plan.weights) {
                *bin *= weight;
            }
            let spatial = plan.fft.inverse(spectrum);
            for (x, value) in spatial.iter().enumerate() {
                filtered[[i, x]] = value.re;
            }
        }

        self.logger
            .record(&format!("filtered {rows} rows of length {cols}"));
        Ok(filtered)
    }

    fn cleanup(&mut self) {
        self.plan = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(input: &Array2<f32>) -> Array2<f32> {
        RampFilterStage::new().execute(input).unwrap()
    }

    #[test]
    fn shape_is_preserved() {
        let sino = Array2::<f32>::zeros((3, 7));
        assert_eq!(filter(&sino).dim(), (3, 7));
    }

    #[test]
    fn zero_sinogram_filters_to_zero() {
        let sino = Array2::<f32>::zeros((2, 6));
        assert!(filter(&sino).iter().all(|&v| v.abs() < 1e-6));
    }

    #[test]
    fn constant_rows_are_suppressed() {
        let sino = Array2::<f32>::from_elem((2, 8), 5.0);
        for &value in filter(&sino).iter() {
            assert!(value.abs() < 1e-4, "residual {value}");
        }
    }

    #[test]
    fn length_one_rows_filter_to_zero() {
        let sino = Array2::<f32>::from_shape_vec((2, 1), vec![3.0, -4.0]).unwrap();
        let out = filter(&sino);
        assert_eq!(out.dim(), (2, 1));
        assert!(out.iter().all(|&v| v.abs() < 1e-6));
    }

    #[test]
    fn filtering_is_linear() {
        let s1 = Array2::from_shape_vec((1, 4), vec![1.0, 2.0, 0.0, -1.0]).unwrap();
        let s2 = Array2::from_shape_vec((1, 4), vec![0.5, -0.5, 3.0, 2.0]).unwrap();
        let combined = 2.0 * &s1 + 3.0 * &s2;

        let direct = filter(&combined);
        let recombined = 2.0 * &filter(&s1) + 3.0 * &filter(&s2);
        for (a, b) in direct.iter().zip(recombined.iter()) {
            assert!((a - b).abs() < 1e-3);
        }
    }

    #[test]
    fn filtering_twice_differs_from_filtering_once() {
        let sino = Array2::from_shape_vec((1, 4), vec![1.0, 0.0, 0.0, 0.0]).unwrap();
        let once = filter(&sino);
        let twice = filter(&once);
        let max_diff = once
            .iter()
            .zip(twice.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0f32, f32::max);
        assert!(max_diff > 1e-3, "filter looked idempotent, diff {max_diff}");
    }

    #[test]
    fn plan_is_rebuilt_when_row_length_changes() {
        let mut stage = RampFilterStage::new();
        let narrow = Array2::<f32>::zeros((1, 4));
        let wide = Array2::<f32>::zeros((1, 9));
        assert_eq!(stage.execute(&narrow).unwrap().dim(), (1, 4));
        assert_eq!(stage.execute(&wide).unwrap().dim(), (1, 9));
        stage.cleanup();
    }
}
