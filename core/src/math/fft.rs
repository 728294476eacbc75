use num_complex::Complex32;
use rustfft::{num_traits::Zero, Fft, FftPlanner};
use std::sync::Arc;

/// Matched forward/inverse FFT plans for one transform length.
///
/// Wraps the `rustfft` planner so both directions share a scratch buffer and
/// the inverse applies the `1/n` normalization that `rustfft` leaves out.
pub struct FftHelper {
    len: usize,
    fwd: Arc<dyn Fft<f32>>,
    inv: Arc<dyn Fft<f32>>,
    scratch: Vec<Complex32>,
}

impl FftHelper {
    /// Plans both directions for signals of length `len` (must be nonzero).
    pub fn new(len: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fwd = planner.plan_fft_forward(len);
        let inv = planner.plan_fft_inverse(len);
        let scratch_len = fwd
            .get_inplace_scratch_len()
            .max(inv.get_inplace_scratch_len());
        let scratch = vec![Complex32::zero(); scratch_len];
        Self {
            len,
            fwd,
            inv,
            scratch,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Forward transform of a real signal, zero-padded to the planned length.
    pub fn forward(&mut self, input: &[f32]) -> Vec<Complex32> {
        let mut buffer: Vec<Complex32> = input
            .iter()
            .map(|&value| Complex32::new(value, 0.0))
            .collect();
        buffer.resize(self.len, Complex32::zero());
        self.fwd.process_with_scratch(&mut buffer, &mut self.scratch);
        buffer
    }

    /// Inverse transform, normalized by `1/n`.
    pub fn inverse(&mut self, mut buffer: Vec<Complex32>) -> Vec<Complex32> {
        buffer.resize(self.len, Complex32::zero());
        self.inv.process_with_scratch(&mut buffer, &mut self.scratch);
        let scale = 1.0 / self.len as f32;
        for value in buffer.iter_mut() {
            *value *= scale;
        }
        buffer
    }
}
