use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Shared configuration for the reconstruction stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconConfig {
    /// Number of projection angles, evenly spaced over [0°, 180°).
    pub sino_rows: usize,
}

/// Common error type for stage execution.
#[derive(thiserror::Error, Debug)]
pub enum ReconError {
    #[error("shape error: {0}")]
    Shape(String),
    #[error("configuration error: {0}")]
    Config(String),
}

pub type ReconResult<T> = Result<T, ReconError>;

/// Trait describing the reconstruction pipeline stages.
///
/// Every stage maps one real-valued 2D array to a newly allocated array and
/// never mutates its input. Execution is deterministic; any failure is an
/// input or configuration error surfaced immediately to the caller.
pub trait ReconStage {
    fn initialize(&mut self, config: &ReconConfig) -> ReconResult<()>;
    fn execute(&mut self, input: &Array2<f32>) -> ReconResult<Array2<f32>>;
    fn cleanup(&mut self);
}
