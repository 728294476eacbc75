//! Core numeric pipeline for parallel-beam CT reconstruction.
//!
//! The modules implement the classical filtered-backprojection chain:
//! forward projection of a square image into a sinogram, Ram-Lak filtering
//! of the sinogram in the Fourier domain, and backprojection, built on a
//! shape-preserving rotation primitive and a planned FFT.

pub mod interface;
pub mod math;
pub mod prelude;
pub mod processing;
pub mod telemetry;

pub use prelude::{ReconConfig, ReconError, ReconResult, ReconStage};
