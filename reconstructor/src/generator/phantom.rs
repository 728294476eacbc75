use anyhow::Context;
use ndarray::Array2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Configuration for the synthetic phantom used when no input image is
/// given.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhantomConfig {
    pub dim: usize,
    /// Disk radius as a fraction of the half-width.
    pub disk_radius: f32,
    pub disk_value: f32,
    /// Number of bright point impulses scattered across the field.
    pub impulses: usize,
    pub impulse_value: f32,
    pub noise: f32,
    pub seed: u64,
}

impl Default for PhantomConfig {
    fn default() -> Self {
        Self {
            dim: 128,
            disk_radius: 0.7,
            disk_value: 2000.0,
            impulses: 3,
            impulse_value: 40_000.0,
            noise: 0.0,
            seed: 0,
        }
    }
}

/// Builds a centered disk with optional impulses and seeded noise.
pub fn build_phantom(config: &PhantomConfig) -> anyhow::Result<Array2<f32>> {
    let dim = config.dim;
    dim.checked_mul(dim)
        .context("overflow computing phantom sample count")?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let center = (dim as f32 - 1.0) * 0.5;
    let radius = config.disk_radius * center;

    let mut phantom = Array2::from_shape_fn((dim, dim), |(y, x)| {
        let dx = x as f32 - center;
        let dy = y as f32 - center;
        if (dx * dx + dy * dy).sqrt() <= radius {
            config.disk_value
        } else {
            0.0
        }
    });

    if config.noise > 0.0 {
        for value in phantom.iter_mut() {
            *value += rng.gen_range(-config.noise..config.noise);
        }
    }

    if dim > 0 {
        for _ in 0..config.impulses {
            let y = rng.gen_range(0..dim);
            let x = rng.gen_range(0..dim);
            phantom[[y, x]] += config.impulse_value;
        }
    }

    Ok(phantom)
}
