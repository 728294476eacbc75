pub mod backproject;
pub mod projector;
pub mod ramp_filter;

pub use backproject::BackprojectStage;
pub use projector::ProjectorStage;
pub use ramp_filter::RampFilterStage;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::{ReconConfig, ReconStage};
    use ndarray::Array2;

    fn run_projector(image: &Array2<f32>, sino_rows: usize) -> Array2<f32> {
        let mut projector = ProjectorStage::new();
        projector
            .initialize(&ReconConfig { sino_rows })
            .expect("valid config");
        let sino = projector.execute(image).expect("projection succeeds");
        projector.cleanup();
        sino
    }

    fn run_backprojector(sino: &Array2<f32>) -> Array2<f32> {
        let mut backprojector = BackprojectStage::new();
        backprojector
            .initialize(&ReconConfig { sino_rows: sino.dim().0 })
            .expect("valid config");
        let image = backprojector.execute(sino).expect("backprojection succeeds");
        backprojector.cleanup();
        image
    }

    #[test]
    fn pipeline_preserves_shapes_end_to_end() {
        let image = Array2::<f32>::zeros((6, 6));
        let sino = run_projector(&image, 9);
        assert_eq!(sino.dim(), (9, 6));

        let mut filter = RampFilterStage::new();
        let filtered = filter.execute(&sino).expect("filtering succeeds");
        assert_eq!(filtered.dim(), (9, 6));

        let recon = run_backprojector(&filtered);
        assert_eq!(recon.dim(), (6, 6));
    }

    // The projector rotates by -i*180/r before summing and the backprojector
    // rotates the stretched row by +i*180/r. The smeared ridges must all pass
    // through the original point; a sign mismatch would mirror the peak to
    // (7, 4) instead.
    #[test]
    fn point_source_backprojects_to_its_own_location() {
        let mut image = Array2::<f32>::zeros((15, 15));
        image[[7, 10]] = 100.0;

        let sino = run_projector(&image, 4);
        let recon = run_backprojector(&sino);

        let mut peak = (0, 0);
        let mut peak_value = f32::NEG_INFINITY;
        for ((y, x), &value) in recon.indexed_iter() {
            if value > peak_value {
                peak_value = value;
                peak = (y, x);
            }
        }
        assert_eq!(peak, (7, 10));
        assert!(peak_value > 0.0);
    }

    // With two angles (0 and 90 degrees) every rotation in the chain is a
    // quarter turn, so no mass is lost at the array boundary and the
    // accumulated energy is exactly rows * dim * pixel value.
    #[test]
    fn backprojection_energy_matches_reference_at_quarter_turns() {
        let mut image = Array2::<f32>::zeros((4, 4));
        image[[2, 2]] = 5.0;

        let sino = run_projector(&image, 2);
        let recon = run_backprojector(&sino);

        let energy: f32 = recon.iter().sum();
        let expected = 2.0 * 4.0 * 5.0;
        assert!(
            (energy - expected).abs() < 1e-2,
            "energy {energy} != {expected}"
        );
    }

    #[test]
    fn blurred_star_peaks_near_center_pixel() {
        let mut image = Array2::<f32>::zeros((4, 4));
        image[[2, 2]] = 5.0;

        let sino = run_projector(&image, 8);
        let recon = run_backprojector(&sino);

        let mut peak = (0, 0);
        let mut peak_value = f32::NEG_INFINITY;
        for ((y, x), &value) in recon.indexed_iter() {
            if value > peak_value {
                peak_value = value;
                peak = (y, x);
            }
        }
        assert!(peak.0 >= 1 && peak.0 <= 2, "peak row {}", peak.0);
        assert!(peak.1 >= 1 && peak.1 <= 2, "peak col {}", peak.1);
    }

    #[test]
    fn filtered_constant_sinogram_reconstructs_to_zero() {
        let sino = Array2::<f32>::from_elem((6, 8), 3.0);
        let mut filter = RampFilterStage::new();
        let filtered = filter.execute(&sino).expect("filtering succeeds");
        let recon = run_backprojector(&filtered);
        for &value in recon.iter() {
            assert!(value.abs() < 1e-2);
        }
    }
}
