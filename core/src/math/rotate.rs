use ndarray::{Array2, ArrayView2};

/// Rotates a 2D array about its center by `angle_deg` degrees without
/// changing its shape.
///
/// The center is `((h-1)/2, (w-1)/2)` in floating-point index coordinates.
/// Each destination sample is mapped back into the source with the inverse
/// rotation and read with bilinear interpolation; source coordinates that
/// fall outside the array take `fill`. Positive angles turn the content
/// counter-clockwise when row 0 is drawn at the bottom, the orientation the
/// raster loader produces.
pub fn rotate_about_center(src: ArrayView2<'_, f32>, angle_deg: f32, fill: f32) -> Array2<f32> {
    let (height, width) = src.dim();
    let mut out = Array2::from_elem((height, width), fill);
    if height == 0 || width == 0 {
        return out;
    }

    let (sin_a, cos_a) = angle_deg.to_radians().sin_cos();
    let cx = (width as f32 - 1.0) * 0.5;
    let cy = (height as f32 - 1.0) * 0.5;
    let max_x = width as f32 - 1.0;
    let max_y = height as f32 - 1.0;
    let epsilon = 1e-6;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let src_x = cos_a * dx + sin_a * dy + cx;
            let src_y = -sin_a * dx + cos_a * dy + cy;

            if !src_x.is_finite()
                || !src_y.is_finite()
                || src_x < -epsilon
                || src_y < -epsilon
                || src_x > max_x + epsilon
                || src_y > max_y + epsilon
            {
                continue;
            }

            let src_x = src_x.clamp(0.0, max_x);
            let src_y = src_y.clamp(0.0, max_y);
            let x0 = src_x.floor() as usize;
            let y0 = src_y.floor() as usize;
            let x1 = (x0 + 1).min(width - 1);
            let y1 = (y0 + 1).min(height - 1);
            let fx = src_x - x0 as f32;
            let fy = src_y - y0 as f32;

            let a = src[[y0, x0]];
            let b = src[[y0, x1]];
            let c = src[[y1, x0]];
            let d = src[[y1, x1]];

            out[[y, x]] = a * (1.0 - fx) * (1.0 - fy)
                + b * fx * (1.0 - fy)
                + c * (1.0 - fx) * fy
                + d * fx * fy;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    #[test]
    fn zero_angle_is_identity() {
        let src = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        let out = rotate_about_center(src.view(), 0.0, 0.0);
        for (expected, actual) in src.iter().zip(out.iter()) {
            assert!((expected - actual).abs() < 1e-6);
        }
    }

    #[test]
    fn quarter_turn_moves_point_around_center() {
        let mut src = Array2::<f32>::zeros((5, 5));
        src[[2, 3]] = 1.0;
        let turned = rotate_about_center(src.view(), 90.0, 0.0);
        assert!((turned[[3, 2]] - 1.0).abs() < 1e-4);
        assert!(turned[[2, 3]].abs() < 1e-4);
        let back = rotate_about_center(turned.view(), -90.0, 0.0);
        assert!((back[[2, 3]] - 1.0).abs() < 1e-4);
    }

    #[test]
    fn out_of_bounds_samples_take_fill() {
        let src = Array2::<f32>::ones((4, 4));
        let out = rotate_about_center(src.view(), 45.0, 0.0);
        assert_eq!(out.dim(), (4, 4));
        assert_eq!(out[[0, 0]], 0.0);
        assert_eq!(out[[3, 3]], 0.0);
    }

    #[test]
    fn arbitrary_angle_preserves_shape() {
        let src = Array2::<f32>::ones((7, 7));
        let out = rotate_about_center(src.view(), 33.7, 0.0);
        assert_eq!(out.dim(), (7, 7));
        assert!((out[[3, 3]] - 1.0).abs() < 1e-4);
    }
}
