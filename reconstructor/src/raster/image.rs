use anyhow::Context;
use image::{ImageBuffer, Luma};
use ndarray::Array2;
use std::path::Path;
use tomocore::math::StatsHelper;

type Gray16Image = ImageBuffer<Luma<u16>, Vec<u16>>;

/// Loads a grayscale image as a square f32 array.
///
/// Decodes to 16-bit luma and flips vertically so row 0 is the bottom of the
/// picture, the orientation the rest of the pipeline assumes.
pub fn load_image<P: AsRef<Path>>(path: P) -> anyhow::Result<Array2<f32>> {
    let path_ref = path.as_ref();
    let decoded = image::open(path_ref)
        .with_context(|| format!("loading image {}", path_ref.display()))?
        .to_luma16();
    let (width, height) = decoded.dimensions();
    if width != height {
        anyhow::bail!(
            "image {} is {}x{}, the pipeline requires a square input",
            path_ref.display(),
            width,
            height
        );
    }

    let dim = height as usize;
    let data = Array2::from_shape_fn((dim, dim), |(y, x)| {
        decoded.get_pixel(x as u32, (dim - 1 - y) as u32).0[0] as f32
    });
    Ok(data)
}

/// Saves a u16 array as a 16-bit grayscale PNG, flipping back to top-down
/// row order.
pub fn save_image<P: AsRef<Path>>(path: P, data: &Array2<u16>) -> anyhow::Result<()> {
    let path_ref = path.as_ref();
    let (rows, cols) = data.dim();
    let mut out = Gray16Image::new(cols as u32, rows as u32);
    for ((y, x), &value) in data.indexed_iter() {
        out.put_pixel(x as u32, (rows - 1 - y) as u32, Luma([value]));
    }
    out.save(path_ref)
        .with_context(|| format!("saving image {}", path_ref.display()))
}

/// Linear min/max rescale to the full 16-bit range.
///
/// A constant or all-NaN array is cast through unchanged rather than divided
/// by a zero range; non-finite samples become zero.
pub fn normalize_to_u16(data: &Array2<f32>) -> Array2<u16> {
    match StatsHelper::min_max(data.iter().copied()) {
        Some((min, max)) if max > min => data.mapv(|v| {
            let scaled = 65535.0 * (v - min) / (max - min);
            if scaled.is_finite() {
                scaled.clamp(0.0, 65535.0) as u16
            } else {
                0
            }
        }),
        _ => data.mapv(|v| {
            if v.is_finite() {
                v.clamp(0.0, 65535.0) as u16
            } else {
                0
            }
        }),
    }
}

/// Stretches sample values so the brightest pixel hits the top of the
/// 16-bit range before projection.
pub fn rescale_to_peak(data: &Array2<f32>) -> Array2<f32> {
    match StatsHelper::min_max(data.iter().copied()) {
        Some((_, max)) if max > 0.0 => data.mapv(|v| v * (65536.0 / max)),
        _ => data.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use tempfile::tempdir;

    #[test]
    fn normalize_rescales_to_full_range() {
        let data = array![[0.0, 5.0], [10.0, 2.5]];
        let out = normalize_to_u16(&data);
        assert_eq!(out[[0, 0]], 0);
        assert_eq!(out[[1, 0]], 65535);
        assert_eq!(out[[0, 1]], 32767);
    }

    #[test]
    fn normalize_passes_constant_arrays_through() {
        let data = Array2::<f32>::from_elem((2, 2), 300.0);
        let out = normalize_to_u16(&data);
        assert!(out.iter().all(|&v| v == 300));
    }

    #[test]
    fn normalize_zeroes_non_finite_samples() {
        let data = array![[f32::NAN, f32::NAN]];
        let out = normalize_to_u16(&data);
        assert!(out.iter().all(|&v| v == 0));
    }

    #[test]
    fn rescale_to_peak_hits_the_top_of_the_range() {
        let data = array![[1.0, 2.0], [4.0, 0.0]];
        let out = rescale_to_peak(&data);
        assert_eq!(out[[1, 0]], 65536.0);
        assert_eq!(out[[0, 0]], 16384.0);
    }

    #[test]
    fn save_then_load_round_trips_pixel_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roundtrip.png");
        let data = array![[0u16, 100], [200, 65535]];

        save_image(&path, &data).unwrap();
        let loaded = load_image(&path).unwrap();

        assert_eq!(loaded.dim(), (2, 2));
        for ((y, x), &value) in data.indexed_iter() {
            assert_eq!(loaded[[y, x]], value as f32);
        }
    }

    #[test]
    fn load_rejects_non_square_images() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wide.png");
        let wide = Gray16Image::new(3, 2);
        wide.save(&path).unwrap();
        assert!(load_image(&path).is_err());
    }
}
