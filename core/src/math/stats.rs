/// Reductions shared by stage telemetry and raster normalization.
pub struct StatsHelper;

impl StatsHelper {
    /// Minimum and maximum over the non-NaN samples, or `None` if there are
    /// none.
    pub fn min_max<I>(samples: I) -> Option<(f32, f32)>
    where
        I: IntoIterator<Item = f32>,
    {
        let mut lo = f32::INFINITY;
        let mut hi = f32::NEG_INFINITY;
        for value in samples {
            if value.is_nan() {
                continue;
            }
            if value < lo {
                lo = value;
            }
            if value > hi {
                hi = value;
            }
        }
        if lo > hi {
            None
        } else {
            Some((lo, hi))
        }
    }

    pub fn total<I>(samples: I) -> f32
    where
        I: IntoIterator<Item = f32>,
    {
        samples.into_iter().sum()
    }
}
