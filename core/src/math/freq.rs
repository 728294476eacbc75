/// Normalized DFT bin frequencies for a length-`n` signal in standard
/// non-shifted order: DC first, ascending positive bins, then the
/// negative-frequency wrap.
///
/// The positive/DC half holds `⌈n/2⌉` entries `0..⌈n/2⌉-1`; the remaining
/// `⌊n/2⌋` entries run `-⌊n/2⌋..-1`. Every value is divided by `n`, so for
/// even `n` the most negative bin is `-1/2` and for odd `n` the halves split
/// at `±(n-1)/(2n)`. `n = 1` yields the single DC bin `[0.0]`.
pub fn freq_bins(n: usize) -> Vec<f32> {
    let mut bins = vec![0.0f32; n];
    if n == 0 {
        return bins;
    }
    let half = (n + 1) / 2;
    for (k, bin) in bins.iter_mut().enumerate().take(half) {
        *bin = k as f32 / n as f32;
    }
    for (offset, bin) in bins.iter_mut().skip(half).enumerate() {
        let k = offset as i64 - (n / 2) as i64;
        *bin = k as f32 / n as f32;
    }
    bins
}
