pub mod fft;
pub mod freq;
pub mod rotate;
pub mod stats;

pub use fft::FftHelper;
pub use freq::freq_bins;
pub use rotate::rotate_about_center;
pub use stats::StatsHelper;
