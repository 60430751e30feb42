//! Level measurement and decibel conversions.

/// Root-mean-square level of `samples`, `sqrt(mean(x^2))`.
///
/// Squares are summed in `f64`. Returns `0.0` for an empty slice.
///
/// # Examples
///
/// ```
/// use noisemix::level::root_mean_square;
///
/// assert_eq!(root_mean_square(&[3.0, -3.0]), 3.0);
/// assert_eq!(root_mean_square(&[]), 0.0);
/// ```
pub fn root_mean_square(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f64 = samples.iter().map(|&s| f64::from(s) * f64::from(s)).sum();
    (sum / samples.len() as f64).sqrt() as f32
}

/// Converts a level in dB to an amplitude ratio, `10^(db/20)`.
pub fn db_to_amplitude(db: f32) -> f32 {
    10f64.powf(f64::from(db) / 20.0) as f32
}

/// Gain that brings noise of RMS `noise_rms` to `snr_db` below a signal of
/// RMS `signal_rms`.
///
/// `noise_rms` must be positive.
pub fn snr_gain(signal_rms: f32, noise_rms: f32, snr_db: f32) -> f32 {
    signal_rms / (noise_rms * db_to_amplitude(snr_db))
}
