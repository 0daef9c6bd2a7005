//! Response-curve sampling for visualization collaborators.
//!
//! The displayable frequency axis is logarithmic over 20 Hz - 20 kHz; a
//! renderer asks for one magnitude per horizontal pixel and draws the
//! resulting dB trace. Everything here is a pure query on chain
//! coefficients — no delay state is touched, so it is safe to call from a
//! UI thread while audio runs.

use triband_core::linear_to_db;

use crate::chain::MonoChain;

/// Lowest displayed frequency in Hz.
pub const MIN_FREQ: f32 = 20.0;
/// Highest displayed frequency in Hz.
pub const MAX_FREQ: f32 = 20000.0;

/// Map a normalized position (0.0-1.0) onto the log-frequency axis.
///
/// `0.0` lands on [`MIN_FREQ`], `1.0` on [`MAX_FREQ`], with equal spacing
/// per octave in between.
#[inline]
pub fn map_to_log10(normalized: f32, min: f32, max: f32) -> f32 {
    let log_min = min.log10();
    let log_max = max.log10();
    10.0f32.powf(log_min + normalized * (log_max - log_min))
}

/// Sample a chain's magnitude response in dB across `width` points.
///
/// Point `i` sits at the log-axis position `i / (width - 1)`; a renderer
/// typically passes its pixel width. Returns an empty vector for
/// `width == 0`.
pub fn response_curve_db(chain: &MonoChain, width: usize, sample_rate: f32) -> Vec<f32> {
    if width == 0 {
        return Vec::new();
    }
    let denom = (width.max(2) - 1) as f32;
    (0..width)
        .map(|i| {
            let freq = map_to_log10(i as f32 / denom, MIN_FREQ, MAX_FREQ);
            linear_to_db(chain.magnitude_at(freq, sample_rate))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Slope;
    use triband_core::design;

    #[test]
    fn log_axis_endpoints() {
        assert!((map_to_log10(0.0, MIN_FREQ, MAX_FREQ) - 20.0).abs() < 0.01);
        assert!((map_to_log10(1.0, MIN_FREQ, MAX_FREQ) - 20000.0).abs() < 1.0);
        // Halfway on the log axis is the geometric mean, ~632 Hz.
        let mid = map_to_log10(0.5, MIN_FREQ, MAX_FREQ);
        assert!((mid - 632.45).abs() < 1.0, "midpoint {mid}");
    }

    #[test]
    fn flat_chain_renders_flat_curve() {
        let chain = MonoChain::new();
        let curve = response_curve_db(&chain, 256, 48000.0);
        assert_eq!(curve.len(), 256);
        assert!(curve.iter().all(|db| db.abs() < 0.001));
    }

    #[test]
    fn curve_tracks_configured_filters() {
        let sample_rate = 48000.0;
        let mut chain = MonoChain::new();
        chain.set_low_cut(&design::low_cut(100.0, sample_rate).unwrap(), Slope::Db48);
        chain.set_peak(design::peak(1000.0, 1.0, 6.0, sample_rate).unwrap());

        let curve = response_curve_db(&chain, 512, sample_rate);
        // First point (20 Hz) is deep in the cut; the curve rises toward
        // the peak band.
        assert!(curve[0] < -40.0, "20 Hz point: {}", curve[0]);
        let max = curve.iter().copied().fold(f32::MIN, f32::max);
        assert!((max - 6.0).abs() < 0.5, "peak of curve: {max}");
    }

    #[test]
    fn degenerate_widths() {
        let chain = MonoChain::new();
        assert!(response_curve_db(&chain, 0, 48000.0).is_empty());
        assert_eq!(response_curve_db(&chain, 1, 48000.0).len(), 1);
    }
}
