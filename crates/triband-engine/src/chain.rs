//! Per-channel signal path: low cut → peak → high cut.

use triband_core::{Biquad, CASCADE_SECTIONS, Coefficients};

use crate::cascade::CutCascade;
use crate::params::Slope;

/// The full mono signal path.
///
/// Stage order is fixed: low-cut cascade, then the peak band, then the
/// high-cut cascade. All three stages are always present; "off" positions
/// are expressed through the parameters themselves (cut frequencies at the
/// band extremes, peak gain at 0 dB).
#[derive(Debug, Clone, Default)]
pub struct MonoChain {
    low_cut: CutCascade,
    peak: Biquad,
    high_cut: CutCascade,
}

impl MonoChain {
    /// Create a chain with passthrough stages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a designed peak coefficient set. Delay state is preserved.
    pub fn set_peak(&mut self, coeffs: Coefficients) {
        self.peak.set_coefficients(coeffs);
    }

    /// Configure the low-cut cascade.
    pub fn set_low_cut(&mut self, coeffs: &[Coefficients; CASCADE_SECTIONS], slope: Slope) {
        self.low_cut.configure(coeffs, slope);
    }

    /// Configure the high-cut cascade.
    pub fn set_high_cut(&mut self, coeffs: &[Coefficients; CASCADE_SECTIONS], slope: Slope) {
        self.high_cut.configure(coeffs, slope);
    }

    /// Run one sample through all three stages in order.
    #[inline]
    pub fn process_sample(&mut self, input: f32) -> f32 {
        let after_low = self.low_cut.process_sample(input);
        let after_peak = self.peak.process(after_low);
        self.high_cut.process_sample(after_peak)
    }

    /// Process a buffer in place, in sample order.
    pub fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process_sample(*sample);
        }
    }

    /// Linear magnitude of the whole chain's response at `freq_hz`.
    ///
    /// Product of the peak section's response and every active cut
    /// section's response; bypassed cut slots contribute unity. Pure query,
    /// no effect on delay state.
    pub fn magnitude_at(&self, freq_hz: f32, sample_rate: f32) -> f32 {
        self.low_cut.magnitude_at(freq_hz, sample_rate)
            * self.peak.magnitude_at(freq_hz, sample_rate)
            * self.high_cut.magnitude_at(freq_hz, sample_rate)
    }

    /// The peak stage's current coefficients.
    pub fn peak_coefficients(&self) -> Coefficients {
        self.peak.coefficients()
    }

    /// Borrow the low-cut cascade (response queries, coefficient reads).
    pub fn low_cut(&self) -> &CutCascade {
        &self.low_cut
    }

    /// Borrow the high-cut cascade (response queries, coefficient reads).
    pub fn high_cut(&self) -> &CutCascade {
        &self.high_cut
    }

    /// Clear delay state in every stage.
    pub fn reset(&mut self) {
        self.low_cut.reset();
        self.peak.clear();
        self.high_cut.reset();
    }
}
