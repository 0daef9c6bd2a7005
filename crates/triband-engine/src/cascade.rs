//! Fixed-capacity cascade of cut-filter sections.

use triband_core::{Biquad, CASCADE_SECTIONS, Coefficients};

use crate::params::Slope;

/// Four second-order sections in series with a contiguous active prefix.
///
/// The designer always supplies coefficients for the full 48 dB/oct cascade;
/// [`configure`](Self::configure) wires them into all four slots and then
/// marks the first `slope.active_sections()` of them active. Bypassed slots
/// pass audio through untouched and their delay state does not advance, so
/// re-activating a slot resumes from the state it last held.
#[derive(Debug, Clone)]
pub struct CutCascade {
    sections: [Biquad; CASCADE_SECTIONS],
    active: usize,
}

impl CutCascade {
    /// Create a cascade with passthrough sections and one active slot
    /// (the 12 dB/oct minimum).
    pub fn new() -> Self {
        Self {
            sections: core::array::from_fn(|_| Biquad::new()),
            active: Slope::Db12.active_sections(),
        }
    }

    /// Apply a designed coefficient set and select the slope.
    ///
    /// All four sections receive coefficients (delay state preserved); the
    /// active count is an explicit prefix length derived from the slope
    /// ordinal, never an accumulation, so a reconfigure can only ever land
    /// on one of the four legal activation patterns.
    pub fn configure(&mut self, coeffs: &[Coefficients; CASCADE_SECTIONS], slope: Slope) {
        for (section, &c) in self.sections.iter_mut().zip(coeffs.iter()) {
            section.set_coefficients(c);
        }
        self.active = slope.active_sections();
    }

    /// Number of non-bypassed sections (1-4).
    #[inline]
    pub fn active_sections(&self) -> usize {
        self.active
    }

    /// Run one sample through the active prefix in index order.
    #[inline]
    pub fn process_sample(&mut self, input: f32) -> f32 {
        let mut x = input;
        for section in &mut self.sections[..self.active] {
            x = section.process(x);
        }
        x
    }

    /// Linear magnitude of the cascade response at `freq_hz`.
    ///
    /// Product over active sections only; bypassed slots contribute unity.
    pub fn magnitude_at(&self, freq_hz: f32, sample_rate: f32) -> f32 {
        self.sections[..self.active]
            .iter()
            .map(|s| s.magnitude_at(freq_hz, sample_rate))
            .product()
    }

    /// Coefficients of one section slot (active or not).
    pub fn section_coefficients(&self, index: usize) -> Coefficients {
        self.sections[index].coefficients()
    }

    /// Clear delay state in every slot, bypassed ones included.
    pub fn reset(&mut self) {
        for section in &mut self.sections {
            section.clear();
        }
    }
}

impl Default for CutCascade {
    fn default() -> Self {
        Self::new()
    }
}
