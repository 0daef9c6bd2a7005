//! Second-order IIR section.
//!
//! [`Biquad`] implements the Direct Form I structure:
//!
//! ```text
//! y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2]
//!                - a1*y[n-1] - a2*y[n-2]
//! ```
//!
//! Coefficients live in a separate value type, [`Coefficients`], so one
//! designed set can be pushed into several sections (one per channel) and
//! compared for equality in tests. Replacing a section's coefficients keeps
//! its delay state, which is what makes live parameter changes click-free.

use libm::{cos, sin, sqrt};

/// Normalized biquad coefficients.
///
/// `a0` is divided out at construction, so the stored set is
/// `{b0, b1, b2, a1, a2}` with an implicit `a0 = 1`. The type is `Copy` and
/// `PartialEq`: two sets designed from the same parameters compare
/// bit-identical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Feedforward coefficient on x[n].
    pub b0: f32,
    /// Feedforward coefficient on x[n-1].
    pub b1: f32,
    /// Feedforward coefficient on x[n-2].
    pub b2: f32,
    /// Feedback coefficient on y[n-1] (normalized, `a0` implied 1.0).
    pub a1: f32,
    /// Feedback coefficient on y[n-2].
    pub a2: f32,
}

impl Coefficients {
    /// Unity passthrough: `y[n] = x[n]`.
    pub const IDENTITY: Self = Self {
        b0: 1.0,
        b1: 0.0,
        b2: 0.0,
        a1: 0.0,
        a2: 0.0,
    };

    /// Build a normalized set from a raw `{b0,b1,b2,a0,a1,a2}` tuple.
    #[inline]
    pub fn normalized(b0: f32, b1: f32, b2: f32, a0: f32, a1: f32, a2: f32) -> Self {
        let a0_inv = 1.0 / a0;
        Self {
            b0: b0 * a0_inv,
            b1: b1 * a0_inv,
            b2: b2 * a0_inv,
            a1: a1 * a0_inv,
            a2: a2 * a0_inv,
        }
    }

    /// Linear magnitude of the section's frequency response at `freq_hz`.
    ///
    /// Pure query: evaluates `|H(e^{jw})|` from the coefficients alone, with
    /// no effect on any delay state. Evaluated in f64 so response-curve
    /// consumers get dB-accurate values from f32 coefficients.
    pub fn magnitude_at(&self, freq_hz: f32, sample_rate: f32) -> f32 {
        let omega = 2.0 * core::f64::consts::PI * f64::from(freq_hz) / f64::from(sample_rate);
        let (c1, s1) = (cos(omega), sin(omega));
        let (c2, s2) = (cos(2.0 * omega), sin(2.0 * omega));

        let (b0, b1, b2) = (f64::from(self.b0), f64::from(self.b1), f64::from(self.b2));
        let (a1, a2) = (f64::from(self.a1), f64::from(self.a2));

        let num_re = b0 + b1 * c1 + b2 * c2;
        let num_im = -(b1 * s1 + b2 * s2);
        let den_re = 1.0 + a1 * c1 + a2 * c2;
        let den_im = -(a1 * s1 + a2 * s2);

        let num = num_re * num_re + num_im * num_im;
        let den = den_re * den_re + den_im * den_im;
        sqrt(num / den) as f32
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A single second-order section: one coefficient set plus delay state.
#[derive(Debug, Clone)]
pub struct Biquad {
    coeffs: Coefficients,

    /// Input delay line: x[n-1], x[n-2]
    x1: f32,
    x2: f32,

    /// Output delay line: y[n-1], y[n-2]
    y1: f32,
    y2: f32,
}

impl Biquad {
    /// Creates a new section with passthrough coefficients and zeroed state.
    pub fn new() -> Self {
        Self {
            coeffs: Coefficients::IDENTITY,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    /// Replace the active coefficient set.
    ///
    /// Delay state is deliberately preserved across the swap so a parameter
    /// change mid-stream does not produce a click. Callers that want a cold
    /// start pair this with [`Biquad::clear`].
    #[inline]
    pub fn set_coefficients(&mut self, coeffs: Coefficients) {
        self.coeffs = coeffs;
    }

    /// The currently active coefficient set.
    #[inline]
    pub fn coefficients(&self) -> Coefficients {
        self.coeffs
    }

    /// Processes a single sample through the section.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let c = &self.coeffs;
        let output =
            c.b0 * input + c.b1 * self.x1 + c.b2 * self.x2 - c.a1 * self.y1 - c.a2 * self.y2;

        self.x2 = self.x1;
        self.x1 = input;
        self.y2 = self.y1;
        self.y1 = output;

        output
    }

    /// Linear magnitude of this section's response at `freq_hz`.
    ///
    /// Stateless; see [`Coefficients::magnitude_at`].
    #[inline]
    pub fn magnitude_at(&self, freq_hz: f32, sample_rate: f32) -> f32 {
        self.coeffs.magnitude_at(freq_hz, sample_rate)
    }

    /// Clears the delay lines without touching coefficients.
    pub fn clear(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }
}

impl Default for Biquad {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design;

    #[test]
    fn passthrough_by_default() {
        let mut biquad = Biquad::new();
        for i in 0..10 {
            let input = i as f32 * 0.1;
            let output = biquad.process(input);
            assert!((output - input).abs() < 0.0001);
        }
    }

    #[test]
    fn identity_magnitude_is_unity() {
        let c = Coefficients::IDENTITY;
        for freq in [20.0, 100.0, 1000.0, 10000.0, 20000.0] {
            let mag = c.magnitude_at(freq, 48000.0);
            assert!((mag - 1.0).abs() < 1e-6, "identity at {freq} Hz: {mag}");
        }
    }

    #[test]
    fn clear_zeroes_state() {
        let mut biquad = Biquad::new();
        biquad.set_coefficients(design::peak(1000.0, 1.0, 6.0, 48000.0).unwrap());
        for _ in 0..10 {
            biquad.process(1.0);
        }

        biquad.clear();

        assert_eq!(biquad.x1, 0.0);
        assert_eq!(biquad.x2, 0.0);
        assert_eq!(biquad.y1, 0.0);
        assert_eq!(biquad.y2, 0.0);
    }

    #[test]
    fn coefficient_swap_preserves_state() {
        let boost = design::peak(1000.0, 1.0, 12.0, 48000.0).unwrap();
        let cut = design::peak(1000.0, 1.0, -12.0, 48000.0).unwrap();

        let mut swapped = Biquad::new();
        swapped.set_coefficients(boost);
        for i in 0..64 {
            swapped.process(libm::sinf(i as f32 * 0.37));
        }
        swapped.set_coefficients(cut);

        // A fresh section with the same coefficients but cleared state
        // produces a different first sample: proof the swap kept history.
        let mut fresh = Biquad::new();
        fresh.set_coefficients(cut);

        let next = 0.5;
        assert_ne!(swapped.process(next), fresh.process(next));
    }

    #[test]
    fn magnitude_matches_measured_gain() {
        // Drive a peaking filter with a sine at its center frequency and
        // compare steady-state amplitude against the pure query.
        let sample_rate = 48000.0;
        let coeffs = design::peak(1000.0, 1.0, 6.0, sample_rate).unwrap();
        let mut biquad = Biquad::new();
        biquad.set_coefficients(coeffs);

        let mut peak_out = 0.0f32;
        for i in 0..48000 {
            let t = i as f32 / sample_rate;
            let out = biquad.process(libm::sinf(2.0 * core::f32::consts::PI * 1000.0 * t));
            if i > 24000 {
                peak_out = peak_out.max(out.abs());
            }
        }

        let expected = coeffs.magnitude_at(1000.0, sample_rate);
        assert!(
            (peak_out - expected).abs() < 0.02,
            "measured {peak_out}, query said {expected}"
        );
    }
}
