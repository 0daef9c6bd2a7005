//! Coefficient design for the equalizer stages.
//!
//! Pure functions from human-facing parameters (frequency, Q, gain) to
//! [`Coefficients`]. The peaking band uses the RBJ Audio EQ Cookbook formula;
//! the cut filters are Butterworth cascades built from cookbook
//! high-pass/low-pass sections at the Butterworth pole Qs.
//!
//! Validation here is defensive: parameter stores clamp to legal ranges
//! before values ever reach the designer, so an error from these functions
//! indicates a caller bug, not a user mistake.

use libm::{cosf, powf, sinf};
use thiserror::Error;

use crate::biquad::Coefficients;

/// Number of second-order sections in a cut cascade (48 dB/oct maximum).
pub const CASCADE_SECTIONS: usize = 4;

/// Rejected designer input.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DesignError {
    /// A parameter was NaN or infinite.
    #[error("non-finite {name} passed to filter design")]
    NonFinite {
        /// Which parameter was non-finite.
        name: &'static str,
    },
    /// Frequency outside the open interval (0, Nyquist).
    #[error("frequency {freq_hz} Hz outside (0, {nyquist} Hz)")]
    FrequencyOutOfRange {
        /// Requested frequency in Hz.
        freq_hz: f32,
        /// Nyquist limit (half the sample rate) in Hz.
        nyquist: f32,
    },
    /// Q factor must be strictly positive.
    #[error("non-positive Q {q}")]
    NonPositiveQ {
        /// Requested Q factor.
        q: f32,
    },
    /// Sample rate must be finite and strictly positive.
    #[error("invalid sample rate {sample_rate}")]
    InvalidSampleRate {
        /// Requested sample rate in Hz.
        sample_rate: f32,
    },
}

fn check_freq(freq_hz: f32, sample_rate: f32) -> Result<(), DesignError> {
    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        return Err(DesignError::InvalidSampleRate { sample_rate });
    }
    if !freq_hz.is_finite() {
        return Err(DesignError::NonFinite { name: "frequency" });
    }
    let nyquist = sample_rate * 0.5;
    if freq_hz <= 0.0 || freq_hz >= nyquist {
        return Err(DesignError::FrequencyOutOfRange { freq_hz, nyquist });
    }
    Ok(())
}

/// Design the parametric peak/notch band.
///
/// RBJ cookbook peaking EQ: `A = 10^(gain_db/40)`, bilinear-transform
/// derived. Positive gain boosts around `freq_hz`, negative gain cuts, and
/// 0 dB yields an exact unity response (`b == a`).
pub fn peak(
    freq_hz: f32,
    q: f32,
    gain_db: f32,
    sample_rate: f32,
) -> Result<Coefficients, DesignError> {
    check_freq(freq_hz, sample_rate)?;
    if !q.is_finite() {
        return Err(DesignError::NonFinite { name: "Q" });
    }
    if q <= 0.0 {
        return Err(DesignError::NonPositiveQ { q });
    }
    if !gain_db.is_finite() {
        return Err(DesignError::NonFinite { name: "gain" });
    }

    let a = powf(10.0, gain_db / 40.0); // sqrt of the linear gain
    let omega = 2.0 * core::f32::consts::PI * freq_hz / sample_rate;
    let cos_omega = cosf(omega);
    let alpha = sinf(omega) / (2.0 * q);

    Ok(Coefficients::normalized(
        1.0 + alpha * a,
        -2.0 * cos_omega,
        1.0 - alpha * a,
        1.0 + alpha / a,
        -2.0 * cos_omega,
        1.0 - alpha / a,
    ))
}

/// RBJ cookbook high-pass section at the given Q.
fn highpass_section(freq_hz: f32, q: f32, sample_rate: f32) -> Coefficients {
    let omega = 2.0 * core::f32::consts::PI * freq_hz / sample_rate;
    let cos_omega = cosf(omega);
    let alpha = sinf(omega) / (2.0 * q);

    Coefficients::normalized(
        (1.0 + cos_omega) / 2.0,
        -(1.0 + cos_omega),
        (1.0 + cos_omega) / 2.0,
        1.0 + alpha,
        -2.0 * cos_omega,
        1.0 - alpha,
    )
}

/// RBJ cookbook low-pass section at the given Q.
fn lowpass_section(freq_hz: f32, q: f32, sample_rate: f32) -> Coefficients {
    let omega = 2.0 * core::f32::consts::PI * freq_hz / sample_rate;
    let cos_omega = cosf(omega);
    let alpha = sinf(omega) / (2.0 * q);

    Coefficients::normalized(
        (1.0 - cos_omega) / 2.0,
        1.0 - cos_omega,
        (1.0 - cos_omega) / 2.0,
        1.0 + alpha,
        -2.0 * cos_omega,
        1.0 - alpha,
    )
}

/// Q of section `k` in the order-8 Butterworth factorization.
///
/// Pole pairs of an order-2N Butterworth give section Qs of
/// `1 / (2 cos((2k+1)π/(4N)))`. Returned in ascending order, so a cascade
/// that only activates a prefix runs the best-damped sections first.
fn butterworth_q(k: usize) -> f32 {
    let theta = (2 * k + 1) as f32 * core::f32::consts::PI
        / (4.0 * CASCADE_SECTIONS as f32);
    1.0 / (2.0 * cosf(theta))
}

/// Design the low-cut (high-pass) cascade.
///
/// Always yields all [`CASCADE_SECTIONS`] sections of the maximal 48 dB/oct
/// Butterworth cascade at `freq_hz`; gentler slopes simply leave the tail of
/// the array unwired. One code path for every slope, at the cost of a little
/// wasted math when fewer sections are active.
pub fn low_cut(
    freq_hz: f32,
    sample_rate: f32,
) -> Result<[Coefficients; CASCADE_SECTIONS], DesignError> {
    check_freq(freq_hz, sample_rate)?;
    Ok(core::array::from_fn(|k| {
        highpass_section(freq_hz, butterworth_q(k), sample_rate)
    }))
}

/// Design the high-cut (low-pass) cascade.
///
/// Same policy as [`low_cut`], mirrored to a low-pass response.
pub fn high_cut(
    freq_hz: f32,
    sample_rate: f32,
) -> Result<[Coefficients; CASCADE_SECTIONS], DesignError> {
    check_freq(freq_hz, sample_rate)?;
    Ok(core::array::from_fn(|k| {
        lowpass_section(freq_hz, butterworth_q(k), sample_rate)
    }))
}
