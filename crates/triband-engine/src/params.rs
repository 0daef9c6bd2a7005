//! Parameter store and snapshot extraction.
//!
//! [`EqParams`] is the bridge between the control/UI thread and the audio
//! thread. Each of the seven equalizer parameters lives in its own
//! `AtomicU32` cell holding f32 bits, so either thread can read or write a
//! scalar without locks and without ever observing a torn value. The audio
//! thread never reads individual cells directly; it takes a [`ChainSettings`]
//! snapshot once per block and designs coefficients from that.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

/// Cut-filter slope selection, quantized to whole cascade sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Slope {
    /// 12 dB/octave: one active section.
    #[default]
    Db12 = 0,
    /// 24 dB/octave: two active sections.
    Db24 = 1,
    /// 36 dB/octave: three active sections.
    Db36 = 2,
    /// 48 dB/octave: four active sections.
    Db48 = 3,
}

impl Slope {
    /// Convert a float ordinal (0-3) to a `Slope`. Out-of-range values fall
    /// back to the gentlest slope.
    pub fn from_index(v: f32) -> Self {
        match v as u8 {
            1 => Self::Db24,
            2 => Self::Db36,
            3 => Self::Db48,
            _ => Self::Db12,
        }
    }

    /// Number of cascade sections this slope keeps active (1-4).
    #[inline]
    pub fn active_sections(self) -> usize {
        self as usize + 1
    }

    /// Rolloff steepness in dB per octave.
    pub fn db_per_octave(self) -> u32 {
        12 * (self as u32 + 1)
    }
}

/// One consistently-read copy of every parameter value.
///
/// Produced fresh by [`EqParams::snapshot`] for each coefficient
/// recomputation; carries no identity beyond its values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChainSettings {
    /// Peak band center frequency in Hz.
    pub peak_freq: f32,
    /// Peak band gain in dB.
    pub peak_gain_db: f32,
    /// Peak band Q factor.
    pub peak_q: f32,
    /// Low-cut (high-pass) cutoff in Hz.
    pub low_cut_freq: f32,
    /// High-cut (low-pass) cutoff in Hz.
    pub high_cut_freq: f32,
    /// Low-cut slope.
    pub low_cut_slope: Slope,
    /// High-cut slope.
    pub high_cut_slope: Slope,
}

impl Default for ChainSettings {
    fn default() -> Self {
        Self {
            peak_freq: Param::PeakFreq.spec().default,
            peak_gain_db: Param::PeakGain.spec().default,
            peak_q: Param::PeakQ.spec().default,
            low_cut_freq: Param::LowCutFreq.spec().default,
            high_cut_freq: Param::HighCutFreq.spec().default,
            low_cut_slope: Slope::Db12,
            high_cut_slope: Slope::Db12,
        }
    }
}

/// Identifies one of the seven equalizer parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Param {
    /// Low-cut cutoff frequency.
    LowCutFreq = 0,
    /// High-cut cutoff frequency.
    HighCutFreq = 1,
    /// Peak center frequency.
    PeakFreq = 2,
    /// Peak gain in dB.
    PeakGain = 3,
    /// Peak Q factor.
    PeakQ = 4,
    /// Low-cut slope ordinal.
    LowCutSlope = 5,
    /// High-cut slope ordinal.
    HighCutSlope = 6,
}

/// All parameters, in store order.
pub const ALL_PARAMS: [Param; PARAM_COUNT] = [
    Param::LowCutFreq,
    Param::HighCutFreq,
    Param::PeakFreq,
    Param::PeakGain,
    Param::PeakQ,
    Param::LowCutSlope,
    Param::HighCutSlope,
];

/// Number of parameters in the store.
pub const PARAM_COUNT: usize = 7;

/// Range metadata for one parameter.
///
/// `min`/`max` bound every stored value (writes clamp); `default` seeds a
/// fresh store. Frequencies are stored linearly in Hz; any logarithmic
/// mapping belongs to the widget layer, not here.
#[derive(Clone, Copy, Debug)]
pub struct ParamSpec {
    /// Human-readable parameter name.
    pub name: &'static str,
    /// Lower bound (inclusive).
    pub min: f32,
    /// Upper bound (inclusive).
    pub max: f32,
    /// Initial value.
    pub default: f32,
}

impl Param {
    /// Range metadata for this parameter.
    pub fn spec(self) -> ParamSpec {
        match self {
            Self::LowCutFreq => ParamSpec {
                name: "LowCut Freq",
                min: 20.0,
                max: 20000.0,
                default: 20.0,
            },
            Self::HighCutFreq => ParamSpec {
                name: "HighCut Freq",
                min: 20.0,
                max: 20000.0,
                default: 20000.0,
            },
            Self::PeakFreq => ParamSpec {
                name: "Peak Freq",
                min: 20.0,
                max: 20000.0,
                default: 750.0,
            },
            Self::PeakGain => ParamSpec {
                name: "Peak Gain",
                min: -24.0,
                max: 24.0,
                default: 0.0,
            },
            Self::PeakQ => ParamSpec {
                name: "Peak Q",
                min: 0.1,
                max: 3.0,
                default: 1.0,
            },
            Self::LowCutSlope => ParamSpec {
                name: "LowCut Slope",
                min: 0.0,
                max: 3.0,
                default: 0.0,
            },
            Self::HighCutSlope => ParamSpec {
                name: "HighCut Slope",
                min: 0.0,
                max: 3.0,
                default: 0.0,
            },
        }
    }
}

/// Inner storage behind `Arc` so `EqParams` can be cheaply cloned into both
/// the control thread and the audio thread.
struct ParamData {
    /// Parameter values as f32 bit-cast to u32 for atomic access.
    values: [AtomicU32; PARAM_COUNT],
}

/// Thread-safe parameter store.
///
/// # Thread Safety
///
/// Every cell is a single `AtomicU32` with Release writes and Acquire reads:
/// lock-free, allocation-free, and safe to touch from the audio thread and
/// the control thread simultaneously. A [`snapshot`](Self::snapshot) reads
/// each scalar atomically; it does not try to be a cross-parameter
/// transaction, which matches how the engine consumes it (one design pass
/// per block from whatever values are current).
#[derive(Clone)]
pub struct EqParams {
    inner: Arc<ParamData>,
}

impl EqParams {
    /// Create a store seeded with every parameter's default.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ParamData {
                values: core::array::from_fn(|i| {
                    AtomicU32::new(ALL_PARAMS[i].spec().default.to_bits())
                }),
            }),
        }
    }

    /// Read the current value of a parameter.
    pub fn get(&self, param: Param) -> f32 {
        f32::from_bits(self.inner.values[param as usize].load(Ordering::Acquire))
    }

    /// Write a parameter value, clamped to its published range.
    ///
    /// Non-finite writes are ignored: the store is the last line of defense
    /// before the designer, and a NaN here would otherwise ride along into
    /// every later snapshot.
    pub fn set(&self, param: Param, value: f32) {
        if !value.is_finite() {
            return;
        }
        let spec = param.spec();
        let clamped = value.clamp(spec.min, spec.max);
        self.inner.values[param as usize].store(clamped.to_bits(), Ordering::Release);
    }

    /// Extract a [`ChainSettings`] snapshot of the current values.
    pub fn snapshot(&self) -> ChainSettings {
        ChainSettings {
            peak_freq: self.get(Param::PeakFreq),
            peak_gain_db: self.get(Param::PeakGain),
            peak_q: self.get(Param::PeakQ),
            low_cut_freq: self.get(Param::LowCutFreq),
            high_cut_freq: self.get(Param::HighCutFreq),
            low_cut_slope: Slope::from_index(self.get(Param::LowCutSlope)),
            high_cut_slope: Slope::from_index(self.get(Param::HighCutSlope)),
        }
    }
}

impl Default for EqParams {
    fn default() -> Self {
        Self::new()
    }
}
