//! Stereo engine: two mono chains kept in sync with the parameter store.

use triband_core::design;

use crate::chain::MonoChain;
use crate::error::EngineError;
use crate::params::{ChainSettings, EqParams};

/// The stereo filter-chain engine.
///
/// Owns one [`MonoChain`] per channel. Both chains always carry identical
/// coefficients (updates are applied to left and right from the same design
/// pass) but fully independent delay state, so the stereo image is preserved
/// while each channel filters its own history.
///
/// # Lifecycle
///
/// Constructed unprepared; [`prepare`](Self::prepare) must run before any
/// processing or coefficient work. There is no way back to the unprepared
/// state short of constructing a new engine. `prepare` may be called again
/// at any time to adopt a new sample rate or block size.
#[derive(Debug, Clone)]
pub struct StereoEngine {
    left: MonoChain,
    right: MonoChain,
    /// `None` until the first `prepare`; coefficient math is invalid without it.
    sample_rate: Option<f32>,
    max_block_size: usize,
}

impl StereoEngine {
    /// Create an unprepared engine with passthrough chains.
    pub fn new() -> Self {
        Self {
            left: MonoChain::new(),
            right: MonoChain::new(),
            sample_rate: None,
            max_block_size: 0,
        }
    }

    /// Cache the host's sample rate and maximum block size.
    ///
    /// Clears both chains' delay state: filter history from another sample
    /// rate is meaningless. Coefficients are recomputed from the snapshot on
    /// the next [`update_filters`] / [`process_block`] call.
    pub fn prepare(&mut self, sample_rate: f32, max_block_size: usize) {
        tracing::debug!(sample_rate, max_block_size, "engine prepared");
        self.sample_rate = Some(sample_rate);
        self.max_block_size = max_block_size;
        self.left.reset();
        self.right.reset();
    }

    /// Whether [`prepare`](Self::prepare) has run.
    pub fn is_prepared(&self) -> bool {
        self.sample_rate.is_some()
    }

    /// The prepared sample rate, if any.
    pub fn sample_rate(&self) -> Option<f32> {
        self.sample_rate
    }

    /// Recompute all coefficient sets from a settings snapshot and apply
    /// them identically to both channel chains.
    ///
    /// Delay state is untouched (live, click-free updates). Deterministic:
    /// the same snapshot at the same sample rate always lands bit-identical
    /// coefficients.
    pub fn update_filters(&mut self, settings: &ChainSettings) -> Result<(), EngineError> {
        let sample_rate = self.sample_rate.ok_or(EngineError::NotPrepared)?;

        let peak = design::peak(
            settings.peak_freq,
            settings.peak_q,
            settings.peak_gain_db,
            sample_rate,
        )?;
        let low_cut = design::low_cut(settings.low_cut_freq, sample_rate)?;
        let high_cut = design::high_cut(settings.high_cut_freq, sample_rate)?;

        for chain in [&mut self.left, &mut self.right] {
            chain.set_peak(peak);
            chain.set_low_cut(&low_cut, settings.low_cut_slope);
            chain.set_high_cut(&high_cut, settings.high_cut_slope);
        }
        Ok(())
    }

    /// Process one block of stereo audio in place.
    ///
    /// Takes a fresh snapshot from the store and recomputes coefficients
    /// before filtering — every block runs against current parameters, at
    /// the cost of some redundant design math when nothing changed. Then
    /// each channel's buffer flows through its own chain in sample order.
    pub fn process_block(
        &mut self,
        params: &EqParams,
        left: &mut [f32],
        right: &mut [f32],
    ) -> Result<(), EngineError> {
        self.update_filters(&params.snapshot())?;

        debug_assert_eq!(
            left.len(),
            right.len(),
            "Channel buffers must have same length"
        );
        debug_assert!(
            left.len() <= self.max_block_size,
            "Block exceeds prepared maximum"
        );

        self.left.process_block_inplace(left);
        self.right.process_block_inplace(right);
        Ok(())
    }

    /// Borrow the left chain (response-curve queries).
    pub fn left(&self) -> &MonoChain {
        &self.left
    }

    /// Borrow the right chain.
    pub fn right(&self) -> &MonoChain {
        &self.right
    }
}

impl Default for StereoEngine {
    fn default() -> Self {
        Self::new()
    }
}
