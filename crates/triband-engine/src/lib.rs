//! Triband Engine - the stereo filter-chain engine of the triband equalizer.
//!
//! Shapes an audio stream with three independently configurable stages per
//! channel: a variable-slope low cut, a parametric peak/notch band, and a
//! variable-slope high cut. Coefficients are recomputed live from an atomic
//! parameter store while audio keeps flowing; delay state is never reset by
//! a parameter change, so updates are click-free.
//!
//! # Architecture
//!
//! - [`EqParams`] / [`ChainSettings`] - lock-free parameter store and the
//!   snapshot extracted from it once per recompute
//! - [`CutCascade`] - four second-order sections realizing 12/24/36/48
//!   dB/oct slopes via an active prefix
//! - [`MonoChain`] - low cut → peak → high cut, strictly in order
//! - [`StereoEngine`] - two mono chains, prepare/update/process lifecycle
//! - [`response`] - pure magnitude-curve sampling for visualization
//!
//! # Example
//!
//! ```rust
//! use triband_engine::{EqParams, Param, StereoEngine};
//!
//! let params = EqParams::new();
//! params.set(Param::PeakGain, 6.0);
//! params.set(Param::LowCutFreq, 80.0);
//!
//! let mut engine = StereoEngine::new();
//! engine.prepare(48000.0, 512);
//!
//! let mut left = vec![0.0f32; 512];
//! let mut right = vec![0.0f32; 512];
//! engine.process_block(&params, &mut left, &mut right).unwrap();
//! ```
//!
//! # Real-time contract
//!
//! `process_block` allocates nothing, takes no locks, and completes in
//! bounded time; the control thread may write [`EqParams`] concurrently at
//! any point, including mid-block, without either side waiting on the other.

pub mod cascade;
pub mod chain;
pub mod engine;
pub mod error;
pub mod params;
pub mod response;

pub use cascade::CutCascade;
pub use chain::MonoChain;
pub use engine::StereoEngine;
pub use error::EngineError;
pub use params::{ALL_PARAMS, ChainSettings, EqParams, PARAM_COUNT, Param, ParamSpec, Slope};
pub use response::{MAX_FREQ, MIN_FREQ, map_to_log10, response_curve_db};
