//! Triband Core - biquad sections and EQ coefficient design
//!
//! This crate provides the pure-math layer of the triband equalizer: the
//! second-order IIR section used by every filter stage, and the coefficient
//! designer that turns human-facing parameters (frequency, Q, gain, slope)
//! into normalized biquad coefficients.
//!
//! # Core Abstractions
//!
//! - [`Biquad`] - Second-order IIR section (Direct Form I) with live
//!   coefficient swapping that preserves delay state
//! - [`Coefficients`] - Normalized, comparable biquad coefficient set with a
//!   pure frequency-response query
//! - [`design`] - RBJ cookbook peaking EQ plus Butterworth cut cascades
//!
//! # Design Principles
//!
//! - **Real-time safe**: no allocations, no locks in processing paths
//! - **No dependencies on std**: pure `no_std` with `libm` for math
//! - **Stateless design math**: the designer is a set of pure functions; all
//!   mutable state lives in the sections themselves

#![cfg_attr(not(feature = "std"), no_std)]

pub mod biquad;
pub mod design;
pub mod math;

pub use biquad::{Biquad, Coefficients};
pub use design::{CASCADE_SECTIONS, DesignError, high_cut, low_cut, peak};
pub use math::{db_to_linear, linear_to_db};
