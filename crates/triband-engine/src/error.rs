//! Error types for engine operations.

use thiserror::Error;
use triband_core::DesignError;

/// Errors that can occur while driving the stereo engine.
///
/// There are no retryable conditions here: the engine is pure computation
/// over in-memory state. `NotPrepared` is a caller-sequencing bug and
/// `Design` means an out-of-range parameter slipped past the store's clamps.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EngineError {
    /// Processing or coefficient computation invoked before `prepare`.
    #[error("engine used before prepare()")]
    NotPrepared,

    /// Coefficient design rejected a parameter value.
    #[error("filter design failed: {0}")]
    Design(#[from] DesignError),
}
