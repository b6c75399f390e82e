//! Termination
//!
//! A run ends after its generation budget, or earlier if a
//! [`CancellationToken`] is triggered. Cancellation is only observed between
//! generations.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Why a run stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// All configured generations completed
    MaxGenerations,
    /// A cancellation request was observed between generations
    Cancelled,
}

impl Termination {
    /// Get a description of why termination occurred
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MaxGenerations => "Maximum generations reached",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// Shared flag for cooperative cancellation
///
/// Clones share the same flag, so one can be handed to another thread.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a token that is not cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Check if cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

pub mod prelude {
    pub use super::{CancellationToken, Termination};
}
