//! Pollination operators
//!
//! This module provides the Lévy step sampler and the global and local
//! pollination moves.

pub mod levy;
pub mod pollination;

pub mod prelude {
    pub use super::levy::*;
    pub use super::pollination::*;
}
