//! Search space
//!
//! This module provides the box bounds that confine every candidate.

pub mod bounds;

pub mod prelude {
    pub use super::bounds::*;
}
