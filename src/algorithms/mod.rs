//! Optimization algorithms
//!
//! This module provides the Flower Pollination Algorithm and its observer
//! hooks.

pub mod fpa;
pub mod observer;

pub mod prelude {
    pub use super::fpa::*;
    pub use super::observer::*;
}
