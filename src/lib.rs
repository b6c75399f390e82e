//! # fpa-evo
//!
//! The Flower Pollination Algorithm for continuous, box-bounded
//! minimization.
//!
//! ## Core Concepts
//!
//! - **Global pollination**: Lévy-flight steps relative to the best flower
//! - **Local pollination**: random interpolation between two other flowers
//! - **Greedy, in-place updates**: a trial replaces its flower when it is
//!   at least as good, and later flowers see the change immediately
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fpa_evo::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = RngSource::new(rand::rngs::StdRng::seed_from_u64(42));
//! let mut streams = RandomStreams::unified(&mut rng);
//!
//! let outcome = FlowerPollination::builder()
//!     .flower_count(175)
//!     .iterations(300)
//!     .bounds(MultiBounds::symmetric(5.0, 2))
//!     .objective(SixHumpCamelBack::new())
//!     .build()?
//!     .run(&mut streams)?;
//!
//! println!("{:?} -> {}", outcome.best.position(), outcome.best.fitness());
//! ```

pub mod algorithms;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fitness;
pub mod operators;
pub mod population;
pub mod random;
pub mod space;
pub mod termination;

pub use algorithms::fpa::optimize;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::prelude::*;
    pub use crate::config::*;
    pub use crate::diagnostics::prelude::*;
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
    pub use crate::random::*;
    pub use crate::space::prelude::*;
    pub use crate::termination::prelude::*;
}
