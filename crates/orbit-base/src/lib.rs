//! orbit-base: Shared value types for the Orbit metadata engine
//!
//! This crate provides the foundational types used across all Orbit crates:
//! 3D position primitives (polar/cartesian), rotation quaternions, the
//! combined position transform, and the ordered string-keyed parameter set.

mod error;
mod params;
mod position;

pub use error::*;
pub use params::*;
pub use position::*;
