//! Benchmark support crate for kyori.
//!
//! Provides seeded vector pairs and parameter types used by the Criterion
//! benchmarks that compare the dedicated Lp fast paths against the generic
//! Minkowski routine and measure the cost of runtime metric dispatch.

pub mod error;
pub mod params;
pub mod source;
