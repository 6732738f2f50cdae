//! Shared test utilities used across kyori crates.
//!
//! [`tracing`] captures spans and events so suites can assert on
//! instrumentation. [`ci`] holds the environment-driven knobs that CI uses to
//! scale property-based suites.

pub mod ci;
pub mod tracing;
