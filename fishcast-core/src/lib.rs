//! Bio-halieutic environmental simulation engine.
//!
//! A pure, stateless pipeline that converts a weather history, the current
//! observation and a water-body morphology into derived water physics
//! (temperature, turbidity, dissolved oxygen, wave height) and a 0-100
//! activity score per species. Every invocation is a pure function of its
//! inputs: no I/O, no shared state, bit-for-bit reproducible for identical
//! ordered inputs. Concurrent invocations are safe to run in parallel by
//! the caller.

pub mod error;
pub mod logger;
pub mod models;
pub mod simulation;
pub mod species;
