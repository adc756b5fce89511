//! Data contracts shared between the fishcast engine and its callers.
//!
//! These types are plain serde structures with no behavior beyond small
//! accessors; all physics and scoring lives in `fishcast-core`.

pub mod hydrology;
pub mod morphology;
pub mod snapshot;
pub mod species;
pub mod weather;
