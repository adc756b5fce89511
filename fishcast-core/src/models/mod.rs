//! The independent physical sub-models composed by the engine.
//!
//! Each module is a set of pure functions over `f64` inputs with its
//! constants hoisted into named tables, so the formulas stay auditable
//! against their literature sources. Dependency order: morphology is the
//! leaf, thermal/turbidity/waves consume the resolved morphology, oxygen
//! consumes the thermal output, light is an independent leaf.

pub mod light;
pub mod morphology;
pub mod oxygen;
pub mod thermal;
pub mod turbidity;
pub mod waves;
