//! Static TMCL parameter tables.
//!
//! Pure data, no behavior: symbolic names for the axis-parameter ids
//! (per-motor, addressed by GAP/SAP) and the global parameters (module-wide,
//! addressed by GGP/SGP and organized into three banks). The tables mirror
//! the TMCL reference manual; the ids apply to all TMCL stepper modules
//! except the TMCM-100, which uses its own parameter set.

pub mod axis;
pub mod global;

pub use global::*;
