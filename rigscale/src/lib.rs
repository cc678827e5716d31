//! Proportion retargeting engine for rigged humanoid skeletons.
//!
//! Given a humanoid rig in a T-pose, the engine measures body segments,
//! derives per-segment scale factors for a target height while preserving an
//! arm-to-height calibration ratio consumed by an external IK system, and
//! applies the factors hierarchically without breaking parent-child
//! transform consistency. Editor UI, undo/preview and host-plugin concerns
//! live outside this crate.

#![forbid(unsafe_code)]

mod adjust;
mod apply;
mod bones;
mod error;
mod measure;
mod model;
mod rig;
mod snapshot;
mod solve;
mod view;

#[cfg(feature = "json")]
pub mod json;

pub use adjust::*;
pub use apply::*;
pub use bones::*;
pub use error::*;
pub use measure::{ARM_RATIO_HEIGHT_OFFSET, DEFAULT_ARM_TO_HEIGHT_RATIO};
pub use model::*;
pub use rig::*;
pub use snapshot::*;
pub use solve::*;
pub use view::*;

#[cfg(test)]
pub(crate) mod testrig;

#[cfg(test)]
mod rig_tests;





#[cfg(test)]
mod snapshot_tests;
