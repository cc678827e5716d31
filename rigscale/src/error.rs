use crate::HumanBone;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("target height {value} is not a usable height in meters")]
    InvalidTarget { value: f32 },

    #[error("rig is missing required bone {bone:?}")]
    MissingRequiredBone { bone: HumanBone },

    #[error("cannot derive a positive {measurement} from the rig")]
    DegenerateMeasurement { measurement: &'static str },

    #[error("solved {factor} scale {value} is not finite and positive")]
    NonFiniteScale { factor: &'static str, value: f32 },

    #[error("rig must have exactly one root bone, found {count}")]
    AmbiguousRoot { count: usize },

    #[error("bone '{bone}' references out-of-range parent index {parent}")]
    InvalidBoneParent { bone: String, parent: usize },

    #[error("humanoid mapping for {bone:?} references out-of-range bone index {index}")]
    InvalidHumanMapping { bone: HumanBone, index: usize },

    #[error("snapshot holds {snapshot} bones but the rig has {rig}")]
    SnapshotMismatch { snapshot: usize, rig: usize },

    #[cfg(feature = "json")]
    #[error("failed to parse rig JSON: {message}")]
    JsonParse { message: String },

    #[cfg(feature = "json")]
    #[error("unknown parent bone '{parent}' for bone '{bone}'")]
    JsonUnknownBoneParent { bone: String, parent: String },

    #[cfg(feature = "json")]
    #[error("duplicate bone name '{name}'")]
    JsonDuplicateBone { name: String },

    #[cfg(feature = "json")]
    #[error("unknown humanoid bone identifier '{value}' on bone '{bone}'")]
    JsonUnknownHumanBone { bone: String, value: String },

    #[cfg(feature = "json")]
    #[error("humanoid bone {human:?} is mapped by both '{first}' and '{second}'")]
    JsonDuplicateHumanBone {
        human: HumanBone,
        first: String,
        second: String,
    },
}
