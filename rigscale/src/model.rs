use crate::HumanBone;
use glam::{Quat, Vec3};
use std::collections::HashMap;

/// Rest-pose description of a single bone.
///
/// `position`, `rotation` and `scale` are local to the parent bone. Units are
/// meters; the rig is expected to be described in a T-pose.
#[derive(Clone, Debug)]
pub struct BoneData {
    pub name: String,
    pub parent: Option<usize>,
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl BoneData {
    pub fn new(name: impl Into<String>, parent: Option<usize>, position: Vec3) -> Self {
        Self {
            name: name.into(),
            parent,
            position,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

/// Axis-aligned bounds of the skinned mesh in root-local space.
///
/// Optional: rigs without mesh information fall back to bone-derived extents
/// for every measurement that would otherwise read the bounds.
#[derive(Copy, Clone, Debug)]
pub struct MeshBounds {
    pub min: Vec3,
    pub max: Vec3,
}

/// Immutable rig description a [`crate::Rig`] is instantiated from.
#[derive(Clone, Debug)]
pub struct RigData {
    pub bones: Vec<BoneData>,
    /// Canonical humanoid identifier → index into `bones`.
    pub human_map: HashMap<HumanBone, usize>,
    pub mesh_bounds: Option<MeshBounds>,
}
