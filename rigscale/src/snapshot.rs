//! Scoped-transaction pose capture for preview rollback.
//!
//! The engine mutates the rig in place; callers that need preview semantics
//! capture a snapshot before [`crate::scale_avatar`] and restore it after.

use crate::{Error, Rig};
use glam::{Quat, Vec3};

#[derive(Copy, Clone, Debug, PartialEq)]
struct LocalPose {
    position: Vec3,
    rotation: Quat,
    scale: Vec3,
}

/// Immutable copy of every bone's local position, rotation and scale.
#[derive(Clone, Debug)]
pub struct PoseSnapshot {
    bones: Vec<LocalPose>,
}

impl PoseSnapshot {
    pub fn capture(rig: &Rig) -> Self {
        let bones = rig
            .bones
            .iter()
            .map(|bone| LocalPose {
                position: bone.position,
                rotation: bone.rotation,
                scale: bone.scale,
            })
            .collect();
        Self { bones }
    }

    /// Restores the captured pose. The rig must be the one the snapshot was
    /// taken from (same bone count); a mismatch restores nothing.
    pub fn restore(&self, rig: &mut Rig) -> Result<(), Error> {
        if self.bones.len() != rig.bones.len() {
            return Err(Error::SnapshotMismatch {
                snapshot: self.bones.len(),
                rig: rig.bones.len(),
            });
        }
        for (bone, pose) in rig.bones.iter_mut().zip(&self.bones) {
            bone.position = pose.position;
            bone.rotation = pose.rotation;
            bone.scale = pose.scale;
        }
        Ok(())
    }
}
