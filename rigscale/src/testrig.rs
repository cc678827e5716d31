//! Shared reference humanoid used across test modules: a 1.70 m T-pose rig
//! with identity rotations and unit scales, so expected measurements can be
//! computed by hand.

use crate::{BoneData, HumanBone, MeshBounds, Rig, RigData};
use glam::Vec3;
use std::collections::HashMap;
use std::sync::Arc;

/// Bone-derived floor-to-crown height of the reference rig.
pub(crate) const REF_HEIGHT: f32 = 1.70;
/// World Y of the reference rig's eyes.
pub(crate) const REF_EYE_HEIGHT: f32 = 1.65;

struct Builder {
    bones: Vec<BoneData>,
    world: Vec<Vec3>,
    names: HashMap<String, usize>,
    human_map: HashMap<HumanBone, usize>,
}

impl Builder {
    fn new() -> Self {
        Self {
            bones: Vec::new(),
            world: Vec::new(),
            names: HashMap::new(),
            human_map: HashMap::new(),
        }
    }

    /// Adds a bone by its world position; the local offset is derived from
    /// the parent's world position (valid because the pose has identity
    /// rotations and unit scales).
    fn bone(
        &mut self,
        name: &str,
        parent: Option<&str>,
        world: Vec3,
        human: Option<HumanBone>,
    ) -> &mut Self {
        let parent_index = parent.map(|p| self.names[p]);
        let local = match parent_index {
            Some(p) => world - self.world[p],
            None => world,
        };
        let index = self.bones.len();
        self.bones.push(BoneData::new(name, parent_index, local));
        self.world.push(world);
        self.names.insert(name.to_string(), index);
        if let Some(human) = human {
            self.human_map.insert(human, index);
        }
        self
    }
}

pub(crate) fn reference_rig_data() -> RigData {
    use HumanBone::*;

    let mut b = Builder::new();
    b.bone("Armature", None, Vec3::ZERO, None)
        .bone("Hips", Some("Armature"), Vec3::new(0.0, 0.90, 0.0), Some(Hips))
        .bone("Spine", Some("Hips"), Vec3::new(0.0, 1.00, 0.0), Some(Spine))
        .bone("Chest", Some("Spine"), Vec3::new(0.0, 1.15, 0.0), Some(Chest))
        .bone("Neck", Some("Chest"), Vec3::new(0.0, 1.45, 0.0), Some(Neck))
        .bone("Head", Some("Neck"), Vec3::new(0.0, 1.575, 0.0), Some(Head))
        .bone("Eye.L", Some("Head"), Vec3::new(0.03, 1.65, 0.05), Some(LeftEye))
        .bone("Eye.R", Some("Head"), Vec3::new(-0.03, 1.65, 0.05), Some(RightEye));

    for (sign, suffix) in [(1.0f32, "L"), (-1.0f32, "R")] {
        let (shoulder, upper_arm, lower_arm, hand) = match suffix {
            "L" => (LeftShoulder, LeftUpperArm, LeftLowerArm, LeftHand),
            _ => (RightShoulder, RightUpperArm, RightLowerArm, RightHand),
        };
        let (thumb_p, index_p, middle_p, middle_i, middle_d) = match suffix {
            "L" => (
                LeftThumbProximal,
                LeftIndexProximal,
                LeftMiddleProximal,
                LeftMiddleIntermediate,
                LeftMiddleDistal,
            ),
            _ => (
                RightThumbProximal,
                RightIndexProximal,
                RightMiddleProximal,
                RightMiddleIntermediate,
                RightMiddleDistal,
            ),
        };
        let (upper_leg, lower_leg, foot, toes) = match suffix {
            "L" => (LeftUpperLeg, LeftLowerLeg, LeftFoot, LeftToes),
            _ => (RightUpperLeg, RightLowerLeg, RightFoot, RightToes),
        };

        let x = |v: f32| sign * v;
        b.bone(
            &format!("Shoulder.{suffix}"),
            Some("Chest"),
            Vec3::new(x(0.05), 1.40, 0.0),
            Some(shoulder),
        )
        .bone(
            &format!("UpperArm.{suffix}"),
            Some(&format!("Shoulder.{suffix}")),
            Vec3::new(x(0.15), 1.40, 0.0),
            Some(upper_arm),
        )
        .bone(
            &format!("LowerArm.{suffix}"),
            Some(&format!("UpperArm.{suffix}")),
            Vec3::new(x(0.40), 1.40, 0.0),
            Some(lower_arm),
        )
        .bone(
            &format!("Hand.{suffix}"),
            Some(&format!("LowerArm.{suffix}")),
            Vec3::new(x(0.65), 1.40, 0.0),
            Some(hand),
        )
        .bone(
            &format!("Thumb.{suffix}"),
            Some(&format!("Hand.{suffix}")),
            Vec3::new(x(0.67), 1.39, 0.03),
            Some(thumb_p),
        )
        .bone(
            &format!("Index.{suffix}"),
            Some(&format!("Hand.{suffix}")),
            Vec3::new(x(0.69), 1.40, 0.02),
            Some(index_p),
        )
        .bone(
            &format!("Middle1.{suffix}"),
            Some(&format!("Hand.{suffix}")),
            Vec3::new(x(0.70), 1.40, 0.0),
            Some(middle_p),
        )
        .bone(
            &format!("Middle2.{suffix}"),
            Some(&format!("Middle1.{suffix}")),
            Vec3::new(x(0.73), 1.40, 0.0),
            Some(middle_i),
        )
        .bone(
            &format!("Middle3.{suffix}"),
            Some(&format!("Middle2.{suffix}")),
            Vec3::new(x(0.76), 1.40, 0.0),
            Some(middle_d),
        )
        .bone(
            &format!("UpperLeg.{suffix}"),
            Some("Hips"),
            Vec3::new(x(0.08), 0.90, 0.0),
            Some(upper_leg),
        )
        .bone(
            &format!("LowerLeg.{suffix}"),
            Some(&format!("UpperLeg.{suffix}")),
            Vec3::new(x(0.08), 0.50, 0.0),
            Some(lower_leg),
        )
        .bone(
            &format!("Foot.{suffix}"),
            Some(&format!("LowerLeg.{suffix}")),
            Vec3::new(x(0.08), 0.10, 0.0),
            Some(foot),
        )
        .bone(
            &format!("Toes.{suffix}"),
            Some(&format!("Foot.{suffix}")),
            Vec3::new(x(0.08), 0.0, 0.12),
            Some(toes),
        );
    }

    RigData {
        bones: b.bones,
        human_map: b.human_map,
        mesh_bounds: Some(MeshBounds {
            min: Vec3::new(-0.8, 0.0, -0.2),
            max: Vec3::new(0.8, REF_HEIGHT, 0.2),
        }),
    }
}

pub(crate) fn reference_rig() -> Rig {
    Rig::new(Arc::new(reference_rig_data())).unwrap()
}

/// Reference rig with the given humanoid mappings removed, for
/// missing-bone-degradation tests. The transforms stay; only the canonical
/// mapping disappears.
pub(crate) fn rig_without(bones: &[HumanBone]) -> Rig {
    let mut data = reference_rig_data();
    for bone in bones {
        data.human_map.remove(bone);
    }
    Rig::new(Arc::new(data)).unwrap()
}

/// Reference rig without mesh bounds, so every measurement is bone-derived.
pub(crate) fn boneonly_rig() -> Rig {
    let mut data = reference_rig_data();
    data.mesh_bounds = None;
    Rig::new(Arc::new(data)).unwrap()
}
