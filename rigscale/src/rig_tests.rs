use crate::testrig::reference_rig;
use crate::{BoneData, Error, HumanBone, Rig, RigData};
use glam::Vec3;
use std::collections::HashMap;
use std::sync::Arc;

fn assert_approx(actual: f32, expected: f32) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= 1.0e-5,
        "expected {expected}, got {actual} (diff {diff})"
    );
}

#[test]
fn resolves_canonical_bones() {
    let rig = reference_rig();
    let hips = rig.bone(HumanBone::Hips).unwrap();
    assert_eq!(rig.bone_name(hips), "Hips");
    assert_eq!(rig.bone_by_name("Hips"), Some(hips));
    assert!(rig.bone(HumanBone::Jaw).is_none());
    assert_eq!(rig.bone_name(rig.root()), "Armature");
}

#[test]
fn children_enumerate_the_hierarchy() {
    let rig = reference_rig();
    let hips = rig.bone(HumanBone::Hips).unwrap();
    let names = rig
        .children(hips)
        .map(|id| rig.bone_name(id))
        .collect::<Vec<_>>();
    assert_eq!(names, ["Spine", "UpperLeg.L", "UpperLeg.R"]);

    let head = rig.bone(HumanBone::Head).unwrap();
    assert_eq!(rig.children(head).count(), 2);
}

#[test]
fn bones_track_their_data_records() {
    let rig = reference_rig();
    for (index, bone) in rig.bones.iter().enumerate() {
        assert_eq!(bone.data_index(), index);
        assert_eq!(bone.parent_index(), rig.data.bones[index].parent);
    }
}

#[test]
fn world_positions_compose_through_parents() {
    let rig = reference_rig();
    let neck = rig.bone(HumanBone::Neck).unwrap();
    let pos = rig.world_position(neck);
    assert_approx(pos.x, 0.0);
    assert_approx(pos.y, 1.45);
    assert_approx(pos.z, 0.0);

    let hand = rig.bone(HumanBone::LeftHand).unwrap();
    assert_approx(rig.world_position(hand).x, 0.65);
}

#[test]
fn parent_scale_rescales_descendant_world_positions() {
    let mut rig = reference_rig();
    let spine = rig.bone(HumanBone::Spine).unwrap();
    rig.set_local_scale(spine, Vec3::splat(2.0));

    // Chest and neck offsets double, so the neck moves from 1.45 to
    // 1.0 + 2 * 0.45 while its own local values are untouched.
    let neck = rig.bone(HumanBone::Neck).unwrap();
    assert_approx(rig.world_position(neck).y, 1.90);
    assert_approx(rig.local_position(neck).y, 0.30);
}

#[test]
fn set_world_position_solves_through_scaled_parents() {
    let mut rig = reference_rig();
    let root = rig.root();
    rig.set_local_scale(root, Vec3::splat(2.0));

    let hips = rig.bone(HumanBone::Hips).unwrap();
    let target = Vec3::new(0.1, 1.0, 0.2);
    rig.set_world_position(hips, target);

    let got = rig.world_position(hips);
    assert_approx(got.x, target.x);
    assert_approx(got.y, target.y);
    assert_approx(got.z, target.z);
}

#[test]
fn rest_pose_restores_mutated_bones() {
    let mut rig = reference_rig();
    let hips = rig.bone(HumanBone::Hips).unwrap();
    rig.set_local_scale(hips, Vec3::splat(3.0));
    rig.set_local_position(hips, Vec3::ZERO);

    rig.set_to_rest_pose();
    assert_approx(rig.local_scale(hips).y, 1.0);
    assert_approx(rig.local_position(hips).y, 0.90);
}

#[test]
fn mesh_bounds_follow_root_transform() {
    let mut rig = reference_rig();
    let root = rig.root();
    rig.set_local_scale(root, Vec3::splat(2.0));
    rig.set_local_position(root, Vec3::new(0.0, 0.5, 0.0));

    let bounds = rig.mesh_bounds_world().unwrap();
    assert_approx(bounds.max.y, 0.5 + 2.0 * 1.70);
    assert_approx(bounds.min.y, 0.5);
}

#[test]
fn rejects_multiple_roots() {
    let data = RigData {
        bones: vec![
            BoneData::new("a", None, Vec3::ZERO),
            BoneData::new("b", None, Vec3::ZERO),
        ],
        human_map: HashMap::new(),
        mesh_bounds: None,
    };
    assert!(matches!(
        Rig::new(Arc::new(data)),
        Err(Error::AmbiguousRoot { .. })
    ));
}

#[test]
fn rejects_child_listed_before_parent() {
    let data = RigData {
        bones: vec![
            BoneData::new("child", Some(1), Vec3::ZERO),
            BoneData::new("root", None, Vec3::ZERO),
        ],
        human_map: HashMap::new(),
        mesh_bounds: None,
    };
    assert!(matches!(
        Rig::new(Arc::new(data)),
        Err(Error::InvalidBoneParent { .. })
    ));
}

#[test]
fn rejects_out_of_range_humanoid_mapping() {
    let mut human_map = HashMap::new();
    human_map.insert(HumanBone::Hips, 5);
    let data = RigData {
        bones: vec![BoneData::new("root", None, Vec3::ZERO)],
        human_map,
        mesh_bounds: None,
    };
    assert!(matches!(
        Rig::new(Arc::new(data)),
        Err(Error::InvalidHumanMapping { .. })
    ));
}
