use crate::testrig::boneonly_rig;
use crate::{
    scale_avatar, BoneData, Error, HumanBone, PoseSnapshot, Rig, RigData, ScalingParameters,
};
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
fn restore_rolls_back_a_full_scale_pass() {
    let mut rig = boneonly_rig();
    let head = rig.bone(HumanBone::Head).unwrap();
    let before = rig.world_position(head);

    let snapshot = PoseSnapshot::capture(&rig);
    let params = ScalingParameters {
        target_height: 1.20,
        bone_based_floor: true,
        ..ScalingParameters::default()
    };
    scale_avatar(&mut rig, &params).unwrap();
    assert!(rig.world_position(head).y < before.y);

    snapshot.restore(&mut rig).unwrap();
    let after = rig.world_position(head);
    assert_approx(after.y, before.y);
    assert_approx(rig.local_scale(rig.root()).y, 1.0);
    assert_approx(rig.highest_point(true) - rig.lowest_point(true), 1.70);
}

#[test]
fn restore_rejects_a_different_rig() {
    let rig = boneonly_rig();
    let snapshot = PoseSnapshot::capture(&rig);

    let data = RigData {
        bones: vec![BoneData::new("root", None, Vec3::ZERO)],
        human_map: HashMap::new(),
        mesh_bounds: None,
    };
    let mut other = Rig::new(Arc::new(data)).unwrap();
    assert!(matches!(
        snapshot.restore(&mut other),
        Err(Error::SnapshotMismatch { .. })
    ));
}
