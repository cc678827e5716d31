//! Applies solved scale factors to the rig.
//!
//! Staging: the proportion pass edits bone local scales relative to the
//! overall factor, then the overall height is realized as one uniform root
//! scale, then the root is dropped to the floor and optionally centered.
//! Scale is written top-down so children pick up parent changes through
//! ordinary transform inheritance; nothing is re-derived from stale world
//! positions. Extent measurements during the apply are bone-derived, since
//! static mesh bounds stop tracking the mesh once bone lengths change.

use crate::bones::{HumanBone, Side};
use crate::rig::{BoneId, Rig};
use crate::solve::{solve, ScaleFactors, ScalingParameters};
use crate::Error;
use log::{debug, info};

const MIN_SEGMENT: f32 = 1.0e-5;

/// Outcome of one [`scale_avatar`] invocation.
#[derive(Copy, Clone, Debug)]
pub struct ScaleReport {
    pub factors: ScaleFactors,
    /// Realized root scale ratio (new / old). Callers rescale host-side
    /// view/voice anchors by this, see [`crate::rescale_anchor`].
    pub height_scale: f32,
    /// Bone-derived floor-to-crown height after the apply.
    pub final_height: f32,
}

/// Runs the full measure → solve → apply pipeline on the rig.
///
/// Fails atomically: the rig is only mutated once the solve has produced a
/// complete set of finite, positive factors.
pub fn scale_avatar(rig: &mut Rig, params: &ScalingParameters) -> Result<ScaleReport, Error> {
    let factors = solve(rig, params)?;
    factors.validate()?;
    rig.required_bone(HumanBone::Hips)?;

    let root = rig.root();
    let pre_root_scale = rig.local_scale(root).y;

    if !params.skip_adjust {
        apply_proportions(rig, params, &factors);
    }

    if !params.skip_height_scaling {
        let height = rig.height_by_method(params.height_method, true);
        if height > MIN_SEGMENT {
            let uniform = params.target_height / height;
            rig.set_local_scale(root, rig.local_scale(root) * uniform);
            debug!("height pass: {height:.4}m -> {:.4}m (root x{uniform:.4})", params.target_height);
        }
    }

    if !params.skip_move_to_floor {
        let lowest = rig.lowest_point(true);
        let mut position = rig.local_position(root);
        position.y -= lowest;
        rig.set_local_position(root, position);
        debug!("floor pass: root lowered by {lowest:.4}m");
    }

    if params.center_model {
        if let Some(hips) = rig.bone(HumanBone::Hips) {
            let hips_world = rig.world_position(hips);
            let mut position = rig.local_position(root);
            position.x -= hips_world.x;
            position.z -= hips_world.z;
            rig.set_local_position(root, position);
        }
    }

    let post_root_scale = rig.local_scale(root).y;
    let height_scale = if pre_root_scale.abs() > MIN_SEGMENT {
        post_root_scale / pre_root_scale
    } else {
        1.0
    };
    let final_height = rig.highest_point(true) - rig.lowest_point(true);

    info!(
        "scaled avatar to {:.3}m (target {:.3}m), root scale ratio {:.4}",
        final_height, params.target_height, height_scale
    );

    Ok(ScaleReport {
        factors,
        height_scale,
        final_height,
    })
}

/// Proportion pass: per-segment bone scales relative to the overall factor.
fn apply_proportions(rig: &mut Rig, params: &ScalingParameters, factors: &ScaleFactors) {
    let rel_upper = factors.upper_body / factors.overall;
    let rel_arm = factors.arm / factors.overall;
    let rel_leg = factors.leg / factors.overall;
    let rel_thigh = factors.thigh / factors.overall;
    let rel_shin = factors.shin / factors.overall;

    let arm_keep = (params.arm_thickness / 100.0).clamp(0.0, 1.0);
    let leg_keep = (params.leg_thickness / 100.0).clamp(0.0, 1.0);

    // Torso first: everything below inherits the spine scale.
    let spine = rig.bone(HumanBone::Spine);
    if let Some(spine) = spine {
        rig.set_local_scale(spine, rig.local_scale(spine) * rel_upper);
    }
    // Arms descend from the spine only when a spine exists to inherit from.
    let arm_inherited = if spine.is_some() { rel_upper } else { 1.0 };

    for side in Side::BOTH {
        if let Some(upper_arm) = rig.bone(side.upper_arm()) {
            let axis = rig.limb_axis(upper_arm, side.lower_arm());
            // The length correction for the inherited spine factor stays on
            // the length axis only: thickness retention is defined on the
            // limb's local cross-axis scale, so 100 % keeps it untouched.
            let length = rel_arm / arm_inherited;
            let thickness = lerp(rel_arm, 1.0, arm_keep);
            scale_limb(rig, upper_arm, axis, length, thickness);

            if !params.scale_hand {
                if let Some(hand) = rig.bone(side.hand()) {
                    // Renormalize against the net inherited factors, spine
                    // included, so the hand keeps its absolute size.
                    scale_limb(
                        rig,
                        hand,
                        axis,
                        1.0 / rel_arm,
                        1.0 / (arm_inherited * thickness),
                    );
                }
            }
        }

        if let Some(upper_leg) = rig.bone(side.upper_leg()) {
            let axis = rig.limb_axis(upper_leg, side.lower_leg());
            let thickness = lerp(rel_leg, 1.0, leg_keep);
            scale_limb(rig, upper_leg, axis, rel_thigh, thickness);

            if let Some(lower_leg) = rig.bone(side.lower_leg()) {
                let shin_axis = rig.limb_axis(lower_leg, side.foot());
                // Correct for the inherited thigh factor so the shin segment
                // lands on its own factor.
                scale_limb(rig, lower_leg, shin_axis, rel_shin / rel_thigh, 1.0);
            }

            if !params.scale_foot {
                if let Some(foot) = rig.bone(side.foot()) {
                    scale_limb(rig, foot, axis, 1.0 / rel_shin, 1.0 / thickness);
                }
            }
        }
    }
}

fn scale_limb(rig: &mut Rig, bone: BoneId, length_axis: usize, length: f32, thickness: f32) {
    let mut scale = rig.local_scale(bone);
    for component in 0..3 {
        scale[component] *= if component == length_axis {
            length
        } else {
            thickness
        };
    }
    rig.set_local_scale(bone, scale);
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
