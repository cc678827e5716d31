//! Post-scale corrective passes, independent of the main solve.

use crate::bones::{HumanBone, Side};
use crate::{Error, Rig};
use glam::{Quat, Vec3};
use log::debug;

/// Degrees of spread per unit of spread factor at weight 1.
const SPREAD_STEP_DEGREES: f32 = 8.0;

/// Outward spread weight per finger, thumb first.
const FINGER_WEIGHTS: [f32; 5] = [1.5, 1.0, 0.35, -0.35, -1.0];

/// Vertical fraction from the leg-top average toward the spine where the hip
/// bone is re-seated.
const HIP_RAISE_FRACTION: f32 = 0.9;

/// Rotates each proximal finger bone outward in the palm plane by
/// `spread_factor` times a per-finger weight, mirrored between hands. The
/// thumb is skipped when `spare_thumb` is set. Missing fingers are skipped.
pub fn spread_fingers(rig: &mut Rig, spread_factor: f32, spare_thumb: bool) {
    if !spread_factor.is_finite() || spread_factor == 0.0 {
        return;
    }
    for side in Side::BOTH {
        let mirror = match side {
            Side::Left => 1.0,
            Side::Right => -1.0,
        };
        for (finger, chain) in side.fingers().iter().enumerate() {
            if spare_thumb && finger == 0 {
                continue;
            }
            let Some(proximal) = rig.bone(chain[0]) else {
                continue;
            };
            let angle =
                (spread_factor * FINGER_WEIGHTS[finger] * SPREAD_STEP_DEGREES * mirror).to_radians();
            let spread = Quat::from_rotation_y(angle);
            rig.set_local_rotation(proximal, spread * rig.local_rotation(proximal));
        }
    }
    debug!("spread fingers by factor {spread_factor} (spare thumb: {spare_thumb})");
}

/// Re-seats the hip bone after non-uniform scaling: vertically 90 % of the
/// way from the leg-top average to the spine, horizontally onto the spine's
/// X/Z. Children follow the hip, so targets are computed before the move.
pub fn fix_hip_bone(rig: &mut Rig) -> Result<(), Error> {
    let hips = rig.required_bone(HumanBone::Hips)?;
    let spine = rig.required_bone(HumanBone::Spine)?;
    let left_leg = rig.required_bone(HumanBone::LeftUpperLeg)?;
    let right_leg = rig.required_bone(HumanBone::RightUpperLeg)?;

    let spine_world = rig.world_position(spine);
    let leg_y = (rig.world_position(left_leg).y + rig.world_position(right_leg).y) / 2.0;

    let target = Vec3::new(
        spine_world.x,
        leg_y + (spine_world.y - leg_y) * HIP_RAISE_FRACTION,
        spine_world.z,
    );
    rig.set_world_position(hips, target);
    debug!("hip bone re-seated at {target}");
    Ok(())
}
