//! Turns a target height and measurement-convention choices into per-segment
//! scale factors.

use crate::measure::{ARM_RATIO_HEIGHT_OFFSET, DEFAULT_ARM_TO_HEIGHT_RATIO};
use crate::{Error, Rig};
use log::debug;

/// Smallest accepted target height in meters.
pub const MIN_TARGET_HEIGHT: f32 = 0.1;

const MIN_SEGMENT: f32 = 1.0e-5;

/// What "height" means: floor-to-crown or floor-to-eye.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub enum HeightMethod {
    #[default]
    Total,
    Eye,
}

/// Which two landmarks define "arm length" for the calibration ratio.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub enum ArmMethod {
    /// Head bone to elbow, the VRChat-style convention.
    #[default]
    HeadToElbow,
    HeadToHand,
    /// Shoulder to wrist.
    ArmLength,
    ShoulderToFingertip,
    CenterToHand,
    CenterToFingertip,
}

/// How the upper-body split is measured.
///
/// The legacy eye-based heuristic and the explicit landmark ratio are both
/// kept as selectable strategies; neither supersedes the other.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub enum UpperBodyMethod {
    /// Leg→eye over floor→eye.
    Legacy,
    /// Leg→{neck|head} over floor→{neck|head}, landmarks selected
    /// independently for the torso numerator and the height denominator.
    Ratio {
        height_to_neck: bool,
        torso_to_neck: bool,
    },
}

impl Default for UpperBodyMethod {
    fn default() -> Self {
        Self::Ratio {
            height_to_neck: true,
            torso_to_neck: true,
        }
    }
}

/// Immutable per-invocation configuration.
///
/// Defaults match the stock component: 1.61 m target, 44 % upper body,
/// 0.4537 calibration ratio, 50 % thickness retention, 53 % thigh.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(default))]
pub struct ScalingParameters {
    /// Desired height in meters, interpreted per `height_method`.
    pub target_height: f32,
    /// Desired upper-body share of the height, percent.
    pub upper_body_percentage: f32,
    /// Arm-to-height ratio to calibrate for the external IK system.
    pub custom_scale_ratio: f32,

    /// Arm thickness retention, percent: 0 scales thickness with length,
    /// 100 keeps the current thickness.
    pub arm_thickness: f32,
    /// Leg thickness retention, percent.
    pub leg_thickness: f32,
    /// Thigh share of the total leg length, percent.
    pub thigh_percentage: f32,

    /// Scale hands together with the arms instead of preserving their size.
    pub scale_hand: bool,
    /// Scale feet together with the legs instead of preserving their size.
    pub scale_foot: bool,
    /// Move the root so the character stands at world X=0, Z=0.
    pub center_model: bool,
    /// Derive floor/ceiling from bones instead of mesh bounds.
    pub bone_based_floor: bool,

    /// Debug: skip the proportion pass.
    pub skip_adjust: bool,
    /// Debug: skip the overall height pass.
    pub skip_height_scaling: bool,
    /// Debug: skip the move-to-floor pass.
    pub skip_move_to_floor: bool,

    pub height_method: HeightMethod,
    pub arm_method: ArmMethod,
    pub upper_body_method: UpperBodyMethod,
}

impl Default for ScalingParameters {
    fn default() -> Self {
        Self {
            target_height: 1.61,
            upper_body_percentage: 44.0,
            custom_scale_ratio: DEFAULT_ARM_TO_HEIGHT_RATIO,
            arm_thickness: 50.0,
            leg_thickness: 50.0,
            thigh_percentage: 53.0,
            scale_hand: false,
            scale_foot: false,
            center_model: false,
            bone_based_floor: false,
            skip_adjust: false,
            skip_height_scaling: false,
            skip_move_to_floor: false,
            height_method: HeightMethod::Total,
            arm_method: ArmMethod::HeadToElbow,
            upper_body_method: UpperBodyMethod::default(),
        }
    }
}

/// Solved per-segment scale factors, all relative to the current pose.
#[derive(Copy, Clone, Debug)]
pub struct ScaleFactors {
    pub overall: f32,
    pub upper_body: f32,
    pub lower_body: f32,
    pub arm: f32,
    pub leg: f32,
    pub thigh: f32,
    pub shin: f32,
}

impl ScaleFactors {
    /// The applier refuses to touch the rig unless every factor is finite and
    /// positive.
    pub fn validate(&self) -> Result<(), Error> {
        for (name, value) in [
            ("overall", self.overall),
            ("upper body", self.upper_body),
            ("lower body", self.lower_body),
            ("arm", self.arm),
            ("leg", self.leg),
            ("thigh", self.thigh),
            ("shin", self.shin),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::NonFiniteScale {
                    factor: name,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Derives [`ScaleFactors`] from the rig's current measurements. Pure: the
/// rig is not mutated.
pub fn solve(rig: &Rig, params: &ScalingParameters) -> Result<ScaleFactors, Error> {
    if !params.target_height.is_finite() || params.target_height < MIN_TARGET_HEIGHT {
        return Err(Error::InvalidTarget {
            value: params.target_height,
        });
    }

    let floor = params.bone_based_floor;
    let current_height = rig.height_by_method(params.height_method, floor);
    if !(current_height > MIN_SEGMENT) {
        return Err(Error::DegenerateMeasurement {
            measurement: "current height",
        });
    }
    let overall = params.target_height / current_height;

    // Upper/lower split. The split is solved in the upper-body method's own
    // landmark basis: after scaling, the torso takes the requested share of
    // that basis height while the basis height itself still scales by the
    // overall factor, so the two segment factors recombine to the target.
    let share = (params.upper_body_percentage / 100.0).clamp(0.05, 0.95);
    let (upper_body, lower_body) = match rig.upper_body_split(params.upper_body_method, floor) {
        Some((upper, lower)) => {
            let basis = upper + lower;
            (
                share * basis * overall / upper,
                (1.0 - share) * basis * overall / lower,
            )
        }
        // Unsplittable torso: fall back to uniform scaling.
        None => (overall, overall),
    };

    // Arm scale comes straight from the calibration-ratio constraint, not
    // from the height split: the external IK system infers arm length from
    // ratio * (height - offset), so the scaled arm must land exactly there.
    let arm_length = rig.arm_by_method(params.arm_method);
    let arm = if arm_length > MIN_SEGMENT {
        let ratio = if params.custom_scale_ratio > 0.0 && params.custom_scale_ratio.is_finite() {
            params.custom_scale_ratio
        } else {
            DEFAULT_ARM_TO_HEIGHT_RATIO
        };
        ratio * (params.target_height - ARM_RATIO_HEIGHT_OFFSET) / arm_length
    } else {
        overall
    };

    // Legs inherit the lower-body factor, split so the knee lands at the
    // requested fraction of the new leg length.
    let leg = lower_body;
    let target_thigh = (params.thigh_percentage / 100.0).clamp(0.1, 0.9);
    let current_thigh = rig.thigh_percentage().clamp(0.1, 0.9);
    let thigh = leg * target_thigh / current_thigh;
    let shin = leg * (1.0 - target_thigh) / (1.0 - current_thigh);

    let factors = ScaleFactors {
        overall,
        upper_body,
        lower_body,
        arm,
        leg,
        thigh,
        shin,
    };
    factors.validate()?;

    debug!(
        "solved scales: overall {:.4}, upper {:.4}, lower {:.4}, arm {:.4}, thigh {:.4}, shin {:.4}",
        factors.overall, factors.upper_body, factors.lower_body, factors.arm, factors.thigh, factors.shin
    );
    Ok(factors)
}
