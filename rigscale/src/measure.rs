//! Scalar body measurements over a [`Rig`].
//!
//! Every query is total: a missing optional bone degrades the measurement to
//! the documented fallback instead of failing, so a caller (diagnostic UI,
//! solver) can always read a number. Distances are meters, ratios unitless.

use crate::bones::{HumanBone, Side};
use crate::rig::{BoneId, Rig};
use crate::solve::{ArmMethod, HeightMethod, UpperBodyMethod};
use glam::Vec3;

/// Default arm-to-height calibration ratio used when a measurement cannot be
/// taken. Matches the host IK system's stock value.
pub const DEFAULT_ARM_TO_HEIGHT_RATIO: f32 = 0.4537;

/// Constant subtracted from the height before dividing an arm length by it,
/// mirroring the host IK system's own ratio formula.
pub const ARM_RATIO_HEIGHT_OFFSET: f32 = 0.005;

/// Head-bone-to-crown estimate used when neither mesh bounds nor a neck bone
/// are available.
const DEFAULT_HEAD_EXTENT: f32 = 0.12;

const MIN_SEGMENT: f32 = 1.0e-5;

impl Rig {
    fn world_point(&self, bone: HumanBone) -> Option<Vec3> {
        self.bone(bone).map(|id| self.world_position(id))
    }

    fn world_y(&self, bone: HumanBone) -> Option<f32> {
        self.world_point(bone).map(|p| p.y)
    }

    /// Averages a per-side measurement over whichever sides resolve.
    fn side_average(&self, f: impl Fn(Side) -> Option<f32>) -> Option<f32> {
        let mut sum = 0.0;
        let mut count = 0u32;
        for side in Side::BOTH {
            if let Some(value) = f(side) {
                sum += value;
                count += 1;
            }
        }
        (count > 0).then(|| sum / count as f32)
    }

    /// Estimated world Y of the top of the head: head bone plus the neck→head
    /// segment mirrored above the head bone.
    fn crown_height(&self) -> Option<f32> {
        let head = self.world_y(HumanBone::Head)?;
        match self.world_y(HumanBone::Neck) {
            Some(neck) if head > neck => Some(head + (head - neck)),
            _ => Some(head + DEFAULT_HEAD_EXTENT),
        }
    }

    /// Average world Y of the upper-leg heads; the hips when no legs exist.
    fn leg_top_y(&self) -> Option<f32> {
        self.side_average(|side| self.world_y(side.upper_leg()))
            .or_else(|| self.world_y(HumanBone::Hips))
    }

    /// World Y of the lowest character point.
    ///
    /// Mesh bounds when present and `bone_floor` is off; otherwise the lowest
    /// toe or foot bone. Meshes and toe bones can disagree near the floor
    /// (platform shoes, heels), which is why the convention is selectable.
    pub fn lowest_point(&self, bone_floor: bool) -> f32 {
        if !bone_floor {
            if let Some(bounds) = self.mesh_bounds_world() {
                return bounds.min.y;
            }
        }
        let mut lowest = f32::INFINITY;
        for side in Side::BOTH {
            for bone in [side.toes(), side.foot()] {
                if let Some(y) = self.world_y(bone) {
                    lowest = lowest.min(y);
                }
            }
        }
        if lowest.is_finite() {
            lowest
        } else {
            self.world_position(self.root()).y
        }
    }

    /// World Y of the highest character point: mesh bounds when present and
    /// `bone_floor` is off, otherwise the crown estimate.
    pub fn highest_point(&self, bone_floor: bool) -> f32 {
        if !bone_floor {
            if let Some(bounds) = self.mesh_bounds_world() {
                return bounds.max.y;
            }
        }
        self.crown_height()
            .unwrap_or_else(|| self.world_position(self.root()).y)
    }

    /// World Y of the eye landmark: the two-eye average, or an estimate
    /// halfway between the head bone and the crown.
    pub fn eye_height(&self) -> f32 {
        if let Some(y) = self.side_average(|side| self.world_y(side.eye())) {
            return y;
        }
        match (self.world_y(HumanBone::Head), self.crown_height()) {
            (Some(head), Some(crown)) => head + (crown - head) * 0.5,
            _ => self.highest_point(true) - DEFAULT_HEAD_EXTENT * 0.5,
        }
    }

    fn fingertip(&self, side: Side) -> Option<Vec3> {
        let anchor = self
            .world_point(side.hand())
            .or_else(|| self.world_point(side.lower_arm()))?;
        let mut best: Option<(f32, Vec3)> = None;
        for chain in side.fingers() {
            // Deepest present bone of the chain approximates the tip.
            let Some(tip) = chain
                .iter()
                .rev()
                .find_map(|&bone| self.world_point(bone))
            else {
                continue;
            };
            let reach = anchor.distance(tip);
            if best.map(|(b, _)| reach > b).unwrap_or(true) {
                best = Some((reach, tip));
            }
        }
        best.map(|(_, tip)| tip).or(Some(anchor))
    }

    fn side_distance(
        &self,
        from: impl Fn(Side) -> Option<Vec3>,
        to: impl Fn(Side) -> Option<Vec3>,
    ) -> f32 {
        self.side_average(|side| Some(from(side)?.distance(to(side)?)))
            .unwrap_or(0.0)
    }

    /// Midline landmark at shoulder height: torso X/Z, upper-arm Y.
    fn center_point(&self, side: Side) -> Option<Vec3> {
        let torso = self
            .world_point(HumanBone::Chest)
            .or_else(|| self.world_point(HumanBone::Spine))
            .or_else(|| self.world_point(HumanBone::Hips))?;
        let y = self
            .world_y(side.upper_arm())
            .unwrap_or(torso.y);
        Some(Vec3::new(torso.x, y, torso.z))
    }

    pub fn head_to_elbow(&self) -> f32 {
        self.side_distance(
            |_| self.world_point(HumanBone::Head),
            |side| self.world_point(side.lower_arm()),
        )
    }

    pub fn head_to_wrist(&self) -> f32 {
        self.side_distance(
            |_| self.world_point(HumanBone::Head),
            |side| self.world_point(side.hand()),
        )
    }

    /// Shoulder (upper-arm head) to wrist.
    pub fn arm_length(&self) -> f32 {
        self.side_distance(
            |side| self.world_point(side.upper_arm()),
            |side| self.world_point(side.hand()),
        )
    }

    pub fn shoulder_to_fingertip(&self) -> f32 {
        self.side_distance(
            |side| self.world_point(side.upper_arm()),
            |side| self.fingertip(side),
        )
    }

    pub fn center_to_hand(&self) -> f32 {
        self.side_distance(
            |side| self.center_point(side),
            |side| self.world_point(side.hand()),
        )
    }

    pub fn center_to_fingertip(&self) -> f32 {
        self.side_distance(
            |side| self.center_point(side),
            |side| self.fingertip(side),
        )
    }

    /// Full wingspan, a diagnostic measurement only.
    pub fn fingertip_to_fingertip(&self) -> f32 {
        match (self.fingertip(Side::Left), self.fingertip(Side::Right)) {
            (Some(left), Some(right)) => left.distance(right),
            _ => 0.0,
        }
    }

    /// Upper-leg head to neck, the torso segment of the modern upper-body
    /// split.
    pub fn upper_body_length(&self) -> f32 {
        match (self.world_y(HumanBone::Neck), self.leg_top_y()) {
            (Some(neck), Some(leg)) => (neck - leg).max(0.0),
            _ => 0.0,
        }
    }

    pub fn floor_to_neck_height(&self, bone_floor: bool) -> f32 {
        self.world_y(HumanBone::Neck)
            .map(|neck| neck - self.lowest_point(bone_floor))
            .unwrap_or(0.0)
    }

    pub fn floor_to_head_height(&self, bone_floor: bool) -> f32 {
        self.world_y(HumanBone::Head)
            .map(|head| head - self.lowest_point(bone_floor))
            .unwrap_or(0.0)
    }

    /// Legacy upper-body heuristic: leg→eye over floor→eye.
    pub fn upper_body_portion_legacy(&self, bone_floor: bool) -> f32 {
        let eye = self.eye_height();
        let floor_to_eye = eye - self.lowest_point(bone_floor);
        let Some(leg) = self.leg_top_y() else {
            return 0.0;
        };
        if floor_to_eye <= MIN_SEGMENT {
            return 0.0;
        }
        (eye - leg) / floor_to_eye
    }

    /// Modern upper-body split: leg→{neck|head} over floor→{neck|head}. The
    /// numerator and denominator landmark are selected independently.
    pub fn upper_body_ratio(&self, height_to_neck: bool, torso_to_neck: bool, bone_floor: bool) -> f32 {
        let landmark = |to_neck: bool| {
            if to_neck {
                self.world_y(HumanBone::Neck)
                    .or_else(|| self.world_y(HumanBone::Head))
            } else {
                self.world_y(HumanBone::Head)
                    .or_else(|| self.world_y(HumanBone::Neck))
            }
        };
        let (Some(height_mark), Some(torso_mark), Some(leg)) =
            (landmark(height_to_neck), landmark(torso_to_neck), self.leg_top_y())
        else {
            return 0.0;
        };
        let denominator = height_mark - self.lowest_point(bone_floor);
        if denominator <= MIN_SEGMENT {
            return 0.0;
        }
        (torso_mark - leg) / denominator
    }

    pub fn upper_body_ratio_by_method(&self, method: UpperBodyMethod, bone_floor: bool) -> f32 {
        match method {
            UpperBodyMethod::Legacy => self.upper_body_portion_legacy(bone_floor),
            UpperBodyMethod::Ratio {
                height_to_neck,
                torso_to_neck,
            } => self.upper_body_ratio(height_to_neck, torso_to_neck, bone_floor),
        }
    }

    /// Upper and lower segment lengths backing the selected upper-body split:
    /// `(torso, floor→leg-top)` in the method's own landmark basis. `None`
    /// when either segment degenerates.
    pub(crate) fn upper_body_split(
        &self,
        method: UpperBodyMethod,
        bone_floor: bool,
    ) -> Option<(f32, f32)> {
        let lowest = self.lowest_point(bone_floor);
        let leg = self.leg_top_y()?;
        let mark = match method {
            UpperBodyMethod::Legacy => self.eye_height(),
            UpperBodyMethod::Ratio { torso_to_neck, .. } => {
                if torso_to_neck {
                    self.world_y(HumanBone::Neck)?
                } else {
                    self.world_y(HumanBone::Head)?
                }
            }
        };
        let upper = mark - leg;
        let lower = leg - lowest;
        (upper > MIN_SEGMENT && lower > MIN_SEGMENT).then_some((upper, lower))
    }

    /// Upper-leg length over total leg length, averaged between sides.
    /// Falls back to an even split when the legs cannot be measured.
    pub fn thigh_percentage(&self) -> f32 {
        self.side_average(|side| {
            let hip = self.world_point(side.upper_leg())?;
            let knee = self.world_point(side.lower_leg())?;
            let ankle = self.world_point(side.foot())?;
            let thigh = hip.distance(knee);
            let leg = thigh + knee.distance(ankle);
            (leg > MIN_SEGMENT).then(|| thigh / leg)
        })
        .unwrap_or(0.5)
    }

    fn limb_thickness(&self, bone: HumanBone, toward: HumanBone) -> Option<f32> {
        let id = self.bone(bone)?;
        let axis = self.limb_axis(id, toward);
        let scale = self.local_scale(id);
        let mut cross = 0.0;
        for component in 0..3 {
            if component != axis {
                cross += scale[component];
            }
        }
        Some(cross / 2.0)
    }

    /// Current arm thickness relative to the rest scale of 1: the mean local
    /// scale on the upper arm's two cross axes.
    pub fn current_arm_thickness(&self) -> f32 {
        self.side_average(|side| self.limb_thickness(side.upper_arm(), side.lower_arm()))
            .unwrap_or(1.0)
    }

    pub fn current_leg_thickness(&self) -> f32 {
        self.side_average(|side| self.limb_thickness(side.upper_leg(), side.lower_leg()))
            .unwrap_or(1.0)
    }

    pub fn height_by_method(&self, method: HeightMethod, bone_floor: bool) -> f32 {
        match method {
            HeightMethod::Total => self.highest_point(bone_floor) - self.lowest_point(bone_floor),
            HeightMethod::Eye => self.eye_height() - self.lowest_point(bone_floor),
        }
    }

    pub fn arm_by_method(&self, method: ArmMethod) -> f32 {
        match method {
            ArmMethod::HeadToElbow => self.head_to_elbow(),
            ArmMethod::HeadToHand => self.head_to_wrist(),
            ArmMethod::ArmLength => self.arm_length(),
            ArmMethod::ShoulderToFingertip => self.shoulder_to_fingertip(),
            ArmMethod::CenterToHand => self.center_to_hand(),
            ArmMethod::CenterToFingertip => self.center_to_fingertip(),
        }
    }

    /// Arm-to-height calibration ratio as the host IK system would compute it
    /// from the current pose, with the stock ratio as fallback.
    pub fn current_scale_ratio(
        &self,
        arm_method: ArmMethod,
        height_method: HeightMethod,
        bone_floor: bool,
    ) -> f32 {
        let arm = self.arm_by_method(arm_method);
        let height = self.height_by_method(height_method, bone_floor);
        if height > ARM_RATIO_HEIGHT_OFFSET + MIN_SEGMENT && arm > MIN_SEGMENT {
            arm / (height - ARM_RATIO_HEIGHT_OFFSET)
        } else {
            DEFAULT_ARM_TO_HEIGHT_RATIO
        }
    }

    pub(crate) fn required_bone(&self, bone: HumanBone) -> Result<BoneId, crate::Error> {
        self.bone(bone)
            .ok_or(crate::Error::MissingRequiredBone { bone })
    }
}
