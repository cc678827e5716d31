//! Canonical humanoid bone identifiers.
//!
//! The vocabulary follows the Unity `HumanBodyBones` naming that humanoid
//! rig providers map their transforms onto. A rig is not required to map
//! every identifier; only [`HumanBone::Hips`] is unconditionally required.

/// Canonical humanoid bone identifier.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HumanBone {
    Hips,
    Spine,
    Chest,
    UpperChest,
    Neck,
    Head,
    Jaw,
    LeftEye,
    RightEye,

    LeftShoulder,
    RightShoulder,
    LeftUpperArm,
    RightUpperArm,
    LeftLowerArm,
    RightLowerArm,
    LeftHand,
    RightHand,

    LeftUpperLeg,
    RightUpperLeg,
    LeftLowerLeg,
    RightLowerLeg,
    LeftFoot,
    RightFoot,
    LeftToes,
    RightToes,

    LeftThumbProximal,
    LeftThumbIntermediate,
    LeftThumbDistal,
    LeftIndexProximal,
    LeftIndexIntermediate,
    LeftIndexDistal,
    LeftMiddleProximal,
    LeftMiddleIntermediate,
    LeftMiddleDistal,
    LeftRingProximal,
    LeftRingIntermediate,
    LeftRingDistal,
    LeftLittleProximal,
    LeftLittleIntermediate,
    LeftLittleDistal,

    RightThumbProximal,
    RightThumbIntermediate,
    RightThumbDistal,
    RightIndexProximal,
    RightIndexIntermediate,
    RightIndexDistal,
    RightMiddleProximal,
    RightMiddleIntermediate,
    RightMiddleDistal,
    RightRingProximal,
    RightRingIntermediate,
    RightRingDistal,
    RightLittleProximal,
    RightLittleIntermediate,
    RightLittleDistal,
}

impl HumanBone {
    pub fn name(self) -> &'static str {
        match self {
            Self::Hips => "Hips",
            Self::Spine => "Spine",
            Self::Chest => "Chest",
            Self::UpperChest => "UpperChest",
            Self::Neck => "Neck",
            Self::Head => "Head",
            Self::Jaw => "Jaw",
            Self::LeftEye => "LeftEye",
            Self::RightEye => "RightEye",
            Self::LeftShoulder => "LeftShoulder",
            Self::RightShoulder => "RightShoulder",
            Self::LeftUpperArm => "LeftUpperArm",
            Self::RightUpperArm => "RightUpperArm",
            Self::LeftLowerArm => "LeftLowerArm",
            Self::RightLowerArm => "RightLowerArm",
            Self::LeftHand => "LeftHand",
            Self::RightHand => "RightHand",
            Self::LeftUpperLeg => "LeftUpperLeg",
            Self::RightUpperLeg => "RightUpperLeg",
            Self::LeftLowerLeg => "LeftLowerLeg",
            Self::RightLowerLeg => "RightLowerLeg",
            Self::LeftFoot => "LeftFoot",
            Self::RightFoot => "RightFoot",
            Self::LeftToes => "LeftToes",
            Self::RightToes => "RightToes",
            Self::LeftThumbProximal => "LeftThumbProximal",
            Self::LeftThumbIntermediate => "LeftThumbIntermediate",
            Self::LeftThumbDistal => "LeftThumbDistal",
            Self::LeftIndexProximal => "LeftIndexProximal",
            Self::LeftIndexIntermediate => "LeftIndexIntermediate",
            Self::LeftIndexDistal => "LeftIndexDistal",
            Self::LeftMiddleProximal => "LeftMiddleProximal",
            Self::LeftMiddleIntermediate => "LeftMiddleIntermediate",
            Self::LeftMiddleDistal => "LeftMiddleDistal",
            Self::LeftRingProximal => "LeftRingProximal",
            Self::LeftRingIntermediate => "LeftRingIntermediate",
            Self::LeftRingDistal => "LeftRingDistal",
            Self::LeftLittleProximal => "LeftLittleProximal",
            Self::LeftLittleIntermediate => "LeftLittleIntermediate",
            Self::LeftLittleDistal => "LeftLittleDistal",
            Self::RightThumbProximal => "RightThumbProximal",
            Self::RightThumbIntermediate => "RightThumbIntermediate",
            Self::RightThumbDistal => "RightThumbDistal",
            Self::RightIndexProximal => "RightIndexProximal",
            Self::RightIndexIntermediate => "RightIndexIntermediate",
            Self::RightIndexDistal => "RightIndexDistal",
            Self::RightMiddleProximal => "RightMiddleProximal",
            Self::RightMiddleIntermediate => "RightMiddleIntermediate",
            Self::RightMiddleDistal => "RightMiddleDistal",
            Self::RightRingProximal => "RightRingProximal",
            Self::RightRingIntermediate => "RightRingIntermediate",
            Self::RightRingDistal => "RightRingDistal",
            Self::RightLittleProximal => "RightLittleProximal",
            Self::RightLittleIntermediate => "RightLittleIntermediate",
            Self::RightLittleDistal => "RightLittleDistal",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "Hips" => Self::Hips,
            "Spine" => Self::Spine,
            "Chest" => Self::Chest,
            "UpperChest" => Self::UpperChest,
            "Neck" => Self::Neck,
            "Head" => Self::Head,
            "Jaw" => Self::Jaw,
            "LeftEye" => Self::LeftEye,
            "RightEye" => Self::RightEye,
            "LeftShoulder" => Self::LeftShoulder,
            "RightShoulder" => Self::RightShoulder,
            "LeftUpperArm" => Self::LeftUpperArm,
            "RightUpperArm" => Self::RightUpperArm,
            "LeftLowerArm" => Self::LeftLowerArm,
            "RightLowerArm" => Self::RightLowerArm,
            "LeftHand" => Self::LeftHand,
            "RightHand" => Self::RightHand,
            "LeftUpperLeg" => Self::LeftUpperLeg,
            "RightUpperLeg" => Self::RightUpperLeg,
            "LeftLowerLeg" => Self::LeftLowerLeg,
            "RightLowerLeg" => Self::RightLowerLeg,
            "LeftFoot" => Self::LeftFoot,
            "RightFoot" => Self::RightFoot,
            "LeftToes" => Self::LeftToes,
            "RightToes" => Self::RightToes,
            "LeftThumbProximal" => Self::LeftThumbProximal,
            "LeftThumbIntermediate" => Self::LeftThumbIntermediate,
            "LeftThumbDistal" => Self::LeftThumbDistal,
            "LeftIndexProximal" => Self::LeftIndexProximal,
            "LeftIndexIntermediate" => Self::LeftIndexIntermediate,
            "LeftIndexDistal" => Self::LeftIndexDistal,
            "LeftMiddleProximal" => Self::LeftMiddleProximal,
            "LeftMiddleIntermediate" => Self::LeftMiddleIntermediate,
            "LeftMiddleDistal" => Self::LeftMiddleDistal,
            "LeftRingProximal" => Self::LeftRingProximal,
            "LeftRingIntermediate" => Self::LeftRingIntermediate,
            "LeftRingDistal" => Self::LeftRingDistal,
            "LeftLittleProximal" => Self::LeftLittleProximal,
            "LeftLittleIntermediate" => Self::LeftLittleIntermediate,
            "LeftLittleDistal" => Self::LeftLittleDistal,
            "RightThumbProximal" => Self::RightThumbProximal,
            "RightThumbIntermediate" => Self::RightThumbIntermediate,
            "RightThumbDistal" => Self::RightThumbDistal,
            "RightIndexProximal" => Self::RightIndexProximal,
            "RightIndexIntermediate" => Self::RightIndexIntermediate,
            "RightIndexDistal" => Self::RightIndexDistal,
            "RightMiddleProximal" => Self::RightMiddleProximal,
            "RightMiddleIntermediate" => Self::RightMiddleIntermediate,
            "RightMiddleDistal" => Self::RightMiddleDistal,
            "RightRingProximal" => Self::RightRingProximal,
            "RightRingIntermediate" => Self::RightRingIntermediate,
            "RightRingDistal" => Self::RightRingDistal,
            "RightLittleProximal" => Self::RightLittleProximal,
            "RightLittleIntermediate" => Self::RightLittleIntermediate,
            "RightLittleDistal" => Self::RightLittleDistal,
            _ => return None,
        })
    }
}

/// Body side selector for paired limb bones.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn eye(self) -> HumanBone {
        match self {
            Side::Left => HumanBone::LeftEye,
            Side::Right => HumanBone::RightEye,
        }
    }

    pub fn shoulder(self) -> HumanBone {
        match self {
            Side::Left => HumanBone::LeftShoulder,
            Side::Right => HumanBone::RightShoulder,
        }
    }

    pub fn upper_arm(self) -> HumanBone {
        match self {
            Side::Left => HumanBone::LeftUpperArm,
            Side::Right => HumanBone::RightUpperArm,
        }
    }

    pub fn lower_arm(self) -> HumanBone {
        match self {
            Side::Left => HumanBone::LeftLowerArm,
            Side::Right => HumanBone::RightLowerArm,
        }
    }

    pub fn hand(self) -> HumanBone {
        match self {
            Side::Left => HumanBone::LeftHand,
            Side::Right => HumanBone::RightHand,
        }
    }

    pub fn upper_leg(self) -> HumanBone {
        match self {
            Side::Left => HumanBone::LeftUpperLeg,
            Side::Right => HumanBone::RightUpperLeg,
        }
    }

    pub fn lower_leg(self) -> HumanBone {
        match self {
            Side::Left => HumanBone::LeftLowerLeg,
            Side::Right => HumanBone::RightLowerLeg,
        }
    }

    pub fn foot(self) -> HumanBone {
        match self {
            Side::Left => HumanBone::LeftFoot,
            Side::Right => HumanBone::RightFoot,
        }
    }

    pub fn toes(self) -> HumanBone {
        match self {
            Side::Left => HumanBone::LeftToes,
            Side::Right => HumanBone::RightToes,
        }
    }

    /// Finger chains for this side, thumb first, each proximal → distal.
    pub fn fingers(self) -> [[HumanBone; 3]; 5] {
        match self {
            Side::Left => [
                [
                    HumanBone::LeftThumbProximal,
                    HumanBone::LeftThumbIntermediate,
                    HumanBone::LeftThumbDistal,
                ],
                [
                    HumanBone::LeftIndexProximal,
                    HumanBone::LeftIndexIntermediate,
                    HumanBone::LeftIndexDistal,
                ],
                [
                    HumanBone::LeftMiddleProximal,
                    HumanBone::LeftMiddleIntermediate,
                    HumanBone::LeftMiddleDistal,
                ],
                [
                    HumanBone::LeftRingProximal,
                    HumanBone::LeftRingIntermediate,
                    HumanBone::LeftRingDistal,
                ],
                [
                    HumanBone::LeftLittleProximal,
                    HumanBone::LeftLittleIntermediate,
                    HumanBone::LeftLittleDistal,
                ],
            ],
            Side::Right => [
                [
                    HumanBone::RightThumbProximal,
                    HumanBone::RightThumbIntermediate,
                    HumanBone::RightThumbDistal,
                ],
                [
                    HumanBone::RightIndexProximal,
                    HumanBone::RightIndexIntermediate,
                    HumanBone::RightIndexDistal,
                ],
                [
                    HumanBone::RightMiddleProximal,
                    HumanBone::RightMiddleIntermediate,
                    HumanBone::RightMiddleDistal,
                ],
                [
                    HumanBone::RightRingProximal,
                    HumanBone::RightRingIntermediate,
                    HumanBone::RightRingDistal,
                ],
                [
                    HumanBone::RightLittleProximal,
                    HumanBone::RightLittleIntermediate,
                    HumanBone::RightLittleDistal,
                ],
            ],
        }
    }
}
