use crate::{Error, HumanBone, MeshBounds, RigData};
use glam::{Affine3A, Quat, Vec3};
use std::sync::Arc;

/// Handle to a bone inside one [`Rig`].
///
/// Only valid for the rig it was obtained from; handles are plain indices and
/// must not be carried across rigs.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BoneId(pub(crate) usize);

#[derive(Clone, Debug)]
pub struct Bone {
    data_index: usize,
    parent: Option<usize>,

    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Bone {
    pub fn data_index(&self) -> usize {
        self.data_index
    }

    pub fn parent_index(&self) -> Option<usize> {
        self.parent
    }
}

/// Live skeleton instance over an immutable [`RigData`].
///
/// World transforms are composed parent-down on demand, so reads always see
/// the effect of preceding local writes. All mutation is through the explicit
/// setters; the rig assumes exclusive access for the duration of a
/// measure/solve/apply cycle.
#[derive(Clone, Debug)]
pub struct Rig {
    pub data: Arc<RigData>,
    pub bones: Vec<Bone>,
    bone_children: Vec<Vec<usize>>,
    root: usize,
}

impl Rig {
    /// Bones must be ordered parent-before-child and contain exactly one
    /// parentless root.
    pub fn new(data: Arc<RigData>) -> Result<Self, Error> {
        let mut root = None;
        for (index, bone) in data.bones.iter().enumerate() {
            match bone.parent {
                None => {
                    if root.is_some() {
                        return Err(Error::AmbiguousRoot { count: 2 });
                    }
                    root = Some(index);
                }
                Some(parent) => {
                    if parent >= index {
                        return Err(Error::InvalidBoneParent {
                            bone: bone.name.clone(),
                            parent,
                        });
                    }
                }
            }
        }
        let Some(root) = root else {
            return Err(Error::AmbiguousRoot { count: 0 });
        };

        for (&human, &index) in &data.human_map {
            if index >= data.bones.len() {
                return Err(Error::InvalidHumanMapping { bone: human, index });
            }
        }

        let bones = data
            .bones
            .iter()
            .enumerate()
            .map(|(data_index, bone)| Bone {
                data_index,
                parent: bone.parent,
                position: bone.position,
                rotation: bone.rotation,
                scale: bone.scale,
            })
            .collect::<Vec<_>>();

        let mut bone_children = vec![Vec::new(); bones.len()];
        for (index, bone) in bones.iter().enumerate() {
            if let Some(parent) = bone.parent {
                bone_children[parent].push(index);
            }
        }

        Ok(Self {
            data,
            bones,
            bone_children,
            root,
        })
    }

    pub fn root(&self) -> BoneId {
        BoneId(self.root)
    }

    /// Resolves a canonical humanoid bone. Missing bones yield `None`; the
    /// measurement layer degrades instead of failing.
    pub fn bone(&self, bone: HumanBone) -> Option<BoneId> {
        self.data.human_map.get(&bone).copied().map(BoneId)
    }

    pub fn bone_by_name(&self, name: &str) -> Option<BoneId> {
        self.data
            .bones
            .iter()
            .position(|b| b.name == name)
            .map(BoneId)
    }

    pub fn bone_name(&self, id: BoneId) -> &str {
        &self.data.bones[id.0].name
    }

    pub fn children(&self, id: BoneId) -> impl Iterator<Item = BoneId> + '_ {
        self.bone_children[id.0].iter().copied().map(BoneId)
    }

    fn local_affine(&self, index: usize) -> Affine3A {
        let bone = &self.bones[index];
        Affine3A::from_scale_rotation_translation(bone.scale, bone.rotation, bone.position)
    }

    pub fn world_transform(&self, id: BoneId) -> Affine3A {
        let mut chain = Vec::new();
        let mut cur = Some(id.0);
        while let Some(index) = cur {
            chain.push(index);
            cur = self.bones[index].parent;
        }
        let mut world = Affine3A::IDENTITY;
        for index in chain.into_iter().rev() {
            world *= self.local_affine(index);
        }
        world
    }

    pub fn world_position(&self, id: BoneId) -> Vec3 {
        self.world_transform(id).translation.into()
    }

    pub fn local_position(&self, id: BoneId) -> Vec3 {
        self.bones[id.0].position
    }

    pub fn local_rotation(&self, id: BoneId) -> Quat {
        self.bones[id.0].rotation
    }

    pub fn local_scale(&self, id: BoneId) -> Vec3 {
        self.bones[id.0].scale
    }

    pub fn set_local_position(&mut self, id: BoneId, position: Vec3) {
        self.bones[id.0].position = position;
    }

    pub fn set_local_rotation(&mut self, id: BoneId, rotation: Quat) {
        self.bones[id.0].rotation = rotation;
    }

    pub fn set_local_scale(&mut self, id: BoneId, scale: Vec3) {
        self.bones[id.0].scale = scale;
    }

    /// Moves a bone to a world-space position by solving the new local
    /// position through the parent's inverse world transform. Children follow
    /// the bone, as in any transform hierarchy.
    pub fn set_world_position(&mut self, id: BoneId, position: Vec3) {
        let local = match self.bones[id.0].parent {
            Some(parent) => self
                .world_transform(BoneId(parent))
                .inverse()
                .transform_point3(position),
            None => position,
        };
        self.bones[id.0].position = local;
    }

    /// Resets every bone to the rest pose described by the rig data.
    pub fn set_to_rest_pose(&mut self) {
        for (index, bone) in self.bones.iter_mut().enumerate() {
            let data = &self.data.bones[index];
            bone.position = data.position;
            bone.rotation = data.rotation;
            bone.scale = data.scale;
        }
    }

    /// Mesh bounds carried to world space through the root transform.
    ///
    /// The bounds are static data: they follow root moves and root scale but
    /// not bone-level proportion edits, which is why the apply pipeline
    /// measures extents from bones.
    pub fn mesh_bounds_world(&self) -> Option<MeshBounds> {
        let bounds = self.data.mesh_bounds?;
        let world = self.world_transform(self.root());
        let mut min = Vec3::INFINITY;
        let mut max = Vec3::NEG_INFINITY;
        for ix in [bounds.min.x, bounds.max.x] {
            for iy in [bounds.min.y, bounds.max.y] {
                for iz in [bounds.min.z, bounds.max.z] {
                    let corner = world.transform_point3(Vec3::new(ix, iy, iz));
                    min = min.min(corner);
                    max = max.max(corner);
                }
            }
        }
        Some(MeshBounds { min, max })
    }

    /// Index of the local axis running along the limb from `bone` toward
    /// `child`: the dominant component of the child's local offset. Defaults
    /// to Y for degenerate offsets.
    pub(crate) fn limb_axis(&self, bone: BoneId, child: HumanBone) -> usize {
        let Some(child) = self.bone(child) else {
            return 1;
        };
        if self.bones[child.0].parent != Some(bone.0) {
            return 1;
        }
        let offset = self.bones[child.0].position.abs();
        if offset.max_element() <= f32::EPSILON {
            return 1;
        }
        if offset.x >= offset.y && offset.x >= offset.z {
            0
        } else if offset.y >= offset.z {
            1
        } else {
            2
        }
    }
}
