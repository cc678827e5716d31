//! JSON rig description loader.
//!
//! A rig document lists bones parent-before-child by name, with optional
//! humanoid identifiers and mesh bounds:
//!
//! ```json
//! {
//!   "bones": [
//!     { "name": "Armature" },
//!     { "name": "Hips", "parent": "Armature", "position": [0.0, 0.9, 0.0], "human": "Hips" }
//!   ],
//!   "meshBounds": { "min": [-0.4, 0.0, -0.15], "max": [0.4, 1.7, 0.15] }
//! }
//! ```

use crate::{BoneData, Error, HumanBone, MeshBounds, RigData};
use glam::{Quat, Vec3};
use serde::Deserialize;
use std::collections::HashMap;

fn default_rotation() -> [f32; 4] {
    [0.0, 0.0, 0.0, 1.0]
}

fn default_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

#[derive(Debug, Deserialize)]
struct Root {
    bones: Vec<BoneDef>,
    #[serde(rename = "meshBounds")]
    mesh_bounds: Option<MeshBoundsDef>,
}

#[derive(Debug, Deserialize)]
struct BoneDef {
    name: String,
    parent: Option<String>,
    #[serde(default)]
    position: [f32; 3],
    /// Quaternion `[x, y, z, w]`.
    #[serde(default = "default_rotation")]
    rotation: [f32; 4],
    #[serde(default = "default_scale")]
    scale: [f32; 3],
    /// Canonical humanoid identifier, e.g. `"LeftUpperArm"`.
    human: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MeshBoundsDef {
    min: [f32; 3],
    max: [f32; 3],
}

/// Parses a rig description document into [`RigData`].
pub fn load_rig_data(json: &str) -> Result<RigData, Error> {
    let root: Root = serde_json::from_str(json).map_err(|err| Error::JsonParse {
        message: err.to_string(),
    })?;

    let mut indices = HashMap::<String, usize>::new();
    let mut human_map = HashMap::<HumanBone, usize>::new();
    let mut human_names = HashMap::<HumanBone, String>::new();
    let mut bones = Vec::with_capacity(root.bones.len());

    for (index, def) in root.bones.into_iter().enumerate() {
        if indices.contains_key(&def.name) {
            return Err(Error::JsonDuplicateBone { name: def.name });
        }

        let parent = match &def.parent {
            None => None,
            Some(parent_name) => Some(*indices.get(parent_name).ok_or_else(|| {
                Error::JsonUnknownBoneParent {
                    bone: def.name.clone(),
                    parent: parent_name.clone(),
                }
            })?),
        };

        if let Some(human_name) = &def.human {
            let human = HumanBone::from_name(human_name).ok_or_else(|| {
                Error::JsonUnknownHumanBone {
                    bone: def.name.clone(),
                    value: human_name.clone(),
                }
            })?;
            if let Some(first) = human_names.get(&human) {
                return Err(Error::JsonDuplicateHumanBone {
                    human,
                    first: first.clone(),
                    second: def.name.clone(),
                });
            }
            human_names.insert(human, def.name.clone());
            human_map.insert(human, index);
        }

        indices.insert(def.name.clone(), index);
        bones.push(BoneData {
            name: def.name,
            parent,
            position: Vec3::from_array(def.position),
            rotation: Quat::from_xyzw(
                def.rotation[0],
                def.rotation[1],
                def.rotation[2],
                def.rotation[3],
            ),
            scale: Vec3::from_array(def.scale),
        });
    }

    let mesh_bounds = root.mesh_bounds.map(|b| MeshBounds {
        min: Vec3::from_array(b.min),
        max: Vec3::from_array(b.max),
    });

    Ok(RigData {
        bones,
        human_map,
        mesh_bounds,
    })
}
