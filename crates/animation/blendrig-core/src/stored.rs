//! Stored blend-tree definition format (JSON).
//!
//! Public API: parse a JSON document of named blend-tree definitions into a
//! [`MotionLibrary`], returning the name -> id map for the registered trees.
//!
//! Notes:
//! - Definitions are processed in declaration order; a nested `blendTree`
//!   reference must name an earlier definition in the same document.
//! - `speed` defaults to 1.0 when omitted.
//! - An empty `motions` list is rejected here: the builder would yield no
//!   asset, and a named definition that silently vanished would be confusing.

use hashbrown::HashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::blend_tree::{BlendTree1D, BlendTreeMotionData, Motion};
use crate::ids::BlendTreeId;
use crate::library::{LibraryError, MotionLibrary};

/// Errors produced while loading stored blend-tree definitions.
#[derive(Debug, Error)]
pub enum StoredError {
    #[error("blend tree definition parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("blend tree '{0}' is defined more than once")]
    DuplicateName(String),
    #[error("blend tree '{tree}' has no motions")]
    EmptyMotions { tree: String },
    #[error("blend tree '{tree}' references unknown blend tree '{reference}'")]
    UnknownBlendTree { tree: String, reference: String },
    #[error("failed to register blend tree '{tree}': {source}")]
    Register {
        tree: String,
        #[source]
        source: LibraryError,
    },
}

#[derive(Debug, Deserialize)]
struct StoredSet {
    #[serde(rename = "blendTrees")]
    blend_trees: Vec<StoredBlendTree>,
}

#[derive(Debug, Deserialize)]
struct StoredBlendTree {
    name: String,
    motions: Vec<StoredMotion>,
}

#[derive(Debug, Deserialize)]
struct StoredMotion {
    threshold: f32,
    #[serde(default = "default_speed")]
    speed: f32,
    #[serde(flatten)]
    target: StoredTarget,
}

#[derive(Debug, Deserialize)]
enum StoredTarget {
    #[serde(rename = "clip")]
    Clip(String),
    #[serde(rename = "blendTree")]
    BlendTree(String),
}

fn default_speed() -> f32 {
    1.0
}

/// Parse a `{ "blendTrees": [...] }` document and register every definition
/// into `lib`, returning the name -> id map.
pub fn parse_blend_tree_set_json(
    s: &str,
    lib: &mut MotionLibrary,
) -> Result<HashMap<String, BlendTreeId>, StoredError> {
    let set: StoredSet = serde_json::from_str(s)?;

    let mut by_name: HashMap<String, BlendTreeId> = HashMap::with_capacity(set.blend_trees.len());
    for def in set.blend_trees {
        if by_name.contains_key(&def.name) {
            return Err(StoredError::DuplicateName(def.name));
        }

        let mut entries: Vec<BlendTreeMotionData> = Vec::with_capacity(def.motions.len());
        for m in def.motions {
            let motion = match &m.target {
                StoredTarget::Clip(name) => Motion::Clip(lib.clip(name)),
                StoredTarget::BlendTree(name) => {
                    let id = by_name.get(name).copied().ok_or_else(|| {
                        StoredError::UnknownBlendTree {
                            tree: def.name.clone(),
                            reference: name.clone(),
                        }
                    })?;
                    Motion::BlendTree(id)
                }
            };
            entries.push(BlendTreeMotionData {
                threshold: m.threshold,
                speed: m.speed,
                motion,
            });
        }

        let tree = BlendTree1D::build(entries)
            .ok_or_else(|| StoredError::EmptyMotions {
                tree: def.name.clone(),
            })?;
        // Nested references were resolved against by_name above, so
        // registration only fails if the library invariant is broken.
        let id = lib.add_blend_tree(tree).map_err(|source| StoredError::Register {
            tree: def.name.clone(),
            source,
        })?;
        by_name.insert(def.name, id);
    }
    Ok(by_name)
}
