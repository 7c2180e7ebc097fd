//! Motion library: ownership of named clips and built blend-tree assets.
//!
//! Clips are interned by name to dense `ClipId`s; blend trees are registered
//! after build and referenced by `BlendTreeId`. Registration validates nested
//! references against already-registered trees, so the library can never hold
//! a reference cycle and recursive flattening terminates.

use hashbrown::HashMap;
use thiserror::Error;

use crate::blend_tree::{BlendTree1D, Motion};
use crate::ids::{BlendTreeId, ClipId};

/// Errors produced while registering assets into the library.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("blend tree references unregistered nested tree {0:?}")]
    UnknownNestedTree(BlendTreeId),
}

/// Owns clips (by name) and built blend trees.
///
/// Handles are issued here, in registration order, so they stay dense per
/// library and the numeric values never collide within one id space.
#[derive(Default, Debug)]
pub struct MotionLibrary {
    next_clip: u32,
    next_tree: u32,
    clips: HashMap<String, ClipId>,
    trees: Vec<(BlendTreeId, BlendTree1D)>,
}

impl MotionLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a clip name, returning the existing id if already registered.
    pub fn clip(&mut self, name: &str) -> ClipId {
        if let Some(id) = self.clips.get(name) {
            return *id;
        }
        let id = ClipId(self.next_clip);
        self.next_clip = self.next_clip.wrapping_add(1);
        self.clips.insert(name.to_string(), id);
        id
    }

    /// Look up a clip id without interning.
    pub fn clip_id(&self, name: &str) -> Option<ClipId> {
        self.clips.get(name).copied()
    }

    /// Register a built blend tree, validating that every nested reference
    /// resolves to an already-registered tree.
    pub fn add_blend_tree(&mut self, tree: BlendTree1D) -> Result<BlendTreeId, LibraryError> {
        for motion in tree.motions() {
            if let Motion::BlendTree(nested) = motion {
                if self.get(*nested).is_none() {
                    return Err(LibraryError::UnknownNestedTree(*nested));
                }
            }
        }
        let id = BlendTreeId(self.next_tree);
        self.next_tree = self.next_tree.wrapping_add(1);
        self.trees.push((id, tree));
        Ok(id)
    }

    pub fn get(&self, id: BlendTreeId) -> Option<&BlendTree1D> {
        self.trees
            .iter()
            .find_map(|(t, tree)| if *t == id { Some(tree) } else { None })
    }

    /// Flatten `root` at `param` into per-clip weights, recursing through
    /// nested trees by weight multiplication. Nested trees are sampled with
    /// the same parameter value. An unknown root yields no contributions
    /// (fail-soft, same as sampling a tree with no bound asset).
    ///
    /// The result is sorted by clip id for deterministic iteration.
    pub fn clip_weights(&self, root: BlendTreeId, param: f32) -> Vec<(ClipId, f32)> {
        let mut acc: HashMap<ClipId, f32> = HashMap::new();
        if let Some(tree) = self.get(root) {
            self.accumulate(tree, param, 1.0, &mut acc);
        }
        let mut out: Vec<(ClipId, f32)> = acc.into_iter().collect();
        out.sort_by_key(|(id, _)| id.0);
        out
    }

    fn accumulate(
        &self,
        tree: &BlendTree1D,
        param: f32,
        scale: f32,
        acc: &mut HashMap<ClipId, f32>,
    ) {
        let s = tree.sample(param);
        for (idx, w) in [(s.lower, 1.0 - s.weight), (s.upper, s.weight)] {
            if w <= 0.0 {
                continue;
            }
            match tree.motions()[idx] {
                Motion::Clip(clip) => *acc.entry(clip).or_insert(0.0) += scale * w,
                Motion::BlendTree(nested) => {
                    if let Some(sub) = self.get(nested) {
                        self.accumulate(sub, param, scale * w, acc);
                    }
                }
            }
        }
    }
}
