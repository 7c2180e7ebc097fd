//! blendrig-core: 1D blend-tree construction and sampling (engine-agnostic)
//!
//! This crate turns unordered (threshold, speed, motion) samples into
//! immutable, threshold-sorted blend-tree assets and samples them by a scalar
//! parameter. Motions are opaque handles to clips or nested trees; clip
//! contents, ECS wiring, and blob serialization live elsewhere.

pub mod blend_tree;
pub mod hashing;
pub mod ids;
pub mod library;
pub mod stored;

// Re-exports for consumers (adapters)
pub use blend_tree::{create_blend_tree, BlendSample, BlendTree1D, BlendTreeMotionData, Motion};
pub use hashing::StringHash;
pub use ids::{BlendTreeId, ClipId};
pub use library::{LibraryError, MotionLibrary};
pub use stored::{parse_blend_tree_set_json, StoredError};
