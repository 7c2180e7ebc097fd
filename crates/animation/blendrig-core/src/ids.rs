//! Handle types for core assets.
//!
//! Clips and blend trees are referenced by small integer handles issued by
//! the [`MotionLibrary`](crate::library::MotionLibrary) as assets are
//! registered. The numeric value is an implementation detail; callers treat
//! handles as opaque keys.

use serde::{Deserialize, Serialize};

/// Handle to a named animation clip.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ClipId(pub u32);

/// Handle to a registered blend-tree asset.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct BlendTreeId(pub u32);
