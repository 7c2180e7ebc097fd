//! 1D blend-tree asset and builder.
//!
//! Model:
//! - Builder input is an unordered list of (threshold, speed, motion) samples.
//! - The built asset holds three parallel sequences sorted ascending by
//!   threshold; ties keep their input relative order (stable sort), since
//!   downstream blending works on index adjacency.
//! - The asset is immutable after build. A query parameter is bracketed by
//!   the two nearest thresholds and blended linearly between them.

use serde::{Deserialize, Serialize};

use crate::ids::{BlendTreeId, ClipId};

/// Opaque motion reference: a raw clip or a nested blend tree. The core only
/// stores and reorders these; it never inspects clip contents.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Motion {
    Clip(ClipId),
    BlendTree(BlendTreeId),
}

/// One builder input sample: where it sits on the blend parameter axis, its
/// playback speed multiplier, and what it plays.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlendTreeMotionData {
    pub threshold: f32,
    pub speed: f32,
    pub motion: Motion,
}

/// Bracketing result for one sampled parameter value: the two neighboring
/// motion indices and the blend weight toward `upper`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BlendSample {
    pub lower: usize,
    pub upper: usize,
    /// Weight of `upper` in [0, 1]; `lower` contributes `1 - weight`.
    pub weight: f32,
}

/// Immutable, threshold-sorted 1D blend tree.
///
/// Index `i` across the three parallel sequences describes one motion's
/// contribution; `thresholds` is non-decreasing end-to-end.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlendTree1D {
    thresholds: Vec<f32>,
    speeds: Vec<f32>,
    motions: Vec<Motion>,
}

/// Null-tolerant entry point: absent input yields an absent asset.
/// See [`BlendTree1D::build`] for the empty-input policy.
pub fn create_blend_tree(motion_data: Option<Vec<BlendTreeMotionData>>) -> Option<BlendTree1D> {
    BlendTree1D::build(motion_data?)
}

impl BlendTree1D {
    /// Build a blend tree from motion samples.
    ///
    /// Empty input yields `None`, same as absent input: a zero-motion tree
    /// has nothing to sample, so no asset is allocated. Duplicate thresholds
    /// are legal and keep their input relative order. No other validation is
    /// performed; speeds and motions are packed as-is.
    pub fn build(mut entries: Vec<BlendTreeMotionData>) -> Option<BlendTree1D> {
        if entries.is_empty() {
            return None;
        }
        // Stable sort; total_cmp keeps NaN thresholds deterministic instead
        // of poisoning the comparison.
        entries.sort_by(|a, b| a.threshold.total_cmp(&b.threshold));

        let mut thresholds = Vec::with_capacity(entries.len());
        let mut speeds = Vec::with_capacity(entries.len());
        let mut motions = Vec::with_capacity(entries.len());
        for e in entries {
            thresholds.push(e.threshold);
            speeds.push(e.speed);
            motions.push(e.motion);
        }
        Some(BlendTree1D {
            thresholds,
            speeds,
            motions,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    /// Always false: `build` never produces a zero-motion tree.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    #[inline]
    pub fn thresholds(&self) -> &[f32] {
        &self.thresholds
    }

    #[inline]
    pub fn speeds(&self) -> &[f32] {
        &self.speeds
    }

    #[inline]
    pub fn motions(&self) -> &[Motion] {
        &self.motions
    }

    /// Locate the two motions bracketing `param` and the weight between them.
    ///
    /// Edge cases:
    /// - `param` at or below the first threshold clamps to the first motion.
    /// - `param` at or above the last threshold clamps to the last motion.
    /// - A parameter exactly at a duplicated threshold lands fully on the
    ///   first entry of the duplicate run.
    pub fn sample(&self, param: f32) -> BlendSample {
        let t = &self.thresholds;
        let n = t.len();
        debug_assert!(n > 0, "build never yields an empty tree");
        if n == 1 || param <= t[0] {
            return BlendSample {
                lower: 0,
                upper: 0,
                weight: 0.0,
            };
        }
        if param >= t[n - 1] {
            return BlendSample {
                lower: n - 1,
                upper: n - 1,
                weight: 0.0,
            };
        }
        // Linear scan (could be a binary search if trees grow large).
        for i in 0..(n - 1) {
            let t0 = t[i];
            let t1 = t[i + 1];
            if param >= t0 && param <= t1 {
                let denom = (t1 - t0).max(f32::EPSILON);
                let w = ((param - t0) / denom).clamp(0.0, 1.0);
                return BlendSample {
                    lower: i,
                    upper: i + 1,
                    weight: w,
                };
            }
        }
        BlendSample {
            lower: n - 1,
            upper: n - 1,
            weight: 0.0,
        }
    }

    /// Fill `out` with one weight per motion: zero everywhere except the
    /// bracketing pair, summing to 1.
    pub fn weights(&self, param: f32, out: &mut Vec<f32>) {
        out.clear();
        out.resize(self.len(), 0.0);
        let s = self.sample(param);
        out[s.lower] += 1.0 - s.weight;
        out[s.upper] += s.weight;
    }

    /// Weight-averaged playback speed at `param`.
    pub fn blended_speed(&self, param: f32) -> f32 {
        let s = self.sample(param);
        self.speeds[s.lower] * (1.0 - s.weight) + self.speeds[s.upper] * s.weight
    }
}
