//! AffineTransform: a rotation-scale block plus a translation.
//!
//! Model:
//! - `rs` is a column-major 3x3 combining rotation and per-axis scale
//!   (column i is the rotated basis axis scaled by `scale[i]`).
//! - `t` is the translation applied after `rs`.
//! - Composition `mul(a, b)` applies `b` first, then `a`.
//! - Inversion is exact for well-conditioned blocks and falls back to the
//!   all-zero transform for degenerate ones (see `inverse`).

use serde::{Deserialize, Serialize};

use crate::mat3::{
    mat3_det, mat3_identity, mat3_inverse_with_det, mat3_mul, mat3_mul_vec3, mat3_zero, Mat3,
};
use crate::quat::{quat_to_mat3, Quat};
use crate::Vec3;

/// Squared column length below which the rotation-scale block is treated as
/// degenerate. A uniform per-axis scale of 1e-12 (squared: 1e-24) must still
/// invert, so this sits well under that.
const DEGENERATE_SQ_EPS: f32 = 1e-30;

/// A rigid+scale transform: 3x3 rotation-scale block and translation vector.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    /// Column-major rotation-scale block. May be singular (zero scale on one
    /// or more axes); see `inverse` for the degenerate contract.
    pub rs: Mat3,
    /// Translation.
    pub t: Vec3,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    /// The identity transform.
    #[inline]
    pub fn identity() -> Self {
        Self {
            rs: mat3_identity(),
            t: [0.0; 3],
        }
    }

    /// The all-zero transform, used as the degenerate-inverse result.
    #[inline]
    pub fn zero() -> Self {
        Self {
            rs: mat3_zero(),
            t: [0.0; 3],
        }
    }

    /// Build from translation, rotation quaternion, and per-axis scale.
    /// Any finite inputs are accepted, including zero scale.
    pub fn from_trs(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        let mut rs = quat_to_mat3(rotation);
        for (col, s) in rs.iter_mut().zip(scale) {
            col[0] *= s;
            col[1] *= s;
            col[2] *= s;
        }
        Self {
            rs,
            t: translation,
        }
    }

    /// Transform a point: `rs * p + t`.
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let r = mat3_mul_vec3(&self.rs, p);
        [r[0] + self.t[0], r[1] + self.t[1], r[2] + self.t[2]]
    }

    /// Compose two transforms: applying the result is equivalent to applying
    /// `b` first, then `a`.
    pub fn mul(a: &AffineTransform, b: &AffineTransform) -> AffineTransform {
        AffineTransform {
            rs: mat3_mul(&a.rs, &b.rs),
            t: a.transform_point(b.t),
        }
    }

    /// True when any column of `rs` is (near-)zero or the block has no
    /// volume, i.e. no exact inverse exists within f32 range.
    pub fn is_degenerate(&self) -> bool {
        for col in &self.rs {
            let len_sq = col[0] * col[0] + col[1] * col[1] + col[2] * col[2];
            if len_sq < DEGENERATE_SQ_EPS {
                return true;
            }
        }
        mat3_det(&self.rs) == 0.0
    }

    /// Invert the transform.
    ///
    /// Non-degenerate blocks get the exact adjugate/determinant inverse, so
    /// `mul(a, a.inverse())` is identity within f32 tolerance. Degenerate
    /// blocks (zero or near-zero scale on any axis, or a zero determinant)
    /// return the all-zero transform instead of NaN/Inf. Near-singular blocks
    /// below the threshold take the same zero path; there is no
    /// pseudo-inverse. Known limitation: ill-conditioned but above-threshold
    /// blocks are inverted as-is with whatever precision f32 allows.
    pub fn inverse(&self) -> AffineTransform {
        if self.is_degenerate() {
            return AffineTransform::zero();
        }
        let det = mat3_det(&self.rs);
        let inv_rs = mat3_inverse_with_det(&self.rs, det);
        let it = mat3_mul_vec3(&inv_rs, self.t);
        AffineTransform {
            rs: inv_rs,
            t: [-it[0], -it[1], -it[2]],
        }
    }
}
