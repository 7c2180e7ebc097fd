//! Column-major 3x3 matrix helpers.
//!
//! Storage convention: `m[c][r]` is row `r` of column `c`. Columns of a
//! rotation-scale block are the transformed basis axes, which makes per-axis
//! scaling a per-column multiply.

use crate::Vec3;

/// Column-major 3x3 matrix.
pub type Mat3 = [[f32; 3]; 3];

#[inline]
pub fn mat3_identity() -> Mat3 {
    [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
}

#[inline]
pub fn mat3_zero() -> Mat3 {
    [[0.0; 3]; 3]
}

#[inline]
pub fn dot3(a: Vec3, b: Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
pub fn cross3(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Matrix * column vector.
#[inline]
pub fn mat3_mul_vec3(m: &Mat3, v: Vec3) -> Vec3 {
    [
        m[0][0] * v[0] + m[1][0] * v[1] + m[2][0] * v[2],
        m[0][1] * v[0] + m[1][1] * v[1] + m[2][1] * v[2],
        m[0][2] * v[0] + m[1][2] * v[1] + m[2][2] * v[2],
    ]
}

/// Matrix product `a * b` (apply `b` first, then `a`).
pub fn mat3_mul(a: &Mat3, b: &Mat3) -> Mat3 {
    [
        mat3_mul_vec3(a, b[0]),
        mat3_mul_vec3(a, b[1]),
        mat3_mul_vec3(a, b[2]),
    ]
}

/// Determinant as the scalar triple product of the columns.
#[inline]
pub fn mat3_det(m: &Mat3) -> f32 {
    dot3(m[0], cross3(m[1], m[2]))
}

/// Inverse via the adjugate. Caller is responsible for checking the
/// determinant; a zero `det` here would produce Inf/NaN.
pub(crate) fn mat3_inverse_with_det(m: &Mat3, det: f32) -> Mat3 {
    let inv_det = det.recip();
    // Rows of the inverse are the scaled column cross products.
    let r0 = cross3(m[1], m[2]);
    let r1 = cross3(m[2], m[0]);
    let r2 = cross3(m[0], m[1]);
    [
        [r0[0] * inv_det, r1[0] * inv_det, r2[0] * inv_det],
        [r0[1] * inv_det, r1[1] * inv_det, r2[1] * inv_det],
        [r0[2] * inv_det, r1[2] * inv_det, r2[2] * inv_det],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_multiplicative_unit() {
        let m: Mat3 = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]];
        assert_eq!(mat3_mul(&mat3_identity(), &m), m);
        assert_eq!(mat3_mul(&m, &mat3_identity()), m);
    }

    #[test]
    fn det_of_scaled_identity() {
        let m: Mat3 = [[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 4.0]];
        assert_eq!(mat3_det(&m), 24.0);
    }

    #[test]
    fn inverse_of_diagonal() {
        let m: Mat3 = [[2.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 8.0]];
        let inv = mat3_inverse_with_det(&m, mat3_det(&m));
        let p = mat3_mul(&m, &inv);
        for c in 0..3 {
            for r in 0..3 {
                let expect = if c == r { 1.0 } else { 0.0 };
                assert!((p[c][r] - expect).abs() < 1e-6);
            }
        }
    }
}
