//! Quaternion helpers (x, y, z, w convention).

use crate::mat3::Mat3;

/// Quaternion as `[x, y, z, w]`.
pub type Quat = [f32; 4];

#[inline]
pub fn quat_identity() -> Quat {
    [0.0, 0.0, 0.0, 1.0]
}

/// Normalize a quaternion. Zero magnitude falls back to identity.
#[inline]
pub fn normalize_quat(q: Quat) -> Quat {
    let mag = (q[0] * q[0] + q[1] * q[1] + q[2] * q[2] + q[3] * q[3]).sqrt();
    if mag == 0.0 {
        quat_identity()
    } else {
        [q[0] / mag, q[1] / mag, q[2] / mag, q[3] / mag]
    }
}

/// Unit quaternion for a rotation of `angle` radians about `axis`.
/// The axis is normalized here; a zero axis yields identity.
pub fn quat_from_axis_angle(axis: [f32; 3], angle: f32) -> Quat {
    let len = (axis[0] * axis[0] + axis[1] * axis[1] + axis[2] * axis[2]).sqrt();
    if len == 0.0 {
        return quat_identity();
    }
    let half = angle * 0.5;
    let s = half.sin() / len;
    [axis[0] * s, axis[1] * s, axis[2] * s, half.cos()]
}

/// Convert a unit quaternion to a column-major rotation matrix.
/// Inputs are normalized first so a non-unit quaternion still yields a
/// proper rotation.
pub fn quat_to_mat3(q: Quat) -> Mat3 {
    let [x, y, z, w] = normalize_quat(q);

    let x2 = x + x;
    let y2 = y + y;
    let z2 = z + z;
    let xx = x * x2;
    let yy = y * y2;
    let zz = z * z2;
    let xy = x * y2;
    let xz = x * z2;
    let yz = y * z2;
    let wx = w * x2;
    let wy = w * y2;
    let wz = w * z2;

    [
        [1.0 - (yy + zz), xy + wz, xz - wy],
        [xy - wz, 1.0 - (xx + zz), yz + wx],
        [xz + wy, yz - wx, 1.0 - (xx + yy)],
    ]
}
