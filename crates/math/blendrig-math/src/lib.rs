//! blendrig-math: affine transform algebra (engine-agnostic)
//!
//! Small fixed-size math over raw `[f32; N]` arrays:
//! - `Vec3`/`Quat`/`Mat3` aliases with free helper functions
//! - quaternion normalization and quaternion-to-matrix conversion
//! - `AffineTransform` (rotation-scale block + translation) with composition
//!   and numerically safe inversion

pub mod affine;
pub mod mat3;
pub mod quat;

// Re-exports for consumers (adapters)
pub use affine::AffineTransform;
pub use mat3::{mat3_det, mat3_identity, mat3_mul, mat3_mul_vec3, mat3_zero, Mat3};
pub use quat::{normalize_quat, quat_from_axis_angle, quat_identity, quat_to_mat3, Quat};

/// 3-component vector (x, y, z).
pub type Vec3 = [f32; 3];
