use blendrig_math::{
    mat3_mul_vec3, quat_from_axis_angle, quat_identity, AffineTransform, Mat3, Vec3,
};

fn assert_identity_rs(rs: &Mat3, eps: f32) {
    for c in 0..3 {
        for r in 0..3 {
            let expect = if c == r { 1.0 } else { 0.0 };
            assert!(
                (rs[c][r] - expect).abs() <= eps,
                "rs[{c}][{r}]={} expect={expect} eps={eps}",
                rs[c][r]
            );
        }
    }
}

fn assert_zero_vec(v: &Vec3, eps: f32) {
    for (i, x) in v.iter().enumerate() {
        assert!(x.abs() <= eps, "t[{i}]={x} eps={eps}");
    }
}

#[test]
fn inverse_identity_for_ordinary_scale() {
    let tx = AffineTransform::from_trs(
        [0.3, -0.4, 0.5],
        quat_from_axis_angle([1.0, 2.0, 0.5], 1.1),
        [2.0, 0.75, 1.25],
    );
    let p = AffineTransform::mul(&tx, &tx.inverse());
    assert_identity_rs(&p.rs, 1e-6);
    assert_zero_vec(&p.t, 1e-6);
}

#[test]
fn inverse_identity_for_near_subnormal_scale() {
    // Product of a 1e-12 scale and its ~1e12 inverse loses a little
    // precision, hence the relaxed tolerance.
    let tx = AffineTransform::from_trs(
        [0.1, 0.2, 0.3],
        quat_from_axis_angle([0.0, 1.0, 0.0], 0.4),
        [1e-12, 1e-12, 1e-12],
    );
    let p = AffineTransform::mul(&tx, &tx.inverse());
    assert_identity_rs(&p.rs, 2e-6);
    assert_zero_vec(&p.t, 2e-6);
}

#[test]
fn inverse_identity_for_non_uniform_scale() {
    let tx = AffineTransform::from_trs(
        [-4.0, 0.0, 9.0],
        quat_from_axis_angle([0.3, -0.6, 0.9], -2.2),
        [3.0, 0.5, 7.0],
    );
    let p = AffineTransform::mul(&tx, &tx.inverse());
    assert_identity_rs(&p.rs, 1e-5);
    assert_zero_vec(&p.t, 1e-4);
}

#[test]
fn degenerate_zero_scale_inverts_to_zero() {
    let tx = AffineTransform::from_trs(
        [7.0, 8.0, 9.0],
        quat_from_axis_angle([1.0, 1.0, 1.0], 0.9),
        [0.0, 0.0, 0.0],
    );
    let inv = tx.inverse();
    for col in &inv.rs {
        for x in col {
            assert!(x.abs() <= 1e-30);
        }
    }
    assert_zero_vec(&inv.t, 1e-30);
}

#[test]
fn degenerate_coplanar_columns_invert_to_zero() {
    // Every column is non-zero (the per-axis length check passes), but the
    // third is the sum of the first two, so the block has no volume.
    let tx = AffineTransform {
        rs: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]],
        t: [2.0, -3.0, 4.0],
    };
    assert!(tx.is_degenerate());
    assert_eq!(tx.inverse(), AffineTransform::zero());
}

#[test]
fn inverse_round_trips_points() {
    let tx = AffineTransform::from_trs(
        [1.0, 2.0, 3.0],
        quat_from_axis_angle([0.0, 0.0, 1.0], 0.8),
        [2.0, 2.0, 2.0],
    );
    let inv = tx.inverse();
    let p = [5.0, -1.0, 0.5];
    let back = inv.transform_point(tx.transform_point(p));
    for i in 0..3 {
        assert!((back[i] - p[i]).abs() <= 1e-5, "{back:?} vs {p:?}");
    }
}

#[test]
fn identity_transform_is_neutral() {
    let id = AffineTransform::identity();
    assert_eq!(id.transform_point([1.0, 2.0, 3.0]), [1.0, 2.0, 3.0]);
    assert_eq!(mat3_mul_vec3(&id.rs, [4.0, 5.0, 6.0]), [4.0, 5.0, 6.0]);
    let tx = AffineTransform::from_trs([1.0, 0.0, 0.0], quat_identity(), [1.0, 1.0, 1.0]);
    assert_eq!(AffineTransform::mul(&id, &tx), tx);
    assert_eq!(AffineTransform::mul(&tx, &id), tx);
}
