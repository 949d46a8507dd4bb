use super::vec::*;
use super::*;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, PI};

const CFG: GeomCfg = GeomCfg { eps: 1e-6 };

#[test]
fn elementwise_arithmetic_is_exact() {
    let a = vector![1.0, 2.0];
    let b = vector![4.0, 5.0];
    assert_eq!(a + b, vector![5.0, 7.0]);
    assert_eq!(a - b, vector![-3.0, -3.0]);
    assert_eq!(a * 1.5, vector![1.5, 3.0]);
    // sub(a,b) == add(a, scale(b,-1))
    assert_eq!(a - b, a + b * -1.0);
}

#[test]
fn length_is_hypot_and_overflow_safe() {
    assert!((length(vector![3.0, 4.0]) - 5.0).abs() < 1e-12);
    // Naive sqrt(x²+y²) overflows to inf here; hypot must not.
    let big = vector![1e300, 1e300];
    assert!(length(big).is_finite());
}

#[test]
fn rotate_rejects_non_finite_angles() {
    let v = vector![1.0, 0.0];
    assert_eq!(
        rotate(v, f64::NAN),
        Err(GeomError::InvalidArgument("non-finite rotation angle"))
    );
    assert!(rotate(v, f64::INFINITY).is_err());
    let quarter = rotate(v, FRAC_PI_2).unwrap();
    assert!(approx_eq(quarter, vector![0.0, 1.0], CFG));
}

#[test]
fn normalize_of_near_zero_fails() {
    assert!(matches!(
        normalize(vector![0.0, 0.0], CFG),
        Err(GeomError::DivideByZero(_))
    ));
    // Just above the threshold still succeeds.
    let v = vector![2e-6, 0.0];
    assert!((length(normalize(v, CFG).unwrap()) - 1.0).abs() < 1e-12);
    // A looser tolerance turns the same input into a failure.
    let loose = GeomCfg { eps: 1e-3 };
    assert!(normalize(v, loose).is_err());
}

#[test]
fn projection_lies_on_the_base() {
    let base = vector![2.0, 0.0];
    let p = project_onto(base, vector![3.0, 7.0], CFG).unwrap();
    assert!(approx_eq(p, vector![3.0, 0.0], CFG));
    assert!(are_parallel(p, base, CFG));
    assert!(matches!(
        project_onto(vector![0.0, 0.0], vector![1.0, 1.0], CFG),
        Err(GeomError::DivideByZero(_))
    ));
}

#[test]
fn angle_between_is_clamped_at_the_domain_edges() {
    let e_x = vector![1.0, 0.0];
    assert!((angle_between(e_x, vector![0.0, 1.0], CFG).unwrap() - FRAC_PI_2).abs() < 1e-12);
    // Parallel and anti-parallel are legitimate inputs; rounding may push
    // the cosine past ±1, the clamp keeps acos in-domain.
    assert!(angle_between(e_x, e_x, CFG).unwrap().abs() < 1e-12);
    assert!((angle_between(e_x, vector![-1.0, 0.0], CFG).unwrap() - PI).abs() < 1e-12);
    let skew = vector![0.1 + 0.2, 0.3];
    assert!(angle_between(skew, skew, CFG).unwrap().abs() < 1e-7);
    assert!(matches!(
        angle_between(e_x, vector![0.0, 0.0], CFG),
        Err(GeomError::DivideByZero(_))
    ));
}

#[test]
fn orthogonal_is_a_quarter_turn() {
    let v = vector![3.0, -2.0];
    let o = orthogonal(v);
    assert!(v.dot(&o).abs() < 1e-12);
    assert!((length(o) - length(v)).abs() < 1e-12);
    assert!(approx_eq(o, rotate(v, FRAC_PI_2).unwrap(), CFG));
}

#[test]
fn collinear_basis_is_rejected_at_construction() {
    let err = CoordSystem::new(
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![2.0, 0.0],
        CFG,
    )
    .unwrap_err();
    assert!(matches!(err, GeomError::InvalidArgument(_)));
}

#[test]
fn oblique_frame_round_trip_scenario() {
    let cs = CoordSystem::new(
        vector![100.0, 100.0],
        vector![50.0, 10.0],
        vector![10.0, 50.0],
        CFG,
    )
    .unwrap();
    let world = cs.to_world(vector![1.0, 0.0]);
    assert!(approx_eq(world, vector![50.0, 10.0], CFG));
    let local = cs.to_local(world).unwrap();
    assert!(approx_eq(local, vector![1.0, 0.0], CFG));
}

#[test]
fn translate_moves_origin_only() {
    let mut cs = CoordSystem::new(
        vector![1.0, 1.0],
        vector![2.0, 0.0],
        vector![0.0, 2.0],
        CFG,
    )
    .unwrap();
    cs.translate(vector![3.0, -1.0]);
    assert_eq!(cs.origin(), vector![4.0, 0.0]);
    assert_eq!(cs.unit_x(), vector![2.0, 0.0]);
    // The basis transform is unaffected by translation.
    assert!(approx_eq(cs.to_world(vector![0.0, 1.0]), vector![0.0, 2.0], CFG));
}

#[test]
fn rotate_and_scale_preserve_invertibility() {
    let mut cs = CoordSystem::new(
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![0.5, 1.0],
        CFG,
    )
    .unwrap();
    cs.rotate(0.7).unwrap();
    cs.scale(3.0).unwrap();
    let v = vector![0.4, -1.2];
    let back = cs.to_local(cs.to_world(v)).unwrap();
    assert!(approx_eq(back, v, CFG));
    assert!(cs.rotate(f64::NAN).is_err());
    assert!(cs.scale(0.0).is_err());
    assert!(cs.scale(f64::INFINITY).is_err());
}

#[test]
fn round_trip_over_random_vectors_and_bases() {
    // Fixed seed for reproducibility.
    let mut rng = StdRng::seed_from_u64(42);
    let bases = [
        (vector![1.0, 0.0], vector![0.0, 1.0]),
        (vector![50.0, 10.0], vector![10.0, 50.0]),
        (vector![1.0, 0.2], vector![-0.3, 0.9]),
        (vector![0.01, 2.0], vector![3.0, 0.05]),
    ];
    for (unit_x, unit_y) in bases {
        let cs = CoordSystem::new(vector![7.0, -3.0], unit_x, unit_y, CFG).unwrap();
        for _ in 0..100 {
            let v: Vector2<f64> =
                vector![rng.gen_range(-1e3..1e3), rng.gen_range(-1e3..1e3)];
            let back = cs.to_local(cs.to_world(v)).unwrap();
            // Tolerance scales with the basis conditioning; 1e-6 relative
            // slack is ample for these well-conditioned frames.
            assert!((back - v).norm() < 1e-6 * (1.0 + v.norm()));
        }
    }
}

#[test]
fn dump_format_is_one_line() {
    assert_eq!(VecDump(vector![1.5, 2.0]).to_string(), "Vec { x=1.5, y=2 }");
    assert_eq!(
        VecDump(vector![-0.25, 1e-7]).to_string(),
        "Vec { x=-0.25, y=0.0000001 }"
    );
}

fn finite_vec() -> impl Strategy<Value = Vector2<f64>> {
    (-1e6..1e6f64, -1e6..1e6f64).prop_map(|(x, y)| vector![x, y])
}

proptest! {
    #[test]
    fn addition_commutes(a in finite_vec(), b in finite_vec()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn scaling_is_invertible(v in finite_vec(), k in 1e-3..1e3f64) {
        let back = (v * k) * (1.0 / k);
        let cfg = GeomCfg { eps: 1e-6 * (1.0 + v.norm()) };
        prop_assert!(approx_eq(back, v, cfg));
    }

    #[test]
    fn normalized_vectors_have_unit_length(v in finite_vec()) {
        prop_assume!(length(v) >= CFG.eps);
        let n = normalize(v, CFG).unwrap();
        prop_assert!((length(n) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rotation_preserves_length(v in finite_vec(), theta in -10.0..10.0f64) {
        let r = rotate(v, theta).unwrap();
        prop_assert!((length(r) - length(v)).abs() < 1e-6 * (1.0 + length(v)));
    }

    #[test]
    fn rotations_compose_additively(
        v in finite_vec(),
        t1 in -3.2..3.2f64,
        t2 in -3.2..3.2f64,
    ) {
        let twice = rotate(rotate(v, t1).unwrap(), t2).unwrap();
        let once = rotate(v, t1 + t2).unwrap();
        prop_assert!((twice - once).norm() < 1e-6 * (1.0 + v.norm()));
    }

    #[test]
    fn orthogonal_is_perpendicular(v in finite_vec()) {
        let o = orthogonal(v);
        prop_assert!(v.dot(&o).abs() < 1e-9 * (1.0 + v.norm_squared()));
        prop_assert!((length(o) - length(v)).abs() < 1e-12 * (1.0 + length(v)));
    }

    #[test]
    fn basis_round_trip(
        v in finite_vec(),
        ux in -5.0..5.0f64, uy in -5.0..5.0f64,
        vx in -5.0..5.0f64, vy in -5.0..5.0f64,
    ) {
        let unit_x = vector![ux, uy];
        let unit_y = vector![vx, vy];
        // Skip ill-conditioned bases; construction rejects outright
        // degenerate ones, conditioning bounds the round-trip error.
        prop_assume!(cross(unit_x, unit_y).abs() > 1e-2);
        let cs = CoordSystem::new(vector![0.0, 0.0], unit_x, unit_y, CFG).unwrap();
        let back = cs.to_local(cs.to_world(v)).unwrap();
        prop_assert!((back - v).norm() < 1e-4 * (1.0 + v.norm()));
    }
}
