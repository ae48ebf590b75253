use mechtensor::cubic::CubicRoots;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use russell_lab::array_approx_eq;

fn sorted(roots: &[f64]) -> Vec<f64> {
    let mut res = roots.to_vec();
    res.sort_by(|a, b| a.partial_cmp(b).unwrap());
    res
}

#[test]
fn test_cubic_roots_scenarios() {
    // x³ - 7x + 6 = (x - 1)(x - 2)(x + 3)
    let res = CubicRoots::exe(1.0, 0.0, -7.0, 6.0, true);
    assert_eq!(res.count, 3);
    array_approx_eq(&sorted(res.real_roots()), &[-3.0, 1.0, 2.0], 1e-10);

    // x³ - 6x² + 11x - 6 = (x - 1)(x - 2)(x - 3)
    let res = CubicRoots::exe(1.0, -6.0, 11.0, -6.0, true);
    assert_eq!(res.count, 3);
    array_approx_eq(&sorted(res.real_roots()), &[1.0, 2.0, 3.0], 1e-10);
}

#[test]
fn test_cubic_roots_random_coefficients() {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..1000 {
        let a3: f64 = rng.gen_range(0.1..10.0) * if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let a2: f64 = rng.gen_range(-10.0..10.0);
        let a1: f64 = rng.gen_range(-10.0..10.0);
        let a0: f64 = rng.gen_range(-10.0..10.0);
        let res = CubicRoots::exe(a3, a2, a1, a0, true);
        assert!(res.count == 1 || res.count == 3);
        for x in res.real_roots() {
            let scale = f64::abs(a3 * x * x * x) + f64::abs(a2 * x * x) + f64::abs(a1 * x) + f64::abs(a0);
            let f = ((a3 * x + a2) * x + a1) * x + a0;
            assert!(f64::abs(f) < 1e-10 * scale, "residual {} is too large for x = {}", f, x);
        }
    }
}

#[test]
fn test_cubic_roots_random_real_roots() {
    // builds a3·(x - r1)(x - r2)(x - r3) from random roots
    let mut rng = StdRng::seed_from_u64(5678);
    for _ in 0..500 {
        let r: Vec<f64> = (0..3).map(|_| rng.gen_range(-5.0..5.0)).collect();
        let a3: f64 = rng.gen_range(0.5..2.0);
        let a2 = -a3 * (r[0] + r[1] + r[2]);
        let a1 = a3 * (r[0] * r[1] + r[0] * r[2] + r[1] * r[2]);
        let a0 = -a3 * r[0] * r[1] * r[2];
        let res = CubicRoots::exe(a3, a2, a1, a0, true);
        let mut gaps = [f64::abs(r[0] - r[1]), f64::abs(r[0] - r[2]), f64::abs(r[1] - r[2])];
        gaps.sort_by(|a, b| a.partial_cmp(b).unwrap());
        if gaps[0] > 1e-2 {
            assert_eq!(res.count, 3);
            array_approx_eq(&sorted(res.real_roots()), &sorted(&r), 1e-8);
        }
    }
}
