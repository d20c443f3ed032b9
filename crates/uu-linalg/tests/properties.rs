//! Algebraic properties checked over seeded random inputs.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use uu_linalg::*;

const ITERATIONS: usize = 500;

fn init() -> fastrand::Rng {
    env_logger::builder()
        .is_test(true)
        .filter_module("uu_linalg", log::LevelFilter::Trace)
        .try_init()
        .ok();
    fastrand::Rng::with_seed(0x5EED)
}

fn random_vec3(rng: &mut fastrand::Rng) -> Vec3d {
    let mut v = Vec3d::ZERO;
    v.randomize(Vector::splat(-100.0), Vector::splat(100.0), rng);
    v
}

#[test]
fn examples() {
    init();
    assert_eq!(vec3(3.0f64, 4.0, 0.0).length(), 5.0);
    assert_relative_eq!(vec3(3.0f64, 4.0, 0.0).normalize(), vec3(0.6, 0.8, 0.0));
    assert_eq!(Mat2::from_rows([[1, 2], [3, 4]]).determinant(), -2);
    assert_abs_diff_eq!(
        Ang3d::<Degrees>::new(90.0, 0.0, 0.0).forward(),
        vec3(0.0, 0.0, 1.0),
        epsilon = 1e-12
    );
}

#[test]
fn normalized_has_unit_length() {
    let mut rng = init();
    for _ in 0..ITERATIONS {
        let v = random_vec3(&mut rng);
        if v.is_zero(0.0) {
            continue;
        }
        assert_relative_eq!(v.normalize().length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(v.try_normalize().unwrap().length(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn length_squared() {
    let mut rng = init();
    for _ in 0..ITERATIONS {
        let v = random_vec3(&mut rng);
        assert_relative_eq!(v.length() * v.length(), v.length2(), max_relative = 1e-12);
    }
}

#[test]
fn dot_commutes_and_cross_anticommutes() {
    let mut rng = init();
    for _ in 0..ITERATIONS {
        let a = random_vec3(&mut rng);
        let b = random_vec3(&mut rng);
        assert_eq!(a.dot(b), b.dot(a));
        assert_eq!(a.cross(b), -b.cross(a));
    }

    let mut a = Vec4i::ZERO;
    let mut b = Vec4i::ZERO;
    a.randomize(Vector::splat(-50), Vector::splat(50), &mut rng);
    b.randomize(Vector::splat(-50), Vector::splat(50), &mut rng);
    assert_eq!(a.dot(b), b.dot(a));
}

#[test]
fn clamp_is_idempotent() {
    let mut rng = init();
    for _ in 0..ITERATIONS {
        let v = random_vec3(&mut rng);
        let p = random_vec3(&mut rng);
        let q = random_vec3(&mut rng);
        let (min, max) = (p.min(q), p.max(q));
        let once = v.clamp(min, max);
        assert_eq!(once.clamp(min, max), once);
        assert!(once.within_aabb(min, max));
    }
}

#[test]
fn angle_basis_is_orthonormal() {
    let mut rng = init();
    let bound = Ang3d::<Degrees>::new(720.0, 720.0, 720.0);
    let mut a = Ang3d::<Degrees>::ZERO;
    for _ in 0..ITERATIONS {
        a.randomize(-bound, bound, &mut rng);
        let (f, r, u) = (a.forward(), a.right(), a.up());
        for v in [f, r, u] {
            assert_relative_eq!(v.length(), 1.0, epsilon = 1e-12);
        }
        assert_abs_diff_eq!(f.dot(r), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(f.dot(u), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r.dot(u), 0.0, epsilon = 1e-12);

        // Normalizing never changes the orientation.
        assert_abs_diff_eq!(a.normalize().forward(), f, epsilon = 1e-9);
        assert_abs_diff_eq!(a.normalize_signed().up(), u, epsilon = 1e-9);
    }
}

#[test]
fn direction_roundtrips_through_angle() {
    let mut rng = init();
    for _ in 0..ITERATIONS {
        let v = random_vec3(&mut rng);
        let Ok(angle) = v.to_angle::<Degrees>() else {
            continue;
        };
        assert_abs_diff_eq!(angle.forward(), v.normalize(), epsilon = 1e-9);
        assert_eq!(angle.roll(), 0.0);

        let flat = v.truncate();
        let planar: Ang1d = flat.to_angle().unwrap();
        assert_abs_diff_eq!(planar.forward(), flat.normalize(), epsilon = 1e-9);
    }
}

#[test]
fn rotation_preserves_length() {
    let mut rng = init();
    let mut a = Ang3d::<Radians>::ZERO;
    let bound = Ang3d::new(10.0, 10.0, 10.0);
    for _ in 0..ITERATIONS {
        let v = random_vec3(&mut rng);
        a.randomize(-bound, bound, &mut rng);
        assert_relative_eq!(v.rotated(a).length(), v.length(), max_relative = 1e-12);
        assert_relative_eq!(
            v.truncate().rotated(ang1::<_, Radians>(a.yaw())).length(),
            v.truncate().length(),
            max_relative = 1e-12
        );
    }
}

#[test]
fn matrix_properties() {
    let mut rng = init();
    let mut m = Mat4d::ZERO;
    for _ in 0..ITERATIONS / 10 {
        m.randomize(-10.0, 10.0, &mut rng);
        assert_eq!(m.transpose().transpose(), m);
        assert_relative_eq!(
            m.determinant(),
            m.transpose().determinant(),
            epsilon = 1e-9,
            max_relative = 1e-9
        );
        assert_eq!(m * Mat4d::IDENTITY, m);
        assert_eq!(Mat4d::IDENTITY * m, m);
    }
    assert_eq!(Mat4d::IDENTITY * Mat4d::IDENTITY, Mat4d::IDENTITY);
    assert_eq!(Mat2x3::<i32>::IDENTITY * Mat3::<i32>::IDENTITY, Mat2x3::<i32>::IDENTITY);

    let mut ints = Mat3::<i64>::ZERO;
    ints.randomize(-9, 9, &mut rng);
    let scaled = ints * 2;
    assert_eq!(scaled.determinant(), ints.determinant() * 8);
}

#[test]
fn rotation_matrix_is_orthogonal() {
    let mut rng = init();
    let mut a = Ang3d::<Radians>::ZERO;
    let bound = Ang3d::new(7.0, 7.0, 7.0);
    for _ in 0..ITERATIONS / 10 {
        a.randomize(-bound, bound, &mut rng);
        let m = a.to_matrix();
        assert_abs_diff_eq!(m * m.transpose(), Mat3d::IDENTITY, epsilon = 1e-12);
        assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-12);
    }
}
