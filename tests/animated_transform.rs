use raygeom::core::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn uniform_sample_sphere(u1: Float, u2: Float) -> Vector3f {
    let z = 1.0 - 2.0 * u1;
    let r = Float::sqrt(Float::max(0.0, 1.0 - z * z));
    let phi = 2.0 * PI * u2;
    return Vector3f::new(r * Float::cos(phi), r * Float::sin(phi), z);
}

fn random_rotation(rng: &mut Rng) -> Transform {
    let theta = -180.0 + 360.0 * rng.uniform_float();
    let axis = uniform_sample_sphere(rng.uniform_float(), rng.uniform_float());
    return Transform::rotate(theta, &axis);
}

/// Matrix -> quaternion -> matrix round trip over random rotations,
/// covering the trace branch and all three diagonal branches.
#[test]
fn quaternion_round_trips_random_rotations() {
    init_logger();
    let mut rng = Rng::new();
    for _ in 0..200 {
        let t = random_rotation(&mut rng);
        let q = Quaternion::from_matrix(&t.m).normalize();
        let back = q.to_transform();
        for i in 0..16 {
            assert!(
                Float::abs(back.m.m[i] - t.m.m[i]) < 1e-3,
                "round trip drifted: {:?} vs {:?}",
                back.m,
                t.m
            );
        }
    }
}

#[test]
fn slerp_preserves_unit_length() {
    let mut rng = Rng::new_sequence(11);
    for _ in 0..100 {
        let q1 = Quaternion::from_matrix(&random_rotation(&mut rng).m);
        let mut q2 = Quaternion::from_matrix(&random_rotation(&mut rng).m);
        if Quaternion::dot(&q1, &q2) < 0.0 {
            q2 = -q2;
        }
        for i in 0..=8 {
            let t = i as Float / 8.0;
            let s = Quaternion::slerp(t, &q1, &q2);
            assert!(Float::abs(Quaternion::dot(&s, &s) - 1.0) < 1e-3);
        }
    }
}

#[test]
fn interpolation_matches_keyframes_at_endpoints() {
    let mut rng = Rng::new_sequence(12);
    for _ in 0..50 {
        let t0 = random_rotation(&mut rng) * Transform::translate(&Vector3f::new(
            rng.uniform_float(),
            rng.uniform_float(),
            rng.uniform_float(),
        ));
        let t1 = random_rotation(&mut rng);
        let at = AnimatedTransform::new(&t0, 0.0, &t1, 1.0);
        assert_eq!(at.interpolate(0.0), t0);
        assert_eq!(at.interpolate(1.0), t1);
    }
}

#[test]
fn interpolated_rotation_tracks_angle() {
    let t0 = Transform::identity();
    let t1 = Transform::rotate_y(80.0);
    let at = AnimatedTransform::new(&t0, 0.0, &t1, 1.0);
    for i in 0..=8 {
        let time = i as Float / 8.0;
        let expected = Transform::rotate_y(80.0 * time);
        let v = at.transform_vector(time, &Vector3f::new(1.0, 0.0, 0.0));
        let ve = expected.transform_vector(&Vector3f::new(1.0, 0.0, 0.0));
        assert!(
            Vector3f::distance(&v, &ve) < 1e-3,
            "time {}: {:?} vs {:?}",
            time,
            v,
            ve
        );
    }
}

#[test]
fn motion_bounds_contain_interpolated_boxes() {
    init_logger();
    let mut rng = Rng::new_sequence(13);
    for _ in 0..20 {
        let t0 = random_rotation(&mut rng);
        let t1 = random_rotation(&mut rng)
            * Transform::translate(&Vector3f::new(
                -5.0 + 10.0 * rng.uniform_float(),
                -5.0 + 10.0 * rng.uniform_float(),
                -5.0 + 10.0 * rng.uniform_float(),
            ));
        let at = AnimatedTransform::new(&t0, 0.0, &t1, 1.0);
        let b = Bounds3f::new(&Point3f::new(-1.0, -1.0, -1.0), &Point3f::new(1.0, 1.0, 1.0));
        let mb = at.motion_bounds(&b);

        let mut time = 0.0;
        while time <= 1.0 {
            let tb = at.interpolate(time).transform_bounds(&b);
            // Shrink slightly to absorb round-off at the sampled extrema.
            let slop = tb.diagonal() * 1e-3;
            let inner = Bounds3f::new(&(tb.min + slop), &(tb.max - slop));
            assert!(inner.min.x >= mb.min.x && inner.max.x <= mb.max.x);
            assert!(inner.min.y >= mb.min.y && inner.max.y <= mb.max.y);
            assert!(inner.min.z >= mb.min.z && inner.max.z <= mb.max.z);
            time += 0.01 + 0.02 * rng.uniform_float();
        }
    }
}

#[test]
fn static_animation_short_circuits() {
    let t = Transform::look_at(
        &Point3f::new(0.0, 1.0, 5.0),
        &Point3f::new(0.0, 0.0, 0.0),
        &Vector3f::new(0.0, 1.0, 0.0),
    );
    let at = AnimatedTransform::new(&t, 0.0, &t, 1.0);
    assert!(!at.is_animated());
    let p = Point3f::new(0.3, 0.4, 0.5);
    for time in [0.0, 0.3, 0.9, 1.0] {
        assert_eq!(at.transform_point(time, &p), t.transform_point(&p));
        assert_eq!(at.interpolate(time), t);
    }
}
