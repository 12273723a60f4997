use approx::assert_abs_diff_eq;
use drape::{Contact, Particle, SphereCollider, Vec3};
use drape::vec::Vec;

#[test]
fn free_fall_one_step_is_exact() {
    let dt = 0.1f32;
    let mut p: Particle<f32> = Particle::new(Vec3::zero(), 1.0, 0.0);
    let sphere = SphereCollider::new(Vec3::new(0.0, 1000.0, 0.0), 1.0);

    p.add_force(Vec3::new(0.0, -9.81 * dt, 0.0));
    p.integrate(dt);
    assert_eq!(p.resolve_collision(&sphere), Contact::None);

    assert_eq!(p.pos.y, -9.81 * dt * dt);
    assert_eq!(p.pos.x, 0.0);
    assert_eq!(p.pos.z, 0.0);
}

#[test]
fn free_fall_carries_velocity() {
    let dt = 1.0 / 60.0;
    let mut p: Particle<f64> = Particle::new(Vec3::new(0.0, 100.0, 0.0), 1.0, 0.0);
    let steps = 60;

    for _ in 0..steps {
        p.add_force(Vec3::new(0.0, -9.81 * dt, 0.0));
        p.integrate(dt);
    }

    // Position Verlet with acceleration * dt^2 per step: y drops by
    // g * dt^2 * n(n+1)/2 after n steps.
    let n = steps as f64;
    let expected_y = 100.0 - 9.81 * dt * dt * n * (n + 1.0) * 0.5;
    assert_abs_diff_eq!(p.pos.y, expected_y, epsilon = 1e-9);
    assert_abs_diff_eq!(p.velocity_raw().y, -9.81 * dt * dt * n, epsilon = 1e-12);
}

#[test]
fn damping_bleeds_velocity() {
    let mut p: Particle<f32> = Particle::new(Vec3::zero(), 1.0, 0.5);
    p.prev_pos = Vec3::new(-1.0, 0.0, 0.0);
    for _ in 0..10 {
        p.integrate(1.0 / 60.0);
    }
    assert!(p.velocity_raw().length() < 1e-3);
    assert_abs_diff_eq!(p.pos.x, 1.0 - 0.5f32.powi(10), epsilon = 1e-5);
}

#[test]
fn collision_containment_from_any_direction() {
    let sphere = SphereCollider::new(Vec3::new(1.0f32, 2.0, 3.0), 1.5);
    let offsets = [
        Vec3::new(0.3, 0.0, 0.0),
        Vec3::new(0.0, -1.2, 0.0),
        Vec3::new(0.4, 0.4, -0.4),
        Vec3::new(-1.0, 0.2, 0.7),
    ];
    for offset in offsets {
        let mut p = Particle::new(sphere.center + offset, 1.0, 0.0);
        assert_eq!(p.resolve_collision(&sphere), Contact::Resolved);
        let d_sq = p.pos.distance_sq(sphere.center);
        assert!(d_sq >= sphere.radius_sq() * (1.0 - 1e-5), "offset {:?} left particle inside", offset);
        // Projection keeps the direction from the center.
        let dir = (p.pos - sphere.center).normalize();
        assert_abs_diff_eq!(dir.dot(offset.normalize()), 1.0, epsilon = 1e-5);
    }
}
