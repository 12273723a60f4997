//! Verlet particles: point masses with implicit velocity.

use crate::collider::SphereCollider;
use crate::float::Float;
use crate::vec::{Vec, Vec3};

/// Outcome of a collision check for one particle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Contact {
    /// Particle was outside the sphere (or pinned); nothing changed.
    None,
    /// Particle was inside and has been moved onto the surface.
    Resolved,
    /// Particle sits on the sphere center; no push direction exists.
    Degenerate,
}

/// A Verlet particle — position-based dynamics with implicit velocity.
///
/// Velocity is never stored: it is the difference between `pos` and
/// `prev_pos`. Pinned (non-movable) particles keep both positions forever.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    pub pos: Vec3<F>,
    pub prev_pos: Vec3<F>,
    /// Force-per-mass accumulated since the last `integrate`.
    pub acceleration: Vec3<F>,
    pub mass: F,
    pub damping: F,
    movable: bool,
}

impl<F: Float> Particle<F> {
    pub fn new(pos: Vec3<F>, mass: F, damping: F) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            acceleration: Vec3::zero(),
            mass,
            damping,
            movable: true,
        }
    }

    pub fn pinned(pos: Vec3<F>, mass: F, damping: F) -> Self {
        Particle { movable: false, ..Particle::new(pos, mass, damping) }
    }

    pub fn is_movable(&self) -> bool {
        self.movable
    }

    /// Accumulate a force-per-mass. Contributions add up until `integrate`.
    /// Pinned particles ignore forces.
    pub fn add_force(&mut self, force_per_mass: Vec3<F>) {
        if self.movable {
            self.acceleration = self.acceleration + force_per_mass;
        }
    }

    /// Accumulate a raw force, dividing by this particle's mass first.
    pub fn apply_force(&mut self, force: Vec3<F>) {
        self.add_force(force.scale(F::one() / self.mass));
    }

    /// Advance one Verlet step.
    ///
    /// `new = pos + (pos - prev) * (1 - damping) + acceleration * dt`.
    /// The accumulated acceleration is consumed. Pinned particles are
    /// left untouched.
    pub fn integrate(&mut self, dt: F) {
        if !self.movable {
            return;
        }
        let velocity = (self.pos - self.prev_pos).scale(F::one() - self.damping);
        let new_pos = self.pos + velocity + self.acceleration.scale(dt);
        self.prev_pos = self.pos;
        self.pos = new_pos;
        self.acceleration = Vec3::zero();
    }

    /// Push the particle out of `sphere` if it ended up inside.
    ///
    /// Only resolves the final position; a particle moving further than
    /// the sphere's diameter in one step can pass straight through.
    pub fn resolve_collision(&mut self, sphere: &SphereCollider<F>) -> Contact {
        if !self.movable || !sphere.contains(self.pos) {
            return Contact::None;
        }
        match sphere.project_to_surface(self.pos) {
            Some(surface) => {
                self.pos = surface;
                Contact::Resolved
            }
            None => Contact::Degenerate,
        }
    }

    /// Per-step displacement, `pos - prev_pos`.
    pub fn velocity_raw(&self) -> Vec3<F> {
        self.pos - self.prev_pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn far_sphere() -> SphereCollider<f32> {
        SphereCollider::new(Vec3::new(1000.0, 1000.0, 1000.0), 1.0)
    }

    #[test]
    fn forces_accumulate_additively() {
        let mut p = Particle::new(Vec3::zero(), 1.0f32, 0.0);
        p.add_force(Vec3::new(1.0, 0.0, 0.0));
        p.add_force(Vec3::new(0.5, 2.0, 0.0));
        assert_eq!(p.acceleration, Vec3::new(1.5, 2.0, 0.0));
    }

    #[test]
    fn apply_force_divides_by_mass() {
        let mut p = Particle::new(Vec3::zero(), 4.0f32, 0.0);
        p.apply_force(Vec3::new(8.0, 0.0, 0.0));
        assert_eq!(p.acceleration, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn integrate_consumes_acceleration() {
        let mut p = Particle::new(Vec3::zero(), 1.0f32, 0.0);
        p.add_force(Vec3::new(0.0, -1.0, 0.0));
        p.integrate(0.5);
        assert_eq!(p.acceleration, Vec3::zero());
        assert_eq!(p.prev_pos, Vec3::zero());
        assert_eq!(p.pos, Vec3::new(0.0, -0.5, 0.0));
    }

    #[test]
    fn damping_scales_carried_velocity() {
        let mut p = Particle::new(Vec3::new(1.0f64, 0.0, 0.0), 1.0, 0.25);
        p.prev_pos = Vec3::zero();
        p.integrate(0.1);
        assert!((p.pos.x - 1.75).abs() < 1e-12);
        assert_eq!(p.prev_pos.x, 1.0);
    }

    #[test]
    fn pinned_particle_ignores_integration() {
        let mut p = Particle::pinned(Vec3::new(5.0f32, 5.0, 5.0), 1.0, 0.0);
        p.add_force(Vec3::new(1000.0, 1000.0, 1000.0));
        assert_eq!(p.acceleration, Vec3::zero());
        p.integrate(1.0 / 60.0);
        assert_eq!(p.pos, Vec3::new(5.0, 5.0, 5.0));
        assert_eq!(p.prev_pos, Vec3::new(5.0, 5.0, 5.0));
    }

    #[test]
    fn collision_pushes_to_surface() {
        let sphere = SphereCollider::new(Vec3::zero(), 2.0f32);
        let mut p = Particle::new(Vec3::new(0.0, 1.0, 0.0), 1.0, 0.0);
        assert_eq!(p.resolve_collision(&sphere), Contact::Resolved);
        assert!((p.pos.y - 2.0).abs() < 1e-6);
    }

    #[test]
    fn collision_at_center_is_skipped() {
        let sphere = SphereCollider::new(Vec3::zero(), 2.0f32);
        let mut p = Particle::new(Vec3::zero(), 1.0, 0.0);
        assert_eq!(p.resolve_collision(&sphere), Contact::Degenerate);
        assert_eq!(p.pos, Vec3::zero());
        assert!(p.pos.is_finite());
    }

    #[test]
    fn pinned_particle_ignores_collision() {
        let sphere = SphereCollider::new(Vec3::zero(), 2.0f32);
        let mut p = Particle::pinned(Vec3::new(0.5, 0.0, 0.0), 1.0, 0.0);
        assert_eq!(p.resolve_collision(&sphere), Contact::None);
        assert_eq!(p.pos, Vec3::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn far_sphere_leaves_particle_alone() {
        let mut p = Particle::new(Vec3::zero(), 1.0, 0.0);
        assert_eq!(p.resolve_collision(&far_sphere()), Contact::None);
    }
}
