//! Distance constraints between cloth particles.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::{Vec, LENGTH_EPSILON};

/// Which deformation mode a constraint resists.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// Direct row/column neighbors; resists stretching.
    Structural,
    /// Diagonal neighbors within one cell; resists shearing.
    Shear,
    /// Neighbors two cells apart (straight or diagonal); resists folding.
    Bend,
}

/// Result of relaxing one constraint.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Relaxation {
    Applied,
    /// Endpoints coincide, so there is no direction to correct along.
    Degenerate,
}

/// Keeps two particles near the distance they had when the constraint
/// was created.
///
/// Endpoints are indices into the owning cloth's particle array.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraint<F: Float> {
    pub a: usize,
    pub b: usize,
    rest_length: F,
    pub kind: ConstraintKind,
}

impl<F: Float> DistanceConstraint<F> {
    /// Link `a` and `b`, taking their current separation as rest length.
    pub fn from_particles(a: usize, b: usize, particles: &[Particle<F>], kind: ConstraintKind) -> Self {
        let rest_length = (particles[b].pos - particles[a].pos).length();
        DistanceConstraint { a, b, rest_length, kind }
    }

    pub fn rest_length(&self) -> F {
        self.rest_length
    }

    /// Current separation of the two endpoints.
    pub fn current_length(&self, particles: &[Particle<F>]) -> F {
        (particles[self.b].pos - particles[self.a].pos).length()
    }

    /// Move both endpoints toward the rest length.
    ///
    /// Each movable endpoint takes half of the correction regardless of
    /// mass; a pinned endpoint's half is dropped, not transferred.
    pub fn relax(&self, particles: &mut [Particle<F>]) -> Relaxation {
        let delta = particles[self.b].pos - particles[self.a].pos;
        let dist = delta.length();
        if dist.is_near_zero(F::from_f32(LENGTH_EPSILON)) {
            return Relaxation::Degenerate;
        }

        let half = delta.scale((F::one() - self.rest_length / dist) * F::half());

        let a = &mut particles[self.a];
        if a.is_movable() {
            a.pos = a.pos + half;
        }
        let b = &mut particles[self.b];
        if b.is_movable() {
            b.pos = b.pos - half;
        }
        Relaxation::Applied
    }
}
