//! Sphere collider that movable particles are pushed out of.

use crate::error::ClothError;
use crate::float::Float;
use crate::vec::{Vec, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A sphere snapshot: center and radius.
///
/// The host owns the real collider and may move it between frames; the
/// cloth only ever sees a copy taken at the start of a step.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SphereCollider<F: Float> {
    pub center: Vec3<F>,
    pub radius: F,
}

impl<F: Float> SphereCollider<F> {
    pub fn new(center: Vec3<F>, radius: F) -> Self {
        SphereCollider { center, radius }
    }

    /// Derive the radius from a uniform scale, as a scene node holding a
    /// unit-diameter sphere mesh would report it. `factor` is the radius
    /// per unit of scale (0.5 for an exact fit).
    pub fn from_scale(center: Vec3<F>, scale: F, factor: F) -> Self {
        SphereCollider { center, radius: scale * factor }
    }

    pub fn radius_sq(&self) -> F {
        self.radius * self.radius
    }

    /// Strictly inside: points exactly on the surface are outside.
    pub fn contains(&self, point: Vec3<F>) -> bool {
        point.distance_sq(self.center) < self.radius_sq()
    }

    /// Project `point` onto the surface along the ray from the center.
    ///
    /// `None` when the point sits on the center and has no direction.
    pub fn project_to_surface(&self, point: Vec3<F>) -> Option<Vec3<F>> {
        let dir = (point - self.center).try_normalize()?;
        Some(self.center + dir.scale(self.radius))
    }

    pub fn validate(&self) -> Result<(), ClothError> {
        if !self.center.is_finite() || !self.radius.is_finite() || self.radius < F::zero() {
            return Err(ClothError::InvalidCollider);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_point_is_not_contained() {
        let s = SphereCollider::new(Vec3::new(0.0f32, 0.0, 0.0), 2.0);
        assert!(!s.contains(Vec3::new(2.0, 0.0, 0.0)));
        assert!(s.contains(Vec3::new(1.0, 1.0, 0.0)));
    }

    #[test]
    fn projection_lands_on_surface() {
        let s = SphereCollider::new(Vec3::new(1.0f64, 1.0, 1.0), 3.0);
        let p = s.project_to_surface(Vec3::new(1.0, 2.0, 1.0)).unwrap();
        assert!((p.y - 4.0).abs() < 1e-12);
        assert!((p.distance(s.center) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn center_has_no_projection() {
        let s = SphereCollider::new(Vec3::new(0.0f32, 5.0, 0.0), 1.0);
        assert_eq!(s.project_to_surface(s.center), None);
    }

    #[test]
    fn from_scale_applies_factor() {
        let s = SphereCollider::from_scale(Vec3::zero(), 10.0f32, 0.6);
        assert!((s.radius - 6.0).abs() < 1e-6);
    }

    #[test]
    fn negative_radius_rejected() {
        let s = SphereCollider::new(Vec3::zero(), -1.0f32);
        assert_eq!(s.validate(), Err(ClothError::InvalidCollider));
    }
}
