//! Configuration for cloth construction and per-frame input.

use crate::collider::SphereCollider;
use crate::error::ClothError;
use crate::float::Float;
use crate::vec::{Vec, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Relaxation passes per step unless configured otherwise.
pub const DEFAULT_RELAXATION_PASSES: usize = 10;

/// Standard gravity, m/s².
pub const GRAVITY: f64 = 9.81;

/// Configuration for building a [`Cloth`](crate::Cloth).
///
/// # Builder Pattern
/// ```
/// use drape::config::ClothConfig;
/// use drape::vec::Vec3;
///
/// let config: ClothConfig<f32> = ClothConfig::new(12, 16)
///     .with_rest_distance(0.5)
///     .with_damping(0.01)
///     .with_anchor(Vec3::new(0.0, 8.0, 0.0));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClothConfig<F: Float> {
    pub rows: usize,
    pub cols: usize,
    /// Spacing between neighboring particles at creation. Default: 3.0.
    pub rest_distance: F,
    /// Fraction of carried velocity lost per step, in [0, 1). Default: 0.005.
    pub damping: F,
    /// Mass of every particle. Default: 1.0.
    pub particle_mass: F,
    /// Point the grid is centered on horizontally. Default: origin.
    pub anchor: Vec3<F>,
    /// Gravitational acceleration. Default: (0, -9.81, 0).
    pub gravity: Vec3<F>,
    /// Sweeps over all constraints per step. Default: 10.
    pub relaxation_passes: usize,
}

impl<F: Float> ClothConfig<F> {
    /// Create a config for a `rows` x `cols` grid with default values.
    pub fn new(rows: usize, cols: usize) -> Self {
        ClothConfig {
            rows,
            cols,
            rest_distance: F::from_f64(3.0),
            damping: F::from_f64(0.005),
            particle_mass: F::one(),
            anchor: Vec3::zero(),
            gravity: Vec3::new(F::zero(), F::from_f64(-GRAVITY), F::zero()),
            relaxation_passes: DEFAULT_RELAXATION_PASSES,
        }
    }

    pub fn with_rest_distance(mut self, rest_distance: F) -> Self {
        self.rest_distance = rest_distance;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_particle_mass(mut self, mass: F) -> Self {
        self.particle_mass = mass;
        self
    }

    pub fn with_anchor(mut self, anchor: Vec3<F>) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec3<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_relaxation_passes(mut self, passes: usize) -> Self {
        self.relaxation_passes = passes;
        self
    }

    /// Check every field, reporting the first problem found.
    pub fn validate(&self) -> Result<(), ClothError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ClothError::InvalidDimensions { rows: self.rows, cols: self.cols });
        }
        if !self.rest_distance.is_finite() || self.rest_distance <= F::zero() {
            return Err(ClothError::InvalidRestDistance);
        }
        if !self.damping.is_finite() || self.damping < F::zero() || self.damping >= F::one() {
            return Err(ClothError::InvalidDamping);
        }
        if !self.particle_mass.is_finite() || self.particle_mass <= F::zero() {
            return Err(ClothError::InvalidMass);
        }
        if self.relaxation_passes == 0 {
            return Err(ClothError::InvalidRelaxationPasses);
        }
        if !self.anchor.is_finite() || !self.gravity.is_finite() {
            return Err(ClothError::NonFiniteVector);
        }
        Ok(())
    }
}

/// Everything the host hands the cloth for one step, besides `dt`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameInput<F: Float> {
    /// Collider state sampled by the host for this frame.
    pub collider: SphereCollider<F>,
    pub wind_enabled: bool,
    /// Full-strength wind before time scaling. Default: (30, 0, -30).
    pub wind_force: Vec3<F>,
}

impl<F: Float> FrameInput<F> {
    /// Input with wind switched off.
    pub fn new(collider: SphereCollider<F>) -> Self {
        FrameInput {
            collider,
            wind_enabled: false,
            wind_force: Vec3::new(F::from_f64(30.0), F::zero(), F::from_f64(-30.0)),
        }
    }

    /// Switch wind on with the given full-strength force.
    pub fn with_wind(mut self, force: Vec3<F>) -> Self {
        self.wind_enabled = true;
        self.wind_force = force;
        self
    }

    pub fn with_wind_enabled(mut self, enabled: bool) -> Self {
        self.wind_enabled = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), ClothError> {
        self.collider.validate()?;
        if self.wind_enabled && !self.wind_force.is_finite() {
            return Err(ClothError::InvalidWind);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config: ClothConfig<f32> = ClothConfig::new(10, 10);
        assert_eq!(config.relaxation_passes, 10);
        assert_eq!(config.gravity, Vec3::new(0.0, -9.81, 0.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn f64_defaults_are_exact() {
        let config: ClothConfig<f64> = ClothConfig::new(2, 2);
        assert_eq!(config.gravity.y, -9.81);
        assert_eq!(config.damping, 0.005);
    }

    #[test]
    fn zero_rows_rejected() {
        let config: ClothConfig<f32> = ClothConfig::new(0, 3);
        assert_eq!(config.validate(), Err(ClothError::InvalidDimensions { rows: 0, cols: 3 }));
    }

    #[test]
    fn bad_scalars_rejected() {
        let base: ClothConfig<f64> = ClothConfig::new(3, 3);
        assert_eq!(base.clone().with_rest_distance(0.0).validate(), Err(ClothError::InvalidRestDistance));
        assert_eq!(base.clone().with_rest_distance(f64::NAN).validate(), Err(ClothError::InvalidRestDistance));
        assert_eq!(base.clone().with_damping(-0.1).validate(), Err(ClothError::InvalidDamping));
        assert_eq!(base.clone().with_damping(1.0).validate(), Err(ClothError::InvalidDamping));
        assert_eq!(base.clone().with_particle_mass(0.0).validate(), Err(ClothError::InvalidMass));
        assert_eq!(base.clone().with_relaxation_passes(0).validate(), Err(ClothError::InvalidRelaxationPasses));
        assert_eq!(
            base.with_gravity(Vec3::new(0.0, f64::INFINITY, 0.0)).validate(),
            Err(ClothError::NonFiniteVector)
        );
    }

    #[test]
    fn frame_input_wind_toggle() {
        let input = FrameInput::new(SphereCollider::new(Vec3::zero(), 1.0f32));
        assert!(!input.wind_enabled);
        assert_eq!(input.wind_force, Vec3::new(30.0, 0.0, -30.0));
        let windy = input.with_wind(Vec3::new(1.0, 0.0, 0.0));
        assert!(windy.wind_enabled);
        assert!(windy.with_wind_enabled(false).validate().is_ok());
    }

    #[test]
    fn non_finite_wind_rejected_only_when_enabled() {
        let input = FrameInput::new(SphereCollider::new(Vec3::zero(), 1.0f32));
        let bad = Vec3::new(f32::NAN, 0.0, 0.0);
        assert_eq!(input.with_wind(bad).validate(), Err(ClothError::InvalidWind));
        assert!(input.with_wind(bad).with_wind_enabled(false).validate().is_ok());
    }
}
