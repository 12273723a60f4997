//! Step observer trait for monitoring cloth simulation progress.

use crate::float::Float;
use crate::particle::Particle;

/// Counters describing what happened during one [`Cloth::step`](crate::Cloth::step).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Particles pushed back out of the collider.
    pub collisions: usize,
    /// Particles found exactly at the collider center and left in place.
    pub degenerate_collisions: usize,
    /// Constraint corrections skipped because the endpoints coincided,
    /// summed over all passes.
    pub degenerate_constraints: usize,
    /// Sweeps over all constraints performed this step.
    pub relaxation_passes: usize,
}

impl StepReport {
    /// True if any correction had to be skipped.
    pub fn has_degeneracies(&self) -> bool {
        self.degenerate_collisions > 0 || self.degenerate_constraints > 0
    }
}

/// Trait for observing cloth simulation steps.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver<F: Float> {
    /// Called after gravity and wind have been accumulated.
    fn on_forces_applied(&mut self) {}

    /// Called after every particle has been integrated and pushed out of
    /// the collider, before any relaxation.
    fn on_integrate(&mut self, _particles: &[Particle<F>]) {}

    /// Called after each relaxation pass.
    fn on_relaxation_pass(&mut self, _pass: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self, _report: &StepReport) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}
