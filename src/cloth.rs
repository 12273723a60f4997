//! The cloth: a pinned grid of Verlet particles stepped frame by frame.

use crate::config::{ClothConfig, FrameInput};
use crate::constraint::{ConstraintKind, DistanceConstraint, Relaxation};
use crate::error::ClothError;
use crate::float::Float;
use crate::observer::{StepObserver, StepReport};
use crate::particle::{Contact, Particle};
use crate::topology::{self, grid_index};
use crate::vec::{Vec, Vec3};
use crate::wind;
use alloc::vec::Vec as AllocVec;
use tracing::{debug, trace, warn};

/// A rectangular cloth hanging from its first row.
///
/// Particle `(row, col)` lives at flat index `row * cols + col`. Row 0
/// is pinned for the cloth's whole lifetime. Grid size and constraint
/// set never change after construction.
pub struct Cloth<F: Float> {
    particles: AllocVec<Particle<F>>,
    constraints: AllocVec<DistanceConstraint<F>>,
    rows: usize,
    cols: usize,
    rest_distance: F,
    anchor: Vec3<F>,
    gravity: Vec3<F>,
    relaxation_passes: usize,
}

impl<F: Float> Cloth<F> {
    /// Build the grid described by `config`, rejecting invalid settings.
    pub fn new(config: &ClothConfig<F>) -> Result<Self, ClothError> {
        let topology::GridTopology { particles, constraints } = topology::build(config)?;

        debug!(
            rows = config.rows,
            cols = config.cols,
            particles = particles.len(),
            constraints = constraints.len(),
            "built cloth grid"
        );

        Ok(Cloth {
            particles,
            constraints,
            rows: config.rows,
            cols: config.cols,
            rest_distance: config.rest_distance,
            anchor: config.anchor,
            gravity: config.gravity,
            relaxation_passes: config.relaxation_passes,
        })
    }

    /// Advance the cloth by `dt` seconds.
    ///
    /// In order: wind (if enabled) and gravity are accumulated, every
    /// particle is integrated and pushed out of the collider, then all
    /// constraints are relaxed in construction order, once per pass.
    /// Corrections made earlier in a pass are visible to later
    /// constraints in the same pass.
    ///
    /// Inputs are checked before anything is touched; on error the cloth
    /// is unchanged.
    pub fn step<O: StepObserver<F>>(
        &mut self,
        dt: F,
        input: &FrameInput<F>,
        observer: &mut O,
    ) -> Result<StepReport, ClothError> {
        if !dt.is_finite() || dt < F::zero() {
            return Err(ClothError::InvalidTimeStep);
        }
        input.validate()?;
        let collider = input.collider;
        let mut report = StepReport::default();

        trace!(dt = ?dt, wind = input.wind_enabled, "cloth step");

        if input.wind_enabled {
            wind::apply_to_grid(&mut self.particles, self.rows, self.cols, input.wind_force.scale(dt));
        }
        let gravity = self.gravity.scale(dt);
        for p in self.particles.iter_mut() {
            p.add_force(gravity);
        }
        observer.on_forces_applied();

        for p in self.particles.iter_mut() {
            p.integrate(dt);
            match p.resolve_collision(&collider) {
                Contact::None => {}
                Contact::Resolved => report.collisions += 1,
                Contact::Degenerate => report.degenerate_collisions += 1,
            }
        }
        observer.on_integrate(&self.particles);

        for pass in 0..self.relaxation_passes {
            for c in self.constraints.iter() {
                if c.relax(&mut self.particles) == Relaxation::Degenerate {
                    report.degenerate_constraints += 1;
                }
            }
            observer.on_relaxation_pass(pass);
        }
        report.relaxation_passes = self.relaxation_passes;

        if report.has_degeneracies() {
            warn!(
                degenerate_constraints = report.degenerate_constraints,
                degenerate_collisions = report.degenerate_collisions,
                "skipped corrections with no defined direction"
            );
        }

        observer.on_step_complete(&report);
        Ok(report)
    }

    /// Sum of `|current length - rest length|` over all constraints.
    pub fn constraint_error(&self) -> F {
        self.constraints.iter().fold(F::zero(), |acc, c| {
            acc + (c.current_length(&self.particles) - c.rest_length()).abs()
        })
    }

    pub fn index(&self, row: usize, col: usize) -> usize {
        grid_index(self.cols, row, col)
    }

    pub fn particle(&self, row: usize, col: usize) -> &Particle<F> {
        &self.particles[self.index(row, col)]
    }

    pub fn position_at(&self, row: usize, col: usize) -> Vec3<F> {
        self.particle(row, col).pos
    }

    /// Current positions, row-major.
    pub fn positions(&self) -> AllocVec<Vec3<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn constraints(&self) -> &[DistanceConstraint<F>] { &self.constraints }

    pub fn constraint_count_of(&self, kind: ConstraintKind) -> usize {
        self.constraints.iter().filter(|c| c.kind == kind).count()
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }
    pub fn rest_distance(&self) -> F { self.rest_distance }
    pub fn anchor(&self) -> Vec3<F> { self.anchor }
    pub fn relaxation_passes(&self) -> usize { self.relaxation_passes }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }
}
