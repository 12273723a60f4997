//! Verlet cloth simulation for games.
//!
//! `drape` simulates a rectangular piece of fabric as a grid of point
//! masses joined by distance constraints. Each frame the cloth picks up
//! gravity and optional wind, takes a damped Verlet step, is pushed out
//! of a moving sphere, and is then relaxed toward its rest shape by a
//! fixed number of Gauss-Seidel passes over all constraints.
//!
//! # Features
//!
//! - **Verlet integration**: Position-based dynamics with implicit velocity
//! - **Constraint relaxation**: Structural, shear, and bend links, relaxed in place
//! - **Wind**: Per-triangle aerodynamic push along the face normal
//! - **Sphere collision**: Particles are projected back onto a moving sphere
//! - **Surface extraction**: Reusable vertex/normal/UV/index buffers for rendering
//! - **Observable**: Monitor physics steps via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Example
//! ```
//! use drape::{Cloth, ClothConfig, FrameInput, NoOpStepObserver, SphereCollider, Vec3};
//!
//! let mut cloth = Cloth::new(&ClothConfig::<f32>::new(8, 8).with_rest_distance(0.5)).unwrap();
//! let ball = SphereCollider::new(Vec3::new(0.0, -2.0, 0.0), 1.0);
//! let input = FrameInput::new(ball).with_wind(Vec3::new(30.0, 0.0, -30.0));
//!
//! for _ in 0..60 {
//!     cloth.step(1.0 / 60.0, &input, &mut NoOpStepObserver).unwrap();
//! }
//! assert_eq!(cloth.positions().len(), 64);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod collider;
pub mod constraint;
pub mod topology;
pub mod wind;
pub mod cloth;
pub mod surface;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec2, Vec3};
pub use particle::{Contact, Particle};
pub use collider::SphereCollider;
pub use constraint::{ConstraintKind, DistanceConstraint, Relaxation};
pub use cloth::Cloth;
pub use surface::{Space, SurfaceMesh};
pub use config::{ClothConfig, FrameInput};
pub use observer::{NoOpStepObserver, StepObserver, StepReport};
pub use error::ClothError;
