//! # SP Core
//!
//! A lightweight rigid-body physics core for 3D/VR demos: a fixed-step
//! simulation that advances bodies under gravity and resolves contact
//! against spheres, a ground plane, and axis-aligned boxes.
//!
//! The surrounding application owns everything presentational. It drives
//! the world from its own animation loop, copies body positions into its
//! render objects after each step, and reacts to contact through per-body
//! hooks. The core never schedules anything and never pushes updates out.
//!
//! ## Architecture
//!
//! - `types`: Core data structures (Vec3, contacts, constants)
//! - `collider`: Shape descriptors (sphere, ground plane, axis-aligned box)
//! - `body`: One collider plus the dynamic state the world advances
//! - `collision`: Detection and resolution for the supported shape pairs
//! - `world`: Body ownership and the fixed-step simulation loop
//! - `config`: YAML-backed world configuration
//! - `error`: Configuration-boundary error type
//!
//! ## Example
//!
//! ```
//! use sp_core::{Body, Collider, Vec3, World};
//!
//! let mut world = World::new();
//! world.add_body(Body::fixed(Collider::plane(), Vec3::ZERO));
//! let ball = world.add_body(
//!     Body::dynamic(Collider::sphere(0.5)?, 1.0, Vec3::new(0.0, 4.0, 0.0))?,
//! );
//!
//! for _ in 0..240 {
//!     world.step(1.0 / 60.0)?;
//! }
//!
//! let resting = world.body(ball).unwrap();
//! assert!((resting.position.y - 0.5).abs() < 0.01);
//! # Ok::<(), sp_core::PhysicsError>(())
//! ```

pub mod body;
pub mod collider;
pub mod collision;
pub mod config;
pub mod error;
pub mod types;
pub mod world;

pub use body::{Body, ContactHook};
pub use collider::Collider;
pub use config::WorldConfig;
pub use error::PhysicsError;
pub use types::{Contact, Vec3};
pub use world::{BodyHandle, World};
