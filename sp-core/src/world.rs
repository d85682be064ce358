//! The world: owns the bodies and advances the simulation.

use log::trace;

use crate::body::Body;
use crate::collision::{detection, resolution};
use crate::config::WorldConfig;
use crate::error::PhysicsError;
use crate::types::{Contact, Vec3};

/// Identifies a body inside the world that created it.
///
/// Handles are the insertion index: the first body added is handle 0, and
/// iteration, pair enumeration and hook dispatch all follow insertion
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub usize);

/// Fixed-step rigid-body world.
///
/// A step is synchronous and runs to completion; no state is carried
/// between steps beyond the bodies themselves, so identical call sequences
/// produce identical results regardless of how the caller schedules them.
///
/// The caller syncs its render objects from body positions after `step`
/// returns; the world never pushes updates anywhere.
pub struct World {
    config: WorldConfig,
    bodies: Vec<Body>,
}

impl World {
    /// World with the default configuration.
    pub fn new() -> Self {
        Self {
            config: WorldConfig::default(),
            bodies: Vec::new(),
        }
    }

    /// World with a custom configuration, validated up front.
    pub fn with_config(config: WorldConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        Ok(Self {
            config,
            bodies: Vec::new(),
        })
    }

    /// World with default parameters except gravity.
    pub fn with_gravity(gravity: Vec3) -> Self {
        Self {
            config: WorldConfig {
                gravity,
                ..WorldConfig::default()
            },
            bodies: Vec::new(),
        }
    }

    /// Registers a body and returns its handle.
    ///
    /// The world takes ownership, so the same body instance cannot be
    /// registered twice.
    pub fn add_body(&mut self, body: Body) -> BodyHandle {
        self.bodies.push(body);
        BodyHandle(self.bodies.len() - 1)
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle.0)
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle.0)
    }

    /// Bodies in insertion order, for post-step render sync.
    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn gravity(&self) -> Vec3 {
        self.config.gravity
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Advances the simulation by the configured fixed timestep.
    pub fn step_fixed(&mut self) -> Result<(), PhysicsError> {
        self.step(self.config.fixed_timestep)
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// Phases, in order:
    /// 1. Integrate every dynamic body under gravity.
    /// 2. Enumerate all unordered body pairs (insertion order, O(n²); fine
    ///    at the tens-of-bodies scale this world targets).
    /// 3. Detect and resolve contact for each candidate pair. When a body
    ///    touches several obstacles in one step, enumeration order decides
    ///    which contact is resolved first; that ordering is a documented
    ///    tie-break, not a physical priority.
    /// 4. Fire contact hooks, at most once per body, with its first
    ///    contact of the step.
    ///
    /// A non-positive or non-finite `dt` is a configuration error and
    /// leaves every body untouched.
    pub fn step(&mut self, dt: f64) -> Result<(), PhysicsError> {
        if !(dt > 0.0 && dt.is_finite()) {
            return Err(PhysicsError::InvalidTimestep(dt));
        }

        let gravity = self.config.gravity;
        for body in &mut self.bodies {
            body.integrate(dt, gravity);
        }

        let count = self.bodies.len();
        let mut first_contacts: Vec<Option<Contact>> = vec![None; count];
        let mut resolved = 0usize;
        for i in 0..count {
            for j in (i + 1)..count {
                let (a, b) = pair_mut(&mut self.bodies, i, j);
                if a.is_static() && b.is_static() {
                    continue;
                }
                if let Some(found) = detection::contact(a, b) {
                    resolution::resolve(
                        a,
                        b,
                        &found,
                        self.config.restitution,
                        self.config.rest_velocity,
                    );
                    resolved += 1;
                    first_contacts[i].get_or_insert(found);
                    first_contacts[j].get_or_insert(found.flipped());
                }
            }
        }

        for (index, contact) in first_contacts.iter().enumerate() {
            if let Some(contact) = contact {
                // The hook is taken out for the call so it cannot alias the
                // body list.
                if let Some(mut hook) = self.bodies[index].on_contact.take() {
                    hook(contact);
                    self.bodies[index].on_contact = Some(hook);
                }
            }
        }

        trace!("step dt={dt} bodies={count} contacts={resolved}");
        Ok(())
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable references to two distinct bodies of the list.
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert!(i < j);
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

// =============================================================================
// Tests
// =============================================================================
