//! Body state: one collider plus the dynamic quantities the world advances.

use std::fmt;

use crate::collider::Collider;
use crate::error::PhysicsError;
use crate::types::{Contact, Vec3};

/// Caller-supplied reaction to a contact, fired at most once per step on the
/// first contact detected for the owning body (e.g. to trigger a sound).
pub type ContactHook = Box<dyn FnMut(&Contact)>;

/// A simulated entity: position, velocity, mass, and exactly one collider.
///
/// `position` and `velocity` are public on purpose. The caller owns the
/// presentation side and copies `position` into its render object after each
/// step; it may also nudge a body around between steps the same way. The
/// core never reaches into presentation state, it only carries the opaque
/// `user_data` handle so the caller can find its own object again.
///
/// A body with zero mass is static: it never integrates, absorbs no
/// positional correction, and receives no impulse. The ground plane and the
/// box obstacles are constructed this way.
pub struct Body {
    pub position: Vec3,
    pub velocity: Vec3,
    mass: f64,
    collider: Collider,
    user_data: u128,
    pub(crate) on_contact: Option<ContactHook>,
}

impl Body {
    /// Creates a dynamic body at rest. The mass must be positive and finite.
    pub fn dynamic(collider: Collider, mass: f64, position: Vec3) -> Result<Self, PhysicsError> {
        if !(mass > 0.0) || !mass.is_finite() {
            return Err(PhysicsError::InvalidMass(mass));
        }
        Ok(Self {
            position,
            velocity: Vec3::ZERO,
            mass,
            collider,
            user_data: 0,
            on_contact: None,
        })
    }

    /// Creates a static (immovable, infinite-effective-mass) body.
    pub fn fixed(collider: Collider, position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            mass: 0.0,
            collider,
            user_data: 0,
            on_contact: None,
        }
    }

    /// Sets the initial velocity.
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Attaches an opaque caller handle the core never interprets.
    pub fn with_user_data(mut self, user_data: u128) -> Self {
        self.user_data = user_data;
        self
    }

    /// Attaches a contact hook.
    pub fn with_contact_hook(mut self, hook: impl FnMut(&Contact) + 'static) -> Self {
        self.on_contact = Some(Box::new(hook));
        self
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Zero for a static body, so it takes no share of any correction.
    pub fn inverse_mass(&self) -> f64 {
        if self.mass == 0.0 {
            0.0
        } else {
            1.0 / self.mass
        }
    }

    pub fn is_static(&self) -> bool {
        self.mass == 0.0
    }

    pub fn collider(&self) -> &Collider {
        &self.collider
    }

    pub fn user_data(&self) -> u128 {
        self.user_data
    }

    /// Advances velocity, then position, by one semi-implicit Euler step.
    /// Static bodies are left untouched.
    pub fn integrate(&mut self, dt: f64, gravity: Vec3) {
        if self.is_static() {
            return;
        }
        self.velocity += gravity * dt;
        self.position += self.velocity * dt;
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Body")
            .field("position", &self.position)
            .field("velocity", &self.velocity)
            .field("mass", &self.mass)
            .field("collider", &self.collider)
            .field("user_data", &self.user_data)
            .field("on_contact", &self.on_contact.is_some())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
