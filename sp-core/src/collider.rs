//! Geometric shape descriptors and their proximity queries.
//!
//! Colliders are stored in the owning body's local frame; the body's world
//! position supplies the offset at query time. The plane is the one
//! exception: it is fixed at the world origin with normal +Y, whatever its
//! body's position.
//!
//! Shapes are immutable once constructed. Malformed parameters (a
//! non-positive radius, inverted box bounds) are caller errors and are
//! rejected at construction.

use serde::{Deserialize, Serialize};

use crate::error::PhysicsError;
use crate::types::Vec3;

/// Shape attached to a body.
///
/// The variant set is closed: the world's narrow phase dispatches on the
/// concrete pair, and pairs outside the supported table produce no contact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Collider {
    /// Sphere of the given radius, centred on the owning body's position.
    Sphere { radius: f64 },
    /// Infinite ground plane through the world origin, normal +Y.
    Plane,
    /// Axis-aligned box with bounds relative to the owning body's position.
    Aabb { min: Vec3, max: Vec3 },
}

impl Collider {
    /// Creates a sphere collider. The radius must be positive and finite.
    pub fn sphere(radius: f64) -> Result<Self, PhysicsError> {
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(PhysicsError::InvalidRadius(radius));
        }
        Ok(Self::Sphere { radius })
    }

    /// Creates the ground plane collider.
    pub fn plane() -> Self {
        Self::Plane
    }

    /// Creates an axis-aligned box collider from local bounds.
    ///
    /// `min` must be strictly below `max` on every axis and both must be
    /// finite.
    pub fn aabb(min: Vec3, max: Vec3) -> Result<Self, PhysicsError> {
        let ordered = min.x < max.x && min.y < max.y && min.z < max.z;
        if !ordered || !min.is_finite() || !max.is_finite() {
            return Err(PhysicsError::InvalidBounds { min, max });
        }
        Ok(Self::Aabb { min, max })
    }

    /// Point on this collider nearest to `query`, with the owning body at
    /// `body_position`.
    ///
    /// For a sphere this is the surface projection of `query`; a query at
    /// the exact centre has no unique direction, so world up keeps the
    /// result deterministic. For the plane it is the orthogonal projection
    /// onto y = 0. For a box it is the component-wise clamp of `query` into
    /// the bounds, which degenerates to `query` itself when the point lies
    /// inside the box; callers that need a surface point must test
    /// containment separately.
    pub fn closest_point(&self, query: Vec3, body_position: Vec3) -> Vec3 {
        match *self {
            Self::Sphere { radius } => {
                let dir = (query - body_position).normalized_or(Vec3::UP);
                body_position + dir * radius
            }
            Self::Plane => Vec3::new(query.x, 0.0, query.z),
            Self::Aabb { min, max } => body_position + (query - body_position).clamp(min, max),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
