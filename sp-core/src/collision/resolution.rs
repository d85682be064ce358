//! Contact resolution: positional correction and velocity response.
//!
//! The correction removes the full penetration along the contact normal,
//! split proportionally to inverse mass, so a static body absorbs nothing
//! and a pair of equal dynamic bodies shares the separation evenly.
//!
//! The velocity response reflects the approaching relative velocity along
//! the normal, scaled by the restitution coefficient. Reflected speeds
//! below the rest-velocity threshold settle to exactly zero; without the
//! threshold a resting sphere would re-bounce by `restitution * g * dt`
//! every step and never come to rest.

use crate::body::Body;
use crate::types::Contact;

/// Separates `a` from `b` and applies the velocity response.
///
/// The contact normal must point toward `a`, the convention used by the
/// detection queries. A pair of two static bodies is left untouched.
pub fn resolve(a: &mut Body, b: &mut Body, contact: &Contact, restitution: f64, rest_velocity: f64) {
    let inv_a = a.inverse_mass();
    let inv_b = b.inverse_mass();
    let inv_sum = inv_a + inv_b;
    if inv_sum == 0.0 {
        return;
    }

    // Positional correction: remove the full penetration, split by inverse mass.
    let correction = contact.normal * (contact.penetration / inv_sum);
    a.position += correction * inv_a;
    b.position -= correction * inv_b;

    // Velocity response only applies while the pair is still approaching.
    let approach = (a.velocity - b.velocity).dot(&contact.normal);
    if approach >= 0.0 {
        return;
    }

    let mut bounce = -restitution * approach;
    if bounce < rest_velocity {
        bounce = 0.0;
    }

    let impulse = (bounce - approach) / inv_sum;
    a.velocity += contact.normal * (impulse * inv_a);
    b.velocity -= contact.normal * (impulse * inv_b);
}

// =============================================================================
// Tests
// =============================================================================
