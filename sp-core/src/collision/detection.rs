//! Narrow-phase overlap tests.
//!
//! Each test returns `None` when the shapes are clear of each other and a
//! [`Contact`] when they overlap. The contact normal always points toward
//! the first shape of the pair: it is the direction that separates the
//! first body from the second.
//!
//! Degenerate inputs never escape as errors or non-finite values. A
//! zero-length separation axis (coincident sphere centres, a centre sitting
//! exactly on a box face) falls back to world up; a sphere centre strictly
//! inside a box exits through the nearest face, ties broken in face order
//! (-x, +x, -y, +y, -z, +z).

use crate::body::Body;
use crate::collider::Collider;
use crate::types::{Contact, Vec3};

/// Narrow-phase contact between two bodies, dispatched on the shape pair.
///
/// Three combinations are implemented directly; their mirror images reuse
/// them with the normal flipped. Pairs outside the supported table (two
/// planes, plane vs box, two boxes) produce no contact.
pub fn contact(a: &Body, b: &Body) -> Option<Contact> {
    match (*a.collider(), *b.collider()) {
        (Collider::Sphere { radius: ra }, Collider::Sphere { radius: rb }) => {
            sphere_sphere(a.position, ra, b.position, rb)
        }
        (Collider::Sphere { radius }, Collider::Plane) => sphere_plane(a.position, radius),
        (Collider::Plane, Collider::Sphere { radius }) => {
            sphere_plane(b.position, radius).map(Contact::flipped)
        }
        (Collider::Sphere { radius }, Collider::Aabb { min, max }) => {
            sphere_aabb(a.position, radius, b.position, min, max)
        }
        (Collider::Aabb { min, max }, Collider::Sphere { radius }) => {
            sphere_aabb(b.position, radius, a.position, min, max).map(Contact::flipped)
        }
        _ => None,
    }
}

/// Sphere-vs-sphere test.
///
/// Overlap iff the centre distance is strictly below the radius sum. The
/// normal points from the second centre toward the first.
pub fn sphere_sphere(
    center_a: Vec3,
    radius_a: f64,
    center_b: Vec3,
    radius_b: f64,
) -> Option<Contact> {
    let axis = center_a - center_b;
    let dist_sq = axis.magnitude_squared();
    let radius_sum = radius_a + radius_b;
    if dist_sq >= radius_sum * radius_sum {
        return None;
    }

    let dist = dist_sq.sqrt();
    let normal = axis.normalized_or(Vec3::UP);
    Some(Contact {
        point: center_b + normal * radius_b,
        normal,
        penetration: radius_sum - dist,
    })
}

/// Sphere-vs-ground-plane test.
///
/// Overlap iff the signed distance from the centre to y = 0 is strictly
/// below the radius. A centre already below the plane reports the full
/// depth, so resolution pushes it back up through the surface.
pub fn sphere_plane(center: Vec3, radius: f64) -> Option<Contact> {
    if center.y >= radius {
        return None;
    }
    Some(Contact {
        point: Vec3::new(center.x, 0.0, center.z),
        normal: Vec3::UP,
        penetration: radius - center.y,
    })
}

/// Sphere-vs-box test.
///
/// With the centre outside the box, clamping the centre into the bounds
/// yields the nearest surface point; overlap means that point lies strictly
/// closer than the radius. A centre inside the box makes the clamp
/// degenerate (it returns the centre itself), so that case is detected
/// first and resolved by exiting through the nearest face.
pub fn sphere_aabb(
    center: Vec3,
    radius: f64,
    box_position: Vec3,
    min: Vec3,
    max: Vec3,
) -> Option<Contact> {
    let local = center - box_position;
    let inside = local.x > min.x
        && local.x < max.x
        && local.y > min.y
        && local.y < max.y
        && local.z > min.z
        && local.z < max.z;
    if inside {
        return Some(nearest_face_exit(center, radius, local, min, max));
    }

    let closest = box_position + local.clamp(min, max);
    let axis = center - closest;
    let dist_sq = axis.magnitude_squared();
    if dist_sq >= radius * radius {
        return None;
    }

    let dist = dist_sq.sqrt();
    // dist == 0 means the centre sits exactly on a face.
    let normal = axis.normalized_or(Vec3::UP);
    Some(Contact {
        point: closest,
        normal,
        penetration: radius - dist,
    })
}

/// Push-out for the centre-inside-box case: exit through the face with the
/// smallest clearance.
fn nearest_face_exit(center: Vec3, radius: f64, local: Vec3, min: Vec3, max: Vec3) -> Contact {
    let faces = [
        (Vec3::new(-1.0, 0.0, 0.0), local.x - min.x),
        (Vec3::new(1.0, 0.0, 0.0), max.x - local.x),
        (Vec3::new(0.0, -1.0, 0.0), local.y - min.y),
        (Vec3::new(0.0, 1.0, 0.0), max.y - local.y),
        (Vec3::new(0.0, 0.0, -1.0), local.z - min.z),
        (Vec3::new(0.0, 0.0, 1.0), max.z - local.z),
    ];

    let mut best = faces[0];
    for face in &faces[1..] {
        if face.1 < best.1 {
            best = *face;
        }
    }

    let (normal, clearance) = best;
    Contact {
        point: center + normal * clearance,
        normal,
        penetration: clearance + radius,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sphere_sphere_overlap() {
        let contact =
            sphere_sphere(Vec3::ZERO, 1.0, Vec3::new(1.5, 0.0, 0.0), 1.0).expect("should overlap");

        assert_eq!(contact.normal, Vec3::new(-1.0, 0.0, 0.0));
        assert_abs_diff_eq!(contact.penetration, 0.5, epsilon = 1e-12);
        assert_eq!(contact.point, Vec3::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn test_sphere_sphere_separated() {
        assert!(sphere_sphere(Vec3::ZERO, 1.0, Vec3::new(3.0, 0.0, 0.0), 1.0).is_none());
    }

    #[test]
    fn test_sphere_sphere_touching_is_not_contact() {
        // Exactly touching surfaces do not count as overlap.
        assert!(sphere_sphere(Vec3::ZERO, 1.0, Vec3::new(2.0, 0.0, 0.0), 1.0).is_none());
    }

    #[test]
    fn test_sphere_sphere_coincident_centres_fall_back_to_up() {
        let centre = Vec3::new(2.0, 3.0, 4.0);
        let contact = sphere_sphere(centre, 0.5, centre, 0.5).expect("full overlap");

        assert_eq!(contact.normal, Vec3::UP);
        assert_abs_diff_eq!(contact.penetration, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sphere_plane_above_is_clear() {
        assert!(sphere_plane(Vec3::new(0.0, 2.0, 0.0), 0.5).is_none());
        // Exactly resting on the surface is clear too.
        assert!(sphere_plane(Vec3::new(0.0, 0.5, 0.0), 0.5).is_none());
    }

    #[test]
    fn test_sphere_plane_overlap() {
        let contact = sphere_plane(Vec3::new(1.0, 0.3, -2.0), 0.5).expect("should overlap");

        assert_eq!(contact.normal, Vec3::UP);
        assert_abs_diff_eq!(contact.penetration, 0.2, epsilon = 1e-12);
        assert_eq!(contact.point, Vec3::new(1.0, 0.0, -2.0));
    }

    #[test]
    fn test_sphere_plane_below_surface_reports_full_depth() {
        let contact = sphere_plane(Vec3::new(0.0, -0.2, 0.0), 0.5).expect("should overlap");
        assert_abs_diff_eq!(contact.penetration, 0.7, epsilon = 1e-12);
    }

    #[test]
    fn test_sphere_aabb_face_contact() {
        let min = Vec3::new(-1.0, -0.5, -1.5);
        let max = Vec3::new(1.0, 0.5, 1.5);
        let contact = sphere_aabb(Vec3::new(1.3, 0.0, 0.0), 0.5, Vec3::ZERO, min, max)
            .expect("should overlap");

        assert_eq!(contact.normal, Vec3::new(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(contact.penetration, 0.2, epsilon = 1e-12);
        assert_eq!(contact.point, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_sphere_aabb_corner_contact() {
        let min = Vec3::new(-1.0, -1.0, -1.0);
        let max = Vec3::new(1.0, 1.0, 1.0);
        let contact = sphere_aabb(Vec3::new(1.6, 1.8, 0.0), 1.2, Vec3::ZERO, min, max)
            .expect("should overlap");

        // Nearest point is the corner; the normal leaves it diagonally.
        assert_eq!(contact.point, Vec3::new(1.0, 1.0, 0.0));
        assert_abs_diff_eq!(contact.normal.x, 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(contact.normal.y, 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(contact.penetration, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_sphere_aabb_clear() {
        let min = Vec3::new(-1.0, -1.0, -1.0);
        let max = Vec3::new(1.0, 1.0, 1.0);
        assert!(sphere_aabb(Vec3::new(3.0, 0.0, 0.0), 0.5, Vec3::ZERO, min, max).is_none());
    }

    #[test]
    fn test_sphere_aabb_centre_inside_exits_nearest_face() {
        let min = Vec3::new(-1.0, -1.0, -1.0);
        let max = Vec3::new(1.0, 1.0, 1.0);
        let contact = sphere_aabb(Vec3::new(0.4, 0.0, 0.0), 0.5, Vec3::ZERO, min, max)
            .expect("centre inside must still resolve");

        assert_eq!(contact.normal, Vec3::new(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(contact.penetration, 1.1, epsilon = 1e-12);
        assert_eq!(contact.point, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_sphere_aabb_dead_centre_tie_break_is_deterministic() {
        let min = Vec3::new(-1.0, -1.0, -1.0);
        let max = Vec3::new(1.0, 1.0, 1.0);
        let contact = sphere_aabb(Vec3::ZERO, 0.5, Vec3::ZERO, min, max)
            .expect("centre inside must still resolve");

        // All six faces tie; the first in face order wins.
        assert_eq!(contact.normal, Vec3::new(-1.0, 0.0, 0.0));
        assert_abs_diff_eq!(contact.penetration, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_sphere_aabb_centre_on_face_falls_back_to_up() {
        let min = Vec3::new(-1.0, -1.0, -1.0);
        let max = Vec3::new(1.0, 1.0, 1.0);
        let contact = sphere_aabb(Vec3::new(1.0, 0.0, 0.0), 0.5, Vec3::ZERO, min, max)
            .expect("zero distance is full-radius overlap");

        assert_eq!(contact.normal, Vec3::UP);
        assert_abs_diff_eq!(contact.penetration, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_dispatch_mirrors_the_normal() {
        let plane = Body::fixed(Collider::plane(), Vec3::ZERO);
        let ball = Body::dynamic(
            Collider::sphere(0.5).unwrap(),
            1.0,
            Vec3::new(0.0, 0.3, 0.0),
        )
        .unwrap();

        let toward_ball = contact(&ball, &plane).expect("should overlap");
        assert_eq!(toward_ball.normal, Vec3::UP);

        let toward_plane = contact(&plane, &ball).expect("should overlap");
        assert_eq!(toward_plane.normal, -Vec3::UP);
        assert_abs_diff_eq!(
            toward_plane.penetration,
            toward_ball.penetration,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_dispatch_skips_unsupported_pairs() {
        let plane = Body::fixed(Collider::plane(), Vec3::ZERO);
        let box_a = Body::fixed(
            Collider::aabb(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0)).unwrap(),
            Vec3::ZERO,
        );
        let box_b = Body::fixed(
            Collider::aabb(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0)).unwrap(),
            Vec3::new(0.5, 0.0, 0.0),
        );

        assert!(contact(&plane, &box_a).is_none());
        assert!(contact(&box_a, &box_b).is_none());
        assert!(contact(&plane, &plane).is_none());
    }
}
