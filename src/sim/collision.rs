//! Collision detection and response against static geometry
//!
//! Narrow-phase only: every body is tested against every platform each frame.
//! Overlap is resolved along the axis of least penetration, with an exact tie
//! resolving vertically.

use super::body::Body;
use super::platform::Platform;

/// Strict AABB overlap on both axes. Touching edges do not collide.
pub fn overlaps(body: &Body, platform: &Platform) -> bool {
    body.left() < platform.right()
        && body.right() > platform.left()
        && body.top() < platform.bottom()
        && body.bottom() > platform.top()
}

/// Separate an overlapping body from a platform along the axis of least
/// penetration.
///
/// Horizontal resolution snaps the body to the platform's near edge and kills
/// horizontal velocity. Vertical resolution from above is a landing (kills
/// vertical velocity and clears the jump flag); from below it is a ceiling
/// hit (kills vertical velocity only).
pub fn resolve(body: &mut Body, platform: &Platform) {
    let overlap_x = (body.right() - platform.left())
        .abs()
        .min((body.left() - platform.right()).abs());
    let overlap_y = (body.bottom() - platform.top())
        .abs()
        .min((body.top() - platform.bottom()).abs());

    // Strictly-smaller X wins; an exact tie falls through to vertical.
    if overlap_x < overlap_y {
        if body.pos.x < platform.x {
            body.pos.x = platform.left() - body.width;
        } else {
            body.pos.x = platform.right();
        }
        body.vel.x = 0.0;
    } else {
        if body.pos.y < platform.y {
            body.pos.y = platform.top() - body.height;
            body.vel.y = 0.0;
            body.is_jumping = false;
        } else {
            body.pos.y = platform.bottom();
            body.vel.y = 0.0;
        }
    }
}

/// Resolve a body against the full platform set. Returns whether any platform
/// collided this frame.
///
/// Any contact at all clears the jump flag afterwards, including pure ceiling
/// or side hits. Quirk inherited from the original game; gameplay depends on
/// it (wall contact re-arms the jump).
pub fn resolve_against(body: &mut Body, platforms: &[Platform]) -> bool {
    let mut any_hit = false;
    for platform in platforms {
        if overlaps(body, platform) {
            resolve(body, platform);
            any_hit = true;
        }
    }
    if any_hit {
        body.is_jumping = false;
    }
    any_hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    #[test]
    fn test_touching_edges_do_not_collide() {
        let platform = Platform::new(0.0, 50.0, 100.0, 20.0);
        // Body bottom exactly on platform top.
        let body = Body::new(10.0, 50.0 - 60.0);
        assert!(!overlaps(&body, &platform));
    }

    #[test]
    fn test_landing_from_above() {
        let platform = Platform::new(0.0, 50.0, 100.0, 20.0);
        let mut body = Body::new(30.0, 0.0);
        body.pos.y = 50.0 - body.height + 5.0; // 5px into the top face
        body.vel = Vec2::new(0.0, 6.0);
        body.is_jumping = true;

        assert!(overlaps(&body, &platform));
        resolve(&mut body, &platform);
        assert_eq!(body.pos.y, 50.0 - body.height);
        assert_eq!(body.vel.y, 0.0);
        assert!(!body.is_jumping);
    }

    #[test]
    fn test_ceiling_hit_keeps_jump_flag() {
        let platform = Platform::new(0.0, 0.0, 100.0, 20.0);
        let mut body = Body::new(30.0, 0.0);
        body.pos.y = 15.0; // head 5px into the bottom face
        body.vel = Vec2::new(0.0, -6.0);
        body.is_jumping = true;

        resolve(&mut body, &platform);
        assert_eq!(body.pos.y, 20.0);
        assert_eq!(body.vel.y, 0.0);
        // resolve() alone does not clear the flag on a ceiling hit...
        assert!(body.is_jumping);

        // ...but the full-set pass does, for any contact at all.
        body.pos.y = 15.0;
        assert!(resolve_against(&mut body, &[platform]));
        assert!(!body.is_jumping);
    }

    #[test]
    fn test_side_hit_snaps_and_stops() {
        let platform = Platform::new(100.0, 0.0, 50.0, 200.0);
        let mut body = Body::new(0.0, 50.0);
        body.pos.x = 100.0 - body.width + 3.0; // 3px into the left face
        body.vel = Vec2::new(5.0, 0.0);

        resolve(&mut body, &platform);
        assert_eq!(body.pos.x, 100.0 - body.width);
        assert_eq!(body.vel.x, 0.0);
    }

    #[test]
    fn test_corner_tie_resolves_vertically() {
        // 10px of penetration on both axes: the tie must resolve as a
        // landing, not a side hit.
        let platform = Platform::new(30.0, 50.0, 100.0, 100.0);
        let mut body = Body::new(0.0, 0.0);
        body.vel = Vec2::new(2.0, 2.0);
        assert_eq!(
            body.right() - platform.left(),
            body.bottom() - platform.top()
        );

        resolve(&mut body, &platform);
        assert_eq!(body.pos.y, platform.top() - body.height);
        assert_eq!(body.vel.y, 0.0);
        // X untouched by a vertical resolution.
        assert_eq!(body.pos.x, 0.0);
        assert_eq!(body.vel.x, 2.0);
    }

    #[test]
    fn test_no_hit_leaves_jump_flag() {
        let platform = Platform::new(500.0, 500.0, 50.0, 50.0);
        let mut body = Body::new(0.0, 0.0);
        body.is_jumping = true;
        assert!(!resolve_against(&mut body, &[platform]));
        assert!(body.is_jumping);
    }

    proptest! {
        /// After resolution the pair never remains in penetration.
        #[test]
        fn prop_resolve_separates(
            px in -500.0f32..500.0,
            py in -500.0f32..500.0,
            pw in 10.0f32..300.0,
            ph in 10.0f32..300.0,
            // Fractions placing the body somewhere strictly overlapping.
            fx in 0.01f32..0.99,
            fy in 0.01f32..0.99,
        ) {
            let platform = Platform::new(px, py, pw, ph);
            let mut body = Body::new(0.0, 0.0);
            body.pos.x = px - body.width + fx * (pw + body.width);
            body.pos.y = py - body.height + fy * (ph + body.height);
            prop_assume!(overlaps(&body, &platform));

            resolve(&mut body, &platform);
            prop_assert!(!overlaps(&body, &platform));
        }
    }
}
