//! Collision detection and response against the tile world
//!
//! Vertical and horizontal resolution use reduced probe boxes rather than
//! the full body box. A full box standing next to a wall also overlaps the
//! wall's top edge, which would read as a landing; the narrower feet/head
//! probes and the middle-band wall probe keep the two axes apart.

use glam::Vec2;

use super::body::Body;
use super::world::TileWorld;
use crate::consts::TILE_SIZE;

/// Which side of the body a wall was hit on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallContact {
    /// Wall to the right; the body was moving right into it
    Right,
    /// Wall to the left; the body was moving left into it
    Left,
}

/// Land on or bump into the first solid tile the body crossed this frame.
///
/// Must run after `vel_y` has been added to the position. A tile only counts
/// if the relevant edge was on the near side of its surface (within
/// `tolerance`) before the move; bodies already past a surface are left
/// alone instead of being yanked back through it.
pub fn resolve_vertical(body: &mut Body, world: &TileWorld, tolerance: f32) {
    let vel = body.vel_y;
    let feet = body.feet_probe();
    let head = body.head_probe();

    for tile in world.solid_tiles() {
        let t = &tile.rect;

        if vel > 0.0
            && feet.overlaps(t)
            && body.bottom() > t.top()
            && body.bottom() - vel <= t.top() + tolerance
        {
            body.set_bottom(t.top());
            body.vel_y = 0.0;
            body.on_ground = true;
            return;
        }

        if vel < 0.0
            && head.overlaps(t)
            && body.top() < t.bottom()
            && body.top() - vel >= t.bottom() - tolerance
        {
            body.set_top(t.bottom());
            body.vel_y = 0.0;
            return;
        }
    }
}

/// Clamp the body out of the first wall its middle band overlaps.
///
/// Tiles more than one tile-height away vertically are glancing contacts
/// (floor or ceiling) and are ignored.
pub fn resolve_horizontal(body: &mut Body, world: &TileWorld) -> Option<WallContact> {
    let core = body.core_probe();
    let inset = body.size.x / 4.0;

    for tile in world.solid_tiles() {
        if !core.overlaps(&tile.rect) {
            continue;
        }
        let center = tile.center();
        if (body.pos.y - center.y).abs() >= TILE_SIZE {
            continue;
        }

        if body.pos.x < center.x {
            body.set_right(tile.rect.left() + inset);
            return Some(WallContact::Right);
        } else {
            body.set_left(tile.rect.right() - inset);
            return Some(WallContact::Left);
        }
    }

    None
}

/// Check for a solid tile surface near `probe`.
///
/// Matches a tile whose top is within `tolerance` of `probe.y` and whose
/// center is less than one tile away horizontally.
pub fn ground_at(world: &TileWorld, probe: Vec2, tolerance: f32) -> bool {
    world.solid_tiles().any(|tile| {
        (tile.rect.top() - probe.y).abs() < tolerance
            && (tile.center().x - probe.x).abs() < TILE_SIZE
    })
}

/// Entity-vs-entity contact using the middle-half boxes of both bodies
pub fn bodies_touch(a: &Body, b: &Body) -> bool {
    a.core_probe().overlaps(&b.core_probe())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn body_at(x: f32, y: f32) -> Body {
        Body::new(Vec2::new(x, y), Vec2::new(56.0, 64.0))
    }

    #[test]
    fn test_lands_exactly_on_tile_top() {
        // Ground top at y = 128
        let world = TileWorld::from_grid(&["   ", "   ", "ggg"]);
        let tuning = Tuning::default();
        let mut body = body_at(96.0, 20.0);

        let mut landed_at = None;
        for frame in 0..120 {
            let before = body.bottom();
            body.apply_physics(&world, &tuning);
            if body.on_ground {
                // Landing happens on the frame the bottom edge would cross the top
                assert!(before <= 128.0);
                landed_at = Some(frame);
                break;
            }
            assert!(body.bottom() <= 128.0);
        }

        assert!(landed_at.is_some());
        assert_eq!(body.bottom(), 128.0);
        assert_eq!(body.vel_y, 0.0);
    }

    #[test]
    fn test_resting_body_stays_put() {
        let world = TileWorld::from_grid(&["   ", "ggg"]);
        let tuning = Tuning::default();
        let mut body = body_at(96.0, 32.0);

        for _ in 0..30 {
            body.apply_physics(&world, &tuning);
            assert!(body.on_ground);
            assert_eq!(body.bottom(), 64.0);
            assert_eq!(body.vel_y, 0.0);
        }
    }

    #[test]
    fn test_head_bumps_ceiling() {
        // Block occupies y 0..64
        let world = TileWorld::from_grid(&[" p ", "   ", "   "]);
        let tuning = Tuning::default();
        let mut body = body_at(96.0, 70.0 + 32.0);
        body.vel_y = -10.0;

        body.apply_physics(&world, &tuning);

        assert_eq!(body.top(), 64.0);
        assert_eq!(body.vel_y, 0.0);
        assert!(!body.on_ground);
    }

    #[test]
    fn test_body_already_below_surface_is_not_snapped() {
        let world = TileWorld::from_grid(&["   ", "ggg"]);
        let tuning = Tuning::default();
        // Bottom already 20px inside the tile before falling further
        let mut body = body_at(96.0, 64.0 + 20.0 - 32.0);

        body.apply_physics(&world, &tuning);

        assert!(!body.on_ground);
        assert!(body.bottom() > 84.0);
    }

    #[test]
    fn test_side_overlap_is_not_a_landing() {
        // Single tile at x 64..128, y 64..128
        let world = TileWorld::from_grid(&["   ", " g "]);
        let tuning = Tuning::default();
        // Full box overlaps the tile by 10px horizontally, feet probe does not
        let mut body = body_at(64.0 - 28.0 + 10.0, 60.0);
        body.vel_y = 4.0;

        body.apply_physics(&world, &tuning);

        assert!(!body.on_ground);
    }

    #[test]
    fn test_wall_on_right_clamps_core_flush() {
        // Wall tile at x 128..192, y 64..128
        let world = TileWorld::from_grid(&["    ", "  g "]);
        let mut body = body_at(128.0 - 14.0 + 3.0, 96.0);

        let hit = resolve_horizontal(&mut body, &world);

        assert_eq!(hit, Some(WallContact::Right));
        assert_eq!(body.core_probe().right(), 128.0);
        assert_eq!(resolve_horizontal(&mut body, &world), None);
    }

    #[test]
    fn test_wall_on_left_clamps_core_flush() {
        let world = TileWorld::from_grid(&["    ", "g   "]);
        let mut body = body_at(64.0 + 14.0 - 2.0, 96.0);

        let hit = resolve_horizontal(&mut body, &world);

        assert_eq!(hit, Some(WallContact::Left));
        assert_eq!(body.core_probe().left(), 64.0);
    }

    #[test]
    fn test_floor_under_body_is_not_a_wall() {
        let world = TileWorld::from_grid(&["   ", "ggg"]);
        let mut body = body_at(96.0, 32.0);
        assert_eq!(resolve_horizontal(&mut body, &world), None);
        assert_eq!(body.pos, Vec2::new(96.0, 32.0));
    }

    #[test]
    fn test_ground_at() {
        let world = TileWorld::from_grid(&["    ", "gg  "]);
        // Tile tops at y = 64, centers at x = 32 and 96
        assert!(ground_at(&world, Vec2::new(100.0, 74.0), 20.0));
        assert!(ground_at(&world, Vec2::new(150.0, 74.0), 20.0));
        assert!(!ground_at(&world, Vec2::new(160.0, 74.0), 20.0));
        assert!(!ground_at(&world, Vec2::new(100.0, 120.0), 20.0));
    }

    #[test]
    fn test_bodies_touch_uses_reduced_boxes() {
        let a = body_at(0.0, 0.0);
        // Full boxes overlap (56 wide), cores (28 wide) do not
        let b = body_at(40.0, 0.0);
        assert!(a.rect().overlaps(&b.rect()));
        assert!(!bodies_touch(&a, &b));

        let c = body_at(20.0, 0.0);
        assert!(bodies_touch(&a, &c));
    }
}
