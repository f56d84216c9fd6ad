//! Kinematic body shared by every physically simulated entity

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{self, WallContact};
use super::rect::Rect;
use super::world::TileWorld;
use crate::tuning::Tuning;

/// Horizontal facing / movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1 for left, +1 for right
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }

    /// Direction from `from_x` toward `to_x` (right when equal)
    pub fn toward(from_x: f32, to_x: f32) -> Self {
        if to_x < from_x {
            Facing::Left
        } else {
            Facing::Right
        }
    }
}

/// Position, size and vertical motion of an entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Center position (authoritative)
    pub pos: Vec2,
    /// Full width/height, taken from the current sprite
    pub size: Vec2,
    /// Vertical velocity, positive = down
    pub vel_y: f32,
    /// Resting on a solid tile after the last physics step
    pub on_ground: bool,
    pub facing: Facing,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel_y: 0.0,
            on_ground: false,
            facing: Facing::Right,
        }
    }

    /// Full bounding box
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x + self.size.x / 2.0;
    }

    pub fn set_right(&mut self, x: f32) {
        self.pos.x = x - self.size.x / 2.0;
    }

    pub fn set_top(&mut self, y: f32) {
        self.pos.y = y + self.size.y / 2.0;
    }

    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y / 2.0;
    }

    /// Change size around the current center (sprite swap)
    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    /// Bottom quarter of the body, half as wide, horizontally centered
    pub fn feet_probe(&self) -> Rect {
        Rect::new(
            self.pos.x - self.size.x / 4.0,
            self.pos.y + self.size.y / 4.0,
            self.size.x / 2.0,
            self.size.y / 4.0,
        )
    }

    /// Top quarter of the body, half as wide, horizontally centered
    pub fn head_probe(&self) -> Rect {
        Rect::new(
            self.pos.x - self.size.x / 4.0,
            self.top(),
            self.size.x / 2.0,
            self.size.y / 4.0,
        )
    }

    /// Middle half of the body in both axes. Used for wall hits and for
    /// entity-vs-entity contact.
    pub fn core_probe(&self) -> Rect {
        Rect::from_center(self.pos, self.size / 2.0)
    }

    /// Integrate gravity for one frame and land on / bump into solid tiles
    pub fn apply_physics(&mut self, world: &TileWorld, tuning: &Tuning) {
        self.vel_y = (self.vel_y + tuning.gravity).min(tuning.max_fall_speed);
        self.pos.y += self.vel_y;
        self.on_ground = false;
        collision::resolve_vertical(self, world, tuning.landing_tolerance);
    }

    /// Push the body out of any wall it moved into this frame
    pub fn check_horizontal_collision(&mut self, world: &TileWorld) -> Option<WallContact> {
        collision::resolve_horizontal(self, world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probes_partition_height() {
        let body = Body::new(Vec2::new(100.0, 100.0), Vec2::new(40.0, 64.0));
        let feet = body.feet_probe();
        let head = body.head_probe();
        let core = body.core_probe();

        assert_eq!(head.top(), body.top());
        assert_eq!(head.bottom(), core.top());
        assert_eq!(core.bottom(), feet.top());
        assert_eq!(feet.bottom(), body.bottom());
        assert_eq!(feet.left(), 90.0);
        assert_eq!(feet.right(), 110.0);
    }

    #[test]
    fn test_edge_setters() {
        let mut body = Body::new(Vec2::ZERO, Vec2::new(20.0, 30.0));
        body.set_bottom(100.0);
        assert_eq!(body.bottom(), 100.0);
        body.set_top(10.0);
        assert_eq!(body.top(), 10.0);
        body.set_left(5.0);
        assert_eq!(body.left(), 5.0);
        body.set_right(50.0);
        assert_eq!(body.right(), 50.0);
    }

    #[test]
    fn test_free_fall_is_capped() {
        let world = TileWorld::default();
        let tuning = Tuning::default();
        let mut body = Body::new(Vec2::ZERO, Vec2::splat(32.0));
        for _ in 0..200 {
            body.apply_physics(&world, &tuning);
            assert!(body.vel_y <= tuning.max_fall_speed);
        }
        assert_eq!(body.vel_y, tuning.max_fall_speed);
        assert!(!body.on_ground);
    }

    #[test]
    fn test_facing() {
        assert_eq!(Facing::Left.sign(), -1.0);
        assert_eq!(Facing::Right.flipped(), Facing::Left);
        assert_eq!(Facing::toward(10.0, 5.0), Facing::Left);
        assert_eq!(Facing::toward(10.0, 15.0), Facing::Right);
    }
}
