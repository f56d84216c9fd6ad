//! Enemy controller: patrol, chase, wall and ledge turn-around

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, Facing};
use super::collision::{self, WallContact};
use super::sprite::SpriteKey;
use super::world::TileWorld;
use crate::consts::TILE_SIZE;
use crate::tuning::{EnemyProfile, Tuning};

/// Enemy species, fixed at placement time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    /// Slow ground walker
    Snail,
    /// Airborne patroller
    Fly,
}

/// How an enemy interacts with level geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locomotion {
    /// Falls under gravity, turns at walls and ledges
    Ground,
    /// Ignores gravity and passes through tiles
    Flying,
}

/// What the enemy did on its last update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnemyMode {
    #[default]
    Patrol,
    Chase,
}

impl EnemyKind {
    pub fn locomotion(&self) -> Locomotion {
        match self {
            EnemyKind::Snail => Locomotion::Ground,
            EnemyKind::Fly => Locomotion::Flying,
        }
    }

    pub fn profile(&self, tuning: &Tuning) -> EnemyProfile {
        match self {
            EnemyKind::Snail => tuning.snail,
            EnemyKind::Fly => tuning.fly,
        }
    }

    /// Two-frame animation cycle for a facing
    pub fn frames(&self, facing: Facing) -> [SpriteKey; 2] {
        match (self, facing) {
            (EnemyKind::Snail, Facing::Left) => [SpriteKey::SnailLeftA, SpriteKey::SnailLeftB],
            (EnemyKind::Snail, Facing::Right) => [SpriteKey::SnailRightA, SpriteKey::SnailRightB],
            (EnemyKind::Fly, Facing::Left) => [SpriteKey::FlyLeftA, SpriteKey::FlyLeftB],
            (EnemyKind::Fly, Facing::Right) => [SpriteKey::FlyRightA, SpriteKey::FlyRightB],
        }
    }
}

/// A single enemy
#[derive(Debug, Clone)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub body: Body,
    /// Spawn point; patrol sweeps around its x
    pub start: Vec2,
    pub mode: EnemyMode,
    pub sprite: SpriteKey,
    anim_timer: u32,
    anim_frame: u8,
}

impl Enemy {
    pub fn new(kind: EnemyKind, start: Vec2) -> Self {
        let sprite = kind.frames(Facing::Right)[0];
        Self {
            kind,
            body: Body::new(start, sprite.size()),
            start,
            mode: EnemyMode::Patrol,
            sprite,
            anim_timer: 0,
            anim_frame: 0,
        }
    }

    #[inline]
    pub fn uses_gravity(&self) -> bool {
        self.kind.locomotion() == Locomotion::Ground
    }

    pub fn animation_frame(&self) -> u8 {
        self.anim_frame
    }

    /// Advance one frame given the player's (already updated) x position
    pub fn update(&mut self, player_x: f32, world: &TileWorld, tuning: &Tuning) {
        self.apply_physics(world, tuning);

        let profile = self.kind.profile(tuning);
        let x = self.body.pos.x;

        if (player_x - x).abs() < profile.detection_range {
            self.mode = EnemyMode::Chase;
            self.body.facing = Facing::toward(x, player_x);
        } else {
            self.mode = EnemyMode::Patrol;
            // Outside the sweep: head back toward the spawn point. Facing home
            // rather than toggling keeps an enemy that strayed far while
            // chasing from flipping every frame.
            if (x - self.start.x).abs() > profile.patrol_distance {
                self.body.facing = Facing::toward(x, self.start.x);
            }
        }
        self.body.pos.x += profile.speed * self.body.facing.sign();

        self.check_horizontal_collision(world);
        self.check_edge(world, tuning);
        self.animate(tuning);
    }

    /// Gravity for ground enemies only
    pub fn apply_physics(&mut self, world: &TileWorld, tuning: &Tuning) {
        if self.uses_gravity() {
            self.body.apply_physics(world, tuning);
        }
    }

    /// Wall resolution for ground enemies; turns around on a hit
    pub fn check_horizontal_collision(&mut self, world: &TileWorld) -> Option<WallContact> {
        if !self.uses_gravity() {
            return None;
        }
        let hit = self.body.check_horizontal_collision(world);
        if hit.is_some() {
            self.body.facing = self.body.facing.flipped();
        }
        hit
    }

    /// Turn around when there is no ground one tile ahead. Returns true if turned.
    pub fn check_edge(&mut self, world: &TileWorld, tuning: &Tuning) -> bool {
        if !self.uses_gravity() || !self.body.on_ground {
            return false;
        }

        let probe = Vec2::new(
            self.body.pos.x + TILE_SIZE * self.body.facing.sign(),
            self.body.bottom() + tuning.edge_probe_depth,
        );
        if collision::ground_at(world, probe, tuning.edge_probe_tolerance) {
            return false;
        }

        self.body.facing = self.body.facing.flipped();
        true
    }

    fn animate(&mut self, tuning: &Tuning) {
        self.anim_timer += 1;
        if self.anim_timer < tuning.enemy_animation_ticks {
            return;
        }
        self.anim_timer = 0;
        self.anim_frame = 1 - self.anim_frame;
        self.sprite = self.kind.frames(self.body.facing)[self.anim_frame as usize];
        self.body.set_size(self.sprite.size());
    }

    /// Back to the spawn point facing right
    pub fn reset(&mut self) {
        *self = Enemy::new(self.kind, self.start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Player far enough away that enemies always patrol
    const FAR: f32 = 1.0e6;

    fn settle(enemy: &mut Enemy, world: &TileWorld, tuning: &Tuning) {
        for _ in 0..120 {
            enemy.apply_physics(world, tuning);
        }
        assert!(enemy.body.on_ground);
    }

    #[test]
    fn test_snail_turns_once_at_wall() {
        // Walls at cols 0 and 9, floor below
        let world = TileWorld::from_grid(&[
            "          ",
            "g        g",
            "gggggggggg",
        ]);
        let tuning = Tuning {
            snail: EnemyProfile {
                speed: 1.5,
                detection_range: 0.0,
                patrol_distance: 1000.0,
            },
            ..Tuning::default()
        };
        let mut snail = Enemy::new(EnemyKind::Snail, Vec2::new(320.0, 100.0));
        settle(&mut snail, &world, &tuning);

        let mut facings = vec![snail.body.facing];
        let mut hits = 0;
        for _ in 0..800 {
            let before = snail.body.facing;
            snail.update(FAR, &world, &tuning);
            if snail.body.facing != before {
                hits += 1;
            }
            if facings.last() != Some(&snail.body.facing) {
                facings.push(snail.body.facing);
            }
            assert!(snail.body.core_probe().right() <= 576.0);
            assert!(snail.body.core_probe().left() >= 64.0);
        }

        // Right wall after ~160 frames, left wall ~320 frames later
        assert!(hits >= 2);
        // Every reversal was a distinct wall contact: facing alternates
        assert_eq!(facings.len(), hits + 1);
        for pair in facings.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_wall_reversal_does_not_oscillate() {
        let world = TileWorld::from_grid(&["         g", "gggggggggg"]);
        let tuning = Tuning {
            snail: EnemyProfile {
                speed: 1.5,
                detection_range: 0.0,
                patrol_distance: 1000.0,
            },
            ..Tuning::default()
        };
        let mut snail = Enemy::new(EnemyKind::Snail, Vec2::new(540.0, 20.0));
        settle(&mut snail, &world, &tuning);

        let mut reversals = 0;
        for _ in 0..30 {
            let before = snail.body.facing;
            snail.update(FAR, &world, &tuning);
            if snail.body.facing != before {
                reversals += 1;
            }
        }
        assert_eq!(reversals, 1);
        assert_eq!(snail.body.facing, Facing::Left);
    }

    #[test]
    fn test_snail_turns_at_ledge_before_leaving() {
        // Platform of three tiles, x 128..320, top at y 128
        let world = TileWorld::from_grid(&["        ", "        ", "  ggg   "]);
        let tuning = Tuning {
            snail: EnemyProfile {
                speed: 1.5,
                detection_range: 0.0,
                patrol_distance: 1000.0,
            },
            ..Tuning::default()
        };
        let mut snail = Enemy::new(EnemyKind::Snail, Vec2::new(224.0, 60.0));
        settle(&mut snail, &world, &tuning);

        let mut turns = 0;
        for _ in 0..600 {
            let before = snail.body.facing;
            snail.update(FAR, &world, &tuning);
            if snail.body.facing != before {
                turns += 1;
            }
            assert!(snail.body.on_ground);
            assert!(snail.body.left() >= 128.0);
            assert!(snail.body.right() <= 320.0);
        }
        assert!(turns >= 2);
    }

    #[test]
    fn test_patrol_stays_near_start() {
        let world = TileWorld::from_grid(&["", "", "gggggggggggggggggggg"]);
        let tuning = Tuning::default();
        let start = Vec2::new(640.0, 60.0);
        let mut snail = Enemy::new(EnemyKind::Snail, start);
        settle(&mut snail, &world, &tuning);

        let limit = tuning.snail.patrol_distance + tuning.snail.speed;
        let mut min_x = f32::MAX;
        let mut max_x = f32::MIN;
        for _ in 0..2000 {
            snail.update(FAR, &world, &tuning);
            assert!((snail.body.pos.x - start.x).abs() <= limit + 1e-3);
            assert_eq!(snail.mode, EnemyMode::Patrol);
            min_x = min_x.min(snail.body.pos.x);
            max_x = max_x.max(snail.body.pos.x);
        }
        // Sweeps both sides of the spawn point
        assert!(min_x < start.x - tuning.snail.patrol_distance + 5.0);
        assert!(max_x > start.x + tuning.snail.patrol_distance - 5.0);
    }

    #[test]
    fn test_returns_home_after_straying() {
        let world = TileWorld::default();
        let tuning = Tuning::default();
        let start = Vec2::new(500.0, 100.0);
        let mut fly = Enemy::new(EnemyKind::Fly, start);
        fly.body.pos.x = 1500.0;

        let mut last = fly.body.pos.x;
        for _ in 0..100 {
            fly.update(FAR, &world, &tuning);
            assert!(fly.body.pos.x < last);
            last = fly.body.pos.x;
        }
        assert_eq!(fly.body.facing, Facing::Left);
    }

    #[test]
    fn test_chases_player_in_range() {
        let world = TileWorld::default();
        let tuning = Tuning::default();
        let mut fly = Enemy::new(EnemyKind::Fly, Vec2::new(500.0, 100.0));

        fly.update(400.0, &world, &tuning);
        assert_eq!(fly.mode, EnemyMode::Chase);
        assert_eq!(fly.body.facing, Facing::Left);
        assert_eq!(fly.body.pos.x, 500.0 - tuning.fly.speed);

        fly.update(600.0, &world, &tuning);
        assert_eq!(fly.body.facing, Facing::Right);
    }

    #[test]
    fn test_fly_ignores_geometry() {
        let world = TileWorld::from_grid(&["pppppppppp", "pppppppppp"]);
        let tuning = Tuning::default();
        let start = Vec2::new(300.0, 64.0);
        let mut fly = Enemy::new(EnemyKind::Fly, start);

        for _ in 0..50 {
            fly.update(FAR, &world, &tuning);
            assert_eq!(fly.body.pos.y, start.y);
            assert_eq!(fly.body.vel_y, 0.0);
        }
        assert!(fly.body.pos.x > start.x);
        assert_eq!(fly.check_horizontal_collision(&world), None);
    }

    #[test]
    fn test_animation_follows_facing() {
        let world = TileWorld::default();
        let tuning = Tuning::default();
        let mut fly = Enemy::new(EnemyKind::Fly, Vec2::new(500.0, 100.0));
        for _ in 0..tuning.enemy_animation_ticks {
            fly.update(400.0, &world, &tuning);
        }
        assert_eq!(fly.sprite, SpriteKey::FlyLeftB);
        assert_eq!(fly.body.size, SpriteKey::FlyLeftB.size());
    }

    #[test]
    fn test_reset_restores_start() {
        let world = TileWorld::from_grid(&["", "", "gggggggggg"]);
        let tuning = Tuning::default();
        let start = Vec2::new(300.0, 60.0);
        let mut snail = Enemy::new(EnemyKind::Snail, start);
        for _ in 0..90 {
            snail.update(FAR, &world, &tuning);
        }
        assert_ne!(snail.body.pos, start);

        snail.reset();

        assert_eq!(snail.body.pos, start);
        assert_eq!(snail.body.facing, Facing::Right);
        assert_eq!(snail.body.vel_y, 0.0);
        assert!(!snail.body.on_ground);
        assert_eq!(snail.animation_frame(), 0);
        assert_eq!(snail.mode, EnemyMode::Patrol);
    }
}
