//! Player controller: input, jumping, animation and contact checks

use glam::Vec2;

use super::body::{Body, Facing};
use super::collision;
use super::enemy::Enemy;
use super::sprite::SpriteKey;
use super::state::GameEvent;
use super::tick::TickInput;
use super::world::{Coin, TileWorld};
use crate::tuning::Tuning;

/// The player character
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    /// Set when a jump starts, cleared on the first grounded physics step
    pub jumping: bool,
    /// Image currently shown
    pub sprite: SpriteKey,
    anim_timer: u32,
    anim_frame: u8,
    /// Walking loop sound is playing
    walking: bool,
    spawn: Vec2,
}

impl Player {
    pub fn new(spawn: Vec2) -> Self {
        Self {
            body: Body::new(spawn, SpriteKey::PlayerIdle.size()),
            jumping: false,
            sprite: SpriteKey::PlayerIdle,
            anim_timer: 0,
            anim_frame: 0,
            walking: false,
            spawn,
        }
    }

    pub fn spawn(&self) -> Vec2 {
        self.spawn
    }

    pub fn is_walking(&self) -> bool {
        self.walking
    }

    pub fn animation_frame(&self) -> u8 {
        self.anim_frame
    }

    fn set_sprite(&mut self, sprite: SpriteKey) {
        self.sprite = sprite;
        self.body.set_size(sprite.size());
    }

    /// Apply one frame of movement, animation and jump input
    pub fn handle_input(
        &mut self,
        input: &TickInput,
        world: &TileWorld,
        tuning: &Tuning,
        events: &mut Vec<GameEvent>,
    ) {
        let direction = if input.left {
            Some(Facing::Left)
        } else if input.right {
            Some(Facing::Right)
        } else {
            None
        };

        if let Some(facing) = direction {
            self.body.facing = facing;
            self.body.pos.x += tuning.player_speed * facing.sign();
            self.body.check_horizontal_collision(world);
        }
        let moving = direction.is_some();

        if moving && !self.walking {
            self.walking = true;
            events.push(GameEvent::WalkingStarted);
        } else if !moving {
            self.stop_walking(events);
        }

        self.animate(moving, tuning);

        if input.jump && !self.jumping {
            self.body.vel_y = tuning.jump_strength;
            self.jumping = true;
            events.push(GameEvent::Jump);
            self.set_sprite(SpriteKey::PlayerJump);
        }
    }

    /// Two-frame cycle; idle cycles at half the walking rate
    fn animate(&mut self, moving: bool, tuning: &Tuning) {
        self.anim_timer += 1;
        let period = if moving {
            tuning.animation_speed
        } else {
            tuning.animation_speed.saturating_mul(2)
        };
        if self.anim_timer < period {
            return;
        }

        self.anim_timer = 0;
        self.anim_frame = 1 - self.anim_frame;
        let sprite = match (moving, self.anim_frame) {
            (true, 0) => SpriteKey::PlayerWalkA,
            (true, _) => SpriteKey::PlayerWalkB,
            (false, 0) => SpriteKey::PlayerIdle,
            (false, _) => SpriteKey::PlayerFront,
        };
        self.set_sprite(sprite);
    }

    /// Gravity and tile resolution; landing ends the jump
    pub fn apply_physics(&mut self, world: &TileWorld, tuning: &Tuning) {
        self.body.apply_physics(world, tuning);
        self.jumping = !self.body.on_ground;
    }

    /// Stop the walking loop if it is running
    pub fn stop_walking(&mut self, events: &mut Vec<GameEvent>) {
        if self.walking {
            self.walking = false;
            events.push(GameEvent::WalkingStopped);
        }
    }

    /// Remove every coin the player overlaps. Returns how many were taken.
    pub fn collect_coins(&self, coins: &mut Vec<Coin>, events: &mut Vec<GameEvent>) -> usize {
        let rect = self.body.rect();
        let before = coins.len();
        coins.retain(|coin| {
            let taken = rect.overlaps(&coin.rect());
            if taken {
                events.push(GameEvent::CoinCollected { id: coin.id });
            }
            !taken
        });
        before - coins.len()
    }

    /// Overlapping any goal flag
    pub fn touches_flag(&self, world: &TileWorld) -> bool {
        let rect = self.body.rect();
        world.flags().any(|flag| rect.overlaps(&flag.rect))
    }

    /// Index of the first enemy in contact with the player
    pub fn touching_enemy(&self, enemies: &[Enemy]) -> Option<usize> {
        enemies
            .iter()
            .position(|enemy| collision::bodies_touch(&self.body, &enemy.body))
    }

    /// Fell past the bottom of the level with nothing left to land on.
    /// A world without rows has no bottom.
    pub fn fell_out(&self, world: &TileWorld) -> bool {
        world.height() > 0.0 && self.body.top() > world.height() + crate::consts::TILE_SIZE
    }

    /// Back to the spawn point, at rest, idle
    pub fn reset(&mut self) {
        self.body = Body::new(self.spawn, SpriteKey::PlayerIdle.size());
        self.jumping = false;
        self.anim_timer = 0;
        self.anim_frame = 0;
        self.sprite = SpriteKey::PlayerIdle;
        self.walking = false;
    }
}
