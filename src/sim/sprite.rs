//! Sprite keys and their pixel sizes
//!
//! Bodies take their collision size from the sprite they currently show, so
//! the table here is part of the physics model, not just presentation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::TILE_SIZE;

/// Every image the simulation can select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteKey {
    PlayerIdle,
    PlayerFront,
    PlayerWalkA,
    PlayerWalkB,
    PlayerJump,
    /// Snail frames facing left (the artwork's native direction)
    SnailLeftA,
    SnailLeftB,
    SnailRightA,
    SnailRightB,
    FlyLeftA,
    FlyLeftB,
    FlyRightA,
    FlyRightB,
    Coin,
    TileGround,
    TileEarth,
    TileBlock,
    TileCoinBlock,
    TileFlag,
}

impl SpriteKey {
    /// Asset name the renderer loads
    pub fn as_str(&self) -> &'static str {
        match self {
            SpriteKey::PlayerIdle => "character_beige_idle",
            SpriteKey::PlayerFront => "character_beige_front",
            SpriteKey::PlayerWalkA => "character_beige_walk_a",
            SpriteKey::PlayerWalkB => "character_beige_walk_b",
            SpriteKey::PlayerJump => "character_beige_jump",
            SpriteKey::SnailLeftA => "snail_walk_a",
            SpriteKey::SnailLeftB => "snail_walk_b",
            SpriteKey::SnailRightA => "snail_walk_left_a",
            SpriteKey::SnailRightB => "snail_walk_left_b",
            SpriteKey::FlyLeftA => "fly_a",
            SpriteKey::FlyLeftB => "fly_b",
            SpriteKey::FlyRightA => "fly_left_a",
            SpriteKey::FlyRightB => "fly_left_b",
            SpriteKey::Coin => "coin_gold",
            SpriteKey::TileGround => "terrain_grass_block_top",
            SpriteKey::TileEarth => "terrain_grass_block_center",
            SpriteKey::TileBlock => "block_green",
            SpriteKey::TileCoinBlock => "block_coin",
            SpriteKey::TileFlag => "flag_red_a",
        }
    }

    /// Image size in pixels
    pub fn size(&self) -> Vec2 {
        match self {
            SpriteKey::PlayerIdle
            | SpriteKey::PlayerFront
            | SpriteKey::PlayerWalkA
            | SpriteKey::PlayerWalkB
            | SpriteKey::PlayerJump => Vec2::new(56.0, 64.0),
            SpriteKey::SnailLeftA
            | SpriteKey::SnailLeftB
            | SpriteKey::SnailRightA
            | SpriteKey::SnailRightB => Vec2::new(56.0, 40.0),
            SpriteKey::FlyLeftA | SpriteKey::FlyRightA => Vec2::new(60.0, 40.0),
            SpriteKey::FlyLeftB | SpriteKey::FlyRightB => Vec2::new(60.0, 34.0),
            SpriteKey::Coin => Vec2::splat(48.0),
            SpriteKey::TileGround
            | SpriteKey::TileEarth
            | SpriteKey::TileBlock
            | SpriteKey::TileCoinBlock
            | SpriteKey::TileFlag => Vec2::splat(TILE_SIZE),
        }
    }
}
