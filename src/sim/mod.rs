//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed frame step only
//! - Stable iteration order (tiles row-major, enemies in placement order)
//! - No rendering, audio or platform dependencies

pub mod body;
pub mod camera;
pub mod collision;
pub mod enemy;
pub mod player;
pub mod rect;
pub mod sprite;
pub mod state;
pub mod tick;
pub mod world;

pub use body::{Body, Facing};
pub use camera::Camera;
pub use collision::{WallContact, bodies_touch, ground_at};
pub use enemy::{Enemy, EnemyKind, EnemyMode, Locomotion};
pub use player::Player;
pub use rect::Rect;
pub use sprite::SpriteKey;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
pub use world::{Coin, Tile, TileKind, TileWorld};
