//! Tile Platformer - a side-scrolling tile-grid platformer runtime
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, enemy AI, game flow)
//! - `level`: Level grid, player spawn and enemy placements
//! - `tuning`: Data-driven physics and behavior constants
//! - `snapshot`: Read-only render view of the simulation
//! - `audio`: Game event to sound effect dispatch
//! - `menu`: Main menu layout and hit-testing
//! - `settings`: Persisted user preferences
//! - `demo`: Seeded autopilot for headless runs

pub mod audio;
pub mod demo;
pub mod error;
pub mod level;
pub mod menu;
pub mod settings;
pub mod sim;
pub mod snapshot;
pub mod tuning;

pub use error::ConfigError;
pub use level::LevelData;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Viewport dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 1000.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;

    /// Edge length of a square world tile (pixels)
    pub const TILE_SIZE: f32 = 64.0;

    /// Downward acceleration (pixels/frame²)
    pub const GRAVITY: f32 = 0.8;
    /// Initial vertical velocity of a jump (negative = up)
    pub const JUMP_STRENGTH: f32 = -15.0;
    /// Terminal fall speed (pixels/frame). Must stay below TILE_SIZE so a
    /// falling body can never skip a tile top in a single frame.
    pub const MAX_FALL_SPEED: f32 = 20.0;
    /// How far past a surface a body may have been last frame and still land on it
    pub const LANDING_TOLERANCE: f32 = 5.0;

    /// Player horizontal speed (pixels/frame)
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Player spawn point (center)
    pub const PLAYER_SPAWN: (f32, f32) = (100.0, 200.0);

    /// Frames per walk-cycle step (idle cycles at twice this)
    pub const ANIMATION_SPEED: u32 = 10;
    /// Frames per enemy walk/fly-cycle step
    pub const ENEMY_ANIMATION_TICKS: u32 = 8;

    /// Edge probe: distance below the feet, and vertical slack when matching a tile top
    pub const EDGE_PROBE_DEPTH: f32 = 10.0;
    pub const EDGE_PROBE_TOLERANCE: f32 = 20.0;

    /// Extra distance beyond the viewport width within which enemies keep updating
    pub const ENEMY_UPDATE_MARGIN: f32 = 200.0;

    /// Size of one background texture tile
    pub const BACKGROUND_TILE: f32 = 512.0;
}
