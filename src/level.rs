//! Level description: tile grid, player spawn and enemy placements
//!
//! Levels are plain data. The simulation builds its [`TileWorld`] and enemy
//! list from a [`LevelData`] once, at [`GameState`](crate::sim::GameState)
//! construction.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::PLAYER_SPAWN;
use crate::error::ConfigError;
use crate::sim::enemy::{Enemy, EnemyKind};
use crate::sim::world::TileWorld;

/// Where an enemy starts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyPlacement {
    pub x: f32,
    pub y: f32,
    pub kind: EnemyKind,
}

/// A complete level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    /// Tile characters, one string per row, top row first
    pub rows: Vec<String>,
    #[serde(default = "default_spawn")]
    pub player_spawn: Vec2,
    #[serde(default)]
    pub enemies: Vec<EnemyPlacement>,
}

fn default_spawn() -> Vec2 {
    Vec2::new(PLAYER_SPAWN.0, PLAYER_SPAWN.1)
}

const BUILTIN_ROWS: [&str; 13] = [
    "",
    "",
    "",
    "",
    "                  pcp                              ggggg",
    "                                                              ppcpp",
    "        pcp   ppp         cc                   ppp         pp",
    "                               p                                        F",
    "gggggcgggggggggggggggg  gggggggggggggg  gggggcggggggggggg ggggggggggggggggg",
    "bbbbbbbbbbbbbbbbbbbbbb  bbbbbbbbbbbbbb  bbbbbbbbbbbbbbbbb bbbbbbbbbbbbbbbbb",
    "bbbbbbbbbbbbbbbbbbbbbb  bbbbbbbbbbbbbb  bbbbbbbbbbbbbbbbb bbbbbbbbbbbbbbbbb",
    "bbbbbbbbbbbbbbbbbbbbbb  bbbbbbbbbbbbbb  bbbbbbbbbbbbbbbbb bbbbbbbbbbbbbbbbb",
    "bbbbbbbbbbbbbbbbbbbbbb  bbbbbbbbbbbbbb  bbbbbbbbbbbbbbbbb bbbbbbbbbbbbbbbbb",
];

const BUILTIN_ENEMIES: [(f32, f32, EnemyKind); 5] = [
    (800.0, 480.0, EnemyKind::Snail),
    (1200.0, 350.0, EnemyKind::Fly),
    (1800.0, 480.0, EnemyKind::Snail),
    (3413.0, 192.0, EnemyKind::Snail),
    (4129.0, 20.0, EnemyKind::Snail),
];

impl LevelData {
    /// The level shipped with the game
    pub fn builtin() -> Self {
        Self {
            rows: BUILTIN_ROWS.iter().map(|r| r.to_string()).collect(),
            player_spawn: default_spawn(),
            enemies: BUILTIN_ENEMIES
                .iter()
                .map(|&(x, y, kind)| EnemyPlacement { x, y, kind })
                .collect(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a level from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = ConfigError::read_to_string(path)?;
        let level: LevelData = ConfigError::parse_json(path, &json)?;
        log::info!(
            "Loaded level {} ({} rows, {} enemies)",
            path.display(),
            level.rows.len(),
            level.enemies.len()
        );
        Ok(level)
    }

    /// Load a level, falling back to the built-in one on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("{e}, using built-in level");
            Self::builtin()
        })
    }

    pub fn build_world(&self) -> TileWorld {
        TileWorld::from_grid(&self.rows)
    }

    /// Enemies in placement order
    pub fn build_enemies(&self) -> Vec<Enemy> {
        self.enemies
            .iter()
            .map(|p| Enemy::new(p.kind, Vec2::new(p.x, p.y)))
            .collect()
    }
}

impl Default for LevelData {
    fn default() -> Self {
        Self::builtin()
    }
}
