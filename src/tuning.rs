//! Data-driven game balance
//!
//! Every physics and behavior constant the simulation reads lives here so a
//! level designer can override it from a JSON file. Missing fields fall back
//! to the values in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Longest animation frame, in ticks (ten seconds at 60 fps)
const MAX_ANIMATION_TICKS: u32 = 600;

/// Movement profile of one enemy kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyProfile {
    /// Horizontal speed (pixels/frame)
    pub speed: f32,
    /// Horizontal distance to the player that switches patrol to chase
    pub detection_range: f32,
    /// Half-width of the patrol sweep around the spawn point
    pub patrol_distance: f32,
}

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    pub jump_strength: f32,
    pub max_fall_speed: f32,
    pub landing_tolerance: f32,
    pub player_speed: f32,
    pub animation_speed: u32,
    pub enemy_animation_ticks: u32,
    pub edge_probe_depth: f32,
    pub edge_probe_tolerance: f32,
    pub enemy_update_margin: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub snail: EnemyProfile,
    pub fly: EnemyProfile,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            max_fall_speed: MAX_FALL_SPEED,
            landing_tolerance: LANDING_TOLERANCE,
            player_speed: PLAYER_SPEED,
            animation_speed: ANIMATION_SPEED,
            enemy_animation_ticks: ENEMY_ANIMATION_TICKS,
            edge_probe_depth: EDGE_PROBE_DEPTH,
            edge_probe_tolerance: EDGE_PROBE_TOLERANCE,
            enemy_update_margin: ENEMY_UPDATE_MARGIN,
            viewport_width: SCREEN_WIDTH,
            viewport_height: SCREEN_HEIGHT,
            snail: EnemyProfile {
                speed: 1.5,
                detection_range: 200.0,
                patrol_distance: 100.0,
            },
            fly: EnemyProfile {
                speed: 2.5,
                detection_range: 250.0,
                patrol_distance: 150.0,
            },
        }
    }
}

impl Tuning {
    /// Parse tuning from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut tuning: Tuning = serde_json::from_str(json)?;
        tuning.sanitize();
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = ConfigError::read_to_string(path)?;
        let mut tuning: Tuning = ConfigError::parse_json(path, &json)?;
        tuning.sanitize();
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Load tuning, falling back to defaults if the file is missing or invalid
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(tuning) => tuning,
            Err(ConfigError::Read { .. }) => Self::default(),
            Err(e) => {
                log::warn!("{e}, using default tuning");
                Self::default()
            }
        }
    }

    /// Clamp values that would break the collision model.
    ///
    /// The landing check only sees tiles the feet probe overlaps after the
    /// move, so the fall speed cap must stay below one tile. The same holds
    /// for the head probe and the jump impulse.
    fn sanitize(&mut self) {
        let cap = TILE_SIZE - 1.0;
        if !(self.max_fall_speed > 0.0 && self.max_fall_speed <= cap) {
            log::warn!(
                "max_fall_speed {} out of range, clamping to (0, {}]",
                self.max_fall_speed,
                cap
            );
            self.max_fall_speed = if self.max_fall_speed.is_nan() {
                MAX_FALL_SPEED
            } else {
                self.max_fall_speed.clamp(1.0, cap)
            };
        }
        if !(self.jump_strength < 0.0 && self.jump_strength >= -cap) {
            log::warn!(
                "jump_strength {} out of range, clamping to [-{}, 0)",
                self.jump_strength,
                cap
            );
            self.jump_strength = if self.jump_strength.is_nan() || self.jump_strength >= 0.0 {
                JUMP_STRENGTH
            } else {
                -cap
            };
        }
        for (name, ticks) in [
            ("animation_speed", &mut self.animation_speed),
            ("enemy_animation_ticks", &mut self.enemy_animation_ticks),
        ] {
            if !(1..=MAX_ANIMATION_TICKS).contains(&*ticks) {
                log::warn!("{name} {ticks} out of range, clamping to [1, {MAX_ANIMATION_TICKS}]");
                *ticks = (*ticks).clamp(1, MAX_ANIMATION_TICKS);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 1.2, "snail": { "speed": 3.0, "detection_range": 10.0, "patrol_distance": 5.0 } }"#)
            .unwrap();
        assert_eq!(tuning.gravity, 1.2);
        assert_eq!(tuning.snail.speed, 3.0);
        assert_eq!(tuning.jump_strength, JUMP_STRENGTH);
        assert_eq!(tuning.fly, Tuning::default().fly);
    }

    #[test]
    fn test_fall_speed_is_capped_below_tile() {
        let tuning = Tuning::from_json(r#"{ "max_fall_speed": 500.0 }"#).unwrap();
        assert!(tuning.max_fall_speed < TILE_SIZE);

        let tuning = Tuning::from_json(r#"{ "max_fall_speed": -3.0 }"#).unwrap();
        assert!(tuning.max_fall_speed > 0.0);
    }

    #[test]
    fn test_jump_strength_stays_within_one_tile() {
        let tuning = Tuning::from_json(r#"{ "jump_strength": -400.0 }"#).unwrap();
        assert_eq!(tuning.jump_strength, -(TILE_SIZE - 1.0));

        let tuning = Tuning::from_json(r#"{ "jump_strength": 12.0 }"#).unwrap();
        assert_eq!(tuning.jump_strength, JUMP_STRENGTH);

        let tuning = Tuning::from_json(r#"{ "jump_strength": -20.0 }"#).unwrap();
        assert_eq!(tuning.jump_strength, -20.0);
    }

    #[test]
    fn test_huge_animation_period_is_capped() {
        let tuning = Tuning::from_json(
            r#"{ "animation_speed": 4000000000, "enemy_animation_ticks": 0 }"#,
        )
        .unwrap();
        assert_eq!(tuning.animation_speed, MAX_ANIMATION_TICKS);
        assert_eq!(tuning.enemy_animation_ticks, 1);

        // Idle animation doubles the period; a running game must not overflow
        let level = crate::level::LevelData::builtin();
        let mut state = crate::sim::GameState::new(&level, tuning);
        assert!(state.start());
        for _ in 0..10 {
            crate::sim::tick(&mut state, &crate::sim::TickInput::default());
        }
        assert_eq!(state.phase, crate::sim::GamePhase::Playing);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let tuning = Tuning::load_or_default("/definitely/not/here/tuning.json");
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tuning.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Tuning::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("tuning.json"));
        assert_eq!(Tuning::load_or_default(&path), Tuning::default());
    }
}
