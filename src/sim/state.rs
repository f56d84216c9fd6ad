//! Game state and game flow
//!
//! [`GameState`] owns everything the simulation touches. The phase only
//! changes through [`GameState::transition`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::enemy::Enemy;
use super::player::Player;
use super::world::{Coin, TileWorld};
use crate::level::LevelData;
use crate::tuning::Tuning;

/// Top-level game flow phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Main menu, waiting for Start
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Touched an enemy or fell out of the level
    GameOver,
    /// Reached the flag
    Win,
}

impl GamePhase {
    /// Whether the flow allows moving from `self` to `to`
    pub fn can_transition(self, to: GamePhase) -> bool {
        use GamePhase::*;
        matches!(
            (self, to),
            (Menu, Playing) | (Playing, GameOver) | (Playing, Win) | (GameOver, Playing) | (Win, Playing)
        )
    }
}

/// Discrete things that happened during a tick, in order.
///
/// Consumed by audio and by drivers; the simulation never reads them back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Jump,
    CoinCollected { id: u32 },
    WalkingStarted,
    WalkingStopped,
    MusicStarted,
    /// Menu music preference changed
    MusicToggled { on: bool },
    Win,
    Lose,
    PhaseChanged { from: GamePhase, to: GamePhase },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub tuning: Tuning,
    pub world: TileWorld,
    pub player: Player,
    /// Fixed set, placement order
    pub enemies: Vec<Enemy>,
    /// Coins not yet collected
    pub coins: Vec<Coin>,
    pub camera: Camera,
    /// Background music preference
    pub music_on: bool,
    /// Set by the menu Exit action; the driver decides what to do with it
    pub exit_requested: bool,
    /// Frames simulated while playing since the last reset
    pub time_ticks: u64,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Build a fresh game in the menu
    pub fn new(level: &LevelData, tuning: Tuning) -> Self {
        let world = level.build_world();
        let enemies = level.build_enemies();
        let coins = world.coins().to_vec();
        let camera = Camera::new(Vec2::new(tuning.viewport_width, tuning.viewport_height));

        log::info!(
            "Built level: {} tiles, {} coins, {} enemies, {}x{} px",
            world.all_tiles().len(),
            coins.len(),
            enemies.len(),
            world.width(),
            world.height()
        );

        Self {
            phase: GamePhase::Menu,
            tuning,
            world,
            player: Player::new(level.player_spawn),
            enemies,
            coins,
            camera,
            music_on: true,
            exit_requested: false,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Move to phase `to` if the flow allows it. Returns whether it moved.
    pub fn transition(&mut self, to: GamePhase) -> bool {
        let from = self.phase;
        if !from.can_transition(to) {
            log::debug!("Refused phase transition {from:?} -> {to:?}");
            return false;
        }

        if from == GamePhase::Playing {
            self.player.stop_walking(&mut self.events);
        }
        self.phase = to;
        log::info!("Phase {from:?} -> {to:?}");
        self.events.push(GameEvent::PhaseChanged { from, to });

        match to {
            GamePhase::Playing if self.music_on => self.events.push(GameEvent::MusicStarted),
            GamePhase::Win => self.events.push(GameEvent::Win),
            GamePhase::GameOver => self.events.push(GameEvent::Lose),
            _ => {}
        }
        true
    }

    /// Reset and start playing, from the menu or an end screen
    pub fn start(&mut self) -> bool {
        if !self.phase.can_transition(GamePhase::Playing) {
            return false;
        }
        self.reset();
        self.transition(GamePhase::Playing)
    }

    /// Put the player, every enemy, the coins and the camera back to their
    /// initial state. The phase is left alone.
    pub fn reset(&mut self) {
        self.player.stop_walking(&mut self.events);
        self.player.reset();
        for enemy in &mut self.enemies {
            enemy.reset();
        }
        self.coins = self.world.coins().to_vec();
        self.camera.reset();
        self.time_ticks = 0;
        log::info!("Game reset");
    }

    pub fn toggle_music(&mut self) {
        self.music_on = !self.music_on;
        log::info!("Music {}", if self.music_on { "on" } else { "off" });
        self.events.push(GameEvent::MusicToggled { on: self.music_on });
    }

    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    pub fn total_coins(&self) -> usize {
        self.world.coins().len()
    }

    pub fn coins_collected(&self) -> usize {
        self.total_coins() - self.coins.len()
    }

    /// Events emitted since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
