//! Seeded autopilot for headless runs
//!
//! Produces a plausible stream of [`TickInput`]s: walk right, hop over
//! things in the way, now and then back off for a moment. Same seed, same
//! inputs.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::TILE_SIZE;
use crate::menu::MenuAction;
use crate::sim::{GamePhase, GameState, TickInput, collision};

/// How far ahead (pixels) an enemy makes the pilot jump
const ENEMY_LOOKAHEAD: f32 = 160.0;
/// Chance per grounded frame of a jump for no reason
const RANDOM_JUMP_CHANCE: f64 = 0.02;
/// Chance per frame of starting a short walk backwards
const BACKSTEP_CHANCE: f64 = 0.005;

/// Random but reproducible input source
pub struct DemoPilot {
    seed: u64,
    rng: Pcg32,
    backstep: u32,
}

impl DemoPilot {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            backstep: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Input for the next frame given the current state
    pub fn next_input(&mut self, state: &GameState) -> TickInput {
        match state.phase {
            GamePhase::Menu => TickInput {
                menu: Some(MenuAction::Start),
                ..Default::default()
            },
            GamePhase::GameOver | GamePhase::Win => TickInput {
                confirm: true,
                ..Default::default()
            },
            GamePhase::Playing => self.drive(state),
        }
    }

    fn drive(&mut self, state: &GameState) -> TickInput {
        let body = &state.player.body;

        if self.backstep == 0 && self.rng.random_bool(BACKSTEP_CHANCE) {
            self.backstep = self.rng.random_range(10..40);
        }
        let left = self.backstep > 0;
        self.backstep = self.backstep.saturating_sub(1);

        let dir = if left { -1.0 } else { 1.0 };
        let ahead = body.pos.x + dir * TILE_SIZE;

        let enemy_ahead = state.enemies.iter().any(|e| {
            let dx = (e.body.pos.x - body.pos.x) * dir;
            dx > 0.0 && dx < ENEMY_LOOKAHEAD
        });
        let gap_ahead = !collision::ground_at(
            &state.world,
            Vec2::new(ahead, body.bottom() + state.tuning.edge_probe_depth),
            state.tuning.edge_probe_tolerance,
        );
        let wall_ahead = state.world.solid_tiles().any(|t| {
            (t.center().x - ahead).abs() < TILE_SIZE / 2.0
                && (t.center().y - body.pos.y).abs() < TILE_SIZE / 2.0
        });

        let wants_jump = enemy_ahead
            || gap_ahead
            || wall_ahead
            || self.rng.random_bool(RANDOM_JUMP_CHANCE);

        TickInput {
            left,
            right: !left,
            jump: body.on_ground && wants_jump,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LevelData;
    use crate::sim::tick;
    use crate::tuning::Tuning;

    fn record(seed: u64, frames: usize) -> Vec<TickInput> {
        let mut state = GameState::new(&LevelData::builtin(), Tuning::default());
        let mut pilot = DemoPilot::new(seed);
        let mut inputs = Vec::with_capacity(frames);
        for _ in 0..frames {
            let input = pilot.next_input(&state);
            tick(&mut state, &input);
            inputs.push(input);
        }
        inputs
    }

    #[test]
    fn test_same_seed_same_inputs() {
        assert_eq!(record(7, 800), record(7, 800));
    }

    #[test]
    fn test_starts_from_menu_and_moves() {
        let inputs = record(1, 300);
        assert_eq!(inputs[0].menu, Some(MenuAction::Start));
        let rightward = inputs.iter().filter(|i| i.right).count();
        let leftward = inputs.iter().filter(|i| i.left).count();
        assert!(rightward > leftward);
        assert!(inputs.iter().all(|i| !(i.left && i.right)));
    }
}
