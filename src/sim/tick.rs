//! Fixed-step frame update
//!
//! One call to [`tick`] advances the game by one frame. Given the same state
//! and the same input sequence it always produces the same result.

use super::state::{GamePhase, GameState};
use crate::menu::MenuAction;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Move left (wins over `right` when both are held)
    pub left: bool,
    pub right: bool,
    /// Jump (space)
    pub jump: bool,
    /// Restart from an end screen (space)
    pub confirm: bool,
    /// Menu button picked this frame
    pub menu: Option<MenuAction>,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Menu => tick_menu(state, input),
        GamePhase::Playing => tick_playing(state, input),
        GamePhase::GameOver | GamePhase::Win => {
            if input.confirm {
                state.start();
            }
        }
    }
}

fn tick_menu(state: &mut GameState, input: &TickInput) {
    match input.menu {
        Some(MenuAction::Start) => {
            state.start();
        }
        Some(MenuAction::ToggleMusic) => state.toggle_music(),
        Some(MenuAction::Exit) => state.request_exit(),
        None => {}
    }
}

fn tick_playing(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    // Player moves first; enemies react to where it ended up
    state
        .player
        .handle_input(input, &state.world, &state.tuning, &mut state.events);
    state.player.apply_physics(&state.world, &state.tuning);
    state.camera.follow(state.player.body.pos.x);

    let player_x = state.player.body.pos.x;
    let margin = state.tuning.enemy_update_margin;
    for enemy in &mut state.enemies {
        if state.camera.is_active(enemy.body.pos.x, margin) {
            enemy.update(player_x, &state.world, &state.tuning);
        }
    }

    check_contacts(state);
}

/// Coins, then the end conditions in precedence order. Once one of them
/// ends the round the rest are skipped.
fn check_contacts(state: &mut GameState) {
    let taken = state.player.collect_coins(&mut state.coins, &mut state.events);
    if taken > 0 {
        log::debug!(
            "Collected {taken} coin(s), {}/{}",
            state.coins_collected(),
            state.total_coins()
        );
    }

    if state.player.fell_out(&state.world) {
        log::info!("Player fell out of the level");
        state.transition(GamePhase::GameOver);
        return;
    }

    if state.player.touches_flag(&state.world) {
        log::info!("Player reached the flag after {} frames", state.time_ticks);
        state.transition(GamePhase::Win);
        return;
    }

    if let Some(i) = state.player.touching_enemy(&state.enemies) {
        log::info!("Player hit enemy {i} ({:?})", state.enemies[i].kind);
        state.transition(GamePhase::GameOver);
    }
}
