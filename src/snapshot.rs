//! Read-only render view of the simulation
//!
//! A [`RenderSnapshot`] is everything a renderer needs for one frame, already
//! culled and converted to screen space. Capturing never mutates the state.

use glam::Vec2;
use serde::Serialize;

use crate::consts::BACKGROUND_TILE;
use crate::menu::{self, MENU_TITLE, MenuButton};
use crate::sim::{Camera, GamePhase, GameState, Rect, SpriteKey};

pub const BACKGROUND_ASSET: &str = "background_fade_desert";
pub const RESTART_PROMPT: &str = "Press SPACE to play again";

/// One image to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpriteInstance {
    pub sprite: SpriteKey,
    pub asset: &'static str,
    /// Screen-space top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

/// Title card shown instead of the level after a round ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EndScreen {
    pub won: bool,
    pub title: &'static str,
    pub prompt: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub phase: GamePhase,
    pub camera_x: f32,
    /// Screen position of the top-left background tile; tiles repeat every
    /// `BACKGROUND_TILE` pixels from here
    pub background_offset: Vec2,
    /// Draw order: tiles, coins, enemies, player
    pub sprites: Vec<SpriteInstance>,
    /// `"Coins: n/total"`
    pub coin_text: String,
    pub menu_title: Option<&'static str>,
    pub menu_buttons: Vec<MenuButton>,
    pub end_screen: Option<EndScreen>,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let camera = &state.camera;

        let mut snapshot = Self {
            phase: state.phase,
            camera_x: camera.x,
            background_offset: Vec2::new(-(camera.x % BACKGROUND_TILE), 0.0),
            sprites: Vec::new(),
            coin_text: format!("Coins: {}/{}", state.coins_collected(), state.total_coins()),
            menu_title: None,
            menu_buttons: Vec::new(),
            end_screen: None,
        };

        match state.phase {
            GamePhase::Menu => {
                snapshot.menu_title = Some(MENU_TITLE);
                snapshot.menu_buttons = menu::layout(camera.viewport.x, state.music_on);
            }
            GamePhase::Playing => snapshot.sprites = collect_sprites(state),
            GamePhase::Win => {
                snapshot.end_screen = Some(EndScreen {
                    won: true,
                    title: "YOU WIN!",
                    prompt: RESTART_PROMPT,
                })
            }
            GamePhase::GameOver => {
                snapshot.end_screen = Some(EndScreen {
                    won: false,
                    title: "GAME OVER",
                    prompt: RESTART_PROMPT,
                })
            }
        }

        snapshot
    }

    /// Number of background tiles needed to cover the viewport
    pub fn background_tiles(&self, viewport: Vec2) -> (u32, u32) {
        let across = ((viewport.x - self.background_offset.x) / BACKGROUND_TILE).ceil();
        let down = ((viewport.y - self.background_offset.y) / BACKGROUND_TILE).ceil();
        (across.max(0.0) as u32, down.max(0.0) as u32)
    }
}

fn collect_sprites(state: &GameState) -> Vec<SpriteInstance> {
    let camera = &state.camera;
    let mut sprites = Vec::new();

    let tiles = state
        .world
        .all_tiles()
        .iter()
        .map(|t| (t.kind.sprite(), t.rect));
    let coins = state
        .coins
        .iter()
        .map(|c| (SpriteKey::Coin, c.rect()));
    let enemies = state.enemies.iter().map(|e| (e.sprite, e.body.rect()));

    for (sprite, rect) in tiles.chain(coins).chain(enemies) {
        if let Some(instance) = instance(camera, sprite, &rect) {
            sprites.push(instance);
        }
    }

    // The player is always on screen
    let body = &state.player.body;
    sprites.push(SpriteInstance {
        sprite: state.player.sprite,
        asset: state.player.sprite.as_str(),
        pos: camera.to_screen(body.rect().min),
        size: body.size,
    });

    sprites
}

fn instance(camera: &Camera, sprite: SpriteKey, rect: &Rect) -> Option<SpriteInstance> {
    camera.is_visible(rect).then(|| SpriteInstance {
        sprite,
        asset: sprite.as_str(),
        pos: camera.to_screen(rect.min),
        size: rect.size,
    })
}
