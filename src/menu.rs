//! Main menu layout and hit-testing

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::rect::Rect;

pub const MENU_TITLE: &str = "PLATFORMER GAME";

const BUTTON_SIZE: Vec2 = Vec2::new(200.0, 60.0);
const FIRST_BUTTON_Y: f32 = 300.0;
const BUTTON_SPACING: f32 = 100.0;

/// Something the player picked on the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuAction {
    Start,
    ToggleMusic,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 3] = [MenuAction::Start, MenuAction::ToggleMusic, MenuAction::Exit];

    pub fn label(&self, music_on: bool) -> String {
        match self {
            MenuAction::Start => "Start Game".to_string(),
            MenuAction::ToggleMusic => format!("Music: {}", if music_on { "ON" } else { "OFF" }),
            MenuAction::Exit => "Exit".to_string(),
        }
    }
}

/// A clickable menu button in screen space
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuButton {
    pub action: MenuAction,
    pub rect: Rect,
    pub label: String,
}

/// Buttons stacked down the horizontal center of the screen
pub fn layout(viewport_width: f32, music_on: bool) -> Vec<MenuButton> {
    MenuAction::ALL
        .iter()
        .enumerate()
        .map(|(i, &action)| MenuButton {
            action,
            rect: Rect::new(
                viewport_width / 2.0 - BUTTON_SIZE.x / 2.0,
                FIRST_BUTTON_Y + i as f32 * BUTTON_SPACING,
                BUTTON_SIZE.x,
                BUTTON_SIZE.y,
            ),
            label: action.label(music_on),
        })
        .collect()
}

/// Menu action under a click at screen position `pos`, if any
pub fn action_at(pos: Vec2, viewport_width: f32) -> Option<MenuAction> {
    layout(viewport_width, true)
        .into_iter()
        .find(|b| b.rect.contains_point(pos))
        .map(|b| b.action)
}
