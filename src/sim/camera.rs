//! Horizontal follow camera

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Side-scrolling camera. Only the x offset moves; y is fixed at 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// World x of the left screen edge
    pub x: f32,
    /// Viewport size in pixels
    pub viewport: Vec2,
}

impl Camera {
    pub fn new(viewport: Vec2) -> Self {
        Self { x: 0.0, viewport }
    }

    /// Keep the player horizontally centered, never scrolling left of 0
    pub fn follow(&mut self, player_x: f32) {
        self.x = (player_x - self.viewport.x / 2.0).max(0.0);
    }

    /// World x of the screen center
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.viewport.x / 2.0
    }

    /// Whether something at world `x` is close enough to the view to simulate
    pub fn is_active(&self, x: f32, margin: f32) -> bool {
        (x - self.center_x()).abs() < self.viewport.x + margin
    }

    /// Whether a world-space box intersects the screen
    pub fn is_visible(&self, rect: &Rect) -> bool {
        rect.right() > self.x
            && rect.left() < self.x + self.viewport.x
            && rect.bottom() > 0.0
            && rect.top() < self.viewport.y
    }

    /// World position to screen position
    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        Vec2::new(world.x - self.x, world.y)
    }

    pub fn reset(&mut self) {
        self.x = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(Vec2::new(1000.0, 800.0))
    }

    #[test]
    fn test_follow_clamps_at_left_edge() {
        let mut cam = camera();
        cam.follow(100.0);
        assert_eq!(cam.x, 0.0);
        cam.follow(1700.0);
        assert_eq!(cam.x, 1200.0);
        assert_eq!(cam.center_x(), 1700.0);
    }

    #[test]
    fn test_activity_window() {
        let cam = camera();
        // Center at 500, window half-width 1000 + 200
        assert!(cam.is_active(1699.0, 200.0));
        assert!(!cam.is_active(1700.0, 200.0));
        assert!(cam.is_active(-699.0, 200.0));
    }

    #[test]
    fn test_visibility_and_screen_space() {
        let mut cam = camera();
        cam.follow(1500.0);
        assert_eq!(cam.x, 1000.0);
        assert!(cam.is_visible(&Rect::new(990.0, 100.0, 20.0, 20.0)));
        assert!(!cam.is_visible(&Rect::new(970.0, 100.0, 30.0, 20.0)));
        assert!(!cam.is_visible(&Rect::new(2000.0, 100.0, 30.0, 20.0)));
        assert_eq!(cam.to_screen(Vec2::new(1064.0, 32.0)), Vec2::new(64.0, 32.0));
    }
}
