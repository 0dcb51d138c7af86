//! Lane geometry and axis-aligned collision testing
//!
//! The lane grid is fixed: five 120px horizontal bands below a 90px sky
//! strip, laid out in the 1280x720 logical space. Everything that moves
//! carries an axis-aligned [`Rect`] hitbox, and every hitbox position is a
//! pure function of a lane index, so collision is a plain AABB overlap test.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Axis-aligned rectangle: top-left corner + size, y growing downward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// AABB overlap test. Strict: rectangles that only share an edge do
    /// not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Top y of a lane's hitbox band
fn lane_y(lane: u8) -> f32 {
    f32::from(lane) * LANE_HEIGHT + LANE_TOP + HITBOX_INSET
}

/// Player hitbox for a lane; x never changes
pub fn player_bounds(lane: u8) -> Rect {
    Rect::new(PLAYER_X, lane_y(lane), BODY_SIZE, BODY_SIZE)
}

/// Enemy hitbox at its spawn point, just off the right edge
pub fn enemy_entry_bounds(lane: u8) -> Rect {
    Rect::new(SCREEN_WIDTH + HITBOX_INSET, lane_y(lane), BODY_SIZE, BODY_SIZE)
}

/// Reef hitbox at its spawn point: a full-height wall off the right edge
pub fn reef_entry_bounds() -> Rect {
    Rect::new(
        SCREEN_WIDTH + HITBOX_INSET,
        LANE_HEIGHT + LANE_TOP,
        BODY_SIZE,
        SCREEN_HEIGHT,
    )
}
