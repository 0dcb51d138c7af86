//! Session best score / best distance tracking
//!
//! In-memory only: bests live for the lifetime of the process and survive
//! run resets, never decreasing. They are committed exclusively by
//! run-ending collisions.

use serde::{Deserialize, Serialize};

/// Best score and best distance seen this session
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionBests {
    pub score: u32,
    pub distance: f32,
}

impl SessionBests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a finished run into the bests. Max-merge, so committing can
    /// only raise either value.
    pub fn commit(&mut self, score: u32, distance: f32) {
        if score > self.score {
            log::info!("new best score: {score}");
            self.score = score;
        }
        if distance > self.distance {
            log::info!("new best distance: {distance:.0}");
            self.distance = distance;
        }
    }
}
