//! Reef Rush - A five-lane ocean runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lanes, collisions, game state)
//! - `highscores`: Session-scoped best score / best distance tracking
//!
//! Rendering, audio and input polling belong to the host: it feeds a
//! [`sim::TickInput`] into [`sim::tick`] once per frame, then reads the
//! [`sim::GameState`] snapshot (and drains its events) to draw and play
//! sounds. Nothing outside `sim` mutates game state.

pub mod highscores;
pub mod sim;

pub use highscores::SessionBests;
pub use sim::{GameState, Screen, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Target fixed timestep (frames per second)
    pub const FRAME_RATE: u32 = 60;

    /// Logical screen dimensions (the lane grid is defined in this space)
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Lane grid: five horizontal bands
    pub const LANE_COUNT: u8 = 5;
    pub const LANE_HEIGHT: f32 = 120.0;
    /// Top of lane 0, measured from the top of the screen
    pub const LANE_TOP: f32 = 90.0;
    /// Sprites are drawn 14px larger than their hitbox on every side
    pub const HITBOX_INSET: f32 = 14.0;
    /// Hitbox edge length for the player and every enemy
    pub const BODY_SIZE: f32 = 100.0;

    /// Player swims at a fixed x
    pub const PLAYER_X: f32 = 30.0 + HITBOX_INSET;
    /// Lane the player starts (and restarts) in
    pub const PLAYER_START_LANE: u8 = 1;

    /// Enemy pool capacity
    pub const ENEMY_POOL_SIZE: usize = 10;
    /// One pool slot is activated every this many Gameplay frames
    pub const SPAWN_INTERVAL_FRAMES: u32 = 40;
    /// No new activations once the run distance reaches this
    pub const SPAWN_DISTANCE_CUTOFF: f32 = 1105.0;
    /// Enemies are recycled once their hitbox left edge passes this x
    pub const ENEMY_DESPAWN_X: f32 = -128.0;
    /// Lane re-draws allowed before falling back deterministically
    pub const LANE_RETRY_CAP: u32 = 10;

    /// Enemy speed: starting value and the floor it relaxes back to
    pub const BASE_SPEED: f32 = 10.0;
    /// Speed gained per frame while frenzy is off
    pub const SPEED_RAMP: f32 = 0.005;
    /// Speed shed when frenzy ends (clamped at BASE_SPEED)
    pub const SPEED_RELAX: f32 = 2.0;
    /// The reef slides in at a fixed speed, independent of enemy speed
    pub const REEF_SPEED: f32 = 10.0;

    /// Food meter bound; reaching it triggers frenzy
    pub const FOOD_MAX: u16 = 400;
    /// Food for eating a hostile while in frenzy
    pub const FOOD_PER_HOSTILE: u16 = 15;
    /// Food for a fish outside frenzy
    pub const FOOD_PER_FISH: u16 = 80;
    /// Food for a fish while already in frenzy
    pub const FOOD_PER_FISH_FRENZY: u16 = 25;
    /// Score for any fish
    pub const FISH_SCORE: u32 = 10;

    /// Distance gained per Gameplay frame
    pub const DISTANCE_PER_FRAME: f32 = 0.5;
    /// Run length; distance freezes here and the reef activates
    pub const DISTANCE_MAX: f32 = 1109.0;
}
