//! Game state and core simulation types
//!
//! Everything a frame of gameplay depends on lives in [`GameState`],
//! including the seeded RNG: two states built from the same seed and fed
//! the same inputs stay identical forever.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, player_bounds, reef_entry_bounds};
use super::spawn::EnemyPool;
use crate::consts::*;
use crate::highscores::SessionBests;

/// Active screen. Exactly one at a time; mutated only by the transitions
/// in [`super::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Title,
    Gameplay,
    /// Legacy game-over screen; same handlers as `Win`, unreachable from
    /// normal play
    Ending,
    /// Every run ends here, eaten or reef
    Win,
    Credits,
}

/// The player avatar
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    /// Lane index, 0 (top) to 4 (bottom)
    pub lane: u8,
    pub bounds: Rect,
    /// Frenzy: hostiles become edible while this holds
    pub frenzy: bool,
    /// Food meter, 0..=FOOD_MAX; filling it starts frenzy, frenzy drains it
    pub food: u16,
}

impl Player {
    fn new() -> Self {
        Self {
            lane: PLAYER_START_LANE,
            bounds: player_bounds(PLAYER_START_LANE),
            frenzy: false,
            food: 0,
        }
    }
}

/// The reef: a full-height wall that slides in at the end of the run
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    pub bounds: Rect,
    pub active: bool,
}

impl Obstacle {
    fn new() -> Self {
        Self {
            bounds: reef_entry_bounds(),
            active: false,
        }
    }
}

/// One-frame triggers for the host's audio layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An enemy was eaten
    Chomp,
    /// Frenzy just started
    FrenzyRoar,
    /// Fatal hostile collision
    Wipeout,
    /// Ran into the reef
    ReefCrash,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG for spawn draws; serialized so saved states replay exactly
    pub(crate) rng: Pcg32,
    pub screen: Screen,
    /// Frames since the last screen entry; drives the spawn cadence and
    /// the host's blink effects
    pub frames: u32,
    pub player: Player,
    pub enemies: EnemyPool,
    pub obstacle: Obstacle,
    /// Global enemy speed, px/frame
    pub speed: f32,
    pub score: u32,
    /// Run distance, frozen at DISTANCE_MAX
    pub distance: f32,
    /// Process-lifetime bests, untouched by run resets
    pub bests: SessionBests,
    /// Events raised by the last tick; cleared on the next one
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game on the title screen
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let enemies = EnemyPool::new(&mut rng);
        Self {
            seed,
            rng,
            screen: Screen::Title,
            frames: 0,
            player: Player::new(),
            enemies,
            obstacle: Obstacle::new(),
            speed: BASE_SPEED,
            score: 0,
            distance: 0.0,
            bests: SessionBests::new(),
            events: Vec::new(),
        }
    }

    /// Full run reset, shared by every transition that re-enters Gameplay
    /// (or returns to Title). Bests are deliberately left alone.
    pub fn reset_run(&mut self) {
        self.player = Player::new();
        self.enemies.reseed(&mut self.rng);
        self.obstacle = Obstacle::new();
        self.speed = BASE_SPEED;
        self.score = 0;
        self.distance = 0.0;
        self.frames = 0;
    }

    /// End the run: commit bests and switch to the Win screen
    pub(crate) fn end_run(&mut self) {
        self.bests.commit(self.score, self.distance);
        self.screen = Screen::Win;
        self.frames = 0;
        log::info!(
            "run over: score {} distance {:.0}",
            self.score,
            self.distance
        );
    }
}
