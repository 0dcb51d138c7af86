//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one `tick` per display frame)
//! - Seeded RNG only
//! - Stable slot order (enemies scanned by pool index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, enemy_entry_bounds, player_bounds, reef_entry_bounds};
pub use spawn::{Enemy, EnemyKind, EnemyPool};
pub use state::{GameEvent, GameState, Obstacle, Player, Screen};
pub use tick::{TickInput, tick};
