//! Enemy pool and spawn policy
//!
//! Ten slots are allocated once and recycled for the whole run. A slot is
//! assigned a kind and a lane when the pool is (re)seeded, when its enemy
//! drifts off the left edge, and when its enemy is eaten; activation is a
//! separate, cadence-driven step that flips the first inactive slot live.
//!
//! Lane assignment invariant: no two consecutive assignments (across the
//! whole pool, in assignment order) land in the same lane.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, enemy_entry_bounds};
use crate::consts::*;

/// Enemy roster: three hostile tiers and one consumable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Shark,
    Orca,
    Whale,
    Fish,
}

impl EnemyKind {
    /// Hostiles end the run on contact unless frenzy is on
    pub fn is_hostile(self) -> bool {
        !matches!(self, EnemyKind::Fish)
    }

    /// Score for eating this enemy
    pub fn score_value(self) -> u32 {
        match self {
            EnemyKind::Shark => 50,
            EnemyKind::Orca => 150,
            EnemyKind::Whale => 300,
            EnemyKind::Fish => FISH_SCORE,
        }
    }

    /// Weighted draw: 30% per hostile tier, 10% fish
    fn draw(rng: &mut impl Rng) -> Self {
        let roll = rng.random_range(0..100);
        if roll < 30 {
            EnemyKind::Shark
        } else if roll < 60 {
            EnemyKind::Orca
        } else if roll < 90 {
            EnemyKind::Whale
        } else {
            EnemyKind::Fish
        }
    }
}

/// One pool slot
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub lane: u8,
    pub bounds: Rect,
    pub active: bool,
}

/// Fixed-capacity enemy pool with the no-repeat lane invariant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyPool {
    slots: [Enemy; ENEMY_POOL_SIZE],
    /// Lane handed out by the most recent assignment, across all slots
    last_lane: Option<u8>,
}

/// Uniform lane draw avoiding the previously assigned lane. Bounded retry;
/// if every re-draw collides, fall back to the next lane over.
fn draw_lane(rng: &mut impl Rng, avoid: Option<u8>) -> u8 {
    let mut lane = rng.random_range(0..LANE_COUNT);
    let Some(prev) = avoid else {
        return lane;
    };
    for _ in 0..LANE_RETRY_CAP {
        if lane != prev {
            return lane;
        }
        lane = rng.random_range(0..LANE_COUNT);
    }
    if lane != prev { lane } else { (prev + 1) % LANE_COUNT }
}

impl EnemyPool {
    /// Build a freshly seeded pool; every slot assigned, nothing active
    pub fn new(rng: &mut impl Rng) -> Self {
        let placeholder = Enemy {
            kind: EnemyKind::Fish,
            lane: 0,
            bounds: enemy_entry_bounds(0),
            active: false,
        };
        let mut pool = Self {
            slots: [placeholder; ENEMY_POOL_SIZE],
            last_lane: None,
        };
        pool.reseed(rng);
        pool
    }

    /// Re-assign every slot and deactivate it (run reset)
    pub fn reseed(&mut self, rng: &mut impl Rng) {
        for i in 0..ENEMY_POOL_SIZE {
            self.assign(i, rng);
        }
    }

    /// Give a slot a fresh kind, lane and entry position, inactive until
    /// the next activation pass
    pub fn respawn(&mut self, idx: usize, rng: &mut impl Rng) {
        self.assign(idx, rng);
    }

    fn assign(&mut self, idx: usize, rng: &mut impl Rng) {
        let kind = EnemyKind::draw(rng);
        let lane = draw_lane(rng, self.last_lane);
        self.last_lane = Some(lane);
        self.slots[idx] = Enemy {
            kind,
            lane,
            bounds: enemy_entry_bounds(lane),
            active: false,
        };
    }

    /// Activate the first inactive slot in scan order, if any
    pub fn activate_next(&mut self) -> Option<usize> {
        let idx = self.slots.iter().position(|e| !e.active)?;
        self.slots[idx].active = true;
        Some(idx)
    }

    pub fn slots(&self) -> &[Enemy] {
        &self.slots
    }

    /// Lane of the most recent assignment (what the next draw must avoid)
    pub fn last_lane(&self) -> Option<u8> {
        self.last_lane
    }
}

impl std::ops::Index<usize> for EnemyPool {
    type Output = Enemy;

    fn index(&self, idx: usize) -> &Enemy {
        &self.slots[idx]
    }
}

impl std::ops::IndexMut<usize> for EnemyPool {
    fn index_mut(&mut self, idx: usize) -> &mut Enemy {
        &mut self.slots[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_seeded_pool_is_inactive_and_placed_at_entry() {
        let mut rng = Pcg32::seed_from_u64(7);
        let pool = EnemyPool::new(&mut rng);
        for e in pool.slots() {
            assert!(!e.active);
            assert!(e.lane < LANE_COUNT);
            assert_eq!(e.bounds, enemy_entry_bounds(e.lane));
        }
    }

    #[test]
    fn test_consecutive_assignments_never_share_a_lane() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut pool = EnemyPool::new(&mut rng);

        let mut prev = None;
        for e in pool.slots() {
            if let Some(p) = prev {
                assert_ne!(e.lane, p);
            }
            prev = Some(e.lane);
        }

        // Invariant carries across respawns, in any slot order
        for round in 0..200 {
            let idx = round % ENEMY_POOL_SIZE;
            let before = pool.last_lane().unwrap();
            pool.respawn(idx, &mut rng);
            assert_ne!(pool[idx].lane, before);
        }
    }

    #[test]
    fn test_activation_scan_order() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut pool = EnemyPool::new(&mut rng);

        assert_eq!(pool.activate_next(), Some(0));
        assert_eq!(pool.activate_next(), Some(1));
        assert!(pool[0].active && pool[1].active);

        // A recycled slot becomes the first candidate again
        pool.respawn(0, &mut rng);
        assert!(!pool[0].active);
        assert_eq!(pool.activate_next(), Some(0));

        for _ in 0..ENEMY_POOL_SIZE {
            pool.activate_next();
        }
        // Pool exhausted
        assert_eq!(pool.activate_next(), None);
    }

    #[test]
    fn test_weighted_draw_covers_roster() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut counts = [0u32; 4];
        for _ in 0..4000 {
            match EnemyKind::draw(&mut rng) {
                EnemyKind::Shark => counts[0] += 1,
                EnemyKind::Orca => counts[1] += 1,
                EnemyKind::Whale => counts[2] += 1,
                EnemyKind::Fish => counts[3] += 1,
            }
        }
        // All kinds occur, fish is the rare one
        assert!(counts.iter().all(|&c| c > 0));
        assert!(counts[3] < counts[0]);
        assert!(counts[3] < counts[1]);
        assert!(counts[3] < counts[2]);
    }

    #[test]
    fn test_lane_draw_never_repeats_avoided_lane() {
        let mut rng = Pcg32::seed_from_u64(5);
        for avoid in 0..LANE_COUNT {
            for _ in 0..1000 {
                let lane = draw_lane(&mut rng, Some(avoid));
                assert_ne!(lane, avoid);
                assert!(lane < LANE_COUNT);
            }
        }
    }
}
