//! Per-frame simulation update
//!
//! One `tick` per display frame (60 Hz target). Input flags are
//! edge-triggered: the host sets a flag only on the frame the key went
//! down. Holding a key does nothing.

use super::collision::player_bounds;
use super::state::{GameEvent, GameState, Screen};
use crate::consts::*;

/// Input actions for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Start / replay (Enter)
    pub confirm: bool,
    /// Move one lane up
    pub lane_up: bool,
    /// Move one lane down
    pub lane_down: bool,
    /// Show the credits screen (from a finished run)
    pub show_credits: bool,
    /// Return to the title screen (from credits)
    pub to_title: bool,
}

/// Advance the game by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.frames += 1;

    match state.screen {
        Screen::Title => title(state, input),
        Screen::Gameplay => gameplay(state, input),
        // Ending is the legacy game-over screen; it behaves exactly like Win
        Screen::Win | Screen::Ending => run_over(state, input),
        Screen::Credits => credits(state, input),
    }
}

fn title(state: &mut GameState, input: &TickInput) {
    if input.confirm {
        state.screen = Screen::Gameplay;
        state.frames = 0;
        log::info!("run started (seed {})", state.seed);
    }
}

fn run_over(state: &mut GameState, input: &TickInput) {
    if input.confirm {
        state.reset_run();
        state.screen = Screen::Gameplay;
        log::info!("replay (seed {})", state.seed);
    } else if input.show_credits {
        state.screen = Screen::Credits;
    }
}

fn credits(state: &mut GameState, input: &TickInput) {
    if input.to_title {
        state.reset_run();
        state.screen = Screen::Title;
    }
}

fn gameplay(state: &mut GameState, input: &TickInput) {
    // Lane change snaps the same frame it is pressed
    if input.lane_down {
        state.player.lane = (state.player.lane + 1).min(LANE_COUNT - 1);
    } else if input.lane_up {
        state.player.lane = state.player.lane.saturating_sub(1);
    }
    state.player.bounds = player_bounds(state.player.lane);

    // Spawn cadence: at most one activation per interval, none once the
    // run is nearly over
    if state.frames >= SPAWN_INTERVAL_FRAMES {
        if state.distance < SPAWN_DISTANCE_CUTOFF {
            state.enemies.activate_next();
        }
        state.frames = 0;
    }

    // Advance active enemies; recycle the ones that left the screen
    for i in 0..ENEMY_POOL_SIZE {
        if !state.enemies[i].active {
            continue;
        }
        state.enemies[i].bounds.pos.x -= state.speed;
        if state.enemies[i].bounds.left() <= ENEMY_DESPAWN_X {
            state.enemies.respawn(i, &mut state.rng);
        }
    }

    if state.obstacle.active {
        state.obstacle.bounds.pos.x -= REEF_SPEED;
    }

    if !state.player.frenzy {
        state.speed += SPEED_RAMP;
    }

    // Player vs enemies, in slot order
    for i in 0..ENEMY_POOL_SIZE {
        let enemy = state.enemies[i];
        if !enemy.active || !state.player.bounds.overlaps(&enemy.bounds) {
            continue;
        }

        if enemy.kind.is_hostile() {
            if state.player.frenzy {
                state.score += enemy.kind.score_value();
                state.player.food =
                    (state.player.food + FOOD_PER_HOSTILE).min(FOOD_MAX);
                state.enemies.respawn(i, &mut state.rng);
                state.events.push(GameEvent::Chomp);
            } else {
                state.events.push(GameEvent::Wipeout);
                state.end_run();
                return;
            }
        } else {
            state.score += enemy.kind.score_value();
            let gain = if state.player.frenzy {
                FOOD_PER_FISH_FRENZY
            } else {
                FOOD_PER_FISH
            };
            state.player.food = (state.player.food + gain).min(FOOD_MAX);
            state.enemies.respawn(i, &mut state.rng);
            state.events.push(GameEvent::Chomp);

            if !state.player.frenzy && state.player.food >= FOOD_MAX {
                state.player.frenzy = true;
                state.events.push(GameEvent::FrenzyRoar);
                log::debug!("frenzy on");
            }
        }
    }

    // Player vs reef, only once it is active
    if state.obstacle.active && state.player.bounds.overlaps(&state.obstacle.bounds) {
        state.events.push(GameEvent::ReefCrash);
        state.end_run();
        return;
    }

    // Frenzy upkeep: the meter drains one per frame
    if state.player.frenzy {
        state.player.food = state.player.food.saturating_sub(1);
        if state.player.food == 0 {
            state.player.frenzy = false;
            state.speed = (state.speed - SPEED_RELAX).max(BASE_SPEED);
            log::debug!("frenzy off");
        }
    }

    // Distance freezes at the cap; the reef latches on the crossing
    if state.distance < DISTANCE_MAX {
        state.distance = (state.distance + DISTANCE_PER_FRAME).min(DISTANCE_MAX);
    }
    if !state.obstacle.active && state.distance >= DISTANCE_MAX {
        state.obstacle.active = true;
        log::info!("reef ahead");
    }
}
