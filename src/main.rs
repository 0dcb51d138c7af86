//! Reef Rush headless demo
//!
//! Stands in for a graphical host: the same tick-then-read loop, no
//! window. A small autopilot supplies the edge-triggered inputs, plays one
//! full run, and the final state snapshot is dumped as JSON.
//!
//! Usage: `reef-rush [seed]` (RUST_LOG=info for transition logs)

use reef_rush::consts::*;
use reef_rush::sim::{GameState, Screen, TickInput, tick};

/// How far ahead (px) the bot looks for threats and snacks
const LOOKAHEAD: f32 = 420.0;

/// Safety margin before a blind lane change is worth it
const CLEARANCE: f32 = LOOKAHEAD / 2.0;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);

    let mut state = GameState::new(seed);
    let mut frames: u64 = 0;
    // A full run to the reef takes ~2350 frames; leave room for detours
    const FRAME_CAP: u64 = 20_000;

    while state.screen != Screen::Win && frames < FRAME_CAP {
        let input = autopilot(&state);
        tick(&mut state, &input);
        frames += 1;
    }

    log::info!(
        "demo finished after {frames} frames ({:.0}s at {FRAME_RATE} Hz): score {} distance {:.0} (best {} / {:.0})",
        frames as f32 / FRAME_RATE as f32,
        state.score,
        state.distance,
        state.bests.score,
        state.bests.distance,
    );

    match serde_json::to_string_pretty(&state) {
        Ok(snapshot) => println!("{snapshot}"),
        Err(err) => eprintln!("snapshot serialization failed: {err}"),
    }
}

/// Build this frame's input from the readable snapshot
fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    match state.screen {
        Screen::Title => input.confirm = true,
        Screen::Gameplay => steer(state, &mut input),
        _ => {}
    }
    input
}

/// Distance from the player's nose to the nearest matching enemy ahead in
/// a lane; infinite when the lane is clear
fn nearest_ahead(state: &GameState, lane: u8, hostile: bool) -> f32 {
    state
        .enemies
        .slots()
        .iter()
        .filter(|e| e.active && e.lane == lane && e.kind.is_hostile() == hostile)
        .map(|e| e.bounds.left() - (PLAYER_X + BODY_SIZE))
        .filter(|d| *d > -BODY_SIZE)
        .fold(f32::INFINITY, f32::min)
}

fn steer(state: &GameState, input: &mut TickInput) {
    let lane = state.player.lane;

    // Frenzy turns hostiles into points; stop dodging and hold the lane
    if state.player.frenzy {
        return;
    }

    if nearest_ahead(state, lane, true) < LOOKAHEAD {
        // Threat incoming: take the clearer neighbor, if one is clear
        let up = if lane > 0 {
            nearest_ahead(state, lane - 1, true)
        } else {
            f32::NEG_INFINITY
        };
        let down = if lane < LANE_COUNT - 1 {
            nearest_ahead(state, lane + 1, true)
        } else {
            f32::NEG_INFINITY
        };

        if up >= down && up > CLEARANCE {
            input.lane_up = true;
        } else if down > CLEARANCE {
            input.lane_down = true;
        }
        // Both neighbors blocked: hold the lane and hope
        return;
    }

    // Safe for now: drift toward an adjacent fish
    let snack = |l: u8| {
        nearest_ahead(state, l, false) < LOOKAHEAD && nearest_ahead(state, l, true) > LOOKAHEAD
    };
    if lane > 0 && snack(lane - 1) {
        input.lane_up = true;
    } else if lane < LANE_COUNT - 1 && snack(lane + 1) {
        input.lane_down = true;
    }
}
