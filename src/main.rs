//! Pounce entry point
//!
//! Headless demo session: stands in for both external collaborators (a
//! point-radius overlap check plays the physics engine, the log plays the
//! renderer), auto-taps the nearest collectible, and runs until one full
//! celebration completes.

use glam::Vec2;
use log::{debug, error, info};

use pounce::config::GameConfig;
use pounce::consts::SIM_DT;
use pounce::sim::{GameEvent, GameState, TickInput, tick};

/// Overlap radius used by the stand-in collision check
const PICKUP_RADIUS: f32 = 24.0;

/// Hard cap on demo length (15 minutes of simulated time)
const MAX_TICKS: u64 = 15 * 60 * 120;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);

    let config = GameConfig::default();
    let mut state = match GameState::new(config, seed) {
        Ok(state) => state,
        Err(err) => {
            error!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    info!("session started, seed {seed}");
    for c in state.collectibles.iter() {
        info!("collectible {} at ({:.0}, {:.0})", c.id, c.pos.x, c.pos.y);
    }

    let mut done = false;
    while !done && state.time_ticks < MAX_TICKS {
        let input = TickInput {
            pointer: next_tap(&state),
            contacts: overlaps(&state),
        };

        for event in tick(&mut state, &input, SIM_DT) {
            done |= narrate(&state, &event);
        }
    }

    if done {
        info!("demo finished after {:.1}s", state.time_ticks as f32 * SIM_DT);
    } else {
        error!("demo hit the tick cap without completing a celebration");
        std::process::exit(1);
    }
}

/// Tap the nearest collectible whenever the actor is idle
fn next_tap(state: &GameState) -> Option<Vec2> {
    if state.actor.moving {
        return None;
    }
    state
        .collectibles
        .iter()
        .min_by(|a, b| {
            let da = a.pos.distance_squared(state.actor.pos);
            let db = b.pos.distance_squared(state.actor.pos);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|c| c.pos)
}

/// Stand-in for the physics collaborator: report every actor/collectible
/// overlap this frame
fn overlaps(state: &GameState) -> Vec<u32> {
    state
        .collectibles
        .iter()
        .filter(|c| c.pos.distance(state.actor.pos) <= PICKUP_RADIUS)
        .map(|c| c.id)
        .collect()
}

/// Stand-in for the rendering collaborator. Returns true once the
/// celebration tears down.
fn narrate(state: &GameState, event: &GameEvent) -> bool {
    match event {
        GameEvent::AnimationChanged(facing) => {
            let clip = state.config.animations.for_facing(*facing);
            info!(
                "play {:?} ({} frames {}-{})",
                facing, clip.sheet, clip.frame_start, clip.frame_end
            );
        }
        GameEvent::AnimationStopped => info!("actor stopped"),
        GameEvent::CollectibleSpawned { id, pos } => {
            info!("collectible {} at ({:.0}, {:.0})", id, pos.x, pos.y);
        }
        GameEvent::CollectiblePicked { .. } => {}
        GameEvent::ProgressChanged { ratio } => {
            info!(
                "progress bar {:.0}/{:.0} ({:.0}%)",
                ratio * state.config.bar_width,
                state.config.bar_width,
                ratio * 100.0
            );
        }
        GameEvent::CelebrationStarted { center } => {
            info!("celebration at ({:.0}, {:.0})", center.x, center.y);
        }
        GameEvent::CharRevealed { ch } => debug!("reveal '{ch}'"),
        GameEvent::CelebrationEnded => {
            info!("celebration over");
            return true;
        }
    }
    false
}
