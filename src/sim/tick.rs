//! Fixed timestep simulation tick
//!
//! One call per frame, in a fixed order: pointer input, movement, contact
//! resolution, threshold check, then scheduled timers. All contacts of a
//! frame are resolved before a crossing may open the celebration overlay.

use glam::Vec2;
use log::{debug, info};

use super::movement;
use super::state::{CollectibleId, GameEvent, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// World position of a pointer-down event, if one arrived this frame.
    /// Only the most recent one matters; earlier presses are overwritten.
    pub pointer: Option<Vec2>,
    /// Actor/collectible overlaps reported by the collision collaborator
    /// since the last tick. Duplicates and stale ids are tolerated.
    pub contacts: Vec<CollectibleId>,
}

/// Advance the session by one fixed timestep, returning the events the
/// rendering collaborator should act on this frame.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Pointer input lands before movement reads the target
    if let Some(pos) = input.pointer {
        state.target = Some(pos);
        state.actor.moving = true;
        debug!("target set to ({:.1}, {:.1})", pos.x, pos.y);
    }

    step_movement(state, dt, &mut events);

    // Resolve every contact atomically (remove -> respawn -> score) before
    // the threshold may trigger the celebration for this frame
    let mut crossed = false;
    for &id in &input.contacts {
        crossed |= resolve_contact(state, id, &mut events);
    }

    if crossed {
        let center = state.scene_center();
        let reveal_every = ticks_for(state.config.reveal_interval, dt);
        let duration = ticks_for(state.config.celebration_duration, dt);
        state.celebration.trigger(
            &mut state.scheduler,
            state.time_ticks,
            center,
            &state.config.message,
            reveal_every,
            duration,
            &mut events,
        );
    }

    state.time_ticks += 1;
    for kind in state.scheduler.advance(state.time_ticks) {
        state
            .celebration
            .on_task(kind, &mut state.scheduler, &mut events);
    }

    events
}

/// Steer toward the target and integrate the result. The walk animation is
/// (re)played only when the facing changes or walking resumes, and stopped
/// exactly once on arrival.
fn step_movement(state: &mut GameState, dt: f32, events: &mut Vec<GameEvent>) {
    let target = state.target.unwrap_or(state.actor.pos);
    let steering = movement::steer(
        state.actor.pos,
        target,
        state.actor.moving,
        state.config.speed,
        state.config.stop_distance,
    );

    if steering.still_moving {
        state.actor.vel = steering.velocity;
        if let Some(facing) = steering.facing {
            if facing != state.actor.facing || !state.actor.walking {
                state.actor.facing = facing;
                state.actor.walking = true;
                events.push(GameEvent::AnimationChanged(facing));
            }
        }
        state.actor.pos += steering.velocity * dt;
    } else {
        state.actor.vel = Vec2::ZERO;
        if state.actor.moving {
            state.actor.moving = false;
        }
        if state.actor.walking {
            state.actor.walking = false;
            events.push(GameEvent::AnimationStopped);
        }
    }
}

/// Remove the contacted collectible, spawn its replacement, and record the
/// collection. Returns whether this collection crossed the threshold.
/// Ids that are no longer active (duplicate reports) are ignored.
fn resolve_contact(state: &mut GameState, id: CollectibleId, events: &mut Vec<GameEvent>) -> bool {
    if state.collectibles.remove(id).is_none() {
        return false;
    }
    events.push(GameEvent::CollectiblePicked { id });

    let replacement = state.next_entity_id();
    let pos = state.collectibles.spawn(
        replacement,
        state.config.width,
        state.config.height,
        state.config.spawn_margin,
        &mut state.rng,
    );
    events.push(GameEvent::CollectibleSpawned {
        id: replacement,
        pos,
    });

    let collected = state.progress.on_collected();
    events.push(GameEvent::ProgressChanged {
        ratio: collected.ratio,
    });
    info!(
        "collected {} ({}/{})",
        id,
        state.progress.score(),
        state.progress.threshold()
    );

    collected.threshold_reached
}

/// Convert a wall-clock interval to ticks at the current timestep (at least 1)
fn ticks_for(seconds: f32, dt: f32) -> u64 {
    ((seconds / dt).round() as u64).max(1)
}
