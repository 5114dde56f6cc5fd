//! Game state and core simulation types
//!
//! One `GameState` owns everything a session mutates; nothing lives at module
//! scope, so several sessions (or tests) can run side by side.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, GameConfig};

use super::celebrate::Celebration;
use super::collectibles::Collectibles;
use super::progress::Progress;
use super::schedule::Scheduler;

/// Identity of a collectible for contact reports and events
pub type CollectibleId = u32;

/// Discrete facing direction, selected by the dominant displacement axis.
///
/// Screen coordinates: +y points down, so a positive y displacement faces Down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Up,
    Down,
    Left,
    Right,
}

/// The user-controlled entity. Created once at session start, never destroyed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub pos: Vec2,
    pub vel: Vec2,
    pub facing: Facing,
    /// Seeking the current target (cleared on arrival)
    pub moving: bool,
    /// Walk animation currently playing on the rendering side
    pub walking: bool,
}

impl Actor {
    fn at(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            facing: Facing::Down,
            moving: false,
            walking: false,
        }
    }
}

/// A collectible entity. Membership in the active set is what "active" means;
/// removed on contact with the actor and immediately replaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub id: CollectibleId,
    pub pos: Vec2,
}

/// Outbound notifications for the rendering collaborator.
///
/// The sim never draws. Hosts map these onto their own services: walk/stop
/// animation playback, a looping float tween per spawned collectible,
/// progress-bar redraws, and the celebration overlay with per-character text
/// reveal.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Play the walk clip for this facing (only emitted on change or restart)
    AnimationChanged(Facing),
    /// Stop the walk clip; the actor arrived
    AnimationStopped,
    /// A collectible appeared; attach its floating motion here
    CollectibleSpawned { id: CollectibleId, pos: Vec2 },
    /// A collectible was picked up; release its visuals
    CollectiblePicked { id: CollectibleId },
    /// Fill ratio changed; bar width = ratio * config.bar_width
    ProgressChanged { ratio: f32 },
    /// Celebration overlay opened, centered here
    CelebrationStarted { center: Vec2 },
    /// Append exactly this character to the visible message
    CharRevealed { ch: char },
    /// Celebration overlay torn down
    CelebrationEnded,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; the only randomness source in the sim
    pub rng: Pcg32,
    /// Validated configuration
    pub config: GameConfig,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// The controlled entity
    pub actor: Actor,
    /// Last pointer position; overwritten, never queued
    pub target: Option<Vec2>,
    /// Active collectible set
    pub collectibles: Collectibles,
    /// Score / threshold tracking
    pub progress: Progress,
    /// Celebration overlay state machine
    pub celebration: Celebration,
    /// Tick-driven timers (character reveal, overlay teardown)
    pub scheduler: Scheduler,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a session from a validated configuration and a seed.
    ///
    /// The configured number of collectibles is spawned up front; hosts read
    /// the initial set from [`Collectibles::iter`] rather than from events.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let center = Vec2::new(config.width / 2.0, config.height / 2.0);
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            progress: Progress::new(config.score_threshold),
            actor: Actor::at(center),
            target: None,
            collectibles: Collectibles::default(),
            celebration: Celebration::default(),
            scheduler: Scheduler::default(),
            time_ticks: 0,
            next_id: 1,
            config,
        };

        for _ in 0..state.config.collectible_count {
            let id = state.next_entity_id();
            state.collectibles.spawn(
                id,
                state.config.width,
                state.config.height,
                state.config.spawn_margin,
                &mut state.rng,
            );
        }

        Ok(state)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Center of the play area (captured by the celebration at trigger time)
    pub fn scene_center(&self) -> Vec2 {
        Vec2::new(self.config.width / 2.0, self.config.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_spawns_configured_count() {
        let state = GameState::new(GameConfig::default(), 7).unwrap();
        assert_eq!(state.collectibles.len() as u32, state.config.collectible_count);
        assert!(!state.actor.moving);
        assert_eq!(state.target, None);
    }

    #[test]
    fn test_new_session_rejects_bad_config() {
        let config = GameConfig {
            score_threshold: 0,
            ..Default::default()
        };
        assert!(GameState::new(config, 7).is_err());
    }

    #[test]
    fn test_spawns_respect_margin() {
        let state = GameState::new(GameConfig::default(), 99).unwrap();
        let margin = state.config.spawn_margin;
        for c in state.collectibles.iter() {
            assert!(c.pos.x >= margin && c.pos.x <= state.config.width - margin);
            assert!(c.pos.y >= margin && c.pos.y <= state.config.height - margin);
        }
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let a = GameState::new(GameConfig::default(), 1234).unwrap();
        let b = GameState::new(GameConfig::default(), 1234).unwrap();
        let pos_a: Vec<Vec2> = a.collectibles.iter().map(|c| c.pos).collect();
        let pos_b: Vec<Vec2> = b.collectibles.iter().map(|c| c.pos).collect();
        assert_eq!(pos_a, pos_b);
    }
}
