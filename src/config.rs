//! Game configuration and animation key bindings
//!
//! Everything tunable lives here; the sim itself holds no magic numbers.
//! Configurations are validated once at session start so the tick loop never
//! has to guard against division by zero or an unsatisfiable spawn range.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Facing;

/// Default celebration message, revealed one character at a time.
pub const DEFAULT_MESSAGE: &str =
    "Every orb you gathered holds a moment of calm. Thank you for every quiet step we shared.";

/// A single animation clip: a spritesheet key plus an inclusive frame range.
///
/// This is pure configuration handed to the rendering collaborator; the sim
/// only ever forwards it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationClip {
    /// Spritesheet identifier known to the rendering collaborator
    pub sheet: String,
    /// First frame of the clip (inclusive)
    pub frame_start: u32,
    /// Last frame of the clip (inclusive)
    pub frame_end: u32,
    /// Playback rate in frames per second
    pub frame_rate: u32,
}

impl AnimationClip {
    fn new(sheet: &str, frame_start: u32, frame_end: u32, frame_rate: u32) -> Self {
        Self {
            sheet: sheet.to_string(),
            frame_start,
            frame_end,
            frame_rate,
        }
    }
}

/// The fixed animation contract: four directional walk clips and one
/// celebration clip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationKeys {
    pub left: AnimationClip,
    pub right: AnimationClip,
    pub up: AnimationClip,
    pub down: AnimationClip,
    pub celebrate: AnimationClip,
}

impl AnimationKeys {
    /// Look up the walk clip for a facing direction
    pub fn for_facing(&self, facing: Facing) -> &AnimationClip {
        match facing {
            Facing::Left => &self.left,
            Facing::Right => &self.right,
            Facing::Up => &self.up,
            Facing::Down => &self.down,
        }
    }
}

impl Default for AnimationKeys {
    fn default() -> Self {
        Self {
            right: AnimationClip::new("walk_side", 0, 9, 10),
            left: AnimationClip::new("walk_side", 10, 19, 10),
            down: AnimationClip::new("walk_front", 0, 2, 10),
            up: AnimationClip::new("walk_back", 0, 3, 10),
            celebrate: AnimationClip::new("celebrate", 0, 7, 10),
        }
    }
}

/// Why a configuration was rejected at session start
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("score threshold must be positive (got {0})")]
    ScoreThreshold(u32),
    #[error("collectible count must be positive (got {0})")]
    CollectibleCount(u32),
    #[error("actor speed must be positive (got {0})")]
    ActorSpeed(f32),
    #[error("stop distance must be positive (got {0})")]
    StopDistance(f32),
    #[error("reveal interval must be positive (got {0}s)")]
    RevealInterval(f32),
    #[error("celebration duration must be positive (got {0}s)")]
    CelebrationDuration(f32),
    #[error("celebration message must not be empty")]
    EmptyMessage,
    #[error(
        "spawn margin {margin} leaves no room in a {width}x{height} play area \
         (both dimensions must exceed twice the margin)"
    )]
    SpawnArea {
        width: f32,
        height: f32,
        margin: f32,
    },
}

/// Game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Play area width in world units
    pub width: f32,
    /// Play area height in world units
    pub height: f32,
    /// Collectibles never spawn closer than this to any edge
    pub spawn_margin: f32,
    /// Number of collectibles kept active at all times
    pub collectible_count: u32,
    /// Actor speed in world units per second
    pub speed: f32,
    /// Target-seeking stops inside this radius
    pub stop_distance: f32,
    /// Collections needed to fill the bar and trigger a celebration
    pub score_threshold: u32,
    /// Progress bar width at full ratio
    pub bar_width: f32,
    /// Celebration message
    pub message: String,
    /// Seconds between revealed message characters
    pub reveal_interval: f32,
    /// Seconds from celebration trigger to teardown
    pub celebration_duration: f32,
    /// Animation bindings handed to the rendering collaborator
    pub animations: AnimationKeys,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: PLAY_WIDTH,
            height: PLAY_HEIGHT,
            spawn_margin: SPAWN_MARGIN,
            collectible_count: COLLECTIBLE_COUNT,
            speed: ACTOR_SPEED,
            stop_distance: STOP_DISTANCE,
            score_threshold: SCORE_THRESHOLD,
            bar_width: BAR_WIDTH,
            message: DEFAULT_MESSAGE.to_string(),
            reveal_interval: REVEAL_INTERVAL,
            celebration_duration: CELEBRATION_SECS,
            animations: AnimationKeys::default(),
        }
    }
}

impl GameConfig {
    /// Reject configurations the sim cannot run safely.
    ///
    /// The spawn range is non-degenerate only when both play-area dimensions
    /// strictly exceed twice the spawn margin; anything tighter is refused
    /// here rather than collapsing spawns onto a single point at runtime.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.score_threshold == 0 {
            return Err(ConfigError::ScoreThreshold(self.score_threshold));
        }
        if self.collectible_count == 0 {
            return Err(ConfigError::CollectibleCount(self.collectible_count));
        }
        if self.speed <= 0.0 {
            return Err(ConfigError::ActorSpeed(self.speed));
        }
        if self.stop_distance <= 0.0 {
            return Err(ConfigError::StopDistance(self.stop_distance));
        }
        if self.reveal_interval <= 0.0 {
            return Err(ConfigError::RevealInterval(self.reveal_interval));
        }
        if self.celebration_duration <= 0.0 {
            return Err(ConfigError::CelebrationDuration(self.celebration_duration));
        }
        if self.message.is_empty() {
            return Err(ConfigError::EmptyMessage);
        }
        if self.spawn_margin * 2.0 >= self.width || self.spawn_margin * 2.0 >= self.height {
            return Err(ConfigError::SpawnArea {
                width: self.width,
                height: self.height,
                margin: self.spawn_margin,
            });
        }
        Ok(())
    }

    /// Parse a configuration from JSON (for hosts that externalize tuning)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
