//! Pounce - a pointer-driven collect-and-celebrate game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collectibles, progress, celebration)
//! - `config`: Validated game configuration and animation key bindings
//!
//! Rendering and collision detection are external collaborators: the host
//! feeds pointer positions and overlap reports into [`sim::tick`] and drains
//! the returned [`sim::GameEvent`]s into its own drawing/animation services.

pub mod config;
pub mod sim;

pub use config::{AnimationKeys, ConfigError, GameConfig};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth movement)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default play area dimensions
    pub const PLAY_WIDTH: f32 = 800.0;
    pub const PLAY_HEIGHT: f32 = 600.0;

    /// Actor defaults
    pub const ACTOR_SPEED: f32 = 160.0;
    /// Distance to target at which the actor stops seeking
    pub const STOP_DISTANCE: f32 = 5.0;

    /// Collectible defaults
    pub const COLLECTIBLE_COUNT: u32 = 3;
    /// Spawn positions stay this far from every play-area edge
    pub const SPAWN_MARGIN: f32 = 50.0;

    /// Progress defaults
    pub const SCORE_THRESHOLD: u32 = 10;
    /// Progress bar width at full ratio, in pixels
    pub const BAR_WIDTH: f32 = 300.0;

    /// Celebration defaults
    /// Seconds between revealed message characters
    pub const REVEAL_INTERVAL: f32 = 0.05;
    /// Seconds from trigger until the overlay tears down
    pub const CELEBRATION_SECS: f32 = 10.0;
}
