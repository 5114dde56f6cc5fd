//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod celebrate;
pub mod collectibles;
pub mod movement;
pub mod progress;
pub mod schedule;
pub mod state;
pub mod tick;

pub use celebrate::{Celebration, CelebrationPhase};
pub use collectibles::Collectibles;
pub use movement::{Steering, steer};
pub use progress::{Collected, Progress};
pub use schedule::{Scheduler, TaskId, TaskKind};
pub use state::{Actor, Collectible, CollectibleId, Facing, GameEvent, GameState};
pub use tick::{TickInput, tick};
