//! Target-seeking movement
//!
//! Converts the actor and target positions into a velocity and a discrete
//! facing once per tick. Pure function of its inputs; the caller owns the
//! moving flag and integrates the returned velocity.

use glam::Vec2;

use super::state::Facing;

/// One tick's steering decision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steering {
    /// Velocity to apply this tick (zero when stopped)
    pub velocity: Vec2,
    /// Facing for the walk animation; `None` when no direction change applies
    pub facing: Option<Facing>,
    /// False once the actor is within the stop radius (caller clears the
    /// moving flag and stops the walk animation)
    pub still_moving: bool,
}

impl Steering {
    fn stopped() -> Self {
        Self {
            velocity: Vec2::ZERO,
            facing: None,
            still_moving: false,
        }
    }
}

/// Compute one tick of target seeking.
///
/// While farther than `stop_distance` from the target, the velocity is the
/// unit displacement scaled by `speed`, and the facing is picked by the
/// dominant displacement axis (ties fall to the vertical branch). Inside the
/// stop radius everything halts.
///
/// A zero displacement while moving is unreachable: the stop-distance check
/// catches it first (`stop_distance > 0` is enforced by config validation),
/// so no division-by-zero guard is needed.
pub fn steer(
    actor_pos: Vec2,
    target_pos: Vec2,
    moving: bool,
    speed: f32,
    stop_distance: f32,
) -> Steering {
    if !moving {
        return Steering::stopped();
    }

    let delta = target_pos - actor_pos;
    let distance = delta.length();

    if distance <= stop_distance {
        return Steering::stopped();
    }

    let facing = if delta.x.abs() > delta.y.abs() {
        if delta.x > 0.0 { Facing::Right } else { Facing::Left }
    } else if delta.y > 0.0 {
        Facing::Down
    } else {
        Facing::Up
    };

    Steering {
        velocity: delta / distance * speed,
        facing: Some(facing),
        still_moving: true,
    }
}
