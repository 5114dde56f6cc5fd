//! Tick-driven task scheduling
//!
//! Replaces wall-clock timers with explicit task records advanced by the
//! simulation tick counter, so delayed and repeating work is deterministic
//! and tests move time by ticking.

use serde::{Deserialize, Serialize};

/// Handle for cancelling a scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskId(u32);

/// What a fired task means. Data, not closures: the tick loop dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    /// Reveal the next celebration message character
    RevealChar,
    /// Tear the celebration overlay down
    EndCelebration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Task {
    id: TaskId,
    fire_at: u64,
    /// Repeat interval in ticks; `None` for one-shots
    every: Option<u64>,
    cancelled: bool,
    kind: TaskKind,
}

/// Pending task list, fired in (due time, creation) order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scheduler {
    tasks: Vec<Task>,
    next_id: u32,
}

impl Scheduler {
    /// Schedule a one-shot task
    pub fn once(&mut self, fire_at: u64, kind: TaskKind) -> TaskId {
        self.push(fire_at, None, kind)
    }

    /// Schedule a repeating task; first fires at `fire_at`, then every
    /// `interval` ticks. `interval` must be at least 1.
    pub fn every(&mut self, fire_at: u64, interval: u64, kind: TaskKind) -> TaskId {
        debug_assert!(interval >= 1);
        self.push(fire_at, Some(interval.max(1)), kind)
    }

    /// Cancel a task. Cancelling an already-fired or unknown task is a no-op.
    pub fn cancel(&mut self, id: TaskId) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.cancelled = true;
        }
    }

    /// Number of live (not cancelled) tasks
    pub fn pending(&self) -> usize {
        self.tasks.iter().filter(|t| !t.cancelled).count()
    }

    /// Fire every task due at or before `now`, in due-time order (creation
    /// order breaks ties). Repeating tasks are rescheduled; one-shots and
    /// cancelled tasks are dropped.
    pub fn advance(&mut self, now: u64) -> Vec<TaskKind> {
        let mut fired = Vec::new();

        self.tasks.retain(|t| !t.cancelled);

        // Stable sort keeps creation order among tasks due at the same tick
        self.tasks.sort_by_key(|t| t.fire_at);

        for task in &mut self.tasks {
            while task.fire_at <= now {
                fired.push(task.kind);
                match task.every {
                    Some(interval) => task.fire_at += interval,
                    None => {
                        task.cancelled = true;
                        break;
                    }
                }
            }
        }

        self.tasks.retain(|t| !t.cancelled);
        fired
    }

    fn push(&mut self, fire_at: u64, every: Option<u64>, kind: TaskKind) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            fire_at,
            every,
            cancelled: false,
            kind,
        });
        id
    }
}
