//! Celebration overlay state machine
//!
//! `Idle -> Active -> Idle`. Triggered by a threshold crossing; while active,
//! a repeating task reveals the message one character at a time and a
//! one-shot task tears everything down after a fixed duration, whether or not
//! the reveal finished. There is no user-facing early dismissal.

use glam::Vec2;
use log::debug;
use serde::{Deserialize, Serialize};

use super::schedule::{Scheduler, TaskId, TaskKind};
use super::state::GameEvent;

/// Current overlay phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CelebrationPhase {
    #[default]
    Idle,
    Active,
}

/// Celebration overlay state. At most one celebration is active at a time;
/// a crossing that arrives while active is ignored (the score reset has
/// already happened in the tracker).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Celebration {
    phase: CelebrationPhase,
    /// Message captured at trigger time
    message: String,
    /// Characters revealed so far (chars, not bytes)
    revealed: usize,
    /// Scene center captured at trigger time
    center: Vec2,
    /// Tick at which the overlay opened
    started_at: u64,
    reveal_task: Option<TaskId>,
    end_task: Option<TaskId>,
}

impl Celebration {
    pub fn phase(&self) -> CelebrationPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == CelebrationPhase::Active
    }

    /// Overlay center captured when the celebration started
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Tick at which the running celebration started
    pub fn started_at(&self) -> u64 {
        self.started_at
    }

    /// The currently visible prefix of the message
    pub fn visible_text(&self) -> &str {
        let end = self
            .message
            .char_indices()
            .nth(self.revealed)
            .map(|(i, _)| i)
            .unwrap_or(self.message.len());
        &self.message[..end]
    }

    /// Open the overlay and schedule the reveal and teardown tasks.
    ///
    /// `reveal_every` and `duration` are tick counts relative to `now`.
    /// Ignored while already active.
    pub fn trigger(
        &mut self,
        scheduler: &mut Scheduler,
        now: u64,
        center: Vec2,
        message: &str,
        reveal_every: u64,
        duration: u64,
        events: &mut Vec<GameEvent>,
    ) {
        if self.is_active() {
            debug!("celebration already active, ignoring trigger at tick {now}");
            return;
        }

        self.phase = CelebrationPhase::Active;
        self.message = message.to_string();
        self.revealed = 0;
        self.center = center;
        self.started_at = now;
        self.reveal_task = Some(scheduler.every(now + reveal_every, reveal_every, TaskKind::RevealChar));
        self.end_task = Some(scheduler.once(now + duration, TaskKind::EndCelebration));

        events.push(GameEvent::CelebrationStarted { center });
    }

    /// Dispatch a fired scheduler task. Stray tasks arriving after teardown
    /// are dropped.
    pub fn on_task(&mut self, kind: TaskKind, scheduler: &mut Scheduler, events: &mut Vec<GameEvent>) {
        if !self.is_active() {
            return;
        }
        match kind {
            TaskKind::RevealChar => self.reveal_next(scheduler, events),
            TaskKind::EndCelebration => self.teardown(scheduler, events),
        }
    }

    /// Reveal exactly one more character, left to right. Once the message is
    /// complete the repeating task is cancelled; the overlay stays up until
    /// the teardown task fires.
    fn reveal_next(&mut self, scheduler: &mut Scheduler, events: &mut Vec<GameEvent>) {
        let Some(ch) = self.message.chars().nth(self.revealed) else {
            return;
        };
        self.revealed += 1;
        events.push(GameEvent::CharRevealed { ch });

        if self.revealed == self.message.chars().count() {
            if let Some(task) = self.reveal_task.take() {
                scheduler.cancel(task);
            }
        }
    }

    fn teardown(&mut self, scheduler: &mut Scheduler, events: &mut Vec<GameEvent>) {
        if let Some(task) = self.reveal_task.take() {
            scheduler.cancel(task);
        }
        self.end_task = None;
        self.phase = CelebrationPhase::Idle;
        self.message.clear();
        self.revealed = 0;
        events.push(GameEvent::CelebrationEnded);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_until(
        celebration: &mut Celebration,
        scheduler: &mut Scheduler,
        from: u64,
        to: u64,
    ) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for now in from..=to {
            for kind in scheduler.advance(now) {
                celebration.on_task(kind, scheduler, &mut events);
            }
        }
        events
    }

    #[test]
    fn test_reveal_completeness() {
        let mut celebration = Celebration::default();
        let mut scheduler = Scheduler::default();
        let mut events = Vec::new();

        celebration.trigger(
            &mut scheduler,
            0,
            Vec2::new(400.0, 300.0),
            "hi there",
            6,
            1200,
            &mut events,
        );
        assert!(matches!(events[0], GameEvent::CelebrationStarted { .. }));

        // 8 chars * 6 ticks each = fully revealed by tick 48
        let events = run_until(&mut celebration, &mut scheduler, 1, 48);
        let revealed: String = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::CharRevealed { ch } => Some(*ch),
                _ => None,
            })
            .collect();
        assert_eq!(revealed, "hi there");
        assert_eq!(celebration.visible_text(), "hi there");
        assert!(celebration.is_active());

        // Reveal task is done; only the teardown one-shot remains
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_teardown_cuts_reveal_short() {
        let mut celebration = Celebration::default();
        let mut scheduler = Scheduler::default();
        let mut events = Vec::new();

        // 26 chars at 10 ticks each would need 260 ticks; teardown at 50
        celebration.trigger(
            &mut scheduler,
            0,
            Vec2::ZERO,
            "abcdefghijklmnopqrstuvwxyz",
            10,
            50,
            &mut events,
        );

        let events = run_until(&mut celebration, &mut scheduler, 1, 50);
        let revealed = events
            .iter()
            .filter(|e| matches!(e, GameEvent::CharRevealed { .. }))
            .count();
        assert_eq!(revealed, 5);
        assert!(events.contains(&GameEvent::CelebrationEnded));
        assert!(!celebration.is_active());

        // No reveal ticks are observable after teardown
        let after = run_until(&mut celebration, &mut scheduler, 51, 200);
        assert!(after.is_empty());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_retrigger_while_active_is_ignored() {
        let mut celebration = Celebration::default();
        let mut scheduler = Scheduler::default();
        let mut events = Vec::new();

        celebration.trigger(&mut scheduler, 0, Vec2::ZERO, "msg", 6, 100, &mut events);
        let started = celebration.started_at();

        celebration.trigger(&mut scheduler, 10, Vec2::ZERO, "msg", 6, 100, &mut events);
        assert_eq!(celebration.started_at(), started);
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, GameEvent::CelebrationStarted { .. }))
                .count(),
            1
        );
        // Still exactly one reveal + one teardown pending
        assert_eq!(scheduler.pending(), 2);
    }

    #[test]
    fn test_visible_text_is_char_aligned() {
        let mut celebration = Celebration::default();
        let mut scheduler = Scheduler::default();
        let mut events = Vec::new();

        celebration.trigger(&mut scheduler, 0, Vec2::ZERO, "añcé", 1, 100, &mut events);
        let _ = run_until(&mut celebration, &mut scheduler, 1, 2);
        assert_eq!(celebration.visible_text(), "añ");
    }
}
