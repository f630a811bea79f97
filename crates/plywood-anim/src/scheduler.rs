//! Frame-driven action scheduler

use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{Action, Update};

/// Handle to an action registered with a [`Scheduler`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActionId(u64);

impl ActionId {
    /// Raw numeric value
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "action#{}", self.0)
    }
}

/// Owns running actions and advances them once per frame
///
/// The scheduler does not know what its keys mean. [`Scheduler::step`]
/// returns the updates produced by every live action, in registration
/// order, and the owner applies them.
pub struct Scheduler<K> {
    /// Live actions, oldest first
    tasks: Vec<(ActionId, Action<K>)>,
    /// Next handle value
    next_id: u64,
    /// Whether `tick_at` advances time
    started: bool,
    /// Timestamp of the previous tick, if any since start
    last_tick: Option<Instant>,
}

impl<K> Default for Scheduler<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for Scheduler<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("tasks", &self.tasks.len())
            .field("next_id", &self.next_id)
            .field("started", &self.started)
            .finish()
    }
}

impl<K> Scheduler<K> {
    /// Create a stopped scheduler with no actions
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
            started: false,
            last_tick: None,
        }
    }

    /// Start honouring [`Scheduler::tick_at`]
    pub fn start(&mut self) {
        self.started = true;
        self.last_tick = None;
    }

    /// Stop honouring [`Scheduler::tick_at`]; actions stay registered
    pub fn stop(&mut self) {
        self.started = false;
        self.last_tick = None;
    }

    /// Whether the scheduler is started
    #[inline]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Number of live actions
    #[inline]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no action is live
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Whether `id` is still live
    pub fn contains(&self, id: ActionId) -> bool {
        self.tasks.iter().any(|(task_id, _)| *task_id == id)
    }

    /// Cancel an action without producing a final update.
    ///
    /// Returns false when the action already finished or was never registered.
    pub fn remove(&mut self, id: ActionId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|(task_id, _)| *task_id != id);
        let removed = self.tasks.len() != before;
        if removed {
            trace!(%id, "animation cancelled");
        }
        removed
    }

    /// Cancel every live action
    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}

impl<K: Clone> Scheduler<K> {
    /// Register an action and return its handle
    pub fn run(&mut self, action: Action<K>) -> ActionId {
        let id = ActionId(self.next_id);
        self.next_id += 1;
        trace!(%id, remaining = action.remaining(), "animation registered");
        self.tasks.push((id, action));
        id
    }

    /// Advance every live action by `dt` seconds.
    ///
    /// Finished actions are retired after producing their final value.
    pub fn step(&mut self, dt: f64) -> Vec<Update<K>> {
        let mut updates = Vec::new();
        self.tasks.retain_mut(|(id, action)| {
            if action.advance(dt, &mut updates).is_some() {
                trace!(%id, "animation finished");
                false
            } else {
                true
            }
        });
        updates
    }

    /// Advance by the wall-clock time since the previous tick.
    ///
    /// The first tick after [`Scheduler::start`] uses `dt = 0`. Does nothing
    /// while stopped.
    pub fn tick_at(&mut self, now: Instant) -> Vec<Update<K>> {
        if !self.started {
            self.last_tick = None;
            return Vec::new();
        }

        let dt = match self.last_tick {
            Some(last) => now.saturating_duration_since(last).as_secs_f64(),
            None => 0.0,
        };
        self.last_tick = Some(now);
        self.step(dt)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::Easing;

    fn linear(from: f64, to: f64, duration: f64) -> Action<u8> {
        Action::tween(0, from, to, duration, Easing::Linear)
    }

    #[test]
    fn test_run_assigns_distinct_ids() {
        let mut scheduler = Scheduler::new();
        let a = scheduler.run(linear(0.0, 1.0, 1.0));
        let b = scheduler.run(linear(0.0, 1.0, 1.0));

        assert_ne!(a, b);
        assert_eq!(scheduler.len(), 2);
        assert!(scheduler.contains(a));
    }

    #[test]
    fn test_step_retires_finished_actions() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.run(linear(0.0, 1.0, 0.5));

        scheduler.step(0.25);
        assert!(scheduler.contains(id));

        let updates = scheduler.step(0.25);
        assert_eq!(updates.last().map(|u| u.value), Some(1.0));
        assert!(!scheduler.contains(id));
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_remove_unknown_is_false() {
        let mut scheduler: Scheduler<u8> = Scheduler::new();
        let id = scheduler.run(linear(0.0, 1.0, 0.0));
        scheduler.step(0.0);

        assert!(!scheduler.remove(id));
    }

    #[test]
    fn test_tick_ignored_while_stopped() {
        let mut scheduler = Scheduler::new();
        scheduler.run(linear(0.0, 1.0, 1.0));

        assert!(scheduler.tick_at(Instant::now()).is_empty());
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn test_first_tick_after_start_has_zero_dt() {
        let mut scheduler = Scheduler::new();
        scheduler.start();
        scheduler.run(linear(0.0, 10.0, 1.0));

        let t0 = Instant::now();
        let updates = scheduler.tick_at(t0);
        assert_eq!(updates[0].value, 0.0);

        let updates = scheduler.tick_at(t0 + Duration::from_millis(500));
        assert!((updates[0].value - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_restart_resets_clock() {
        let mut scheduler = Scheduler::new();
        scheduler.start();
        let t0 = Instant::now();
        scheduler.tick_at(t0);

        scheduler.stop();
        scheduler.start();
        scheduler.run(linear(0.0, 10.0, 1.0));

        // A long pause while stopped does not leak into the next tick
        let updates = scheduler.tick_at(t0 + Duration::from_secs(30));
        assert_eq!(updates[0].value, 0.0);
    }
}
