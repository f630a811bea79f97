//! Interpolation actions: single tweens, parallel groups and sequences
//!
//! Actions never call back into their owner. Every step pushes [`Update`]
//! messages naming a target key and the value it should take; the owner
//! applies them after the scheduler returns.

use std::collections::VecDeque;

use crate::Easing;

/// New value for one animated parameter
#[derive(Clone, Debug, PartialEq)]
pub struct Update<K> {
    /// Which parameter this value belongs to
    pub target: K,
    /// Interpolated value
    pub value: f64,
}

/// Single interpolation of a real-valued parameter
#[derive(Clone, Debug)]
pub struct Tween<K> {
    target: K,
    from: f64,
    to: f64,
    duration: f64,
    easing: Easing,
    elapsed: f64,
}

impl<K: Clone> Tween<K> {
    /// Create a tween from `from` to `to` lasting `duration` seconds.
    ///
    /// Negative or NaN durations are treated as zero, which completes on the
    /// first step.
    pub fn new(target: K, from: f64, to: f64, duration: f64) -> Self {
        let duration = if duration.is_nan() { 0.0 } else { duration.max(0.0) };
        Self {
            target,
            from,
            to,
            duration,
            easing: Easing::Linear,
            elapsed: 0.0,
        }
    }

    /// Set the easing curve
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Parameter this tween drives
    #[inline]
    pub fn target(&self) -> &K {
        &self.target
    }

    /// Start value
    #[inline]
    pub fn from(&self) -> f64 {
        self.from
    }

    /// End value
    #[inline]
    pub fn to(&self) -> f64 {
        self.to
    }

    /// Duration in seconds
    #[inline]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Seconds advanced so far
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Whether elapsed time has reached the duration
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Current interpolated value
    pub fn value(&self) -> f64 {
        if self.is_complete() {
            return self.to;
        }
        let t = self.elapsed / self.duration;
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    fn advance(&mut self, dt: f64, out: &mut Vec<Update<K>>) -> Option<f64> {
        self.elapsed += dt.max(0.0);
        out.push(Update {
            target: self.target.clone(),
            value: self.value(),
        });

        if self.is_complete() {
            Some(self.elapsed - self.duration)
        } else {
            None
        }
    }
}

/// A unit of work for the scheduler
#[derive(Clone, Debug)]
pub enum Action<K> {
    /// One interpolation
    Tween(Tween<K>),
    /// Members advance together; complete when all members complete
    Group(Vec<Action<K>>),
    /// Members advance one after another
    Sequence(VecDeque<Action<K>>),
}

impl<K: Clone> Action<K> {
    /// Single interpolation with an easing curve
    pub fn tween(target: K, from: f64, to: f64, duration: f64, easing: Easing) -> Self {
        Action::Tween(Tween::new(target, from, to, duration).with_easing(easing))
    }

    /// Run `actions` concurrently
    pub fn group(actions: impl IntoIterator<Item = Action<K>>) -> Self {
        Action::Group(actions.into_iter().collect())
    }

    /// Run `actions` back to back
    pub fn sequence(actions: impl IntoIterator<Item = Action<K>>) -> Self {
        Action::Sequence(actions.into_iter().collect())
    }

    /// Whether nothing is left to run
    pub fn is_complete(&self) -> bool {
        match self {
            Action::Tween(tween) => tween.is_complete(),
            Action::Group(members) => members.iter().all(Action::is_complete),
            Action::Sequence(members) => members.iter().all(Action::is_complete),
        }
    }

    /// Total remaining run time in seconds
    pub fn remaining(&self) -> f64 {
        match self {
            Action::Tween(tween) => (tween.duration - tween.elapsed).max(0.0),
            Action::Group(members) => members.iter().map(Action::remaining).fold(0.0, f64::max),
            Action::Sequence(members) => members.iter().map(Action::remaining).sum(),
        }
    }

    /// Advance by `dt` seconds, pushing updates into `out`.
    ///
    /// Returns the unused part of `dt` once the action completes, `None` while
    /// it is still running. A sequence hands leftover time to its next member
    /// within the same step.
    pub(crate) fn advance(&mut self, dt: f64, out: &mut Vec<Update<K>>) -> Option<f64> {
        match self {
            Action::Tween(tween) => tween.advance(dt, out),
            Action::Group(members) => {
                let mut leftover = dt;
                members.retain_mut(|member| match member.advance(dt, out) {
                    Some(left) => {
                        leftover = leftover.min(left);
                        false
                    }
                    None => true,
                });
                if members.is_empty() {
                    Some(leftover)
                } else {
                    None
                }
            }
            Action::Sequence(members) => {
                let mut dt = dt;
                while let Some(front) = members.front_mut() {
                    match front.advance(dt, out) {
                        Some(left) => {
                            members.pop_front();
                            dt = left;
                        }
                        None => return None,
                    }
                }
                Some(dt)
            }
        }
    }
}
