//! Simulated out-of-band activity on the record store.
//!
//! Real deployments see view counters move while a user sits on a stale
//! page. The simulator reproduces that: on every tick of the
//! [`crate::time::TimerKind::LiveUpdate`] timer it rolls a probability, and
//! on a hit picks one record uniformly at random and bumps its view counter
//! by a small random amount. The event handler applies the bump to the store
//! and re-renders only when the active filter actually depends on view
//! counts or recency; otherwise the mutation lands silently and the user
//! keeps their stale projection until the next recompute.
//!
//! Randomness is injected through [`RandomSource`] so tests can script
//! every roll instead of fighting a real RNG.

use rand::Rng;
use std::fmt;

/// Source of the random draws the simulator needs.
///
/// Implementations must be `Send` so state containers holding a simulator
/// can move across threads with their host.
pub trait RandomSource: Send {
    /// Uniform draw from `[0, 1)`, compared against the tick probability.
    fn chance(&mut self) -> f64;

    /// Uniform index draw from `[0, len)`. Never called with `len == 0`.
    fn pick(&mut self, len: usize) -> usize;

    /// Uniform bump amount from `[1, max]`. Never called with `max == 0`.
    fn bump(&mut self, max: u32) -> u32;
}

/// Thread-local RNG implementation used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn chance(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }

    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }

    fn bump(&mut self, max: u32) -> u32 {
        rand::thread_rng().gen_range(1..=max)
    }
}

/// One simulated external write: bump the record at `index` by `delta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewBump {
    /// Store index of the record to bump.
    pub index: usize,

    /// View-count increment, in `[1, bump_max]`.
    pub delta: u32,
}

/// Decides, per tick, whether and how to mutate the store.
///
/// The simulator owns no store access and no timer; it is a pure decision
/// component the event handler consults when the live update timer fires.
pub struct LiveUpdateSimulator {
    /// Per-tick probability of producing a bump, in `[0, 1]`.
    chance: f64,

    /// Upper bound of the view-count increment.
    bump_max: u32,

    /// Injected randomness.
    rng: Box<dyn RandomSource>,
}

impl LiveUpdateSimulator {
    /// Creates a simulator with the given tick probability and bump bound.
    #[must_use]
    pub fn new(chance: f64, bump_max: u32, rng: Box<dyn RandomSource>) -> Self {
        Self {
            chance,
            bump_max,
            rng,
        }
    }

    /// Rolls one tick against a store of `store_len` records.
    ///
    /// Returns `Some` on a probability hit with the chosen record index and
    /// bump amount, `None` on a miss or when the store is empty. The caller
    /// re-arms the tick timer regardless of the outcome.
    pub fn tick(&mut self, store_len: usize) -> Option<ViewBump> {
        if store_len == 0 || self.bump_max == 0 {
            return None;
        }

        if self.rng.chance() >= self.chance {
            tracing::trace!("live update tick missed");
            return None;
        }

        let bump = ViewBump {
            index: self.rng.pick(store_len),
            delta: self.rng.bump(self.bump_max),
        };

        tracing::debug!(index = bump.index, delta = bump.delta, "live update hit");

        Some(bump)
    }
}

impl fmt::Debug for LiveUpdateSimulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveUpdateSimulator")
            .field("chance", &self.chance)
            .field("bump_max", &self.bump_max)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    //! Deterministic random source for tests.

    use super::RandomSource;
    use std::collections::VecDeque;

    /// Plays back pre-scripted draws; panics when the script runs dry so a
    /// test that consumes more randomness than it declared fails loudly.
    pub struct ScriptedRandom {
        pub chances: VecDeque<f64>,
        pub picks: VecDeque<usize>,
        pub bumps: VecDeque<u32>,
    }

    impl ScriptedRandom {
        pub fn new(
            chances: impl IntoIterator<Item = f64>,
            picks: impl IntoIterator<Item = usize>,
            bumps: impl IntoIterator<Item = u32>,
        ) -> Self {
            Self {
                chances: chances.into_iter().collect(),
                picks: picks.into_iter().collect(),
                bumps: bumps.into_iter().collect(),
            }
        }
    }

    impl RandomSource for ScriptedRandom {
        fn chance(&mut self) -> f64 {
            self.chances.pop_front().expect("scripted chances exhausted")
        }

        fn pick(&mut self, _len: usize) -> usize {
            self.picks.pop_front().expect("scripted picks exhausted")
        }

        fn bump(&mut self, _max: u32) -> u32 {
            self.bumps.pop_front().expect("scripted bumps exhausted")
        }
    }
}

#[cfg(test)]
#[path = "live_tests.rs"]
mod tests;
