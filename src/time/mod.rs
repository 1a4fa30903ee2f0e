//! Deterministic time handling: clock, cancellable timers, debounce.
//!
//! The board never reads the wall clock on its own. Hosts advance a
//! [`timers::TimerService`] explicitly (via the `ClockAdvanced` event), and
//! every delayed behavior (search debounce, notification auto-hide, the
//! overlay switch delay, the live update ticker) is an armed deadline in
//! that one service. Arming a kind that is already armed replaces its
//! deadline, which is exactly the cancel-and-re-arm semantics debouncing
//! and notification replacement need.
//!
//! Because time only moves when the host says so, tests drive a virtual
//! clock by feeding plain numbers; nothing sleeps.
//!
//! # Modules
//!
//! - [`clock`]: wall-clock capability for hosts
//! - [`timers`]: kind-keyed cancellable timer service
//! - [`debounce`]: trailing-edge search debouncer

pub mod clock;
pub mod debounce;
pub mod timers;

pub use clock::{Clock, SystemClock};
pub use debounce::SearchDebouncer;
pub use timers::{TimerKind, TimerService};
