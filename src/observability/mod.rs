//! Logging setup for hosts embedding the board.
//!
//! The core itself only emits `tracing` events and spans; wiring them to an
//! output is a host decision. This module offers the one-call default setup.
//!
//! # Modules
//!
//! - [`init`]: tracing subscriber initialization

pub mod init;

pub use init::init_tracing;
