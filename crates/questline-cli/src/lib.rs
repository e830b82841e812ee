//! Questline demonstration runner.
//!
//! Replays scripted scenarios against characters and prints their status
//! after every step.

pub mod config;
pub mod error;
pub mod runner;
pub mod scenario;
pub mod telemetry;
