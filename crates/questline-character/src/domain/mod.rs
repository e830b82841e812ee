//! Domain model for character progression.

pub mod abilities;
pub mod aggregates;
pub mod commands;
pub mod events;
pub mod name;
pub mod pool;
