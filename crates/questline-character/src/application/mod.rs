//! Application services that drive the character aggregate.

pub mod command_handlers;
pub mod query_handlers;
