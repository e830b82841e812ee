//! Questline Core — shared domain abstractions.
//!
//! This crate defines the fundamental traits and types that the character
//! model depends on. It contains no infrastructure code.

pub mod aggregate;
pub mod clock;
pub mod error;
pub mod event;
