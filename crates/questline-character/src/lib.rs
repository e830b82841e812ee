//! Questline — character progression.
//!
//! Responsible for characters and their roles, health, experience,
//! leveling, and the role-specific resources spent on spells and attacks.

pub mod application;
pub mod domain;
