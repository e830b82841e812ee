//! Query handlers for character progression.
//!
//! Queries are pure reads over the aggregate and return read-only view
//! DTOs.

use serde::Serialize;

use crate::domain::aggregates::{Character, EXPERIENCE_TO_PROMOTE, Role};
use crate::domain::pool::ResourcePool;

/// Read-only snapshot of a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterView {
    /// The character identifier.
    pub character_id: u64,
    /// Current name.
    pub name: String,
    /// Role.
    pub role: Role,
    /// Current level.
    pub level: u32,
    /// Experience towards the next level.
    pub experience: u32,
    /// Experience needed per level.
    pub experience_to_promote: u32,
    /// Health pool.
    pub health: ResourcePool,
    /// Mana or stamina, for roles that have one.
    pub secondary_resource: Option<ResourcePool>,
    /// Human-readable status block.
    pub status: String,
}

/// Builds the read model for `character`.
#[must_use]
pub fn get_character_status(character: &Character) -> CharacterView {
    CharacterView {
        character_id: character.id(),
        name: character.name().to_owned(),
        role: character.role(),
        level: character.level(),
        experience: character.experience(),
        experience_to_promote: EXPERIENCE_TO_PROMOTE,
        health: character.health(),
        secondary_resource: character.secondary_resource(),
        status: character.describe_status(),
    }
}
