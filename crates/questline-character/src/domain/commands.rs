//! Commands for character progression.

use serde::{Deserialize, Serialize};

use super::aggregates::Role;

/// Command to create a new character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCharacter {
    /// The character identifier.
    pub character_id: u64,
    /// The character's name.
    pub name: String,
    /// The character's role.
    #[serde(default = "default_role")]
    pub role: Role,
}

const fn default_role() -> Role {
    Role::Generic
}

/// A gameplay command against an existing character.
///
/// Deserializes from an `action`-tagged map, e.g.
/// `{ action: cast_spell, spell: "Attack Spell" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CharacterCommand {
    /// Change the character's name.
    Rename {
        /// The new name.
        name: String,
    },
    /// Deal damage.
    ApplyDamage {
        /// Damage to deal.
        amount: u32,
    },
    /// Restore health.
    Heal {
        /// Health to restore.
        amount: u32,
    },
    /// Award experience.
    GainExperience {
        /// Experience to award.
        amount: u32,
    },
    /// Grant levels directly.
    LevelUp {
        /// Levels to grant.
        levels: u32,
    },
    /// Reset to starting stats.
    Restart,
    /// Cast a spell by name (magicians).
    CastSpell {
        /// Spell name, e.g. `"Shield Spell"`.
        spell: String,
    },
    /// Perform an attack by name (warriors).
    PerformAttack {
        /// Attack name, e.g. `"Light Hit"`.
        attack: String,
    },
}

impl CharacterCommand {
    /// The type name for this command (for logging).
    #[must_use]
    pub const fn command_type(&self) -> &'static str {
        match self {
            Self::Rename { .. } => "rename",
            Self::ApplyDamage { .. } => "apply_damage",
            Self::Heal { .. } => "heal",
            Self::GainExperience { .. } => "gain_experience",
            Self::LevelUp { .. } => "level_up",
            Self::Restart => "restart",
            Self::CastSpell { .. } => "cast_spell",
            Self::PerformAttack { .. } => "perform_attack",
        }
    }
}
