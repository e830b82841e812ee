//! Domain events for character progression.

use questline_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};

use super::abilities::{Attack, Spell};
use super::aggregates::Role;

/// Event type for `CharacterCreated`.
pub const CHARACTER_CREATED_EVENT_TYPE: &str = "character.created";
/// Event type for `CharacterRenamed`.
pub const CHARACTER_RENAMED_EVENT_TYPE: &str = "character.renamed";
/// Event type for `DamageTaken`.
pub const DAMAGE_TAKEN_EVENT_TYPE: &str = "character.damage_taken";
/// Event type for `CharacterDied`.
pub const CHARACTER_DIED_EVENT_TYPE: &str = "character.died";
/// Event type for `CharacterRestarted`.
pub const CHARACTER_RESTARTED_EVENT_TYPE: &str = "character.restarted";
/// Event type for `Healed`.
pub const HEALED_EVENT_TYPE: &str = "character.healed";
/// Event type for `ExperienceGained`.
pub const EXPERIENCE_GAINED_EVENT_TYPE: &str = "character.experience_gained";
/// Event type for `LeveledUp`.
pub const LEVELED_UP_EVENT_TYPE: &str = "character.leveled_up";
/// Event type for `SpellCast`.
pub const SPELL_CAST_EVENT_TYPE: &str = "character.spell_cast";
/// Event type for `AttackPerformed`.
pub const ATTACK_PERFORMED_EVENT_TYPE: &str = "character.attack_performed";

/// Emitted when a character is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterCreated {
    /// The character identifier.
    pub character_id: u64,
    /// The character's name.
    pub name: String,
    /// The character's role.
    pub role: Role,
}

/// Emitted when a character changes name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRenamed {
    /// The character identifier.
    pub character_id: u64,
    /// The name before the change.
    pub previous_name: String,
    /// The name after the change.
    pub new_name: String,
}

/// Emitted when a character survives a blow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageTaken {
    /// The character identifier.
    pub character_id: u64,
    /// Damage dealt.
    pub amount: u32,
    /// Health left afterwards.
    pub remaining_health: u32,
}

/// Emitted when a blow meets or exceeds the character's current health.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDied {
    /// The character identifier.
    pub character_id: u64,
    /// The damage that killed the character.
    pub lethal_damage: u32,
    /// Health just before the blow.
    pub health_before: u32,
}

/// Emitted when a character's stats are reset to their starting values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRestarted {
    /// The character identifier.
    pub character_id: u64,
}

/// Emitted when a character is healed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Healed {
    /// The character identifier.
    pub character_id: u64,
    /// Healing asked for.
    pub requested: u32,
    /// Healing actually applied after clamping at max health.
    pub restored: u32,
    /// Health afterwards.
    pub current_health: u32,
}

/// Emitted when a character gains experience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceGained {
    /// The character identifier.
    pub character_id: u64,
    /// The amount of experience gained.
    pub amount: u32,
    /// Experience towards the next level afterwards.
    pub experience: u32,
}

/// Emitted when a character gains one or more levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeveledUp {
    /// The character identifier.
    pub character_id: u64,
    /// Levels gained.
    pub levels: u32,
    /// Level afterwards.
    pub new_level: u32,
    /// Max health afterwards.
    pub max_health: u32,
    /// Max mana or stamina afterwards, for roles that have one.
    pub secondary_max: Option<u32>,
}

/// Emitted when a magician casts a spell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellCast {
    /// The character identifier.
    pub character_id: u64,
    /// The spell cast.
    pub spell: Spell,
    /// Mana spent.
    pub mana_cost: u32,
    /// Mana left afterwards.
    pub remaining_mana: u32,
}

/// Emitted when a warrior performs an attack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackPerformed {
    /// The character identifier.
    pub character_id: u64,
    /// The attack performed.
    pub attack: Attack,
    /// Stamina spent.
    pub stamina_cost: u32,
    /// Stamina left afterwards.
    pub remaining_stamina: u32,
}

/// Event payload variants for character progression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterEventKind {
    /// A character has been created.
    CharacterCreated(CharacterCreated),
    /// A character has been renamed.
    CharacterRenamed(CharacterRenamed),
    /// A character took non-lethal damage.
    DamageTaken(DamageTaken),
    /// A character died.
    CharacterDied(CharacterDied),
    /// A character was reset to starting stats.
    CharacterRestarted(CharacterRestarted),
    /// A character was healed.
    Healed(Healed),
    /// A character gained experience.
    ExperienceGained(ExperienceGained),
    /// A character gained levels.
    LeveledUp(LeveledUp),
    /// A magician cast a spell.
    SpellCast(SpellCast),
    /// A warrior performed an attack.
    AttackPerformed(AttackPerformed),
}

impl CharacterEventKind {
    /// The event type string for this payload.
    #[must_use]
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::CharacterCreated(_) => CHARACTER_CREATED_EVENT_TYPE,
            Self::CharacterRenamed(_) => CHARACTER_RENAMED_EVENT_TYPE,
            Self::DamageTaken(_) => DAMAGE_TAKEN_EVENT_TYPE,
            Self::CharacterDied(_) => CHARACTER_DIED_EVENT_TYPE,
            Self::CharacterRestarted(_) => CHARACTER_RESTARTED_EVENT_TYPE,
            Self::Healed(_) => HEALED_EVENT_TYPE,
            Self::ExperienceGained(_) => EXPERIENCE_GAINED_EVENT_TYPE,
            Self::LeveledUp(_) => LEVELED_UP_EVENT_TYPE,
            Self::SpellCast(_) => SPELL_CAST_EVENT_TYPE,
            Self::AttackPerformed(_) => ATTACK_PERFORMED_EVENT_TYPE,
        }
    }
}

/// Domain event envelope for character progression.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: CharacterEventKind,
}

impl DomainEvent for CharacterEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("CharacterEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
