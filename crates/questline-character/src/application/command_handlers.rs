//! Command handlers for character progression.
//!
//! Each handler runs a command against the aggregate and hands back the
//! events it produced.

use questline_core::aggregate::AggregateRoot;
use questline_core::clock::Clock;
use questline_core::error::DomainError;
use tracing::{debug, instrument};

use crate::domain::aggregates::Character;
use crate::domain::commands::{CharacterCommand, CreateCharacter};
use crate::domain::events::CharacterEvent;

/// Handles the `CreateCharacter` command.
///
/// The returned character still holds its `CharacterCreated` event as
/// uncommitted.
///
/// # Errors
///
/// Returns `DomainError::InvalidArgument` if the name is invalid.
pub fn handle_create_character(
    command: &CreateCharacter,
    clock: &dyn Clock,
) -> Result<Character, DomainError> {
    Character::create(
        command.character_id,
        command.name.clone(),
        command.role,
        clock,
    )
}

/// Runs `command` against `character` and returns the events it produced,
/// together with any events the character was already holding.
///
/// On error nothing is recorded and the character is unchanged; events the
/// character was already holding stay uncommitted.
///
/// # Errors
///
/// Propagates the `DomainError` raised by the aggregate.
#[instrument(skip_all, fields(character_id = character.id(), command = command.command_type()))]
pub fn handle_command(
    character: &mut Character,
    command: &CharacterCommand,
    clock: &dyn Clock,
) -> Result<Vec<CharacterEvent>, DomainError> {
    match command {
        CharacterCommand::Rename { name } => character.rename(name.clone(), clock)?,
        CharacterCommand::ApplyDamage { amount } => character.apply_damage(*amount, clock)?,
        CharacterCommand::Heal { amount } => character.heal(*amount, clock)?,
        CharacterCommand::GainExperience { amount } => {
            character.gain_experience(*amount, clock)?;
        }
        CharacterCommand::LevelUp { levels } => character.level_up(*levels, clock)?,
        CharacterCommand::Restart => character.restart(clock),
        CharacterCommand::CastSpell { spell } => character.cast_spell(spell, clock)?,
        CharacterCommand::PerformAttack { attack } => character.perform_attack(attack, clock)?,
    }

    let events = character.take_uncommitted_events();
    debug!(events = events.len(), "command handled");
    Ok(events)
}
