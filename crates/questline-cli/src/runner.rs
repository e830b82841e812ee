//! Replays a scenario and writes a transcript.

use std::io::Write;

use questline_character::application::command_handlers::{handle_command, handle_create_character};
use questline_character::domain::events::CharacterEvent;
use questline_core::aggregate::AggregateRoot;
use questline_core::clock::Clock;
use questline_core::event::DomainEvent;
use tracing::{info, warn};

use crate::error::AppError;
use crate::scenario::Scenario;

/// Totals for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Characters created.
    pub characters: usize,
    /// Commands that succeeded.
    pub applied: usize,
    /// Commands the model rejected.
    pub rejected: usize,
    /// Events recorded across all characters.
    pub events: usize,
}

/// Runs every character in `scenario`, writing each character's identity and
/// status after every step to `out`.
///
/// Rejected commands are reported in the transcript and the run continues.
///
/// # Errors
///
/// Returns `AppError::Domain` if a character cannot be created, or
/// `AppError::Io` if writing to `out` fails.
pub fn run_scenario(
    scenario: &Scenario,
    clock: &dyn Clock,
    print_events: bool,
    out: &mut dyn Write,
) -> Result<RunSummary, AppError> {
    let mut summary = RunSummary::default();

    for scripted in &scenario.characters {
        let mut character = handle_create_character(&scripted.create_command(), clock)?;
        summary.characters += 1;
        info!(character_id = character.id(), role = %character.role(), "playing character");

        writeln!(out, "== {character}")?;
        write!(out, "{}", character.describe_status())?;
        let created = character.take_uncommitted_events();
        summary.events += created.len();
        write_events(out, &created, print_events)?;

        for command in &scripted.commands {
            writeln!(out, "> {}", command.command_type())?;
            match handle_command(&mut character, command, clock) {
                Ok(events) => {
                    summary.applied += 1;
                    summary.events += events.len();
                    write_events(out, &events, print_events)?;
                }
                Err(err) => {
                    summary.rejected += 1;
                    warn!(character_id = character.id(), error = %err, "command rejected");
                    writeln!(out, "! {err}")?;
                }
            }
            write!(out, "{}", character.describe_status())?;
        }
        writeln!(out)?;
    }

    info!(
        characters = summary.characters,
        applied = summary.applied,
        rejected = summary.rejected,
        events = summary.events,
        "scenario finished"
    );
    Ok(summary)
}

fn write_events(
    out: &mut dyn Write,
    events: &[CharacterEvent],
    print_events: bool,
) -> Result<(), AppError> {
    if !print_events {
        return Ok(());
    }
    for event in events {
        writeln!(out, "  {} {}", event.event_type(), event.to_payload())?;
    }
    Ok(())
}
