//! Scripted scenarios: which characters to create and what happens to them.

use std::path::Path;

use questline_character::domain::aggregates::Role;
use questline_character::domain::commands::{CharacterCommand, CreateCharacter};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One character and the commands to run against it, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedCharacter {
    /// The character identifier.
    pub character_id: u64,
    /// The character's name.
    pub name: String,
    /// The character's role.
    #[serde(default = "generic_role")]
    pub role: Role,
    /// Commands to run after creation.
    #[serde(default)]
    pub commands: Vec<CharacterCommand>,
}

const fn generic_role() -> Role {
    Role::Generic
}

impl ScriptedCharacter {
    /// The command that creates this character.
    #[must_use]
    pub fn create_command(&self) -> CreateCharacter {
        CreateCharacter {
            character_id: self.character_id,
            name: self.name.clone(),
            role: self.role,
        }
    }
}

/// A full demo script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Characters to play, in order.
    pub characters: Vec<ScriptedCharacter>,
}

impl Scenario {
    /// Parses a scenario from YAML.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Scenario` if the document does not describe a
    /// scenario.
    pub fn from_yaml(source: &str) -> Result<Self, AppError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Reads and parses a YAML scenario file.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if the file cannot be read, or
    /// `AppError::Scenario` if it does not parse.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_yaml(&source)
    }

    /// The walkthrough every role goes through: take a hit, heal, use the
    /// role's ability, get promoted, then die and restart.
    #[must_use]
    pub fn builtin() -> Self {
        let walkthrough = |id: u64, name: &str, role: Role| {
            let mut commands = vec![
                CharacterCommand::ApplyDamage { amount: 30 },
                CharacterCommand::Heal { amount: 40 },
            ];
            match role {
                Role::Magician => commands.push(CharacterCommand::CastSpell {
                    spell: "Attack Spell".to_owned(),
                }),
                Role::Warrior => commands.push(CharacterCommand::PerformAttack {
                    attack: "Light Hit".to_owned(),
                }),
                Role::Generic => {}
            }
            commands.push(CharacterCommand::GainExperience { amount: 1250 });
            commands.push(CharacterCommand::ApplyDamage { amount: 120 });

            ScriptedCharacter {
                character_id: id,
                name: name.to_owned(),
                role,
                commands,
            }
        };

        Self {
            characters: vec![
                walkthrough(53641, "OnlineGamer31", Role::Generic),
                walkthrough(53642, "MasterMerlin", Role::Magician),
                walkthrough(53643, "TrollSlayer", Role::Warrior),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_yaml_parses_characters_and_commands() {
        let yaml = r#"
characters:
  - character_id: 1
    name: Morgana
    role: magician
    commands:
      - action: cast_spell
        spell: Shield Spell
      - action: gain_experience
        amount: 2000
  - character_id: 2
    name: Bystander
"#;

        let scenario = Scenario::from_yaml(yaml).unwrap();

        assert_eq!(scenario.characters.len(), 2);
        let morgana = &scenario.characters[0];
        assert_eq!(morgana.role, Role::Magician);
        assert_eq!(
            morgana.commands,
            vec![
                CharacterCommand::CastSpell {
                    spell: "Shield Spell".to_owned()
                },
                CharacterCommand::GainExperience { amount: 2000 },
            ]
        );
        let bystander = &scenario.characters[1];
        assert_eq!(bystander.role, Role::Generic);
        assert!(bystander.commands.is_empty());
    }

    #[test]
    fn test_from_yaml_rejects_unknown_action() {
        let yaml = r"
characters:
  - character_id: 1
    name: Morgana
    commands:
      - action: summon_dragon
";
        assert!(matches!(
            Scenario::from_yaml(yaml),
            Err(AppError::Scenario(_))
        ));
    }

    #[test]
    fn test_from_yaml_rejects_negative_amount() {
        let yaml = r"
characters:
  - character_id: 1
    name: Morgana
    commands:
      - action: heal
        amount: -5
";
        assert!(Scenario::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_builtin_covers_every_role() {
        let roles: Vec<Role> = Scenario::builtin()
            .characters
            .iter()
            .map(|c| c.role)
            .collect();
        assert_eq!(roles, vec![Role::Generic, Role::Magician, Role::Warrior]);
    }
}
