//! Fixed catalogs of magician spells and warrior attacks.

use std::fmt;
use std::str::FromStr;

use questline_core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A spell a magician can cast, paid for in mana.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Spell {
    /// Offensive spell.
    #[serde(rename = "Attack Spell")]
    Attack,
    /// Defensive spell.
    #[serde(rename = "Shield Spell")]
    Shield,
    /// Movement spell.
    #[serde(rename = "Teleport Spell")]
    Teleport,
}

impl Spell {
    /// Every known spell.
    pub const ALL: [Self; 3] = [Self::Attack, Self::Shield, Self::Teleport];

    /// The player-facing spell name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Attack => "Attack Spell",
            Self::Shield => "Shield Spell",
            Self::Teleport => "Teleport Spell",
        }
    }

    /// Mana required to cast.
    #[must_use]
    pub const fn mana_cost(self) -> u32 {
        match self {
            Self::Attack => 30,
            Self::Shield => 20,
            Self::Teleport => 50,
        }
    }
}

impl fmt::Display for Spell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Spell {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|spell| spell.name() == s)
            .ok_or_else(|| DomainError::invalid_operation(format!("unknown spell: {s}")))
    }
}

/// An attack a warrior can perform, paid for in stamina.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attack {
    /// Quick, cheap strike.
    #[serde(rename = "Light Hit")]
    Light,
    /// Committed strike.
    #[serde(rename = "Heavy Hit")]
    Heavy,
    /// Finisher.
    #[serde(rename = "Ultimate Hit")]
    Ultimate,
}

impl Attack {
    /// Every known attack.
    pub const ALL: [Self; 3] = [Self::Light, Self::Heavy, Self::Ultimate];

    /// The player-facing attack name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "Light Hit",
            Self::Heavy => "Heavy Hit",
            Self::Ultimate => "Ultimate Hit",
        }
    }

    /// Stamina required to perform.
    #[must_use]
    pub const fn stamina_cost(self) -> u32 {
        match self {
            Self::Light => 15,
            Self::Heavy => 30,
            Self::Ultimate => 55,
        }
    }
}

impl fmt::Display for Attack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attack {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|attack| attack.name() == s)
            .ok_or_else(|| DomainError::invalid_operation(format!("unknown attack: {s}")))
    }
}
