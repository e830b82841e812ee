//! Aggregate root for character progression.

use std::fmt;

use questline_core::aggregate::AggregateRoot;
use questline_core::clock::Clock;
use questline_core::error::DomainError;
use questline_core::event::EventMetadata;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use super::abilities::{Attack, Spell};
use super::events::{
    AttackPerformed, CharacterCreated, CharacterDied, CharacterEvent, CharacterEventKind,
    CharacterRenamed, CharacterRestarted, DamageTaken, ExperienceGained, Healed, LeveledUp,
    SpellCast,
};
use super::name::validate_name;
use super::pool::ResourcePool;

/// Experience needed for one promotion.
pub const EXPERIENCE_TO_PROMOTE: u32 = 1000;
/// Health of a new or restarted character.
pub const STARTING_HEALTH: u32 = 100;
/// Level of a new or restarted character.
pub const STARTING_LEVEL: u32 = 1;
/// Max health gained per level.
pub const HEALTH_PER_LEVEL: u32 = 10;
/// Mana or stamina of a new or restarted character.
pub const STARTING_RESOURCE: u32 = 100;
/// Max mana or stamina gained per level.
pub const RESOURCE_PER_LEVEL: u32 = 10;

/// A character's role, which decides its secondary resource and actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// No role chosen; no secondary resource.
    Generic,
    /// Spends mana on spells.
    Magician,
    /// Spends stamina on attacks.
    Warrior,
}

impl Role {
    /// Label of the role's secondary resource, if it has one.
    #[must_use]
    pub const fn secondary_resource_name(self) -> Option<&'static str> {
        match self {
            Self::Generic => None,
            Self::Magician => Some("Mana"),
            Self::Warrior => Some("Stamina"),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Generic => "Generic",
            Self::Magician => "Magician",
            Self::Warrior => "Warrior",
        })
    }
}

/// Role plus the role-specific resource.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RoleState {
    Generic,
    Magician { mana: ResourcePool },
    Warrior { stamina: ResourcePool },
}

impl RoleState {
    const fn starting(role: Role) -> Self {
        match role {
            Role::Generic => Self::Generic,
            Role::Magician => Self::Magician {
                mana: ResourcePool::full(STARTING_RESOURCE),
            },
            Role::Warrior => Self::Warrior {
                stamina: ResourcePool::full(STARTING_RESOURCE),
            },
        }
    }

    const fn role(&self) -> Role {
        match self {
            Self::Generic => Role::Generic,
            Self::Magician { .. } => Role::Magician,
            Self::Warrior { .. } => Role::Warrior,
        }
    }

    const fn secondary(&self) -> Option<&ResourcePool> {
        match self {
            Self::Generic => None,
            Self::Magician { mana } => Some(mana),
            Self::Warrior { stamina } => Some(stamina),
        }
    }

    fn secondary_mut(&mut self) -> Option<&mut ResourcePool> {
        match self {
            Self::Generic => None,
            Self::Magician { mana } => Some(mana),
            Self::Warrior { stamina } => Some(stamina),
        }
    }
}

/// Validated outcome of a level-up, computed before anything is mutated.
#[derive(Debug, Clone, Copy)]
struct LevelUpPlan {
    levels: u32,
    new_level: u32,
    max_health: u32,
    secondary_max: Option<u32>,
}

fn require_positive(value: u32, what: &str) -> Result<(), DomainError> {
    if value == 0 {
        return Err(DomainError::invalid_argument(format!(
            "{what} must be greater than zero"
        )));
    }
    Ok(())
}

/// The aggregate root for a character.
///
/// Invariants held after every call: `health.current() <= health.max()`,
/// `level >= 1`, `experience < EXPERIENCE_TO_PROMOTE`, and the same pool
/// bound for mana or stamina. A failed call leaves the character untouched.
#[derive(Debug, Clone)]
pub struct Character {
    id: u64,
    name: String,
    role: RoleState,
    experience: u32,
    health: ResourcePool,
    level: u32,
    /// Number of events already taken from the aggregate.
    pub(crate) version: i64,
    /// Events recorded and not yet taken.
    uncommitted_events: Vec<CharacterEvent>,
}

impl Character {
    /// Creates a character with starting stats for `role`, producing a
    /// `CharacterCreated` event.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if `name` fails validation.
    pub fn create(
        id: u64,
        name: impl Into<String>,
        role: Role,
        clock: &dyn Clock,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        validate_name(&name)?;

        let mut character = Self {
            id,
            name: name.clone(),
            role: RoleState::starting(role),
            experience: 0,
            health: ResourcePool::full(STARTING_HEALTH),
            level: STARTING_LEVEL,
            version: 0,
            uncommitted_events: Vec::new(),
        };
        character.record(
            CharacterEventKind::CharacterCreated(CharacterCreated {
                character_id: id,
                name,
                role,
            }),
            clock,
        );
        debug!(character_id = id, %role, "character created");
        Ok(character)
    }

    /// Character identifier.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Current name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The character's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role.role()
    }

    /// Experience towards the next level.
    #[must_use]
    pub const fn experience(&self) -> u32 {
        self.experience
    }

    /// Health pool.
    #[must_use]
    pub const fn health(&self) -> ResourcePool {
        self.health
    }

    /// Current level.
    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// Mana pool, for magicians.
    #[must_use]
    pub const fn mana(&self) -> Option<ResourcePool> {
        match self.role {
            RoleState::Magician { mana } => Some(mana),
            _ => None,
        }
    }

    /// Stamina pool, for warriors.
    #[must_use]
    pub const fn stamina(&self) -> Option<ResourcePool> {
        match self.role {
            RoleState::Warrior { stamina } => Some(stamina),
            _ => None,
        }
    }

    /// Mana or stamina, whichever the role has.
    #[must_use]
    pub fn secondary_resource(&self) -> Option<ResourcePool> {
        self.role.secondary().copied()
    }

    /// Renames the character, producing a `CharacterRenamed` event.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if `new_name` fails validation.
    pub fn rename(
        &mut self,
        new_name: impl Into<String>,
        clock: &dyn Clock,
    ) -> Result<(), DomainError> {
        let new_name = new_name.into();
        validate_name(&new_name)?;

        let previous_name = std::mem::replace(&mut self.name, new_name.clone());
        self.record(
            CharacterEventKind::CharacterRenamed(CharacterRenamed {
                character_id: self.id,
                previous_name,
                new_name,
            }),
            clock,
        );
        Ok(())
    }

    /// Applies `amount` damage.
    ///
    /// A blow of at least the current health kills the character, which
    /// records `CharacterDied` and restarts it. Damage beyond what was needed
    /// to kill is discarded.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if `amount` is zero.
    pub fn apply_damage(&mut self, amount: u32, clock: &dyn Clock) -> Result<(), DomainError> {
        require_positive(amount, "damage")?;

        let health_before = self.health.current();
        if amount >= health_before {
            info!(
                character_id = self.id,
                damage = amount,
                health_before,
                "character died; restarting"
            );
            self.record(
                CharacterEventKind::CharacterDied(CharacterDied {
                    character_id: self.id,
                    lethal_damage: amount,
                    health_before,
                }),
                clock,
            );
            self.restart(clock);
            return Ok(());
        }

        let spent = self.health.try_spend(amount);
        debug_assert!(spent, "non-lethal damage is below current health");
        debug!(
            character_id = self.id,
            damage = amount,
            remaining = self.health.current(),
            "damage taken"
        );
        self.record(
            CharacterEventKind::DamageTaken(DamageTaken {
                character_id: self.id,
                amount,
                remaining_health: self.health.current(),
            }),
            clock,
        );
        Ok(())
    }

    /// Restores up to `amount` health, clamped at max health.
    ///
    /// Produces a `Healed` event unless the character was already at full
    /// health.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if `amount` is zero.
    pub fn heal(&mut self, amount: u32, clock: &dyn Clock) -> Result<(), DomainError> {
        require_positive(amount, "heal amount")?;

        let restored = self.health.restore(amount);
        if restored == 0 {
            debug!(character_id = self.id, "heal at full health ignored");
            return Ok(());
        }
        self.record(
            CharacterEventKind::Healed(Healed {
                character_id: self.id,
                requested: amount,
                restored,
                current_health: self.health.current(),
            }),
            clock,
        );
        Ok(())
    }

    /// Adds experience, promoting the character once per full
    /// `EXPERIENCE_TO_PROMOTE` accumulated. The remainder carries over.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if `amount` is zero or the
    /// resulting promotion would overflow a stat.
    #[allow(clippy::cast_possible_truncation)]
    pub fn gain_experience(&mut self, amount: u32, clock: &dyn Clock) -> Result<(), DomainError> {
        require_positive(amount, "experience amount")?;

        let total = u64::from(self.experience) + u64::from(amount);
        let threshold = u64::from(EXPERIENCE_TO_PROMOTE);
        // total < 2^33, so the quotient and the remainder both fit in u32.
        let levels = (total / threshold) as u32;
        let remainder = (total % threshold) as u32;

        let plan = if levels > 0 {
            Some(self.plan_level_up(levels)?)
        } else {
            None
        };

        self.experience = remainder;
        self.record(
            CharacterEventKind::ExperienceGained(ExperienceGained {
                character_id: self.id,
                amount,
                experience: remainder,
            }),
            clock,
        );
        if let Some(plan) = plan {
            self.commit_level_up(plan, clock);
        }
        Ok(())
    }

    /// Raises the level by `levels`, growing and refilling health and the
    /// role's secondary resource. Produces a `LeveledUp` event.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if `levels` is zero or a stat
    /// would overflow.
    pub fn level_up(&mut self, levels: u32, clock: &dyn Clock) -> Result<(), DomainError> {
        require_positive(levels, "levels")?;
        let plan = self.plan_level_up(levels)?;
        self.commit_level_up(plan, clock);
        Ok(())
    }

    /// Resets experience, health, level and the secondary resource to their
    /// starting values. Produces a `CharacterRestarted` event.
    pub fn restart(&mut self, clock: &dyn Clock) {
        self.experience = 0;
        self.health = ResourcePool::full(STARTING_HEALTH);
        self.level = STARTING_LEVEL;
        self.role = RoleState::starting(self.role.role());
        self.record(
            CharacterEventKind::CharacterRestarted(CharacterRestarted {
                character_id: self.id,
            }),
            clock,
        );
    }

    /// Casts the named spell, spending its mana cost. Produces a `SpellCast`
    /// event.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidOperation` if the character is not a
    /// magician, the spell is unknown, or there is not enough mana.
    pub fn cast_spell(&mut self, spell_name: &str, clock: &dyn Clock) -> Result<(), DomainError> {
        let (spell, remaining_mana) = match &mut self.role {
            RoleState::Magician { mana } => {
                let spell: Spell = spell_name.parse()?;
                if !mana.try_spend(spell.mana_cost()) {
                    return Err(DomainError::invalid_operation(format!(
                        "not enough mana for {spell}: need {}, have {}",
                        spell.mana_cost(),
                        mana.current()
                    )));
                }
                (spell, mana.current())
            }
            other => {
                return Err(DomainError::invalid_operation(format!(
                    "only magicians can cast spells; character {} is {}",
                    self.id,
                    other.role()
                )));
            }
        };

        debug!(character_id = self.id, %spell, remaining_mana, "spell cast");
        self.record(
            CharacterEventKind::SpellCast(SpellCast {
                character_id: self.id,
                spell,
                mana_cost: spell.mana_cost(),
                remaining_mana,
            }),
            clock,
        );
        Ok(())
    }

    /// Performs the named attack, spending its stamina cost. Produces an
    /// `AttackPerformed` event.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidOperation` if the character is not a
    /// warrior, the attack is unknown, or there is not enough stamina.
    pub fn perform_attack(
        &mut self,
        attack_name: &str,
        clock: &dyn Clock,
    ) -> Result<(), DomainError> {
        let (attack, remaining_stamina) = match &mut self.role {
            RoleState::Warrior { stamina } => {
                let attack: Attack = attack_name.parse()?;
                if !stamina.try_spend(attack.stamina_cost()) {
                    return Err(DomainError::invalid_operation(format!(
                        "not enough stamina for {attack}: need {}, have {}",
                        attack.stamina_cost(),
                        stamina.current()
                    )));
                }
                (attack, stamina.current())
            }
            other => {
                return Err(DomainError::invalid_operation(format!(
                    "only warriors can perform attacks; character {} is {}",
                    self.id,
                    other.role()
                )));
            }
        };

        debug!(character_id = self.id, %attack, remaining_stamina, "attack performed");
        self.record(
            CharacterEventKind::AttackPerformed(AttackPerformed {
                character_id: self.id,
                attack,
                stamina_cost: attack.stamina_cost(),
                remaining_stamina,
            }),
            clock,
        );
        Ok(())
    }

    /// Multi-line summary of level, experience, health and the role's
    /// secondary resource.
    #[must_use]
    pub fn describe_status(&self) -> String {
        let secondary = match (
            self.role().secondary_resource_name(),
            self.role.secondary(),
        ) {
            (Some(label), Some(pool)) => format!("{label}: {}/{}\n", pool.current(), pool.max()),
            _ => String::new(),
        };
        format!(
            "Level: {}\nExperience: {}/{EXPERIENCE_TO_PROMOTE}\nHealth: {}/{}\n{secondary}",
            self.level,
            self.experience,
            self.health.current(),
            self.health.max(),
        )
    }

    fn plan_level_up(&self, levels: u32) -> Result<LevelUpPlan, DomainError> {
        let overflow = || {
            DomainError::invalid_argument(format!(
                "gaining {levels} levels would overflow character stats"
            ))
        };

        let new_level = self.level.checked_add(levels).ok_or_else(overflow)?;
        let health_bonus = levels.checked_mul(HEALTH_PER_LEVEL).ok_or_else(overflow)?;
        let max_health = self.health.grown_max(health_bonus).ok_or_else(overflow)?;
        let secondary_max = match self.role.secondary() {
            Some(pool) => {
                let bonus = levels
                    .checked_mul(RESOURCE_PER_LEVEL)
                    .ok_or_else(overflow)?;
                Some(pool.grown_max(bonus).ok_or_else(overflow)?)
            }
            None => None,
        };

        Ok(LevelUpPlan {
            levels,
            new_level,
            max_health,
            secondary_max,
        })
    }

    fn commit_level_up(&mut self, plan: LevelUpPlan, clock: &dyn Clock) {
        self.level = plan.new_level;
        self.health.raise_and_refill(plan.max_health);
        if let (Some(pool), Some(max)) = (self.role.secondary_mut(), plan.secondary_max) {
            pool.raise_and_refill(max);
        }

        info!(
            character_id = self.id,
            levels = plan.levels,
            level = self.level,
            "character leveled up"
        );
        self.record(
            CharacterEventKind::LeveledUp(LeveledUp {
                character_id: self.id,
                levels: plan.levels,
                new_level: plan.new_level,
                max_health: plan.max_health,
                secondary_max: plan.secondary_max,
            }),
            clock,
        );
    }

    /// Returns the next sequence number for a new event.
    #[allow(clippy::cast_possible_wrap)]
    fn next_sequence_number(&self) -> i64 {
        self.version + self.uncommitted_events.len() as i64 + 1
    }

    fn record(&mut self, kind: CharacterEventKind, clock: &dyn Clock) {
        let event = CharacterEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                event_type: kind.event_type().to_owned(),
                aggregate_id: self.id,
                sequence_number: self.next_sequence_number(),
                occurred_at: clock.now(),
            },
            kind,
        };
        self.uncommitted_events.push(event);
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (id={}), role: {}", self.name, self.id, self.role())
    }
}

impl AggregateRoot for Character {
    type Event = CharacterEvent;

    fn aggregate_id(&self) -> u64 {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    #[allow(clippy::cast_possible_wrap)]
    fn take_uncommitted_events(&mut self) -> Vec<Self::Event> {
        let events = std::mem::take(&mut self.uncommitted_events);
        self.version += events.len() as i64;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use questline_core::event::DomainEvent;
    use questline_test_support::{event_types, fixed_clock};

    use crate::domain::events::{
        ATTACK_PERFORMED_EVENT_TYPE, CHARACTER_CREATED_EVENT_TYPE, CHARACTER_DIED_EVENT_TYPE,
        CHARACTER_RESTARTED_EVENT_TYPE, DAMAGE_TAKEN_EVENT_TYPE, EXPERIENCE_GAINED_EVENT_TYPE,
        HEALED_EVENT_TYPE, LEVELED_UP_EVENT_TYPE, SPELL_CAST_EVENT_TYPE,
    };

    fn fresh(role: Role) -> Character {
        let mut character = Character::create(53641, "OnlineGamer31", role, &fixed_clock()).unwrap();
        character.take_uncommitted_events();
        character
    }

    fn assert_starting_stats(character: &Character) {
        assert_eq!(character.level(), STARTING_LEVEL);
        assert_eq!(character.experience(), 0);
        assert_eq!(character.health(), ResourcePool::full(STARTING_HEALTH));
        match character.role() {
            Role::Generic => assert_eq!(character.secondary_resource(), None),
            Role::Magician | Role::Warrior => assert_eq!(
                character.secondary_resource(),
                Some(ResourcePool::full(STARTING_RESOURCE))
            ),
        }
    }

    // --- create ---

    #[test]
    fn test_create_sets_role_defaults_and_records_event() {
        // Arrange
        let clock = fixed_clock();

        // Act
        let character = Character::create(53642, "MasterMerlin", Role::Magician, &clock).unwrap();

        // Assert
        assert_eq!(character.id(), 53642);
        assert_eq!(character.name(), "MasterMerlin");
        assert_eq!(character.role(), Role::Magician);
        assert_starting_stats(&character);
        assert_eq!(character.mana(), Some(ResourcePool::full(100)));
        assert_eq!(character.stamina(), None);

        let events = character.uncommitted_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), CHARACTER_CREATED_EVENT_TYPE);
        let meta = events[0].metadata();
        assert_eq!(meta.aggregate_id, 53642);
        assert_eq!(meta.sequence_number, 1);
        assert_eq!(meta.occurred_at, clock.0);
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let result = Character::create(1, "  ", Role::Warrior, &fixed_clock());

        match result {
            Err(DomainError::InvalidArgument(msg)) => {
                assert_eq!(msg, "character name must not be empty");
            }
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    // --- rename ---

    #[test]
    fn test_rename_replaces_name_and_records_previous() {
        let mut character = fresh(Role::Generic);

        character.rename("TrollSlayer", &fixed_clock()).unwrap();

        assert_eq!(character.name(), "TrollSlayer");
        match &character.uncommitted_events()[0].kind {
            CharacterEventKind::CharacterRenamed(payload) => {
                assert_eq!(payload.previous_name, "OnlineGamer31");
                assert_eq!(payload.new_name, "TrollSlayer");
            }
            other => panic!("expected CharacterRenamed, got {other:?}"),
        }
    }

    #[test]
    fn test_rename_rejected_keeps_old_name() {
        let mut character = fresh(Role::Generic);

        let result = character.rename("", &fixed_clock());

        assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
        assert_eq!(character.name(), "OnlineGamer31");
        assert!(character.uncommitted_events().is_empty());
    }

    // --- apply_damage ---

    #[test]
    fn test_apply_damage_below_health_reduces_health() {
        let mut character = fresh(Role::Generic);

        character.apply_damage(30, &fixed_clock()).unwrap();

        assert_eq!(character.health().current(), 70);
        assert_eq!(character.health().max(), 100);
        assert_eq!(
            event_types(character.uncommitted_events()),
            vec![DAMAGE_TAKEN_EVENT_TYPE]
        );
    }

    #[test]
    fn test_apply_damage_equal_to_health_kills_and_restarts() {
        let clock = fixed_clock();
        let mut character = fresh(Role::Warrior);
        character.gain_experience(1250, &clock).unwrap();
        character.perform_attack("Heavy Hit", &clock).unwrap();
        character.take_uncommitted_events();

        character.apply_damage(110, &clock).unwrap();

        assert_starting_stats(&character);
        assert_eq!(
            event_types(character.uncommitted_events()),
            vec![CHARACTER_DIED_EVENT_TYPE, CHARACTER_RESTARTED_EVENT_TYPE]
        );
        match &character.uncommitted_events()[0].kind {
            CharacterEventKind::CharacterDied(payload) => {
                assert_eq!(payload.lethal_damage, 110);
                assert_eq!(payload.health_before, 110);
            }
            other => panic!("expected CharacterDied, got {other:?}"),
        }
    }

    #[test]
    fn test_apply_damage_overflow_is_discarded_on_death() {
        let mut character = fresh(Role::Generic);

        character.apply_damage(1_000_000, &fixed_clock()).unwrap();

        assert_eq!(character.health(), ResourcePool::full(STARTING_HEALTH));
    }

    #[test]
    fn test_apply_damage_zero_is_invalid_argument() {
        let mut character = fresh(Role::Generic);

        let result = character.apply_damage(0, &fixed_clock());

        match result {
            Err(DomainError::InvalidArgument(msg)) => {
                assert_eq!(msg, "damage must be greater than zero");
            }
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
        assert_eq!(character.health().current(), 100);
    }

    // --- heal ---

    #[test]
    fn test_heal_clamps_at_max_health() {
        let clock = fixed_clock();
        let mut character = fresh(Role::Generic);
        character.apply_damage(30, &clock).unwrap();
        character.take_uncommitted_events();

        character.heal(40, &clock).unwrap();

        assert_eq!(character.health().current(), 100);
        match &character.uncommitted_events()[0].kind {
            CharacterEventKind::Healed(payload) => {
                assert_eq!(payload.requested, 40);
                assert_eq!(payload.restored, 30);
                assert_eq!(payload.current_health, 100);
            }
            other => panic!("expected Healed, got {other:?}"),
        }
    }

    #[test]
    fn test_heal_at_full_health_records_nothing() {
        let mut character = fresh(Role::Magician);

        character.heal(25, &fixed_clock()).unwrap();

        assert!(character.health().is_full());
        assert!(character.uncommitted_events().is_empty());
    }

    #[test]
    fn test_heal_zero_is_invalid_argument() {
        let mut character = fresh(Role::Generic);
        assert!(matches!(
            character.heal(0, &fixed_clock()),
            Err(DomainError::InvalidArgument(_))
        ));
    }

    // --- gain_experience / level_up ---

    #[test]
    fn test_gain_experience_below_threshold_accumulates() {
        let mut character = fresh(Role::Generic);

        character.gain_experience(400, &fixed_clock()).unwrap();
        character.gain_experience(599, &fixed_clock()).unwrap();

        assert_eq!(character.experience(), 999);
        assert_eq!(character.level(), 1);
    }

    #[test]
    fn test_gain_experience_promotes_multiple_levels_and_keeps_remainder() {
        let mut character = fresh(Role::Warrior);

        character.gain_experience(2500, &fixed_clock()).unwrap();

        assert_eq!(character.level(), 3);
        assert_eq!(character.experience(), 500);
        assert_eq!(character.health(), ResourcePool::full(120));
        assert_eq!(character.stamina(), Some(ResourcePool::full(120)));
        assert_eq!(
            event_types(character.uncommitted_events()),
            vec![EXPERIENCE_GAINED_EVENT_TYPE, LEVELED_UP_EVENT_TYPE]
        );
    }

    #[test]
    fn test_gain_experience_exactly_threshold_leaves_zero() {
        let mut character = fresh(Role::Generic);

        character.gain_experience(EXPERIENCE_TO_PROMOTE, &fixed_clock()).unwrap();

        assert_eq!(character.level(), 2);
        assert_eq!(character.experience(), 0);
    }

    #[test]
    fn test_level_up_refills_health_and_mana() {
        let clock = fixed_clock();
        let mut character = fresh(Role::Magician);
        character.apply_damage(60, &clock).unwrap();
        character.cast_spell("Teleport Spell", &clock).unwrap();

        character.level_up(2, &clock).unwrap();

        assert_eq!(character.level(), 3);
        assert_eq!(character.health(), ResourcePool::full(120));
        assert_eq!(character.mana(), Some(ResourcePool::full(120)));
    }

    #[test]
    fn test_level_up_generic_has_no_secondary_max() {
        let mut character = fresh(Role::Generic);

        character.level_up(1, &fixed_clock()).unwrap();

        match &character.uncommitted_events()[0].kind {
            CharacterEventKind::LeveledUp(payload) => {
                assert_eq!(payload.new_level, 2);
                assert_eq!(payload.max_health, 110);
                assert_eq!(payload.secondary_max, None);
            }
            other => panic!("expected LeveledUp, got {other:?}"),
        }
    }

    #[test]
    fn test_level_up_zero_is_invalid_argument() {
        let mut character = fresh(Role::Generic);
        assert!(matches!(
            character.level_up(0, &fixed_clock()),
            Err(DomainError::InvalidArgument(_))
        ));
        assert_eq!(character.level(), 1);
    }

    #[test]
    fn test_level_up_overflow_leaves_character_untouched() {
        let mut character = fresh(Role::Warrior);

        let result = character.level_up(u32::MAX, &fixed_clock());

        assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
        assert_starting_stats(&character);
        assert!(character.uncommitted_events().is_empty());
    }

    // --- restart ---

    #[test]
    fn test_restart_resets_secondary_resource() {
        let clock = fixed_clock();
        let mut character = fresh(Role::Magician);
        character.level_up(4, &clock).unwrap();
        character.cast_spell("Attack Spell", &clock).unwrap();
        character.gain_experience(300, &clock).unwrap();

        character.restart(&clock);

        assert_starting_stats(&character);
    }

    // --- cast_spell ---

    #[test]
    fn test_cast_spell_spends_mana() {
        let mut character = fresh(Role::Magician);

        character.cast_spell("Attack Spell", &fixed_clock()).unwrap();

        assert_eq!(character.mana().unwrap().current(), 70);
        assert_eq!(
            event_types(character.uncommitted_events()),
            vec![SPELL_CAST_EVENT_TYPE]
        );
    }

    #[test]
    fn test_cast_spell_without_enough_mana_is_rejected() {
        let clock = fixed_clock();
        let mut character = fresh(Role::Magician);
        character.cast_spell("Teleport Spell", &clock).unwrap();
        character.cast_spell("Attack Spell", &clock).unwrap();

        let result = character.cast_spell("Teleport Spell", &clock);

        match result {
            Err(DomainError::InvalidOperation(msg)) => {
                assert_eq!(msg, "not enough mana for Teleport Spell: need 50, have 20");
            }
            other => panic!("expected InvalidOperation, got {other:?}"),
        }
        assert_eq!(character.mana().unwrap().current(), 20);
    }

    #[test]
    fn test_cast_spell_by_warrior_is_rejected() {
        let mut character = fresh(Role::Warrior);

        let result = character.cast_spell("Attack Spell", &fixed_clock());

        match result {
            Err(DomainError::InvalidOperation(msg)) => {
                assert_eq!(
                    msg,
                    "only magicians can cast spells; character 53641 is Warrior"
                );
            }
            other => panic!("expected InvalidOperation, got {other:?}"),
        }
    }

    // --- perform_attack ---

    #[test]
    fn test_perform_attack_spends_stamina() {
        let mut character = fresh(Role::Warrior);

        character.perform_attack("Light Hit", &fixed_clock()).unwrap();

        assert_eq!(character.stamina().unwrap().current(), 85);
        assert_eq!(
            event_types(character.uncommitted_events()),
            vec![ATTACK_PERFORMED_EVENT_TYPE]
        );
    }

    #[test]
    fn test_perform_attack_by_generic_is_rejected() {
        let mut character = fresh(Role::Generic);
        assert!(matches!(
            character.perform_attack("Light Hit", &fixed_clock()),
            Err(DomainError::InvalidOperation(_))
        ));
    }

    // --- describe_status / Display ---

    #[test]
    fn test_describe_status_for_each_role() {
        assert_eq!(
            fresh(Role::Generic).describe_status(),
            "Level: 1\nExperience: 0/1000\nHealth: 100/100\n"
        );
        assert_eq!(
            fresh(Role::Magician).describe_status(),
            "Level: 1\nExperience: 0/1000\nHealth: 100/100\nMana: 100/100\n"
        );
        assert_eq!(
            fresh(Role::Warrior).describe_status(),
            "Level: 1\nExperience: 0/1000\nHealth: 100/100\nStamina: 100/100\n"
        );
    }

    #[test]
    fn test_display_shows_name_id_and_role() {
        assert_eq!(
            fresh(Role::Magician).to_string(),
            "OnlineGamer31 (id=53641), role: Magician"
        );
    }

    // --- events ---

    #[test]
    fn test_take_uncommitted_events_advances_version() {
        let clock = fixed_clock();
        let mut character = Character::create(9, "Alaric", Role::Generic, &clock).unwrap();
        character.apply_damage(10, &clock).unwrap();

        let taken = character.take_uncommitted_events();

        assert_eq!(taken.len(), 2);
        assert_eq!(character.version(), 2);
        assert!(character.uncommitted_events().is_empty());

        character.heal(5, &clock).unwrap();
        assert_eq!(character.uncommitted_events()[0].metadata().sequence_number, 3);
        assert_eq!(HEALED_EVENT_TYPE, character.uncommitted_events()[0].event_type());
    }
}
