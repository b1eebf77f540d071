//! The structured form of a creature action.

use bestiary_foundation::{Ability, CreatureCondition, DamageType, DiceExpression, Modifier};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A parsed action: either a weapon/spell attack or a saving throw.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Action {
    /// `Melee Weapon Attack: +4 to hit, ...`
    WeaponAttack(WeaponAttack),
    /// `Dexterity Saving Throw: DC 18, ...`
    SavingThrow(SavingThrowAction),
}

impl Action {
    /// Returns the attack, if this is one.
    #[must_use]
    pub fn as_weapon_attack(&self) -> Option<&WeaponAttack> {
        match self {
            Self::WeaponAttack(attack) => Some(attack),
            Self::SavingThrow(_) => None,
        }
    }

    /// Returns the saving throw action, if this is one.
    #[must_use]
    pub fn as_saving_throw(&self) -> Option<&SavingThrowAction> {
        match self {
            Self::SavingThrow(action) => Some(action),
            Self::WeaponAttack(_) => None,
        }
    }
}

/// An attack roll action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeaponAttack {
    /// The attack bonus.
    pub hit_modifier: Modifier,
    /// Alternative bonuses listed in parentheses after the main one.
    pub conditional_hit_modifiers: Vec<ConditionalHitModifier>,
    /// Reach and range clauses, in source order.
    pub ranges: Vec<AttackRange>,
    /// What happens on a hit, in source order.
    pub effects: Vec<Effect>,
}

/// An attack bonus that applies only in some circumstance.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConditionalHitModifier {
    /// The bonus.
    pub hit_modifier: Modifier,
    /// When it applies, e.g. `with shortsword`.
    pub condition: String,
}

/// How far an attack reaches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum AttackRange {
    /// Melee reach in feet.
    Reach(u32),
    /// Normal and optional long range in feet.
    Range(u32, Option<u32>),
}

/// A saving throw that gates an effect or makes up an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SavingThrow {
    /// The ability used for the save.
    pub ability: Ability,
    /// Difficulty class.
    pub dc: u32,
    /// What a successful save does to the effect.
    pub save_effect: SaveEffect,
    /// For riders such as "fails by 5 or more", the margin.
    pub failure_margin: Option<u32>,
}

impl SavingThrow {
    /// A save that negates the effect on success.
    #[must_use]
    pub const fn new(ability: Ability, dc: u32) -> Self {
        Self {
            ability,
            dc,
            save_effect: SaveEffect::None,
            failure_margin: None,
        }
    }

    /// Builder method to set the success effect.
    #[must_use]
    pub const fn with_save_effect(mut self, save_effect: SaveEffect) -> Self {
        self.save_effect = save_effect;
        self
    }

    /// Builder method to set the failure margin.
    #[must_use]
    pub const fn with_failure_margin(mut self, margin: u32) -> Self {
        self.failure_margin = Some(margin);
        self
    }
}

/// What happens on a successful save.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum SaveEffect {
    /// The effect does not happen.
    #[default]
    None,
    /// Damage is halved.
    Half,
}

/// An action resolved by a saving throw instead of an attack roll.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SavingThrowAction {
    /// The save.
    pub saving_throw: SavingThrow,
    /// Who must save, e.g. `each creature in a 60-foot line`.
    pub target: Option<String>,
    /// Labeled outcome blocks, in source order.
    pub outcomes: Vec<Outcome>,
}

/// A labeled block of effects in a saving throw action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Outcome {
    /// Which result this block describes.
    pub outcome: OutcomeKind,
    /// What happens.
    pub effects: Vec<Effect>,
}

/// Saving throw result labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum OutcomeKind {
    /// `Failure:`
    Failure,
    /// `Success:`
    Success,
    /// `Failure or Success:`
    FailureOrSuccess,
    /// `First Failure:`
    FirstFailure,
    /// `Second Failure:`
    SecondFailure,
}

/// Melee or ranged delivery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum AttackType {
    /// In melee.
    Melee,
    /// At range.
    Ranged,
}

/// How a versatile weapon is held.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum WeaponGrip {
    /// One hand.
    OneHanded,
    /// Two hands.
    TwoHanded,
}

/// Circumstances gating an effect.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Conditions {
    /// Only in melee, or only at range.
    pub attack_type: Option<AttackType>,
    /// Only with this grip.
    pub grip: Option<WeaponGrip>,
    /// Only if this save is failed.
    pub saving_throw: Option<SavingThrow>,
    /// Any other circumstance, as text.
    pub other: Option<String>,
}

impl Conditions {
    /// Returns true if nothing gates the effect.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attack_type.is_none()
            && self.grip.is_none()
            && self.saving_throw.is_none()
            && self.other.is_none()
    }
}

/// Damage of one type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Damage {
    /// The average damage as printed.
    pub static_damage: u32,
    /// The roll, if printed.
    pub dice: Option<DiceExpression>,
    /// The damage type.
    pub damage_type: DamageType,
    /// Types the damage may be dealt as instead (`fire or cold damage`).
    pub alternative_types: Vec<DamageType>,
}

impl Damage {
    /// Creates damage with a roll.
    #[must_use]
    pub fn new(static_damage: u32, dice: Option<DiceExpression>, damage_type: DamageType) -> Self {
        Self {
            static_damage,
            dice,
            damage_type,
            alternative_types: Vec::new(),
        }
    }
}

/// A condition applied by an effect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AppliedCondition {
    /// The condition.
    pub condition: CreatureCondition,
    /// Qualifying text such as `escape dc 14`.
    pub comment: Option<String>,
}

/// One consequence of an attack or save.
///
/// An effect always carries at least one of damage, a condition, or
/// free text; [`Effect::new`] enforces this.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Effect {
    /// When the effect applies.
    pub conditions: Conditions,
    /// Damage dealt.
    pub damage: Vec<Damage>,
    /// Condition applied.
    pub condition: Option<AppliedCondition>,
    /// The effect replaces the attack's damage.
    pub replaces_damage: bool,
    /// Anything else, as text.
    pub other: Option<String>,
}

impl Effect {
    /// Creates an effect, or `None` if it would carry nothing.
    #[must_use]
    pub fn new(
        conditions: Conditions,
        damage: Vec<Damage>,
        condition: Option<AppliedCondition>,
        replaces_damage: bool,
        other: Option<String>,
    ) -> Option<Self> {
        let effect = Self {
            conditions,
            damage,
            condition,
            replaces_damage,
            other,
        };
        (!effect.is_empty()).then_some(effect)
    }

    /// An ungated damage effect.
    #[must_use]
    pub fn damage(damage: Vec<Damage>) -> Self {
        Self {
            conditions: Conditions::default(),
            damage,
            condition: None,
            replaces_damage: false,
            other: None,
        }
    }

    /// An ungated condition effect.
    #[must_use]
    pub fn condition(condition: CreatureCondition, comment: Option<String>) -> Self {
        Self {
            conditions: Conditions::default(),
            damage: Vec::new(),
            condition: Some(AppliedCondition { condition, comment }),
            replaces_damage: false,
            other: None,
        }
    }

    /// An ungated free-text effect.
    #[must_use]
    pub fn other(text: impl Into<String>) -> Self {
        Self {
            conditions: Conditions::default(),
            damage: Vec::new(),
            condition: None,
            replaces_damage: false,
            other: Some(text.into()),
        }
    }

    /// Builder method to set the gating conditions.
    #[must_use]
    pub fn with_conditions(mut self, conditions: Conditions) -> Self {
        self.conditions = conditions;
        self
    }

    /// Builder method to mark the effect as replacing damage.
    #[must_use]
    pub fn replacing_damage(mut self) -> Self {
        self.replaces_damage = true;
        self
    }

    /// Returns true if the effect carries no damage, condition, or text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.damage.is_empty() && self.condition.is_none() && self.other.is_none()
    }
}
