//! Game vocabulary shared by the grammars.
//!
//! Every enum here can be looked up from its English name with a
//! case-insensitive `from_name`, which is what the grammars use to turn a
//! matched word into a value. Unknown names yield `None` so the calling
//! parser fails and backtracks.

use std::fmt;

use im::OrdMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the six ability scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Ability {
    /// Strength.
    Strength,
    /// Dexterity.
    Dexterity,
    /// Constitution.
    Constitution,
    /// Intelligence.
    Intelligence,
    /// Wisdom.
    Wisdom,
    /// Charisma.
    Charisma,
}

impl Ability {
    /// All abilities in stat block order.
    pub const ALL: [Self; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// Returns the lowercase English name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Constitution => "constitution",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
            Self::Charisma => "charisma",
        }
    }

    /// Looks up an ability by full name or three-letter abbreviation.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "strength" | "str" => Some(Self::Strength),
            "dexterity" | "dex" => Some(Self::Dexterity),
            "constitution" | "con" => Some(Self::Constitution),
            "intelligence" | "int" => Some(Self::Intelligence),
            "wisdom" | "wis" => Some(Self::Wisdom),
            "charisma" | "cha" => Some(Self::Charisma),
            _ => None,
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A damage type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[allow(missing_docs)]
pub enum DamageType {
    Acid,
    Bludgeoning,
    Cold,
    Fire,
    Force,
    Lightning,
    Necrotic,
    Piercing,
    Poison,
    Psychic,
    Radiant,
    Slashing,
    Thunder,
}

impl DamageType {
    /// All damage types in alphabetical order.
    pub const ALL: [Self; 13] = [
        Self::Acid,
        Self::Bludgeoning,
        Self::Cold,
        Self::Fire,
        Self::Force,
        Self::Lightning,
        Self::Necrotic,
        Self::Piercing,
        Self::Poison,
        Self::Psychic,
        Self::Radiant,
        Self::Slashing,
        Self::Thunder,
    ];

    /// Returns the lowercase English name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Acid => "acid",
            Self::Bludgeoning => "bludgeoning",
            Self::Cold => "cold",
            Self::Fire => "fire",
            Self::Force => "force",
            Self::Lightning => "lightning",
            Self::Necrotic => "necrotic",
            Self::Piercing => "piercing",
            Self::Poison => "poison",
            Self::Psychic => "psychic",
            Self::Radiant => "radiant",
            Self::Slashing => "slashing",
            Self::Thunder => "thunder",
        }
    }

    /// Looks up a damage type by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A condition that can be applied to a creature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[allow(missing_docs)]
pub enum CreatureCondition {
    Blinded,
    Charmed,
    Deafened,
    Exhaustion,
    Frightened,
    Grappled,
    Incapacitated,
    Invisible,
    Paralyzed,
    Petrified,
    Poisoned,
    Prone,
    Restrained,
    Stunned,
    Unconscious,
}

impl CreatureCondition {
    /// All conditions in alphabetical order.
    pub const ALL: [Self; 15] = [
        Self::Blinded,
        Self::Charmed,
        Self::Deafened,
        Self::Exhaustion,
        Self::Frightened,
        Self::Grappled,
        Self::Incapacitated,
        Self::Invisible,
        Self::Paralyzed,
        Self::Petrified,
        Self::Poisoned,
        Self::Prone,
        Self::Restrained,
        Self::Stunned,
        Self::Unconscious,
    ];

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blinded => "blinded",
            Self::Charmed => "charmed",
            Self::Deafened => "deafened",
            Self::Exhaustion => "exhaustion",
            Self::Frightened => "frightened",
            Self::Grappled => "grappled",
            Self::Incapacitated => "incapacitated",
            Self::Invisible => "invisible",
            Self::Paralyzed => "paralyzed",
            Self::Petrified => "petrified",
            Self::Poisoned => "poisoned",
            Self::Prone => "prone",
            Self::Restrained => "restrained",
            Self::Stunned => "stunned",
            Self::Unconscious => "unconscious",
        }
    }

    /// Looks up a condition by its canonical name only.
    ///
    /// Misspellings and synonyms are resolved by the grammar's condition
    /// vocabulary, not here.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for CreatureCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A creature size category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[allow(missing_docs)]
pub enum CreatureSize {
    Tiny,
    Small,
    Medium,
    Large,
    Huge,
    Gargantuan,
}

impl CreatureSize {
    /// Looks up a size by name or single-letter abbreviation.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "tiny" | "t" => Some(Self::Tiny),
            "small" | "s" => Some(Self::Small),
            "medium" | "m" => Some(Self::Medium),
            "large" | "l" => Some(Self::Large),
            "huge" | "h" => Some(Self::Huge),
            "gargantuan" | "g" => Some(Self::Gargantuan),
            _ => None,
        }
    }
}

/// The lawful/chaotic axis of an alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[allow(missing_docs)]
pub enum Moral {
    Lawful,
    Neutral,
    Chaotic,
}

impl Moral {
    /// Looks up the lawful/chaotic component by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "lawful" => Some(Self::Lawful),
            "neutral" => Some(Self::Neutral),
            "chaotic" => Some(Self::Chaotic),
            _ => None,
        }
    }
}

/// The good/evil axis of an alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[allow(missing_docs)]
pub enum Ethic {
    Good,
    Neutral,
    Evil,
}

impl Ethic {
    /// Looks up the good/evil component by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "good" => Some(Self::Good),
            "neutral" => Some(Self::Neutral),
            "evil" => Some(Self::Evil),
            _ => None,
        }
    }
}

/// A creature alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Alignment {
    /// No alignment at all (beasts, constructs).
    Unaligned,
    /// Any alignment.
    Any,
    /// Any alignment on the given lawful/chaotic axis.
    Moral(Moral),
    /// Any alignment on the given good/evil axis.
    Ethic(Ethic),
    /// A fully specified alignment.
    Both(Moral, Ethic),
}

impl Alignment {
    /// True neutral.
    pub const NEUTRAL: Self = Self::Both(Moral::Neutral, Ethic::Neutral);

    /// Parses an alignment phrase such as `chaotic neutral`, `unaligned`,
    /// `any alignment` or `any evil alignment`.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Option<Self> {
        let phrase = phrase.trim().to_lowercase();
        match phrase.as_str() {
            "any alignment" => return Some(Self::Any),
            "unaligned" => return Some(Self::Unaligned),
            "neutral" => return Some(Self::NEUTRAL),
            _ => {}
        }

        let words: Vec<&str> = phrase.split_whitespace().collect();
        match words.as_slice() {
            [moral, ethic] => Some(Self::Both(Moral::from_name(moral)?, Ethic::from_name(ethic)?)),
            ["any", axis, "alignment"] => Moral::from_name(axis)
                .filter(|m| *m != Moral::Neutral)
                .map(Self::Moral)
                .or_else(|| {
                    Ethic::from_name(axis)
                        .filter(|e| *e != Ethic::Neutral)
                        .map(Self::Ethic)
                }),
            _ => None,
        }
    }
}

/// A way a creature can move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[allow(missing_docs)]
pub enum MovementMode {
    Walk,
    Fly,
    Swim,
    Climb,
    Burrow,
}

impl MovementMode {
    /// Looks up a movement mode by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "walk" => Some(Self::Walk),
            "fly" => Some(Self::Fly),
            "swim" => Some(Self::Swim),
            "climb" => Some(Self::Climb),
            "burrow" => Some(Self::Burrow),
            _ => None,
        }
    }
}

/// Movement speeds in feet, keyed by mode.
pub type Movement = OrdMap<MovementMode, u32>;

/// A signed bonus such as an attack modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Modifier(pub i32);

impl Modifier {
    /// Returns the raw signed value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}
