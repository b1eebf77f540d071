//! Dice arithmetic.
//!
//! A [`DiceExpression`] is a small expression tree of dice pools, integer
//! constants, and left-associative addition or subtraction, e.g.
//! `2d6 + 3` or `1d20 - 1`.

use std::fmt;
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single die with a number of sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Die {
    /// Number of faces.
    pub sides: u32,
}

impl Die {
    /// A twenty-sided die, used for attack rolls and checks.
    pub const D20: Self = Self { sides: 20 };

    /// Creates a die with the given number of sides.
    #[must_use]
    pub const fn new(sides: u32) -> Self {
        Self { sides }
    }
}

/// Binary operator in a compound expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
}

impl Operator {
    /// Returns the operator symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
        }
    }

    fn apply(self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Self::Add => lhs.saturating_add(rhs),
            Self::Subtract => lhs.saturating_sub(rhs),
        }
    }
}

/// An expression such as `3d8 + 4`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum DiceExpression {
    /// `count` dice of the given kind.
    Dice {
        /// Number of dice rolled.
        count: u32,
        /// The kind of die.
        die: Die,
    },
    /// A constant.
    Number(i32),
    /// `lhs op rhs`.
    Compound(Box<DiceExpression>, Operator, Box<DiceExpression>),
}

impl DiceExpression {
    /// Creates a dice pool such as `2d6`.
    #[must_use]
    pub const fn dice(count: u32, sides: u32) -> Self {
        Self::Dice {
            count,
            die: Die::new(sides),
        }
    }

    /// Creates a constant.
    #[must_use]
    pub const fn number(n: i32) -> Self {
        Self::Number(n)
    }

    /// Creates `lhs op rhs`.
    #[must_use]
    pub fn compound(lhs: Self, op: Operator, rhs: Self) -> Self {
        Self::Compound(Box::new(lhs), op, Box::new(rhs))
    }

    /// The expression a bare attack modifier stands for: `1d20 + n`.
    #[must_use]
    pub fn d20_check(modifier: i32) -> Self {
        let d20 = Self::dice(1, Die::D20.sides);
        if modifier < 0 {
            d20 - Self::Number(modifier.saturating_neg())
        } else {
            d20 + Self::Number(modifier)
        }
    }

    /// Total number of dice rolled, saturating at `u32::MAX`.
    #[must_use]
    pub fn dice_count(&self) -> u32 {
        match self {
            Self::Dice { count, .. } => *count,
            Self::Number(_) => 0,
            Self::Compound(lhs, _, rhs) => lhs.dice_count().saturating_add(rhs.dice_count()),
        }
    }

    /// Whether any term rolls at least one die.
    #[must_use]
    pub fn has_dice(&self) -> bool {
        match self {
            Self::Dice { count, .. } => *count > 0,
            Self::Number(_) => false,
            Self::Compound(lhs, _, rhs) => lhs.has_dice() || rhs.has_dice(),
        }
    }

    /// Smallest possible result.
    #[must_use]
    pub fn minimum(&self) -> i64 {
        match self {
            Self::Dice { count, .. } => i64::from(*count),
            Self::Number(n) => i64::from(*n),
            Self::Compound(lhs, op, rhs) => match op {
                Operator::Add => lhs.minimum().saturating_add(rhs.minimum()),
                Operator::Subtract => lhs.minimum().saturating_sub(rhs.maximum()),
            },
        }
    }

    /// Largest possible result.
    #[must_use]
    pub fn maximum(&self) -> i64 {
        match self {
            Self::Dice { count, die } => i64::from(*count).saturating_mul(i64::from(die.sides)),
            Self::Number(n) => i64::from(*n),
            Self::Compound(lhs, op, rhs) => match op {
                Operator::Add => lhs.maximum().saturating_add(rhs.maximum()),
                Operator::Subtract => lhs.maximum().saturating_sub(rhs.minimum()),
            },
        }
    }

    /// Result when every die rolls its average, rounded down.
    #[must_use]
    pub fn average(&self) -> i64 {
        match self {
            Self::Dice { count, die } => {
                i64::from(*count).saturating_mul(i64::from(die.sides) + 1) / 2
            }
            Self::Number(n) => i64::from(*n),
            Self::Compound(lhs, op, rhs) => op.apply(lhs.average(), rhs.average()),
        }
    }
}

impl From<i32> for DiceExpression {
    fn from(n: i32) -> Self {
        Self::Number(n)
    }
}

impl<T: Into<DiceExpression>> Add<T> for DiceExpression {
    type Output = Self;

    fn add(self, rhs: T) -> Self {
        Self::compound(self, Operator::Add, rhs.into())
    }
}

impl<T: Into<DiceExpression>> Sub<T> for DiceExpression {
    type Output = Self;

    fn sub(self, rhs: T) -> Self {
        Self::compound(self, Operator::Subtract, rhs.into())
    }
}

impl fmt::Display for DiceExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dice { count, die } => write!(f, "{count}d{}", die.sides),
            Self::Number(n) => write!(f, "{n}"),
            Self::Compound(lhs, op, rhs) => write!(f, "{lhs} {} {rhs}", op.symbol()),
        }
    }
}
