//! Usage limits on features and actions.

use std::collections::BTreeSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a limited ability regains its uses.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Recharge {
    /// Uses come back after a short rest, a long rest, or either.
    Rest {
        /// Recovers on a short rest.
        short: bool,
        /// Recovers on a long rest.
        long: bool,
    },
    /// Uses come back each day.
    Day,
    /// A use comes back at the start of the creature's turn when a d6
    /// shows one of these faces.
    TurnStart(BTreeSet<u32>),
}

/// A usage limit such as `3/Day` or `Recharge 5-6`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LimitedUse {
    /// Number of uses available.
    pub amount: u32,
    /// How the uses come back, if at all.
    pub recharge: Option<Recharge>,
}

impl LimitedUse {
    /// Creates a limit of `amount` uses per day.
    #[must_use]
    pub const fn per_day(amount: u32) -> Self {
        Self {
            amount,
            recharge: Some(Recharge::Day),
        }
    }

    /// Creates a single use that recharges after the given rests.
    #[must_use]
    pub const fn per_rest(short: bool, long: bool) -> Self {
        Self {
            amount: 1,
            recharge: Some(Recharge::Rest { short, long }),
        }
    }

    /// Creates a single use recharging on the given d6 faces.
    #[must_use]
    pub fn recharge_on(faces: impl IntoIterator<Item = u32>) -> Self {
        Self {
            amount: 1,
            recharge: Some(Recharge::TurnStart(faces.into_iter().collect())),
        }
    }

    /// Returns the human-readable form, e.g. `3/Day` or `Recharge 5-6`.
    #[must_use]
    pub fn display_string(&self) -> String {
        let amount = if self.amount == 1 {
            "1 time".to_string()
        } else {
            format!("{} times", self.amount)
        };

        match &self.recharge {
            None | Some(Recharge::Rest { short: false, long: false }) => amount,
            Some(Recharge::Rest { short, long }) => {
                let rest = match (short, long) {
                    (true, true) => "Short or Long Rest",
                    (true, false) => "Short Rest",
                    _ => "Long Rest",
                };
                if self.amount == 1 {
                    format!("Recharges after a {rest}")
                } else {
                    format!("{amount} per {rest}")
                }
            }
            Some(Recharge::Day) => format!("{}/Day", self.amount),
            Some(Recharge::TurnStart(faces)) => {
                let faces = match (faces.first(), faces.last()) {
                    (Some(low), Some(high)) if low != high => format!("{low}-{high}"),
                    (Some(face), _) => face.to_string(),
                    _ => String::new(),
                };
                if self.amount == 1 {
                    format!("Recharge {faces}")
                } else {
                    format!("{amount}, Recharge {faces}")
                }
            }
        }
    }
}

impl fmt::Display for LimitedUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_string())
    }
}
